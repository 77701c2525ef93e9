//! DNS-01 authenticator: `perform` creates the challenge record, `cleanup`
//! removes it again.

use certbot_dns_qcloud_provider::{DomainResolver, RecordClient, Result};

use crate::config::AuthenticatorConfig;

/// One-line plugin description.
pub const DESCRIPTION: &str =
    "Obtain certificates using a DNS TXT record (if you are using Qcloud DNS for DNS).";

/// Longer help text.
pub const MORE_INFO: &str =
    "This plugin sets up a DNS TXT record for the dns-01 challenge by using the Qcloud DNSPod API.";

/// Label prepended to the validated domain to form the challenge record name.
pub const CHALLENGE_LABEL: &str = "_acme-challenge";

/// A single challenge as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRequest {
    pub domain_name: String,
    pub record_name: String,
    pub record_value: String,
}

impl ChallengeRequest {
    pub fn new(
        domain_name: impl Into<String>,
        record_name: impl Into<String>,
        record_value: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            record_name: record_name.into(),
            record_value: record_value.into(),
        }
    }

    /// Challenge for `domain` with the standard `_acme-challenge.<domain>` name.
    ///
    /// A wildcard prefix (`*.`) is validated on the base name.
    pub fn for_domain(domain: &str, validation: impl Into<String>) -> Self {
        let domain = domain.trim().trim_start_matches("*.");
        Self::new(domain, format!("{CHALLENGE_LABEL}.{domain}"), validation)
    }
}

/// Resolves the zone of each challenge and creates or removes its record.
pub struct ChallengeAuthenticator {
    resolver: DomainResolver,
    client: RecordClient,
}

impl ChallengeAuthenticator {
    pub fn new(resolver: DomainResolver, client: RecordClient) -> Self {
        Self { resolver, client }
    }

    /// Loads credentials and builds the `DNSPod` client.
    ///
    /// Fails immediately when the credentials file cannot be used.
    pub fn from_config(config: &AuthenticatorConfig) -> Result<Self> {
        let client = RecordClient::from_credentials_file(&config.credentials)?;
        let resolver = if config.extra_suffixes.is_empty() {
            DomainResolver::default()
        } else {
            DomainResolver::with_extra_suffixes(&config.extra_suffixes)
        };
        Ok(Self::new(resolver, client))
    }

    /// Creates the TXT record `record_name` = `record_value` in the zone of `domain_name`.
    pub async fn perform(
        &self,
        domain_name: &str,
        record_name: &str,
        record_value: &str,
    ) -> Result<()> {
        let zone = self.resolver.resolve(domain_name)?;
        log::info!("perform: {record_name} in zone {zone}");
        self.client
            .create_txt_record(&zone, record_name, record_value)
            .await?;
        Ok(())
    }

    /// Removes the TXT record `record_name` = `record_value` from the zone of `domain_name`.
    pub async fn cleanup(
        &self,
        domain_name: &str,
        record_name: &str,
        record_value: &str,
    ) -> Result<()> {
        let zone = self.resolver.resolve(domain_name)?;
        log::info!("cleanup: {record_name} in zone {zone}");
        self.client
            .delete_txt_record(&zone, record_name, record_value)
            .await
    }

    pub async fn perform_request(&self, request: &ChallengeRequest) -> Result<()> {
        self.perform(
            &request.domain_name,
            &request.record_name,
            &request.record_value,
        )
        .await
    }

    pub async fn cleanup_request(&self, request: &ChallengeRequest) -> Result<()> {
        self.cleanup(
            &request.domain_name,
            &request.record_name,
            &request.record_value,
        )
        .await
    }
}
