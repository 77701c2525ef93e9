//! Command line of the certbot hook binary

use std::path::PathBuf;

use certbot_dns_qcloud::{
    AuthenticatorConfig, ChallengeRequest, DEFAULT_PROPAGATION_SECONDS, DESCRIPTION, MORE_INFO,
};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "certbot-dns-qcloud", version, about = DESCRIPTION, long_about = MORE_INFO)]
pub struct Cli {
    /// Path to the Qcloud secret JSON file (`{"secretId", "secretKey"}`, mode 600)
    #[arg(long, env = "QCLOUD_CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,

    /// Seconds to wait for DNS propagation after creating the record
    #[arg(
        long,
        env = "QCLOUD_PROPAGATION_SECONDS",
        default_value_t = DEFAULT_PROPAGATION_SECONDS,
        global = true
    )]
    pub propagation_seconds: u64,

    /// Extra public suffix tried before the built-in list (repeatable, comma separated)
    #[arg(long = "extra-suffix", value_delimiter = ',', global = true)]
    pub extra_suffixes: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the challenge TXT record (certbot --manual-auth-hook)
    Auth(ChallengeArgs),
    /// Remove the challenge TXT record (certbot --manual-cleanup-hook)
    Cleanup(ChallengeArgs),
}

#[derive(Debug, Args)]
pub struct ChallengeArgs {
    /// Domain being validated
    #[arg(long, env = "CERTBOT_DOMAIN")]
    pub domain: String,

    /// Validation string to publish
    #[arg(long, env = "CERTBOT_VALIDATION")]
    pub validation: String,

    /// Full record name; defaults to `_acme-challenge.<domain>`
    #[arg(long)]
    pub record_name: Option<String>,
}

impl ChallengeArgs {
    pub fn to_request(&self) -> ChallengeRequest {
        let mut request = ChallengeRequest::for_domain(&self.domain, self.validation.clone());
        if let Some(record_name) = &self.record_name {
            request.record_name.clone_from(record_name);
        }
        request
    }
}

impl Cli {
    /// Builds the authenticator configuration; `--credentials` is required.
    pub fn config(&self) -> anyhow::Result<AuthenticatorConfig> {
        let credentials = self.credentials.clone().ok_or_else(|| {
            anyhow::anyhow!("missing --credentials (or QCLOUD_CREDENTIALS): path to Qcloud DNS access secret JSON file")
        })?;
        Ok(AuthenticatorConfig {
            credentials,
            propagation_seconds: self.propagation_seconds,
            extra_suffixes: self.extra_suffixes.clone(),
        })
    }
}
