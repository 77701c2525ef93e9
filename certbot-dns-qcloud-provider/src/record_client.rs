//! Challenge TXT record creation and removal
//!
//! The provider can only delete records by id, so removal lists the whole
//! zone page by page and matches on record type, name and value.

use std::path::Path;
use std::sync::Arc;

use crate::credentials::Credentials;
use crate::error::{ProviderError, Result, TransportError};
use crate::providers::DnspodTransport;
use crate::providers::common::full_name_to_relative;
use crate::traits::DnsRpc;
use crate::types::{CreateRecordRequest, DnsRecord, PAGE_SIZE, TXT_RECORD_TYPE};
use crate::utils::log_sanitizer::truncate_for_log;

/// Number of listing pages needed for `total` records.
pub fn page_count(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Offset of the 1-based `page`.
fn page_offset(page: u32, page_size: u32) -> u32 {
    (page - 1) * page_size
}

/// First TXT record named `sub_domain` holding exactly `value`, in listing order.
pub fn find_challenge_record<'a, I>(records: I, sub_domain: &str, value: &str) -> Option<&'a DnsRecord>
where
    I: IntoIterator<Item = &'a DnsRecord>,
{
    records.into_iter().find(|record| {
        record.record_type == TXT_RECORD_TYPE && record.name == sub_domain && record.value == value
    })
}

/// Creates and removes ACME challenge records in a zone.
pub struct RecordClient {
    transport: Arc<dyn DnsRpc>,
    page_size: u32,
}

impl RecordClient {
    pub fn new(transport: Arc<dyn DnsRpc>) -> Self {
        Self {
            transport,
            page_size: PAGE_SIZE,
        }
    }

    /// Builds a client on the `DNSPod` transport from a credentials file.
    ///
    /// Any failure (file, permissions, JSON, HTTP client setup) is returned as
    /// [`ProviderError::CredentialLoad`]; no client is produced.
    pub fn from_credentials_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let credentials = Credentials::load(path)?;
        let transport = DnspodTransport::new(credentials)
            .map_err(|e| ProviderError::credential_load(path, e))?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Creates the TXT record `record_name` = `record_value` in zone `domain`.
    ///
    /// Not idempotent: each call creates a new record. Returns the record id.
    pub async fn create_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_value: &str,
    ) -> Result<u64> {
        let sub_domain = full_name_to_relative(record_name, domain);
        let request = CreateRecordRequest::txt(domain, &sub_domain, record_value);

        log::info!(
            "Creating TXT record {sub_domain} in {domain} with value {}",
            truncate_for_log(record_value)
        );

        let record_id = self
            .transport
            .create_record(&request)
            .await
            .map_err(|e| transport_error("CreateRecord", domain, &sub_domain, e))?;

        log::info!("Created TXT record {sub_domain}.{domain}, record id: {record_id}");
        Ok(record_id)
    }

    /// Deletes the TXT record `record_name` = `record_value` from zone `domain`.
    ///
    /// Fails with [`ProviderError::RecordNotFound`] when no listing page holds
    /// the record.
    pub async fn delete_txt_record(
        &self,
        domain: &str,
        record_name: &str,
        record_value: &str,
    ) -> Result<()> {
        let sub_domain = full_name_to_relative(record_name, domain);

        let Some(record) = self.search(domain, &sub_domain, record_value).await? else {
            log::warn!("TXT record {sub_domain}.{domain} not found in any listing page");
            return Err(ProviderError::RecordNotFound {
                domain: domain.to_string(),
                record_name: sub_domain,
                value: record_value.to_string(),
            });
        };

        log::info!(
            "Deleting TXT record {sub_domain}.{domain}, record id: {}",
            record.id
        );

        self.transport
            .delete_record(domain, record.id)
            .await
            .map_err(|e| transport_error("DeleteRecord", domain, &sub_domain, e))?;

        log::info!("Deleted TXT record {sub_domain}.{domain}");
        Ok(())
    }

    /// Scans every listing page in order and returns the first match.
    ///
    /// All pages are fetched even after a match; only the scan inside a page
    /// stops early.
    async fn search(&self, domain: &str, sub_domain: &str, value: &str) -> Result<Option<DnsRecord>> {
        let list = |page: u32| async move {
            let offset = page_offset(page, self.page_size);
            self.transport
                .list_records(domain, offset, self.page_size)
                .await
                .map_err(|e| transport_error("DescribeRecordList", domain, sub_domain, e))
        };

        let first = list(1).await?;
        let pages = page_count(first.total, self.page_size);
        log::debug!(
            "Zone {domain} has {} records in {pages} page(s)",
            first.total
        );

        let mut found = find_challenge_record(&first.records, sub_domain, value).cloned();

        for page in 2..=pages {
            let records = list(page).await?.records;
            if found.is_none() {
                found = find_challenge_record(&records, sub_domain, value).cloned();
            }
        }

        Ok(found)
    }
}

fn transport_error(
    action: &'static str,
    domain: &str,
    record_name: &str,
    source: TransportError,
) -> ProviderError {
    if source.is_expected() {
        log::warn!("{action} rejected for {record_name}.{domain}: {source}");
    } else {
        log::error!("{action} failed for {record_name}.{domain}: {source}");
    }
    ProviderError::Transport {
        action,
        domain: domain.to_string(),
        record_name: record_name.to_string(),
        source,
    }
}
