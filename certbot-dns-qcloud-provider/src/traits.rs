use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{CreateRecordRequest, RecordPage};

/// Raw provider error, before mapping.
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Maps provider-specific error codes onto [`TransportError`].
pub(crate) trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError) -> TransportError;

    fn parse_error(&self, detail: impl ToString) -> TransportError {
        TransportError::ParseError {
            detail: detail.to_string(),
        }
    }

    fn unknown_error(&self, raw: RawApiError) -> TransportError {
        TransportError::Unknown {
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote record API used by [`RecordClient`](crate::RecordClient).
///
/// Each method is a single remote call. Implementations must not retry.
#[async_trait]
pub trait DnsRpc: Send + Sync {
    /// Creates a record and returns its provider id.
    async fn create_record(&self, req: &CreateRecordRequest) -> Result<u64, TransportError>;

    /// Lists up to `length` records of `domain` starting at `offset`.
    async fn list_records(
        &self,
        domain: &str,
        offset: u32,
        length: u32,
    ) -> Result<RecordPage, TransportError>;

    /// Deletes a record by id.
    async fn delete_record(&self, domain: &str, record_id: u64) -> Result<(), TransportError>;
}
