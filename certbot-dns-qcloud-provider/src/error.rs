use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a [`DnsRpc`](crate::DnsRpc) transport.
///
/// Variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout) and
/// [`RateLimited`](Self::RateLimited) describe infrastructure faults. They are
/// never retried inside this crate; the host decides whether to re-run the
/// whole challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum TransportError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit was exceeded.
    RateLimited {
        /// Seconds to wait, when the server sent a `Retry-After` header.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The credentials were rejected by the remote API.
    InvalidCredentials {
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The credentials are valid but not allowed to operate on the zone.
    PermissionDenied {
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provider does not host the requested zone.
    DomainNotFound {
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provider rejected a request parameter.
    InvalidParameter {
        /// Parameter name.
        param: String,
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded.
    ParseError {
        /// Error details.
        detail: String,
    },

    /// The request body could not be encoded.
    SerializationError {
        /// Error details.
        detail: String,
    },

    /// Any provider error without a dedicated variant.
    Unknown {
        /// Raw error code from the provider API, if available.
        raw_code: Option<String>,
        /// Raw error message from the provider API.
        raw_message: String,
    },
}

impl TransportError {
    /// Whether the failure is caused by configuration or input rather than infrastructure.
    ///
    /// `true` maps to `warn` level logging, `false` to `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::DomainNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::DomainNotFound { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Zone not hosted by provider: {msg}")
                } else {
                    write!(f, "Zone not hosted by provider")
                }
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::Unknown {
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "{code}: {raw_message}")
                } else {
                    write!(f, "{raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Errors surfaced to the challenge host.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The hostname does not end in any known public suffix.
    #[error("Cannot find a registrable domain for '{domain}'")]
    DomainNotFound { domain: String },

    /// The credentials file could not be used, or the transport could not be built from it.
    #[error("Failed to load credentials from '{}': {detail}", .path.display())]
    CredentialLoad { path: PathBuf, detail: String },

    /// The delete search went through every page without finding the record.
    #[error("TXT record '{record_name}' with value '{value}' cannot be found in zone '{domain}'")]
    RecordNotFound {
        domain: String,
        record_name: String,
        value: String,
    },

    /// A remote call failed.
    #[error("{action} failed for TXT record '{record_name}' in zone '{domain}': {source}")]
    Transport {
        action: &'static str,
        domain: String,
        record_name: String,
        #[source]
        source: TransportError,
    },
}

impl ProviderError {
    /// Whether the failure is caused by configuration or input rather than infrastructure.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DomainNotFound { .. }
            | Self::CredentialLoad { .. }
            | Self::RecordNotFound { .. } => true,
            Self::Transport { source, .. } => source.is_expected(),
        }
    }

    pub(crate) fn credential_load(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        Self::CredentialLoad {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
