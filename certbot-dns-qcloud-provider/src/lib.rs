//! # certbot-dns-qcloud-provider
//!
//! Tencent Cloud `DNSPod` client for the ACME DNS-01 challenge: creates the
//! `_acme-challenge` TXT record and later finds and deletes exactly that
//! record again.
//!
//! ## Components
//!
//! | Item | Role |
//! |------|------|
//! | [`DomainResolver`] | maps a challenge hostname to the zone (apex domain) |
//! | [`RecordClient`] | creates TXT records; pages through the zone to delete one |
//! | [`DnsRpc`] | the three remote actions: create, list, delete |
//! | [`DnspodTransport`] | [`DnsRpc`] over Tencent Cloud API 3.0 (TC3-HMAC-SHA256) |
//! | [`Credentials`] | `{"secretId", "secretKey"}` file, owner-only permissions |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certbot_dns_qcloud_provider::{DomainResolver, RecordClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = DomainResolver::default();
//!     let client = RecordClient::from_credentials_file("/etc/letsencrypt/qcloud.json")?;
//!
//!     let zone = resolver.resolve("www.example.com.cn")?;
//!     let name = "_acme-challenge.www.example.com.cn";
//!
//!     client.create_txt_record(&zone, name, "token").await?;
//!     // ... wait for propagation, let the CA validate ...
//!     client.delete_txt_record(&zone, name, "token").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::DomainNotFound`]: no known public suffix matches
//! - [`ProviderError::CredentialLoad`]: credentials file unusable
//! - [`ProviderError::RecordNotFound`]: cleanup found no matching record
//! - [`ProviderError::Transport`]: a remote call failed; see [`TransportError`]
//!
//! Nothing is retried internally.

mod credentials;
mod domain;
mod error;
mod http_client;
mod providers;
mod record_client;
mod traits;
mod types;
mod utils;

pub use credentials::{Credentials, validate_file_permissions};
pub use domain::{DEFAULT_SUFFIXES, DomainResolver};
pub use error::{ProviderError, Result, TransportError};
pub use providers::DnspodTransport;
pub use record_client::{RecordClient, find_challenge_record, page_count};
pub use traits::DnsRpc;
pub use types::{
    CreateRecordRequest, DEFAULT_RECORD_LINE, DEFAULT_TTL, DnsRecord, PAGE_SIZE, RecordPage,
    TXT_RECORD_TYPE,
};
