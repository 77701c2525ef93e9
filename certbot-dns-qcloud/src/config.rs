//! Host-side options of the authenticator

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default wait, in seconds, between record creation and validation.
pub const DEFAULT_PROPAGATION_SECONDS: u64 = 60;

/// Authenticator configuration.
///
/// `propagation_seconds` belongs to the host: the authenticator never reads
/// it, the hook binary waits for it after `auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorConfig {
    /// Path to the `{"secretId", "secretKey"}` JSON file.
    pub credentials: PathBuf,
    #[serde(default = "default_propagation_seconds")]
    pub propagation_seconds: u64,
    /// Public suffixes tested before the built-in list.
    #[serde(default)]
    pub extra_suffixes: Vec<String>,
}

fn default_propagation_seconds() -> u64 {
    DEFAULT_PROPAGATION_SECONDS
}

impl AuthenticatorConfig {
    pub fn new(credentials: impl Into<PathBuf>) -> Self {
        Self {
            credentials: credentials.into(),
            propagation_seconds: DEFAULT_PROPAGATION_SECONDS,
            extra_suffixes: Vec::new(),
        }
    }
}
