//! Credentials file loading
//!
//! The file is a JSON object `{"secretId": "...", "secretKey": "..."}` and must
//! only be accessible by its owner.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::mask_secret;

/// Tencent Cloud API key pair.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub secret_id: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_id", &mask_secret(&self.secret_id))
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Reads and validates a credentials file.
    ///
    /// Fails with [`ProviderError::CredentialLoad`] when the file is missing,
    /// readable by group or others, not valid JSON, or has an empty field.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        validate_file_permissions(path)?;

        let content =
            fs::read_to_string(path).map_err(|e| ProviderError::credential_load(path, e))?;
        let credentials: Self = serde_json::from_str(&content)
            .map_err(|e| ProviderError::credential_load(path, format!("invalid JSON: {e}")))?;

        if credentials.secret_id.trim().is_empty() {
            return Err(ProviderError::credential_load(path, "secretId is empty"));
        }
        if credentials.secret_key.trim().is_empty() {
            return Err(ProviderError::credential_load(path, "secretKey is empty"));
        }

        log::debug!(
            "Loaded credentials from {} (secretId {})",
            path.display(),
            mask_secret(&credentials.secret_id)
        );
        Ok(credentials)
    }
}

/// Rejects credential files that grant any access to group or others.
#[cfg(unix)]
pub fn validate_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|e| ProviderError::credential_load(path, e))?;
    if !metadata.is_file() {
        return Err(ProviderError::credential_load(path, "not a regular file"));
    }

    let mode = metadata.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        return Err(ProviderError::credential_load(
            path,
            format!("unsafe permissions {mode:o}, expected 600 or stricter"),
        ));
    }
    Ok(())
}

/// Only checks that the file exists; there is no portable owner-only mode here.
#[cfg(not(unix))]
pub fn validate_file_permissions(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| ProviderError::credential_load(path, e))?;
    if !metadata.is_file() {
        return Err(ProviderError::credential_load(path, "not a regular file"));
    }
    Ok(())
}
