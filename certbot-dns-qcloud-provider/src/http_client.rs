//! HTTP helpers shared by transports
//!
//! Transports sign and build their own `RequestBuilder`; this module sends it,
//! logs the exchange and turns HTTP-level failures into [`TransportError`].
//! Requests are sent exactly once.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - provider name, for logging
    /// * `method_name` - HTTP method, for logging
    /// * `url_or_action` - URL or action name, for logging
    ///
    /// # Errors
    /// * `TransportError::Timeout` - the request timed out
    /// * `TransportError::RateLimited` - HTTP 429
    /// * `TransportError::NetworkError` - connection failure or HTTP 502/503/504
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), TransportError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                TransportError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Read Retry-After before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(TransportError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(TransportError::NetworkError {
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| TransportError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parses a JSON response body.
    ///
    /// # Errors
    /// * `TransportError::ParseError` - the body is not valid JSON for `T`
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            TransportError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
