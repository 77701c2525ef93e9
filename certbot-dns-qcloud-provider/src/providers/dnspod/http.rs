//! `DNSPod` HTTP 请求方法

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::TransportError;
use crate::http_client::HttpUtils;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{DNSPOD_API_HOST, DNSPOD_VERSION, DnspodTransport, TencentResponse};

impl DnspodTransport {
    /// 执行腾讯云 API 请求（不重试）
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        // 1. 序列化请求体
        let payload =
            serde_json::to_string(body).map_err(|e| TransportError::SerializationError {
                detail: e.to_string(),
            })?;

        log::debug!("[{}] {action} Request Body: {payload}", self.provider_name());

        // 2. 生成签名
        let timestamp = Utc::now().timestamp();
        let authorization = self.sign(action, &payload, timestamp);

        // 3. 发送请求
        let url = format!("https://{DNSPOD_API_HOST}");
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Host", DNSPOD_API_HOST)
            .header("X-TC-Action", action)
            .header("X-TC-Version", DNSPOD_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(payload);

        let (_status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "POST",
            &format!("Action: {action}"),
        )
        .await?;

        // 4. 解析响应
        let tc_response: TencentResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        // 5. 处理错误
        if let Some(error) = tc_response.response.error {
            log::debug!(
                "[{}] {action} API error: {} - {} (RequestId: {})",
                self.provider_name(),
                error.code,
                error.message,
                tc_response.response.request_id.as_deref().unwrap_or("-")
            );
            return Err(self.map_error(RawApiError::with_code(&error.code, &error.message)));
        }

        // 6. 提取数据
        tc_response
            .response
            .data
            .ok_or_else(|| self.parse_error(format!("Missing data in {action} response")))
    }
}
