//! Tencent Cloud `DNSPod` API type definition

use serde::Deserialize;

use crate::types::{DnsRecord, RecordPage};

// ============ Tencent Cloud API response structure ============

/// Generic Tencent Cloud response envelope: `{"Response": {...}}`.
#[derive(Debug, Deserialize)]
pub struct TencentResponse<T> {
    #[serde(rename = "Response")]
    pub response: TencentResponseBody<T>,
}

/// Body of the envelope; carries either `Error` or the action's fields.
#[derive(Debug, Deserialize)]
pub struct TencentResponseBody<T> {
    #[serde(rename = "Error")]
    pub error: Option<TencentError>,
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

/// Error payload nested inside Tencent Cloud responses.
#[derive(Debug, Deserialize)]
pub struct TencentError {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
}

// ============ DNSPod record related structure ============

/// Response payload for `DescribeRecordList`.
#[derive(Debug, Deserialize)]
pub struct RecordListResponse {
    #[serde(rename = "RecordList")]
    pub record_list: Option<Vec<DnspodRecord>>,
    #[serde(rename = "RecordCountInfo")]
    pub record_count_info: Option<RecordCountInfo>,
}

impl From<RecordListResponse> for RecordPage {
    fn from(response: RecordListResponse) -> Self {
        Self {
            total: response
                .record_count_info
                .and_then(|c| c.total_count)
                .unwrap_or(0),
            records: response
                .record_list
                .unwrap_or_default()
                .into_iter()
                .map(DnsRecord::from)
                .collect(),
        }
    }
}

/// Record count metadata from `DescribeRecordList`.
#[derive(Debug, Deserialize)]
pub struct RecordCountInfo {
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

/// DNS record item returned by `DNSPod` record APIs.
#[derive(Debug, Deserialize)]
pub struct DnspodRecord {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
}

impl From<DnspodRecord> for DnsRecord {
    fn from(record: DnspodRecord) -> Self {
        Self {
            id: record.record_id,
            record_type: record.record_type,
            name: record.name,
            value: record.value,
            ttl: record.ttl,
        }
    }
}

/// Response payload for `CreateRecord`.
#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}

/// Response payload for `DeleteRecord`.
#[derive(Debug, Deserialize)]
pub struct DeleteRecordResponse {}
