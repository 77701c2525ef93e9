//! 腾讯云 `DNSPod` transport (API 3.0)

mod error;
mod http;
mod sign;
mod transport;
mod types;

use reqwest::Client;

use crate::credentials::Credentials;
use crate::providers::common::create_http_client;

pub(crate) use types::{CreateRecordResponse, DeleteRecordResponse, RecordListResponse, TencentResponse};

pub(crate) const DNSPOD_API_HOST: &str = "dnspod.tencentcloudapi.com";
pub(crate) const DNSPOD_SERVICE: &str = "dnspod";
pub(crate) const DNSPOD_VERSION: &str = "2021-03-23";

/// `DescribeRecordList` error code for a zone without records
pub(crate) const NO_DATA_OF_RECORD: &str = "ResourceNotFound.NoDataOfRecord";

/// 腾讯云 `DNSPod` transport
///
/// Every call is a single signed request; nothing is retried.
pub struct DnspodTransport {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
}

impl DnspodTransport {
    /// Builds the transport and its HTTP client.
    pub fn new(credentials: Credentials) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: create_http_client()?,
            credentials,
        })
    }
}
