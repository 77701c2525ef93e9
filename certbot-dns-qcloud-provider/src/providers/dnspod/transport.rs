//! `DNSPod` DnsRpc trait 实现

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TransportError;
use crate::traits::DnsRpc;
use crate::types::{CreateRecordRequest, RecordPage};

use super::{
    CreateRecordResponse, DeleteRecordResponse, DnspodTransport, NO_DATA_OF_RECORD,
    RecordListResponse,
};

#[async_trait]
impl DnsRpc for DnspodTransport {
    async fn create_record(&self, req: &CreateRecordRequest) -> Result<u64, TransportError> {
        #[derive(Serialize)]
        struct CreateRecordRequestBody<'a> {
            #[serde(rename = "Domain")]
            domain: &'a str,
            #[serde(rename = "SubDomain")]
            sub_domain: &'a str,
            #[serde(rename = "RecordType")]
            record_type: &'a str,
            #[serde(rename = "RecordLine")]
            record_line: &'a str,
            #[serde(rename = "Value")]
            value: &'a str,
            #[serde(rename = "TTL")]
            ttl: u32,
        }

        let body = CreateRecordRequestBody {
            domain: &req.domain,
            sub_domain: &req.sub_domain,
            record_type: &req.record_type,
            record_line: &req.record_line,
            value: &req.value,
            ttl: req.ttl,
        };

        let response: CreateRecordResponse = self.request("CreateRecord", &body).await?;
        Ok(response.record_id)
    }

    async fn list_records(
        &self,
        domain: &str,
        offset: u32,
        length: u32,
    ) -> Result<RecordPage, TransportError> {
        #[derive(Serialize)]
        struct DescribeRecordListRequest<'a> {
            #[serde(rename = "Domain")]
            domain: &'a str,
            #[serde(rename = "Offset")]
            offset: u32,
            #[serde(rename = "Limit")]
            limit: u32,
        }

        let body = DescribeRecordListRequest {
            domain,
            offset,
            limit: length,
        };

        match self
            .request::<RecordListResponse, _>("DescribeRecordList", &body)
            .await
        {
            Ok(response) => Ok(RecordPage::from(response)),
            // 空 zone 返回错误码而不是空列表
            Err(TransportError::Unknown { raw_code, .. })
                if raw_code.as_deref() == Some(NO_DATA_OF_RECORD) =>
            {
                Ok(RecordPage::empty())
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_record(&self, domain: &str, record_id: u64) -> Result<(), TransportError> {
        #[derive(Serialize)]
        struct DeleteRecordRequest<'a> {
            #[serde(rename = "Domain")]
            domain: &'a str,
            #[serde(rename = "RecordId")]
            record_id: u64,
        }

        let body = DeleteRecordRequest { domain, record_id };

        let _response: DeleteRecordResponse = self.request("DeleteRecord", &body).await?;
        Ok(())
    }
}
