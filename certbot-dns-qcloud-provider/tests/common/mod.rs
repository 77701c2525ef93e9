//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use certbot_dns_qcloud_provider::{
    CreateRecordRequest, DnsRecord, DnsRpc, RecordPage, TransportError,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// A remote call seen by [`InMemoryZone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create { sub_domain: String, value: String },
    List { offset: u32, length: u32 },
    Delete { record_id: u64 },
}

/// 内存中的 zone，按插入顺序列出记录
pub struct InMemoryZone {
    domain: String,
    records: Mutex<Vec<DnsRecord>>,
    next_id: Mutex<u64>,
    calls: Mutex<Vec<Call>>,
    fail_list_at_offset: Option<u32>,
}

impl InMemoryZone {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            records: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            calls: Mutex::new(Vec::new()),
            fail_list_at_offset: None,
        }
    }

    /// Zone pre-filled with `count` A records named `host-<n>`.
    pub fn with_filler(domain: &str, count: u32) -> Self {
        let zone = Self::new(domain);
        for n in 0..count {
            zone.insert("A", &format!("host-{n}"), "192.0.2.1");
        }
        zone
    }

    /// Listing at `offset` fails with a network error.
    pub fn failing_list_at(mut self, offset: u32) -> Self {
        self.fail_list_at_offset = Some(offset);
        self
    }

    pub fn insert(&self, record_type: &str, name: &str, value: &str) -> u64 {
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        self.records.lock().unwrap().push(DnsRecord {
            id,
            record_type: record_type.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            ttl: 600,
        });
        id
    }

    pub fn records(&self) -> Vec<DnsRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn txt_records(&self, name: &str, value: &str) -> Vec<DnsRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.record_type == "TXT" && r.name == name && r.value == value)
            .collect()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_offsets(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::List { offset, .. } => Some(offset),
                _ => None,
            })
            .collect()
    }

    fn check_domain(&self, domain: &str) -> Result<(), TransportError> {
        if domain == self.domain {
            Ok(())
        } else {
            Err(TransportError::DomainNotFound {
                raw_message: Some(format!("zone {domain} is not hosted")),
            })
        }
    }
}

#[async_trait]
impl DnsRpc for InMemoryZone {
    async fn create_record(&self, req: &CreateRecordRequest) -> Result<u64, TransportError> {
        self.calls.lock().unwrap().push(Call::Create {
            sub_domain: req.sub_domain.clone(),
            value: req.value.clone(),
        });
        self.check_domain(&req.domain)?;
        Ok(self.insert(&req.record_type, &req.sub_domain, &req.value))
    }

    async fn list_records(
        &self,
        domain: &str,
        offset: u32,
        length: u32,
    ) -> Result<RecordPage, TransportError> {
        self.calls.lock().unwrap().push(Call::List { offset, length });
        self.check_domain(domain)?;
        if self.fail_list_at_offset == Some(offset) {
            return Err(TransportError::NetworkError {
                detail: "connection reset".to_string(),
            });
        }

        let records = self.records.lock().unwrap();
        let total = u32::try_from(records.len()).unwrap();
        let page = records
            .iter()
            .skip(offset as usize)
            .take(length as usize)
            .cloned()
            .collect();
        Ok(RecordPage {
            total,
            records: page,
        })
    }

    async fn delete_record(&self, domain: &str, record_id: u64) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(Call::Delete { record_id });
        self.check_domain(domain)?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(TransportError::InvalidParameter {
                param: "record_id".to_string(),
                detail: format!("record {record_id} does not exist"),
            });
        }
        Ok(())
    }
}

/// 生成唯一的测试记录值
pub fn generate_test_value() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}
