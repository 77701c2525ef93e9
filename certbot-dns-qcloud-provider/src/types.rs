//! Record-level types shared by the record client and its transports.

/// Record type of every record this crate creates or deletes.
pub const TXT_RECORD_TYPE: &str = "TXT";

/// Default resolution line ("默认") used when creating records.
pub const DEFAULT_RECORD_LINE: &str = "默认";

/// TTL (seconds) of created challenge records.
pub const DEFAULT_TTL: u32 = 600;

/// Number of records requested per listing page.
pub const PAGE_SIZE: u32 = 100;

/// A DNS record as listed by the provider.
///
/// `name` is relative to the zone (`@` for the apex itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub id: u64,
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: u32,
}

/// One page of a zone listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPage {
    /// Total number of records in the zone, not in this page.
    pub total: u32,
    pub records: Vec<DnsRecord>,
}

impl RecordPage {
    /// An empty page, for zones that have no records at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Parameters of a record creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordRequest {
    /// Zone (apex domain).
    pub domain: String,
    /// Record name relative to the zone.
    pub sub_domain: String,
    pub record_type: String,
    pub record_line: String,
    pub value: String,
    pub ttl: u32,
}

impl CreateRecordRequest {
    /// A TXT record on the default line with the default TTL.
    pub fn txt(
        domain: impl Into<String>,
        sub_domain: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            sub_domain: sub_domain.into(),
            record_type: TXT_RECORD_TYPE.to_string(),
            record_line: DEFAULT_RECORD_LINE.to_string(),
            value: value.into(),
            ttl: DEFAULT_TTL,
        }
    }
}
