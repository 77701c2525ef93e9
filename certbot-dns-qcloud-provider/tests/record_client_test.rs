//! RecordClient 行为测试（内存 zone）

mod common;

use std::sync::Arc;

use certbot_dns_qcloud_provider::{ProviderError, RecordClient, TransportError};
use common::{Call, InMemoryZone};

const ZONE: &str = "example.com";
const NAME: &str = "_acme-challenge.example.com";
const SUB: &str = "_acme-challenge";
const VALUE: &str = "gfj9Xq-Mrv2Bz1wYH5xvWn2c7gQmGdxWNYeJZwn4Omk";

fn client_for(zone: &Arc<InMemoryZone>) -> RecordClient {
    RecordClient::new(zone.clone())
}

// ============ create ============

#[tokio::test]
async fn create_sends_relative_txt_record() {
    let zone = Arc::new(InMemoryZone::new(ZONE));
    let client = client_for(&zone);

    let id = client.create_txt_record(ZONE, NAME, VALUE).await.unwrap();

    let records = zone.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].record_type, "TXT");
    assert_eq!(records[0].name, SUB);
    assert_eq!(records[0].value, VALUE);
}

#[tokio::test]
async fn create_for_nested_name_keeps_inner_labels() {
    let zone = Arc::new(InMemoryZone::new("example.com.cn"));
    let client = client_for(&zone);

    client
        .create_txt_record("example.com.cn", "_acme-challenge.www.example.com.cn", VALUE)
        .await
        .unwrap();

    assert_eq!(zone.records()[0].name, "_acme-challenge.www");
}

#[tokio::test]
async fn create_twice_yields_two_records() {
    let zone = Arc::new(InMemoryZone::new(ZONE));
    let client = client_for(&zone);

    let first = client.create_txt_record(ZONE, NAME, VALUE).await.unwrap();
    let second = client.create_txt_record(ZONE, NAME, VALUE).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(zone.txt_records(SUB, VALUE).len(), 2);
}

#[tokio::test]
async fn create_failure_propagates_as_transport_error() {
    let zone = Arc::new(InMemoryZone::new("other.com"));
    let client = client_for(&zone);

    let err = client.create_txt_record(ZONE, NAME, VALUE).await.unwrap_err();

    assert!(
        matches!(
            &err,
            ProviderError::Transport {
                action: "CreateRecord",
                source: TransportError::DomainNotFound { .. },
                ..
            }
        ),
        "got {err:?}"
    );
    assert!(err.to_string().contains("example.com"), "got {err}");
}

// ============ create + delete across page boundaries ============

async fn create_then_delete_with_filler(filler: u32) {
    let zone = Arc::new(InMemoryZone::with_filler(ZONE, filler));
    let client = client_for(&zone);

    let id = client.create_txt_record(ZONE, NAME, VALUE).await.unwrap();
    client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap();

    assert!(zone.txt_records(SUB, VALUE).is_empty());
    assert_eq!(zone.records().len(), filler as usize);
    assert!(zone.calls().contains(&Call::Delete { record_id: id }));
}

#[tokio::test]
async fn create_then_delete_below_one_page() {
    create_then_delete_with_filler(10).await;
}

#[tokio::test]
async fn create_then_delete_exactly_one_page() {
    // 99 filler + challenge record = 100 records, one page
    create_then_delete_with_filler(99).await;
}

#[tokio::test]
async fn create_then_delete_above_one_page() {
    // challenge record lands at position 251, third page
    create_then_delete_with_filler(250).await;
}

#[tokio::test]
async fn match_on_second_page_fetches_two_pages() {
    // 101 records: the match is the only record on page 2
    let zone = Arc::new(InMemoryZone::with_filler(ZONE, 100));
    zone.insert("TXT", SUB, VALUE);
    let client = client_for(&zone);

    client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap();

    assert_eq!(zone.list_offsets(), vec![0, 100]);
}

#[tokio::test]
async fn exactly_page_size_is_one_request() {
    let zone = Arc::new(InMemoryZone::with_filler(ZONE, 100));
    let client = client_for(&zone);

    let err = client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap_err();

    assert!(matches!(err, ProviderError::RecordNotFound { .. }));
    assert_eq!(zone.list_offsets(), vec![0]);
}

// ============ pagination ============

#[tokio::test]
async fn missing_record_scans_every_page() {
    let zone = Arc::new(InMemoryZone::with_filler(ZONE, 250));
    let client = client_for(&zone);

    let err = client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap_err();

    assert_eq!(zone.list_offsets(), vec![0, 100, 200]);
    assert!(
        zone.calls()
            .iter()
            .all(|c| !matches!(c, Call::Delete { .. }))
    );
    assert!(
        matches!(
            &err,
            ProviderError::RecordNotFound { domain, record_name, value }
                if domain == ZONE && record_name == SUB && value == VALUE
        ),
        "got {err:?}"
    );
}

#[tokio::test]
async fn every_list_request_uses_page_size() {
    let zone = Arc::new(InMemoryZone::with_filler(ZONE, 150));
    let client = client_for(&zone);

    let _ = client.delete_txt_record(ZONE, NAME, VALUE).await;

    for call in zone.calls() {
        if let Call::List { length, .. } = call {
            assert_eq!(length, 100);
        }
    }
}

#[tokio::test]
async fn match_on_first_page_still_fetches_every_page() {
    let zone = Arc::new(InMemoryZone::new(ZONE));
    let target = zone.insert("TXT", SUB, VALUE);
    for n in 0..249 {
        zone.insert("A", &format!("host-{n}"), "192.0.2.1");
    }
    let client = client_for(&zone);

    client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap();

    assert_eq!(zone.list_offsets(), vec![0, 100, 200]);
    // delete is issued only after the last page
    assert_eq!(zone.calls().last(), Some(&Call::Delete { record_id: target }));
}

#[tokio::test]
async fn list_failure_after_match_propagates_without_delete() {
    let zone = Arc::new(InMemoryZone::new(ZONE).failing_list_at(200));
    zone.insert("TXT", SUB, VALUE);
    for n in 0..249 {
        zone.insert("A", &format!("host-{n}"), "192.0.2.1");
    }
    let client = client_for(&zone);

    let err = client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap_err();

    assert!(
        matches!(&err, ProviderError::Transport { action: "DescribeRecordList", .. }),
        "got {err:?}"
    );
    assert_eq!(zone.list_offsets(), vec![0, 100, 200]);
    assert_eq!(zone.txt_records(SUB, VALUE).len(), 1);
}

#[tokio::test]
async fn empty_zone_fails_with_record_not_found() {
    let zone = Arc::new(InMemoryZone::new(ZONE));
    let client = client_for(&zone);

    let err = client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap_err();

    assert!(matches!(err, ProviderError::RecordNotFound { .. }));
    assert_eq!(zone.list_offsets(), vec![0]);
}

#[tokio::test]
async fn list_failure_on_later_page_propagates() {
    let zone = Arc::new(InMemoryZone::with_filler(ZONE, 250).failing_list_at(100));
    zone.insert("TXT", SUB, VALUE);
    let client = client_for(&zone);

    let err = client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap_err();

    assert!(
        matches!(
            &err,
            ProviderError::Transport {
                action: "DescribeRecordList",
                source: TransportError::NetworkError { .. },
                ..
            }
        ),
        "got {err:?}"
    );
    assert_eq!(zone.list_offsets(), vec![0, 100]);
    assert_eq!(zone.txt_records(SUB, VALUE).len(), 1);
}

// ============ matching ============

#[tokio::test]
async fn near_misses_are_never_deleted() {
    let zone = Arc::new(InMemoryZone::new(ZONE));
    zone.insert("A", SUB, VALUE);
    zone.insert("TXT", "_acme-challenge.www", VALUE);
    zone.insert("TXT", SUB, "another-token");
    let client = client_for(&zone);

    let err = client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap_err();

    assert!(matches!(err, ProviderError::RecordNotFound { .. }));
    assert_eq!(zone.records().len(), 3);
}

#[tokio::test]
async fn only_the_exact_record_is_deleted() {
    let zone = Arc::new(InMemoryZone::new(ZONE));
    let a = zone.insert("A", SUB, VALUE);
    let other = zone.insert("TXT", SUB, "another-token");
    let target = zone.insert("TXT", SUB, VALUE);
    let client = client_for(&zone);

    client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap();

    let remaining: Vec<u64> = zone.records().iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![a, other]);
    assert!(zone.calls().contains(&Call::Delete { record_id: target }));
}

#[tokio::test]
async fn duplicate_records_delete_first_listed() {
    let zone = Arc::new(InMemoryZone::new(ZONE));
    let first = zone.insert("TXT", SUB, VALUE);
    let second = zone.insert("TXT", SUB, VALUE);
    let client = client_for(&zone);

    client.delete_txt_record(ZONE, NAME, VALUE).await.unwrap();

    let remaining: Vec<u64> = zone.records().iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![second]);
    assert!(zone.calls().contains(&Call::Delete { record_id: first }));
}
