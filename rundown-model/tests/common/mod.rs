//! Shared fixtures for entity tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rundown_types::{DocumentSnapshot, Fields, FirestoreTimestamp};
use serde::Serialize;
use serde_json::Value;

/// 2024-12-15T10:00:00.000Z
pub fn show_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 15, 10, 0, 0).unwrap()
}

/// 2024-12-15T18:30:00.250Z
pub fn show_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 15, 18, 30, 0).unwrap() + chrono::Duration::milliseconds(250)
}

pub fn created_ts() -> FirestoreTimestamp {
    FirestoreTimestamp::new(1_734_000_000, 123_000_000)
}

pub fn updated_ts() -> FirestoreTimestamp {
    FirestoreTimestamp::new(1_734_100_000, 456_000_000)
}

pub fn bag(value: Value) -> Fields {
    match value {
        Value::Object(fields) => fields,
        other => panic!("expected an object, got {other}"),
    }
}

/// A snapshot with fixed store metadata.
pub fn snapshot(id: &str, data: Value) -> DocumentSnapshot {
    DocumentSnapshot::new(id, bag(data))
        .with_create_time(created_ts())
        .with_update_time(updated_ts())
}

/// A snapshot of a persisted record with the given store metadata.
pub fn stored<T: Serialize>(
    id: &str,
    document: &T,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> DocumentSnapshot {
    DocumentSnapshot::from_document(id, document)
        .unwrap()
        .with_create_time(FirestoreTimestamp::from_date(&created_at))
        .with_update_time(FirestoreTimestamp::from_date(&updated_at))
}

pub fn timestamp_json(date: DateTime<Utc>) -> Value {
    serde_json::to_value(FirestoreTimestamp::from_date(&date)).unwrap()
}
