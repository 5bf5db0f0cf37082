mod common;

use common::{show_day, show_end, snapshot, stored, timestamp_json};
use pretty_assertions::assert_eq;
use rundown_model::{Event, event_from_serialized, event_from_snapshot, get_event_defaults};
use serde_json::json;

fn sample_event() -> Event {
    Event {
        id: "ev-1".into(),
        name: "Festival 2025".into(),
        team_id: Some("team-1".into()),
        deleted_at: None,
        archived_at: Some(show_end()),
        logo: "https://cdn.example.com/logo.png".into(),
        salt: "0123456789abcdef".into(),
        created_at: show_day(),
        updated_at: show_end(),
    }
}

#[test]
fn defaults() {
    let values = get_event_defaults().values();
    assert_eq!(values["name"], "");
    assert_eq!(values["teamId"], json!(null));
    assert_eq!(values["deletedAt"], json!(null));
    assert_eq!(values["archivedAt"], json!(null));
    let salt = values["salt"].as_str().unwrap();
    assert_eq!(salt.len(), 16);
    assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn snapshot_converts_archive_date() {
    let event = event_from_snapshot(&snapshot(
        "ev-2",
        json!({"name": "Tour", "archivedAt": timestamp_json(show_end()), "salt": "s"}),
    ))
    .unwrap();
    assert!(event.is_archived());
    assert!(!event.is_deleted());
    assert_eq!(event.archived_at, Some(show_end()));
    assert_eq!(event.salt, "s");
    assert_eq!(event.logo, "");
}

#[test]
fn legacy_event_without_salt_loads_the_same_twice() {
    let snap = snapshot("ev-3", json!({"name": "Legacy"}));
    let first = event_from_snapshot(&snap).unwrap();
    let second = event_from_snapshot(&snap).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.salt, "");
}

#[test]
fn roundtrips() {
    let event = sample_event();
    let snap = stored(&event.id, &event.to_firestore(), event.created_at, event.updated_at);
    assert_eq!(event_from_snapshot(&snap).unwrap(), event);
    let wire = event.to_serialized();
    assert_eq!(wire.archived_at.as_deref(), Some("2024-12-15T18:30:00.250Z"));
    assert_eq!(event_from_serialized(&wire).unwrap(), event);
}
