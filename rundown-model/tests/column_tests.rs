mod common;

use common::{show_day, show_end, snapshot, stored};
use pretty_assertions::assert_eq;
use rundown_model::{
    Column, ColumnType, column_from_serialized, column_from_snapshot, get_column_defaults,
};
use serde_json::json;

fn sample_column() -> Column {
    Column {
        id: "col-1".into(),
        name: "Camera".into(),
        kind: ColumnType::Select,
        width: Some(240.0),
        private_uid: None,
        created_at: show_day(),
        updated_at: show_end(),
    }
}

#[test]
fn column_type_spellings() {
    assert_eq!(serde_json::to_value(ColumnType::Attachments).unwrap(), json!("attachments"));
    assert_eq!(ColumnType::Images.as_str(), "images");
}

#[test]
fn defaults() {
    assert_eq!(
        get_column_defaults().values(),
        common::bag(json!({"name": "", "type": "richtext", "privateUid": null}))
    );
}

#[test]
fn width_is_omitted_when_unset() {
    let mut column = sample_column();
    column.width = None;
    let value = serde_json::to_value(column.to_firestore()).unwrap();
    assert!(value.get("width").is_none());
    assert_eq!(value["type"], "select");
}

#[test]
fn snapshot_without_width_or_owner() {
    let column = column_from_snapshot(&snapshot("col-2", json!({"name": "Notes"}))).unwrap();
    assert_eq!(column.kind, ColumnType::Richtext);
    assert_eq!(column.width, None);
    assert!(!column.is_private());
}

#[test]
fn fractional_width_from_a_dragged_column() {
    let column = column_from_snapshot(&snapshot(
        "col-4",
        json!({"name": "Notes", "type": "richtext", "width": 240.5, "privateUid": null}),
    ))
    .unwrap();
    assert_eq!(column.width, Some(240.5));
    assert_eq!(serde_json::to_value(column.to_serialized()).unwrap()["width"], 240.5);
}

#[test]
fn private_column() {
    let column = column_from_snapshot(&snapshot(
        "col-3",
        json!({"name": "My notes", "type": "richtext", "privateUid": "uid-7"}),
    ))
    .unwrap();
    assert!(column.is_private());
    assert_eq!(column.private_uid.as_deref(), Some("uid-7"));
}

#[test]
fn roundtrips() {
    let column = sample_column();
    let snap = stored(&column.id, &column.to_firestore(), column.created_at, column.updated_at);
    assert_eq!(column_from_snapshot(&snap).unwrap(), column);
    assert_eq!(column_from_serialized(&column.to_serialized()).unwrap(), column);
}
