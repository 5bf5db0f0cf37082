//! Cells: the content at a cue/column intersection.

use crate::Document;
use chrono::{DateTime, Utc};
use rundown_types::{Defaults, DocumentSnapshot, DocumentSnapshotId, Fields, Result, iso8601};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub id: DocumentSnapshotId,
    pub cue_id: DocumentSnapshotId,
    pub column_id: DocumentSnapshotId,
    /// Editor-defined content; its shape depends on the column type.
    pub content: Value,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

/// A cell as stored in Firestore. Cells have no date fields of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFirestore {
    pub cue_id: DocumentSnapshotId,
    pub column_id: DocumentSnapshotId,
    pub content: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSerialized {
    pub id: DocumentSnapshotId,
    pub cue_id: DocumentSnapshotId,
    pub column_id: DocumentSnapshotId,
    pub content: Value,
    pub created_at: String,
    pub updated_at: String,
}

impl Cell {
    #[must_use]
    pub fn to_firestore(&self) -> CellFirestore {
        CellFirestore {
            cue_id: self.cue_id.clone(),
            column_id: self.column_id.clone(),
            content: self.content.clone(),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> CellSerialized {
        CellSerialized {
            id: self.id.clone(),
            cue_id: self.cue_id.clone(),
            column_id: self.column_id.clone(),
            content: self.content.clone(),
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

impl Document for Cell {
    const KIND: &'static str = "cells";
    const DATE_FIELDS: &'static [&'static str] = &[];

    fn defaults() -> Defaults {
        get_cell_defaults()
    }
}

/// A cell cannot exist without its cue and column.
#[must_use]
pub fn get_cell_defaults() -> Defaults {
    Defaults::new()
        .required("cueId")
        .required("columnId")
        .value("content", Value::Object(Fields::new()))
}

pub fn cell_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Cell> {
    Cell::from_snapshot(snapshot)
}

pub fn cell_from_serialized(serialized: &CellSerialized) -> Result<Cell> {
    Cell::from_serialized(serialized)
}
