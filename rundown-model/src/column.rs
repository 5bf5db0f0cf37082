//! Columns of a rundown.

use crate::Document;
use chrono::{DateTime, Utc};
use rundown_types::{Defaults, DocumentSnapshot, DocumentSnapshotId, Result, UserRecordId, iso8601};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Richtext,
    Select,
    Images,
    Attachments,
}

impl ColumnType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Richtext => "richtext",
            Self::Select => "select",
            Self::Images => "images",
            Self::Attachments => "attachments",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: DocumentSnapshotId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
    /// Pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Owner of a private column; `None` for public columns.
    #[serde(default)]
    pub private_uid: Option<UserRecordId>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFirestore {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default)]
    pub private_uid: Option<UserRecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSerialized {
    pub id: DocumentSnapshotId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default)]
    pub private_uid: Option<UserRecordId>,
    pub created_at: String,
    pub updated_at: String,
}

impl Column {
    /// Whether only `private_uid` can see this column.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.private_uid.is_some()
    }

    #[must_use]
    pub fn to_firestore(&self) -> ColumnFirestore {
        ColumnFirestore {
            name: self.name.clone(),
            kind: self.kind,
            width: self.width,
            private_uid: self.private_uid.clone(),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> ColumnSerialized {
        ColumnSerialized {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            width: self.width,
            private_uid: self.private_uid.clone(),
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

impl Document for Column {
    const KIND: &'static str = "columns";
    const DATE_FIELDS: &'static [&'static str] = &[];

    fn defaults() -> Defaults {
        get_column_defaults()
    }
}

#[must_use]
pub fn get_column_defaults() -> Defaults {
    Defaults::new()
        .value("name", "")
        .value("type", ColumnType::Richtext.as_str())
        .value("privateUid", Value::Null)
}

pub fn column_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Column> {
    Column::from_snapshot(snapshot)
}

pub fn column_from_serialized(serialized: &ColumnSerialized) -> Result<Column> {
    Column::from_serialized(serialized)
}
