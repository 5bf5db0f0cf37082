//! Mentions: named, colored highlights that can be referenced in cells.

use crate::Document;
use chrono::{DateTime, Utc};
use rundown_types::{Defaults, DocumentSnapshot, DocumentSnapshotId, Result, iso8601};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub id: DocumentSnapshotId,
    /// Key exposed to the external API, enumerated "1", "2", "3"...
    pub key: String,
    /// User-facing, renameable.
    pub name: String,
    /// `#RRGGBB`.
    pub color: String,
    /// Rich text HTML.
    pub description: String,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionFirestore {
    pub key: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionSerialized {
    pub id: DocumentSnapshotId,
    pub key: String,
    pub name: String,
    pub color: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Mention {
    #[must_use]
    pub fn to_firestore(&self) -> MentionFirestore {
        MentionFirestore {
            key: self.key.clone(),
            name: self.name.clone(),
            color: self.color.clone(),
            description: self.description.clone(),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> MentionSerialized {
        MentionSerialized {
            id: self.id.clone(),
            key: self.key.clone(),
            name: self.name.clone(),
            color: self.color.clone(),
            description: self.description.clone(),
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

impl Document for Mention {
    const KIND: &'static str = "mentions";
    const DATE_FIELDS: &'static [&'static str] = &[];

    fn defaults() -> Defaults {
        get_mention_defaults()
    }
}

#[must_use]
pub fn get_mention_defaults() -> Defaults {
    Defaults::new()
        .value("key", "1")
        .value("name", "New Item")
        .value("color", "#6b6bff")
        .value("description", "")
}

pub fn mention_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Mention> {
    Mention::from_snapshot(snapshot)
}

pub fn mention_from_serialized(serialized: &MentionSerialized) -> Result<Mention> {
    Mention::from_serialized(serialized)
}
