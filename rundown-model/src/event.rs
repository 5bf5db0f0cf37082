//! Events group the rundowns of a single production.

use crate::Document;
use chrono::{DateTime, Utc};
use rundown_types::{
    DEFAULT_SALT_LENGTH, Defaults, DocumentSnapshot, DocumentSnapshotId, Fields, FirestoreTimestamp,
    Result, generate_salt, iso8601,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DocumentSnapshotId,
    pub name: String,
    pub team_id: Option<DocumentSnapshotId>,
    #[serde(default, with = "iso8601::option")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, with = "iso8601::option")]
    pub archived_at: Option<DateTime<Utc>>,
    pub logo: String,
    /// Empty for legacy events stored without one.
    #[serde(default)]
    pub salt: String,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFirestore {
    pub name: String,
    pub team_id: Option<DocumentSnapshotId>,
    pub deleted_at: Option<FirestoreTimestamp>,
    pub archived_at: Option<FirestoreTimestamp>,
    pub logo: String,
    pub salt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSerialized {
    pub id: DocumentSnapshotId,
    pub name: String,
    pub team_id: Option<DocumentSnapshotId>,
    pub deleted_at: Option<String>,
    pub archived_at: Option<String>,
    pub logo: String,
    pub salt: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Event {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    #[must_use]
    pub fn to_firestore(&self) -> EventFirestore {
        EventFirestore {
            name: self.name.clone(),
            team_id: self.team_id.clone(),
            deleted_at: self.deleted_at.as_ref().map(FirestoreTimestamp::from_date),
            archived_at: self.archived_at.as_ref().map(FirestoreTimestamp::from_date),
            logo: self.logo.clone(),
            salt: self.salt.clone(),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> EventSerialized {
        EventSerialized {
            id: self.id.clone(),
            name: self.name.clone(),
            team_id: self.team_id.clone(),
            deleted_at: self.deleted_at.as_ref().map(iso8601::format),
            archived_at: self.archived_at.as_ref().map(iso8601::format),
            logo: self.logo.clone(),
            salt: self.salt.clone(),
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

impl Document for Event {
    const KIND: &'static str = "events";
    const DATE_FIELDS: &'static [&'static str] = &["deletedAt", "archivedAt"];

    fn defaults() -> Defaults {
        get_event_defaults()
    }

    fn snapshot_defaults() -> Fields {
        get_event_defaults().without(&["salt"]).values()
    }
}

#[must_use]
pub fn get_event_defaults() -> Defaults {
    Defaults::new()
        .value("name", "")
        .value("teamId", Value::Null)
        .value("deletedAt", Value::Null)
        .value("archivedAt", Value::Null)
        .value("logo", "")
        .value("salt", generate_salt(DEFAULT_SALT_LENGTH))
}

pub fn event_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Event> {
    Event::from_snapshot(snapshot)
}

pub fn event_from_serialized(serialized: &EventSerialized) -> Result<Event> {
    Event::from_serialized(serialized)
}
