//! Cues: the rows of a rundown.

use crate::Document;
use chrono::{DateTime, Utc};
use rundown_types::{
    Defaults, DocumentSnapshot, DocumentSnapshotId, FirestoreTimestamp, Result, iso8601, millis,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueType {
    #[default]
    Cue,
    Heading,
    Group,
}

impl CueType {
    /// The stored spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cue => "cue",
            Self::Heading => "heading",
            Self::Group => "group",
        }
    }
}

/// How a cue's start is determined. Ignored for the first cue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueStartMode {
    /// Starts when the previous cue ends.
    #[default]
    Flexible,
    /// Starts at its own `start_time`.
    Fixed,
}

impl CueStartMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flexible => "flexible",
            Self::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueSettings {
    pub hide_on_pdf: bool,
    pub hide_on_csv: bool,
    pub prevent_edits: bool,
}

/// A cue as used by application logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    pub id: DocumentSnapshotId,
    #[serde(rename = "type")]
    pub kind: CueType,
    pub title: String,
    pub subtitle: String,
    /// Ignored for the first cue, which takes the rundown's start time.
    #[serde(default, with = "iso8601::option")]
    pub start_time: Option<DateTime<Utc>>,
    pub start_mode: CueStartMode,
    #[serde(with = "millis")]
    pub start_date_plus: i64,
    /// Milliseconds.
    #[serde(with = "millis")]
    pub duration: i64,
    pub background_color: Option<String>,
    /// Legacy, superseded by `settings.prevent_edits`.
    pub locked: bool,
    /// Scheduled to auto-start.
    pub scheduled: bool,
    #[serde(default, with = "iso8601::option")]
    pub deleted_at: Option<DateTime<Utc>>,
    pub settings: CueSettings,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

/// A cue as stored in Firestore. `id` and the system dates come from the
/// document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueFirestore {
    #[serde(rename = "type")]
    pub kind: CueType,
    pub title: String,
    pub subtitle: String,
    pub start_time: Option<FirestoreTimestamp>,
    pub start_mode: CueStartMode,
    #[serde(with = "millis")]
    pub start_date_plus: i64,
    #[serde(with = "millis")]
    pub duration: i64,
    pub background_color: Option<String>,
    pub locked: bool,
    pub scheduled: bool,
    pub deleted_at: Option<FirestoreTimestamp>,
    pub settings: CueSettings,
}

/// A cue on the wire, dates as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueSerialized {
    pub id: DocumentSnapshotId,
    #[serde(rename = "type")]
    pub kind: CueType,
    pub title: String,
    pub subtitle: String,
    pub start_time: Option<String>,
    pub start_mode: CueStartMode,
    #[serde(with = "millis")]
    pub start_date_plus: i64,
    #[serde(with = "millis")]
    pub duration: i64,
    pub background_color: Option<String>,
    pub locked: bool,
    pub scheduled: bool,
    pub deleted_at: Option<String>,
    pub settings: CueSettings,
    pub created_at: String,
    pub updated_at: String,
}

impl Cue {
    /// Whether edits are blocked, honouring the legacy `locked` flag.
    #[must_use]
    pub fn prevents_edits(&self) -> bool {
        self.settings.prevent_edits || self.locked
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[must_use]
    pub fn to_firestore(&self) -> CueFirestore {
        CueFirestore {
            kind: self.kind,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            start_time: self.start_time.as_ref().map(FirestoreTimestamp::from_date),
            start_mode: self.start_mode,
            start_date_plus: self.start_date_plus,
            duration: self.duration,
            background_color: self.background_color.clone(),
            locked: self.locked,
            scheduled: self.scheduled,
            deleted_at: self.deleted_at.as_ref().map(FirestoreTimestamp::from_date),
            settings: self.settings,
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> CueSerialized {
        CueSerialized {
            id: self.id.clone(),
            kind: self.kind,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            start_time: self.start_time.as_ref().map(iso8601::format),
            start_mode: self.start_mode,
            start_date_plus: self.start_date_plus,
            duration: self.duration,
            background_color: self.background_color.clone(),
            locked: self.locked,
            scheduled: self.scheduled,
            deleted_at: self.deleted_at.as_ref().map(iso8601::format),
            settings: self.settings,
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

impl Document for Cue {
    const KIND: &'static str = "cues";
    const DATE_FIELDS: &'static [&'static str] = &["startTime", "deletedAt"];

    fn defaults() -> Defaults {
        get_cue_defaults()
    }
}

/// Defaults for a new cue. Firestore rejects `undefined`, so every field
/// has a concrete value.
#[must_use]
pub fn get_cue_defaults() -> Defaults {
    Defaults::new()
        .value("type", CueType::Cue.as_str())
        .value("title", "")
        .value("subtitle", "")
        .value("startTime", json!(null))
        .value("startMode", CueStartMode::Flexible.as_str())
        .value("startDatePlus", 0)
        .value("duration", 0)
        .value("backgroundColor", "")
        .value("locked", false)
        .value("scheduled", false)
        .value("deletedAt", json!(null))
        .value(
            "settings",
            json!({
                "hideOnPdf": false,
                "hideOnCsv": false,
                "preventEdits": false,
            }),
        )
}

pub fn cue_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Cue> {
    Cue::from_snapshot(snapshot)
}

pub fn cue_from_serialized(serialized: &CueSerialized) -> Result<Cue> {
    Cue::from_serialized(serialized)
}
