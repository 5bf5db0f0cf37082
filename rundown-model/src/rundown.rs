//! Rundowns: the show plan that orders cues and columns.
//!
//! Access to a rundown is granted through signed tokens carrying a bitwise
//! permission mask, see [`RundownPermission`] and [`RundownTokenPayload`].

use crate::Document;
use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone, Utc};
use rundown_types::{
    DEFAULT_SALT_LENGTH, Defaults, DocumentSnapshot, DocumentSnapshotId, Fields, FirestoreTimestamp,
    Result, generate_salt, iso8601,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Palette offered for cue backgrounds in new rundowns.
pub const CUE_BACKGROUND_COLORS: &[&str] = &[
    "#991b1b", "#9a3412", "#92400e", "#3f6212", "#166534", "#115e59", "#155e75", "#1e40af",
    "#3730a3", "#5b21b6", "#86198f", "#9f1239",
];

/// Hour of day (local time) at which a new rundown starts.
const DEFAULT_START_HOUR: i64 = 9;

/// Defaults drawn from the clock or the RNG. Only new rundowns get them.
const GENERATED_DEFAULTS: &[&str] = &["salt", "startTime"];

/// Legacy access level, superseded by permission masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RundownAccess {
    Write,
    WriteColumn,
    Read,
}

/// Primitive permission flags, combined bitwise into a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RundownPermission {
    /// Read-only access.
    View = 1,
    /// Edit all content.
    Edit = 2,
    /// Run and control the show.
    Showcall = 4,
    /// Manage settings, access and invites.
    Manage = 8,
    // 16 is reserved for a future common permission.
    /// Edit assigned columns only.
    EditPartial = 32,
}

impl RundownPermission {
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Whether `mask` grants this permission.
    #[must_use]
    pub const fn is_granted_by(self, mask: u32) -> bool {
        mask & self.bits() != 0
    }
}

/// Precomposed permission masks for common roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RundownPermissionSet {
    Viewer = 1,
    Editor = 1 | 2,
    ShowCaller = 1 | 2 | 4,
    Admin = 1 | 2 | 4 | 8,
    PartialEditor = 1 | 32,
}

impl RundownPermissionSet {
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn contains(self, permission: RundownPermission) -> bool {
        permission.is_granted_by(self.bits())
    }
}

/// Payload of a rundown access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownTokenPayload {
    pub rundown_id: DocumentSnapshotId,
    /// Bitwise mask of [`RundownPermission`] flags.
    pub permissions: u32,
    /// Kept while older clients still read it.
    pub access: RundownAccess,
}

impl RundownTokenPayload {
    #[must_use]
    pub fn new(rundown_id: impl Into<DocumentSnapshotId>, set: RundownPermissionSet) -> Self {
        let access = if set.contains(RundownPermission::Edit) {
            RundownAccess::Write
        } else if set.contains(RundownPermission::EditPartial) {
            RundownAccess::WriteColumn
        } else {
            RundownAccess::Read
        };
        Self {
            rundown_id: rundown_id.into(),
            permissions: set.bits(),
            access,
        }
    }

    #[must_use]
    pub fn has_permission(&self, permission: RundownPermission) -> bool {
        permission.is_granted_by(self.permissions)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RundownStatus {
    Imported,
    #[default]
    Draft,
    AwaitingData,
    Approved,
    Finalized,
    Rejected,
}

impl RundownStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Imported => "imported",
            Self::Draft => "draft",
            Self::AwaitingData => "awaiting-data",
            Self::Approved => "approved",
            Self::Finalized => "finalized",
            Self::Rejected => "rejected",
        }
    }
}

/// Time-of-day display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodDisplayFormat {
    #[serde(rename = "12hNoAmPm")]
    TwelveHourNoAmPm,
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Position of a cue in the rundown, with grouped cues as children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RundownCueOrderItem {
    pub id: DocumentSnapshotId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RundownCueOrderItem>>,
}

impl RundownCueOrderItem {
    #[must_use]
    pub fn new(id: impl Into<DocumentSnapshotId>) -> Self {
        Self {
            id: id.into(),
            children: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RundownCueOrderItem>) -> Self {
        self.children = Some(children);
        self
    }

    /// Appends this item's id and its descendants' ids in display order.
    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        ids.push(&self.id);
        for child in self.children.iter().flatten() {
            child.collect_ids(ids);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownSettings {
    #[serde(default)]
    pub output_config: Option<String>,
    #[serde(default)]
    pub cue_background_colours: Option<Vec<String>>,
    #[serde(default)]
    pub current_cue_highlight_color: Option<String>,
    #[serde(default)]
    pub tod_display_format: Option<TodDisplayFormat>,
}

/// Named text snippets that can be referenced from cells.
pub type TextVariables = BTreeMap<String, String>;

/// A rundown as used by application logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rundown {
    pub id: DocumentSnapshotId,
    pub name: String,
    pub team_id: Option<DocumentSnapshotId>,
    pub event_id: Option<DocumentSnapshotId>,
    pub runner_id: Option<DocumentSnapshotId>,
    pub prompter_id: Option<DocumentSnapshotId>,
    /// Column order.
    pub columns: Vec<DocumentSnapshotId>,
    /// Cue order.
    pub cues: Vec<RundownCueOrderItem>,
    #[serde(with = "iso8601")]
    pub start_time: DateTime<Utc>,
    #[serde(default, with = "iso8601::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub start_cue_id: Option<DocumentSnapshotId>,
    /// Empty for legacy rundowns stored without one.
    #[serde(default)]
    pub salt: String,
    pub status: RundownStatus,
    pub timezone: Option<String>,
    pub logo: Option<String>,
    pub settings: RundownSettings,
    pub text_variables: TextVariables,
    #[serde(default, with = "iso8601::option")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, with = "iso8601::option")]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownFirestore {
    pub name: String,
    pub team_id: Option<DocumentSnapshotId>,
    pub event_id: Option<DocumentSnapshotId>,
    pub runner_id: Option<DocumentSnapshotId>,
    pub prompter_id: Option<DocumentSnapshotId>,
    pub columns: Vec<DocumentSnapshotId>,
    pub cues: Vec<RundownCueOrderItem>,
    pub start_time: FirestoreTimestamp,
    pub end_time: Option<FirestoreTimestamp>,
    pub start_cue_id: Option<DocumentSnapshotId>,
    pub salt: String,
    pub status: RundownStatus,
    pub timezone: Option<String>,
    pub logo: Option<String>,
    pub settings: RundownSettings,
    pub text_variables: TextVariables,
    pub deleted_at: Option<FirestoreTimestamp>,
    pub archived_at: Option<FirestoreTimestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownSerialized {
    pub id: DocumentSnapshotId,
    pub name: String,
    pub team_id: Option<DocumentSnapshotId>,
    pub event_id: Option<DocumentSnapshotId>,
    pub runner_id: Option<DocumentSnapshotId>,
    pub prompter_id: Option<DocumentSnapshotId>,
    pub columns: Vec<DocumentSnapshotId>,
    pub cues: Vec<RundownCueOrderItem>,
    pub start_time: String,
    pub end_time: Option<String>,
    pub start_cue_id: Option<DocumentSnapshotId>,
    pub salt: String,
    pub status: RundownStatus,
    pub timezone: Option<String>,
    pub logo: Option<String>,
    pub settings: RundownSettings,
    pub text_variables: TextVariables,
    pub deleted_at: Option<String>,
    pub archived_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Rundown {
    /// Every cue id in display order, groups before their children.
    #[must_use]
    pub fn cue_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for item in &self.cues {
            item.collect_ids(&mut ids);
        }
        ids
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    #[must_use]
    pub fn to_firestore(&self) -> RundownFirestore {
        RundownFirestore {
            name: self.name.clone(),
            team_id: self.team_id.clone(),
            event_id: self.event_id.clone(),
            runner_id: self.runner_id.clone(),
            prompter_id: self.prompter_id.clone(),
            columns: self.columns.clone(),
            cues: self.cues.clone(),
            start_time: FirestoreTimestamp::from_date(&self.start_time),
            end_time: self.end_time.as_ref().map(FirestoreTimestamp::from_date),
            start_cue_id: self.start_cue_id.clone(),
            salt: self.salt.clone(),
            status: self.status,
            timezone: self.timezone.clone(),
            logo: self.logo.clone(),
            settings: self.settings.clone(),
            text_variables: self.text_variables.clone(),
            deleted_at: self.deleted_at.as_ref().map(FirestoreTimestamp::from_date),
            archived_at: self.archived_at.as_ref().map(FirestoreTimestamp::from_date),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> RundownSerialized {
        RundownSerialized {
            id: self.id.clone(),
            name: self.name.clone(),
            team_id: self.team_id.clone(),
            event_id: self.event_id.clone(),
            runner_id: self.runner_id.clone(),
            prompter_id: self.prompter_id.clone(),
            columns: self.columns.clone(),
            cues: self.cues.clone(),
            start_time: iso8601::format(&self.start_time),
            end_time: self.end_time.as_ref().map(iso8601::format),
            start_cue_id: self.start_cue_id.clone(),
            salt: self.salt.clone(),
            status: self.status,
            timezone: self.timezone.clone(),
            logo: self.logo.clone(),
            settings: self.settings.clone(),
            text_variables: self.text_variables.clone(),
            deleted_at: self.deleted_at.as_ref().map(iso8601::format),
            archived_at: self.archived_at.as_ref().map(iso8601::format),
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

impl Document for Rundown {
    const KIND: &'static str = "rundowns";
    const DATE_FIELDS: &'static [&'static str] = &["startTime", "endTime", "deletedAt", "archivedAt"];

    fn defaults() -> Defaults {
        get_rundown_defaults()
    }

    fn snapshot_defaults() -> Fields {
        get_rundown_defaults().without(GENERATED_DEFAULTS).values()
    }
}

/// Today at 09:00 local time.
#[must_use]
pub fn default_start_time() -> DateTime<Utc> {
    let nine = Local::now().date_naive().and_time(NaiveTime::MIN) + TimeDelta::hours(DEFAULT_START_HOUR);
    Local
        .from_local_datetime(&nine)
        .earliest()
        .map(|start| start.with_timezone(&Utc))
        .unwrap_or_else(|| nine.and_utc())
}

#[must_use]
pub fn get_rundown_defaults() -> Defaults {
    let palette: Vec<Value> = CUE_BACKGROUND_COLORS.iter().map(|color| Value::from(*color)).collect();
    Defaults::new()
        .value("name", "")
        .value("teamId", Value::Null)
        .value("eventId", Value::Null)
        .value("runnerId", Value::Null)
        .value("prompterId", Value::Null)
        .value("columns", json!([]))
        .value("cues", json!([]))
        .value("startTime", iso8601::format(&default_start_time()))
        .value("endTime", Value::Null)
        .value("startCueId", Value::Null)
        .value("salt", generate_salt(DEFAULT_SALT_LENGTH))
        .value("status", RundownStatus::Draft.as_str())
        .value("timezone", Value::Null)
        .value("logo", "")
        .value(
            "settings",
            json!({
                "outputConfig": "",
                "cueBackgroundColours": palette,
                "currentCueHighlightColor": "",
                "todDisplayFormat": null,
            }),
        )
        .value("textVariables", Value::Object(Fields::new()))
        .value("deletedAt", Value::Null)
        .value("archivedAt", Value::Null)
}

pub fn rundown_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Rundown> {
    Rundown::from_snapshot(snapshot)
}

pub fn rundown_from_serialized(serialized: &RundownSerialized) -> Result<Rundown> {
    Rundown::from_serialized(serialized)
}
