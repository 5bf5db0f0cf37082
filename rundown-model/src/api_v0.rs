//! Records exposed by version 0 of the public API.

use crate::{Cue, CueType, Rundown, RundownStatus};
use chrono::{DateTime, Utc};
use rundown_types::{DocumentSnapshotId, iso8601, millis};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiV0Rundown {
    pub id: DocumentSnapshotId,
    pub name: String,
    #[serde(with = "iso8601")]
    pub start_time: DateTime<Utc>,
    #[serde(default, with = "iso8601::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub status: RundownStatus,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Rundown> for ApiV0Rundown {
    fn from(rundown: &Rundown) -> Self {
        Self {
            id: rundown.id.clone(),
            name: rundown.name.clone(),
            start_time: rundown.start_time,
            end_time: rundown.end_time,
            status: rundown.status,
            created_at: rundown.created_at,
            updated_at: rundown.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiV0Cue {
    pub id: DocumentSnapshotId,
    #[serde(rename = "type")]
    pub kind: CueType,
    pub title: String,
    pub subtitle: String,
    #[serde(with = "millis")]
    pub duration: i64,
    pub background_color: Option<String>,
    pub locked: bool,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Cue> for ApiV0Cue {
    fn from(cue: &Cue) -> Self {
        Self {
            id: cue.id.clone(),
            kind: cue.kind,
            title: cue.title.clone(),
            subtitle: cue.subtitle.clone(),
            duration: cue.duration,
            background_color: cue.background_color.clone(),
            locked: cue.locked,
            created_at: cue.created_at,
            updated_at: cue.updated_at,
        }
    }
}
