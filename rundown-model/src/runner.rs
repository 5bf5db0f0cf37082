//! Runners: the live state of a running show.
//!
//! All countdown times inside the timesnap are Unix epoch milliseconds.
//! Cue start times remembered by the runner stay ISO-8601 strings and are
//! not converted.

use crate::{CueStartMode, Document};
use chrono::{DateTime, Utc};
use rundown_types::{
    Defaults, DocumentSnapshot, DocumentSnapshotId, Fields, Result, iso8601, millis,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Deadline of a fresh runner, relative to its kickoff.
pub const DEFAULT_RUNNER_DEADLINE_MS: i64 = 10 * 60_000;

/// PRESHOW: planning, the show has not started and there is no runner.
/// ONAIR: the show is running.
/// ENDED: the show is over; elapsed timings are kept for post-show review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunnerState {
    PreShow,
    OnAir,
    Ended,
}

/// Everything needed to derive the current countdown.
///
/// The zero value is a stopped timesnap at the epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerTimesnap {
    pub cue_id: Option<DocumentSnapshotId>,
    pub running: bool,
    #[serde(with = "millis")]
    pub kickoff: i64,
    #[serde(with = "millis")]
    pub last_stop: i64,
    #[serde(with = "millis")]
    pub deadline: i64,
}

impl RunnerTimesnap {
    /// A stopped timesnap kicked off at `now`.
    #[must_use]
    pub fn stopped_at(now: i64) -> Self {
        Self {
            cue_id: None,
            running: false,
            kickoff: now,
            last_stop: now,
            deadline: now + DEFAULT_RUNNER_DEADLINE_MS,
        }
    }
}

/// Planned timing of a cue, used to detect changes and delays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerOriginalCue {
    /// ISO-8601.
    pub start_time: Option<String>,
    pub start_mode: CueStartMode,
    #[serde(with = "millis")]
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerElapsedCue {
    /// ISO-8601.
    pub start_time: String,
    #[serde(with = "millis")]
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runner {
    pub id: DocumentSnapshotId,
    pub rundown_id: DocumentSnapshotId,
    /// Zero for legacy runners stored without one.
    #[serde(default)]
    pub timesnap: RunnerTimesnap,
    pub next_cue_id: Option<DocumentSnapshotId>,
    pub original_cues: BTreeMap<DocumentSnapshotId, RunnerOriginalCue>,
    pub elapsed_cues: BTreeMap<DocumentSnapshotId, RunnerElapsedCue>,
    pub log: Vec<String>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerFirestore {
    pub rundown_id: DocumentSnapshotId,
    pub timesnap: RunnerTimesnap,
    pub next_cue_id: Option<DocumentSnapshotId>,
    pub original_cues: BTreeMap<DocumentSnapshotId, RunnerOriginalCue>,
    pub elapsed_cues: BTreeMap<DocumentSnapshotId, RunnerElapsedCue>,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerSerialized {
    pub id: DocumentSnapshotId,
    pub rundown_id: DocumentSnapshotId,
    pub timesnap: RunnerTimesnap,
    pub next_cue_id: Option<DocumentSnapshotId>,
    pub original_cues: BTreeMap<DocumentSnapshotId, RunnerOriginalCue>,
    pub elapsed_cues: BTreeMap<DocumentSnapshotId, RunnerElapsedCue>,
    pub log: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Runner {
    #[must_use]
    pub fn to_firestore(&self) -> RunnerFirestore {
        RunnerFirestore {
            rundown_id: self.rundown_id.clone(),
            timesnap: self.timesnap.clone(),
            next_cue_id: self.next_cue_id.clone(),
            original_cues: self.original_cues.clone(),
            elapsed_cues: self.elapsed_cues.clone(),
            log: self.log.clone(),
        }
    }

    #[must_use]
    pub fn to_serialized(&self) -> RunnerSerialized {
        RunnerSerialized {
            id: self.id.clone(),
            rundown_id: self.rundown_id.clone(),
            timesnap: self.timesnap.clone(),
            next_cue_id: self.next_cue_id.clone(),
            original_cues: self.original_cues.clone(),
            elapsed_cues: self.elapsed_cues.clone(),
            log: self.log.clone(),
            created_at: iso8601::format(&self.created_at),
            updated_at: iso8601::format(&self.updated_at),
        }
    }
}

impl Document for Runner {
    const KIND: &'static str = "runners";
    const DATE_FIELDS: &'static [&'static str] = &[];

    fn defaults() -> Defaults {
        get_runner_defaults()
    }

    fn snapshot_defaults() -> Fields {
        get_runner_defaults().without(&["timesnap"]).values()
    }
}

#[must_use]
pub fn get_runner_defaults() -> Defaults {
    let timesnap = RunnerTimesnap::stopped_at(Utc::now().timestamp_millis());
    Defaults::new()
        .value("rundownId", "")
        .value(
            "timesnap",
            json!({
                "cueId": null,
                "running": timesnap.running,
                "kickoff": timesnap.kickoff,
                "lastStop": timesnap.last_stop,
                "deadline": timesnap.deadline,
            }),
        )
        .value("nextCueId", Value::Null)
        .value("originalCues", Value::Object(Fields::new()))
        .value("elapsedCues", Value::Object(Fields::new()))
        .value("log", json!([]))
}

pub fn runner_from_snapshot(snapshot: &DocumentSnapshot) -> Result<Runner> {
    Runner::from_snapshot(snapshot)
}

pub fn runner_from_serialized(serialized: &RunnerSerialized) -> Result<Runner> {
    Runner::from_serialized(serialized)
}
