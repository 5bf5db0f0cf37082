//! Domain entities for Rundown Studio.
//!
//! Every stored entity comes in three shapes:
//! - the entity itself (e.g. [`Cue`]), with `chrono` dates, used by application logic
//! - the Firestore form (e.g. [`CueFirestore`]), without `id` / `createdAt` /
//!   `updatedAt` and with [`rundown_types::FirestoreTimestamp`] dates
//! - the wire form (e.g. [`CueSerialized`]), dates as ISO-8601 strings
//!
//! The [`Document`] trait ties an entity to its date fields and defaults and
//! provides `from_snapshot` / `from_serialized`. Each module also exposes the
//! same operations as free functions (`cue_from_snapshot`, `get_cue_defaults`, ...).

mod api_v0;
mod cell;
mod column;
mod cue;
mod document;
mod event;
mod mention;
mod rundown;
mod runner;
mod team;

pub use api_v0::{ApiV0Cue, ApiV0Rundown};
pub use cell::{Cell, CellFirestore, CellSerialized, cell_from_serialized, cell_from_snapshot, get_cell_defaults};
pub use column::{
    Column, ColumnFirestore, ColumnSerialized, ColumnType, column_from_serialized,
    column_from_snapshot, get_column_defaults,
};
pub use cue::{
    Cue, CueFirestore, CueSerialized, CueSettings, CueStartMode, CueType, cue_from_serialized,
    cue_from_snapshot, get_cue_defaults,
};
pub use document::Document;
pub use event::{Event, EventFirestore, EventSerialized, event_from_serialized, event_from_snapshot, get_event_defaults};
pub use mention::{
    Mention, MentionFirestore, MentionSerialized, get_mention_defaults, mention_from_serialized,
    mention_from_snapshot,
};
pub use rundown::{
    CUE_BACKGROUND_COLORS, Rundown, RundownAccess, RundownCueOrderItem, RundownFirestore,
    RundownPermission, RundownPermissionSet, RundownSerialized, RundownSettings, RundownStatus,
    RundownTokenPayload, TextVariables, TodDisplayFormat, default_start_time, get_rundown_defaults,
    rundown_from_serialized, rundown_from_snapshot,
};
pub use runner::{
    DEFAULT_RUNNER_DEADLINE_MS, Runner, RunnerElapsedCue, RunnerFirestore, RunnerOriginalCue,
    RunnerSerialized, RunnerState, RunnerTimesnap, get_runner_defaults, runner_from_serialized,
    runner_from_snapshot,
};
pub use team::{
    Team, TeamFirestore, TeamMember, TeamMemberFirestore, TeamMemberSerialized, TeamSerialized,
    UserRole, get_member_defaults, get_team_defaults, team_from_serialized, team_from_snapshot,
};
