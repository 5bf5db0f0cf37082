//! Core type definitions for Rundown Studio.
//!
//! This crate defines the entity-agnostic building blocks shared by every
//! Rundown Studio record:
//! - Firestore builtins (document snapshots, timestamps, auth user records)
//! - The defaulting merger with its `REQUIRED` sentinel
//! - Generic converters from a document snapshot or a wire payload into an
//!   in-memory entity
//! - ISO-8601 dates, JS millisecond counts and random salts
//!
//! Entity shapes (teams, rundowns, cues, ...) live in `rundown-model`.

mod convert;
mod defaults;
mod firestore;
pub mod iso8601;
pub mod millis;
mod salt;

pub use convert::{
    CREATED_AT, FromSerializedConfig, FromSnapshotConfig, ID, SYSTEM_DATE_FIELDS, UPDATED_AT,
    from_serialized, from_snapshot, serialized_fields, snapshot_fields,
};
pub use defaults::{Defaults, FieldDefault, REQUIRED, is_truthy, use_defaults};
pub use firestore::{
    DocumentSnapshot, DocumentSnapshotId, FirestoreTimestamp, UserInfo, UserMetadata, UserRecord,
    UserRecordId,
};
pub use salt::{DEFAULT_SALT_LENGTH, generate_salt};

/// A loosely typed bag of document fields, keyed by their camelCase names.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or converting records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field marked `REQUIRED` in a defaults bag was absent or falsy.
    #[error("{0} is required")]
    MissingRequiredField(String),

    /// The snapshot has no data payload (the document does not exist).
    #[error("snapshot data is undefined for document `{id}`")]
    EmptyData { id: DocumentSnapshotId },

    /// A value that must be a JSON object was something else.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
