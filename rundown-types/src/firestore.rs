//! Shapes handed to us by Firebase: Firestore snapshots and timestamps, and
//! Firebase Auth user records.

use crate::{Error, Fields, Result, iso8601};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a Firestore document.
pub type DocumentSnapshotId = String;

/// Identifier (uid) of a Firebase Auth user.
pub type UserRecordId = String;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// A Firestore timestamp.
///
/// Serialized as `{"seconds": .., "nanoseconds": ..}`. The underscored
/// spelling produced by the Admin SDK's JSON encoding is accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimestamp")]
pub struct FirestoreTimestamp {
    /// Seconds since the Unix epoch.
    seconds: i64,
    /// Sub-second part, always below one second.
    nanoseconds: u32,
}

/// A timestamp as read, before its components are checked.
#[derive(Deserialize)]
struct RawTimestamp {
    #[serde(alias = "_seconds")]
    seconds: i64,
    #[serde(alias = "_nanoseconds")]
    nanoseconds: u32,
}

impl TryFrom<RawTimestamp> for FirestoreTimestamp {
    type Error = Error;

    fn try_from(raw: RawTimestamp) -> Result<Self> {
        if raw.nanoseconds >= NANOS_PER_SECOND {
            return Err(Error::InvalidTimestamp(format!(
                "nanoseconds {} out of range for seconds {}",
                raw.nanoseconds, raw.seconds
            )));
        }
        Ok(Self {
            seconds: raw.seconds,
            nanoseconds: raw.nanoseconds,
        })
    }
}

impl FirestoreTimestamp {
    /// Creates a timestamp from components.
    ///
    /// Nanoseconds at or above one second are carried into `seconds`.
    #[must_use]
    pub const fn new(seconds: i64, nanoseconds: u32) -> Self {
        Self {
            seconds: seconds + (nanoseconds / NANOS_PER_SECOND) as i64,
            nanoseconds: nanoseconds % NANOS_PER_SECOND,
        }
    }

    /// Creates a timestamp at the current time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_date(&Utc::now())
    }

    /// Creates a timestamp from a date.
    #[must_use]
    pub fn from_date(date: &DateTime<Utc>) -> Self {
        Self {
            seconds: date.timestamp(),
            nanoseconds: date.timestamp_subsec_nanos(),
        }
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        let seconds = millis.div_euclid(1000);
        let millis = millis.rem_euclid(1000) as u32;
        Self {
            seconds,
            nanoseconds: millis * NANOS_PER_MILLI,
        }
    }

    /// Returns the seconds component.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the nanoseconds component.
    #[must_use]
    pub const fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    /// Milliseconds since the Unix epoch. Sub-millisecond precision is dropped.
    ///
    /// Returns `None` if the result does not fit in an `i64`.
    #[must_use]
    pub const fn to_millis(&self) -> Option<i64> {
        match self.seconds.checked_mul(1000) {
            Some(millis) => millis.checked_add((self.nanoseconds / NANOS_PER_MILLI) as i64),
            None => None,
        }
    }

    /// Converts to a date with millisecond precision.
    pub fn to_date(&self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
            .map(|date| date.trunc_subsecs(3))
            .ok_or_else(|| Error::InvalidTimestamp(self.to_string()))
    }

    /// Reads a timestamp out of a loosely typed field value.
    ///
    /// Returns `Ok(None)` unless the value is an object carrying both
    /// components.
    ///
    /// # Errors
    /// - [`Error::InvalidTimestamp`] if the components are malformed or out
    ///   of range.
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        let Some(object) = value.as_object() else {
            return Ok(None);
        };
        let has = |key: &str| object.contains_key(key) || object.contains_key(&format!("_{key}"));
        if !has("seconds") || !has("nanoseconds") {
            return Ok(None);
        }
        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| Error::InvalidTimestamp(err.to_string()))
    }
}

impl fmt::Display for FirestoreTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timestamp(seconds={}, nanoseconds={})",
            self.seconds, self.nanoseconds
        )
    }
}

impl From<DateTime<Utc>> for FirestoreTimestamp {
    fn from(date: DateTime<Utc>) -> Self {
        Self::from_date(&date)
    }
}

/// A document read from Firestore.
///
/// `data` is `None` when the document does not exist. `create_time` and
/// `update_time` are the store's own metadata, not document fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub id: DocumentSnapshotId,
    #[serde(default)]
    pub data: Option<Fields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<FirestoreTimestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<FirestoreTimestamp>,
}

impl DocumentSnapshot {
    /// Creates a snapshot of an existing document without store metadata.
    #[must_use]
    pub fn new(id: impl Into<DocumentSnapshotId>, data: Fields) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
            create_time: None,
            update_time: None,
        }
    }

    /// Creates a snapshot of a document that does not exist.
    #[must_use]
    pub fn missing(id: impl Into<DocumentSnapshotId>) -> Self {
        Self {
            id: id.into(),
            data: None,
            create_time: None,
            update_time: None,
        }
    }

    /// Creates a snapshot whose data is the serialized form of `document`.
    ///
    /// Fails with [`Error::InvalidDocument`] if `document` does not serialize
    /// to a JSON object.
    pub fn from_document<T: Serialize>(id: impl Into<DocumentSnapshotId>, document: &T) -> Result<Self> {
        let id = id.into();
        match serde_json::to_value(document)? {
            Value::Object(data) => Ok(Self::new(id, data)),
            other => Err(Error::InvalidDocument(format!(
                "document `{id}` serialized to {} instead of an object",
                json_kind(&other)
            ))),
        }
    }

    /// Sets the store's creation time.
    #[must_use]
    pub fn with_create_time(mut self, create_time: FirestoreTimestamp) -> Self {
        self.create_time = Some(create_time);
        self
    }

    /// Sets the store's last update time.
    #[must_use]
    pub fn with_update_time(mut self, update_time: FirestoreTimestamp) -> Self {
        self.update_time = Some(update_time);
        self
    }

    /// Whether the document exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.data.is_some()
    }

    /// The document's fields, if it exists.
    #[must_use]
    pub fn data(&self) -> Option<&Fields> {
        self.data.as_ref()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Sign-in metadata of a Firebase Auth user. Times are RFC 2822 strings as
/// Firebase reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in_time: Option<String>,
}

/// An identity provider linked to a Firebase Auth user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    pub provider_id: String,
}

/// A Firebase Auth user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: UserRecordId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub metadata: UserMetadata,
    #[serde(default)]
    pub provider_data: Vec<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_claims: Option<Fields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_valid_after_time: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
}

/// Formats a Firestore timestamp the way dates travel inside field bags.
pub(crate) fn timestamp_to_value(timestamp: &FirestoreTimestamp) -> Result<Value> {
    Ok(Value::String(iso8601::format(&timestamp.to_date()?)))
}
