//! Generic converters into in-memory entities.
//!
//! Both converters work on a [`Fields`] bag first and only then deserialize
//! the bag into the target type. Inside the bag a converted date is an
//! ISO-8601 string (see [`crate::iso8601`]) and a cleared date is `null`, so
//! entities read their dates with the `iso8601` serde adapters.

use crate::firestore::timestamp_to_value;
use crate::{DocumentSnapshot, Error, Fields, FirestoreTimestamp, Result, iso8601};
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Identity field stamped from the snapshot id.
pub const ID: &str = "id";
/// Creation instant stamped from the snapshot metadata.
pub const CREATED_AT: &str = "createdAt";
/// Update instant stamped from the snapshot metadata.
pub const UPDATED_AT: &str = "updatedAt";
/// Date fields every entity carries on the wire.
pub const SYSTEM_DATE_FIELDS: &[&str] = &[CREATED_AT, UPDATED_AT];

/// Configuration for converting from a Firestore snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FromSnapshotConfig {
    /// Fields holding Firestore timestamps that become dates.
    pub date_fields: Vec<String>,
    /// Values used for fields the stored document lacks.
    pub defaults: Option<Fields>,
}

impl FromSnapshotConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn date_fields(mut self, fields: &[&str]) -> Self {
        self.date_fields = fields.iter().map(|field| (*field).to_string()).collect();
        self
    }

    #[must_use]
    pub fn defaults(mut self, defaults: Fields) -> Self {
        self.defaults = Some(defaults);
        self
    }
}

/// Configuration for converting from serialized (wire) data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FromSerializedConfig {
    /// Fields holding ISO-8601 strings that become dates.
    pub date_fields: Vec<String>,
}

impl FromSerializedConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn date_fields(mut self, fields: &[&str]) -> Self {
        self.date_fields = fields.iter().map(|field| (*field).to_string()).collect();
        self
    }
}

/// Builds the field bag of an entity from a Firestore snapshot.
///
/// - Starts from `config.defaults`, overlaid by the stored data.
/// - Stamps `id` from the snapshot and `createdAt` / `updatedAt` from its
///   metadata, falling back to the current time.
/// - Converts each date field holding a timestamp; absent or `null` date
///   fields become `null`. Other values are left as they are.
///
/// # Errors
/// - [`Error::EmptyData`] if the snapshot has no data.
/// - [`Error::InvalidTimestamp`] if a timestamp is malformed or out of range.
pub fn snapshot_fields(snapshot: &DocumentSnapshot, config: &FromSnapshotConfig) -> Result<Fields> {
    let Some(data) = snapshot.data() else {
        warn!(id = %snapshot.id, "snapshot has no data");
        return Err(Error::EmptyData {
            id: snapshot.id.clone(),
        });
    };

    let mut fields = config.defaults.clone().unwrap_or_default();
    fields.extend(data.iter().map(|(key, value)| (key.clone(), value.clone())));

    fields.insert(ID.to_string(), Value::String(snapshot.id.clone()));
    fields.insert(CREATED_AT.to_string(), metadata_date(snapshot.create_time.as_ref())?);
    fields.insert(UPDATED_AT.to_string(), metadata_date(snapshot.update_time.as_ref())?);

    for field in &config.date_fields {
        let converted = match fields.get(field) {
            None | Some(Value::Null) => Value::Null,
            Some(value) => match FirestoreTimestamp::from_value(value)? {
                Some(timestamp) => timestamp_to_value(&timestamp)?,
                None => continue,
            },
        };
        fields.insert(field.clone(), converted);
    }

    debug!(
        id = %snapshot.id,
        date_fields = config.date_fields.len(),
        "converted snapshot fields"
    );
    Ok(fields)
}

fn metadata_date(timestamp: Option<&FirestoreTimestamp>) -> Result<Value> {
    match timestamp {
        Some(timestamp) => timestamp_to_value(timestamp),
        None => Ok(Value::String(iso8601::format(&Utc::now()))),
    }
}

/// Converts a Firestore snapshot into an entity.
///
/// See [`snapshot_fields`] for how the fields are assembled.
///
/// # Errors
/// - Everything [`snapshot_fields`] returns.
/// - [`Error::Serialization`] if the assembled fields do not fit `T`.
pub fn from_snapshot<T: DeserializeOwned>(
    snapshot: &DocumentSnapshot,
    config: &FromSnapshotConfig,
) -> Result<T> {
    let fields = snapshot_fields(snapshot, config)?;
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Normalizes the date fields of a wire payload.
///
/// Each date field holding a string is parsed; unparseable strings and
/// absent or `null` fields become `null`. Parsed dates are rewritten in the
/// canonical `YYYY-MM-DDTHH:MM:SS.sssZ` form.
#[must_use]
pub fn serialized_fields(mut fields: Fields, config: &FromSerializedConfig) -> Fields {
    for field in &config.date_fields {
        let converted = match fields.get(field) {
            None | Some(Value::Null) => Value::Null,
            Some(Value::String(raw)) => match iso8601::parse(raw) {
                Some(date) => Value::String(iso8601::format(&date)),
                None => {
                    warn!(field = %field, value = %raw, "unparseable date, storing null");
                    Value::Null
                }
            },
            Some(_) => continue,
        };
        fields.insert(field.clone(), converted);
    }
    fields
}

/// Converts serialized (wire) data into an entity.
///
/// `serialized` may be a typed wire struct or a raw JSON object.
///
/// # Errors
/// - [`Error::InvalidDocument`] if `serialized` is not a JSON object.
/// - [`Error::Serialization`] if the normalized fields do not fit `T`.
pub fn from_serialized<T: DeserializeOwned, S: Serialize + ?Sized>(
    serialized: &S,
    config: &FromSerializedConfig,
) -> Result<T> {
    let Value::Object(fields) = serde_json::to_value(serialized)? else {
        return Err(Error::InvalidDocument(
            "serialized payload is not an object".to_string(),
        ));
    };
    let fields = serialized_fields(fields, config);
    Ok(serde_json::from_value(Value::Object(fields))?)
}
