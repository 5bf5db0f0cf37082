use rundown_types::{
    Defaults, DocumentSnapshot, Error, Fields, FromSerializedConfig, FromSnapshotConfig, Result,
    SYSTEM_DATE_FIELDS, serialized_fields, snapshot_fields, use_defaults,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// A record stored as a Firestore document.
///
/// Implementors declare their date fields and defaults; the conversions
/// from a snapshot or a wire payload come for free.
pub trait Document: Serialize + DeserializeOwned {
    /// Collection name, used in diagnostics.
    const KIND: &'static str;

    /// Top-level date fields besides `createdAt` / `updatedAt`.
    const DATE_FIELDS: &'static [&'static str];

    /// Defaults for every field except `id`, `createdAt` and `updatedAt`.
    fn defaults() -> Defaults;

    /// Values filled into stored documents that lack them.
    ///
    /// Must not draw from the clock or the RNG: loading the same document
    /// twice yields the same entity.
    fn snapshot_defaults() -> Fields {
        Self::defaults().values()
    }

    /// Converts dates nested below the top level of a snapshot's fields.
    fn convert_nested_dates(fields: &mut Fields) -> Result<()> {
        let _ = fields;
        Ok(())
    }

    /// Normalizes dates nested below the top level of a wire payload.
    fn normalize_nested_dates(fields: &mut Fields) {
        let _ = fields;
    }

    /// Snapshot conversion settings. Required defaults are never filled in.
    fn snapshot_config() -> FromSnapshotConfig {
        FromSnapshotConfig::new()
            .date_fields(Self::DATE_FIELDS)
            .defaults(Self::snapshot_defaults())
    }

    /// Wire conversion settings: the entity's dates plus the system dates.
    fn serialized_config() -> FromSerializedConfig {
        let date_fields: Vec<&str> = Self::DATE_FIELDS
            .iter()
            .chain(SYSTEM_DATE_FIELDS)
            .copied()
            .collect();
        FromSerializedConfig::new().date_fields(&date_fields)
    }

    /// Converts a Firestore snapshot into the entity.
    fn from_snapshot(snapshot: &DocumentSnapshot) -> Result<Self> {
        let mut fields = snapshot_fields(snapshot, &Self::snapshot_config())?;
        Self::convert_nested_dates(&mut fields)?;
        debug!(kind = Self::KIND, id = %snapshot.id, "loaded from snapshot");
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    /// Converts a wire payload (typed or raw JSON) into the entity.
    fn from_serialized<S: Serialize + ?Sized>(serialized: &S) -> Result<Self> {
        let Value::Object(fields) = serde_json::to_value(serialized)? else {
            return Err(Error::InvalidDocument(format!(
                "serialized {} is not an object",
                Self::KIND
            )));
        };
        let mut fields = serialized_fields(fields, &Self::serialized_config());
        Self::normalize_nested_dates(&mut fields);
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    /// Fills caller-supplied values for a new record from the defaults.
    ///
    /// # Errors
    /// - [`Error::MissingRequiredField`] when a required field is absent or falsy.
    fn fields_with_defaults(values: &Fields) -> Result<Fields> {
        use_defaults(values, &Self::defaults())
    }
}
