//! Defaulting merger.
//!
//! A [`Defaults`] bag lists every field a record must end up with, either as
//! a fallback value or as [`FieldDefault::Required`]. [`use_defaults`] fills
//! a partial bag from it.
//!
//! Truthiness follows the document-store clients that write these records:
//! `null`, `false`, `0` and `""` count as "not provided", so a falsy value is
//! replaced by its default (or rejected when the field is required). Arrays
//! and objects are always truthy, even when empty.

use crate::{Error, Fields, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Sentinel accepted in loosely typed defaults bags to mark a required field.
pub const REQUIRED: &str = "REQUIRED";

/// Default for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// The caller must supply a truthy value.
    Required,
    /// Used when the caller's value is absent or falsy.
    Value(Value),
}

impl From<Value> for FieldDefault {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) if s == REQUIRED => Self::Required,
            other => Self::Value(other),
        }
    }
}

/// A bag of field defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    entries: BTreeMap<String, FieldDefault>,
}

impl Defaults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as required.
    #[must_use]
    pub fn required(mut self, key: impl Into<String>) -> Self {
        self.entries.insert(key.into(), FieldDefault::Required);
        self
    }

    /// Sets the fallback value for `key`.
    #[must_use]
    pub fn value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), FieldDefault::Value(value.into()));
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldDefault> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn is_required(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(FieldDefault::Required))
    }

    /// Names of the required fields, in key order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, default)| matches!(default, FieldDefault::Required))
            .map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDefault)> {
        self.entries.iter().map(|(key, default)| (key.as_str(), default))
    }

    /// The fallback values, leaving out required fields.
    #[must_use]
    pub fn values(&self) -> Fields {
        self.entries
            .iter()
            .filter_map(|(key, default)| match default {
                FieldDefault::Value(value) => Some((key.clone(), value.clone())),
                FieldDefault::Required => None,
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the entries for `keys`.
    #[must_use]
    pub fn without(mut self, keys: &[&str]) -> Self {
        for key in keys {
            self.entries.remove(*key);
        }
        self
    }
}

/// Builds defaults from a plain bag; string values equal to [`REQUIRED`]
/// become [`FieldDefault::Required`].
impl From<Fields> for Defaults {
    fn from(fields: Fields) -> Self {
        fields.into_iter().map(|(key, value)| (key, value.into())).collect()
    }
}

impl FromIterator<(String, FieldDefault)> for Defaults {
    fn from_iter<I: IntoIterator<Item = (String, FieldDefault)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Whether a value counts as provided.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Makes sure the returned bag has every required or default value set.
///
/// Fields in `values` that `defaults` does not mention pass through
/// unchanged.
///
/// # Errors
/// - [`Error::MissingRequiredField`] when a required field is absent or falsy.
pub fn use_defaults(values: &Fields, defaults: &Defaults) -> Result<Fields> {
    let mut output = values.clone();
    for (key, default) in defaults.iter() {
        let provided = values.get(key).filter(|value| is_truthy(value));
        let value = match default {
            FieldDefault::Required => provided
                .ok_or_else(|| Error::MissingRequiredField(key.to_string()))?
                .clone(),
            FieldDefault::Value(fallback) => provided.unwrap_or(fallback).clone(),
        };
        output.insert(key.to_string(), value);
    }
    Ok(output)
}
