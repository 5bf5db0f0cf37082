//! Millisecond counts as they are stored by JavaScript clients.
//!
//! Durations and epoch times are plain JS numbers, so a stored value may
//! carry a fractional part. Reading accepts any finite number and drops the
//! sub-millisecond part; writing emits an integer.
//!
//! ```ignore
//! #[serde(with = "rundown_types::millis")]
//! duration: i64,
//! ```

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum JsNumber {
    Integer(i64),
    Float(f64),
}

/// Truncates a JS number to whole milliseconds.
///
/// Returns `None` for non-finite values or values outside the `i64` range.
#[must_use]
pub fn from_f64(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let whole = value.trunc();
    (whole.is_finite() && (-LIMIT..LIMIT).contains(&whole)).then_some(whole as i64)
}

pub fn serialize<S: Serializer>(millis: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(*millis)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match JsNumber::deserialize(deserializer)? {
        JsNumber::Integer(millis) => Ok(millis),
        JsNumber::Float(value) => from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("{value} is not a representable millisecond count"))
        }),
    }
}
