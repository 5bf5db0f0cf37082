//! ISO-8601 date strings as they travel on the wire.
//!
//! Dates are written as `YYYY-MM-DDTHH:MM:SS.sssZ` and kept to millisecond
//! precision. Parsing accepts:
//! - RFC 3339 with any offset (`2024-12-15T10:00:00+01:00`)
//! - a date-time without offset, read as UTC (`2024-12-15T10:00:00`)
//! - a bare calendar date, read as UTC midnight (`2024-12-15`)
//!
//! The module doubles as a serde adapter:
//!
//! ```ignore
//! #[serde(with = "rundown_types::iso8601")]
//! created_at: DateTime<Utc>,
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as an ISO-8601 string in UTC with milliseconds.
#[must_use]
pub fn format(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an ISO-8601 string, truncated to millisecond precision.
///
/// Returns `None` if the string is not a recognizable date.
#[must_use]
pub fn parse(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc).trunc_subsecs(3));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(input, format) {
            return Some(date.and_utc().trunc_subsecs(3));
        }
    }

    NaiveDate::parse_from_str(input, NAIVE_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(date))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date `{raw}`")))
}

/// Serde adapter for nullable dates. `null` maps to `None`.
pub mod option {
    use super::{format, parse};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&format(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date `{raw}`"))),
            None => Ok(None),
        }
    }
}
