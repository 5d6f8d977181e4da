//! ISO-8601 timestamps with millisecond precision.
//!
//! Every timestamp in API responses uses one fixed shape, for example
//! `2024-01-15T10:00:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso_millis(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `#[serde(serialize_with = "...")]`.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso_millis(value))
}
