//! Wire format for timestamps.
//!
//! All API timestamps are UTC, rendered as ISO-8601 with microsecond precision
//! and a `Z` suffix (`2018-03-25T07:13:26.480780Z`). Parsing accepts any valid
//! RFC 3339 offset and normalizes to UTC.

use chrono::{DateTime, Utc};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Formats a timestamp in the canonical wire format.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(FORMAT).to_string()
}

/// Parses a wire timestamp, normalizing to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter emitting and consuming the canonical wire format.
///
/// Use with `#[serde(with = "crate::util::datetime::iso8601")]` on
/// `DateTime<Utc>` DTO fields.
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_timestamp(&value).map_err(serde::de::Error::custom)
    }
}
