//! Fixed-format timestamp serialization.
//!
//! Persisted timestamps are written as `YYYY-MM-DD HH:mm:ss` in UTC. Use with
//! `#[serde(with = "storefront_core::timestamp")]`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// The `chrono` format string for persisted timestamps.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serializes a timestamp as `YYYY-MM-DD HH:mm:ss`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(FORMAT))
}

/// Deserializes a `YYYY-MM-DD HH:mm:ss` string as a UTC timestamp.
///
/// # Errors
///
/// Fails if the input is not a string in the expected format.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
