//! Serde helpers for partial-update payloads

use serde::{Deserialize, Deserializer};

/// Distinguish an absent field from an explicit `null`.
///
/// Combine with `#[serde(default)]`: absent → `None`, `null` → `Some(None)`,
/// value → `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientInt {
    Int(i64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Read an integer from a number or a numeric string.
///
/// Anything that does not parse yields `None` instead of an error, so callers
/// can fall back to their default. Query strings arrive as text, JSON as numbers.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientInt::deserialize(deserializer)? {
        LenientInt::Int(n) => Some(n),
        LenientInt::Text(s) => s.trim().parse().ok(),
        LenientInt::Other(_) => None,
    })
}
