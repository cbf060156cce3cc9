//! Helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null`.
///
/// Use together with `#[serde(default)]`:
/// - field absent  -> `None` (leave unchanged)
/// - `null`        -> `Some(None)` (clear)
/// - value         -> `Some(Some(value))` (set)
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
