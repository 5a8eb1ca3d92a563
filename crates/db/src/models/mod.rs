//! Row types and request DTOs, one module per table.

pub mod link;
pub mod profile;
pub mod project;
pub mod search;
pub mod skill;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that is present in the body, keeping an explicit
/// `null` as `Some(None)`. Pair with `#[serde(default)]` so an absent field
/// stays `None`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
