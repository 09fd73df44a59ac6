//! Nullable fields that must still be present on the wire.
//!
//! A plain `Option<T>` field treats a missing key as `None`. Fields routed
//! through [`deserialize`] only accept an explicit `null` or a value, so a
//! payload that drops the key is rejected instead of read as "no restriction".

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
