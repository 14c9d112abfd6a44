pub mod category;
pub mod task;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "present but null".
///
/// serde collapses both into `None` by default; wrapping the field as
/// `Option<Option<T>>` with this deserializer keeps all three states:
/// absent (`None`), null (`Some(None)`), value (`Some(Some(v))`).
/// Patch structs use it for nullable foreign keys.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
