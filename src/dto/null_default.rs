use serde::{Deserialize, Deserializer};

/// Deserialize a JSON `null` as `T::default()`.
///
/// Values of the wrong type still fail.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
