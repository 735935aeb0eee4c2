use serde::{Deserialize, Deserializer};

/// Decodes JSON `null` as the type's default value.
///
/// The billing API sends `null` for unset optional fields, which callers treat
/// the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
