//! NinjaRMM API data models
//!
//! Every field is optional on the wire. Missing or `null` values decode to the
//! field type's default, so a sparse record still yields a complete struct.

mod device;
mod org;

pub use device::Device;
pub use org::Organization;

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
