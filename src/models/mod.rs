pub mod image;
pub mod vulnerability;
pub mod cve_result;

pub use image::*;
pub use vulnerability::*;
pub use cve_result::*;

use serde::{Deserialize, Deserializer};

/// Decodes an explicit JSON `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
