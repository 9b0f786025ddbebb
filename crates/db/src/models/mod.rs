//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod buddy;
pub mod enums;
pub mod mentor;
pub mod progress;
pub mod stats;
pub mod submission;
pub mod task;
pub mod topic;
pub mod user;

/// Deserializes `Option<Option<T>>` distinguishing "absent" from "null".
///
/// Update DTOs use this for nullable columns where a JSON `null` must
/// clear the stored value while an omitted field leaves it unchanged.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
