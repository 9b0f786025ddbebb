pub mod buddies;
pub mod dashboard;
pub mod mentors;
pub mod tasks;
pub mod topics;
pub mod users;

use std::str::FromStr;

use mentorhub_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Parse an optional enum filter from a query parameter.
///
/// Absent values and the literal `"all"` mean "no constraint". Anything
/// else must be a recognised variant; unknown values are rejected rather
/// than silently ignored.
pub(crate) fn parse_filter<T: FromStr>(
    value: Option<&str>,
    field: &'static str,
) -> AppResult<Option<T>> {
    match value {
        None | Some("all") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown {field} filter value: {raw}"
            )))
        }),
    }
}
