//! Domain types, errors, and pure derivation logic shared by the
//! database and API crates.

pub mod error;
pub mod progress;
pub mod types;
