//! Factories for inserting entity rows with sensible defaults.
//!
//! Each factory follows a builder pattern: construct with a database
//! connection, override the fields the test cares about, then `build()` to
//! insert the row and get the resulting entity model back.

pub mod ban;
pub mod check_log;
pub mod helpers;
pub mod mute;
pub mod user;
