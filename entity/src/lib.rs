//! SeaORM entity definitions for the staffboard database schema.
//!
//! Entities for the tables this application owns (`user`, `job_state`,
//! `wallet`, `wallet_transaction`, `payout_command`, `check_log`) live in the
//! application database. `ban` and `mute` mirror the moderation plugin's
//! tables in the external punishment ledger database; the application only
//! ever reads them.

pub mod ban;
pub mod check_log;
pub mod job_state;
pub mod mute;
pub mod payout_command;
pub mod prelude;
pub mod user;
pub mod wallet;
pub mod wallet_transaction;
