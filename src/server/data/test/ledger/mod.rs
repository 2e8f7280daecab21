use crate::server::{data::ledger::LedgerRepository, error::AppError};
use test_utils::{
    builder::TestBuilder,
    factory::{ban::BanFactory, mute::MuteFactory},
};

mod fetch_mutes_after;
mod first_ban_id_at_or_after;
mod get_bans_for_player;

/// An arbitrary cutoff instant, unix milliseconds.
const CUTOFF: i64 = 1_700_000_000_000;
