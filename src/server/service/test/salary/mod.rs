use chrono::{DateTime, TimeZone, Utc};

use crate::server::{
    data::{job_state::JobStateRepository, wallet::WalletRepository},
    error::AppError,
    service::salary::SalaryService,
};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    factory::{ban::BanFactory, check_log::CheckLogFactory, mute::MuteFactory, user::UserFactory},
};

mod credits_mutes;
mod idempotent_reprocessing;
mod seeds_and_credits_bans;
mod skips_system_actors;
mod skips_unmapped_author;

/// The payout cutoff every salary test runs with.
fn cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn cutoff_millis() -> i64 {
    cutoff().timestamp_millis()
}

/// One in-memory database holding both the application tables and the ledger
/// tables; the service gets the same connection for both roles.
async fn setup() -> TestContext {
    TestBuilder::new()
        .with_salary_tables()
        .build()
        .await
        .unwrap()
}
