use chrono::{DateTime, TimeZone, Utc};

use crate::server::{data::check_log::CheckLogRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory::check_log::CheckLogFactory};

mod get_checks_for_player;

/// An arbitrary cutoff instant for check tests.
fn cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}
