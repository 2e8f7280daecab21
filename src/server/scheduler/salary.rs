use sea_orm::DatabaseConnection;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{config::SalaryConfig, error::AppError, service::salary::SalaryService};

/// Starts the salary reconciliation scheduler
///
/// Runs one reconciliation pass at a fixed interval (10 seconds by default).
/// Passes never overlap: a tick that fires while the previous pass is still
/// running is skipped entirely, not queued.
///
/// The returned scheduler handle owns the job's lifecycle; dropping it or
/// calling `shutdown` stops the job.
///
/// # Arguments
/// - `db`: Application database connection (wallets, cursors, check log)
/// - `ledger_db`: Punishment ledger database connection (read-only)
/// - `config`: Interval and payout cutoff
pub async fn start_scheduler(
    db: DatabaseConnection,
    ledger_db: DatabaseConnection,
    config: SalaryConfig,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_ledger_db = ledger_db.clone();
    let in_flight = Arc::new(AtomicBool::new(false));

    let job = Job::new_repeated_async(
        Duration::from_secs(config.interval_secs),
        move |_uuid, _lock| {
            let db = job_db.clone();
            let ledger_db = job_ledger_db.clone();
            let in_flight = in_flight.clone();
            let cutoff = config.cutoff;

            Box::pin(async move {
                // Single-flight: claim the flag before doing anything.
                if in_flight
                    .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                    .is_err()
                {
                    tracing::debug!("Previous salary pass still running, skipping tick");
                    return;
                }
                let _guard = PassGuard(in_flight);

                let service = SalaryService::new(&db, &ledger_db, cutoff);
                let summary = service.run_pass().await;

                if summary.credited > 0 {
                    tracing::info!(
                        "Salary pass credited {} entries ({} skipped)",
                        summary.credited,
                        summary.skipped
                    );
                }
            })
        },
    )?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Salary scheduler started (interval {}s, cutoff {})",
        config.interval_secs,
        config.cutoff
    );

    Ok(scheduler)
}

/// Clears the single-flight flag when a pass ends, however it ends.
struct PassGuard(Arc<AtomicBool>);

impl Drop for PassGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
