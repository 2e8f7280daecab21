pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_job_state_table;
mod m20260801_000003_create_wallet_table;
mod m20260801_000004_create_wallet_transaction_table;
mod m20260801_000005_create_payout_command_table;
mod m20260801_000006_create_check_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_job_state_table::Migration),
            Box::new(m20260801_000003_create_wallet_table::Migration),
            Box::new(m20260801_000004_create_wallet_transaction_table::Migration),
            Box::new(m20260801_000005_create_payout_command_table::Migration),
            Box::new(m20260801_000006_create_check_log_table::Migration),
        ]
    }
}
