mod check_log;
mod job_state;
mod ledger;
mod user;
mod wallet;
