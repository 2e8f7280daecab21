//! Recurring background jobs.

pub mod salary;
