use crate::server::{data::job_state::JobStateRepository, error::AppError};
use test_utils::builder::TestBuilder;

mod get;
mod set;
