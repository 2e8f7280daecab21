use crate::server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod get_all_paginated;
mod set_minecraft_name;
