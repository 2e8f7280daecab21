use crate::server::{
    error::AppError,
    model::user::SetMinecraftNameParam,
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, context::TestContext, factory::user::UserFactory};

mod set_minecraft_name;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap()
}
