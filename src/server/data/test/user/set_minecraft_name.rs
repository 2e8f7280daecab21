use super::*;

/// Tests linking a Minecraft name to an account.
///
/// Expected: Ok with the binding readable back
#[tokio::test]
async fn links_minecraft_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("123456789").build().await?;

    let repo = UserRepository::new(db);
    repo.set_minecraft_name(123456789, "Steve").await?;

    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.minecraft_name.as_deref(), Some("Steve"));

    Ok(())
}

/// Tests overwriting an existing binding.
///
/// Expected: Ok with the new name replacing the old one
#[tokio::test]
async fn overwrites_existing_binding() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id("123456789")
        .minecraft_name("Steve")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_minecraft_name(123456789, "Alex").await?;

    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert_eq!(user.minecraft_name.as_deref(), Some("Alex"));

    Ok(())
}
