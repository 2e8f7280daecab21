use super::*;

/// Tests that the directory orders accounts alphabetically.
///
/// Expected: Ok with users sorted by name and the full count reported
#[tokio::test]
async fn orders_users_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("3").name("Charlie").build().await?;
    UserFactory::new(db).discord_id("1").name("Alice").build().await?;
    UserFactory::new(db).discord_id("2").name("Bob").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert_eq!(total, 3);
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}

/// Tests fetching a later page.
///
/// Expected: Ok with the remaining users and the total unchanged
#[tokio::test]
async fn returns_requested_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("1").name("Alice").build().await?;
    UserFactory::new(db).discord_id("2").name("Bob").build().await?;
    UserFactory::new(db).discord_id("3").name("Charlie").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Charlie");

    Ok(())
}
