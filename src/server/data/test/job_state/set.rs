use super::*;

/// Tests overwriting an existing key.
///
/// The salary job rewrites each cursor every pass, so the upsert must
/// replace rather than fail on the primary key.
///
/// Expected: Ok with the latest value winning
#[tokio::test]
async fn overwrites_existing_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::JobState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobStateRepository::new(db);
    repo.set("salary:last_ban_id", "42").await?;
    repo.set("salary:last_ban_id", "57").await?;

    let result = repo.get("salary:last_ban_id").await?;

    assert_eq!(result.as_deref(), Some("57"));

    Ok(())
}

/// Tests that keys are independent of each other.
///
/// Expected: Ok with each cursor holding its own value
#[tokio::test]
async fn keys_are_independent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::JobState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobStateRepository::new(db);
    repo.set("salary:last_ban_id", "42").await?;
    repo.set("salary:last_mute_id", "7").await?;

    assert_eq!(repo.get("salary:last_ban_id").await?.as_deref(), Some("42"));
    assert_eq!(repo.get("salary:last_mute_id").await?.as_deref(), Some("7"));

    Ok(())
}
