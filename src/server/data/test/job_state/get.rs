use super::*;

/// Tests reading a key that was never written.
///
/// A missing cursor is how the salary job detects a source's first run.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::JobState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobStateRepository::new(db);
    let result = repo.get("salary:last_ban_id").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests reading back a written value.
///
/// Expected: Ok(Some) with the stored value
#[tokio::test]
async fn reads_back_written_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::JobState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobStateRepository::new(db);
    repo.set("salary:last_ban_id", "42").await?;

    let result = repo.get("salary:last_ban_id").await?;

    assert_eq!(result.as_deref(), Some("42"));

    Ok(())
}
