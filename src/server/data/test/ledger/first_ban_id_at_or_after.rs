use super::*;

/// Tests seeding against a ledger with pre- and post-cutoff rows.
///
/// Expected: Ok(Some) with the id of the first payable row
#[tokio::test]
async fn finds_first_payable_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    BanFactory::new(db).id(3).time_millis(CUTOFF - 1000).build().await?;
    BanFactory::new(db).id(5).time_millis(CUTOFF + 1000).build().await?;
    BanFactory::new(db).id(7).time_millis(CUTOFF + 2000).build().await?;

    let repo = LedgerRepository::new(db);
    let first = repo.first_ban_id_at_or_after(CUTOFF).await?;

    assert_eq!(first, Some(5));

    Ok(())
}

/// Tests seeding when every row predates the cutoff.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_only_history_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    BanFactory::new(db).id(3).time_millis(CUTOFF - 1000).build().await?;

    let repo = LedgerRepository::new(db);
    let first = repo.first_ban_id_at_or_after(CUTOFF).await?;

    assert_eq!(first, None);

    Ok(())
}
