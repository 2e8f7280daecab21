use super::*;

/// Tests that the mute fetch follows the same cursor-and-cutoff contract.
///
/// Expected: Ok with only post-cursor, post-cutoff rows in ascending order
#[tokio::test]
async fn fetches_rows_past_cursor_with_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mute)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MuteFactory::new(db).id(1).time_millis(CUTOFF - 1000).build().await?;
    MuteFactory::new(db).id(2).time_millis(CUTOFF + 1000).build().await?;
    MuteFactory::new(db).id(3).time_millis(CUTOFF + 2000).build().await?;

    let repo = LedgerRepository::new(db);
    let entries = repo.fetch_mutes_after(0, CUTOFF, 50).await?;

    let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3]);

    Ok(())
}
