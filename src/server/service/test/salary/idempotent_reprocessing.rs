use super::*;
use sea_orm::EntityTrait;

/// Tests that revisiting an already-paid row never pays it twice.
///
/// After a ban is credited, the cursor is forced back to zero, simulating a
/// pass that re-reads an already-processed window. The structural
/// (source, source_ref) check must suppress the duplicate while the cursor
/// advances back over the row.
///
/// Expected: still exactly one transaction and a 600 balance, cursor restored
#[tokio::test]
async fn rewound_cursor_does_not_double_pay() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("Steve")
        .build()
        .await?;
    BanFactory::new(db)
        .id(5)
        .banned_by("Steve")
        .time_millis(cutoff_millis() + 10_000)
        .build()
        .await?;

    let service = SalaryService::new(db, db, cutoff());
    let state_repo = JobStateRepository::new(db);
    let wallet_repo = WalletRepository::new(db);

    state_repo.set("salary:last_ban_id", "0").await?;
    let summary = service.run_pass().await;
    assert_eq!(summary.credited, 1);
    assert_eq!(wallet_repo.get_balance(100).await?, 600);

    // Rewind and reprocess the same window.
    state_repo.set("salary:last_ban_id", "0").await?;
    let summary = service.run_pass().await;

    assert_eq!(summary.credited, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(wallet_repo.get_balance(100).await?, 600);
    assert_eq!(
        entity::prelude::WalletTransaction::find().all(db).await?.len(),
        1
    );
    assert_eq!(state_repo.get("salary:last_ban_id").await?.as_deref(), Some("5"));

    Ok(())
}
