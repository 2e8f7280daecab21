use super::*;
use sea_orm::EntityTrait;

/// Tests that a mute pays the mute rate and records its origin.
///
/// Expected: one 200 credit with source ("mute", "1"), cursor advanced
#[tokio::test]
async fn credits_mute_at_mute_rate() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("Steve")
        .build()
        .await?;
    MuteFactory::new(db)
        .id(1)
        .muted_by("Steve")
        .time_millis(cutoff_millis() + 1_000)
        .build()
        .await?;

    let service = SalaryService::new(db, db, cutoff());
    let state_repo = JobStateRepository::new(db);
    let wallet_repo = WalletRepository::new(db);

    state_repo.set("salary:last_mute_id", "0").await?;
    let summary = service.run_pass().await;

    assert_eq!(summary.credited, 1);
    assert_eq!(wallet_repo.get_balance(100).await?, 200);
    assert_eq!(state_repo.get("salary:last_mute_id").await?.as_deref(), Some("1"));

    let transactions = entity::prelude::WalletTransaction::find().all(db).await?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].source.as_deref(), Some("mute"));
    assert_eq!(transactions[0].source_ref.as_deref(), Some("1"));

    Ok(())
}

/// Tests that ban and mute payouts accumulate on the same wallet.
///
/// Expected: balance 800 after one ban and one mute by the same moderator
#[tokio::test]
async fn ban_and_mute_accumulate() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("Steve")
        .build()
        .await?;

    let time = cutoff_millis() + 1_000;
    BanFactory::new(db).id(1).banned_by("Steve").time_millis(time).build().await?;
    MuteFactory::new(db).id(1).muted_by("Steve").time_millis(time).build().await?;

    let service = SalaryService::new(db, db, cutoff());
    let state_repo = JobStateRepository::new(db);
    let wallet_repo = WalletRepository::new(db);

    state_repo.set("salary:last_ban_id", "0").await?;
    state_repo.set("salary:last_mute_id", "0").await?;
    let summary = service.run_pass().await;

    assert_eq!(summary.credited, 2);
    assert_eq!(wallet_repo.get_balance(100).await?, 800);

    Ok(())
}
