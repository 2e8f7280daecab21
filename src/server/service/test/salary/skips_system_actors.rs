use super::*;
use sea_orm::EntityTrait;

/// Tests that non-human actors and authorless rows never earn a payout.
///
/// Bans issued by Console, Anticheat, and RCON (in any casing) and a ban
/// with no recorded author are all skipped, while a human moderator in the
/// same batch is paid. The cursor counts every visited row, skipped or not.
///
/// Expected: one 600 credit for the human, cursor at the batch maximum
#[tokio::test]
async fn system_actors_never_earn() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("Steve")
        .build()
        .await?;

    let time = cutoff_millis() + 1_000;
    BanFactory::new(db).id(1).banned_by("Console").time_millis(time).build().await?;
    BanFactory::new(db).id(2).banned_by("Anticheat").time_millis(time).build().await?;
    BanFactory::new(db).id(3).banned_by("rcon").time_millis(time).build().await?;
    BanFactory::new(db).id(4).banned_by_none().time_millis(time).build().await?;
    BanFactory::new(db).id(5).banned_by("Steve").time_millis(time).build().await?;

    let service = SalaryService::new(db, db, cutoff());
    let state_repo = JobStateRepository::new(db);
    let wallet_repo = WalletRepository::new(db);

    state_repo.set("salary:last_ban_id", "0").await?;
    let summary = service.run_pass().await;

    assert_eq!(summary.credited, 1);
    assert_eq!(summary.skipped, 4);
    assert_eq!(wallet_repo.get_balance(100).await?, 600);
    assert_eq!(state_repo.get("salary:last_ban_id").await?.as_deref(), Some("5"));

    let transactions = entity::prelude::WalletTransaction::find().all(db).await?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].source_ref.as_deref(), Some("5"));

    Ok(())
}
