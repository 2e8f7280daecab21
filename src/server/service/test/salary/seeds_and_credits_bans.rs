use super::*;
use sea_orm::EntityTrait;

/// Tests the full first-contact sequence against a fresh ban ledger.
///
/// One ban (id 5, author Steve, timed after the cutoff) exists and no cursor
/// is persisted yet. The first pass only seeds the cursor to one before the
/// ban's id. The second pass fetches the ban, resolves Steve's account, and
/// credits 600. A third pass finds nothing new and credits nothing.
///
/// Expected: cursor 4 after pass one, one 600 credit and cursor 5 after pass
/// two, no change after pass three
#[tokio::test]
async fn seeds_then_credits_then_stays_quiet() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("Steve")
        .build()
        .await?;
    BanFactory::new(db)
        .id(5)
        .name("Griefer")
        .banned_by("Steve")
        .time_millis(cutoff_millis() + 10_000)
        .build()
        .await?;

    let service = SalaryService::new(db, db, cutoff());
    let state_repo = JobStateRepository::new(db);
    let wallet_repo = WalletRepository::new(db);

    // First pass: seeding only.
    let summary = service.run_pass().await;
    assert_eq!(summary.credited, 0);
    assert_eq!(state_repo.get("salary:last_ban_id").await?.as_deref(), Some("4"));
    assert_eq!(wallet_repo.get_balance(100).await?, 0);

    // Second pass: the ban is fetched and paid.
    let summary = service.run_pass().await;
    assert_eq!(summary.credited, 1);
    assert_eq!(wallet_repo.get_balance(100).await?, 600);
    assert_eq!(state_repo.get("salary:last_ban_id").await?.as_deref(), Some("5"));

    let transactions = entity::prelude::WalletTransaction::find().all(db).await?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].source.as_deref(), Some("ban"));
    assert_eq!(transactions[0].source_ref.as_deref(), Some("5"));
    assert_eq!(transactions[0].initiator, "salary");

    // Third pass: nothing past the cursor.
    let summary = service.run_pass().await;
    assert_eq!(summary.credited, 0);
    assert_eq!(
        entity::prelude::WalletTransaction::find().all(db).await?.len(),
        1
    );
    assert_eq!(state_repo.get("salary:last_ban_id").await?.as_deref(), Some("5"));

    Ok(())
}
