use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that an author without an identity mapping is skipped for good.
///
/// The cursor still advances past the row, so even linking the account
/// afterwards does not pay retroactively. This mirrors the production
/// behavior: payouts start from the moment the mapping exists.
///
/// Expected: no transaction, cursor advanced, still nothing after linking
#[tokio::test]
async fn unmapped_author_is_skipped_permanently() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    BanFactory::new(db)
        .id(1)
        .banned_by("Herobrine")
        .time_millis(cutoff_millis() + 1_000)
        .build()
        .await?;

    let service = SalaryService::new(db, db, cutoff());
    let state_repo = JobStateRepository::new(db);

    state_repo.set("salary:last_ban_id", "0").await?;
    let summary = service.run_pass().await;

    assert_eq!(summary.credited, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(state_repo.get("salary:last_ban_id").await?.as_deref(), Some("1"));
    assert_eq!(
        entity::prelude::WalletTransaction::find().count(db).await?,
        0
    );

    // Linking the account later changes nothing for the passed row.
    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("Herobrine")
        .build()
        .await?;

    let summary = service.run_pass().await;
    assert_eq!(summary.credited, 0);
    assert_eq!(
        entity::prelude::WalletTransaction::find().count(db).await?,
        0
    );

    Ok(())
}
