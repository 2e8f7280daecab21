use super::*;

/// Tests that two concurrent credits both land on the final balance.
///
/// Both calls funnel through the shared balance-change primitive, whose
/// row-locked transaction serializes them; neither update may be lost.
///
/// Expected: final balance equals the sum of both credits, two audit records
#[tokio::test]
async fn concurrent_credits_are_not_lost() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let service_a = WalletService::new(db);
    let service_b = WalletService::new(db);

    let (first, second) = tokio::join!(
        service_a.admin_credit(999, 100, 300, None),
        service_b.admin_credit(998, 100, 450, None),
    );

    assert!(first.is_ok());
    assert!(second.is_ok());

    assert_eq!(service_a.get_wallet(100).await?.balance, 750);
    assert_eq!(
        entity::prelude::WalletTransaction::find().count(db).await?,
        2
    );

    Ok(())
}
