use super::*;

/// Tests that admin credits and debits land on the target's balance.
///
/// Expected: Ok with balance reflecting both adjustments and the admin
/// recorded as initiator
#[tokio::test]
async fn credit_then_debit() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let service = WalletService::new(db);
    let credit = service.admin_credit(999, 100, 500, None).await?;
    service.admin_debit(999, 100, 200, None).await?;

    assert_eq!(credit.initiator, "999");
    assert_eq!(credit.kind, TransactionKind::Adjustment);
    assert_eq!(service.get_wallet(100).await?.balance, 300);

    Ok(())
}

/// Tests that non-positive amounts are rejected for both directions.
///
/// Expected: Err(NonPositiveAmount) with no records written
#[tokio::test]
async fn rejects_non_positive_amounts() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let service = WalletService::new(db);

    let credit = service.admin_credit(999, 100, 0, None).await;
    let debit = service.admin_debit(999, 100, -50, None).await;

    assert!(matches!(
        credit,
        Err(AppError::WalletErr(WalletError::NonPositiveAmount(0)))
    ));
    assert!(matches!(
        debit,
        Err(AppError::WalletErr(WalletError::NonPositiveAmount(-50)))
    ));
    assert_eq!(
        entity::prelude::WalletTransaction::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests that adjusting an account that never logged in fails.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_target() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    let service = WalletService::new(db);
    let result = service.admin_credit(999, 100, 500, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an admin debit cannot overdraw the target.
///
/// Expected: Err(InsufficientFunds), balance unchanged
#[tokio::test]
async fn debit_cannot_overdraw() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db).discord_id("100").build().await?;
    fund(db, 100, 300).await?;

    let service = WalletService::new(db);
    let result = service.admin_debit(999, 100, 1_000, None).await;

    assert!(matches!(
        result,
        Err(AppError::WalletErr(WalletError::InsufficientFunds { .. }))
    ));
    assert_eq!(service.get_wallet(100).await?.balance, 300);

    Ok(())
}
