use super::*;

/// Tests that a withdrawal debits the wallet and queues the payout together.
///
/// Expected: Ok with balance reduced, a withdrawal audit record, and one
/// payout command targeting the Minecraft name
#[tokio::test]
async fn debits_and_queues_payout() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let repo = WalletRepository::new(db);
    repo.apply(adjustment(100, 8000)).await?;

    let transaction = repo
        .withdraw(WithdrawParam {
            account_id: 100,
            amount: 5000,
            minecraft_name: "Steve".to_string(),
            initiator: "100".to_string(),
        })
        .await?;

    assert_eq!(transaction.amount, -5000);
    assert_eq!(transaction.kind, TransactionKind::Withdrawal);
    assert_eq!(repo.get_balance(100).await?, 3000);

    let commands = entity::prelude::PayoutCommand::find().all(db).await?;
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].minecraft_name, "Steve");
    assert_eq!(commands[0].amount, 5000);

    Ok(())
}

/// Tests that a refused withdrawal leaves no trace.
///
/// When the balance is too low the debit, the audit record, and the payout
/// command must all roll back together.
///
/// Expected: Err(InsufficientFunds), balance unchanged, no payout command
#[tokio::test]
async fn insufficient_funds_queues_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let repo = WalletRepository::new(db);
    repo.apply(adjustment(100, 3000)).await?;

    let result = repo
        .withdraw(WithdrawParam {
            account_id: 100,
            amount: 5000,
            minecraft_name: "Steve".to_string(),
            initiator: "100".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::WalletErr(WalletError::InsufficientFunds { .. }))
    ));
    assert_eq!(repo.get_balance(100).await?, 3000);

    let commands = entity::prelude::PayoutCommand::find().count(db).await?;
    assert_eq!(commands, 0);

    Ok(())
}
