use super::*;

/// Tests that an account without a wallet reports zero.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unknown_account_reports_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WalletRepository::new(db);

    assert_eq!(repo.get_balance(999).await?, 0);

    Ok(())
}
