use super::*;

/// Tests that an unpaid ledger row reports no existing transaction.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unpaid_row_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WalletRepository::new(db);
    let exists = repo
        .transaction_exists(&TransactionSource {
            source: SalarySource::Ban,
            reference: "5".to_string(),
        })
        .await?;

    assert!(!exists);

    Ok(())
}

/// Tests that a paid ledger row is found by its structural key.
///
/// Expected: Ok(true) after a salary payout for the row
#[tokio::test]
async fn paid_row_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let repo = WalletRepository::new(db);
    repo.apply(ApplyTransactionParam {
        account_id: 100,
        kind: TransactionKind::Salary,
        amount: 600,
        source: Some(TransactionSource {
            source: SalarySource::Ban,
            reference: "5".to_string(),
        }),
        initiator: "salary".to_string(),
        comment: "Salary for ban #5 on Griefer".to_string(),
    })
    .await?;

    let exists = repo
        .transaction_exists(&TransactionSource {
            source: SalarySource::Ban,
            reference: "5".to_string(),
        })
        .await?;

    assert!(exists);

    Ok(())
}

/// Tests that deduplication ignores the display comment entirely.
///
/// Rewording the comment must not defeat the structural key, and the same
/// reference under a different source is a different row.
///
/// Expected: same (source, reference) found regardless of comment; other
/// source not found
#[tokio::test]
async fn dedup_is_independent_of_comment_and_source() -> Result<(), AppError> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let repo = WalletRepository::new(db);
    repo.apply(ApplyTransactionParam {
        account_id: 100,
        kind: TransactionKind::Salary,
        amount: 600,
        source: Some(TransactionSource {
            source: SalarySource::Ban,
            reference: "5".to_string(),
        }),
        initiator: "salary".to_string(),
        comment: "A completely different wording".to_string(),
    })
    .await?;

    let same_row = repo
        .transaction_exists(&TransactionSource {
            source: SalarySource::Ban,
            reference: "5".to_string(),
        })
        .await?;
    let other_source = repo
        .transaction_exists(&TransactionSource {
            source: SalarySource::Mute,
            reference: "5".to_string(),
        })
        .await?;

    assert!(same_row);
    assert!(!other_source);

    Ok(())
}
