use crate::server::{
    data::wallet::WalletRepository,
    error::{wallet::WalletError, AppError},
    model::{
        salary::SalarySource,
        wallet::{
            ApplyTransactionParam, GetHistoryParam, TransactionKind, TransactionSource,
            WithdrawParam,
        },
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod get_balance;
mod transaction_exists;
mod withdraw;

/// A plain manual adjustment, the simplest change to run through the primitive.
fn adjustment(account_id: u64, amount: i64) -> ApplyTransactionParam {
    ApplyTransactionParam {
        account_id,
        kind: TransactionKind::Adjustment,
        amount,
        source: None,
        initiator: "1".to_string(),
        comment: "Test adjustment".to_string(),
    }
}
