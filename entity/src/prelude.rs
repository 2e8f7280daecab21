pub use super::ban::Entity as Ban;
pub use super::check_log::Entity as CheckLog;
pub use super::job_state::Entity as JobState;
pub use super::mute::Entity as Mute;
pub use super::payout_command::Entity as PayoutCommand;
pub use super::user::Entity as User;
pub use super::wallet::Entity as Wallet;
pub use super::wallet_transaction::Entity as WalletTransaction;
