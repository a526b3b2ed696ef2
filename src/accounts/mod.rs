// Account Models
//
// Base account plus three variants. Each variant wraps the one it extends
// and delegates to it explicitly:
//
//   Account ← SavingsAccount ← TrustAccount
//   Account ← CheckingAccount

pub mod account;
pub mod savings;
pub mod checking;
pub mod trust;

pub use account::{
    Account, AccountKind, AccountSnapshot, BankAccount,
    base_deposit, base_withdraw, combined_balance, format_amount, total_balance,
};
pub use savings::SavingsAccount;
pub use checking::CheckingAccount;
pub use trust::TrustAccount;
