// Bank Accounts - Core Library
// Account hierarchy, batch operations and scenario config, shared by the CLI and tests

pub mod accounts;
pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;

// Re-export commonly used types
pub use accounts::{
    Account, AccountKind, AccountSnapshot, BankAccount,
    SavingsAccount, CheckingAccount, TrustAccount,
    base_deposit, base_withdraw, combined_balance, format_amount, total_balance,
};
pub use batch::{
    BatchEntry, BatchOperation, BatchReport,
    display_all, deposit_all, withdraw_all,
};
pub use config::{AccountGroup, AccountConfig, Scenario};
pub use error::TransactionError;
pub use runner::{GroupRun, ScenarioRun, run_scenario};
