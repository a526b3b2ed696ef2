// 🚫 Transaction Errors - why a deposit or withdrawal was rejected
//
// The public account API only reports success/failure as a bool.
// This enum is the richer reason behind a `false`, exposed via try_deposit/try_withdraw.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransactionError {
    #[error("Invalid amount: {amount} (deposits must be positive)")]
    InvalidAmount { amount: f64 },

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: f64, requested: f64 },

    #[error("Withdrawal limit reached: {limit} withdrawals allowed")]
    WithdrawalLimitReached { limit: u32 },

    #[error("Withdrawal of {requested} exceeds cap of {cap}")]
    ExceedsWithdrawalCap { requested: f64, cap: f64 },
}

pub type Result<T> = std::result::Result<T, TransactionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TransactionError::InsufficientFunds {
            balance: 100.0,
            requested: 201.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: balance 100, requested 201.5"
        );

        let err = TransactionError::WithdrawalLimitReached { limit: 3 };
        assert_eq!(err.to_string(), "Withdrawal limit reached: 3 withdrawals allowed");
    }
}
