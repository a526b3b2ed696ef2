// 🔐 Trust Account - savings with a deposit bonus and withdrawal caps
//
// deposit : amount >= 5000 earns a flat 50 bonus, then the savings rule
//           (so the bonus also earns interest in the same call)
// withdraw: rejected once 3 withdrawals succeeded, or when amount > 20% of
//           balance; otherwise the base account rule (no checking fee)
//
// Withdrawal count is a small state machine: 0 → 1 → 2 → 3 (terminal).

use super::account::{AccountKind, AccountSnapshot, BankAccount};
use super::savings::SavingsAccount;
use crate::error::{Result, TransactionError};

#[derive(Debug, Clone, PartialEq)]
pub struct TrustAccount {
    savings: SavingsAccount,
    withdrawal_count: u32,
}

impl TrustAccount {
    pub const DEFAULT_NAME: &'static str = "Unnamed Trust Account";
    pub const MAX_WITHDRAWALS: u32 = 3;
    pub const BONUS_THRESHOLD: f64 = 5000.0;
    pub const DEPOSIT_BONUS: f64 = 50.0;
    pub const MAX_WITHDRAWAL_RATIO: f64 = 0.2;

    pub fn new(name: impl Into<String>, balance: f64, interest_rate: f64) -> Self {
        TrustAccount {
            savings: SavingsAccount::new(name, balance, interest_rate),
            withdrawal_count: 0,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        TrustAccount::new(name, 0.0, SavingsAccount::DEFAULT_INTEREST_RATE)
    }

    pub fn interest_rate(&self) -> f64 {
        self.savings.interest_rate()
    }

    pub fn withdrawal_count(&self) -> u32 {
        self.withdrawal_count
    }

    pub fn withdrawals_left(&self) -> u32 {
        Self::MAX_WITHDRAWALS.saturating_sub(self.withdrawal_count)
    }

    /// Largest single withdrawal allowed at the current balance
    pub fn withdrawal_cap(&self) -> f64 {
        self.balance() * Self::MAX_WITHDRAWAL_RATIO
    }
}

impl Default for TrustAccount {
    fn default() -> Self {
        TrustAccount::named(Self::DEFAULT_NAME)
    }
}

impl BankAccount for TrustAccount {
    fn name(&self) -> &str {
        self.savings.name()
    }

    fn balance(&self) -> f64 {
        self.savings.balance()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Trust
    }

    fn try_deposit(&mut self, amount: f64) -> Result<()> {
        let amount = if amount >= Self::BONUS_THRESHOLD {
            amount + Self::DEPOSIT_BONUS
        } else {
            amount
        };
        self.savings.try_deposit(amount)
    }

    fn try_withdraw(&mut self, amount: f64) -> Result<()> {
        if self.withdrawal_count >= Self::MAX_WITHDRAWALS {
            return Err(TransactionError::WithdrawalLimitReached {
                limit: Self::MAX_WITHDRAWALS,
            });
        }

        let cap = self.withdrawal_cap();
        if amount > cap {
            return Err(TransactionError::ExceedsWithdrawalCap {
                requested: amount,
                cap,
            });
        }

        self.savings.base_account_mut().try_withdraw(amount)?;
        self.withdrawal_count += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "{}, Withdrawals Left: {}",
            self.savings.describe(),
            self.withdrawals_left()
        )
    }

    fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            kind: AccountKind::Trust,
            withdrawals_left: Some(self.withdrawals_left()),
            ..self.savings.snapshot()
        }
    }
}
