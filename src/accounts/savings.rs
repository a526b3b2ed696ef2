// 🏦 Savings Account - interest accrues on every successful deposit
//
// deposit: base rule, then balance += balance * (rate / 100)
// Interest is computed on the post-deposit balance in the same call.

use super::account::{format_amount, Account, AccountKind, AccountSnapshot, BankAccount};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    account: Account,
    interest_rate: f64,
}

impl SavingsAccount {
    pub const DEFAULT_NAME: &'static str = "Unnamed Savings Account";
    pub const DEFAULT_INTEREST_RATE: f64 = 3.0;

    /// Create a savings account; `interest_rate` is a percentage and is not validated
    pub fn new(name: impl Into<String>, balance: f64, interest_rate: f64) -> Self {
        SavingsAccount {
            account: Account::new(name, balance),
            interest_rate,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        SavingsAccount::new(name, 0.0, Self::DEFAULT_INTEREST_RATE)
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Underlying base account, for variants that bypass the savings layer
    pub(crate) fn base_account_mut(&mut self) -> &mut Account {
        &mut self.account
    }
}

impl Default for SavingsAccount {
    fn default() -> Self {
        SavingsAccount::named(Self::DEFAULT_NAME)
    }
}

impl BankAccount for SavingsAccount {
    fn name(&self) -> &str {
        self.account.name()
    }

    fn balance(&self) -> f64 {
        self.account.balance()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn try_deposit(&mut self, amount: f64) -> Result<()> {
        self.account.try_deposit(amount)?;

        let balance = self.account.balance_mut();
        *balance += *balance * (self.interest_rate / 100.0);
        Ok(())
    }

    fn try_withdraw(&mut self, amount: f64) -> Result<()> {
        self.account.try_withdraw(amount)
    }

    fn describe(&self) -> String {
        format!(
            "{}, Interest Rate: {}",
            self.account.describe(),
            format_amount(self.interest_rate)
        )
    }

    fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            kind: AccountKind::Savings,
            interest_rate: Some(self.interest_rate),
            ..self.account.snapshot()
        }
    }
}
