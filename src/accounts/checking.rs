// 🧾 Checking Account - fixed fee on every withdrawal
//
// withdraw: base rule applied to (amount + fee), so a rejected
// withdrawal charges nothing.

use super::account::{format_amount, Account, AccountKind, AccountSnapshot, BankAccount};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckingAccount {
    account: Account,
}

impl CheckingAccount {
    pub const DEFAULT_NAME: &'static str = "Unnamed Checking Account";
    pub const WITHDRAWAL_FEE: f64 = 1.50;

    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        CheckingAccount {
            account: Account::new(name, balance),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        CheckingAccount::new(name, 0.0)
    }
}

impl Default for CheckingAccount {
    fn default() -> Self {
        CheckingAccount::named(Self::DEFAULT_NAME)
    }
}

impl BankAccount for CheckingAccount {
    fn name(&self) -> &str {
        self.account.name()
    }

    fn balance(&self) -> f64 {
        self.account.balance()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn try_deposit(&mut self, amount: f64) -> Result<()> {
        self.account.try_deposit(amount)
    }

    fn try_withdraw(&mut self, amount: f64) -> Result<()> {
        self.account.try_withdraw(amount + Self::WITHDRAWAL_FEE)
    }

    fn describe(&self) -> String {
        format!(
            "{}, Withdrawal Fee: {}",
            self.account.describe(),
            format_amount(Self::WITHDRAWAL_FEE)
        )
    }

    fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            kind: AccountKind::Checking,
            withdrawal_fee: Some(Self::WITHDRAWAL_FEE),
            ..self.account.snapshot()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::error::TransactionError;

    #[test]
    fn test_withdraw_charges_fee() {
        let mut account = CheckingAccount::new("Curly2", 5000.0);

        assert!(account.withdraw(2000.0));
        assert_eq!(account.balance(), 2998.5);
    }

    #[test]
    fn test_fee_counts_toward_balance_check() {
        let mut account = CheckingAccount::new("Moe2", 2000.0);

        // 2000 + 1.50 > 2000
        assert!(!account.withdraw(2000.0));
        assert_eq!(account.balance(), 2000.0);

        assert!(account.withdraw(1998.5));
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_rejected_withdrawal_reports_amount_with_fee() {
        let mut account = CheckingAccount::named("Larry2");

        assert_eq!(
            account.try_withdraw(10.0),
            Err(TransactionError::InsufficientFunds {
                balance: 0.0,
                requested: 11.5,
            })
        );
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_deposit_has_no_fee() {
        let mut account = CheckingAccount::default();

        assert!(account.deposit(1000.0));
        assert_eq!(account.balance(), 1000.0);
        assert!(!account.deposit(0.0));
    }

    #[test]
    fn test_describe_format() {
        assert_eq!(
            CheckingAccount::new("Curly2", 2998.5).describe(),
            "Name: Curly2, Balance: 2998.5, Withdrawal Fee: 1.5"
        );
        assert_eq!(
            CheckingAccount::default().describe(),
            "Name: Unnamed Checking Account, Balance: 0, Withdrawal Fee: 1.5"
        );
    }

    proptest! {
        #[test]
        fn test_withdraw_succeeds_iff_balance_covers_amount_and_fee(
            balance in -1.0e6..1.0e6f64,
            amount in -1.0e6..1.0e6f64,
        ) {
            let mut account = CheckingAccount::new("Prop", balance);
            let charged = amount + CheckingAccount::WITHDRAWAL_FEE;
            let covered = balance - charged >= 0.0;

            prop_assert_eq!(account.withdraw(amount), covered);
            if covered {
                prop_assert_eq!(account.balance(), balance - charged);
            } else {
                prop_assert_eq!(account.balance(), balance);
            }
        }
    }
}
