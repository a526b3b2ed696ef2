// 💳 Account - base entity and the BankAccount trait
//
// Every variant (savings, checking, trust) implements BankAccount and composes
// the base rules below by explicit delegation:
//
//   deposit  : amount > 0             → balance += amount
//   withdraw : balance - amount >= 0  → balance -= amount
//
// Failures never mutate state. The public contract is a bool; the reason is
// available through try_deposit / try_withdraw.

use crate::error::{Result, TransactionError};
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Plain account, base rules only
    Account,

    /// Interest accrues on every successful deposit
    Savings,

    /// Fixed fee charged on every successful withdrawal
    Checking,

    /// Savings with deposit bonus and withdrawal caps
    Trust,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Account => "Account",
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
            AccountKind::Trust => "Trust",
        }
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Serializable view of an account's current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub kind: AccountKind,
    pub name: String,
    pub balance: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_fee: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals_left: Option<u32>,
}

// ============================================================================
// BANK ACCOUNT TRAIT
// ============================================================================

/// BankAccount - Core trait shared by every account variant
///
/// Collections hold `Box<dyn BankAccount>` and dispatch deposit/withdraw
/// without inspecting the concrete type.
pub trait BankAccount {
    fn name(&self) -> &str;

    fn balance(&self) -> f64;

    fn kind(&self) -> AccountKind;

    /// Apply a deposit, or explain why it was rejected (no state change on Err)
    fn try_deposit(&mut self, amount: f64) -> Result<()>;

    /// Apply a withdrawal, or explain why it was rejected (no state change on Err)
    fn try_withdraw(&mut self, amount: f64) -> Result<()>;

    /// "Name: <name>, Balance: <balance>" plus variant-specific suffixes
    fn describe(&self) -> String;

    fn snapshot(&self) -> AccountSnapshot;

    /// Deposit `amount`, returning whether it was applied
    fn deposit(&mut self, amount: f64) -> bool {
        match self.try_deposit(amount) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(account = self.name(), amount, reason = %err, "deposit rejected");
                false
            }
        }
    }

    /// Withdraw `amount`, returning whether it was applied
    fn withdraw(&mut self, amount: f64) -> bool {
        match self.try_withdraw(amount) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(account = self.name(), amount, reason = %err, "withdrawal rejected");
                false
            }
        }
    }
}

// ============================================================================
// BASE RULES
// ============================================================================

/// Base deposit rule: only positive amounts are accepted
pub fn base_deposit(balance: &mut f64, amount: f64) -> Result<()> {
    if amount > 0.0 {
        *balance += amount;
        Ok(())
    } else {
        Err(TransactionError::InvalidAmount { amount })
    }
}

/// Base withdrawal rule: the balance may not go below zero
///
/// Non-positive amounts pass this check and are applied as-is.
pub fn base_withdraw(balance: &mut f64, amount: f64) -> Result<()> {
    if *balance - amount >= 0.0 {
        *balance -= amount;
        Ok(())
    } else {
        Err(TransactionError::InsufficientFunds {
            balance: *balance,
            requested: amount,
        })
    }
}

/// Sum of two accounts' balances (neither account is touched)
pub fn combined_balance(a: &dyn BankAccount, b: &dyn BankAccount) -> f64 {
    a.balance() + b.balance()
}

/// Sum of every balance in a collection
pub fn total_balance(accounts: &[Box<dyn BankAccount>]) -> f64 {
    accounts.iter().map(|account| account.balance()).sum()
}

/// Render an amount for display
///
/// Shortest round-trip digits. Values with a decimal exponent >= 15 or < -4
/// switch to exponent form with a signed, two-digit exponent (1E+16, 1E-07).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let symbol = if value > 0.0 { "∞" } else { "-∞" };
        return symbol.to_string();
    }
    if value == 0.0 {
        return format!("{}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return format!("{}", value),
        },
        None => return format!("{}", value),
    };

    if (-4..15).contains(&exponent) {
        format!("{}", value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", mantissa, sign, exponent.abs())
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    balance: f64,
}

impl Account {
    pub const DEFAULT_NAME: &'static str = "Unnamed Account";

    /// Create an account; the starting balance is not validated
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Account {
            name: name.into(),
            balance,
        }
    }

    /// Named account with a zero balance
    pub fn named(name: impl Into<String>) -> Self {
        Account::new(name, 0.0)
    }

    /// Mutable access to the balance for variants layering rules on top
    pub(crate) fn balance_mut(&mut self) -> &mut f64 {
        &mut self.balance
    }
}

impl Default for Account {
    fn default() -> Self {
        Account::named(Self::DEFAULT_NAME)
    }
}

impl BankAccount for Account {
    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Account
    }

    fn try_deposit(&mut self, amount: f64) -> Result<()> {
        base_deposit(&mut self.balance, amount)
    }

    fn try_withdraw(&mut self, amount: f64) -> Result<()> {
        base_withdraw(&mut self.balance, amount)
    }

    fn describe(&self) -> String {
        format!("Name: {}, Balance: {}", self.name, format_amount(self.balance))
    }

    fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            kind: AccountKind::Account,
            name: self.name.clone(),
            balance: self.balance,
            interest_rate: None,
            withdrawal_fee: None,
            withdrawals_left: None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
