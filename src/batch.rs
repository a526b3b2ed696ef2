// 📋 Batch Operations - apply one operation across a collection of accounts
//
// Every account is visited in order, whatever happened to the previous one.
// Dispatch goes through BankAccount, so each variant's own rules apply.

use crate::accounts::{format_amount, BankAccount};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// OPERATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchOperation {
    Display,
    Deposit,
    Withdraw,
}

impl BatchOperation {
    /// Section header printed before the entries
    pub fn header(&self) -> &'static str {
        match self {
            BatchOperation::Display => "=== Accounts ==========================================",
            BatchOperation::Deposit => {
                "=== Depositing to Accounts ================================="
            }
            BatchOperation::Withdraw => {
                "=== Withdrawing from Accounts =============================="
            }
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Account name
    pub account: String,

    /// Whether the operation was applied (always true for display)
    pub success: bool,

    /// Account description after the operation
    pub description: String,

    /// Console line for this entry
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub operation: BatchOperation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    fn new(operation: BatchOperation, amount: Option<f64>) -> Self {
        BatchReport {
            operation,
            amount,
            entries: Vec::new(),
        }
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.entries.iter().all(|e| e.success)
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.operation.header())?;
        for entry in &self.entries {
            writeln!(f, "{}", entry.message)?;
        }
        Ok(())
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Describe every account, in order (read-only)
pub fn display_all(accounts: &[Box<dyn BankAccount>]) -> BatchReport {
    let mut report = BatchReport::new(BatchOperation::Display, None);

    for account in accounts {
        let description = account.describe();
        report.entries.push(BatchEntry {
            account: account.name().to_string(),
            success: true,
            message: description.clone(),
            description,
        });
    }

    report
}

/// Deposit `amount` into every account, reporting each outcome
pub fn deposit_all(accounts: &mut [Box<dyn BankAccount>], amount: f64) -> BatchReport {
    let mut report = BatchReport::new(BatchOperation::Deposit, Some(amount));

    for account in accounts.iter_mut() {
        let success = account.deposit(amount);
        let description = account.describe();
        let message = if success {
            format!("Deposited {} to {}", format_amount(amount), description)
        } else {
            format!("Failed Deposit of {} to {}", format_amount(amount), description)
        };

        tracing::debug!(account = account.name(), kind = account.kind().as_str(), success, "deposit");
        report.entries.push(BatchEntry {
            account: account.name().to_string(),
            success,
            description,
            message,
        });
    }

    tracing::info!(
        amount,
        succeeded = report.success_count(),
        failed = report.failure_count(),
        "batch deposit complete"
    );
    report
}

/// Withdraw `amount` from every account, reporting each outcome
pub fn withdraw_all(accounts: &mut [Box<dyn BankAccount>], amount: f64) -> BatchReport {
    let mut report = BatchReport::new(BatchOperation::Withdraw, Some(amount));

    for account in accounts.iter_mut() {
        let success = account.withdraw(amount);
        let description = account.describe();
        let message = if success {
            format!("Withdrew {} from {}", format_amount(amount), description)
        } else {
            format!("Failed Withdrawal of {} from {}", format_amount(amount), description)
        };

        tracing::debug!(account = account.name(), kind = account.kind().as_str(), success, "withdraw");
        report.entries.push(BatchEntry {
            account: account.name().to_string(),
            success,
            description,
            message,
        });
    }

    tracing::info!(
        amount,
        succeeded = report.success_count(),
        failed = report.failure_count(),
        "batch withdrawal complete"
    );
    report
}

// ============================================================================
// TESTS
// ============================================================================
