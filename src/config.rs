// ⚙️ Scenario Config - Accounts as Data
//
// A scenario is an ordered list of account groups. Each group is displayed,
// gets one bulk deposit and one bulk withdrawal. The built-in default is the
// classic demo run (four groups of four accounts, deposit 1000, withdraw 2000).
//
// JSON shape:
//   { "groups": [ { "label": "Savings", "deposit": 1000, "withdraw": 2000,
//                   "accounts": [ { "type": "savings", "name": "Batman", "balance": 2000 } ] } ] }

use crate::accounts::{Account, BankAccount, CheckingAccount, SavingsAccount, TrustAccount};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// ACCOUNT CONFIG
// ============================================================================

/// One account to construct; missing fields fall back to the type's defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountConfig {
    Account {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        balance: f64,
    },
    Savings {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        balance: f64,
        #[serde(default = "default_interest_rate")]
        interest_rate: f64,
    },
    Checking {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        balance: f64,
    },
    Trust {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        balance: f64,
        #[serde(default = "default_interest_rate")]
        interest_rate: f64,
    },
}

fn default_interest_rate() -> f64 {
    SavingsAccount::DEFAULT_INTEREST_RATE
}

impl AccountConfig {
    /// Factory: builds the concrete account behind the trait object
    pub fn build(&self) -> Box<dyn BankAccount> {
        match self {
            AccountConfig::Account { name, balance } => Box::new(Account::new(
                name.as_deref().unwrap_or(Account::DEFAULT_NAME),
                *balance,
            )),
            AccountConfig::Savings {
                name,
                balance,
                interest_rate,
            } => Box::new(SavingsAccount::new(
                name.as_deref().unwrap_or(SavingsAccount::DEFAULT_NAME),
                *balance,
                *interest_rate,
            )),
            AccountConfig::Checking { name, balance } => Box::new(CheckingAccount::new(
                name.as_deref().unwrap_or(CheckingAccount::DEFAULT_NAME),
                *balance,
            )),
            AccountConfig::Trust {
                name,
                balance,
                interest_rate,
            } => Box::new(TrustAccount::new(
                name.as_deref().unwrap_or(TrustAccount::DEFAULT_NAME),
                *balance,
                *interest_rate,
            )),
        }
    }
}

// ============================================================================
// ACCOUNT GROUP
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountGroup {
    /// Label used in logs
    pub label: String,

    pub accounts: Vec<AccountConfig>,

    /// Amount deposited into every account of the group
    #[serde(default = "default_deposit")]
    pub deposit: f64,

    /// Amount withdrawn from every account of the group
    #[serde(default = "default_withdraw")]
    pub withdraw: f64,
}

fn default_deposit() -> f64 {
    1000.0
}

fn default_withdraw() -> f64 {
    2000.0
}

impl AccountGroup {
    pub fn build_accounts(&self) -> Vec<Box<dyn BankAccount>> {
        self.accounts.iter().map(AccountConfig::build).collect()
    }
}

// ============================================================================
// SCENARIO
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub groups: Vec<AccountGroup>,
}

impl Scenario {
    /// Load a scenario from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read scenario file: {:?}", path.as_ref()))?;

        Scenario::from_json(&content)
    }

    /// Parse and validate a scenario from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let scenario: Scenario =
            serde_json::from_str(content).context("Failed to parse scenario JSON")?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// A scenario needs at least one group, and no group may be empty
    pub fn validate(&self) -> Result<()> {
        if self.groups.is_empty() {
            bail!("Scenario has no account groups");
        }
        for group in &self.groups {
            if group.accounts.is_empty() {
                bail!("Account group '{}' has no accounts", group.label);
            }
        }
        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        fn named(name: &str) -> Option<String> {
            Some(name.to_string())
        }

        let rate = SavingsAccount::DEFAULT_INTEREST_RATE;

        Scenario {
            groups: vec![
                AccountGroup {
                    label: "Accounts".to_string(),
                    accounts: vec![
                        AccountConfig::Account { name: None, balance: 0.0 },
                        AccountConfig::Account { name: named("Larry"), balance: 0.0 },
                        AccountConfig::Account { name: named("Moe"), balance: 2000.0 },
                        AccountConfig::Account { name: named("Curly"), balance: 5000.0 },
                    ],
                    deposit: default_deposit(),
                    withdraw: default_withdraw(),
                },
                AccountGroup {
                    label: "Savings".to_string(),
                    accounts: vec![
                        AccountConfig::Savings { name: None, balance: 0.0, interest_rate: rate },
                        AccountConfig::Savings { name: named("Superman"), balance: 0.0, interest_rate: rate },
                        AccountConfig::Savings { name: named("Batman"), balance: 2000.0, interest_rate: rate },
                        AccountConfig::Savings { name: named("Wonderwoman"), balance: 5000.0, interest_rate: 5.0 },
                    ],
                    deposit: default_deposit(),
                    withdraw: default_withdraw(),
                },
                AccountGroup {
                    label: "Checking".to_string(),
                    accounts: vec![
                        AccountConfig::Checking { name: None, balance: 0.0 },
                        AccountConfig::Checking { name: named("Larry2"), balance: 0.0 },
                        AccountConfig::Checking { name: named("Moe2"), balance: 2000.0 },
                        AccountConfig::Checking { name: named("Curly2"), balance: 5000.0 },
                    ],
                    deposit: default_deposit(),
                    withdraw: default_withdraw(),
                },
                AccountGroup {
                    label: "Trust".to_string(),
                    accounts: vec![
                        AccountConfig::Trust { name: None, balance: 0.0, interest_rate: rate },
                        AccountConfig::Trust { name: named("Superman2"), balance: 0.0, interest_rate: rate },
                        AccountConfig::Trust { name: named("Batman2"), balance: 2000.0, interest_rate: rate },
                        AccountConfig::Trust { name: named("Wonderwoman2"), balance: 5000.0, interest_rate: 5.0 },
                    ],
                    deposit: default_deposit(),
                    withdraw: default_withdraw(),
                },
            ],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
