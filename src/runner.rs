// ▶️ Scenario Runner - display, deposit, withdraw for each account group
//
// Produces the whole console report as data; the binary only prints it.

use crate::accounts::{format_amount, total_balance, AccountSnapshot};
use crate::batch::{deposit_all, display_all, withdraw_all, BatchReport};
use crate::config::Scenario;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRun {
    pub label: String,

    /// Display, deposit and withdraw reports, in that order
    pub reports: Vec<BatchReport>,

    /// Final state of every account in the group
    pub accounts: Vec<AccountSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRun {
    pub groups: Vec<GroupRun>,

    /// Sum of the first group's final balances
    pub total_balance: f64,
}

pub fn run_scenario(scenario: &Scenario) -> ScenarioRun {
    let mut groups = Vec::with_capacity(scenario.groups.len());
    let mut total = None;

    for group in &scenario.groups {
        tracing::info!(group = %group.label, accounts = group.accounts.len(), "running account group");

        let mut accounts = group.build_accounts();
        let reports = vec![
            display_all(&accounts),
            deposit_all(&mut accounts, group.deposit),
            withdraw_all(&mut accounts, group.withdraw),
        ];

        if total.is_none() {
            total = Some(total_balance(&accounts));
        }

        groups.push(GroupRun {
            label: group.label.clone(),
            reports,
            accounts: accounts.iter().map(|account| account.snapshot()).collect(),
        });
    }

    ScenarioRun {
        groups,
        total_balance: total.unwrap_or(0.0),
    }
}

impl fmt::Display for ScenarioRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            for report in &group.reports {
                write!(f, "{}", report)?;
            }
        }
        writeln!(f, "Total balance of all accounts: {}", format_amount(self.total_balance))?;
        writeln!(f)
    }
}
