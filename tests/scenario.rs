// Integration tests: public API and the built-in demo scenario

use bank_accounts::{
    combined_balance, deposit_all, run_scenario, withdraw_all, Account, AccountKind, BankAccount,
    CheckingAccount, SavingsAccount, Scenario, TrustAccount,
};

#[test]
fn test_default_run_base_accounts() {
    let text = run_scenario(&Scenario::default()).to_string();

    assert!(text.starts_with(
        "\n=== Accounts ==========================================\n\
         Name: Unnamed Account, Balance: 0\n\
         Name: Larry, Balance: 0\n\
         Name: Moe, Balance: 2000\n\
         Name: Curly, Balance: 5000\n"
    ));
    assert!(text.contains("Deposited 1000 to Name: Curly, Balance: 6000\n"));
    assert!(text.contains("Failed Withdrawal of 2000 from Name: Larry, Balance: 1000\n"));
    assert!(text.contains("Withdrew 2000 from Name: Curly, Balance: 4000\n"));
}

#[test]
fn test_default_run_checking_accounts() {
    let text = run_scenario(&Scenario::default()).to_string();

    assert!(text.contains("Withdrew 2000 from Name: Moe2, Balance: 998.5, Withdrawal Fee: 1.5\n"));
    assert!(text.contains("Withdrew 2000 from Name: Curly2, Balance: 3998.5, Withdrawal Fee: 1.5\n"));
    assert!(text.contains(
        "Failed Withdrawal of 2000 from Name: Larry2, Balance: 1000, Withdrawal Fee: 1.5\n"
    ));
}

#[test]
fn test_default_run_trust_accounts_capped() {
    let run = run_scenario(&Scenario::default());
    let trust = run.groups.last().unwrap();

    assert_eq!(trust.label, "Trust");
    // 2000 is more than 20% of every trust balance after the deposit
    assert_eq!(trust.reports[2].failure_count(), 4);
    for account in &trust.accounts {
        assert_eq!(account.kind, AccountKind::Trust);
        assert_eq!(account.withdrawals_left, Some(3));
    }
}

#[test]
fn test_default_run_json() {
    let run = run_scenario(&Scenario::default());
    let json = serde_json::to_value(&run).unwrap();

    assert_eq!(json["total_balance"], 7000.0);
    assert_eq!(json["groups"].as_array().unwrap().len(), 4);
    assert_eq!(json["groups"][2]["accounts"][3]["withdrawal_fee"], 1.5);
    assert_eq!(json["groups"][0]["reports"][1]["operation"], "deposit");
}

#[test]
fn test_mixed_collection_dispatch() {
    let mut accounts: Vec<Box<dyn BankAccount>> = vec![
        Box::new(Account::new("Plain", 10_000.0)),
        Box::new(SavingsAccount::new("Saver", 10_000.0, 0.0)),
        Box::new(CheckingAccount::new("Checker", 10_000.0)),
        Box::new(TrustAccount::new("Trustee", 10_000.0, 0.0)),
    ];

    deposit_all(&mut accounts, 5000.0);
    let balances: Vec<f64> = accounts.iter().map(|a| a.balance()).collect();
    assert_eq!(balances, vec![15_000.0, 15_000.0, 15_000.0, 15_050.0]);

    withdraw_all(&mut accounts, 1000.0);
    let balances: Vec<f64> = accounts.iter().map(|a| a.balance()).collect();
    assert_eq!(balances, vec![14_000.0, 14_000.0, 13_998.5, 14_050.0]);
}

#[test]
fn test_trust_withdrawal_sequence() {
    let mut trust = TrustAccount::new("Trustee", 5000.0, 3.0);

    for _ in 0..3 {
        assert!(trust.withdraw(500.0));
    }
    assert!(!trust.withdraw(1.0));
    assert_eq!(trust.balance(), 3500.0);
    assert_eq!(
        trust.describe(),
        "Name: Trustee, Balance: 3500, Interest Rate: 3, Withdrawals Left: 0"
    );
}

#[test]
fn test_combined_balance_across_variants() {
    let checking = CheckingAccount::new("Curly2", 2998.5);
    let trust = TrustAccount::new("Trustee", 1000.0, 3.0);

    assert_eq!(combined_balance(&checking, &trust), 3998.5);
}

#[test]
fn test_custom_scenario_json() {
    let scenario = Scenario::from_json(
        r#"{ "groups": [ { "label": "Checking", "deposit": 0, "withdraw": 100,
              "accounts": [ { "type": "checking", "name": "Solo", "balance": 101.5 } ] } ] }"#,
    )
    .unwrap();

    let run = run_scenario(&scenario);
    let text = run.to_string();

    assert!(text.contains("Failed Deposit of 0 to Name: Solo, Balance: 101.5, Withdrawal Fee: 1.5\n"));
    assert!(text.contains("Withdrew 100 from Name: Solo, Balance: 0, Withdrawal Fee: 1.5\n"));
    assert_eq!(run.total_balance, 0.0);
}
