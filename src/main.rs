use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use bank_accounts::logging::init_logger;
use bank_accounts::{run_scenario, Scenario};

/// Run a bank account scenario and print every account's state
#[derive(Parser, Debug)]
#[command(name = "bank-accounts", version, about)]
struct Cli {
    /// JSON scenario file (defaults to the built-in demo)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Print the run as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let scenario = match &cli.scenario {
        Some(path) => Scenario::from_file(path)?,
        None => Scenario::default(),
    };

    let run = run_scenario(&scenario);

    if cli.json {
        let json = serde_json::to_string_pretty(&run).context("Failed to serialize run")?;
        println!("{}", json);
    } else {
        print!("{}", run);
    }

    Ok(())
}
