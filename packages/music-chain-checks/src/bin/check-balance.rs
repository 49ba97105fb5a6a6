//! Checks whether the signer can pay for deploying the platform contract.

use music_chain_checks::{check_balance, cli, BalanceReport, Config, Error};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_tracing();
    info!("Checking deployment balance");
    cli::finish(run().await)
}

async fn run() -> Result<BalanceReport, Error> {
    let config = Config::load()?;
    let policy = config.balance_policy()?;
    let client = cli::connect(&config)?;
    check_balance(&client, &policy).await
}
