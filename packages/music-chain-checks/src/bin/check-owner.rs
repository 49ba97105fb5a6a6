//! Checks whether the signer owns the deployed platform contract.

use music_chain_checks::{cli, verify_owner, Config, Error, OwnerReport};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_tracing();
    info!("Verifying contract ownership");
    cli::finish(run().await)
}

async fn run() -> Result<OwnerReport, Error> {
    let config = Config::load()?;
    let contract = config.contract_address()?;
    let client = cli::connect(&config)?;
    verify_owner(&client, contract).await
}
