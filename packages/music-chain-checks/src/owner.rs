//! Contract ownership check.

use music_chain_types::Address;
use std::fmt;
use tracing::{info, warn};

use crate::chain::ChainReader;
use crate::config::CONTRACT_ADDRESS_VAR;
use crate::contract::{Ownable, OwnableContract};
use crate::Error;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerReport {
    pub signer: Address,
    pub contract: Address,
    pub owner: Address,
}

impl OwnerReport {
    pub fn signer_is_owner(&self) -> bool {
        self.signer == self.owner
    }
}

impl fmt::Display for OwnerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signer address: {}", self.signer)?;
        writeln!(f, "Contract address: {}", self.contract)?;
        writeln!(f, "Contract owner: {}", self.owner)?;
        writeln!(f, "Signer is owner: {}", self.signer_is_owner())?;
        if !self.signer_is_owner() {
            writeln!(
                f,
                "WARNING: signer {} is not the owner {} of the contract",
                self.signer, self.owner
            )?;
        }
        Ok(())
    }
}

/// Compare the contract's recorded owner with the signer.
///
/// Returns [`Error::MissingConfig`] without touching the chain when no
/// contract address is configured.
pub async fn verify_owner<C: ChainReader>(
    client: &C,
    contract: Option<Address>,
) -> Result<OwnerReport, Error> {
    let Some(contract) = contract else {
        return Err(Error::MissingConfig(CONTRACT_ADDRESS_VAR));
    };

    let binding = OwnableContract::at(client, contract);
    let owner = binding.owner().await?;
    let signer = client.signer().await?.address;

    let report = OwnerReport {
        signer,
        contract: binding.address(),
        owner,
    };
    if report.signer_is_owner() {
        info!(%contract, %owner, "Signer owns contract");
    } else {
        warn!(%contract, %owner, %signer, "Signer is not the contract owner");
    }
    Ok(report)
}
