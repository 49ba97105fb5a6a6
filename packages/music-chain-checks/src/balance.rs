//! Deployment funding check.

use music_chain_types::{Account, Amount, FiatAmount, FiatRate, U256};
use std::fmt;
use tracing::{info, warn};

use crate::chain::ChainReader;
use crate::Error;

/// Estimated cost of deploying the platform contract (0.0066 native units).
pub const DEFAULT_DEPLOY_COST_WEI: u64 = 6_600_000_000_000_000;
/// Fiat price of one native unit, in cents (1270.00).
pub const DEFAULT_FIAT_RATE_CENTS: u64 = 127_000;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "ETH";

/// What the signer must hold, and how shortfalls are priced.
#[derive(Debug, Clone)]
pub struct BalancePolicy {
    pub deploy_cost: Amount,
    pub fiat_rate: FiatRate,
    pub symbol: String,
}

impl Default for BalancePolicy {
    fn default() -> Self {
        Self {
            deploy_cost: Amount::from_wei(U256::from(DEFAULT_DEPLOY_COST_WEI)),
            fiat_rate: FiatRate::from_cents(DEFAULT_FIAT_RATE_CENTS),
            symbol: DEFAULT_CURRENCY_SYMBOL.into(),
        }
    }
}

impl BalancePolicy {
    /// Compare `balance` against the deployment cost.
    pub fn assess(&self, balance: Amount) -> Result<Funding, Error> {
        match self.deploy_cost.checked_sub(balance) {
            None => Ok(Funding::Sufficient),
            Some(needed) if needed == Amount::ZERO => Ok(Funding::Sufficient),
            Some(needed) => {
                let fiat = self.fiat_rate.estimate(needed).map_err(|e| {
                    Error::Config(format!("Fiat estimate for {needed} failed: {e}"))
                })?;
                Ok(Funding::Shortfall { needed, fiat })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Funding {
    Sufficient,
    Shortfall { needed: Amount, fiat: FiatAmount },
}

/// Outcome of a balance check.
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub account: Account,
    pub balance: Amount,
    pub deploy_cost: Amount,
    pub funding: Funding,
    pub symbol: String,
}

impl BalanceReport {
    pub fn is_sufficient(&self) -> bool {
        self.funding == Funding::Sufficient
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = &self.symbol;
        writeln!(f, "Account: {}", self.account.address)?;
        writeln!(f, "Balance: {} {sym}", self.balance)?;
        writeln!(f, "Required for deployment: ~{} {sym}", self.deploy_cost)?;
        match &self.funding {
            Funding::Sufficient => writeln!(f, "Sufficient balance for deployment"),
            Funding::Shortfall { needed, fiat } => {
                writeln!(f, "Insufficient balance for deployment")?;
                writeln!(f, "Need: {needed} more {sym}")?;
                writeln!(f, "Estimated cost: ~${fiat} USD")
            }
        }
    }
}

/// Read the signer's balance and compare it with the deployment cost.
pub async fn check_balance<C: ChainReader>(
    client: &C,
    policy: &BalancePolicy,
) -> Result<BalanceReport, Error> {
    let account = client.signer().await?;
    let balance = client.balance(account.address).await?;
    let funding = policy.assess(balance)?;

    match &funding {
        Funding::Sufficient => {
            info!(account = %account.address, %balance, "Balance covers deployment")
        }
        Funding::Shortfall { needed, .. } => {
            warn!(account = %account.address, %balance, %needed, "Balance below deployment cost")
        }
    }

    Ok(BalanceReport {
        account,
        balance,
        deploy_cost: policy.deploy_cost,
        funding,
        symbol: policy.symbol.clone(),
    })
}
