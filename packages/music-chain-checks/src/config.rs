//! Check configuration.

use music_chain_types::{parse_address, Address, Amount, FiatRate};
use serde::Deserialize;
use std::time::Duration;

use crate::balance::BalancePolicy;
use crate::Error;

/// Plain environment variable holding the deployed contract address.
pub const CONTRACT_ADDRESS_VAR: &str = "CONTRACT_ADDRESS";

/// Configuration shared by both checks.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::rpc_url")]
    pub rpc_url: String,

    /// Explicit signer address; the node's first account when unset.
    #[serde(default = "defaults::signer")]
    pub signer: Option<String>,

    #[serde(default = "defaults::contract_address")]
    pub contract_address: Option<String>,

    /// Estimated deployment cost in native units.
    #[serde(default = "defaults::deploy_cost")]
    pub deploy_cost: String,

    /// Fiat price of one native unit.
    #[serde(default = "defaults::fiat_rate")]
    pub fiat_rate: String,

    #[serde(default = "defaults::currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "defaults::rpc_timeout_secs")]
    pub rpc_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: defaults::rpc_url(),
            signer: defaults::signer(),
            contract_address: defaults::contract_address(),
            deploy_cost: defaults::deploy_cost(),
            fiat_rate: defaults::fiat_rate(),
            currency_symbol: defaults::currency_symbol(),
            rpc_timeout_secs: defaults::rpc_timeout_secs(),
        }
    }
}

impl Config {
    /// Load from an optional `checks.toml` and `CHECKS_*` environment variables.
    pub fn load() -> Result<Self, Error> {
        config::Config::builder()
            .add_source(config::File::with_name("checks").required(false))
            .add_source(config::Environment::with_prefix("CHECKS"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(format!("Failed to load configuration: {e}")))
    }

    /// The deployed contract, `None` when not configured.
    pub fn contract_address(&self) -> Result<Option<Address>, Error> {
        parse_optional_address(self.contract_address.as_deref(), CONTRACT_ADDRESS_VAR)
    }

    pub fn signer_address(&self) -> Result<Option<Address>, Error> {
        parse_optional_address(self.signer.as_deref(), "CHECKS_SIGNER")
    }

    pub fn balance_policy(&self) -> Result<BalancePolicy, Error> {
        let deploy_cost = Amount::parse(&self.deploy_cost)
            .map_err(|e| Error::Config(format!("Invalid deploy_cost: {e}")))?;
        let fiat_rate = FiatRate::parse(&self.fiat_rate)
            .map_err(|e| Error::Config(format!("Invalid fiat_rate: {e}")))?;

        Ok(BalancePolicy {
            deploy_cost,
            fiat_rate,
            symbol: self.currency_symbol.clone(),
        })
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs.max(1))
    }
}

fn parse_optional_address(value: Option<&str>, name: &str) -> Result<Option<Address>, Error> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_address(raw)
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid {name}: {e}"))),
    }
}

mod defaults {
    use music_chain_types::{Amount, FiatRate, U256};

    use crate::balance::{
        DEFAULT_CURRENCY_SYMBOL, DEFAULT_DEPLOY_COST_WEI, DEFAULT_FIAT_RATE_CENTS,
    };

    fn non_empty_var(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn rpc_url() -> String {
        "http://127.0.0.1:8545".into()
    }

    pub fn signer() -> Option<String> {
        None
    }

    pub fn contract_address() -> Option<String> {
        non_empty_var(super::CONTRACT_ADDRESS_VAR)
    }

    pub fn deploy_cost() -> String {
        Amount::from_wei(U256::from(DEFAULT_DEPLOY_COST_WEI)).to_string()
    }

    pub fn fiat_rate() -> String {
        FiatRate::from_cents(DEFAULT_FIAT_RATE_CENTS).to_string()
    }

    pub fn currency_symbol() -> String {
        DEFAULT_CURRENCY_SYMBOL.into()
    }

    pub fn rpc_timeout_secs() -> u64 {
        10
    }
}
