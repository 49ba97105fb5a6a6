//! The chain reads both checks depend on.

use music_chain_types::{Account, Address, Amount};
use tracing::debug;

use crate::rpc::RpcClient;
use crate::Error;

/// Read-only access to a chain on behalf of one signer.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    /// The account this process acts as.
    async fn signer(&self) -> Result<Account, Error>;

    /// Native balance of `address`.
    async fn balance(&self, address: Address) -> Result<Amount, Error>;

    /// Read-only contract call; returns the raw ABI-encoded return data.
    async fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, Error>;
}

impl ChainReader for RpcClient {
    async fn signer(&self) -> Result<Account, Error> {
        if let Some(address) = self.configured_signer() {
            return Ok(Account::new(address));
        }
        let accounts = self.accounts().await?;
        debug!(count = accounts.len(), "Node accounts");
        accounts
            .first()
            .copied()
            .map(Account::new)
            .ok_or_else(|| Error::Rpc("eth_accounts returned no accounts".into()))
    }

    async fn balance(&self, address: Address) -> Result<Amount, Error> {
        self.get_balance(address).await.map(Amount::from_wei)
    }

    async fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, Error> {
        RpcClient::call(self, to, data).await
    }
}
