//! JSON-RPC client for an EVM node.
//!
//! Read-only: every call is bounded by the configured timeout and faults are
//! returned to the caller without retry.

use alloy_primitives::hex;
use music_chain_types::{parse_address, Address, U256};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

use crate::Error;

/// Block tag for every read.
const BLOCK_TAG: &str = "latest";

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// HTTP JSON-RPC client.
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
    signer: Option<Address>,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        info!(rpc = url, timeout_secs = timeout.as_secs(), "RPC client initialized");
        Ok(Self {
            http,
            url: url.to_string(),
            timeout,
            signer: None,
            next_id: AtomicU64::new(1),
        })
    }

    /// Act as `signer` instead of the node's first unlocked account.
    pub fn with_signer(mut self, signer: Option<Address>) -> Self {
        self.signer = signer;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Explicitly configured signer, if any.
    pub fn configured_signer(&self) -> Option<Address> {
        self.signer
    }

    /// `eth_accounts`: accounts the node manages.
    pub async fn accounts(&self) -> Result<Vec<Address>, Error> {
        let raw: Vec<String> = self.request("eth_accounts", json!([])).await?;
        raw.iter()
            .map(|a| {
                parse_address(a)
                    .map_err(|e| Error::InvalidResponse(format!("eth_accounts: {e}")))
            })
            .collect()
    }

    /// `eth_getBalance` at the latest block, in wei.
    pub async fn get_balance(&self, address: Address) -> Result<U256, Error> {
        let raw: String = self
            .request("eth_getBalance", json!([hex_address(&address), BLOCK_TAG]))
            .await?;
        parse_quantity(&raw).map_err(|e| Error::InvalidResponse(format!("eth_getBalance: {e}")))
    }

    /// `eth_call` at the latest block; returns the raw return data.
    pub async fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, Error> {
        let tx = json!({
            "to": hex_address(&to),
            "data": hex::encode_prefixed(data),
        });
        let raw: String = self.request("eth_call", json!([tx, BLOCK_TAG])).await?;
        hex::decode(&raw).map_err(|e| Error::InvalidResponse(format!("eth_call: {e}")))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Value,
    ) -> Result<T, Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        debug!(method, id, "RPC request");

        let exchange = async {
            let resp = self
                .http
                .post(&self.url)
                .json(&body)
                .send()
                .await
                .map_err(|e| Error::Rpc(format!("{method} failed: {e}")))?;
            let status = resp.status();
            let text = resp
                .text()
                .await
                .map_err(|e| Error::Rpc(format!("{method} failed reading body: {e}")))?;

            match serde_json::from_str::<RpcResponse<T>>(&text) {
                Ok(parsed) => Ok::<_, Error>(parsed),
                Err(_) if !status.is_success() => {
                    Err(Error::Rpc(format!("{method} returned HTTP {status}")))
                }
                Err(e) => Err(Error::InvalidResponse(format!("{method}: {e}"))),
            }
        };

        let resp = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout {
                method,
                secs: self.timeout.as_secs(),
            })??;

        if let Some(err) = resp.error {
            return Err(Error::Rpc(format!(
                "{method}: {} (code {})",
                err.message, err.code
            )));
        }
        resp.result
            .ok_or_else(|| Error::InvalidResponse(format!("{method}: missing result")))
    }
}

/// Lowercase `0x`-prefixed hex, the form every node accepts.
fn hex_address(address: &Address) -> String {
    hex::encode_prefixed(address.as_slice())
}

/// Parse a JSON-RPC hex quantity such as `0x1bc16d674ec80000`.
fn parse_quantity(raw: &str) -> Result<U256, String> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| format!("quantity {raw:?} lacks 0x prefix"))?;
    if digits.is_empty() {
        return Err(format!("empty quantity {raw:?}"));
    }
    U256::from_str_radix(digits, 16).map_err(|e| format!("bad quantity {raw:?}: {e}"))
}
