//! In-process JSON-RPC node for exercising the checks over real HTTP.

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use music_chain_checks::RpcClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const OWNER_SELECTOR: &str = "0x8da5cb5b";

/// Canned chain state served by [`spawn_node`].
#[derive(Default)]
pub struct MockNode {
    pub accounts: Vec<String>,
    /// Lowercase address → hex quantity.
    pub balances: HashMap<String, String>,
    /// Lowercase contract address → hex return data of `owner()`.
    pub owners: HashMap<String, String>,
    fail_with: Option<(i64, String)>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    methods: std::sync::Mutex<Vec<String>>,
}

impl MockNode {
    pub fn with_account(account: &str) -> Self {
        Self {
            accounts: vec![account.to_string()],
            ..Self::default()
        }
    }

    pub fn balance(mut self, address: &str, wei_hex: &str) -> Self {
        self.balances
            .insert(address.to_lowercase(), wei_hex.to_string());
        self
    }

    pub fn owner(mut self, contract: &str, owner: &str) -> Self {
        let word = format!("0x{:0>64}", owner.trim_start_matches("0x").to_lowercase());
        self.owners.insert(contract.to_lowercase(), word);
        self
    }

    /// Answer every request with a JSON-RPC error object.
    pub fn failing(mut self, code: i64, message: &str) -> Self {
        self.fail_with = Some((code, message.to_string()));
        self
    }

    /// Hold every response for `delay`.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn methods(&self) -> Vec<String> {
        self.methods.lock().unwrap().clone()
    }

    fn answer(&self, method: &str, params: &Value) -> Result<Value, (i64, String)> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        match method {
            "eth_accounts" => Ok(json!(self.accounts)),
            "eth_getBalance" => {
                let address = params[0].as_str().unwrap_or_default().to_lowercase();
                let wei = self.balances.get(&address).map_or("0x0", String::as_str);
                Ok(json!(wei))
            }
            "eth_call" => {
                let to = params[0]["to"].as_str().unwrap_or_default().to_lowercase();
                if params[0]["data"].as_str() != Some(OWNER_SELECTOR) {
                    return Err((-32000, "execution reverted".into()));
                }
                let data = self.owners.get(&to).map_or("0x", String::as_str);
                Ok(json!(data))
            }
            other => Err((-32601, format!("the method {other} does not exist"))),
        }
    }
}

async fn handle(State(node): State<Arc<MockNode>>, Json(req): Json<Value>) -> Json<Value> {
    node.calls.fetch_add(1, Ordering::SeqCst);
    let method = req["method"].as_str().unwrap_or_default().to_string();
    node.methods.lock().unwrap().push(method.clone());
    if let Some(delay) = node.delay {
        tokio::time::sleep(delay).await;
    }

    let id = req["id"].clone();
    Json(match node.answer(&method, &req["params"]) {
        Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": code, "message": message}
        }),
    })
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

/// Serve `node` on an ephemeral port; returns its base URL.
///
/// `POST /` speaks JSON-RPC, `POST /broken` always answers HTTP 500.
pub async fn spawn_node(node: MockNode) -> Result<(String, Arc<MockNode>)> {
    let node = Arc::new(node);
    let app = Router::new()
        .route("/", post(handle))
        .route("/broken", post(broken))
        .with_state(Arc::clone(&node));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), node))
}

pub fn client(url: &str) -> Result<RpcClient> {
    Ok(RpcClient::new(url, Duration::from_secs(5))?)
}
