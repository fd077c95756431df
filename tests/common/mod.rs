//! Shared utilities for integration testing: an in-process JSON-RPC stub.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Static chain state served by the stub.
#[derive(Clone)]
pub struct MockChain {
    pub chain_id: u64,
    pub gas_price: u128,
    pub start_nonce: u64,
    /// Accept this many submissions, then fail every further one.
    pub fail_after: Option<usize>,
    /// Receipt served for any hash: `None` keeps transactions pending,
    /// `Some(true)` reports success at block 0x10, `Some(false)` a revert.
    pub receipt_status: Option<bool>,
    /// Message returned by `eth_call`.
    pub stored_message: String,
}

impl Default for MockChain {
    fn default() -> Self {
        Self {
            chain_id: 31337,
            gas_price: 1_000_000_000,
            start_nonce: 0,
            fail_after: None,
            receipt_status: Some(true),
            stored_message: "hello from the stub".to_string(),
        }
    }
}

struct MockState {
    chain: MockChain,
    calls: Mutex<HashMap<String, u32>>,
    raw_txs: Mutex<Vec<String>>,
}

/// Handle to a running JSON-RPC stub.
pub struct MockRpc {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockRpc {
    pub async fn start(chain: MockChain) -> Self {
        let state = Arc::new(MockState {
            chain,
            calls: Mutex::new(HashMap::new()),
            raw_txs: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/", post(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// How many times the given RPC method was invoked.
    #[allow(dead_code)]
    pub fn call_count(&self, method: &str) -> u32 {
        *self
            .state
            .calls
            .lock()
            .unwrap()
            .get(method)
            .unwrap_or(&0)
    }

    /// Raw transaction payloads received, in submission order.
    #[allow(dead_code)]
    pub fn raw_txs(&self) -> Vec<String> {
        self.state.raw_txs.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<Arc<MockState>>, Json(request): Json<Value>) -> Json<Value> {
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let id = request["id"].clone();

    *state
        .calls
        .lock()
        .unwrap()
        .entry(method.clone())
        .or_insert(0) += 1;

    let result = match method.as_str() {
        "eth_chainId" => json!(format!("0x{:x}", state.chain.chain_id)),
        "eth_gasPrice" => json!(format!("0x{:x}", state.chain.gas_price)),
        "eth_getTransactionCount" => json!(format!("0x{:x}", state.chain.start_nonce)),
        "eth_sendRawTransaction" => {
            let mut raw_txs = state.raw_txs.lock().unwrap();
            if state
                .chain
                .fail_after
                .is_some_and(|limit| raw_txs.len() >= limit)
            {
                return Json(json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": { "code": -32000, "message": "nonce too low" },
                }));
            }
            let raw = request["params"][0].as_str().unwrap_or_default().to_string();
            raw_txs.push(raw);
            json!(format!("0x{:064x}", raw_txs.len()))
        }
        "eth_getTransactionReceipt" => match state.chain.receipt_status {
            None => Value::Null,
            Some(ok) => receipt_json(&request["params"][0], ok),
        },
        "eth_call" => {
            use alloy::sol_types::SolValue;
            let encoded = state.chain.stored_message.abi_encode();
            json!(format!("0x{}", alloy::hex::encode(encoded)))
        }
        _ => Value::Null,
    };

    Json(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

fn receipt_json(tx_hash: &Value, ok: bool) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": "0x5b3b1a6b4f9e27c3f1e9b4c7a8d2e6f0a1b2c3d4e5f60718293a4b5c6d7e8f90",
        "blockNumber": "0x10",
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "contractAddress": null,
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "status": if ok { "0x1" } else { "0x0" },
        "type": "0x0",
    })
}
