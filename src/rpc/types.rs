//! Types for JSON-RPC communication with an Ethereum-compatible node.
//!
//! Based on the Ethereum JSON-RPC spec for `eth_sendTransaction` and
//! `eth_getTransactionReceipt`.

use crate::tx::TransactionRequest;
use crate::utils::config::{JSONRPC_REQUEST_ID, SUCCESS_STATUS};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Create a request with the fixed request id
    pub fn new(method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: JSONRPC_REQUEST_ID,
        }
    }

    /// `eth_sendTransaction` with a single transaction object
    pub fn send_transaction(tx: &TransactionRequest) -> Self {
        Self::new("eth_sendTransaction", serde_json::json!([tx]))
    }

    /// `eth_getTransactionReceipt` for an opaque transaction hash
    pub fn get_transaction_receipt(tx_hash: &str) -> Self {
        Self::new("eth_getTransactionReceipt", serde_json::json!([tx_hash]))
    }
}

/// JSON-RPC 2.0 response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Transaction receipt as returned by the node.
///
/// Kept as the raw JSON value: only `status` decides the outcome, and the
/// node's field types must not decide whether a mined receipt exists.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TransactionReceipt(pub Value);

impl TransactionReceipt {
    /// Raw field of the receipt object
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    pub fn status(&self) -> Option<&Value> {
        self.field("status")
    }

    pub fn transaction_hash(&self) -> Option<&str> {
        self.field("transactionHash").and_then(Value::as_str)
    }

    /// Whether the transaction executed without reverting.
    ///
    /// Anything but the string `0x1`, including a missing or numeric
    /// status, counts as reverted.
    pub fn is_success(&self) -> bool {
        self.status().and_then(Value::as_str) == Some(SUCCESS_STATUS)
    }

    /// Status rendered for diagnostics
    pub fn status_display(&self) -> String {
        render(self.status())
    }

    /// One-line description for logs
    pub fn summary(&self) -> String {
        format!(
            "status={} block={} gas_used={}",
            render(self.status()),
            render(self.field("blockNumber")),
            render(self.field("gasUsed")),
        )
    }
}

fn render(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "?".to_string(),
    }
}
