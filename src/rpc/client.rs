//! HTTP client for communicating with the node's JSON-RPC endpoint.

use super::types::{JsonRpcRequest, JsonRpcResponse, TransactionReceipt};
use crate::tx::TransactionRequest;
use crate::utils::config::DEFAULT_RPC_TIMEOUT;
use crate::utils::error::RpcError;
use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

/// Blocking JSON-RPC client bound to one endpoint
pub struct RpcClient {
    client: Client,
    rpc_url: String,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(DEFAULT_RPC_TIMEOUT)
            .build()
            .map_err(RpcError::RequestFailed)?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    /// Submit a transaction from an unlocked account, returning its hash
    pub fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, RpcError> {
        let request = JsonRpcRequest::send_transaction(tx);

        match self.call(&request)? {
            Some(Value::String(hash)) => Ok(hash),
            Some(other) => Err(RpcError::InvalidResponse(format!(
                "expected transaction hash, got {}",
                other
            ))),
            None => Err(RpcError::InvalidResponse("Missing result field".to_string())),
        }
    }

    /// Fetch a receipt; `None` while the transaction is still pending
    pub fn get_transaction_receipt(
        &self,
        tx_hash: &str,
    ) -> Result<Option<TransactionReceipt>, RpcError> {
        let request = JsonRpcRequest::get_transaction_receipt(tx_hash);

        match self.call(&request)? {
            Some(result) if is_truthy(&result) => Ok(Some(TransactionReceipt(result))),
            _ => Ok(None),
        }
    }

    /// POST one request and unwrap the JSON-RPC envelope
    fn call(&self, request: &JsonRpcRequest) -> Result<Option<Value>, RpcError> {
        debug!("RPC request: {:?}", request);

        // Make HTTP POST request
        let response = self
            .client
            .post(&self.rpc_url)
            .json(request)
            .send()
            .map_err(RpcError::RequestFailed)?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::HttpStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        // Parse JSON-RPC response
        let rpc_response: JsonRpcResponse<Value> =
            response.json().map_err(RpcError::RequestFailed)?;

        debug!("RPC response to {}: {:?}", request.method, rpc_response.result);

        // Handle JSON-RPC error
        if let Some(error) = rpc_response.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(rpc_response.result)
    }
}

/// `null`, `false`, empty strings and empty containers carry no receipt
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!({ "status": "0x1" })));
    }

    #[test]
    fn test_send_transaction_unreachable() {
        // Port 1 is never served in the test environment
        let client = RpcClient::new("http://127.0.0.1:1").unwrap();
        let tx = TransactionRequest::call(
            "0x3f1eae7d46d88f08fc2f8ed27fcb2ab183eb2d0e",
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "",
            "",
        )
        .unwrap();

        let err = client.send_transaction(&tx).unwrap_err();
        assert!(matches!(err, RpcError::RequestFailed(_)));
        assert!(err.is_transient());
    }
}
