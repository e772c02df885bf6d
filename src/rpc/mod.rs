//! JSON-RPC communication with the node.

pub mod client;
pub mod types;

pub use client::RpcClient;
pub use types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, TransactionReceipt};
