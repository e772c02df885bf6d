//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for RPC requests
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Default RPC endpoint of a local Nitro dev node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8547";

// Fixed transaction parameters. The sending account is unlocked on the
// node, so no nonce or signature is attached.
pub const DEFAULT_GAS: u64 = 0x100000; // 1M gas
pub const DEFAULT_GAS_PRICE: u64 = 0x3b9a_ca00; // 1 gwei

/// Number of receipt polls before giving up
pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 30;

/// Delay between two receipt polls
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Receipt status of a successfully executed transaction
pub const SUCCESS_STATUS: &str = "0x1";

/// JSON-RPC request id. Requests are strictly sequential so it never changes.
pub const JSONRPC_REQUEST_ID: u64 = 1;

// JSON-RPC error codes that no amount of polling will fix
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
