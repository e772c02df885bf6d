//! Stylus send-tx
//!
//! Sends a single transaction to an Ethereum-compatible JSON-RPC node
//! (typically a local Nitro dev node) from an unlocked account, then
//! waits for its receipt.
//!
//! This crate provides the implementation behind the `send_tx` binary
//! used by the cargo-stylus integration tests:
//!
//! ```bash
//! send_tx http://localhost:8547 <from> <to> "transfer(address,uint256)" <params>
//! ```
//!
//! The binary prints the transaction hash and exits with status 0 only
//! when the receipt reports success.

pub mod commands;
pub mod rpc;
pub mod submitter;
pub mod tx;
pub mod utils;

pub use submitter::{SubmitterConfig, TransactionSubmitter};
