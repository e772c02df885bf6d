//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::utils::config::{INVALID_PARAMS, METHOD_NOT_FOUND};
use thiserror::Error;

/// Errors that can occur during RPC communication
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// Whether a later identical request may succeed.
    ///
    /// Covers what a flaky dev node produces: refused connections, timeouts,
    /// half-written bodies and server-side failures. Requests the node can
    /// never answer (unknown method, malformed params, client-side HTTP
    /// errors) are not transient.
    pub fn is_transient(&self) -> bool {
        match self {
            RpcError::RequestFailed(e) => {
                e.is_connect() || e.is_timeout() || e.is_decode() || e.is_request() || e.is_body()
            }
            RpcError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            RpcError::Rpc { code, .. } => *code != METHOD_NOT_FOUND && *code != INVALID_PARAMS,
            RpcError::InvalidResponse(_) => true,
        }
    }
}

/// Errors that can occur while encoding addresses and calldata
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AbiError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid hex data: {0}")]
    InvalidHex(String),
}

/// Errors that can occur while submitting a transaction
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}
