//! Send command implementation.
//!
//! The send command:
//! 1. Validates the arguments (no network access)
//! 2. Submits the transaction
//! 3. Prints the transaction hash to stdout
//! 4. Polls for the receipt
//! 5. Classifies the outcome

use crate::rpc::TransactionReceipt;
use crate::submitter::{SubmitterConfig, TransactionSubmitter};
use crate::tx::{normalize_params, to_checksum_address};
use crate::utils::config::{
    DEFAULT_GAS, DEFAULT_GAS_PRICE, DEFAULT_RECEIPT_TIMEOUT_SECS, DEFAULT_RPC_URL,
    RECEIPT_POLL_INTERVAL,
};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::{Duration, Instant};

/// Arguments for the send command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SendArgs {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Unlocked sender account
    pub from_address: String,

    /// Contract (or account) receiving the call
    pub to_address: String,

    /// Canonical function signature, empty for raw calldata
    pub function_signature: String,

    /// Pre-encoded ABI parameters as hex
    pub params: String,

    /// Number of receipt polls
    pub timeout_secs: u64,

    /// Gas limit
    pub gas: u64,

    /// Gas price in wei
    pub gas_price: u64,

    /// Delay between receipt polls
    pub poll_interval: Duration,
}

impl Default for SendArgs {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            from_address: String::new(),
            to_address: String::new(),
            function_signature: String::new(),
            params: String::new(),
            timeout_secs: DEFAULT_RECEIPT_TIMEOUT_SECS,
            gas: DEFAULT_GAS,
            gas_price: DEFAULT_GAS_PRICE,
            poll_interval: RECEIPT_POLL_INTERVAL,
        }
    }
}

/// How the receipt wait ended
#[derive(Debug, Clone)]
pub enum ReceiptOutcome {
    /// Mined with status `0x1`
    Confirmed(TransactionReceipt),
    /// Mined, but the execution reverted
    Reverted(TransactionReceipt),
    /// No receipt within the poll budget
    TimedOut,
}

/// Result of a send that got as far as a transaction hash
#[derive(Debug, Clone)]
pub struct SendReport {
    pub transaction_hash: String,
    pub outcome: ReceiptOutcome,
}

impl SendReport {
    /// Ok only for a confirmed, successful transaction
    pub fn ensure_success(&self) -> Result<()> {
        match &self.outcome {
            ReceiptOutcome::Confirmed(_) => Ok(()),
            ReceiptOutcome::Reverted(receipt) => anyhow::bail!(
                "Transaction {} reverted (status: {})",
                self.transaction_hash,
                receipt.status_display()
            ),
            ReceiptOutcome::TimedOut => anyhow::bail!(
                "No receipt for transaction {} before timeout",
                self.transaction_hash
            ),
        }
    }
}

/// Execute the send command
///
/// **Public** - main entry point called from main.rs
///
/// Prints the transaction hash to stdout as soon as the node accepts the
/// transaction, before waiting for the receipt.
///
/// # Errors
/// * Invalid addresses or params
/// * RPC connection failures or RPC errors on submission
/// * Non-transient RPC failures while polling
pub fn execute_send(args: SendArgs) -> Result<SendReport> {
    let start_time = Instant::now();

    info!("RPC endpoint: {}", args.rpc_url);

    let config = SubmitterConfig {
        gas: args.gas,
        gas_price: args.gas_price,
        poll_interval: args.poll_interval,
    };
    let submitter =
        TransactionSubmitter::new(&args.rpc_url, config).context("Failed to create RPC client")?;

    let tx_hash = submitter
        .submit(
            &args.from_address,
            &args.to_address,
            &args.function_signature,
            &args.params,
        )
        .context("Failed to send transaction")?;

    println!("{}", tx_hash);

    let receipt = submitter
        .await_receipt(&tx_hash, args.timeout_secs)
        .with_context(|| format!("Failed to fetch receipt for transaction {}", tx_hash))?;

    let outcome = match receipt {
        Some(receipt) if receipt.is_success() => {
            info!("✓ Transaction confirmed: {}", receipt.summary());
            ReceiptOutcome::Confirmed(receipt)
        }
        Some(receipt) => {
            warn!("Transaction reverted: {}", receipt.summary());
            ReceiptOutcome::Reverted(receipt)
        }
        None => {
            warn!("No receipt after {} polls", args.timeout_secs);
            ReceiptOutcome::TimedOut
        }
    };

    info!("Send completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(SendReport {
        transaction_hash: tx_hash,
        outcome,
    })
}

/// Validate send arguments
///
/// **Public** - can be called before execute_send for early validation
pub fn validate_args(args: &SendArgs) -> Result<()> {
    // Validate RPC URL
    if args.rpc_url.is_empty() {
        anyhow::bail!("RPC URL cannot be empty");
    }

    if !args.rpc_url.starts_with("http://") && !args.rpc_url.starts_with("https://") {
        anyhow::bail!("RPC URL must start with http:// or https://");
    }

    to_checksum_address(&args.from_address).context("Invalid sender address")?;
    to_checksum_address(&args.to_address).context("Invalid target address")?;
    normalize_params(&args.params).context("Invalid params")?;

    if args.timeout_secs == 0 {
        anyhow::bail!("timeout must be at least 1 second");
    }

    if args.gas == 0 {
        anyhow::bail!("gas must be greater than 0");
    }

    Ok(())
}
