//! Send one transaction and wait for it to be mined.
//!
//! The flow is strictly sequential: build the transaction, submit it once,
//! then poll for the receipt at a fixed cadence until it shows up or the
//! poll budget runs out.

use crate::rpc::{RpcClient, TransactionReceipt};
use crate::tx::TransactionRequest;
use crate::utils::config::{DEFAULT_GAS, DEFAULT_GAS_PRICE, RECEIPT_POLL_INTERVAL};
use crate::utils::error::{RpcError, SubmitError};
use log::{debug, info};
use std::thread;
use std::time::Duration;

/// Fixed transaction and polling parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    pub gas: u64,
    pub gas_price: u64,
    pub poll_interval: Duration,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            gas: DEFAULT_GAS,
            gas_price: DEFAULT_GAS_PRICE,
            poll_interval: RECEIPT_POLL_INTERVAL,
        }
    }
}

/// Submits transactions from an unlocked account and awaits their receipts
pub struct TransactionSubmitter {
    client: RpcClient,
    config: SubmitterConfig,
}

impl TransactionSubmitter {
    pub fn new(rpc_url: impl Into<String>, config: SubmitterConfig) -> Result<Self, RpcError> {
        Ok(Self {
            client: RpcClient::new(rpc_url)?,
            config,
        })
    }

    /// Send `function_signature(params)` from `from` to `to`.
    ///
    /// An empty signature sends `params` as raw calldata. The send itself
    /// is never retried.
    pub fn submit(
        &self,
        from: &str,
        to: &str,
        function_signature: &str,
        params: &str,
    ) -> Result<String, SubmitError> {
        let tx = TransactionRequest::call(from, to, function_signature, params)?
            .with_gas(self.config.gas, self.config.gas_price);

        info!("Sending transaction to {} (data: {})", tx.to, tx.data);

        let tx_hash = self.client.send_transaction(&tx)?;

        info!("Transaction submitted: {}", tx_hash);
        Ok(tx_hash)
    }

    /// Poll for the receipt of `tx_hash`, at most `timeout_secs` times.
    ///
    /// Returns `Ok(None)` once the polls are exhausted. Transient failures
    /// count as "not mined yet"; anything else is returned immediately.
    pub fn await_receipt(
        &self,
        tx_hash: &str,
        timeout_secs: u64,
    ) -> Result<Option<TransactionReceipt>, RpcError> {
        info!("Waiting up to {} polls for receipt of {}", timeout_secs, tx_hash);

        for attempt in 1..=timeout_secs {
            match self.client.get_transaction_receipt(tx_hash) {
                Ok(Some(receipt)) => {
                    debug!("Receipt found on poll {}", attempt);
                    return Ok(Some(receipt));
                }
                Ok(None) => debug!("Poll {}/{}: receipt not available yet", attempt, timeout_secs),
                Err(e) if e.is_transient() => {
                    debug!("Poll {}/{} failed, retrying: {}", attempt, timeout_secs, e)
                }
                Err(e) => return Err(e),
            }

            if attempt < timeout_secs {
                thread::sleep(self.config.poll_interval);
            }
        }

        Ok(None)
    }
}
