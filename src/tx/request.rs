//! The transaction object sent with `eth_sendTransaction`.

use super::address::to_checksum_address;
use super::calldata::encode_calldata;
use crate::utils::config::{DEFAULT_GAS, DEFAULT_GAS_PRICE};
use crate::utils::error::AbiError;
use serde::Serialize;

/// Unsigned transaction for an account the node holds unlocked.
///
/// Quantities are serialized as `0x`-prefixed hex, as JSON-RPC expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    pub gas: String,
    pub gas_price: String,
}

impl TransactionRequest {
    /// Build a call of `function_signature` on `to` with pre-encoded `params`.
    ///
    /// Both addresses are checksum-normalized. Gas and gas price start at
    /// the fixed defaults; see [`TransactionRequest::with_gas`].
    pub fn call(
        from: &str,
        to: &str,
        function_signature: &str,
        params: &str,
    ) -> Result<Self, AbiError> {
        Ok(Self {
            from: to_checksum_address(from)?,
            to: to_checksum_address(to)?,
            data: encode_calldata(function_signature, params)?,
            gas: to_quantity(DEFAULT_GAS),
            gas_price: to_quantity(DEFAULT_GAS_PRICE),
        })
    }

    /// Override the gas limit and gas price
    pub fn with_gas(mut self, gas: u64, gas_price: u64) -> Self {
        self.gas = to_quantity(gas);
        self.gas_price = to_quantity(gas_price);
        self
    }
}

/// Encode an integer as a JSON-RPC quantity (`0x`-prefixed, no leading zeros)
pub fn to_quantity(value: u64) -> String {
    format!("{:#x}", value)
}
