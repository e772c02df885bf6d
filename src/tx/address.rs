//! EIP-55 checksummed addresses.

use crate::utils::error::AbiError;
use sha3::{Digest, Keccak256};

/// Normalize an address to its EIP-55 mixed-case form.
///
/// Accepts 40 hex digits with or without the `0x` prefix, in any case.
/// An existing checksum is not verified, it is recomputed.
pub fn to_checksum_address(address: &str) -> Result<String, AbiError> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AbiError::InvalidAddress(address.to_string()));
    }

    let lower = digits.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        // High nibble for even positions, low nibble for odd ones
        let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}
