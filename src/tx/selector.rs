//! Solidity function selectors.

use sha3::{Digest, Keccak256};

/// Compute the 4-byte selector of a canonical function signature,
/// e.g. `transfer(address,uint256)`.
///
/// Whitespace is not part of a canonical signature and is dropped before
/// hashing, so `"transfer(address, uint256)"` yields the same selector.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let canonical: String = signature.chars().filter(|c| !c.is_whitespace()).collect();

    let hash = Keccak256::digest(canonical.as_bytes());

    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Selector as lowercase hex, without `0x`.
pub fn function_selector_hex(signature: &str) -> String {
    hex::encode(function_selector(signature))
}
