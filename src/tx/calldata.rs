//! Calldata assembly.
//!
//! Parameters are ABI-encoded by the caller; this module only checks that
//! they are well-formed hex and glues them behind the selector.

use super::selector::function_selector_hex;
use crate::utils::error::AbiError;

/// Validate pre-encoded parameters and return them without a `0x` prefix.
///
/// The prefix is optional. Case is preserved.
pub fn normalize_params(params: &str) -> Result<&str, AbiError> {
    let digits = params.strip_prefix("0x").unwrap_or(params);

    if digits.len() % 2 != 0 {
        return Err(AbiError::InvalidHex(format!(
            "odd number of hex digits ({}) in params",
            digits.len()
        )));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(AbiError::InvalidHex(format!("unexpected character '{}' in params", bad)));
    }

    Ok(digits)
}

/// Build the transaction `data` field: `0x` + selector + params.
///
/// An empty signature means no selector, e.g. a plain call into a
/// fallback or receive function.
pub fn encode_calldata(function_signature: &str, params: &str) -> Result<String, AbiError> {
    let params = normalize_params(params)?;

    let selector = if function_signature.is_empty() {
        String::new()
    } else {
        function_selector_hex(function_signature)
    };

    Ok(format!("0x{}{}", selector, params))
}
