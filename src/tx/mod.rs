//! Transaction construction: selectors, addresses and calldata.
//!
//! Everything here is pure string/byte manipulation; nothing talks to the node.

pub mod address;
pub mod calldata;
pub mod request;
pub mod selector;

pub use address::to_checksum_address;
pub use calldata::{encode_calldata, normalize_params};
pub use request::TransactionRequest;
pub use selector::{function_selector, function_selector_hex};
