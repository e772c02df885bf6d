//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod send;

// Re-export main command functions
pub use send::{execute_send, validate_args, ReceiptOutcome, SendArgs, SendReport};
