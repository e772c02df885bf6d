//! send_tx CLI
//!
//! Sends one transaction to a contract and waits for its receipt.
//! Exit status is 0 only for a mined, successful transaction.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;
use std::time::Duration;

use stylus_send_tx::commands::{execute_send, validate_args, SendArgs};
use stylus_send_tx::utils::config::{
    DEFAULT_GAS, DEFAULT_GAS_PRICE, DEFAULT_RECEIPT_TIMEOUT_SECS, RECEIPT_POLL_INTERVAL,
};

/// Send a transaction from an unlocked account and wait for its receipt
#[derive(Parser, Debug)]
#[command(name = "send_tx")]
#[command(version, about, long_about = None)]
struct Cli {
    /// RPC endpoint URL
    rpc_url: String,

    /// Sender address (must be unlocked on the node)
    from_addr: String,

    /// Target contract address
    to_addr: String,

    /// Function signature, e.g. "transfer(address,uint256)"; "" for raw calldata
    function_sig: String,

    /// ABI-encoded parameters as hex
    params: Option<String>,

    /// Number of one-interval receipt polls before giving up
    #[arg(long, env = "SEND_TX_TIMEOUT", default_value_t = DEFAULT_RECEIPT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Gas limit
    #[arg(long, default_value_t = DEFAULT_GAS)]
    gas: u64,

    /// Gas price in wei
    #[arg(long, default_value_t = DEFAULT_GAS_PRICE)]
    gas_price: u64,

    /// Delay between receipt polls in milliseconds
    #[arg(long, default_value_t = RECEIPT_POLL_INTERVAL.as_millis() as u64)]
    poll_interval_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse CLI arguments; usage errors exit 1, --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Nothing left to report to if stderr itself is gone
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let args = SendArgs {
        rpc_url: cli.rpc_url,
        from_address: cli.from_addr,
        to_address: cli.to_addr,
        function_signature: cli.function_sig,
        params: cli.params.unwrap_or_default(),
        timeout_secs: cli.timeout,
        gas: cli.gas,
        gas_price: cli.gas_price,
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
    };

    // Validate args first
    validate_args(&args)?;

    // Execute send
    let report = execute_send(args)?;
    report.ensure_success()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: &str = "0x3f1eae7d46d88f08fc2f8ed27fcb2ab183eb2d0e";
    const TO: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

    #[test]
    fn test_defaults_follow_config() {
        let cli = Cli::try_parse_from(["send_tx", "http://localhost:8547", FROM, TO, "increment()"])
            .unwrap();

        assert_eq!(
            Duration::from_millis(cli.poll_interval_ms),
            RECEIPT_POLL_INTERVAL
        );
        assert_eq!(cli.gas, DEFAULT_GAS);
        assert_eq!(cli.gas_price, DEFAULT_GAS_PRICE);
        assert_eq!(cli.params, None);
    }

    #[test]
    fn test_missing_positionals_is_usage_error() {
        let err = Cli::try_parse_from(["send_tx", "http://localhost:8547", FROM]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from([
            "send_tx",
            "http://localhost:8547",
            FROM,
            TO,
            "",
            "--timeout",
            "0",
        ]);
        assert!(result.is_err());
    }
}
