use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;
use std::process::{Command, Output};

const FROM: &str = "0x3f1eae7d46d88f08fc2f8ed27fcb2ab183eb2d0e";
const TO: &str = "0xdbf03b407c01e7cd3cbea99509d93f8dddc8c6fb";
const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

fn send_tx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_send_tx"))
        .args(args)
        .env_remove("SEND_TX_TIMEOUT")
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run send_tx")
}

fn mock_send(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "method": "eth_sendTransaction" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "jsonrpc": "2.0", "id": 1, "result": TX_HASH }).to_string())
        .expect(1)
        .create()
}

fn mock_receipt(server: &mut ServerGuard, receipt: serde_json::Value, polls: usize) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "method": "eth_getTransactionReceipt" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "jsonrpc": "2.0", "id": 1, "result": receipt }).to_string())
        .expect(polls)
        .create()
}

fn transfer_params() -> String {
    format!("{:0>64}{:0>64}", &TO[2..], "3e8")
}

#[test]
fn test_confirmed_transaction_exits_zero() {
    let mut server = Server::new();
    let url = server.url();
    let send = mock_send(&mut server);
    let receipt = mock_receipt(&mut server, json!({ "status": "0x1", "blockNumber": "0x5" }), 1);

    let params = transfer_params();
    let output = send_tx(&[&url, FROM, TO, "transfer(address,uint256)", &params]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), TX_HASH);
    send.assert();
    receipt.assert();
}

#[test]
fn test_reverted_transaction_exits_one() {
    let mut server = Server::new();
    let url = server.url();
    let _send = mock_send(&mut server);
    let _receipt = mock_receipt(&mut server, json!({ "status": "0x0" }), 1);

    let params = transfer_params();
    let output = send_tx(&[&url, FROM, TO, "transfer(address,uint256)", &params]);

    assert_eq!(output.status.code(), Some(1));
    // The hash is still reported before the receipt is known
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), TX_HASH);
    assert!(String::from_utf8_lossy(&output.stderr).contains("reverted"));
}

#[test]
fn test_missing_receipt_exits_one() {
    let mut server = Server::new();
    let url = server.url();
    let _send = mock_send(&mut server);
    let receipt = mock_receipt(&mut server, serde_json::Value::Null, 2);

    let output = send_tx(&[
        &url,
        FROM,
        TO,
        "increment()",
        "--timeout",
        "2",
        "--poll-interval-ms",
        "10",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), TX_HASH);
    receipt.assert();
}

#[test]
fn test_insufficient_arguments_prints_usage() {
    let mut server = Server::new();
    let url = server.url();
    let untouched = server.mock("POST", "/").expect(0).create();

    let output = send_tx(&[&url, FROM]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    untouched.assert();
}

#[test]
fn test_unreachable_node_exits_one_without_hash() {
    let output = send_tx(&["http://127.0.0.1:1", FROM, TO, "increment()"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to send transaction"));
}

#[test]
fn test_invalid_params_rejected_before_sending() {
    let mut server = Server::new();
    let url = server.url();
    let untouched = server.mock("POST", "/").expect(0).create();

    let output = send_tx(&[&url, FROM, TO, "setNumber(uint256)", "xyz"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    untouched.assert();
}

#[test]
fn test_numeric_receipt_status_is_reverted() {
    let mut server = Server::new();
    let url = server.url();
    let _send = mock_send(&mut server);
    let receipt = mock_receipt(&mut server, json!({ "status": 1, "blockNumber": "0x1" }), 1);

    let output = send_tx(&[&url, FROM, TO, "increment()", "--timeout", "5"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("reverted (status: 1)"));
    receipt.assert();
}
