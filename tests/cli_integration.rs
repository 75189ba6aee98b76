use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str]) -> Output {
    let binary_path = assert_cmd::cargo::cargo_bin!("btc-size-fee");
    Command::new(binary_path)
        .args(args)
        .output()
        .expect("cli runs")
}

fn json_output(args: &[&str]) -> Value {
    let output = run_cli(args);
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    serde_json::from_str(&stdout).expect("stdout is valid json")
}

#[test]
fn cli_defaults_to_empty_transaction() {
    let response = json_output(&["--json"]);

    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["txVBytes"], 10.0);
    assert_eq!(response["data"]["txBytes"], 10.0);
    assert_eq!(response["data"]["txWeight"], 40);
    assert!(response["data"].get("fee").is_none());
}

#[test]
fn cli_estimates_size_and_fee() {
    let response = json_output(&[
        "--json",
        "--p2pkh-output-count",
        "10",
        "--p2tr-output-count",
        "2",
        "--fee-rate",
        "5",
        "--range-multiplier",
        "0.05",
    ]);

    assert_eq!(response["data"]["txVBytes"], 436.0);
    assert_eq!(response["data"]["txWeight"], 1744);
    assert_eq!(response["data"]["fee"], 2180);
    assert_eq!(response["data"]["feeRange"], "2071 - 2289");
}

#[test]
fn cli_accepts_segwit_multisig() {
    let response = json_output(&[
        "--json",
        "--input-script",
        "P2SH-P2WSH",
        "--input-count",
        "1",
        "--input-m",
        "2",
        "--input-n",
        "3",
        "--p2wpkh-output-count",
        "1",
    ]);

    // 10.75 overhead + 138.5 input + 31 output
    assert_eq!(response["data"]["txVBytes"], 180.25);
    assert_eq!(response["data"]["txWeight"], 721);
}

#[test]
fn cli_reads_options_from_stdin_and_flags_override() {
    let binary_path = assert_cmd::cargo::cargo_bin!("btc-size-fee");
    let mut child = Command::new(binary_path)
        .args(["--json", "--options", "-", "--p2pkh-output-count", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("cli spawns");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(br#"{"input_count": "1", "input_script": "P2PKH", "p2pkh_output_count": 5}"#)
        .expect("write options");

    let output = child.wait_with_output().expect("cli finishes");
    assert!(output.status.success(), "cli failed: {:?}", output);
    let response: Value = serde_json::from_slice(&output.stdout).expect("valid json");

    // 10 + 148 + 1 * 34
    assert_eq!(response["data"]["txVBytes"], 192.0);
}

#[test]
fn cli_reports_invalid_parameters_as_json() {
    let output = run_cli(&["--json", "--input-script", "P2WSH", "--input-m", "3", "--input-n", "2"]);
    assert!(!output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(response["success"], false);
    assert_eq!(response["error"]["code"], "invalid_parameter");

    let stderr = String::from_utf8(output.stderr).expect("stderr is utf8");
    assert!(stderr.contains("ERROR [cli] Estimation failed"), "stderr: {}", stderr);
}

#[test]
fn cli_negative_fee_rate_gives_negative_fee() {
    let response = json_output(&["--json", "--fee-rate", "-2"]);
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["fee"], -20);
}

#[test]
fn cli_rejects_unknown_script_type() {
    let output = run_cli(&["--input-script", "P2PK"]);
    assert!(!output.status.success());

    let output = run_cli(&["--input-script", "p2wpkh"]);
    assert!(!output.status.success());
}

#[test]
fn cli_human_output() {
    let output = run_cli(&["--input-count", "1", "--input-script", "P2WPKH", "--p2wpkh-output-count", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(stdout.contains("txVBytes: 140.5"));
    assert!(stdout.contains("txWeight: 562"));
}
