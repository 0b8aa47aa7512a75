//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("bloomcard").expect("Failed to find bloomcard binary")
}

/// Extract the token from encode output (format: "Token: <token>")
fn extract_token(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some(token) = line.strip_prefix("Token: ") {
            return Some(token.trim().to_string());
        }
    }
    None
}

/// Extract the link line from encode output
fn extract_link(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains("?f="))
        .map(|line| line.trim().to_string())
}

// ============================================================================
// Encode Command Tests
// ============================================================================

#[test]
fn test_encode_defaults() {
    cli_cmd()
        .arg("encode")
        .assert()
        .success()
        .stdout(predicate::str::contains("Share link:"))
        .stdout(predicate::str::contains("bloomcard://card?f="))
        .stdout(predicate::str::contains("Token: "));
}

#[test]
fn test_encode_token_is_url_safe() {
    let output = cli_cmd()
        .args(["encode", "--message", "????>>>>~~~~"])
        .output()
        .expect("Failed to run encode");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let token = extract_token(&stdout).expect("No token in output");
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_encode_custom_base_url() {
    cli_cmd()
        .args(["encode", "--base-url", "https://example.com/card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/card?f="));
}

// ============================================================================
// Decode Command Tests
// ============================================================================

#[test]
fn test_encode_then_decode_roundtrip() {
    let output = cli_cmd()
        .args([
            "encode",
            "--flower",
            "tulip",
            "--color",
            "#2a9d8f",
            "--message",
            "see you at the garden",
        ])
        .output()
        .expect("Failed to run encode");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let token = extract_token(&stdout).expect("No token in output");

    cli_cmd()
        .args(["decode", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flower:  tulip"))
        .stdout(predicate::str::contains("Color:   #2a9d8f"))
        .stdout(predicate::str::contains("Message: see you at the garden"));
}

#[test]
fn test_decode_accepts_full_link() {
    let output = cli_cmd()
        .args(["encode", "--message", "hi"])
        .output()
        .expect("Failed to run encode");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let link = extract_link(&stdout).expect("No link in output");

    cli_cmd()
        .args(["decode", &link])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message: hi"));
}

#[test]
fn test_decode_rejects_garbage() {
    cli_cmd()
        .args(["decode", "not-a-valid-token-$$$"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a valid share link"));
}

#[test]
fn test_decode_json_output() {
    let output = cli_cmd()
        .args(["encode", "--flower", "lily", "--message", "hey"])
        .output()
        .expect("Failed to run encode");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let token = extract_token(&stdout).expect("No token in output");

    cli_cmd()
        .args(["decode", "--json", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"lily\""))
        .stdout(predicate::str::contains("\"msg\": \"hey\""));
}

// ============================================================================
// Plant Command Tests
// ============================================================================

#[test]
fn test_plant_positions_in_range() {
    let output = cli_cmd()
        .args(["plant", "--count", "5", "--seed", "7"])
        .output()
        .expect("Failed to run plant");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let positions: Vec<i32> = stdout
        .lines()
        .filter_map(|line| line.trim().strip_suffix('%'))
        .filter_map(|n| n.parse().ok())
        .collect();

    assert_eq!(positions.len(), 5);
    for pos in positions {
        assert!((12..=88).contains(&pos), "position {} out of range", pos);
    }
}

#[test]
fn test_plant_is_reproducible_with_seed() {
    let run = || {
        let output = cli_cmd()
            .args(["plant", "--count", "3", "--seed", "42"])
            .output()
            .expect("Failed to run plant");
        String::from_utf8_lossy(&output.stdout).to_string()
    };
    assert_eq!(run(), run());
}
