//! End-to-end tests for `keybridge mods` and `keybridge equivalent`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

mod fixtures;

use fixtures::*;

#[test]
fn test_mods_right_command_and_shift() {
    let (config, temp) = missing_config();
    // command + shift, with the right command device bit
    let output = run(&config, &["mods", "0x120010", "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["flags"], 0x12_0010);
    assert_eq!(result["names"], serde_json::json!(["SHIFT", "SUPER"]));
    assert_eq!(result["right"], serde_json::json!(["SUPER_RIGHT"]));
    // Side information does not survive the trip back.
    assert_eq!(result["round_trip"], 0x12_0000);
}

#[test]
fn test_mods_plain_output() {
    let (config, temp) = missing_config();
    let output = run(&config, &["mods", "0x40000"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[CTRL]"));
    assert!(stdout.contains("Round trip: 0x00040000"));
    assert!(!stdout.contains("Right side"));
}

#[test]
fn test_mods_invalid() {
    let (config, temp) = missing_config();
    let output = run(&config, &["mods", "0xnope"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_equivalent_json() {
    let (config, temp) = missing_config();
    let output = run(&config, &["equivalent", "super+shift+t", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["trigger"], "shift+super+key_t");
    assert_eq!(result["equivalent"]["key"], "t");
    assert_eq!(result["equivalent"]["modifiers"], 0x12_0000);
    assert_eq!(result["equivalent"]["display"], "⇧⌘T");
}

#[test]
fn test_equivalent_function_key_plain() {
    let (config, temp) = missing_config();
    let output = run(&config, &["equivalent", "ctrl+arrow_up"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Key:       \\u{f700}"));
    assert!(stdout.contains("Menu:      ⌃↑"));
}

#[test]
fn test_equivalent_absent() {
    let (config, temp) = missing_config();
    let output = run(&config, &["equivalent", "super+numpad_1", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert!(result["equivalent"].is_null());
}

#[test]
fn test_equivalent_invalid_trigger() {
    let (config, temp) = missing_config();
    let output = run(&config, &["equivalent", "hyper+x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown modifier: hyper"));
}
