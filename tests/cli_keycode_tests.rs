//! End-to-end tests for `keybridge keycode` and `keybridge keys`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

mod fixtures;

use fixtures::*;

#[test]
fn test_keycode_hex_json() {
    let (config, temp) = missing_config();
    let output = run(&config, &["keycode", "0x24", "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["code"], 36);
    assert_eq!(result["key"], "enter");
}

#[test]
fn test_keycode_decimal_plain() {
    let (config, temp) = missing_config();
    let output = run(&config, &["keycode", "126"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Code: 0x7E (126)"));
    assert!(stdout.contains("Key:  arrow_up"));
}

#[test]
fn test_keycode_unmapped_is_not_an_error() {
    let (config, temp) = missing_config();
    let output = run(&config, &["keycode", "0x34", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["code"], 0x34);
    assert!(result["key"].is_null());
}

#[test]
fn test_keycode_reverse_lookup_by_name() {
    let (config, temp) = missing_config();
    let output = run(&config, &["keycode", "meta_left", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["code"], 0x37);
    assert_eq!(result["key"], "meta_left");
}

#[test]
fn test_keycode_invalid_input() {
    let (config, temp) = missing_config();

    let output = run(&config, &["keycode", "banana"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid number"));

    let output = run(&config, &["keycode", "70000"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_keys_lists_table() {
    let (config, temp) = missing_config();
    let output = run(&config, &["keys", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let rows = stdout_json(&output);
    let rows = rows.as_array().expect("Should be an array");
    assert!(rows.len() > 100);

    let a = rows.iter().find(|row| row["code"] == 0).unwrap();
    assert_eq!(a["key"], "key_a");
    assert_eq!(a["equivalent"], "a");
    assert_eq!(a["terminal"], true);

    let numpad = rows.iter().find(|row| row["key"] == "numpad_enter").unwrap();
    assert!(numpad.get("equivalent").is_none());
}

#[test]
fn test_keys_menu_only() {
    let (config, temp) = missing_config();
    let output = run(&config, &["keys", "--menu-only", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let rows = stdout_json(&output);
    for row in rows.as_array().unwrap() {
        assert!(row.get("equivalent").is_some(), "{row}");
    }
}
