//! Key code lookup command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::input::{parse_number, Key};
use crate::platform::appkit::{code_for_key, key_for_code};
use clap::Args;
use serde::Serialize;

/// Look up the symbolic key for an AppKit virtual key code
#[derive(Debug, Clone, Args)]
pub struct KeycodeArgs {
    /// Virtual key code, decimal or 0x-prefixed hex (e.g. 36, 0x24).
    /// A key name (e.g. "enter") looks up the code instead.
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LookupResult {
    code: Option<u16>,
    key: Option<Key>,
}

impl KeycodeArgs {
    /// Execute the keycode lookup command
    pub fn execute(&self) -> CliResult<()> {
        let result = match Key::from_name(&self.code) {
            Some(key) => LookupResult {
                code: code_for_key(key),
                key: Some(key),
            },
            None => {
                let number = parse_number(&self.code)
                    .map_err(|e| CliError::validation(e.to_string()))?;
                let code = u16::try_from(number).map_err(|_| {
                    CliError::validation(format!("Key code out of range: {}", self.code))
                })?;
                LookupResult {
                    code: Some(code),
                    key: key_for_code(code),
                }
            }
        };

        if self.json {
            return print_json(&result);
        }

        match result.code {
            Some(code) => println!("Code: 0x{code:02X} ({code})"),
            None => println!("Code: (no mapping)"),
        }
        match result.key {
            Some(key) => println!("Key:  {key}"),
            None => println!("Key:  (no mapping)"),
        }

        Ok(())
    }
}
