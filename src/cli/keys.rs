//! Key table listing command.

use crate::cli::common::{escape_key, print_json, CliResult};
use crate::input::{Key, Mods, Trigger};
use crate::platform::appkit::{equivalent::equivalent_char, KEYCODE_TABLE};
use crate::platform::terminal::trigger_to_crossterm;
use clap::Args;
use serde::Serialize;

/// List every AppKit key code and the key it maps to
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Only show keys that have a menu key equivalent
    #[arg(long)]
    pub menu_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct KeyRow {
    code: u16,
    key: Key,
    #[serde(skip_serializing_if = "Option::is_none")]
    equivalent: Option<String>,
    terminal: bool,
}

impl KeysArgs {
    /// Execute the keys command
    pub fn execute(&self) -> CliResult<()> {
        let rows: Vec<KeyRow> = KEYCODE_TABLE
            .iter()
            .map(|&(code, key)| KeyRow {
                code,
                key,
                equivalent: equivalent_char(key).map(String::from),
                terminal: trigger_to_crossterm(&Trigger::new(key, Mods::empty())).is_some(),
            })
            .filter(|row| !self.menu_only || row.equivalent.is_some())
            .collect();

        if self.json {
            return print_json(&rows);
        }

        println!("{:<6} {:<20} {:<10} TERMINAL", "CODE", "KEY", "MENU");
        for row in &rows {
            let menu = row.equivalent.as_deref().map(escape_key).unwrap_or_default();
            let terminal = if row.terminal { "yes" } else { "no" };
            println!("0x{:02X}   {:<20} {:<10} {}", row.code, row.key.name(), menu, terminal);
        }

        Ok(())
    }
}
