//! Keybinding listing command.

use crate::cli::common::{escape_key, print_json, CliResult};
use crate::config::Config;
use crate::input::Trigger;
use crate::platform::appkit::{key_equivalent, KeyEquivalent};
use clap::Args;
use serde::Serialize;

/// List the effective keybindings and their menu shortcuts
#[derive(Debug, Clone, Args)]
pub struct BindingsArgs {
    /// Only show bindings for this action
    #[arg(long, value_name = "ACTION")]
    pub action: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BindingRow<'a> {
    trigger: Trigger,
    action: &'a str,
    menu: Option<KeyEquivalent>,
}

impl BindingsArgs {
    /// Execute the bindings command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let keybinds = config.keybinds();

        let rows: Vec<BindingRow<'_>> = keybinds
            .iter()
            .filter(|kb| self.action.as_deref().map_or(true, |action| kb.action == action))
            .map(|kb| BindingRow {
                trigger: kb.trigger,
                action: &kb.action,
                menu: key_equivalent(&kb.trigger),
            })
            .collect();

        if self.json {
            return print_json(&rows);
        }

        if rows.is_empty() {
            println!("No bindings.");
            return Ok(());
        }

        for row in &rows {
            let menu = row
                .menu
                .as_ref()
                .map(|eq| format!("{eq} ({})", escape_key(&eq.key)))
                .unwrap_or_else(|| "-".to_string());
            println!("{:<32} {:<28} {}", row.trigger.to_string(), row.action, menu);
        }

        Ok(())
    }
}
