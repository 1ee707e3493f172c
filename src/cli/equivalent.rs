//! Menu key equivalent command.

use crate::cli::common::{escape_key, print_json, CliError, CliResult};
use crate::input::Trigger;
use crate::platform::appkit::{key_equivalent, KeyEquivalent};
use clap::Args;
use serde::Serialize;

/// Show the macOS menu shortcut for a trigger
#[derive(Debug, Clone, Args)]
pub struct EquivalentArgs {
    /// Trigger such as "super+shift+t" or "ctrl+arrow_up"
    #[arg(value_name = "TRIGGER")]
    pub trigger: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EquivalentResult {
    trigger: Trigger,
    equivalent: Option<KeyEquivalent>,
}

impl EquivalentArgs {
    /// Execute the equivalent command
    pub fn execute(&self) -> CliResult<()> {
        let trigger: Trigger = self
            .trigger
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid trigger: {e}")))?;

        let result = EquivalentResult {
            trigger,
            equivalent: key_equivalent(&trigger),
        };

        if self.json {
            return print_json(&result);
        }

        println!("Trigger:   {}", result.trigger);
        match &result.equivalent {
            Some(eq) => {
                println!("Key:       {}", escape_key(&eq.key));
                println!("Modifiers: 0x{:08X}", eq.modifiers.bits());
                println!("Menu:      {eq}");
            }
            None => println!("Menu:      (no equivalent)"),
        }

        Ok(())
    }
}
