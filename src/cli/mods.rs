//! Modifier flag translation command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::input::parse_number;
use crate::platform::appkit::{flags_from_mods, mods_from_flags, ModifierFlags};
use clap::Args;
use serde::Serialize;

/// Translate AppKit modifier flags to core modifiers and back
#[derive(Debug, Clone, Args)]
pub struct ModsArgs {
    /// `NSEvent.modifierFlags.rawValue`, decimal or 0x-prefixed hex
    #[arg(value_name = "FLAGS")]
    pub flags: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ModsResult {
    flags: u64,
    mods: u16,
    names: Vec<&'static str>,
    right: Vec<&'static str>,
    round_trip: u64,
}

impl ModsArgs {
    /// Execute the mods command
    pub fn execute(&self) -> CliResult<()> {
        let raw = parse_number(&self.flags).map_err(|e| CliError::validation(e.to_string()))?;
        let flags = ModifierFlags::from_bits_retain(raw);
        let mods = mods_from_flags(flags);

        let names = mods
            .iter_names()
            .map(|(name, _)| name)
            .filter(|name| !name.ends_with("_RIGHT"))
            .collect();
        let right = mods
            .iter_names()
            .map(|(name, _)| name)
            .filter(|name| name.ends_with("_RIGHT"))
            .collect();

        let result = ModsResult {
            flags: raw,
            mods: mods.bits(),
            names,
            right,
            round_trip: flags_from_mods(mods).bits(),
        };

        if self.json {
            return print_json(&result);
        }

        println!("Flags:      0x{:08X}", result.flags);
        println!("Mods:       0x{:03X} [{}]", result.mods, result.names.join(", "));
        if !result.right.is_empty() {
            println!("Right side: {}", result.right.join(", "));
        }
        println!("Round trip: 0x{:08X}", result.round_trip);

        Ok(())
    }
}
