//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::keybinds::parse_binding;
use crate::platform::appkit::OptionAsAlt;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Which option keys act as alt (none, left, right, or both)
    #[arg(long, value_name = "SIDE")]
    option_as_alt: Option<String>,

    /// Append a keybinding line (trigger=action); may be repeated
    #[arg(long = "bind", value_name = "BINDING")]
    bindings: Vec<String>,

    /// Default log filter (e.g. info, debug)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    exists: bool,
    config: &'a Config,
    binding_count: usize,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(path),
            ConfigCommand::Set(args) => args.execute(path),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        let config = Config::load_from(path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        let output = ConfigOutput {
            path: path.display().to_string(),
            exists: path.exists(),
            config: &config,
            binding_count: config.keybinds().len(),
        };

        if self.json {
            return print_json(&output);
        }

        println!("Config file:   {}", output.path);
        if !output.exists {
            println!("               (not found, using defaults)");
        }
        println!(
            "Option as alt: {}",
            option_as_alt_name(config.keyboard.macos_option_as_alt)
        );
        println!("Log level:     {}", config.logging.level);
        println!(
            "Keybindings:   {} effective ({} configured{})",
            output.binding_count,
            config.keybinds.bindings.len(),
            if config.keybinds.clear_defaults {
                ", defaults cleared"
            } else {
                ""
            }
        );
        for line in &config.keybinds.bindings {
            println!("  {line}");
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        if self.option_as_alt.is_none() && self.bindings.is_empty() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --option-as-alt, --bind, or --log-level",
            ));
        }

        let mut config = Config::load_from(path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if let Some(side) = &self.option_as_alt {
            config.keyboard.macos_option_as_alt = parse_option_as_alt(side)?;
        }

        for line in &self.bindings {
            parse_binding(line)
                .map_err(|e| CliError::validation(format!("Invalid binding '{line}': {e}")))?;
            config.keybinds.bindings.push(line.clone());
        }

        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }

        config.validate().map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn parse_option_as_alt(side: &str) -> CliResult<OptionAsAlt> {
    match side.to_lowercase().as_str() {
        "none" | "false" => Ok(OptionAsAlt::None),
        "left" => Ok(OptionAsAlt::Left),
        "right" => Ok(OptionAsAlt::Right),
        "both" | "true" => Ok(OptionAsAlt::Both),
        _ => Err(CliError::validation(
            "Invalid option-as-alt value. Must be 'none', 'left', 'right', or 'both'",
        )),
    }
}

fn option_as_alt_name(value: OptionAsAlt) -> &'static str {
    match value {
        OptionAsAlt::None => "none",
        OptionAsAlt::Left => "left",
        OptionAsAlt::Right => "right",
        OptionAsAlt::Both => "both",
    }
}
