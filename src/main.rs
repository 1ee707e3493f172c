//! keybridge - inspect and debug terminal key translation
//!
//! This binary exposes the key code tables, modifier translation and menu
//! shortcut mapping used by the terminal front end, for scripting and for
//! checking how a given key or binding will behave.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keybridge::cli::{
    BindingsArgs, CliError, CliResult, ConfigArgs, EquivalentArgs, ExitCode, KeycodeArgs, KeysArgs,
    ModsArgs,
};
use keybridge::config::Config;
use keybridge::constants::APP_BINARY_NAME;

/// keybridge - terminal keyboard translation tables
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the key for an AppKit virtual key code
    Keycode(KeycodeArgs),
    /// Translate AppKit modifier flags
    Mods(ModsArgs),
    /// Show the menu shortcut for a trigger
    Equivalent(EquivalentArgs),
    /// List the key code table
    Keys(KeysArgs),
    /// List effective keybindings
    Bindings(BindingsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code
        }
    };

    std::process::exit(exit_code.code());
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?,
    };

    let loaded = Config::load_from(&config_path);

    let level = match &loaded {
        Ok(config) => config.logging.level.clone(),
        Err(_) => "info".to_string(),
    };
    init_tracing(if cli.verbose { "debug" } else { &level });
    debug!(path = %config_path.display(), "using config file");

    match cli.command {
        Command::Keycode(args) => args.execute(),
        Command::Mods(args) => args.execute(),
        Command::Equivalent(args) => args.execute(),
        Command::Keys(args) => args.execute(),
        Command::Config(args) => args.execute(&config_path),
        Command::Bindings(args) => {
            let config = loaded
                .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
            args.execute(&config)
        }
    }
}

/// Initializes `tracing` on stderr. `RUST_LOG` takes precedence over `filter`.
fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
