//! CLI command handlers for keybridge.
//!
//! This module provides headless, scriptable access to the translation
//! tables for automation, testing, and debugging key handling.

pub mod bindings;
pub mod common;
pub mod config;
pub mod equivalent;
pub mod keycode;
pub mod keys;
pub mod mods;

// Re-export types used by main.rs and tests
pub use bindings::BindingsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use equivalent::EquivalentArgs;
pub use keycode::KeycodeArgs;
pub use keys::KeysArgs;
pub use mods::ModsArgs;
