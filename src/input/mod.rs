//! The terminal core's input representation.
//!
//! Platform adapters in [`crate::platform`] translate native events into
//! these types; the core consumes them without knowing where they came from.

mod event;
mod key;
mod mods;
mod trigger;

pub use event::{KeyAction, KeyEvent};
pub use key::Key;
pub use mods::Mods;
pub use trigger::Trigger;

use thiserror::Error;

/// Errors produced while parsing triggers and bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Trigger text was empty
    #[error("trigger is empty")]
    EmptyTrigger,
    /// Trigger had modifiers but no key
    #[error("trigger has no key: {0}")]
    MissingKey(String),
    /// Unrecognized modifier name
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),
    /// Unrecognized key name or character
    #[error("unknown key: {0}")]
    UnknownKey(String),
    /// Binding was not of the form `trigger=action`
    #[error("binding must be trigger=action: {0}")]
    MalformedBinding(String),
    /// Binding had an empty action
    #[error("binding has no action: {0}")]
    MissingAction(String),
    /// Number could not be parsed
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
pub fn parse_number(text: &str) -> Result<u64, ParseError> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => text.replace('_', "").parse(),
    };
    parsed.map_err(|_| ParseError::InvalidNumber(text.to_string()))
}
