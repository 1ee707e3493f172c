//! Keyboard event adapter for a terminal emulator.
//!
//! This library translates platform keyboard events (key codes and modifier
//! flags) into the terminal core's input representation, and configured
//! triggers back into platform menu shortcuts.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod input;
pub mod keybinds;
pub mod platform;
