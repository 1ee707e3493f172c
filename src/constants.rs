//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration file locations.

/// The display name of the application.
pub const APP_NAME: &str = "keybridge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "keybridge";

/// Directory under the platform config directory holding the config file.
pub const CONFIG_DIR_NAME: &str = "keybridge";

/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
