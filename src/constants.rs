//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and every fixed line of text the session prints.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "menucalc";

/// Crate version, as recorded in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.menucalc.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".menucalc.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "menucalc";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_COLOR: &str = "MENUCALC_COLOR";
pub const ENV_HEADER: &str = "MENUCALC_HEADER";
pub const ENV_LOG: &str = "MENUCALC_LOG";

// ── Session text ────────────────────────────────────────────────────

/// Menu header used when none is configured.
pub const DEFAULT_HEADER: &str = "Simple Calculator";

pub const CHOICE_PROMPT: &str = "Choose an option (1-5): ";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number (e.g., 7, 2.5).";
pub const FAREWELL: &str = "Exiting calculator. Goodbye!";
