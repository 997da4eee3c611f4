//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Menu-driven interactive calculator.
#[derive(Parser, Debug)]
#[command(
    name = "menucalc",
    version = menucalc::constants::VERSION,
    about = "Menu-driven interactive calculator.",
)]
pub struct Cli {
    /// Config file to use instead of ./.menucalc.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Undecorated output suitable for pipes and scripts (implies --no-color).
    #[arg(long, global = true, default_value_t = false)]
    pub plain: bool,

    /// Disable ANSI colors.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive calculator.
    Run,

    /// Print version and build information.
    Version,
}
