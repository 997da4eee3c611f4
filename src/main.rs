//! menucalc — menu-driven interactive calculator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use menucalc::config;
use menucalc::constants;
use menucalc::env;
use menucalc::output;
use menucalc::session;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command};
use config::Config;
use env::Env;
use session::Session;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run_session(&cli),
        Command::Version => run_version(),
    }
}

/// Log to stderr so stdout carries only the calculator transcript.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Run the interactive calculator on stdin/stdout.
fn run_session(cli: &Cli) -> Result<()> {
    let working_dir = std::env::current_dir().ok();
    let mut config = Config::load(cli.config.as_deref(), working_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    config.apply_flags(cli.plain, cli.no_color);

    if !config.display.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "configuration loaded");

    let renderer = output::renderer_for(&config.display);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), renderer, config.display.header);
    session.run().context("calculator session failed")?;
    Ok(())
}
