//! # desk-cli
//!
//! Binary entry point for the Supportdesk terminal client.
//!
//! This crate provides:
//! - CLI argument parsing using `clap`
//! - Logging setup (file-based, since the TUI owns the terminal)
//! - Entry into the TUI event loop

use anyhow::{Context, Result};
use clap::Parser;
use desk_api::{DeskApi, DeskConfig};
use desk_tui::App;
use std::path::PathBuf;

/// Terminal client for the AI support-ticket helpdesk.
#[derive(Debug, Parser)]
#[command(name = "desk", version, about)]
struct Cli {
    /// Backend base URL (overrides DESK_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Write logs to this file instead of suppressing them
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

/// Installs a panic hook that restores terminal state before printing
/// panic info, so a crash never leaves the shell in raw mode or the
/// alternate screen.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        default_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    install_panic_hook();

    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file or nowhere. Stdout
    // logging would corrupt the display.
    let filter = if cli.verbose { "debug" } else { "info" };
    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let config = match cli.api_url {
        Some(url) => DeskConfig::new(url),
        None => DeskConfig::from_env(),
    };
    tracing::info!(base_url = %config.base_url, "starting supportdesk client");

    let api = DeskApi::new(config).context("could not build API client")?;
    App::new(api).run().await
}
