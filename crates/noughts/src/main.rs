//! Noughts - two-player tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, GameConfig, console, init_stderr, replay, tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env so RUST_LOG can live there
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(
        cli.seed,
        cli.no_auto_move,
        cli.no_help,
    );

    match cli.command {
        Command::Console => {
            init_stderr(config.log_filter());
            info!("Starting console mode");
            console::run_console(&config).await
        }
        Command::Tui => tui::run_tui(&config).await,
        Command::Scancodes { input, json } => {
            init_stderr(config.log_filter());
            info!(json, "Starting scan code replay");
            replay::run_replay(&config, input.as_deref(), json).await
        }
    }
}
