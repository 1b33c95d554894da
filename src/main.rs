//! tictactui - terminal tic-tac-toe against a heuristic AI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tictactui::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tictactui::tui::run(&cli.log_file, Duration::from_millis(cli.ai_delay_ms)).await
}
