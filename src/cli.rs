//! Command-line interface for tictactui.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe against a one-ply heuristic AI.
#[derive(Parser, Debug)]
#[command(name = "tictactui")]
#[command(about = "Play tic-tac-toe in the terminal against a heuristic AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Thinking delay before the AI's move, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub ai_delay_ms: u64,

    /// Log file path (stdout belongs to the interface)
    #[arg(long, default_value = "tictactui.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let cli = Cli::parse_from(["tictactui"]);
        assert_eq!(cli.ai_delay_ms, 500);
        assert_eq!(cli.log_file, PathBuf::from("tictactui.log"));
    }

    #[test]
    fn flags_override_the_defaults() {
        let cli = Cli::parse_from([
            "tictactui",
            "--ai-delay-ms",
            "50",
            "--log-file",
            "/tmp/t.log",
        ]);
        assert_eq!(cli.ai_delay_ms, 50);
        assert_eq!(cli.log_file, PathBuf::from("/tmp/t.log"));
    }
}
