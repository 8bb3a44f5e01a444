//! Command-line argument types.

use clap::{Parser, Subcommand};
use felt_engine::config::Difficulty;

#[derive(Parser, Debug)]
#[command(
    name = "felt",
    version,
    about = "Texas Hold'em against computer opponents at the terminal"
)]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sit down at the table and play hands against the bots
    Play {
        /// Deck and bot seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Number of hands to play
        #[arg(long)]
        hands: Option<u32>,
        /// Table difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Bot think time in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },
    /// Deal one hand, check it down and show every seat
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate hole cards against an optional board
    Eval {
        /// Two hole cards, e.g. "As Kd"
        #[arg(long)]
        hole: String,
        /// Zero to five community cards, e.g. "Qs Js 10s"
        #[arg(long)]
        board: Option<String>,
        /// Also print the hint shown at this difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Show the saved chip balance
    Chips {
        /// Reset the balance to the restart amount
        #[arg(long)]
        reset: bool,
    },
}
