//! # felt CLI Library
//!
//! Command-line front end for the felt Texas Hold'em table.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the computer opponents
//! - `deal`: Deal a single hand and check it down for inspection
//! - `eval`: Classify hole cards against a board
//! - `cfg`: Display the resolved configuration and its sources
//! - `chips`: Show or reset the saved chip balance

use clap::Parser;
use std::io::Write;
pub mod bank;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, FeltCli};
use commands::{
    handle_cfg_command, handle_chips_command, handle_deal_command, handle_eval_command,
    handle_play_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg", "chips"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["felt", "deal", "--seed", "42"];
/// let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FeltCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "felt - Texas Hold'em at the terminal");
                    write_or_exit!(err, "Usage: felt <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: felt --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            hands,
            difficulty,
            think_ms,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(hands, seed, difficulty, think_ms, out, err, &mut stdin_lock)
        }
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval {
            hole,
            board,
            difficulty,
        } => handle_eval_command(&hole, board.as_deref(), difficulty, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Chips { reset } => handle_chips_command(reset, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["felt", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["felt", "bluff"]);
        assert_eq!(code, 2);
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}", c)), "{}", err);
        }
    }

    #[test]
    fn eval_errors_map_to_exit_code_two() {
        let (code, out, err) = run_args(&["felt", "eval", "--hole", "As"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Error: Invalid input: expected 2 hole cards"));
    }
}
