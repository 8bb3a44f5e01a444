//! # Play Command
//!
//! Interactive hands against the computer opponents.
//!
//! Each hand the human is dealt in with their saved balance, the bots with a
//! fresh stack. Bot turns run on a current-thread tokio runtime so their think
//! time is a real timer; the human's turns read a line from the input stream.
//!
//! ## Prompt commands
//!
//! - `fold`/`f`, `check`/`c`, `call`, `raise [N]`/`r [N]`
//! - `history`/`h` shows the action log of the current hand
//! - `q`/`quit` (or end of input) leaves the table

use std::io::{BufRead, Write};
use std::time::Duration;

use felt_engine::config::Difficulty;
use felt_engine::game::Turn;
use felt_engine::rules::validate_action;

use crate::bank::{ChipBank, LOW_CHIPS};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_cards, format_hint, format_table_status};
use crate::io_utils::read_stdin_line;
use crate::session::TableSession;
use crate::ui;
use crate::validation::{ParseResult, RAISE_PRESETS, parse_player_action};

/// Handle the play command.
///
/// Command-line values override the resolved configuration.
///
/// # Errors
///
/// - `CliError::Config` if the configuration or chip file cannot be loaded
/// - `CliError::InvalidInput` if `hands` is 0
/// - `CliError::Io` if reading input or writing output fails
pub fn handle_play_command(
    hands: Option<u32>,
    seed: Option<u64>,
    difficulty: Option<Difficulty>,
    think_ms: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut config = config::load()?;
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(d) = difficulty {
        config.difficulty = d;
    }
    if let Some(ms) = think_ms {
        config.think_ms = ms;
    }
    execute_play(&config, hands.unwrap_or(1), stdin, out, err)
}

fn execute_play(
    config: &Config,
    hands: u32,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut bank = ChipBank::open(&config.chips_file)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut session = TableSession::new(
        config.table_config(),
        seed,
        Duration::from_millis(config.think_ms),
    )?;

    writeln!(
        out,
        "play: hands={} seed={} difficulty={}",
        hands, seed, config.difficulty
    )?;
    writeln!(out, "Balance: {}", bank.balance())?;

    let mut played = 0u32;
    let mut quit_requested = false;

    for i in 1..=hands {
        if bank.is_low() {
            ui::display_warning(
                err,
                &format!(
                    "Low chips: balance {} is below {}. Run `felt chips --reset` to continue.",
                    bank.balance(),
                    LOW_CHIPS
                ),
            )?;
            break;
        }

        session.start_hand(bank.balance())?;
        writeln!(out, "Hand {}", i)?;
        if let Some(hole) = session.game().players()[0].hole_cards() {
            writeln!(out, "Your cards: {}", format_cards(&hole))?;
        }

        loop {
            let turn = runtime.block_on(session.run_bots())?;
            for line in session.take_new_log() {
                writeln!(out, "{}", line)?;
            }
            if turn == Turn::Finished {
                break;
            }

            writeln!(out, "{}", format_table_status(session.game()))?;
            if let Some(hint) = session.game().human_hint() {
                writeln!(out, "{}", format_hint(&hint))?;
            }
            ui::prompt(
                out,
                &format!(
                    "Action (fold/check/call/raise [N]/history/q) [raise {:?}, default {}]: ",
                    RAISE_PRESETS, config.default_raise
                ),
            )?;

            let Some(input) = read_stdin_line(stdin) else {
                quit_requested = true;
                break;
            };
            match parse_player_action(&input, config.default_raise) {
                ParseResult::Action(action) => {
                    let game = session.game();
                    if let Err(violation) =
                        validate_action(game.human_chips(), game.current_bet(), action)
                    {
                        ui::write_error(err, &violation.to_string())?;
                        continue;
                    }
                    session.human_action(action)?;
                }
                ParseResult::History => {
                    writeln!(out, "History:")?;
                    for entry in session.game().round_actions() {
                        writeln!(out, "  {}", entry)?;
                    }
                }
                ParseResult::Quit => {
                    quit_requested = true;
                    break;
                }
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                }
            }
        }

        // Chips already in the pot stay there when the human walks away.
        bank.set_balance(session.game().human_chips());
        bank.save()?;

        if quit_requested {
            break;
        }
        played += 1;
        if let (Some(winner), Some(hand)) = (session.game().winner(), session.game().winning_hand())
        {
            writeln!(out, "Winner: {} ({})", winner.name(), hand.description())?;
        }
        writeln!(out, "Balance: {}", bank.balance())?;
    }

    writeln!(out, "Hands played: {}", played)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_config(dir: &tempfile::TempDir) -> Config {
        Config {
            seed: Some(42),
            think_ms: 0,
            chips_file: dir.path().join("chips.json"),
            ..Config::default()
        }
    }

    fn play(config: &Config, hands: u32, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = execute_play(config, hands, &mut stdin, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn zero_hands_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _, err) = play(&test_config(&dir), 0, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("hands must be >= 1"));
    }

    #[test]
    fn folding_every_hand_completes() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let (result, out, _) = play(&config, 2, "fold\nfold\n");
        assert!(result.is_ok());
        assert!(out.contains("Hand 1"));
        assert!(out.contains("Hand 2"));
        assert!(out.contains("You folded"));
        assert!(out.contains("Hands played: 2"));
        assert!(config.chips_file.exists());
    }

    #[test]
    fn calling_down_plays_to_a_winner() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let (result, out, _) = play(&config, 1, &"call\n".repeat(40));
        assert!(result.is_ok());
        assert!(out.contains("Winner: "), "{}", out);
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn quit_stops_before_counting_the_hand() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out, _) = play(&test_config(&dir), 3, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("Hands played: 0"));
        assert!(!out.contains("Hand 2"));
    }

    #[test]
    fn end_of_input_is_a_quit() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out, _) = play(&test_config(&dir), 2, "");
        assert!(result.is_ok());
        assert!(out.contains("Hands played: 0"));
    }

    #[test]
    fn history_and_bad_input_reprompt() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out, err) = play(&test_config(&dir), 1, "history\nbet 5\nraise 0\nfold\n");
        assert!(result.is_ok());
        assert!(out.contains("History:"));
        assert!(err.contains("Unrecognized action 'bet'"));
        assert!(err.contains("Raise amount must be positive"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn unaffordable_raise_is_refused_without_folding() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        std::fs::write(&config.chips_file, r#"{"chips": 100}"#).unwrap();
        let (result, out, err) = play(&config, 1, "raise 500\nfold\n");
        assert!(result.is_ok());
        assert!(err.contains("exceeds available chips 100"), "{}", err);
        assert!(out.contains("You folded ["), "{}", out);
        assert!(!out.contains("invalid action"));
    }

    #[test]
    fn low_balance_stops_new_hands() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        std::fs::write(&config.chips_file, r#"{"chips": 20}"#).unwrap();
        let (result, out, err) = play(&config, 3, "fold\n");
        assert!(result.is_ok());
        assert!(err.contains("WARNING: Low chips"));
        assert!(!out.contains("Hand 1"));
        assert!(out.contains("Hands played: 0"));
    }

    #[test]
    fn balance_is_saved_between_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let (result, _, _) = play(&config, 1, "fold\n");
        assert!(result.is_ok());
        let bank = ChipBank::open(&config.chips_file).unwrap();
        assert!(bank.balance() <= 1_000);
        assert!(bank.balance() > 0);
    }
}
