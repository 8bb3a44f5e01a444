//! Eval command handler: classifies hole cards against a partial or full
//! board.

use crate::error::CliError;
use crate::formatters::{format_board, format_cards, format_hint};
use crate::ui;
use crate::validation::parse_eval_cards;
use felt_engine::config::Difficulty;
use felt_engine::hand::{evaluate_hand, hand_hint};
use std::io::Write;

/// Handle the eval command.
///
/// Prints the category, its tier and the cards that make it. With a
/// difficulty the hint the table would show is printed too (nothing on
/// Hard, or when the hand is too weak for a hint).
///
/// # Errors
///
/// `CliError::InvalidInput` when a card does not parse, the hole is not
/// exactly two cards, the board has more than five, or a card repeats.
pub fn handle_eval_command(
    hole: &str,
    board: Option<&str>,
    difficulty: Option<Difficulty>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (hole, board) = match parse_eval_cards(hole, board) {
        Ok(cards) => cards,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let eval = evaluate_hand(&hole, &board);
    writeln!(out, "Hole: {}", format_cards(&hole))?;
    writeln!(out, "Board: {}", format_board(&board))?;
    writeln!(out, "Hand: {}", eval.description())?;
    writeln!(out, "Tier: {}", eval.tier())?;
    writeln!(out, "Cards: {}", format_cards(&eval.cards))?;

    if let Some(difficulty) = difficulty {
        match hand_hint(&hole, &board, difficulty) {
            Some(hint) => writeln!(out, "{}", format_hint(&hint))?,
            None => writeln!(out, "Hint: none at {}", difficulty)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(
        hole: &str,
        board: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_eval_command(hole, board, difficulty, &mut out, &mut err);
        (r, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn royal_flush_on_the_flop() {
        let (r, out, _) = eval("As Ks", Some("Qs Js 10s"), None);
        assert!(r.is_ok());
        assert!(out.contains("Hand: Royal Flush"));
        assert!(out.contains("Tier: 1000"));
        assert!(!out.contains("Hint"));
    }

    #[test]
    fn preflop_pair_without_board() {
        let (r, out, _) = eval("9h 9d", None, Some(Difficulty::Easy));
        assert!(r.is_ok());
        assert!(out.contains("Board: []"));
        assert!(out.contains("Hand: One Pair"));
        assert!(out.contains("Hint: One Pair"));
    }

    #[test]
    fn hard_shows_no_hint() {
        let (r, out, _) = eval("9h 9d", None, Some(Difficulty::Hard));
        assert!(r.is_ok());
        assert!(out.contains("Hint: none at hard"));
    }

    #[test]
    fn bad_cards_are_input_errors() {
        let (r, _, err) = eval("As", None, None);
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
        assert!(err.starts_with("Error: expected 2 hole cards"));

        let (r, _, _) = eval("As Ks", Some("As 2c 3d"), None);
        assert!(matches!(r, Err(CliError::InvalidInput(_))));

        let (r, _, err) = eval("Zz Ks", None, None);
        assert!(r.is_err());
        assert!(err.contains("Invalid card"));
    }
}
