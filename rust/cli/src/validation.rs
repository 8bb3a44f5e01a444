//! Input parsing and validation for the interactive table.

use felt_engine::cards::{Card, parse_cards};
use felt_engine::player::PlayerAction;
use std::collections::HashSet;

/// Raise sizes offered next to the prompt.
pub const RAISE_PRESETS: [u32; 6] = [10, 50, 100, 200, 500, 1_000];

const VALID_ACTIONS: &str = "fold, check, call, raise [amount], history, q";

/// Result type for parsing user input at the table prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// Show the action log of the current hand
    History,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call
/// - "r" or "raise" with an optional amount → Raise, `default_raise` when omitted
/// - "h" or "history" → History
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use felt_cli::validation::{parse_player_action, ParseResult};
/// use felt_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold", 50), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(parse_player_action("raise", 50), ParseResult::Action(PlayerAction::Raise(50)));
/// assert_eq!(parse_player_action("raise 200", 50), ParseResult::Action(PlayerAction::Raise(200)));
/// assert_eq!(parse_player_action("q", 50), ParseResult::Quit);
///
/// match parse_player_action("bet 10", 50) {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str, default_raise: u32) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "h" | "history" => ParseResult::History,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => match parts.get(1) {
            None => ParseResult::Action(PlayerAction::Raise(default_raise)),
            Some(amount) => match amount.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            },
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: {}",
            parts[0],
            VALID_ACTIONS
        )),
    }
}

/// Parses the cards given to `felt eval`: exactly two hole cards, at most five
/// board cards, no card twice.
pub fn parse_eval_cards(hole: &str, board: Option<&str>) -> Result<([Card; 2], Vec<Card>), String> {
    let hole = parse_cards(hole).map_err(|e| e.to_string())?;
    let board = match board {
        Some(b) => parse_cards(b).map_err(|e| e.to_string())?,
        None => Vec::new(),
    };
    let [a, b] = hole[..] else {
        return Err(format!("expected 2 hole cards, got {}", hole.len()));
    };
    if board.len() > 5 {
        return Err(format!("board holds at most 5 cards, got {}", board.len()));
    }
    let mut seen = HashSet::new();
    for c in [a, b].iter().chain(board.iter()) {
        if !seen.insert(*c) {
            return Err(format!("card {} given twice", c));
        }
    }
    Ok(([a, b], board))
}
