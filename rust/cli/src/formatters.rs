//! Card, board, and action formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal supports Unicode and fall back
//! to h d c s otherwise (older Windows consoles).
//!
//! ## Example
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::game::Game;
use felt_engine::hand::HandHint;
use felt_engine::player::PlayerAction;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Rank as printed on the card: 2-10, J, Q, K, A.
pub fn format_rank(rank: &Rank) -> String {
    rank.label().to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Space-separated cards without brackets.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Format a board (list of cards) as a string in bracket notation, "[]" when empty.
pub fn format_board(cards: &[Card]) -> String {
    format!("[{}]", format_cards(cards))
}

/// Format a PlayerAction the way it is typed at the prompt.
///
/// ```rust
/// use felt_engine::player::PlayerAction;
/// # use felt_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Raise(100)), "raise 100");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
    }
}

pub fn format_hint(hint: &HandHint) -> String {
    format!("Hint: {} {}", hint.description, format_board(&hint.highlighted))
}

/// One-line summary shown before each human decision.
pub fn format_table_status(game: &Game) -> String {
    format!(
        "{} | Board {} | Pot {} | To call {} | Chips {}",
        game.stage(),
        format_board(game.community_cards()),
        game.pot(),
        game.current_bet(),
        game.human_chips()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::config::TableConfig;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "10");
        assert_eq!(format_rank(&Rank::Jack), "J");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_board_with_cards() {
        let board = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let formatted = format_board(&board);
        assert!(formatted.starts_with("[A"));
        assert!(formatted.contains(" K"));
        assert!(formatted.ends_with(']'));
    }

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(&PlayerAction::Check), "check");
        assert_eq!(format_action(&PlayerAction::Call), "call");
    }

    #[test]
    fn test_table_status_line() {
        let mut game = Game::new(TableConfig::default(), Some(1)).unwrap();
        game.reset_game(700).unwrap();
        let line = format_table_status(&game);
        assert!(line.starts_with("Pre-Flop | Board [] | Pot 0"), "{}", line);
        assert!(line.ends_with("Chips 700"));
    }
}
