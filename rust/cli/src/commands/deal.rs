//! Deal command handler: one hand dealt to the default table and checked down
//! to the showdown, printed seat by seat.
//! The command supports optional seeding for deterministic dealing.

use crate::error::CliError;
use crate::formatters::{format_board, format_cards};
use felt_engine::config::TableConfig;
use felt_engine::game::Game;
use felt_engine::player::PlayerAction;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = Game::new(TableConfig::default(), Some(seed))?;
    game.reset_game(crate::bank::DEFAULT_CHIPS)?;
    while !game.is_finished() {
        game.perform_player_action(PlayerAction::Check)?;
    }

    writeln!(out, "Seed: {}", seed)?;
    for player in game.players() {
        let seat = player.id();
        let (Some(hole), Some(eval)) = (player.hole_cards(), game.evaluate_hand(seat)) else {
            continue;
        };
        writeln!(
            out,
            "{}: {} ({})",
            player.name(),
            format_cards(&hole),
            eval.description()
        )?;
    }
    writeln!(out, "Board: {}", format_board(game.community_cards()))?;
    if let (Some(winner), Some(hand)) = (game.winner(), game.winning_hand()) {
        writeln!(out, "Winner: {} with {}", winner.name(), hand.description())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 7, "{}", output);
        assert_eq!(lines[0], "Seed: 999");
        assert!(lines[1].starts_with("You: "));
        assert!(lines[2].starts_with("Diego: "));
        assert!(lines[3].starts_with("Lucas: "));
        assert!(lines[5].starts_with("Board: ["));
        assert!(lines[6].starts_with("Winner: "));
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &mut out).is_ok());
        assert!(String::from_utf8(out).unwrap().contains("Board: "));
    }
}
