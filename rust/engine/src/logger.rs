use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{format_cards, Card};
use crate::player::PlayerAction;

/// Represents a stage of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Stage {
    /// Hole cards dealt, no community cards
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Winner determined
    Showdown,
}

impl Stage {
    /// The stage that follows this one, with the number of community cards it reveals.
    pub fn next(self) -> Option<(Stage, usize)> {
        match self {
            Stage::PreFlop => Some((Stage::Flop, 3)),
            Stage::Flop => Some((Stage::Turn, 1)),
            Stage::Turn => Some((Stage::River, 1)),
            Stage::River | Stage::Showdown => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::PreFlop => "Pre-Flop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

/// One entry of the hand's action log.
/// The description ends with the acting player's hole cards, e.g.
/// `Diego called 50 [A♠ K♦]`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameAction {
    /// Seat of the player the entry is about
    pub seat: usize,
    /// Stage when the entry was written
    pub stage: Stage,
    /// The action taken, absent for the winner announcement
    pub action: Option<PlayerAction>,
    /// Human-readable text
    pub description: String,
}

impl GameAction {
    pub fn new(
        seat: usize,
        stage: Stage,
        action: Option<PlayerAction>,
        text: &str,
        hole: Option<[Card; 2]>,
    ) -> Self {
        let cards = hole.map(|h| format_cards(&h)).unwrap_or_default();
        Self {
            seat,
            stage,
            action,
            description: format!("{} [{}]", text, cards),
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
