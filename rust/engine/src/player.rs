use crate::cards::Card;
use crate::errors::{ActionViolation, GameError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a player action during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no chip movement)
    Check,
    /// Pay the current bet
    Call,
    /// Pay the current bet plus the given amount, raising the bet by that amount
    Raise(u32),
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => write!(f, "Fold"),
            PlayerAction::Check => write!(f, "Check"),
            PlayerAction::Call => write!(f, "Call"),
            PlayerAction::Raise(amount) => write!(f, "Raise {}", amount),
        }
    }
}

/// Chips each bot sits down with at the start of every hand.
pub const BOT_STARTING_CHIPS: u32 = 1_000;

/// A seat at the table. Seat 0 is the human; the id never changes during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: usize,
    name: String,
    chips: u32,
    hole: Option<[Card; 2]>,
    folded: bool,
    current_action: Option<PlayerAction>,
    is_human: bool,
    acted_this_round: bool,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, chips: u32, is_human: bool) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            hole: None,
            folded: false,
            current_action: None,
            is_human,
            acted_this_round: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn current_action(&self) -> Option<PlayerAction> {
        self.current_action
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn has_acted(&self) -> bool {
        self.acted_this_round
    }

    pub(crate) fn give_cards(&mut self, cards: [Card; 2]) {
        self.hole = Some(cards);
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn record_action(&mut self, action: PlayerAction) {
        self.current_action = Some(action);
        self.acted_this_round = true;
    }

    pub(crate) fn start_round(&mut self) {
        self.acted_this_round = false;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub(crate) fn pay(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(ActionViolation::ExceedsChips {
                amount,
                available: self.chips,
            }
            .into());
        }
        self.chips -= amount;
        Ok(())
    }
}
