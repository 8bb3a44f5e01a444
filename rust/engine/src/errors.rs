use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid action: {0}")]
    InvalidAction(#[from] ActionViolation),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Deck exhausted: requested {requested} card(s), {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("No active players remain")]
    NoActivePlayers,
    #[error("Stale action for hand {actual} (current hand {expected})")]
    StaleAction { expected: u64, actual: u64 },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}

/// Why an action was refused for the acting seat.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionViolation {
    #[error("raise amount must be positive")]
    ZeroRaise,
    #[error("amount {amount} exceeds available chips {available}")]
    ExceedsChips { amount: u32, available: u32 },
    #[error("cannot check while facing a bet of {to_call}")]
    CannotCheck { to_call: u32 },
}
