use crate::errors::ActionViolation;
use crate::player::PlayerAction as A;

/// An action checked against the acting player's stack, with the chips it moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Pays the current bet.
    Call(u32),
    /// Pays `total`; the table's current bet becomes `total`.
    Raise { amount: u32, total: u32 },
}

impl ValidatedAction {
    pub fn chips_moved(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(paid) => *paid,
            ValidatedAction::Raise { total, .. } => *total,
        }
    }
}

/// Validates a player action against the table's current bet and the
/// player's remaining chips.
///
/// A check is legal when nothing is owed, or when the player has no chips
/// left to put in. A call with nothing owed is treated as a check.
///
/// # Errors
///
/// - [`ActionViolation::ZeroRaise`] - raise of 0
/// - [`ActionViolation::ExceedsChips`] - call or raise costs more than `chips`
/// - [`ActionViolation::CannotCheck`] - check while owing chips
///
/// # Examples
///
/// ```
/// use felt_engine::rules::{validate_action, ValidatedAction};
/// use felt_engine::player::PlayerAction;
///
/// let result = validate_action(1000, 50, PlayerAction::Raise(100));
/// assert_eq!(result, Ok(ValidatedAction::Raise { amount: 100, total: 150 }));
///
/// assert!(validate_action(1000, 50, PlayerAction::Check).is_err());
/// assert_eq!(validate_action(0, 50, PlayerAction::Check), Ok(ValidatedAction::Check));
/// ```
pub fn validate_action(
    chips: u32,
    current_bet: u32,
    action: A,
) -> Result<ValidatedAction, ActionViolation> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if current_bet == 0 || chips == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(ActionViolation::CannotCheck {
                    to_call: current_bet,
                })
            }
        }
        A::Call => {
            if current_bet == 0 {
                Ok(ValidatedAction::Check)
            } else if current_bet > chips {
                Err(ActionViolation::ExceedsChips {
                    amount: current_bet,
                    available: chips,
                })
            } else {
                Ok(ValidatedAction::Call(current_bet))
            }
        }
        A::Raise(amount) => {
            if amount == 0 {
                return Err(ActionViolation::ZeroRaise);
            }
            let total = current_bet.saturating_add(amount);
            if total > chips {
                Err(ActionViolation::ExceedsChips {
                    amount: total,
                    available: chips,
                })
            } else {
                Ok(ValidatedAction::Raise { amount, total })
            }
        }
    }
}
