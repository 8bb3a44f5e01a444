use felt_engine::errors::ActionViolation;
use felt_engine::player::PlayerAction as A;
use felt_engine::rules::{validate_action, ValidatedAction};

#[test]
fn raise_zero_is_invalid() {
    let err = validate_action(1_000, /*current_bet*/ 0, A::Raise(0)).unwrap_err();
    assert_eq!(err, ActionViolation::ZeroRaise);
}

#[test]
fn raise_pays_current_bet_plus_amount() {
    let va = validate_action(1_000, 50, A::Raise(30)).unwrap();
    assert_eq!(
        va,
        ValidatedAction::Raise {
            amount: 30,
            total: 80
        }
    );
    assert_eq!(va.chips_moved(), 80);
}

#[test]
fn raise_beyond_stack_is_rejected() {
    let err = validate_action(100, 50, A::Raise(60)).unwrap_err();
    assert_eq!(
        err,
        ActionViolation::ExceedsChips {
            amount: 110,
            available: 100
        }
    );
}

#[test]
fn raise_of_whole_stack_is_allowed() {
    assert!(validate_action(100, 40, A::Raise(60)).is_ok());
}

#[test]
fn call_costs_full_current_bet() {
    assert_eq!(validate_action(500, 70, A::Call), Ok(ValidatedAction::Call(70)));
}

#[test]
fn call_with_nothing_owed_is_check() {
    assert_eq!(validate_action(500, 0, A::Call), Ok(ValidatedAction::Check));
}

#[test]
fn call_beyond_stack_is_rejected() {
    assert!(matches!(
        validate_action(60, 100, A::Call),
        Err(ActionViolation::ExceedsChips { .. })
    ));
}

#[test]
fn check_facing_bet_is_rejected_unless_out_of_chips() {
    assert_eq!(
        validate_action(500, 20, A::Check),
        Err(ActionViolation::CannotCheck { to_call: 20 })
    );
    assert_eq!(validate_action(0, 20, A::Check), Ok(ValidatedAction::Check));
}

#[test]
fn fold_is_always_valid() {
    assert_eq!(validate_action(0, 999, A::Fold), Ok(ValidatedAction::Fold));
}
