//! Difficulty-driven bot decisions.
//!
//! [`decide`] is a pure function of the table situation, a
//! [`DifficultyProfile`] and a [`RandomSource`]; the order in which rolls are
//! drawn is fixed so scripted sources replay a decision exactly.

use felt_engine::cards::Card;
use felt_engine::hand::Category;
use felt_engine::logger::Stage;
use felt_engine::player::PlayerAction;

use crate::profile::DifficultyProfile;
use crate::random::RandomSource;

/// What a bot sees when it is asked to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionContext {
    /// Category of the bot's hand against the board revealed so far
    pub category: Category,
    pub hole: [Card; 2],
    pub stage: Stage,
    pub pot: u32,
    pub current_bet: u32,
    pub chips: u32,
}

impl DecisionContext {
    /// Share of the pot the bet represents: `bet / (pot + bet)`, 0 when both are empty.
    pub fn pot_odds(&self) -> f64 {
        let total = self.pot as f64 + self.current_bet as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.current_bet as f64 / total
    }
}

/// Chooses an action for a bot.
///
/// A bot without chips always checks and draws no roll. Otherwise the bluff
/// roll comes first, then the stage-specific rolls.
///
/// ```
/// use felt_ai::policy::{decide, DecisionContext};
/// use felt_ai::profile::DifficultyProfile;
/// use felt_ai::random::FixedRolls;
/// use felt_engine::cards::parse_cards;
/// use felt_engine::config::Difficulty;
/// use felt_engine::hand::Category;
/// use felt_engine::logger::Stage;
/// use felt_engine::player::PlayerAction;
///
/// let hole = parse_cards("As Kd").unwrap();
/// let ctx = DecisionContext {
///     category: Category::HighCard,
///     hole: [hole[0], hole[1]],
///     stage: Stage::PreFlop,
///     pot: 0,
///     current_bet: 0,
///     chips: 1_000,
/// };
/// // no bluff, then a successful raise roll
/// let mut rolls = FixedRolls::new(vec![0.99, 0.1]);
/// let profile = DifficultyProfile::for_difficulty(Difficulty::Medium);
/// assert_eq!(decide(&ctx, profile, &mut rolls), PlayerAction::Raise(50));
/// ```
pub fn decide(
    ctx: &DecisionContext,
    profile: &DifficultyProfile,
    rng: &mut dyn RandomSource,
) -> PlayerAction {
    if ctx.chips == 0 {
        return PlayerAction::Check;
    }

    let bluff = rng.roll(profile.bluff_chance);
    let action = match ctx.stage {
        Stage::PreFlop => preflop(ctx, profile, bluff, rng),
        Stage::Flop | Stage::Turn | Stage::River => postflop(ctx, profile, bluff, rng),
        Stage::Showdown => PlayerAction::Check,
    };

    tracing::debug!(
        stage = %ctx.stage,
        category = %ctx.category,
        chips = ctx.chips,
        current_bet = ctx.current_bet,
        pot_odds = ctx.pot_odds(),
        bluff,
        ?action,
        "bot decision"
    );
    action
}

fn preflop(
    ctx: &DecisionContext,
    profile: &DifficultyProfile,
    bluff: bool,
    rng: &mut dyn RandomSource,
) -> PlayerAction {
    let bet = ctx.current_bet;
    let playable = ctx.category >= Category::OnePair
        || ctx.hole.iter().any(|c| c.rank.is_high())
        || bluff;

    if !playable {
        return if bet == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        };
    }

    if bet == 0 {
        if ctx.chips >= profile.preflop_raise && rng.roll(profile.preflop_raise_chance) {
            let amount = profile.preflop_raise.min(ctx.chips.saturating_sub(bet));
            if amount > 0 {
                return PlayerAction::Raise(amount);
            }
        }
        return PlayerAction::Check;
    }

    let max_bet = ctx.chips.min(bet.saturating_add(profile.preflop_raise));
    if bet <= max_bet {
        if rng.roll(profile.preflop_fold_chance) {
            PlayerAction::Fold
        } else {
            PlayerAction::Call
        }
    } else {
        PlayerAction::Fold
    }
}

fn postflop(
    ctx: &DecisionContext,
    profile: &DifficultyProfile,
    bluff: bool,
    rng: &mut dyn RandomSource,
) -> PlayerAction {
    let bet = ctx.current_bet;
    let headroom = ctx.chips.saturating_sub(bet);
    let made = ctx.category >= Category::OnePair;
    let strong = ctx.category >= Category::ThreeOfAKind;
    let monster = ctx.category >= Category::Flush;

    if (monster || strong) && ctx.chips > bet {
        let table = if monster {
            profile.monster_raise
        } else {
            profile.strong_raise
        };
        let amount = table.min(headroom);
        if amount > 0 && rng.roll(profile.aggressiveness) {
            return PlayerAction::Raise(amount);
        }
        return call_or_check(bet, ctx.chips);
    }

    if made || bluff {
        return call_or_check(bet, ctx.chips);
    }

    if bet > 0 {
        return PlayerAction::Fold;
    }
    if rng.roll(profile.aggressiveness) && ctx.chips >= profile.base_raise {
        let amount = profile.base_raise.min(headroom);
        if amount > 0 {
            return PlayerAction::Raise(amount);
        }
    }
    PlayerAction::Check
}

fn call_or_check(bet: u32, chips: u32) -> PlayerAction {
    if bet == 0 {
        PlayerAction::Check
    } else if bet <= chips {
        PlayerAction::Call
    } else {
        PlayerAction::Fold
    }
}
