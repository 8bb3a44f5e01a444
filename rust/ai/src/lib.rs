//! # felt-ai: Computer Opponents
//!
//! Difficulty-parameterized bots for the felt table.
//!
//! ## Core Components
//!
//! - [`BotOpponent`] - Trait drivers use to ask a seat for its action
//! - [`DifficultyBot`] - The bot that plays by a [`profile::DifficultyProfile`]
//! - [`create_bot`] - Factory for a bot at a given difficulty
//! - [`policy`] - The decision function itself
//! - [`random`] - Injected random sources (seeded or scripted)
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::{create_bot, random::RngSource};
//! use felt_engine::config::{Difficulty, TableConfig};
//! use felt_engine::game::{Game, Turn};
//! use felt_engine::player::PlayerAction;
//!
//! let mut game = Game::new(TableConfig::default(), Some(42)).unwrap();
//! game.reset_game(1_000).unwrap();
//! game.perform_player_action(PlayerAction::Check).unwrap();
//!
//! let bot = create_bot(Difficulty::Medium);
//! let mut rng = RngSource::seeded(42);
//! if let Turn::Bot(seat) = game.current_turn() {
//!     let action = bot.decide(&game, seat, &mut rng);
//!     game.apply_bot_action(game.hand_epoch(), seat, action).unwrap();
//! }
//! ```

use felt_engine::config::Difficulty;
use felt_engine::game::Game;
use felt_engine::player::PlayerAction;

pub mod policy;
pub mod profile;
pub mod random;

use policy::DecisionContext;
use profile::DifficultyProfile;
use random::RandomSource;

/// Something that can act for a bot seat.
///
/// # Example Implementation
///
/// ```rust
/// use felt_ai::BotOpponent;
/// use felt_ai::random::RandomSource;
/// use felt_engine::game::Game;
/// use felt_engine::player::PlayerAction;
///
/// struct Calling;
///
/// impl BotOpponent for Calling {
///     fn decide(&self, _game: &Game, _seat: usize, _rng: &mut dyn RandomSource) -> PlayerAction {
///         PlayerAction::Call
///     }
///
///     fn name(&self) -> &str {
///         "Calling"
///     }
/// }
/// ```
pub trait BotOpponent: Send + Sync {
    /// Picks the action for `seat` given the current table.
    fn decide(&self, game: &Game, seat: usize, rng: &mut dyn RandomSource) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Bot that plays by the tables of one [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyBot {
    difficulty: Difficulty,
}

impl DifficultyBot {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Snapshot of what `seat` sees, or `None` when it holds no cards.
    pub fn context(game: &Game, seat: usize) -> Option<DecisionContext> {
        let player = game.player(seat)?;
        let hole = player.hole_cards()?;
        let eval = game.evaluate_hand(seat)?;
        Some(DecisionContext {
            category: eval.category,
            hole,
            stage: game.stage(),
            pot: game.pot(),
            current_bet: game.current_bet(),
            chips: player.chips(),
        })
    }
}

impl BotOpponent for DifficultyBot {
    fn decide(&self, game: &Game, seat: usize, rng: &mut dyn RandomSource) -> PlayerAction {
        match Self::context(game, seat) {
            Some(ctx) => {
                policy::decide(&ctx, DifficultyProfile::for_difficulty(self.difficulty), rng)
            }
            None if game.current_bet() == 0 => PlayerAction::Check,
            None => PlayerAction::Fold,
        }
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "EasyBot",
            Difficulty::Medium => "MediumBot",
            Difficulty::Hard => "HardBot",
        }
    }
}

/// Creates the bot for a difficulty.
///
/// ```rust
/// use felt_ai::create_bot;
/// use felt_engine::config::Difficulty;
///
/// assert_eq!(create_bot(Difficulty::Hard).name(), "HardBot");
/// ```
pub fn create_bot(difficulty: Difficulty) -> Box<dyn BotOpponent> {
    Box::new(DifficultyBot::new(difficulty))
}
