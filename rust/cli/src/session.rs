//! A table in play: the engine, one bot per computer seat, and the timer that
//! paces bot decisions.
//!
//! Bots do not act the instant their turn comes up. [`BotScheduler`] arms a
//! think timer on the tokio runtime; when it fires the session asks the bot
//! for its action against the table as it is *then*. Every wakeup carries the
//! hand epoch it was scheduled in, so a timer that survives a reset can never
//! act on the next hand.

use std::time::Duration;

use felt_ai::random::RngSource;
use felt_ai::{BotOpponent, create_bot};
use felt_engine::config::TableConfig;
use felt_engine::errors::GameError;
use felt_engine::game::{ActionOutcome, Game, HUMAN_SEAT, Turn};
use felt_engine::player::PlayerAction;
use rand_chacha::ChaCha20Rng;
use tokio::task::JoinHandle;

/// A fired bot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wakeup {
    pub epoch: u64,
    pub seat: usize,
}

/// Holds at most one pending bot timer.
#[derive(Debug)]
pub struct BotScheduler {
    delay: Duration,
    pending: Option<JoinHandle<Wakeup>>,
}

impl BotScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arms the timer for `seat`, replacing any timer already pending.
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, epoch: u64, seat: usize) {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            Wakeup { epoch, seat }
        }));
        tracing::trace!(epoch, seat, delay_ms = delay.as_millis() as u64, "bot timer armed");
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::trace!("bot timer cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Waits for the pending timer. `None` when nothing is armed or the
    /// timer was aborted.
    pub async fn wait(&mut self) -> Option<Wakeup> {
        let handle = self.pending.take()?;
        handle.await.ok()
    }
}

impl Drop for BotScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub struct TableSession {
    game: Game,
    bots: Vec<Box<dyn BotOpponent>>,
    rng: RngSource<ChaCha20Rng>,
    scheduler: BotScheduler,
    shown: usize,
}

impl TableSession {
    /// Seats the table. `seed` drives both the deck and the bots' rolls.
    pub fn new(config: TableConfig, seed: u64, think: Duration) -> Result<Self, GameError> {
        let game = Game::new(config, Some(seed))?;
        let bots = (1..game.config().seat_count())
            .map(|seat| create_bot(game.seat_difficulty(seat)))
            .collect();
        Ok(Self {
            game,
            bots,
            rng: RngSource::seeded(seed.wrapping_add(1)),
            scheduler: BotScheduler::new(think),
            shown: 0,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Deals a new hand. A bot timer still pending from the previous hand is
    /// cancelled.
    pub fn start_hand(&mut self, human_chips: u32) -> Result<(), GameError> {
        if self.scheduler.is_pending() {
            tracing::debug!(
                epoch = self.game.hand_epoch(),
                "dropping bot decision for abandoned hand"
            );
        }
        self.scheduler.cancel();
        self.shown = 0;
        self.game.reset_game(human_chips)
    }

    /// Applies the human's action. Refused unless the human is to act.
    pub fn human_action(&mut self, action: PlayerAction) -> Result<ActionOutcome, GameError> {
        match self.game.current_turn() {
            Turn::Human(_) => self.game.apply_action(HUMAN_SEAT, action),
            Turn::Finished if self.game.hand_epoch() == 0 => Err(GameError::NoHandInProgress),
            Turn::Finished => Err(GameError::HandAlreadyComplete),
            Turn::Bot(seat) => Err(GameError::NotPlayersTurn {
                expected: seat,
                actual: HUMAN_SEAT,
            }),
        }
    }

    /// Lets the bot named by `wakeup` act. A wakeup from an earlier hand, or
    /// for a seat whose turn it no longer is, is dropped and yields `None`.
    pub fn apply_wakeup(&mut self, wakeup: Wakeup) -> Result<Option<ActionOutcome>, GameError> {
        if wakeup.epoch != self.game.hand_epoch()
            || self.game.current_turn() != Turn::Bot(wakeup.seat)
        {
            tracing::debug!(
                epoch = wakeup.epoch,
                current = self.game.hand_epoch(),
                seat = wakeup.seat,
                "ignoring stale bot wakeup"
            );
            return Ok(None);
        }
        let Some(bot) = wakeup.seat.checked_sub(1).and_then(|i| self.bots.get(i)) else {
            return Ok(None);
        };
        let action = bot.decide(&self.game, wakeup.seat, &mut self.rng);
        tracing::debug!(seat = wakeup.seat, bot = bot.name(), ?action, "bot decided");
        self.game
            .apply_bot_action(wakeup.epoch, wakeup.seat, action)
            .map(Some)
    }

    /// Plays bot turns, each after its think time, until the human is to
    /// act or the hand is over.
    pub async fn run_bots(&mut self) -> Result<Turn, GameError> {
        while self.schedule_bot() {
            if let Some(wakeup) = self.scheduler.wait().await {
                self.apply_wakeup(wakeup)?;
            }
        }
        Ok(self.game.current_turn())
    }

    /// Log lines written since the last call.
    pub fn take_new_log(&mut self) -> Vec<String> {
        let log = self.game.round_actions();
        let start = self.shown.min(log.len());
        self.shown = log.len();
        log[start..].iter().map(|a| a.description.clone()).collect()
    }

    /// Arms the think timer for the bot to act, if any.
    fn schedule_bot(&mut self) -> bool {
        match self.game.current_turn() {
            Turn::Bot(seat) => {
                self.scheduler.schedule(self.game.hand_epoch(), seat);
                true
            }
            _ => false,
        }
    }
}
