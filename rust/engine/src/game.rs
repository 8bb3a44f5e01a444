use crate::cards::Card;
use crate::config::{Difficulty, TableConfig};
use crate::deck::Deck;
use crate::errors::{ActionViolation, GameError};
use crate::hand::{self, compare_evaluations, HandEvaluation, HandHint};
use crate::logger::{GameAction, Stage};
use crate::player::{Player, PlayerAction, BOT_STARTING_CHIPS};
use crate::rules::{validate_action, ValidatedAction};

/// Seat of the human player.
pub const HUMAN_SEAT: usize = 0;

/// Whose move it is after a step of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Waiting for the human at this seat
    Human(usize),
    /// Waiting for the bot at this seat
    Bot(usize),
    /// The hand is over
    Finished,
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// What was actually recorded for the seat
    pub applied: PlayerAction,
    /// Set when the requested action was refused and the seat folded instead
    pub violation: Option<ActionViolation>,
    /// Whose move it is now
    pub next: Turn,
}

impl ActionOutcome {
    pub fn is_forced_fold(&self) -> bool {
        self.violation.is_some()
    }
}

/// Single-table, no-blind betting state machine for one human and up to
/// three bots.
///
/// Each hand starts with [`Game::reset_game`]. Actions go through
/// [`Game::apply_action`] (or [`Game::perform_player_action`] for the current
/// seat); after every action the machine either ends the hand, moves to the
/// next stage, or hands the turn to the next seat that has not folded.
///
/// # Examples
///
/// ```
/// use felt_engine::config::TableConfig;
/// use felt_engine::game::{Game, Turn};
/// use felt_engine::logger::Stage;
/// use felt_engine::player::PlayerAction;
///
/// let mut game = Game::new(TableConfig::default(), Some(7)).unwrap();
/// game.reset_game(1_000).unwrap();
/// assert_eq!(game.stage(), Stage::PreFlop);
/// assert_eq!(game.current_turn(), Turn::Human(0));
///
/// let outcome = game.perform_player_action(PlayerAction::Check).unwrap();
/// assert_eq!(outcome.next, Turn::Bot(1));
/// ```
#[derive(Debug)]
pub struct Game {
    config: TableConfig,
    deck: Deck,
    players: Vec<Player>,
    community: Vec<Card>,
    pot: u32,
    current_bet: u32,
    current_player: usize,
    stage: Stage,
    round_actions: Vec<GameAction>,
    finished: bool,
    winner: Option<usize>,
    winning_hand: Option<HandEvaluation>,
    hand_epoch: u64,
}

impl Game {
    pub fn new(config: TableConfig, seed: Option<u64>) -> Result<Self, GameError> {
        config.validate()?;
        let seed = seed.unwrap_or(0xA1A2_A3A4);
        let players = seat_players(&config, 0);
        Ok(Self {
            config,
            deck: Deck::new_with_seed(seed),
            players,
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            current_player: HUMAN_SEAT,
            stage: Stage::PreFlop,
            round_actions: Vec::new(),
            finished: false,
            winner: None,
            winning_hand: None,
            hand_epoch: 0,
        })
    }

    /// Starts a new hand: fresh shuffled deck, the human seated with
    /// `human_chips`, every bot with [`BOT_STARTING_CHIPS`], then hole cards
    /// dealt. Any decision computed for the previous hand becomes stale.
    pub fn reset_game(&mut self, human_chips: u32) -> Result<(), GameError> {
        self.hand_epoch += 1;
        self.deck.shuffle();
        self.players = seat_players(&self.config, human_chips);
        self.community.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.current_player = HUMAN_SEAT;
        self.stage = Stage::PreFlop;
        self.round_actions.clear();
        self.finished = false;
        self.winner = None;
        self.winning_hand = None;

        self.deal_cards()?;
        tracing::info!(
            hand = self.hand_epoch,
            seats = self.players.len(),
            human_chips,
            "new hand dealt"
        );
        Ok(())
    }

    /// Gives every seat two cards from the front of the deck.
    pub fn deal_cards(&mut self) -> Result<(), GameError> {
        for p in &mut self.players {
            let a = self.deck.draw()?;
            let b = self.deck.draw()?;
            p.give_cards([a, b]);
        }
        Ok(())
    }

    pub fn current_turn(&self) -> Turn {
        if self.finished || self.hand_epoch == 0 {
            return Turn::Finished;
        }
        if self.players[self.current_player].is_human() {
            Turn::Human(self.current_player)
        } else {
            Turn::Bot(self.current_player)
        }
    }

    /// Applies `action` for whoever's turn it is.
    pub fn perform_player_action(
        &mut self,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        self.apply_action(self.current_player, action)
    }

    /// Applies a bot decision computed during hand `epoch`. Decisions from an
    /// earlier hand are refused without touching the table.
    pub fn apply_bot_action(
        &mut self,
        epoch: u64,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        if epoch != self.hand_epoch {
            tracing::warn!(
                expected = self.hand_epoch,
                actual = epoch,
                seat,
                "discarding stale bot action"
            );
            return Err(GameError::StaleAction {
                expected: self.hand_epoch,
                actual: epoch,
            });
        }
        self.apply_action(seat, action)
    }

    /// Applies `action` for `seat`.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoHandInProgress`] before the first [`Game::reset_game`]
    /// - [`GameError::HandAlreadyComplete`] once a winner is determined
    /// - [`GameError::NotPlayersTurn`] when `seat` is not the current seat
    ///
    /// An action the seat cannot afford or may not take is not an error: the
    /// seat folds and the returned outcome carries the violation.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        if self.hand_epoch == 0 {
            return Err(GameError::NoHandInProgress);
        }
        if self.finished {
            return Err(GameError::HandAlreadyComplete);
        }
        if seat != self.current_player {
            return Err(GameError::NotPlayersTurn {
                expected: self.current_player,
                actual: seat,
            });
        }

        let chips = self.players[seat].chips();
        let (applied, violation) = match validate_action(chips, self.current_bet, action) {
            Ok(validated) => (self.execute(seat, action, validated)?, None),
            Err(violation) => {
                tracing::warn!(
                    seat,
                    ?action,
                    %violation,
                    "invalid action treated as fold"
                );
                let text = format!(
                    "{} folded (invalid action: {})",
                    self.players[seat].name(),
                    violation
                );
                self.players[seat].fold();
                self.players[seat].record_action(PlayerAction::Fold);
                self.log(seat, Some(PlayerAction::Fold), &text);
                (PlayerAction::Fold, Some(violation))
            }
        };

        let next = self.advance_turn()?;
        Ok(ActionOutcome {
            applied,
            violation,
            next,
        })
    }

    fn execute(
        &mut self,
        seat: usize,
        requested: PlayerAction,
        validated: ValidatedAction,
    ) -> Result<PlayerAction, GameError> {
        let name = self.players[seat].name().to_string();
        let (recorded, text) = match validated {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                (PlayerAction::Fold, format!("{} folded", name))
            }
            ValidatedAction::Check => {
                let text = if self.players[seat].chips() == 0 {
                    format!("{} has no chips and checks", name)
                } else {
                    format!("{} checked", name)
                };
                (PlayerAction::Check, text)
            }
            ValidatedAction::Call(paid) => {
                self.players[seat].pay(paid)?;
                self.pot += paid;
                (PlayerAction::Call, format!("{} called {}", name, paid))
            }
            ValidatedAction::Raise { amount, total } => {
                self.players[seat].pay(total)?;
                self.pot += total;
                self.current_bet = total;
                (
                    PlayerAction::Raise(amount),
                    format!("{} raised to {}", name, total),
                )
            }
        };
        tracing::debug!(
            seat,
            ?requested,
            ?recorded,
            stage = %self.stage,
            pot = self.pot,
            current_bet = self.current_bet,
            "action applied"
        );
        self.players[seat].record_action(recorded);
        self.log(seat, Some(recorded), &text);
        Ok(recorded)
    }

    /// Moves the hand forward after an action: ends it when a single player
    /// is left, advances the stage once every remaining seat has acted this
    /// round, otherwise passes the turn to the next seat still in the hand.
    fn advance_turn(&mut self) -> Result<Turn, GameError> {
        let active = self.active_seats();
        let Some(&first_active) = active.first() else {
            return Err(GameError::NoActivePlayers);
        };
        if active.len() == 1 {
            self.determine_winner()?;
            return Ok(Turn::Finished);
        }

        if active.iter().all(|&s| self.players[s].has_acted()) {
            match self.stage.next() {
                Some((next, reveal)) => {
                    let cards = self.deck.draw_n(reveal)?;
                    self.community.extend(cards);
                    self.stage = next;
                    self.current_bet = 0;
                    for p in &mut self.players {
                        p.start_round();
                    }
                    self.current_player = first_active;
                    tracing::debug!(
                        stage = %self.stage,
                        board = self.community.len(),
                        pot = self.pot,
                        "stage advanced"
                    );
                }
                None => {
                    self.determine_winner()?;
                    return Ok(Turn::Finished);
                }
            }
        } else {
            let n = self.players.len();
            let mut idx = self.current_player;
            loop {
                idx = (idx + 1) % n;
                if !self.players[idx].is_folded() {
                    break;
                }
            }
            self.current_player = idx;
        }
        Ok(self.current_turn())
    }

    /// Picks the best hand among players still in, awards the pot and
    /// finishes the hand. Equal categories go to the higher returned cards;
    /// a complete tie keeps the earlier seat.
    fn determine_winner(&mut self) -> Result<(), GameError> {
        self.stage = Stage::Showdown;

        let mut best: Option<(usize, HandEvaluation)> = None;
        for seat in self.active_seats() {
            let Some(eval) = self.evaluate_hand(seat) else {
                continue;
            };
            let better = match &best {
                None => true,
                Some((_, current)) => compare_evaluations(&eval, current).is_gt(),
            };
            if better {
                best = Some((seat, eval));
            }
        }
        let (seat, eval) = best.ok_or(GameError::NoActivePlayers)?;

        let pot = self.pot;
        self.players[seat].add_chips(pot);
        let text = format!(
            "{} wins with a {} and receives ${}",
            self.players[seat].name(),
            eval.description(),
            pot
        );
        self.log(seat, None, &text);
        tracing::info!(
            hand = self.hand_epoch,
            winner = seat,
            category = %eval.category,
            pot,
            "hand finished"
        );

        self.winner = Some(seat);
        self.winning_hand = Some(eval);
        self.finished = true;
        self.pot = 0;
        Ok(())
    }

    fn log(&mut self, seat: usize, action: Option<PlayerAction>, text: &str) {
        let hole = self.players[seat].hole_cards();
        self.round_actions
            .push(GameAction::new(seat, self.stage, action, text, hole));
    }

    fn active_seats(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| !p.is_folded())
            .map(Player::id)
            .collect()
    }

    /// Evaluates a seat's hole cards against the community cards revealed so far.
    pub fn evaluate_hand(&self, seat: usize) -> Option<HandEvaluation> {
        let hole = self.players.get(seat)?.hole_cards()?;
        Some(hand::evaluate_hand(&hole, &self.community))
    }

    pub fn hand_description(&self, category: hand::Category) -> &'static str {
        hand::hand_description(category)
    }

    /// Hint about the human's current hand, subject to the table difficulty.
    pub fn human_hint(&self) -> Option<HandHint> {
        let hole = self.players[HUMAN_SEAT].hole_cards()?;
        hand::hand_hint(&hole, &self.community, self.config.difficulty)
    }

    /// Difficulty the bot at `seat` plays at.
    pub fn seat_difficulty(&self, seat: usize) -> Difficulty {
        match seat {
            HUMAN_SEAT => self.config.difficulty,
            s => self.config.bot_difficulty(s - 1),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn current_player(&self) -> usize {
        self.current_player
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn round_actions(&self) -> &[GameAction] {
        &self.round_actions
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|s| self.players.get(s))
    }
    pub fn winning_hand(&self) -> Option<&HandEvaluation> {
        self.winning_hand.as_ref()
    }
    /// Generation counter, bumped by every [`Game::reset_game`].
    pub fn hand_epoch(&self) -> u64 {
        self.hand_epoch
    }
    pub fn human_chips(&self) -> u32 {
        self.players[HUMAN_SEAT].chips()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

fn seat_players(config: &TableConfig, human_chips: u32) -> Vec<Player> {
    let mut players = Vec::with_capacity(config.seat_count());
    players.push(Player::new(
        HUMAN_SEAT,
        config.human_name.clone(),
        human_chips,
        true,
    ));
    for (i, bot) in config.bots.iter().enumerate() {
        players.push(Player::new(i + 1, bot.name.clone(), BOT_STARTING_CHIPS, false));
    }
    players
}
