//! # felt-engine: Texas Hold'em Table Core
//!
//! A single-table, no-blind Texas Hold'em engine for one human and up to
//! three computer-controlled opponents. Provides the card model, hand
//! evaluation, and the betting-round state machine that deals, sequences
//! turns and resolves the winner.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and sorting
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand evaluation, comparison and hints
//! - [`game`] - Betting-round state machine and showdown
//! - [`player`] - Seats, actions and chip movement
//! - [`rules`] - Action validation against stack and current bet
//! - [`logger`] - Stages and the textual action log
//! - [`config`] - Table configuration and bot difficulty
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_engine::hand::{evaluate_hand, Category};
//!
//! let hole = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Hearts),
//! ];
//! let board = [
//!     Card::new(Rank::Three, Suit::Diamonds),
//!     Card::new(Rank::Four, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Spades),
//! ];
//!
//! let eval = evaluate_hand(&hole, &board);
//! assert_eq!(eval.category, Category::Straight);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use felt_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.draw().unwrap(), d2.draw().unwrap());
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
