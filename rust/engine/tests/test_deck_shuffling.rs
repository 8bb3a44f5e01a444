use std::collections::HashSet;

use felt_engine::cards::{full_deck, Card, Rank, Suit};
use felt_engine::deck::Deck;
use felt_engine::errors::GameError;

#[test]
fn unshuffled_deck_is_in_table_order() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck[0], Card::new(Rank::Two, Suit::Spades));
    assert_eq!(deck[12], Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(deck[13], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(deck[51], Card::new(Rank::Ace, Suit::Clubs));
}

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(
        deck.draw(),
        Err(GameError::DeckExhausted {
            requested: 1,
            remaining: 0
        })
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.draw_n(10).unwrap(), d2.draw_n(10).unwrap());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.draw_n(10).unwrap(),
        d2.draw_n(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn draw_n_refuses_to_overdraw_without_consuming() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    deck.draw_n(50).unwrap();
    assert_eq!(
        deck.draw_n(3),
        Err(GameError::DeckExhausted {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn reset_restores_full_deck() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    deck.draw_n(20).unwrap();
    deck.reset();
    assert_eq!(deck.remaining(), 52);
}
