use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, all_suits, sort_cards, Card, Rank};
use crate::config::Difficulty;

/// Hand categories, weakest first. The discriminant times 100 is the tier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Integer score from 100 (high card) to 1000 (royal flush), step 100.
    pub fn tier(self) -> u32 {
        self as u32 * 100
    }

    pub fn from_tier(tier: u32) -> Option<Category> {
        let category = match tier {
            100 => Category::HighCard,
            200 => Category::OnePair,
            300 => Category::TwoPair,
            400 => Category::ThreeOfAKind,
            500 => Category::Straight,
            600 => Category::Flush,
            700 => Category::FullHouse,
            800 => Category::FourOfAKind,
            900 => Category::StraightFlush,
            1000 => Category::RoyalFlush,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(hand_description(*self))
    }
}

/// Display label for a category. Not used for tie-breaking.
pub fn hand_description(category: Category) -> &'static str {
    match category {
        Category::RoyalFlush => "Royal Flush",
        Category::StraightFlush => "Straight Flush",
        Category::FourOfAKind => "Four of a Kind",
        Category::FullHouse => "Full House",
        Category::Flush => "Flush",
        Category::Straight => "Straight",
        Category::ThreeOfAKind => "Three of a Kind",
        Category::TwoPair => "Two Pair",
        Category::OnePair => "One Pair",
        Category::HighCard => "High Card",
    }
}

/// Result of evaluating a player's cards.
///
/// `cards` is the subset that justifies `category`. For flushes and kickers
/// it is taken in sorted order rather than searched for the strongest
/// combination, so two hands of the same category may compare differently
/// than their best five-card hands would.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    pub cards: Vec<Card>,
}

impl HandEvaluation {
    pub fn tier(&self) -> u32 {
        self.category.tier()
    }

    pub fn description(&self) -> &'static str {
        hand_description(self.category)
    }
}

/// Evaluates two hole cards against zero, three, four or five community cards.
///
/// # Examples
///
/// ```
/// use felt_engine::cards::parse_cards;
/// use felt_engine::hand::{evaluate_hand, Category};
///
/// let hole = parse_cards("As Ks").unwrap();
/// let board = parse_cards("Qs Js 10s").unwrap();
/// let eval = evaluate_hand(&[hole[0], hole[1]], &board);
/// assert_eq!(eval.category, Category::RoyalFlush);
/// assert_eq!(eval.tier(), 1000);
/// ```
pub fn evaluate_hand(hole: &[Card; 2], board: &[Card]) -> HandEvaluation {
    if board.is_empty() {
        // Preflop only looks at the private cards.
        if hole[0].rank == hole[1].rank {
            return HandEvaluation {
                category: Category::OnePair,
                cards: hole.to_vec(),
            };
        }
        return HandEvaluation {
            category: Category::HighCard,
            cards: vec![sort_cards(hole)[0]],
        };
    }

    let mut all = hole.to_vec();
    all.extend_from_slice(board);
    let sorted = sort_cards(&all);

    let mut found: Vec<HandEvaluation> = Vec::new();
    let mut push = |category: Category, cards: Option<Vec<Card>>| {
        if let Some(cards) = cards {
            found.push(HandEvaluation { category, cards });
        }
    };

    if sorted.len() >= 5 {
        push(Category::RoyalFlush, royal_flush_cards(&sorted));
        push(Category::StraightFlush, straight_flush_cards(&sorted));
        push(Category::FourOfAKind, four_of_a_kind_cards(&sorted));
        push(Category::FullHouse, full_house_cards(&sorted));
        push(Category::Flush, flush_cards(&sorted));
        push(Category::Straight, straight_cards(&sorted));
    }
    push(Category::ThreeOfAKind, three_of_a_kind_cards(&sorted));
    push(Category::TwoPair, two_pair_cards(&sorted));
    push(Category::OnePair, one_pair_cards(&sorted));

    found
        .into_iter()
        .max_by_key(|e| e.category)
        .unwrap_or_else(|| HandEvaluation {
            category: Category::HighCard,
            cards: vec![sorted[0]],
        })
}

/// Orders two evaluations: by category, then by the returned cards compared
/// rank by rank in the order the evaluator lists them, most significant
/// first. A wheel therefore counts as five-high. Extra cards on either side
/// are ignored once the shorter list runs out.
pub fn compare_evaluations(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| compare_card_ranks(&a.cards, &b.cards))
}

fn compare_card_ranks(a: &[Card], b: &[Card]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.rank.cmp(&y.rank) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

fn of_rank(cards: &[Card], rank: Rank) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.rank == rank).collect()
}

fn without(cards: &[Card], used: &[Card]) -> Vec<Card> {
    cards.iter().copied().filter(|c| !used.contains(c)).collect()
}

/// Highest rank holding at least `n` cards, with those cards in input order.
fn highest_group(cards: &[Card], n: usize) -> Option<Vec<Card>> {
    all_ranks().iter().rev().find_map(|&rank| {
        let group = of_rank(cards, rank);
        (group.len() >= n).then(|| group.into_iter().take(n).collect())
    })
}

fn royal_flush_cards(cards: &[Card]) -> Option<Vec<Card>> {
    all_suits().iter().find_map(|&suit| {
        let suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        straight_cards(&suited).filter(|s| s[0].rank == Rank::Ace && s[1].rank == Rank::King)
    })
}

fn straight_flush_cards(cards: &[Card]) -> Option<Vec<Card>> {
    all_suits().iter().find_map(|&suit| {
        let suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        straight_cards(&suited)
    })
}

fn four_of_a_kind_cards(cards: &[Card]) -> Option<Vec<Card>> {
    let mut quads = highest_group(cards, 4)?;
    if let Some(kicker) = cards.iter().find(|c| c.rank != quads[0].rank) {
        quads.push(*kicker);
    }
    Some(quads)
}

fn full_house_cards(cards: &[Card]) -> Option<Vec<Card>> {
    let mut trips = highest_group(cards, 3)?;
    let pair = highest_group(&without(cards, &trips), 2)?;
    trips.extend(pair);
    Some(trips)
}

fn flush_cards(cards: &[Card]) -> Option<Vec<Card>> {
    all_suits().iter().find_map(|&suit| {
        let suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        (suited.len() >= 5).then(|| suited[..5].to_vec())
    })
}

/// Expects `cards` sorted high to low. Returns the straight highest card
/// first, or the wheel as 5-4-3-2-A.
fn straight_cards(cards: &[Card]) -> Option<Vec<Card>> {
    if cards.len() < 5 {
        return None;
    }
    let mut distinct: Vec<Card> = Vec::with_capacity(cards.len());
    for &c in cards {
        if distinct.last().map(|d: &Card| d.rank) != Some(c.rank) {
            distinct.push(c);
        }
    }
    if distinct.len() < 5 {
        return None;
    }

    let straight = distinct.windows(5).find(|w| {
        w.windows(2)
            .all(|pair| pair[0].rank.value() == pair[1].rank.value() + 1)
    });
    if let Some(w) = straight {
        return Some(w.to_vec());
    }

    let ace = distinct.iter().find(|c| c.rank == Rank::Ace)?;
    let mut wheel = Vec::with_capacity(5);
    for rank in [Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        wheel.push(*distinct.iter().find(|c| c.rank == rank)?);
    }
    wheel.push(*ace);
    Some(wheel)
}

fn three_of_a_kind_cards(cards: &[Card]) -> Option<Vec<Card>> {
    let mut trips = highest_group(cards, 3)?;
    let rank = trips[0].rank;
    trips.extend(cards.iter().filter(|c| c.rank != rank).take(2));
    Some(trips)
}

fn two_pair_cards(cards: &[Card]) -> Option<Vec<Card>> {
    let first = one_pair_cards(cards)?;
    let rest = without(cards, &first);
    let second = one_pair_cards(&rest)?;
    let rest = without(&rest, &second);

    let mut result = first;
    result.extend(second);
    if let Some(kicker) = rest.first() {
        result.push(*kicker);
    }
    Some(result)
}

fn one_pair_cards(cards: &[Card]) -> Option<Vec<Card>> {
    highest_group(cards, 2)
}

/// What the human seat is shown about its own hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandHint {
    pub description: &'static str,
    pub tier: u32,
    pub highlighted: Vec<Card>,
}

/// Hint for the current hand: hidden on Hard, shown preflop only for pocket
/// pairs and postflop only for a pair or better.
pub fn hand_hint(hole: &[Card; 2], board: &[Card], difficulty: Difficulty) -> Option<HandHint> {
    if difficulty == Difficulty::Hard {
        return None;
    }
    let eval = evaluate_hand(hole, board);
    if eval.category < Category::OnePair {
        return None;
    }
    Some(HandHint {
        description: eval.description(),
        tier: eval.tier(),
        highlighted: eval.cards,
    })
}
