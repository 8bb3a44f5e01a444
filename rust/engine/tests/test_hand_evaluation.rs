use felt_engine::cards::{parse_cards, sort_cards, Card, Rank as R, Suit as S};
use felt_engine::hand::{compare_evaluations, evaluate_hand, hand_description, Category};

fn c(r: R, s: S) -> Card {
    Card { rank: r, suit: s }
}

fn eval(hole: &str, board: &str) -> felt_engine::hand::HandEvaluation {
    let h = parse_cards(hole).unwrap();
    let b = parse_cards(board).unwrap();
    evaluate_hand(&[h[0], h[1]], &b)
}

#[test]
fn detects_royal_flush() {
    let e = eval("As Ks", "Qs Js 10s");
    assert_eq!(e.category, Category::RoyalFlush);
    assert_eq!(e.tier(), 1000);
    assert_eq!(
        e.cards,
        vec![
            c(R::Ace, S::Spades),
            c(R::King, S::Spades),
            c(R::Queen, S::Spades),
            c(R::Jack, S::Spades),
            c(R::Ten, S::Spades),
        ]
    );
}

#[test]
fn wheel_counts_as_straight() {
    let e = eval("Ah 2h", "3d 4c 5s");
    assert_eq!(e.category, Category::Straight);
    assert!(e.tier() >= 500);
    assert_eq!(e.cards.last().map(|c| c.rank), Some(R::Ace));
    assert_eq!(e.cards[0].rank, R::Five);
}

#[test]
fn five_card_categories_follow_ranking_order() {
    let hands = [
        ("As Ks", "Qs Js 10s", Category::RoyalFlush),
        ("9h 8h", "7h 6h 5h", Category::StraightFlush),
        ("7c 7d", "7h 7s 2c", Category::FourOfAKind),
        ("Kc Kd", "Kh Qs Qc", Category::FullHouse),
        ("2d 7d", "9d Jd Kd", Category::Flush),
        ("5c 6h", "7c 8h 9d", Category::Straight),
        ("Qc Qh", "Qd 2s 9c", Category::ThreeOfAKind),
        ("Jc Jh", "4d 4s 9c", Category::TwoPair),
        ("Ac Ah", "3d 8s 9c", Category::OnePair),
        ("Ac Kh", "3d 8s 9c", Category::HighCard),
    ];
    let evals: Vec<_> = hands
        .iter()
        .map(|(h, b, expected)| {
            let e = eval(h, b);
            assert_eq!(e.category, *expected, "{} + {}", h, b);
            e
        })
        .collect();
    for pair in evals.windows(2) {
        assert!(pair[0].tier() > pair[1].tier());
        assert!(compare_evaluations(&pair[0], &pair[1]).is_gt());
    }
}

#[test]
fn full_house_pair_is_found_after_removing_trips() {
    // The pair is taken from the cards left over once the trips are set aside.
    let e = eval("Kc Kd", "Kh Qs Qc");
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.cards.len(), 5);
    assert_eq!(e.cards[3].rank, R::Queen);
    assert_eq!(e.cards[4].rank, R::Queen);
}

#[test]
fn wheel_loses_to_six_high_straight() {
    let board = "2c 3d 4h 5s 9c";
    let wheel = eval("Ah Kd", board);
    let six_high = eval("6d Jc", board);
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(six_high.category, Category::Straight);
    assert!(compare_evaluations(&wheel, &six_high).is_lt());
    assert!(compare_evaluations(&six_high, &wheel).is_gt());
}

#[test]
fn higher_top_pair_wins_two_pair() {
    let board = "Jd 9s 9h 4c 3d";
    let jacks_up = eval("Ks Jh", board);
    let queens_up = eval("Qc Qd", board);
    assert_eq!(jacks_up.category, Category::TwoPair);
    assert_eq!(queens_up.category, Category::TwoPair);
    assert!(compare_evaluations(&jacks_up, &queens_up).is_lt());
}

#[test]
fn seven_cards_pick_highest_category() {
    let e = eval("Ah Kh", "Qh Jh 2c 2d 2s");
    assert_eq!(e.category, Category::ThreeOfAKind);

    let e = eval("Ah Kh", "Qh Jh 10h 2d 2s");
    assert_eq!(e.category, Category::RoyalFlush);

    let e = eval("9c 9d", "9h 4s 4c Ad Kd");
    assert_eq!(e.category, Category::FullHouse);
}

#[test]
fn four_of_a_kind_takes_highest_kicker() {
    let e = eval("7c 7d", "7h 7s Ac 2d 3s");
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.cards[4], c(R::Ace, S::Clubs));
}

#[test]
fn two_pair_prefers_highest_pairs_and_kicker() {
    let e = eval("Jc Jh", "4d 4s Kc 9c 9d");
    assert_eq!(e.category, Category::TwoPair);
    let ranks: Vec<R> = e.cards.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![R::Jack, R::Jack, R::Nine, R::Nine, R::King]);
}

#[test]
fn one_pair_returns_only_the_pair() {
    let e = eval("Ac Ah", "3d 8s 9c");
    assert_eq!(e.cards.len(), 2);
}

#[test]
fn preflop_pocket_pair_and_high_card() {
    let pair = evaluate_hand(&[c(R::King, S::Spades), c(R::King, S::Hearts)], &[]);
    assert_eq!(pair.tier(), 200);
    assert_eq!(pair.cards.len(), 2);

    let high = evaluate_hand(&[c(R::Four, S::Spades), c(R::Jack, S::Hearts)], &[]);
    assert_eq!(high.tier(), 100);
    assert_eq!(high.cards, vec![c(R::Jack, S::Hearts)]);
}

#[test]
fn comparator_ranks_pocket_kings_over_deuces() {
    let kings = evaluate_hand(&[c(R::King, S::Spades), c(R::King, S::Hearts)], &[]);
    let deuces = evaluate_hand(&[c(R::Two, S::Spades), c(R::Two, S::Hearts)], &[]);
    assert_eq!(kings.tier(), deuces.tier());
    assert!(compare_evaluations(&kings, &deuces).is_gt());
    assert!(compare_evaluations(&deuces, &kings).is_lt());
}

#[test]
fn pair_kickers_are_not_compared() {
    // Both hold a pair of aces; only the pair is returned, so this is a tie.
    let a = eval("Ac Kd", "Ah 3s 4c");
    let b = eval("Ad Qd", "Ah 3s 4c");
    assert_eq!(a.category, Category::OnePair);
    assert!(compare_evaluations(&a, &b).is_eq());
}

#[test]
fn sort_cards_is_non_increasing() {
    let cards = parse_cards("3h Ah 10c 2s Kd 10s 5c").unwrap();
    let sorted = sort_cards(&cards);
    assert_eq!(sorted.len(), cards.len());
    assert!(sorted.windows(2).all(|w| w[0].rank >= w[1].rank));
    // stable for equal ranks
    assert_eq!(sorted[2], c(R::Ten, S::Clubs));
    assert_eq!(sorted[3], c(R::Ten, S::Spades));
}

#[test]
fn descriptions_match_categories() {
    assert_eq!(hand_description(Category::RoyalFlush), "Royal Flush");
    assert_eq!(hand_description(Category::FourOfAKind), "Four of a Kind");
    assert_eq!(hand_description(Category::HighCard), "High Card");
    assert_eq!(Category::from_tier(700), Some(Category::FullHouse));
    assert_eq!(Category::from_tier(150), None);
}
