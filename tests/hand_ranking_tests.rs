mod utils;
use utils::{deal_hands, parse_all};

use std::cmp::Ordering;

use pokerhand::{compare_hands, parse_hand, rank_hands, winners, Category, Hand, HandError, Rank};
use rand::seq::SliceRandom;

#[test]
fn ranking_is_independent_of_input_order() {
    let strongest_first = [
        "QS AS JS TS KS",
        "JH 9H TH QH 8H",
        "AD AS JH AS AH",
        "JS AS JS AS AS",
        "9D KD 3D QD TD",
        "9C KS JH QD TD",
        "9H 9C 9S 4S QH",
        "8H KC 8S 3H KD",
        "9H KC KS 4S 2H",
        "QS TS AD 7S KS",
    ];

    let mut hands = parse_all(&strongest_first);
    for _ in 0..20 {
        hands.shuffle(&mut rand::rng());
        let ranked = rank_hands(hands.clone());
        let rendered: Vec<String> = ranked.iter().map(|h| h.to_string()).collect();
        let expected: Vec<String> = parse_all(&strongest_first)
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(rendered, expected);
    }
}

#[test]
fn dealt_hands_are_totally_ordered() {
    for _ in 0..50 {
        let hands = deal_hands();
        assert_eq!(hands.len(), 10);

        let ranked = rank_hands(hands.clone());
        for pair in ranked.windows(2) {
            assert_ne!(compare_hands(&pair[0], &pair[1]), Ordering::Less);
        }

        for a in &hands {
            assert_eq!(compare_hands(a, a), Ordering::Equal);
            for b in &hands {
                assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
            }
        }
    }
}

#[test]
fn dealt_hands_have_consistent_tie_break_keys() {
    for hand in (0..50).flat_map(|_| deal_hands()) {
        let expected_len = match hand.category() {
            Category::HighCard
            | Category::Straight
            | Category::Flush
            | Category::StraightFlush
            | Category::RoyalFlush => 5,
            Category::Pair => 4,
            Category::TwoPair | Category::ThreeOfAKind => 3,
            Category::FullHouse | Category::FourOfAKind => 2,
        };
        assert_eq!(hand.tie_break_ranks().len(), expected_len, "{hand}");
    }
}

#[test]
fn winners_reports_every_tied_hand() {
    let hands = parse_all(&["9H 9C KS 3H 2D", "9S 9D KH 3C 2S", "8H 8C AS KD QH"]);

    let best = winners(&hands);
    assert_eq!(best.len(), 2);
    assert!(best.iter().all(|h| h.category() == Category::Pair));
    assert_eq!(best[0].tie_break_ranks()[0], Rank::Nine);
}

#[test]
fn invalid_hands_report_the_first_bad_token() {
    assert_eq!(
        parse_hand("JS 21S 5H 7S KS").unwrap_err(),
        HandError::InvalidCard("21S".to_string())
    );
    assert_eq!(
        parse_hand("JS 2H 5S 9S").unwrap_err(),
        HandError::InvalidHandSize(4)
    );
}

#[test]
fn hand_serializes_as_card_string() {
    let hand = parse_hand("QS AS JS TS KS").unwrap();

    let json = serde_json::to_string(&hand).unwrap();
    assert_eq!(json, "\"TS JS QS KS AS\"");

    let back: Hand = serde_json::from_str(&json).unwrap();
    assert_eq!(back.category(), Category::RoyalFlush);
    assert_eq!(back.cards(), hand.cards());
}

#[test]
fn deserializing_an_invalid_hand_fails() {
    let err = serde_json::from_str::<Hand>("\"JS 2R 5H 7S KS\"").unwrap_err();
    assert!(err.to_string().contains("Invalid card: 2R"));

    let err = serde_json::from_str::<Hand>("\"JS 2H\"").unwrap_err();
    assert!(err.to_string().contains("must be 5 cards"));
}
