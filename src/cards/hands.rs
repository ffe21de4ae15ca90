use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use strum_macros::EnumIter;
use thiserror::Error;
use tracing::debug;

use super::basic::{Card, Rank};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid hand size {0}: must be {size} cards", size = HAND_SIZE)]
    InvalidHandSize(usize),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Invalid rank: {0}")]
    InvalidRank(char),
    #[error("Invalid suit: {0}")]
    InvalidSuit(char),
}

/// Hand categories, declared from weakest to strongest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
pub enum Category {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified five cards poker hand.
///
/// The category and tie break ranks are computed once on construction. Two
/// hands are equal when they have the same strength, even if their cards
/// differ in suit; use [`Hand::cards`] to compare the actual cards.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    category: Category,
    tie_break_ranks: Vec<Rank>,
}

impl Hand {
    pub const SIZE: usize = HAND_SIZE;

    /// Creates a hand from five parsed cards.
    pub fn from_cards(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_by(Card::cmp_by_rank);

        let (category, tie_break_ranks) = Self::classify_hand(&cards);
        debug!(
            cards = %DisplayCards(&cards),
            category = %category,
            tie_break = ?tie_break_ranks,
            "Classified hand"
        );

        Self {
            cards,
            category,
            tie_break_ranks,
        }
    }

    /// Parses five whitespace separated card tokens, e.g. `"AS KD 7H 7C 2S"`.
    pub fn from_string(s: &str) -> Result<Self, HandError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != Hand::SIZE {
            return Err(HandError::InvalidHandSize(tokens.len()));
        }

        let mut cards = Vec::with_capacity(Hand::SIZE);
        for token in tokens {
            cards.push(Card::from_string(token)?);
        }

        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self::from_cards(cards))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Distinct ranks by descending count, then by descending strength.
    pub fn tie_break_ranks(&self) -> &[Rank] {
        &self.tie_break_ranks
    }

    /// The hand cards sorted by ascending rank.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    fn classify_hand(cards: &[Card; HAND_SIZE]) -> (Category, Vec<Rank>) {
        let rank_counts = Self::count_ranks(cards);
        let distinct = rank_counts.len();

        let mut grouped: Vec<(Rank, usize)> = rank_counts.iter().map(|(r, c)| (*r, *c)).collect();
        grouped.sort_by(|(r1, c1), (r2, c2)| c2.cmp(c1).then_with(|| r2.cmp(r1)));

        let has_count = |n: usize| rank_counts.values().any(|&count| count == n);
        let tie_break_ranks: Vec<Rank> = grouped.into_iter().map(|(rank, _)| rank).collect();

        let is_flush = cards.iter().all(|card| card.suit == cards[0].suit);
        let is_straight = distinct == Hand::SIZE && Self::is_straight(&tie_break_ranks);

        let category = if is_straight && is_flush {
            if tie_break_ranks[0] == Rank::Ace {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            }
        } else if is_straight {
            Category::Straight
        } else if distinct == 2 {
            if has_count(3) {
                Category::FullHouse
            } else {
                Category::FourOfAKind
            }
        } else if is_flush {
            Category::Flush
        } else if distinct == 3 {
            if has_count(2) {
                Category::TwoPair
            } else {
                Category::ThreeOfAKind
            }
        } else if distinct == 4 {
            Category::Pair
        } else {
            Category::HighCard
        };

        (category, tie_break_ranks)
    }

    // Ranks sorted by descending strength. No ace-low wraparound.
    fn is_straight(ranks: &[Rank]) -> bool {
        ranks
            .windows(2)
            .all(|w| w[0].strength() == w[1].strength() + 1)
    }

    fn count_ranks(cards: &[Card]) -> HashMap<Rank, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.cmp(&other.category) {
            // Same category means same number of distinct ranks.
            Ordering::Equal => self.tie_break_ranks.cmp(&other.tie_break_ranks),
            other => other,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, DisplayCards(&self.cards))
    }
}

impl serde::Serialize for Hand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&DisplayCards(&self.cards))
    }
}

impl<'de> serde::Deserialize<'de> for Hand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hand::from_string(&s).map_err(D::Error::custom)
    }
}

struct DisplayCards<'a>(&'a [Card]);

impl fmt::Display for DisplayCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parses and classifies a hand, see [`Hand::from_string`].
pub fn parse_hand(text: &str) -> Result<Hand, HandError> {
    Hand::from_string(text)
}

/// Compares two hands by category first and then by tie break ranks.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.cmp(b)
}
