// Library crate for five cards poker hand evaluation
// This file exposes the public API for the binary and integration tests

pub mod cards;

// Re-export commonly used types for easier access
pub use cards::{
    compare_hands, parse_hand, rank_hands, winners, Card, Category, Hand, HandError, Rank, Suit,
};
