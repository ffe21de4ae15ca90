pub mod basic;
pub mod hands;
pub mod ranking;


pub use basic::{Card, Rank, Suit};
pub use hands::{compare_hands, parse_hand, Category, Hand, HandError, HAND_SIZE};
pub use ranking::{rank_hands, winners};
