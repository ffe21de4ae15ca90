use pokerhand::{Card, Hand};
use rand::seq::SliceRandom;

/// Parses hands that are known to be valid.
pub fn parse_all(inputs: &[&str]) -> Vec<Hand> {
    inputs
        .iter()
        .map(|s| s.parse().expect("test hand should parse"))
        .collect()
}

/// Deals ten hands from a freshly shuffled deck.
pub fn deal_hands() -> Vec<Hand> {
    let mut deck = Card::all_cards();
    deck.shuffle(&mut rand::rng());

    deck.chunks_exact(5)
        .map(|chunk| {
            let cards: [Card; 5] = chunk.try_into().expect("chunk has five cards");
            Hand::from_cards(cards)
        })
        .collect()
}
