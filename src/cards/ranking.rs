use tracing::trace;

use super::hands::Hand;

/// Orders hands from strongest to weakest, tied hands keep their input order.
pub fn rank_hands(hands: impl IntoIterator<Item = Hand>) -> Vec<Hand> {
    let mut hands: Vec<Hand> = hands.into_iter().collect();
    hands.sort_by(|a, b| b.cmp(a));
    trace!(count = hands.len(), "Ranked hands");
    hands
}

/// Returns all the hands that tie for the strongest, in input order.
pub fn winners(hands: &[Hand]) -> Vec<&Hand> {
    let Some(best) = hands.iter().max() else {
        return Vec::new();
    };

    let winners: Vec<&Hand> = hands.iter().filter(|hand| *hand == best).collect();
    trace!(best = %best, winners = winners.len(), "Found winning hands");
    winners
}
