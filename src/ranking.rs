//! Ordering of evaluated hands across players.

use crate::evaluator::EvaluatedHand;
use core::cmp::Ordering;

/// Category first, then the tie-break key lexicographically.
///
/// Two hands compare `Equal` exactly when category and every key rank match.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category.cmp(&b.category).then_with(|| a.key().cmp(b.key()))
}

/// Sort `(id, hand)` pairs strongest first. Tied hands keep their input order.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::evaluator::evaluate;
/// use holdem_engine::ranking::rank_descending;
///
/// let pair = evaluate(&parse_cards("Ah Ad 9c 7s 2d").unwrap()).unwrap();
/// let trips = evaluate(&parse_cards("3h 3d 3c 7s 2h").unwrap()).unwrap();
/// let mut hands = vec![(0, pair), (1, trips)];
/// rank_descending(&mut hands);
/// assert_eq!(hands[0].0, 1);
/// ```
pub fn rank_descending<T>(hands: &mut [(T, EvaluatedHand)]) {
    hands.sort_by(|a, b| compare(&b.1, &a.1));
}

/// Every id whose hand ties the strongest hand, in input order.
pub fn top_tied<T: Copy>(hands: &[(T, EvaluatedHand)]) -> Vec<T> {
    let Some(best) = hands.iter().map(|(_, h)| h).max_by(|a, b| compare(a, b)) else {
        return Vec::new();
    };
    hands
        .iter()
        .filter(|(_, h)| compare(h, best) == Ordering::Equal)
        .map(|(id, _)| *id)
        .collect()
}
