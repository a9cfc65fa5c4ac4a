use crate::cards::Rank;

/// Whether five ranks form a straight, and its top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from five ranks in any order.
    ///
    /// The wheel (A-2-3-4-5) plays the Ace low, so its top rank is Five.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        if sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
            return Self { top_rank: Some(sorted[0]) };
        }

        if sorted == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return Self { top_rank: Some(Rank::Five) };
        }

        Self { top_rank: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn regular_and_broadway_straights() {
        assert_eq!(StraightInfo::detect(&[King, Queen, Jack, Ten, Nine]).top_rank, Some(King));
        assert_eq!(StraightInfo::detect(&[Ace, King, Queen, Jack, Ten]).top_rank, Some(Ace));
        assert_eq!(StraightInfo::detect(&[Nine, King, Ten, Jack, Queen]).top_rank, Some(King));
    }

    #[test]
    fn wheel_is_five_high() {
        let info = StraightInfo::detect(&[Ace, Two, Three, Four, Five]);
        assert_eq!(info.top_rank, Some(Five));
    }

    #[test]
    fn no_wraparound_and_no_pairs() {
        assert_eq!(StraightInfo::detect(&[Queen, King, Ace, Two, Three]).top_rank, None);
        assert_eq!(StraightInfo::detect(&[Ace, Ace, King, Queen, Jack]).top_rank, None);
        assert_eq!(StraightInfo::detect(&[Ace, King, Queen, Jack, Nine]).top_rank, None);
    }
}
