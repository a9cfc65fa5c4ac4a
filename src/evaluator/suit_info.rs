use crate::cards::{Card, Suit};

/// The flush suit of a five-card hand, if all five cards share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let suit = cards[0].suit();
        let flush_suit = cards.iter().all(|c| c.suit() == suit).then_some(suit);
        Self { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn detects_flush_suit() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        assert_eq!(SuitInfo::detect(&cards).flush_suit, Some(Suit::Spades));
    }

    #[test]
    fn one_off_suit_breaks_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        assert!(!SuitInfo::detect(&cards).is_flush());
    }
}
