use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Community cards never exceed flop (3) + turn + river.
pub const MAX_BOARD: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_engine::hand::HoleCards;
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Shared community cards (flop, turn, river).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Unchecked constructor for callers that already know the cards are distinct.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > MAX_BOARD {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == MAX_BOARD
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    pub(crate) fn take(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Check that hole cards and board can coexist in one deck: at most five board cards,
/// and no card appears twice anywhere.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > MAX_BOARD {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    Ok(())
}

/// The card pool a player evaluates at showdown: hole cards followed by the board.
pub fn card_pool(hole: &HoleCards, board: &Board) -> Vec<Card> {
    let mut pool = Vec::with_capacity(2 + board.len());
    pool.extend(hole.as_array());
    pool.extend_from_slice(board.as_slice());
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hole_cards_must_be_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(HoleCards::try_new(a, a), Err(HandError::DuplicateHoleCards)));
        assert!(matches!(HoleCards::from_slice(&[a]), Err(HandError::HoleCount(1))));
    }

    #[test]
    fn board_try_new_checks_limits_and_dupes() {
        let full: Board = "2c 3c 4c 5c 6c".parse().unwrap();
        assert!(full.is_complete());
        assert!(matches!(
            "2c 3c 4c 5c 6c 7c".parse::<Board>(),
            Err(HandError::TooManyBoardCards(6))
        ));
        assert!(matches!("2c 2c".parse::<Board>(), Err(HandError::DuplicateBoardCards)));
    }

    #[test]
    fn validate_holdem_catches_overlap() {
        let hole: HoleCards = "As Ks".parse().unwrap();
        let board = Board::new(vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
        ]);
        assert!(matches!(validate_holdem(&hole, &board), Err(HandError::Overlap)));
    }

    #[test]
    fn card_pool_puts_hole_cards_first() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        let board: Board = "2c 3c 4c".parse().unwrap();
        let pool = card_pool(&hole, &board);
        assert_eq!(pool.len(), 5);
        assert_eq!(pool[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(pool[4], Card::new(Rank::Four, Suit::Clubs));
        assert_eq!(board.to_string(), "2c 3c 4c");
        assert_eq!(hole.to_string(), "As Kd");
    }
}
