use crate::cards::{Card, Rank, Suit};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("every card is in play, nothing left to draw")]
    Exhausted,
    #[error("card {0} is already in the deck")]
    AlreadyInDeck(Card),
}

/// A single 52-card deck with a draw pile and a discard pile.
///
/// Cards move draw pile -> in play -> discard pile, and the discard pile is shuffled
/// back into the draw pile when the draw pile runs dry. Draw pile, discard pile and
/// cards held by the caller always add up to the 52 unique cards.
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut deck = Deck::seeded(7);
/// let cards = deck.draw_n(5).unwrap();
/// assert_eq!(deck.len(), 47);
/// deck.discard(cards).unwrap();
/// assert_eq!(deck.discard_len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    discards: Vec<Card>,
    rng: ChaCha8Rng,
}

fn standard_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
        .collect()
}

impl Deck {
    /// A freshly shuffled deck whose shuffles are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self {
            cards: standard_cards(),
            discards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// A freshly shuffled deck seeded from the thread RNG.
    pub fn shuffled() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// Number of cards left in the draw pile.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn discard_len(&self) -> usize {
        self.discards.len()
    }

    /// Cards currently held outside the deck.
    pub fn in_play(&self) -> usize {
        DECK_SIZE - self.cards.len() - self.discards.len()
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Move the discard pile back under the draw pile and shuffle.
    pub fn refill(&mut self) {
        if self.discards.is_empty() {
            return;
        }
        debug!("Refilling deck with {} discards", self.discards.len());
        self.cards.append(&mut self.discards);
        self.shuffle();
    }

    /// Draw one card, refilling from the discard pile when the draw pile is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            self.refill();
        }
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        (0..n).map(|_| self.draw()).collect()
    }

    /// Return cards from play to the discard pile.
    ///
    /// Rejects a card that is already sitting in the draw or discard pile, which would
    /// mean two copies of it exist.
    pub fn discard<I>(&mut self, cards: I) -> Result<(), DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            if self.cards.contains(&card) || self.discards.contains(&card) {
                return Err(DeckError::AlreadyInDeck(card));
            }
            self.discards.push(card);
        }
        Ok(())
    }
}
