//! Card values and their short text form ("As", "Td", "10c").

use std::fmt;
use std::str::FromStr;

const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

const RANK_NAMES: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen", "King",
    "Ace",
];

const RANK_PLURALS: [&str; 13] = [
    "Twos", "Threes", "Fours", "Fives", "Sixes", "Sevens", "Eights", "Nines", "Tens", "Jacks",
    "Queens", "Kings", "Aces",
];

/// Rank with its numeric value as discriminant: 2..=10, then J=11, Q=12, K=13, A=14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Lowest to highest.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace]
    };

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2..=14 => Some(Rank::ALL[(v - 2) as usize]),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        (self as u8 - 2) as usize
    }

    pub const fn to_char(self) -> char {
        RANK_CHARS[self.index()]
    }

    /// "Queen"
    pub const fn name(self) -> &'static str {
        RANK_NAMES[self.index()]
    }

    /// "Queens"
    pub const fn plural(self) -> &'static str {
        RANK_PLURALS[self.index()]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("unknown rank '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let up = c.to_ascii_uppercase();
        RANK_CHARS
            .iter()
            .position(|&rc| rc == up)
            .map(|i| Rank::ALL[i])
            .ok_or_else(|| RankParseError::Invalid(c.to_string()))
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    /// One rank character, or "10".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('1'), Some('0'), None) => Ok(Rank::Ten),
            (Some(c), None, None) => Rank::try_from(c),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

/// Suits carry no strength; they only matter for flushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        ['c', 'd', 'h', 's'][self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("unknown suit '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;

    /// Letter in either case, or the suit symbol.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'c' | 'C' | '♣' | '♧' => Suit::Clubs,
            'd' | 'D' | '♦' | '♢' => Suit::Diamonds,
            'h' | 'H' | '♥' | '♡' => Suit::Hearts,
            's' | 'S' | '♠' | '♤' => Suit::Spades,
            _ => return Err(SuitParseError::Invalid(c.to_string())),
        })
    }
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        Suit::ALL
            .into_iter()
            .find(|suit| word.eq_ignore_ascii_case(&format!("{suit:?}")))
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

/// One of the 52 cards.
///
/// Ordering is by rank, then suit. Hand strength only looks at [`Card::rank`].
///
/// ```
/// use holdem_engine::cards::{Card, Rank, Suit};
///
/// let card: Card = "A♠".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(card.to_string(), "As");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("'{0}' is not a card")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        // Rank text is everything before the final suit character.
        match text.char_indices().last() {
            Some((at, suit)) if at > 0 => {
                Ok(Card::new(text[..at].parse()?, Suit::try_from(suit)?))
            }
            _ => Err(CardParseError::Invalid(s.to_string())),
        }
    }
}

/// Parse cards separated by whitespace and/or commas.
///
/// ```
/// use holdem_engine::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
