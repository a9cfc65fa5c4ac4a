pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{card_pool, validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Smallest pool that holds a five-card hand.
pub const MIN_CARDS: usize = 5;
/// Two hole cards plus a full board.
pub const MAX_CARDS: usize = 7;

/// Compact, comparable hand strength. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five tie-break ranks into one integer.
    pub fn from_parts(category: Category, key: &[Rank]) -> Self {
        // [ category (8 bits) | k0 (6) | k1 (6) | k2 (6) | k3 (6) | k4 (6) | 10 zero bits ]
        // Unused key slots stay zero, which sorts below every real rank.
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in key.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        HandValue(v)
    }
}

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ranks that decide between two hands of the same category, most significant first.
///
/// Straights carry only their top card, quads `[quad, kicker]`, a full house
/// `[trips, pair]`, two pair `[high, low, kicker]`, flushes and high cards all five ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TieBreak {
    ranks: [Rank; 5],
    len: u8,
}

impl TieBreak {
    pub fn new(ranks: &[Rank]) -> Self {
        let mut buf = [Rank::Two; 5];
        let len = ranks.len().min(5);
        buf[..len].copy_from_slice(&ranks[..len]);
        Self { ranks: buf, len: len as u8 }
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The best five-card hand found in a pool of cards.
///
/// Ordering and equality look only at category and tie-break key, so two hands are equal
/// exactly when they would split a pot.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct EvaluatedHand {
    pub category: Category,
    pub best_five: [Card; 5],
    key: TieBreak,
    value: HandValue,
}

impl EvaluatedHand {
    pub fn key(&self) -> &[Rank] {
        self.key.as_slice()
    }

    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Spoken description, e.g. "Full House, Kings full of Twos".
    pub fn describe(&self) -> String {
        let k = self.key();
        match self.category {
            Category::StraightFlush if k[0] == Rank::Ace => "Royal Flush".to_string(),
            Category::StraightFlush => format!("Straight Flush, {} high", k[0].name()),
            Category::FourOfAKind => format!("Four of a Kind, {}", k[0].plural()),
            Category::FullHouse => {
                format!("Full House, {} full of {}", k[0].plural(), k[1].plural())
            }
            Category::Flush => format!("Flush, {} high", k[0].name()),
            Category::Straight => format!("Straight, {} high", k[0].name()),
            Category::ThreeOfAKind => format!("Three of a Kind, {}", k[0].plural()),
            Category::TwoPair => format!("Two Pair, {} and {}", k[0].plural(), k[1].plural()),
            Category::Pair => format!("Pair of {}", k[0].plural()),
            Category::HighCard => format!("High Card, {}", k[0].name()),
        }
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EvaluatedHand {}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.describe())?;
        for (i, c) in self.best_five.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: need at least {MIN_CARDS} cards, got {0}")]
    InvalidHand(usize),
    #[error("too many cards to evaluate: {0} (max {MAX_CARDS})")]
    TooManyCards(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("invalid hand: {0}")]
    Hand(#[from] HandError),
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    let analysis = hand_analysis::HandAnalysis::new(cards);
    for detector in detector::DETECTORS.iter() {
        if let Some(key) = detector.key(&analysis) {
            return analysis.build(detector.category(), key);
        }
    }
    // The high-card detector always matches.
    analysis.build(Category::HighCard, TieBreak::new(&analysis.ranks))
}

/// Find the best five-card hand in a pool of 5 to 7 distinct cards.
///
/// Every five-card combination is evaluated and the strongest one is returned.
///
/// ```
/// use holdem_engine::cards::{parse_cards, Rank};
/// use holdem_engine::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("As Ks Qs Js Ts 2h 3d").unwrap();
/// let best = evaluate(&cards).unwrap();
/// assert_eq!(best.category, Category::StraightFlush);
/// assert_eq!(best.key(), &[Rank::Ace]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    if cards.len() < MIN_CARDS {
        return Err(EvalError::InvalidHand(cards.len()));
    }
    if cards.len() > MAX_CARDS {
        return Err(EvalError::TooManyCards(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(*dup));
    }

    combinations::Combinations::<5>::new(cards.len())
        .map(|idx| evaluate_five(&idx.map(|i| cards[i])))
        .max()
        .ok_or(EvalError::InvalidHand(cards.len()))
}

/// Evaluate a Hold'em hand: two hole cards plus three to five community cards.
///
/// ```
/// use holdem_engine::evaluator::{evaluate_holdem, Category};
/// use holdem_engine::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<EvaluatedHand, EvalError> {
    validate_holdem(hole, board)?;
    evaluate(&card_pool(hole, board))
}

/// Compare two Hold'em hands on a shared board.
///
/// ```
/// use holdem_engine::evaluator::compare_holdem;
/// use holdem_engine::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}
