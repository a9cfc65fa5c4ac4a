use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, TieBreak};

/// One poker category: recognizes it in an analyzed hand and produces the tie-break
/// key that orders hands within it.
pub trait CategoryDetector: Sync {
    fn category(&self) -> Category;
    fn key(&self, analysis: &HandAnalysis) -> Option<TieBreak>;
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn key(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        if !analysis.suit_info.is_flush() {
            return None;
        }
        analysis.straight_info.top_rank.map(|top| TieBreak::new(&[top]))
    }
}

/// Quads, full houses, trips and pairs all break ties on their grouped ranks,
/// biggest group first, then the kickers.
pub struct GroupedDetector {
    category: Category,
    shape: &'static [u8],
}

impl CategoryDetector for GroupedDetector {
    fn category(&self) -> Category {
        self.category
    }

    fn key(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        (analysis.rank_groups.shape() == self.shape)
            .then(|| TieBreak::new(&analysis.rank_groups.significance()))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn key(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        analysis.suit_info.is_flush().then(|| TieBreak::new(&analysis.ranks))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn key(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        analysis.straight_info.top_rank.map(|top| TieBreak::new(&[top]))
    }
}

/// Always matches; must stay last.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn key(&self, analysis: &HandAnalysis) -> Option<TieBreak> {
        Some(TieBreak::new(&analysis.ranks))
    }
}

pub static FOUR_OF_A_KIND: GroupedDetector =
    GroupedDetector { category: Category::FourOfAKind, shape: &[4, 1] };
pub static FULL_HOUSE: GroupedDetector =
    GroupedDetector { category: Category::FullHouse, shape: &[3, 2] };
pub static THREE_OF_A_KIND: GroupedDetector =
    GroupedDetector { category: Category::ThreeOfAKind, shape: &[3, 1, 1] };
pub static TWO_PAIR: GroupedDetector =
    GroupedDetector { category: Category::TwoPair, shape: &[2, 2, 1] };
pub static ONE_PAIR: GroupedDetector =
    GroupedDetector { category: Category::Pair, shape: &[2, 1, 1, 1] };

/// Detectors from strongest to weakest category.
pub static DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FOUR_OF_A_KIND,
    &FULL_HOUSE,
    &FlushDetector,
    &StraightDetector,
    &THREE_OF_A_KIND,
    &TWO_PAIR,
    &ONE_PAIR,
    &HighCardDetector,
];
