use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, EvaluatedHand, HandValue, TieBreak};

/// Everything the category detectors need to know about one five-card hand,
/// computed once up front.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks in descending order.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks = sorted_cards.map(|c| c.rank());

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::new(&ranks),
            suit_info: SuitInfo::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    /// Cards in the order a player would read the hand out: bigger groups first,
    /// and the wheel's Ace moved to the bottom.
    fn display_order(&self) -> [Card; 5] {
        let mut cards = self.sorted_cards;
        let significance = self.rank_groups.significance();
        let position = |r: Rank| significance.iter().position(|&s| s == r).unwrap_or(usize::MAX);
        cards.sort_by_key(|c| position(c.rank()));
        if self.straight_info.top_rank == Some(Rank::Five) && cards[0].rank() == Rank::Ace {
            cards.rotate_left(1);
        }
        cards
    }

    pub fn build(&self, category: Category, key: TieBreak) -> EvaluatedHand {
        let value = HandValue::from_parts(category, key.as_slice());
        EvaluatedHand { category, best_five: self.display_order(), key, value }
    }
}
