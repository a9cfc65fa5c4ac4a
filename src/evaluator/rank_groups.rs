use crate::cards::Rank;

/// Ranks of a five-card hand grouped by multiplicity, ordered by (count desc, rank desc).
///
/// Example: K K K 9 2 groups as [(King, 3), (Nine, 1), (Two, 1)] with shape [3, 1, 1].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn new(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .rev()
            .filter_map(|&r| {
                let c = counts[r.value() as usize];
                (c > 0).then_some((r, c))
            })
            .collect();
        // Stable sort keeps the descending rank order inside equal counts.
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        Self { groups }
    }

    /// Group sizes, largest first: [4, 1], [3, 2], [2, 2, 1], ...
    pub fn shape(&self) -> Vec<u8> {
        self.groups.iter().map(|&(_, c)| c).collect()
    }

    /// The grouped ranks in significance order: exactly the tie-break order for every
    /// category built on matched ranks.
    pub fn significance(&self) -> Vec<Rank> {
        self.groups.iter().map(|&(r, _)| r).collect()
    }
}
