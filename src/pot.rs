//! Main and side pots built up street by street.

use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Chips plus the seats that can still win them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pot {
    pub amount: u64,
    pub eligible: BTreeSet<usize>,
}

impl Pot {
    pub fn is_eligible(&self, seat: usize) -> bool {
        self.eligible.contains(&seat)
    }
}

/// One seat's wager for the street that just closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreetBet {
    pub seat: usize,
    pub amount: u64,
    pub folded: bool,
    pub all_in: bool,
}

impl StreetBet {
    pub fn live(seat: usize, amount: u64) -> Self {
        Self { seat, amount, folded: false, all_in: false }
    }

    pub fn all_in(seat: usize, amount: u64) -> Self {
        Self { seat, amount, folded: false, all_in: true }
    }

    pub fn folded(seat: usize, amount: u64) -> Self {
        Self { seat, amount, folded: true, all_in: false }
    }
}

/// What a street's collection did with the chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BetSettlement {
    /// Chips moved into pots.
    pub collected: u64,
    /// Uncalled over-bet handed back to its owner.
    pub returned: Option<(usize, u64)>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PotError {
    #[error("chips not conserved: street bets {expected}, pots grew by {actual}")]
    ChipMismatch { expected: u64, actual: u64 },
    #[error("street is still open: seat {seat} bet {bet} against {to_match}")]
    StreetIncomplete { seat: usize, bet: u64, to_match: u64 },
    #[error("bets left with nobody able to win them")]
    NoContenders,
}

/// Rolls each street's bets into a main pot and side pots.
///
/// The last pot in [`PotManager::pots`] is the working pot; a new side pot opens whenever
/// a seat eligible for the working pot has nothing left to match.
///
/// ```
/// use holdem_engine::pot::{PotManager, StreetBet};
///
/// let mut pots = PotManager::new();
/// pots.settle_bets(&[
///     StreetBet::live(0, 100),
///     StreetBet::all_in(1, 50),
///     StreetBet::live(2, 100),
/// ]).unwrap();
/// assert_eq!(pots.pots()[0].amount, 150);
/// assert_eq!(pots.pots()[1].amount, 100);
/// assert_eq!(pots.total(), 250);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main pot first, then side pots in the order they opened.
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn total(&self) -> u64 {
        self.pots.iter().map(|p| p.amount).sum()
    }

    pub fn reset(&mut self) {
        self.pots.clear();
    }

    /// Remove a folded seat from every pot it was eligible for.
    ///
    /// A side pot left with nobody to win it falls into the pot below.
    pub fn fold(&mut self, seat: usize) {
        for pot in &mut self.pots {
            pot.eligible.remove(&seat);
        }
        for i in (1..self.pots.len()).rev() {
            if self.pots[i].eligible.is_empty() {
                let orphan = self.pots.remove(i);
                debug!("Side pot {i} has no contenders left, {} moves down", orphan.amount);
                self.pots[i - 1].amount += orphan.amount;
            }
        }
    }

    /// Move a closed street's bets into the pots.
    ///
    /// Every bet is either collected or returned as an uncalled over-bet. Folded seats
    /// leave their chips behind as dead money and are dropped from every pot.
    pub fn settle_bets(&mut self, bets: &[StreetBet]) -> Result<BetSettlement, PotError> {
        let to_match = bets.iter().filter(|b| !b.folded).map(|b| b.amount).max().unwrap_or(0);
        if let Some(short) =
            bets.iter().find(|b| !b.folded && !b.all_in && b.amount < to_match)
        {
            return Err(PotError::StreetIncomplete {
                seat: short.seat,
                bet: short.amount,
                to_match,
            });
        }

        let live_bet = bets.iter().any(|b| !b.folded && b.amount > 0);
        let dead_bet = bets.iter().any(|b| b.folded && b.amount > 0);
        let contender_left = self.pots.iter().any(|pot| {
            pot.eligible.iter().any(|s| !bets.iter().any(|b| b.folded && b.seat == *s))
        });
        if dead_bet && !live_bet && !contender_left {
            return Err(PotError::NoContenders);
        }

        for b in bets.iter().filter(|b| b.folded) {
            self.fold(b.seat);
        }

        let street_total: u64 = bets.iter().map(|b| b.amount).sum();
        let before = self.total();

        let mut outstanding: BTreeMap<usize, (u64, bool)> = bets
            .iter()
            .filter(|b| b.amount > 0)
            .map(|b| (b.seat, (b.amount, b.folded)))
            .collect();
        if outstanding.is_empty() {
            return Ok(BetSettlement::default());
        }
        if self.pots.is_empty() {
            self.pots.push(Pot::default());
        }

        let mut returned = None;
        loop {
            let low_bet = outstanding.values().filter(|(_, folded)| !folded).map(|(a, _)| *a).min();
            let Some(low_bet) = low_bet else {
                // Only folded money is left over; it goes to the newest pot someone can win.
                let dead: u64 = outstanding.values().map(|(a, _)| *a).sum();
                let pot = self
                    .pots
                    .iter_mut()
                    .rev()
                    .find(|pot| !pot.eligible.is_empty())
                    .ok_or(PotError::NoContenders)?;
                pot.amount += dead;
                break;
            };

            let working_has_matched_seat = self
                .pots
                .last()
                .is_some_and(|pot| pot.eligible.iter().any(|s| !outstanding.contains_key(s)));
            if working_has_matched_seat {
                self.pots.push(Pot::default());
            }

            let pot = self.working_pot();
            for (&seat, (amount, folded)) in outstanding.iter_mut() {
                let moved = (*amount).min(low_bet);
                pot.amount += moved;
                *amount -= moved;
                if !*folded {
                    pot.eligible.insert(seat);
                }
            }
            outstanding.retain(|_, (amount, _)| *amount > 0);

            if outstanding.is_empty() {
                break;
            }
            if outstanding.len() == 1 {
                if let Some((&seat, &(amount, false))) = outstanding.iter().next() {
                    debug!("Returning uncalled {amount} to seat {seat}");
                    returned = Some((seat, amount));
                    break;
                }
            }
        }

        let collected = self.total() - before;
        let given_back = returned.map_or(0, |(_, a)| a);
        if collected + given_back != street_total {
            warn!("Street bets {street_total} but pots took {collected} and returned {given_back}");
            return Err(PotError::ChipMismatch {
                expected: street_total,
                actual: collected + given_back,
            });
        }
        debug!("Collected {collected} chips, {} pot(s) totalling {}", self.pots.len(), self.total());
        Ok(BetSettlement { collected, returned })
    }

    fn working_pot(&mut self) -> &mut Pot {
        if self.pots.is_empty() {
            self.pots.push(Pot::default());
        }
        let last = self.pots.len() - 1;
        &mut self.pots[last]
    }
}
