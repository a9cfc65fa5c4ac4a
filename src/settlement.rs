//! Paying pots out to the best eligible hands.

use crate::evaluator::EvaluatedHand;
use crate::player::{Player, PlayerStats};
use crate::pot::Pot;
use crate::ranking::top_tied;
use log::info;
use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettlementError {
    #[error("pot {pot_index} has no eligible players")]
    NoEligiblePlayers { pot_index: usize },
    #[error("seat {seat} is eligible for pot {pot_index} but has no evaluated hand")]
    MissingHand { pot_index: usize, seat: usize },
    #[error("award names seat {0}, which is not at the table")]
    UnknownSeat(usize),
}

/// Seat geometry used to hand out odd chips: clockwise from the dealer's left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatOrder {
    pub dealer: usize,
    pub seats: usize,
}

impl SeatOrder {
    pub fn new(dealer: usize, seats: usize) -> Self {
        Self { dealer, seats }
    }

    /// 0 for the seat left of the dealer, growing clockwise; the dealer is last.
    pub fn distance(&self, seat: usize) -> usize {
        if self.seats == 0 {
            return seat;
        }
        let start = (self.dealer + 1) % self.seats;
        (seat + self.seats - start) % self.seats
    }
}

/// The outcome of one pot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PotAward {
    pub pot_index: usize,
    pub amount: u64,
    /// Winners in clockwise order from the dealer's left.
    pub winners: Vec<usize>,
    pub amount_each: u64,
    /// Leftover chips; the first `odd_chips` winners get one extra each.
    pub odd_chips: u64,
    /// The winning hand, absent when the pot went uncontested.
    pub hand: Option<EvaluatedHand>,
}

impl PotAward {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    pub fn payouts(&self) -> Vec<(usize, u64)> {
        self.winners
            .iter()
            .enumerate()
            .map(|(i, &seat)| {
                let extra = u64::from((i as u64) < self.odd_chips);
                (seat, self.amount_each + extra)
            })
            .collect()
    }
}

/// Work out who wins each pot.
///
/// Winners are every eligible seat tied with the best hand. A pot with a single eligible
/// seat is awarded without looking at hands.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::evaluator::evaluate;
/// use holdem_engine::pot::{PotManager, StreetBet};
/// use holdem_engine::settlement::{distribute_pots, SeatOrder};
/// use std::collections::BTreeMap;
///
/// let mut pots = PotManager::new();
/// pots.settle_bets(&[StreetBet::live(0, 50), StreetBet::live(1, 50)]).unwrap();
///
/// let mut hands = BTreeMap::new();
/// hands.insert(0, evaluate(&parse_cards("As Ah Kd 7c 2s").unwrap()).unwrap());
/// hands.insert(1, evaluate(&parse_cards("Qs Qh Kd 7c 2s").unwrap()).unwrap());
///
/// let awards = distribute_pots(pots.pots(), &hands, SeatOrder::new(1, 2)).unwrap();
/// assert_eq!(awards[0].payouts(), vec![(0, 100)]);
/// ```
pub fn distribute_pots(
    pots: &[Pot],
    hands: &BTreeMap<usize, EvaluatedHand>,
    order: SeatOrder,
) -> Result<Vec<PotAward>, SettlementError> {
    let mut awards = Vec::with_capacity(pots.len());
    for (pot_index, pot) in pots.iter().enumerate() {
        if pot.amount == 0 {
            continue;
        }
        let (mut winners, hand) = match pot.eligible.len() {
            0 => return Err(SettlementError::NoEligiblePlayers { pot_index }),
            1 => {
                let seat = *pot.eligible.iter().next().ok_or(SettlementError::NoEligiblePlayers {
                    pot_index,
                })?;
                (vec![seat], hands.get(&seat).copied())
            }
            _ => {
                let contenders = pot
                    .eligible
                    .iter()
                    .map(|&seat| {
                        hands
                            .get(&seat)
                            .map(|h| (seat, *h))
                            .ok_or(SettlementError::MissingHand { pot_index, seat })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let winners = top_tied(&contenders);
                let hand = winners.first().and_then(|s| hands.get(s).copied());
                (winners, hand)
            }
        };
        winners.sort_by_key(|&s| order.distance(s));

        let n = winners.len() as u64;
        let award = PotAward {
            pot_index,
            amount: pot.amount,
            amount_each: pot.amount / n,
            odd_chips: pot.amount % n,
            winners,
            hand,
        };
        info!(
            "Pot {} ({} chips) to seat(s) {:?}{}",
            pot_index,
            award.amount,
            award.winners,
            award.hand.map(|h| format!(" with {}", h.describe())).unwrap_or_default()
        );
        awards.push(award);
    }
    Ok(awards)
}

/// Credit every payout to the players' stacks and return the total won per seat.
pub fn apply_awards<S: PlayerStats>(
    awards: &[PotAward],
    players: &mut [Player<S>],
) -> Result<BTreeMap<usize, u64>, SettlementError> {
    let mut won: BTreeMap<usize, u64> = BTreeMap::new();
    for award in awards {
        for (seat, amount) in award.payouts() {
            if seat >= players.len() {
                return Err(SettlementError::UnknownSeat(seat));
            }
            *won.entry(seat).or_default() += amount;
        }
    }
    for (&seat, &amount) in &won {
        players[seat].stack += amount;
    }
    Ok(won)
}
