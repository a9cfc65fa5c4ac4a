use holdem_engine::evaluator::{evaluate_holdem, EvaluatedHand};
use holdem_engine::hand::{Board, HoleCards};
use holdem_engine::pot::{PotManager, StreetBet};
use holdem_engine::settlement::{distribute_pots, PotAward, SeatOrder};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn hands(board: &str, holes: &[(usize, &str)]) -> BTreeMap<usize, EvaluatedHand> {
    let board: Board = board.parse().unwrap();
    holes
        .iter()
        .map(|&(seat, h)| {
            let hole: HoleCards = h.parse().unwrap();
            (seat, evaluate_holdem(&hole, &board).unwrap())
        })
        .collect()
}

fn payouts(awards: &[PotAward]) -> BTreeMap<usize, u64> {
    let mut out = BTreeMap::new();
    for a in awards {
        for (seat, amount) in a.payouts() {
            *out.entry(seat).or_default() += amount;
        }
    }
    out
}

#[test]
fn side_pots_distribute_across_all_in_levels() {
    let mut pots = PotManager::new();
    let settled = pots
        .settle_bets(&[StreetBet::all_in(0, 100), StreetBet::all_in(1, 50), StreetBet::all_in(2, 200)])
        .unwrap();
    assert_eq!(settled.returned, Some((2, 100)));

    let hands = hands("2c 3d 4h 8s Kc", &[(0, "Qs Qh"), (1, "As Ah"), (2, "7c 6c")]);
    let awards = distribute_pots(pots.pots(), &hands, SeatOrder::new(0, 3)).unwrap();
    let paid = payouts(&awards);
    assert_eq!(paid.get(&1), Some(&150), "main pot should go to best hand");
    assert_eq!(paid.get(&0), Some(&100), "side pot should go to next best hand");
    assert_eq!(paid.get(&2), None, "over-bet came back instead");
}

#[test]
fn split_main_pot_with_returned_over_bet() {
    let mut pots = PotManager::new();
    let settled = pots
        .settle_bets(&[StreetBet::all_in(0, 50), StreetBet::all_in(1, 50), StreetBet::all_in(2, 200)])
        .unwrap();
    assert_eq!(settled.returned, Some((2, 150)));

    let hands = hands("Ac Kd Qh Js 2c", &[(0, "Tc 3d"), (1, "Th 4s"), (2, "9c 9d")]);
    let awards = distribute_pots(pots.pots(), &hands, SeatOrder::new(0, 3)).unwrap();
    assert_eq!(payouts(&awards), BTreeMap::from([(0, 75), (1, 75)]));
}

#[test]
fn split_main_and_side_pots() {
    let mut pots = PotManager::new();
    pots.settle_bets(&[
        StreetBet::all_in(0, 50),
        StreetBet::all_in(1, 50),
        StreetBet::all_in(2, 100),
        StreetBet::all_in(3, 100),
    ])
    .unwrap();
    assert_eq!(pots.pots().len(), 2);

    let hands = hands(
        "Ac Kd Qh Js 2c",
        &[(0, "Tc 3d"), (1, "Th 4s"), (2, "9c 9d"), (3, "9h 9s")],
    );
    let awards = distribute_pots(pots.pots(), &hands, SeatOrder::new(0, 4)).unwrap();
    assert_eq!(payouts(&awards), BTreeMap::from([(0, 100), (1, 100), (2, 50), (3, 50)]));
}

#[test]
fn odd_chip_split_uses_seat_order() {
    let mut pots = PotManager::new();
    pots.settle_bets(&[StreetBet::all_in(0, 1), StreetBet::all_in(1, 1), StreetBet::all_in(2, 2)])
        .unwrap();
    let hands = hands("Ac Kd Qh Js 2c", &[(0, "Tc 3d"), (1, "Th 4s"), (2, "9c 9d")]);
    let awards = distribute_pots(pots.pots(), &hands, SeatOrder::new(0, 3)).unwrap();
    let paid = payouts(&awards);
    assert_eq!(paid.get(&1), Some(&2), "odd chip goes to the first winner left of the dealer");
    assert_eq!(paid.get(&0), Some(&1));
}

#[test]
fn folded_player_money_stays_in_the_pot() {
    let mut pots = PotManager::new();
    pots.settle_bets(&[StreetBet::live(0, 20), StreetBet::live(1, 20), StreetBet::live(2, 20)]).unwrap();
    pots.settle_bets(&[StreetBet::folded(0, 40), StreetBet::live(1, 80), StreetBet::all_in(2, 60)])
        .unwrap();
    // 60 preflop, then 40 dead + 60 + 60 into the main pot, and 20 returned to seat 1.
    assert_eq!(pots.pots().len(), 1);
    assert_eq!(pots.total(), 220);

    let hands = hands("Ac Kd Qh 7s 2c", &[(1, "9c 9d"), (2, "Ad 3s")]);
    let awards = distribute_pots(pots.pots(), &hands, SeatOrder::new(0, 3)).unwrap();
    assert_eq!(payouts(&awards), BTreeMap::from([(2, 220)]));
}

fn street() -> impl Strategy<Value = Vec<StreetBet>> {
    prop::collection::vec((0u64..=500, any::<bool>()), 2..=8).prop_map(|mut raw| {
        // Seat 0 always stays in with chips so every pot has someone to win it.
        raw[0] = (raw[0].0.max(1), false);
        let to_match =
            raw.iter().filter(|(_, folded)| !folded).map(|(amount, _)| *amount).max().unwrap_or(0);
        raw.into_iter()
            .enumerate()
            .map(|(seat, (amount, folded))| StreetBet {
                seat,
                amount,
                folded,
                all_in: !folded && amount < to_match,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn pot_manager_conserves_chips(streets in prop::collection::vec(street(), 1..=4)) {
        let mut pots = PotManager::new();
        let mut wagered = 0u64;
        let mut returned = 0u64;
        for bets in &streets {
            let before = pots.total();
            let settled = pots.settle_bets(bets).unwrap();
            let street_total: u64 = bets.iter().map(|b| b.amount).sum();
            let back = settled.returned.map_or(0, |(_, a)| a);
            prop_assert_eq!(pots.total() - before + back, street_total);
            prop_assert_eq!(settled.collected + back, street_total);
            wagered += street_total;
            returned += back;

            for b in bets.iter().filter(|b| b.folded) {
                prop_assert!(pots.pots().iter().all(|p| !p.is_eligible(b.seat)));
            }
        }
        prop_assert_eq!(pots.total(), wagered - returned);
    }

    #[test]
    fn all_in_player_only_eligible_up_to_contribution(
        short in 1u64..100,
        deep in 100u64..1000,
    ) {
        let mut pots = PotManager::new();
        pots.settle_bets(&[
            StreetBet::all_in(0, short),
            StreetBet::live(1, deep),
            StreetBet::live(2, deep),
        ]).unwrap();
        prop_assert_eq!(pots.pots()[0].amount, short * 3);
        prop_assert!(pots.pots()[0].is_eligible(0));
        if deep > short {
            prop_assert_eq!(pots.pots()[1].amount, (deep - short) * 2);
            prop_assert!(!pots.pots()[1].is_eligible(0));
        }
    }
}
