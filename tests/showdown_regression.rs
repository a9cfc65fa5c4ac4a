use holdem_engine::cards::Rank::{self, *};
use holdem_engine::evaluator::{compare_holdem, evaluate_holdem, Category, EvalError};
use holdem_engine::hand::{Board, HoleCards};
use std::cmp::Ordering::{self, *};

/// (board, first hole, second hole, first vs second, what the case pins down)
const HEADS_UP: &[(&str, &str, &str, Ordering, &str)] = &[
    ("Ac 9d 4s 2h 6c", "Ks Kh", "Qc Qh", Greater, "higher pair"),
    ("Kc 9d 4s 2h 6c", "Ks Ad", "Kh Qd", Greater, "pair kicker"),
    ("Kc 9d 4s 2h Ac", "Ks 9c", "Kh 2d", Greater, "second pair of two pair"),
    ("Kc Kd 9s 9h 2c", "Ah 3d", "Qh Jd", Greater, "two pair kicker"),
    ("Qc 9d 4s 2h 6c", "Qs Qd", "9c 9h", Greater, "trips rank"),
    ("5c 4d 3s 2h Kc", "Ad 9c", "6d 9h", Less, "wheel under six-high straight"),
    ("Ac 9c 4c 2c 6d", "Kc Qd", "Qc Jd", Greater, "flush second card"),
    ("Kc Kd 4s 4h 2c", "Ks Ad", "4d Ah", Greater, "full house trips first"),
    ("9c 9d 9h 9s Kc", "Ad 2d", "Qd 3d", Greater, "kicker next to board quads"),
    ("9c 9d 9h 9s Kc", "Qd 3d", "Jd 2d", Equal, "board king outkicks both"),
    ("9c 8c 7c 6c 2d", "5c Ad", "Tc Ah", Less, "higher straight flush"),
    ("As Ks Qd Jc Th", "2c 3c", "4d 5d", Equal, "board straight plays"),
    ("Ah Kh 8h 3s 2d", "Qh 4h", "Jh Th", Greater, "flush from two hole cards"),
];

#[test]
fn heads_up_showdowns() {
    for &(board, a, b, expected, what) in HEADS_UP {
        let board: Board = board.parse().unwrap();
        let a: HoleCards = a.parse().unwrap();
        let b: HoleCards = b.parse().unwrap();
        let got = compare_holdem(&a, &b, &board).unwrap();
        assert_eq!(got, expected, "{what}: [{a}] vs [{b}] on [{board}]");
        assert_eq!(compare_holdem(&b, &a, &board).unwrap(), expected.reverse(), "{what} reversed");
    }
}

#[test]
fn full_house_reads_both_ways() {
    let board: Board = "Kc Kd 4s 4h 2c".parse().unwrap();
    let kings = evaluate_holdem(&"Ks Ad".parse().unwrap(), &board).unwrap();
    let fours = evaluate_holdem(&"4d Ah".parse().unwrap(), &board).unwrap();
    assert_eq!(kings.category, Category::FullHouse);
    assert_eq!(fours.category, Category::FullHouse);
    assert_eq!(kings.key(), &[King, Four]);
    assert_eq!(fours.key(), &[Four, King]);
    assert_eq!(kings.describe(), "Full House, Kings full of Fours");
}

#[test]
fn hole_cards_make_royal_flush_over_rainbow_board() {
    let hole: HoleCards = "As Ks".parse().unwrap();
    let board: Board = "Qs Js Ts 2h 3d".parse().unwrap();
    let e = evaluate_holdem(&hole, &board).unwrap();
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.key(), &[Rank::Ace]);
}

#[test]
fn flop_only_hands_evaluate_with_five_cards() {
    let board: Board = "Kh 7d 2s".parse().unwrap();
    let e = evaluate_holdem(&"Kc Qc".parse().unwrap(), &board).unwrap();
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.key(), &[King, Queen, Seven, Two]);
}

#[test]
fn turn_card_counts() {
    let board: Board = "Kh 7d 2s 7c".parse().unwrap();
    let e = evaluate_holdem(&"Kc Qc".parse().unwrap(), &board).unwrap();
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.key(), &[King, Seven, Queen]);
}

#[test]
fn preflop_hand_cannot_be_evaluated() {
    let a: HoleCards = "Kc Qc".parse().unwrap();
    assert_eq!(evaluate_holdem(&a, &Board::default()), Err(EvalError::InvalidHand(2)));
}
