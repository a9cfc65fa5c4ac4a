use holdem_engine::cards::{parse_cards, Card, Rank};
use holdem_engine::evaluator::{evaluate, evaluate_five, Category, EvaluatedHand};

fn five(s: &str) -> EvaluatedHand {
    let c: Vec<Card> = parse_cards(s).unwrap();
    evaluate_five(&[c[0], c[1], c[2], c[3], c[4]])
}

#[test]
fn category_straight_flush() {
    let e = five("As Ks Qs Js Ts");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.key(), &[Rank::Ace]);
}

#[test]
fn category_four_of_a_kind() {
    let e = five("9c 9d 9h 9s Ac");
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.key(), &[Rank::Nine, Rank::Ace]);
}

#[test]
fn category_full_house() {
    let e = five("3c 3d 3h Js Jc");
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.key(), &[Rank::Three, Rank::Jack]);
}

#[test]
fn category_flush() {
    let e = five("Kh Th 8h 6h 3h");
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.key(), &[Rank::King, Rank::Ten, Rank::Eight, Rank::Six, Rank::Three]);
}

#[test]
fn category_straight_wheel() {
    let e = five("Ac 5c 4d 3h 2s");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.key(), &[Rank::Five]);
}

#[test]
fn category_three_of_a_kind() {
    let e = five("Qc Qd Qh Ts 2c");
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(e.key(), &[Rank::Queen, Rank::Ten, Rank::Two]);
}

#[test]
fn category_two_pair() {
    let e = five("Jc Jd 9c 9h 2s");
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.key(), &[Rank::Jack, Rank::Nine, Rank::Two]);
}

#[test]
fn category_pair() {
    let e = five("Ah Ad Ts 9c 2d");
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.key(), &[Rank::Ace, Rank::Ten, Rank::Nine, Rank::Two]);
}

#[test]
fn category_high_card() {
    let e = five("Ah Kd 7s 5c 2d");
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.key(), &[Rank::Ace, Rank::King, Rank::Seven, Rank::Five, Rank::Two]);
}

#[test]
fn categories_are_strictly_ordered() {
    let ladder = [
        five("Ah Kd 7s 5c 2d"),
        five("2h 2d 7s 5c 3d"),
        five("2h 2d 3s 3c 4d"),
        five("2h 2d 2s 5c 3d"),
        five("Ac 5c 4d 3h 2s"),
        five("7h 5h 4h 3h 2h"),
        five("2h 2d 2s 3c 3d"),
        five("2h 2d 2s 2c 3d"),
        five("5h 4h 3h 2h Ah"),
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] < pair[1], "{} should lose to {}", pair[0], pair[1]);
        assert!(pair[0].category < pair[1].category);
    }
}

#[test]
fn flush_beats_straight_in_seven_cards() {
    let e = evaluate(&parse_cards("9h 8h 7c 6d 5h 2h Kh").unwrap()).unwrap();
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.key()[0], Rank::King);
}

#[test]
fn straight_flush_found_among_seven() {
    let e = evaluate(&parse_cards("As Ks Qs Js Ts 2h 3d").unwrap()).unwrap();
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.key(), &[Rank::Ace]);
    assert_eq!(e.describe(), "Royal Flush");
}

#[test]
fn wheel_straight_flush_is_five_high() {
    let e = evaluate(&parse_cards("Ad 2d 3d 4d 5d Kc Qh").unwrap()).unwrap();
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.key(), &[Rank::Five]);
}
