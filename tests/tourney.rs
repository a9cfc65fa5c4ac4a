use holdem_engine::config::{TableConfig, TourneyConfig};
use holdem_engine::engine::GameVariant;
use holdem_engine::table::{Action, Progress, TableError, TableEvent};
use holdem_engine::variants::TexasTourney;

fn tourney(players: usize, seed: u64) -> TexasTourney {
    tourney_with(players, seed, 5, false)
}

fn tourney_with(players: usize, seed: u64, double_every: u32, double_on_bust: bool) -> TexasTourney {
    let config = TourneyConfig {
        table: TableConfig { seed, starting_stack: 100, ..TableConfig::default() },
        double_every,
        double_on_bust,
    };
    let mut t = TexasTourney::new(config).unwrap();
    for i in 0..players {
        t.join(&format!("p{i}")).unwrap();
    }
    t
}

/// Everyone shoves when allowed and calls otherwise.
fn play_hand(t: &mut TexasTourney) -> Vec<TableEvent> {
    let mut events = t.start_round().unwrap();
    loop {
        match t.progress() {
            Progress::Awaiting(seat) => {
                let shove = t.act(seat, Action::AllIn);
                let acted = match shove {
                    Ok(e) => e,
                    Err(_) => t.act(seat, Action::Call).unwrap(),
                };
                events.extend(acted);
            }
            Progress::Idle => break,
            _ => events.extend(t.continue_round().unwrap()),
        }
    }
    events
}

#[test]
fn shoving_until_one_player_holds_every_chip() {
    let mut t = tourney(4, 77);
    let mut events = Vec::new();
    for _ in 0..500 {
        if t.winner().is_some() {
            break;
        }
        events.extend(play_hand(&mut t));
    }

    let winner = t.winner().expect("a winner after 500 shoves");
    assert_eq!(winner.stack(), 400);
    assert_eq!(winner.stats().place, Some(1));

    let standings = t.standings();
    let places: Vec<usize> = standings.iter().map(|(place, _)| *place).collect();
    assert_eq!(places, vec![1, 2, 3, 4]);
    let eliminated = events.iter().filter(|e| matches!(e, TableEvent::Eliminated { .. })).count();
    assert_eq!(eliminated, 3);
    assert_eq!(t.start_round(), Err(TableError::TourneyOver));
}

#[test]
fn blinds_follow_the_hand_schedule() {
    let mut t = tourney(3, 5);
    let mut raised = Vec::new();
    for _ in 0..11 {
        let events = t.start_round().unwrap();
        raised.extend(events.iter().filter_map(|e| match e {
            TableEvent::BlindsUp { small, big } => Some((*small, *big)),
            _ => None,
        }));
        while let Progress::Awaiting(seat) = t.progress() {
            t.act(seat, Action::Fold).unwrap();
        }
        while t.progress() != Progress::Idle {
            t.continue_round().unwrap();
        }
    }
    assert_eq!(raised, vec![(10, 20), (20, 40)]);
}

#[test]
fn late_entry_is_refused_after_the_first_deal() {
    let mut t = tourney(2, 3);
    t.start_round().unwrap();
    assert_eq!(t.join("late"), Err(TableError::RegistrationClosed));
}

/// Finish the current hand with nobody putting in another chip.
fn fold_out(t: &mut TexasTourney) -> Vec<TableEvent> {
    let mut events = Vec::new();
    loop {
        match t.progress() {
            Progress::Awaiting(seat) => events.extend(t.act(seat, Action::Fold).unwrap()),
            Progress::Idle => break,
            _ => events.extend(t.continue_round().unwrap()),
        }
    }
    events
}

#[test]
fn blinds_double_when_a_player_goes_out() {
    let mut t = tourney_with(3, 14, 0, true);
    t.start_round().unwrap();
    t.leave("p0").unwrap();
    let events = fold_out(&mut t);

    let out = events.iter().position(|e| *e == TableEvent::Eliminated { nick: "p0".into(), place: 3 });
    let up = events.iter().position(|e| *e == TableEvent::BlindsUp { small: 10, big: 20 });
    assert!(out.is_some() && up.is_some());
    assert!(out < up);
    assert_eq!(t.table().config().big_blind, 20);
    assert!(t.winner().is_none());

    // Without the flag, the same departure leaves the blinds alone.
    let mut t = tourney_with(3, 14, 0, false);
    t.start_round().unwrap();
    t.leave("p0").unwrap();
    let events = fold_out(&mut t);
    assert!(!events.iter().any(|e| matches!(e, TableEvent::BlindsUp { .. })));
    assert_eq!(t.table().config().big_blind, 10);
}

#[test]
fn same_hand_exits_rank_by_chips_put_in() {
    let mut t = tourney_with(4, 15, 0, false);
    t.start_round().unwrap();
    // Seat 1 posted the small blind, seat 2 the big blind.
    t.leave("p1").unwrap();
    t.leave("p2").unwrap();
    let events = fold_out(&mut t);

    let places: Vec<(String, usize)> = events
        .iter()
        .filter_map(|e| match e {
            TableEvent::Eliminated { nick, place } => Some((nick.clone(), *place)),
            _ => None,
        })
        .collect();
    assert_eq!(places, vec![("p2".to_string(), 3), ("p1".to_string(), 4)]);
    assert_eq!(t.standings(), vec![(3, "p2"), (4, "p1")]);
    assert_eq!(t.table().players().len(), 2);
}
