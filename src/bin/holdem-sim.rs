use clap::Parser;
use holdem_engine::config::{TableConfig, TourneyConfig};
use holdem_engine::engine::GameVariant;
use holdem_engine::table::{Action, Progress, TableError, TableEvent};
use holdem_engine::variants::{TexasPoker, TexasTourney};
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Parser)]
#[command(about = "Play seeded random Hold'em hands and print the table events")]
struct Cli {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=23))]
    players: u8,
    /// Hands to play (a tournament stops early once it has a winner).
    #[clap(long, default_value_t = 10)]
    hands: u32,
    /// Starting stack for every player.
    #[clap(long, default_value_t = 1000)]
    stack: u64,
    /// Small blind.
    #[clap(long, default_value_t = 5)]
    small_blind: u64,
    /// Big blind.
    #[clap(long, default_value_t = 10)]
    big_blind: u64,
    /// Seed for the deck and the autopilot; random when omitted.
    #[clap(long)]
    seed: Option<u64>,
    /// Play a freezeout tournament instead of a cash game.
    #[clap(long)]
    tourney: bool,
    /// Double the tournament blinds every this many hands.
    #[clap(long, default_value_t = 10)]
    double_every: u32,
    /// Show every player's hole cards.
    #[clap(long)]
    show_hole_cards: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let table = TableConfig {
        small_blind: cli.small_blind,
        big_blind: cli.big_blind,
        starting_stack: cli.stack,
        seed,
        ..TableConfig::default()
    };
    info!("Seed {seed}");

    let result = if cli.tourney {
        let config = TourneyConfig { table, double_every: cli.double_every, double_on_bust: false };
        TexasTourney::new(config).map_err(TableError::from).and_then(|g| run(g, &cli, seed))
    } else {
        TexasPoker::new(table).map_err(TableError::from).and_then(|g| run(g, &cli, seed))
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run<G: GameVariant>(mut game: G, cli: &Cli, seed: u64) -> Result<(), TableError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    println!("{}", game.name());
    for i in 0..cli.players {
        print_events(&game.join(&format!("player{}", i + 1))?, cli);
    }

    for _ in 0..cli.hands {
        match game.start_round() {
            Ok(events) => print_events(&events, cli),
            Err(TableError::TourneyOver | TableError::NotEnoughPlayers { .. }) => break,
            Err(e) => return Err(e),
        }
        loop {
            let events = match game.progress() {
                Progress::Idle => break,
                Progress::Awaiting(seat) => {
                    let action = autopilot(&game, seat, &mut rng);
                    game.act(seat, action)?
                }
                Progress::StreetComplete | Progress::Showdown => game.continue_round()?,
            };
            print_events(&events, cli);
        }
    }

    println!("Final stacks:");
    for p in game.table().players() {
        println!("  {:<10} {:>8}", p.nick(), p.stack());
    }
    Ok(())
}

/// Pick a random legal action, leaning towards checking and calling.
fn autopilot<G: GameVariant>(game: &G, seat: usize, rng: &mut ChaCha8Rng) -> Action {
    let table = game.table();
    let Some(p) = table.players().get(seat) else {
        return Action::Fold;
    };
    let to_call = table.to_call(seat);
    let max_total = p.bet() + p.stack();
    let roll: u32 = rng.random_range(0..100);

    if table.can_raise(seat) && roll < 15 {
        let min = table.min_raise_to().min(max_total);
        if min >= max_total || roll < 2 {
            return Action::AllIn;
        }
        let target = rng.random_range(min..=max_total.min(min * 3));
        return if table.round().current_bet == 0 { Action::Bet(target) } else { Action::RaiseTo(target) };
    }
    match to_call {
        0 => Action::Check,
        _ if roll > 80 => Action::Fold,
        _ => Action::Call,
    }
}

fn print_events(events: &[TableEvent], cli: &Cli) {
    for event in events {
        if matches!(event, TableEvent::Dealt { .. }) && !cli.show_hole_cards {
            continue;
        }
        println!("{event}");
    }
}
