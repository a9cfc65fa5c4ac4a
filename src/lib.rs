//! holdem-engine: Texas Hold'em hand ranking and pot settlement
//!
//! Goals:
//! - Best five-card hand out of 5 to 7 cards with exact tie-breaks
//! - Main and side pots that always account for every chip
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::evaluator::{evaluate_holdem, Category};
//! use holdem_engine::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//! ).unwrap();
//! let board: Board = "Qs Js Ts 2h 3d".parse().unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::StraightFlush);
//! assert_eq!(eval.to_string(), "Royal Flush (As Ks Qs Js Ts)");
//! ```
//!
//! ## Side pots
//! ```
//! use holdem_engine::pot::{PotManager, StreetBet};
//!
//! let mut pots = PotManager::new();
//! pots.settle_bets(&[
//!     StreetBet::live(0, 100),
//!     StreetBet::all_in(1, 50),
//!     StreetBet::live(2, 100),
//! ]).unwrap();
//! assert_eq!(pots.pots()[0].eligible.len(), 3);
//! assert_eq!(pots.pots()[1].eligible.len(), 2);
//! ```
//!
//! ## Simulator
//! Play random seeded hands and print what happens with:
//! ```sh
//! cargo run --bin holdem-sim -- --players 4 --hands 20 --seed 7
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod player;
pub mod pot;
pub mod ranking;
pub mod settlement;
pub mod table;
pub mod variants;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
