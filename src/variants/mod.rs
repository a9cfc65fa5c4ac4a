pub mod holdem;
pub mod tourney;

pub use holdem::TexasPoker;
pub use tourney::TexasTourney;
