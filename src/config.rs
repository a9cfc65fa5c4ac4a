//! Table and tournament settings passed explicitly to the game types.

use rand::Rng;

/// Hard upper bound on seats: 52 cards minus a full board leaves hole cards for 23.
pub const MAX_SEATS: usize = 23;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("big blind must be positive")]
    ZeroBigBlind,
    #[error("small blind {small} exceeds big blind {big}")]
    SmallBlindTooLarge { small: u64, big: u64 },
    #[error("starting stack {stack} is below the big blind {big}")]
    StackTooSmall { stack: u64, big: u64 },
    #[error("player limits {min}..={max} must lie within 2..={MAX_SEATS}")]
    PlayerLimits { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub small_blind: u64,
    pub big_blind: u64,
    pub starting_stack: u64,
    /// Funded players needed to start a hand.
    pub min_players: usize,
    pub max_players: usize,
    /// Seed for the deck's shuffles.
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
            starting_stack: 1000,
            min_players: 2,
            max_players: 22,
            seed: rand::rng().random(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_blind == 0 {
            return Err(ConfigError::ZeroBigBlind);
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::SmallBlindTooLarge {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        if self.starting_stack < self.big_blind {
            return Err(ConfigError::StackTooSmall {
                stack: self.starting_stack,
                big: self.big_blind,
            });
        }
        if self.min_players < 2 || self.min_players > self.max_players || self.max_players > MAX_SEATS
        {
            return Err(ConfigError::PlayerLimits { min: self.min_players, max: self.max_players });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourneyConfig {
    pub table: TableConfig,
    /// Double the blinds every this many hands; 0 disables.
    pub double_every: u32,
    /// Double the blinds whenever a player is eliminated.
    pub double_on_bust: bool,
}

impl Default for TourneyConfig {
    fn default() -> Self {
        Self { table: TableConfig::default(), double_every: 10, double_on_bust: false }
    }
}

impl TourneyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.table.validate()
    }
}
