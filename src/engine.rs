// Game variant boundary. A front end (chat bot, simulator, tests) drives a round through
// this trait without caring whether it is a cash game or a tournament.

use crate::player::PlayerStats;
use crate::table::{Action, HoldemTable, Progress, TableError, TableEvent};

pub trait GameVariant {
    type Stats: PlayerStats;

    fn name(&self) -> &'static str;

    fn table(&self) -> &HoldemTable<Self::Stats>;

    fn join(&mut self, nick: &str) -> Result<Vec<TableEvent>, TableError>;

    fn leave(&mut self, nick: &str) -> Result<Vec<TableEvent>, TableError>;

    /// Deal a new hand.
    fn start_round(&mut self) -> Result<Vec<TableEvent>, TableError>;

    fn act(&mut self, seat: usize, action: Action) -> Result<Vec<TableEvent>, TableError>;

    /// Move the hand along once nobody owes an action: deal the next street, or settle.
    fn continue_round(&mut self) -> Result<Vec<TableEvent>, TableError> {
        match self.progress() {
            Progress::Idle => Err(TableError::NoHand),
            Progress::Awaiting(_) => Err(TableError::StreetOpen),
            Progress::StreetComplete => self.deal_next_street(),
            Progress::Showdown => self.end_round(),
        }
    }

    /// Pay the pots and tidy up the table for the next hand.
    fn end_round(&mut self) -> Result<Vec<TableEvent>, TableError>;

    fn deal_next_street(&mut self) -> Result<Vec<TableEvent>, TableError>;

    fn progress(&self) -> Progress {
        self.table().progress()
    }
}
