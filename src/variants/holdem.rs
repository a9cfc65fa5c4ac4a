//! Texas Hold'em cash game.

use crate::config::{ConfigError, TableConfig};
use crate::engine::GameVariant;
use crate::player::PokerStats;
use crate::table::{Action, HoldemTable, TableError, TableEvent};
use log::info;

/// Players come and go between hands; anyone who runs out of chips is unseated.
///
/// ```
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::engine::GameVariant;
/// use holdem_engine::table::Action;
/// use holdem_engine::variants::TexasPoker;
///
/// let mut game = TexasPoker::new(TableConfig { seed: 3, ..TableConfig::default() }).unwrap();
/// game.join("alice").unwrap();
/// game.join("bob").unwrap();
/// game.start_round().unwrap();
/// game.act(0, Action::Fold).unwrap();
/// game.continue_round().unwrap();
/// game.continue_round().unwrap();
/// assert_eq!(game.table().players()[1].stack(), 1005);
/// ```
#[derive(Debug)]
pub struct TexasPoker {
    table: HoldemTable<PokerStats>,
}

impl TexasPoker {
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        Ok(Self { table: HoldemTable::new(config)? })
    }
}

impl GameVariant for TexasPoker {
    type Stats = PokerStats;

    fn name(&self) -> &'static str {
        "Texas Hold'em"
    }

    fn table(&self) -> &HoldemTable<PokerStats> {
        &self.table
    }

    fn join(&mut self, nick: &str) -> Result<Vec<TableEvent>, TableError> {
        let seat = self.table.join(nick)?;
        Ok(vec![TableEvent::Joined { seat, nick: nick.to_string() }])
    }

    fn leave(&mut self, nick: &str) -> Result<Vec<TableEvent>, TableError> {
        self.table.leave(nick)
    }

    fn start_round(&mut self) -> Result<Vec<TableEvent>, TableError> {
        self.table.start_hand()
    }

    fn act(&mut self, seat: usize, action: Action) -> Result<Vec<TableEvent>, TableError> {
        Ok(self.table.act(seat, action)?)
    }

    fn deal_next_street(&mut self) -> Result<Vec<TableEvent>, TableError> {
        self.table.deal_next_street()
    }

    fn end_round(&mut self) -> Result<Vec<TableEvent>, TableError> {
        let mut events = self.table.showdown()?;
        for p in self.table.finish_hand()? {
            let nick = p.nick().to_string();
            if p.stack() == 0 {
                info!("{nick} busted after {} hands", p.stats().hands_played);
                events.push(TableEvent::Busted { nick: nick.clone() });
            }
            events.push(TableEvent::Left { nick });
        }
        Ok(events)
    }
}
