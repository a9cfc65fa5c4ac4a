//! Texas Hold'em freezeout tournament.

use crate::config::{ConfigError, TourneyConfig};
use crate::engine::GameVariant;
use crate::player::{Player, TourneyStats};
use crate::table::{Action, HoldemTable, TableError, TableEvent};
use log::info;

/// Everyone starts with the same stack and plays until one player holds every chip.
///
/// Registration closes when the first hand is dealt. Busted players are ranked by
/// the order they go out; two players leaving in the same hand are ranked by the
/// chips they put into it, which for a bust is the stack they started it with.
#[derive(Debug)]
pub struct TexasTourney {
    table: HoldemTable<TourneyStats>,
    config: TourneyConfig,
    started: bool,
    entrants: usize,
    eliminated: Vec<Player<TourneyStats>>,
    winner: Option<Player<TourneyStats>>,
}

impl TexasTourney {
    pub fn new(config: TourneyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table: HoldemTable::new(config.table.clone())?,
            config,
            started: false,
            entrants: 0,
            eliminated: Vec::new(),
            winner: None,
        })
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn winner(&self) -> Option<&Player<TourneyStats>> {
        self.winner.as_ref()
    }

    /// Finished players, best place first, winner included once decided.
    pub fn standings(&self) -> Vec<(usize, &str)> {
        let mut out: Vec<(usize, &str)> = self
            .winner
            .iter()
            .chain(self.eliminated.iter())
            .filter_map(|p| p.stats().place.map(|place| (place, p.nick())))
            .collect();
        out.sort_by_key(|(place, _)| *place);
        out
    }

    fn double_blinds(&mut self) -> Result<TableEvent, TableError> {
        let small = self.table.config().small_blind * 2;
        let big = self.table.config().big_blind * 2;
        self.table.set_blinds(small, big)?;
        info!("Blinds up to {small}/{big}");
        Ok(TableEvent::BlindsUp { small, big })
    }
}

impl GameVariant for TexasTourney {
    type Stats = TourneyStats;

    fn name(&self) -> &'static str {
        "Texas Hold'em Tournament"
    }

    fn table(&self) -> &HoldemTable<TourneyStats> {
        &self.table
    }

    fn join(&mut self, nick: &str) -> Result<Vec<TableEvent>, TableError> {
        if self.started {
            return Err(TableError::RegistrationClosed);
        }
        let seat = self.table.join(nick)?;
        Ok(vec![TableEvent::Joined { seat, nick: nick.to_string() }])
    }

    fn leave(&mut self, nick: &str) -> Result<Vec<TableEvent>, TableError> {
        self.table.leave(nick)
    }

    fn start_round(&mut self) -> Result<Vec<TableEvent>, TableError> {
        if self.winner.is_some() {
            return Err(TableError::TourneyOver);
        }
        let mut events = Vec::new();
        let dealt = self.table.hands_dealt();
        let every = u64::from(self.config.double_every);
        if self.started && every > 0 && dealt > 0 && dealt % every == 0 {
            events.push(self.double_blinds()?);
        }
        events.extend(self.table.start_hand()?);
        if !self.started {
            self.started = true;
            self.entrants = self.table.players().len();
            info!("Tournament started with {} players", self.entrants);
        }
        Ok(events)
    }

    fn act(&mut self, seat: usize, action: Action) -> Result<Vec<TableEvent>, TableError> {
        Ok(self.table.act(seat, action)?)
    }

    fn deal_next_street(&mut self) -> Result<Vec<TableEvent>, TableError> {
        self.table.deal_next_street()
    }

    fn end_round(&mut self) -> Result<Vec<TableEvent>, TableError> {
        let mut events = self.table.showdown()?;
        let mut out = self.table.finish_hand()?;
        // More chips put into the hand finishes higher.
        out.sort_by(|a, b| b.committed().cmp(&a.committed()));

        let remaining = self.table.players().len();
        let busted = !out.is_empty();
        for (i, mut p) in out.into_iter().enumerate() {
            let place = remaining + 1 + i;
            p.stats.place = Some(place);
            info!("{} eliminated in place {place}", p.nick());
            events.push(TableEvent::Eliminated { nick: p.nick().to_string(), place });
            self.eliminated.push(p);
        }

        if remaining == 1 {
            if let Some(mut champ) = self.table.players().first().cloned() {
                champ.stats.place = Some(1);
                info!("{} wins the tournament", champ.nick());
                events.push(TableEvent::Winner { nick: champ.nick().to_string() });
                self.winner = Some(champ);
            }
        } else if busted && self.config.double_on_bust && remaining > 1 {
            events.push(self.double_blinds()?);
        }
        Ok(events)
    }
}
