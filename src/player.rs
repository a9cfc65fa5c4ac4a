use crate::hand::HoleCards;
use crate::pot::StreetBet;
use std::fmt;

/// Per-variant bookkeeping carried by every seated player.
pub trait PlayerStats: fmt::Debug + Clone + Default {
    /// Called once per dealt hand with the chip change over the hand.
    fn record_hand(&mut self, won: bool, net: i64);
}

/// Cash game statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokerStats {
    pub hands_played: u32,
    pub hands_won: u32,
    pub net_chips: i64,
}

impl PlayerStats for PokerStats {
    fn record_hand(&mut self, won: bool, net: i64) {
        self.hands_played += 1;
        if won {
            self.hands_won += 1;
        }
        self.net_chips += net;
    }
}

/// Tournament statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourneyStats {
    pub hands_played: u32,
    pub hands_won: u32,
    /// Finishing place, 1 for the winner. Set when the player busts or wins.
    pub place: Option<usize>,
}

impl PlayerStats for TourneyStats {
    fn record_hand(&mut self, won: bool, _net: i64) {
        self.hands_played += 1;
        if won {
            self.hands_won += 1;
        }
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player<S> {
    pub(crate) nick: String,
    pub(crate) stack: u64,
    pub(crate) bet: u64,
    pub(crate) committed: u64,
    pub(crate) folded: bool,
    pub(crate) all_in: bool,
    pub(crate) acted: bool,
    pub(crate) leaving: bool,
    pub(crate) hole: Option<HoleCards>,
    pub(crate) stats: S,
}

impl<S: PlayerStats> Player<S> {
    pub fn new(nick: impl Into<String>, stack: u64) -> Self {
        Self {
            nick: nick.into(),
            stack,
            bet: 0,
            committed: 0,
            folded: false,
            all_in: false,
            acted: false,
            leaving: false,
            hole: None,
            stats: S::default(),
        }
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn stack(&self) -> u64 {
        self.stack
    }

    /// Chips put in on the current street.
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Chips put in over the whole hand.
    pub fn committed(&self) -> u64 {
        self.committed
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    pub fn stats(&self) -> &S {
        &self.stats
    }

    /// Dealt in and not folded.
    pub fn in_hand(&self) -> bool {
        self.hole.is_some() && !self.folded
    }

    /// Still able to make betting decisions this hand.
    pub fn can_act(&self) -> bool {
        self.in_hand() && !self.all_in
    }

    /// Move up to `amount` from stack to bet, returning what was actually paid.
    pub(crate) fn commit(&mut self, amount: u64) -> u64 {
        let pay = self.stack.min(amount);
        self.stack -= pay;
        self.bet += pay;
        self.committed += pay;
        if self.stack == 0 && pay > 0 {
            self.all_in = true;
        }
        pay
    }

    pub(crate) fn street_bet(&self, seat: usize) -> StreetBet {
        StreetBet { seat, amount: self.bet, folded: self.folded, all_in: self.all_in }
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.bet = 0;
        self.committed = 0;
        self.folded = false;
        self.all_in = false;
        self.acted = false;
        self.hole = None;
    }

    pub(crate) fn reset_for_street(&mut self) {
        self.bet = 0;
        self.acted = false;
    }
}
