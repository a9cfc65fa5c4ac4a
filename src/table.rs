//! No-limit Hold'em table: seating, betting rounds and showdown.

use crate::config::{ConfigError, TableConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_holdem, EvalError, EvaluatedHand};
use crate::hand::{Board, HandError, HoleCards};
use crate::player::{Player, PlayerStats};
use crate::pot::{PotError, PotManager};
use crate::settlement::{apply_awards, distribute_pots, PotAward, SeatOrder, SettlementError};
use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        })
    }
}

/// A betting decision. Amounts are the player's total bet for the street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(u64),
    RaiseTo(u64),
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => f.write_str("fold"),
            Action::Check => f.write_str("check"),
            Action::Call => f.write_str("call"),
            Action::Bet(n) => write!(f, "bet {n}"),
            Action::RaiseTo(n) => write!(f, "raise to {n}"),
            Action::AllIn => f.write_str("all-in"),
        }
    }
}

/// Where the current hand stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// No hand is being played.
    Idle,
    /// Waiting on this seat's action.
    Awaiting(usize),
    /// Betting on this street is closed; collect and deal the next one.
    StreetComplete,
    /// Board is out (or only one player is left); pay the pots.
    Showdown,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no hand in progress")]
    NoHand,
    #[error("cannot act during showdown")]
    Showdown,
    #[error("seat {seat} acted out of turn, waiting on seat {current}")]
    NotYourTurn { seat: usize, current: usize },
    #[error("seat {0} cannot act")]
    CannotAct(usize),
    #[error("cannot check facing {to_call} to call")]
    IllegalCheck { to_call: u64 },
    #[error("betting is not allowed when facing a bet")]
    BetNotAllowed,
    #[error("raising is not allowed without a bet")]
    RaiseNotAllowed,
    #[error("action was not reopened, only call or fold")]
    NotReopened,
    #[error("amount too small: min {min}, got {got}")]
    AmountTooSmall { min: u64, got: u64 },
    #[error("amount too large: max {max}, got {got}")]
    AmountTooLarge { max: u64, got: u64 },
    #[error("target must exceed current bet: current {current}, target {target}")]
    TargetTooLow { current: u64, target: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("a hand is in progress")]
    HandInProgress,
    #[error("no hand in progress")]
    NoHand,
    #[error("betting on this street is still open")]
    StreetOpen,
    #[error("the hand has not reached showdown")]
    NotAtShowdown,
    #[error("table is full ({0} seats)")]
    TableFull(usize),
    #[error("nick {0} is already seated")]
    NickTaken(String),
    #[error("no player named {0}")]
    UnknownPlayer(String),
    #[error("need {needed} players with chips, have {funded}")]
    NotEnoughPlayers { needed: usize, funded: usize },
    #[error("registration is closed")]
    RegistrationClosed,
    #[error("the tournament is over")]
    TourneyOver,
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Pot(#[from] PotError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

/// Things that happened at the table, in order, for a display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableEvent {
    Joined { seat: usize, nick: String },
    Left { nick: String },
    HandStarted { number: u64, dealer: String },
    /// Private: only the owner should see it.
    Dealt { seat: usize, nick: String, hole: HoleCards },
    Blind { nick: String, amount: u64, big: bool },
    Acted { nick: String, action: Action, bet: u64 },
    Returned { nick: String, amount: u64 },
    StreetDealt { street: Street, board: Board },
    Showed { nick: String, hand: EvaluatedHand },
    Awarded { nicks: Vec<String>, award: PotAward },
    BlindsUp { small: u64, big: u64 },
    Busted { nick: String },
    Eliminated { nick: String, place: usize },
    Winner { nick: String },
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::Joined { seat, nick } => write!(f, "{nick} sits down at seat {seat}"),
            TableEvent::Left { nick } => write!(f, "{nick} leaves the table"),
            TableEvent::HandStarted { number, dealer } => {
                write!(f, "Hand #{number}, {dealer} has the button")
            }
            TableEvent::Dealt { nick, hole, .. } => write!(f, "{nick} is dealt [{hole}]"),
            TableEvent::Blind { nick, amount, big } => {
                let which = if *big { "big" } else { "small" };
                write!(f, "{nick} posts the {which} blind of {amount}")
            }
            TableEvent::Acted { nick, action, bet } => match action {
                Action::Fold => write!(f, "{nick} folds"),
                Action::Check => write!(f, "{nick} checks"),
                Action::Call => write!(f, "{nick} calls, {bet} in"),
                Action::Bet(_) => write!(f, "{nick} bets {bet}"),
                Action::RaiseTo(_) => write!(f, "{nick} raises to {bet}"),
                Action::AllIn => write!(f, "{nick} is all-in for {bet}"),
            },
            TableEvent::Returned { nick, amount } => {
                write!(f, "Uncalled {amount} returned to {nick}")
            }
            TableEvent::StreetDealt { street, board } => write!(f, "{street}: [{board}]"),
            TableEvent::Showed { nick, hand } => write!(f, "{nick} shows {hand}"),
            TableEvent::Awarded { nicks, award } => {
                let pot = if award.pot_index == 0 {
                    "the main pot".to_string()
                } else {
                    format!("side pot {}", award.pot_index)
                };
                let verb = if award.is_split() { "split" } else { "win" };
                let suffix = if award.is_split() { "" } else { "s" };
                write!(f, "{} {verb}{suffix} {pot} of {}", nicks.join(" and "), award.amount)?;
                if let Some(hand) = &award.hand {
                    write!(f, " with {}", hand.describe())?;
                }
                Ok(())
            }
            TableEvent::BlindsUp { small, big } => write!(f, "Blinds are now {small}/{big}"),
            TableEvent::Busted { nick } => write!(f, "{nick} is out of chips"),
            TableEvent::Eliminated { nick, place } => {
                write!(f, "{nick} is eliminated in place {place}")
            }
            TableEvent::Winner { nick } => write!(f, "{nick} wins the tournament"),
        }
    }
}

/// Per-hand betting state.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RoundState {
    pub street: Street,
    pub board: Board,
    pub dealer: Option<usize>,
    pub current: usize,
    /// Highest street bet so far.
    pub current_bet: u64,
    /// Size of the last full raise; the next raise must be at least this much.
    pub min_raise: u64,
    pub small_blind_seat: Option<usize>,
    pub big_blind_seat: Option<usize>,
    pub in_progress: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            street: Street::Preflop,
            board: Board::default(),
            dealer: None,
            current: 0,
            current_bet: 0,
            min_raise: 0,
            small_blind_seat: None,
            big_blind_seat: None,
            in_progress: false,
        }
    }
}

/// A no-limit Texas Hold'em table. Seat numbers are indices into [`HoldemTable::players`].
#[derive(Debug)]
pub struct HoldemTable<S> {
    config: TableConfig,
    deck: Deck,
    players: Vec<Player<S>>,
    round: RoundState,
    pots: PotManager,
    hands_dealt: u64,
}

impl<S: PlayerStats> HoldemTable<S> {
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            deck: Deck::seeded(config.seed),
            players: Vec::with_capacity(config.max_players),
            round: RoundState { min_raise: config.big_blind, ..RoundState::default() },
            pots: PotManager::new(),
            hands_dealt: 0,
            config,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player<S>] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player<S>] {
        &mut self.players
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn board(&self) -> &Board {
        &self.round.board
    }

    pub fn pots(&self) -> &PotManager {
        &self.pots
    }

    pub fn hands_dealt(&self) -> u64 {
        self.hands_dealt
    }

    pub fn seat_of(&self, nick: &str) -> Option<usize> {
        self.players.iter().position(|p| p.nick == nick)
    }

    /// Chips at the table: stacks, open bets and pots.
    pub fn chips_in_play(&self) -> u64 {
        self.players.iter().map(|p| p.stack + p.bet).sum::<u64>() + self.pots.total()
    }

    pub fn set_blinds(&mut self, small: u64, big: u64) -> Result<(), TableError> {
        if self.round.in_progress {
            return Err(TableError::HandInProgress);
        }
        let config = TableConfig { small_blind: small, big_blind: big, ..self.config.clone() };
        if big == 0 {
            return Err(ConfigError::ZeroBigBlind.into());
        }
        if small > big {
            return Err(ConfigError::SmallBlindTooLarge { small, big }.into());
        }
        self.config = config;
        Ok(())
    }

    pub fn join(&mut self, nick: &str) -> Result<usize, TableError> {
        if self.round.in_progress {
            return Err(TableError::HandInProgress);
        }
        if self.seat_of(nick).is_some() {
            return Err(TableError::NickTaken(nick.to_string()));
        }
        if self.players.len() >= self.config.max_players {
            return Err(TableError::TableFull(self.config.max_players));
        }
        self.players.push(Player::new(nick, self.config.starting_stack));
        info!("{nick} joined, {} seated", self.players.len());
        Ok(self.players.len() - 1)
    }

    /// Leave now, or at the end of the hand if dealt in. A player in the hand folds
    /// unless nobody else is left in it.
    pub fn leave(&mut self, nick: &str) -> Result<Vec<TableEvent>, TableError> {
        let seat = self.seat_of(nick).ok_or_else(|| TableError::UnknownPlayer(nick.to_string()))?;
        if !self.round.in_progress {
            self.remove_seats(&[seat]);
            return Ok(vec![TableEvent::Left { nick: nick.to_string() }]);
        }

        let mut events = Vec::new();
        let was_current = self.progress() == Progress::Awaiting(seat);
        let others_in_hand =
            self.players.iter().enumerate().any(|(s, p)| s != seat && p.in_hand());
        let p = &mut self.players[seat];
        p.leaving = true;
        // The last player in the hand keeps it and collects the pot on the way out.
        if p.in_hand() && others_in_hand && self.round.street != Street::Showdown {
            p.folded = true;
            p.acted = true;
            events.push(TableEvent::Acted { nick: nick.to_string(), action: Action::Fold, bet: p.bet });
            self.pots.fold(seat);
            if was_current {
                self.round.current = self.next_to_act(seat);
            }
        }
        Ok(events)
    }

    pub fn progress(&self) -> Progress {
        if !self.round.in_progress {
            Progress::Idle
        } else if self.round.street == Street::Showdown {
            Progress::Showdown
        } else if self.betting_closed() {
            Progress::StreetComplete
        } else {
            Progress::Awaiting(self.round.current)
        }
    }

    pub fn to_call(&self, seat: usize) -> u64 {
        self.players.get(seat).map_or(0, |p| self.round.current_bet.saturating_sub(p.bet))
    }

    /// Smallest legal raise-to total for the current street.
    pub fn min_raise_to(&self) -> u64 {
        if self.round.current_bet == 0 {
            self.config.big_blind
        } else {
            self.round.current_bet + self.round.min_raise
        }
    }

    /// Whether `seat` may still bet or raise, as opposed to only call or fold.
    pub fn can_raise(&self, seat: usize) -> bool {
        self.players.get(seat).is_some_and(|p| {
            p.can_act() && !p.acted && p.stack > self.round.current_bet.saturating_sub(p.bet)
        })
    }

    pub fn start_hand(&mut self) -> Result<Vec<TableEvent>, TableError> {
        if self.round.in_progress {
            return Err(TableError::HandInProgress);
        }
        let funded = self.players.iter().filter(|p| p.stack > 0).count();
        if funded < self.config.min_players {
            return Err(TableError::NotEnoughPlayers { needed: self.config.min_players, funded });
        }

        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.pots.reset();
        self.hands_dealt += 1;
        let n = self.players.len();
        let dealer = match self.round.dealer {
            Some(d) => self.next_funded(d % n),
            None => self.next_funded(n - 1),
        };
        self.round = RoundState {
            street: Street::Preflop,
            board: Board::default(),
            dealer: Some(dealer),
            current: dealer,
            current_bet: 0,
            min_raise: self.config.big_blind,
            small_blind_seat: None,
            big_blind_seat: None,
            in_progress: true,
        };

        let mut events = vec![TableEvent::HandStarted {
            number: self.hands_dealt,
            dealer: self.players[dealer].nick.clone(),
        }];
        debug!("Hand #{} starting, dealer seat {dealer}", self.hands_dealt);

        for i in 1..=n {
            let seat = (dealer + i) % n;
            if self.players[seat].stack == 0 {
                continue;
            }
            let cards = self.deck.draw_n(2)?;
            let hole = HoleCards::from_slice(&cards)?;
            self.players[seat].hole = Some(hole);
            events.push(TableEvent::Dealt { seat, nick: self.players[seat].nick.clone(), hole });
        }

        let (sb, bb) = if funded == 2 {
            (dealer, self.next_funded(dealer))
        } else {
            let sb = self.next_funded(dealer);
            (sb, self.next_funded(sb))
        };
        let sb_paid = self.players[sb].commit(self.config.small_blind);
        let bb_paid = self.players[bb].commit(self.config.big_blind);
        events.push(TableEvent::Blind { nick: self.players[sb].nick.clone(), amount: sb_paid, big: false });
        events.push(TableEvent::Blind { nick: self.players[bb].nick.clone(), amount: bb_paid, big: true });

        self.round.small_blind_seat = Some(sb);
        self.round.big_blind_seat = Some(bb);
        self.round.current_bet = sb_paid.max(bb_paid);
        self.round.current = self.next_to_act(bb);
        Ok(events)
    }

    pub fn act(&mut self, seat: usize, action: Action) -> Result<Vec<TableEvent>, ActionError> {
        match self.progress() {
            Progress::Idle => return Err(ActionError::NoHand),
            Progress::Showdown => return Err(ActionError::Showdown),
            Progress::StreetComplete => return Err(ActionError::CannotAct(seat)),
            Progress::Awaiting(current) if current != seat => {
                return Err(ActionError::NotYourTurn { seat, current });
            }
            Progress::Awaiting(_) => {}
        }
        let p = self.players.get(seat).ok_or(ActionError::CannotAct(seat))?;
        if !p.can_act() {
            return Err(ActionError::CannotAct(seat));
        }

        let to_call = self.to_call(seat);
        let max_total = p.bet + p.stack;
        let current_bet = self.round.current_bet;
        match action {
            Action::Fold => {
                let p = &mut self.players[seat];
                p.folded = true;
                p.acted = true;
                self.pots.fold(seat);
            }
            Action::Check => {
                if to_call > 0 {
                    return Err(ActionError::IllegalCheck { to_call });
                }
                self.players[seat].acted = true;
            }
            Action::Call => {
                let p = &mut self.players[seat];
                p.commit(to_call);
                p.acted = true;
            }
            Action::Bet(amount) => {
                if current_bet > 0 {
                    return Err(ActionError::BetNotAllowed);
                }
                let min = self.config.big_blind.min(max_total);
                if amount < min {
                    return Err(ActionError::AmountTooSmall { min, got: amount });
                }
                if amount > max_total {
                    return Err(ActionError::AmountTooLarge { max: max_total, got: amount });
                }
                self.place_to(seat, amount)?;
            }
            Action::RaiseTo(amount) => {
                if current_bet == 0 {
                    return Err(ActionError::RaiseNotAllowed);
                }
                if p.acted {
                    return Err(ActionError::NotReopened);
                }
                if amount <= current_bet {
                    return Err(ActionError::TargetTooLow { current: current_bet, target: amount });
                }
                if amount > max_total {
                    return Err(ActionError::AmountTooLarge { max: max_total, got: amount });
                }
                let min = current_bet + self.round.min_raise;
                if amount < min && amount < max_total {
                    return Err(ActionError::AmountTooSmall { min, got: amount });
                }
                self.place_to(seat, amount)?;
            }
            Action::AllIn => {
                if max_total > current_bet && p.acted {
                    return Err(ActionError::NotReopened);
                }
                if max_total <= current_bet {
                    let p = &mut self.players[seat];
                    p.commit(p.stack);
                    p.acted = true;
                } else {
                    self.place_to(seat, max_total)?;
                }
            }
        }

        let p = &self.players[seat];
        let event = TableEvent::Acted { nick: p.nick.clone(), action, bet: p.bet };
        debug!("Seat {seat} {action}, bet {}", p.bet);
        self.round.current = self.next_to_act(seat);
        Ok(vec![event])
    }

    /// Bring `seat`'s street bet up to `target`; a full raise reopens the action.
    fn place_to(&mut self, seat: usize, target: u64) -> Result<(), ActionError> {
        let current = self.players[seat].bet;
        if target <= current {
            return Err(ActionError::TargetTooLow { current, target });
        }
        let p = &mut self.players[seat];
        p.commit(target - current);
        p.acted = true;
        let new_bet = p.bet;

        if new_bet > self.round.current_bet {
            let raise = new_bet - self.round.current_bet;
            if raise >= self.round.min_raise {
                self.round.min_raise = raise;
                for (i, other) in self.players.iter_mut().enumerate() {
                    if i != seat {
                        other.acted = false;
                    }
                }
            }
            self.round.current_bet = new_bet;
        }
        Ok(())
    }

    /// Sweep the closed street's bets into the pots.
    pub fn collect_street(&mut self) -> Result<Vec<TableEvent>, TableError> {
        let bets: Vec<_> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.hole.is_some())
            .map(|(seat, p)| p.street_bet(seat))
            .collect();
        let settled = self.pots.settle_bets(&bets)?;

        let mut events = Vec::new();
        if let Some((seat, amount)) = settled.returned {
            let p = &mut self.players[seat];
            p.stack += amount;
            p.committed -= amount;
            p.all_in = p.stack == 0;
            events.push(TableEvent::Returned { nick: p.nick.clone(), amount });
        }
        for p in &mut self.players {
            p.reset_for_street();
        }
        self.round.current_bet = 0;
        self.round.min_raise = self.config.big_blind;
        Ok(events)
    }

    /// Close the street and deal the next one. When at most one player can still bet,
    /// the rest of the board is dealt straight away.
    pub fn deal_next_street(&mut self) -> Result<Vec<TableEvent>, TableError> {
        match self.progress() {
            Progress::Idle => return Err(TableError::NoHand),
            Progress::Awaiting(_) => return Err(TableError::StreetOpen),
            Progress::Showdown => return Ok(Vec::new()),
            Progress::StreetComplete => {}
        }
        let mut events = self.collect_street()?;
        if self.players.iter().filter(|p| p.in_hand()).count() <= 1 {
            self.round.street = Street::Showdown;
            return Ok(events);
        }

        loop {
            let (next, count) = match self.round.street {
                Street::Preflop => (Street::Flop, 3),
                Street::Flop => (Street::Turn, 1),
                Street::Turn => (Street::River, 1),
                Street::River | Street::Showdown => {
                    self.round.street = Street::Showdown;
                    break;
                }
            };
            let cards = self.deck.draw_n(count)?;
            self.round.board.extend(cards);
            self.round.street = next;
            events.push(TableEvent::StreetDealt { street: next, board: self.round.board.clone() });

            if self.players.iter().filter(|p| p.can_act()).count() >= 2 {
                let dealer = self.round.dealer.unwrap_or(0);
                self.round.current = self.next_to_act(dealer);
                break;
            }
        }
        Ok(events)
    }

    /// Evaluate the remaining hands and pay every pot.
    pub fn showdown(&mut self) -> Result<Vec<TableEvent>, TableError> {
        if self.progress() != Progress::Showdown {
            return Err(TableError::NotAtShowdown);
        }
        let contenders: Vec<usize> = (0..self.players.len()).filter(|&s| self.players[s].in_hand()).collect();

        let mut events = Vec::new();
        let mut hands = BTreeMap::new();
        if contenders.len() > 1 {
            for &seat in &contenders {
                let Some(hole) = self.players[seat].hole else { continue };
                let hand = evaluate_holdem(&hole, &self.round.board)?;
                events.push(TableEvent::Showed { nick: self.players[seat].nick.clone(), hand });
                hands.insert(seat, hand);
            }
        }

        let order = SeatOrder::new(self.round.dealer.unwrap_or(0), self.players.len());
        let awards = distribute_pots(self.pots.pots(), &hands, order)?;
        let won = apply_awards(&awards, &mut self.players)?;
        for award in awards {
            let nicks = award.winners.iter().map(|&s| self.players[s].nick.clone()).collect();
            events.push(TableEvent::Awarded { nicks, award });
        }
        self.pots.reset();

        for (seat, p) in self.players.iter_mut().enumerate() {
            if p.hole.is_none() {
                continue;
            }
            let gained = won.get(&seat).copied().unwrap_or(0);
            p.stats.record_hand(gained > 0, gained as i64 - p.committed as i64);
        }
        Ok(events)
    }

    /// Return every dealt card to the deck and unseat busted and leaving players.
    ///
    /// The removed players are handed back so the caller can report them.
    pub fn finish_hand(&mut self) -> Result<Vec<Player<S>>, TableError> {
        if !self.round.in_progress {
            return Err(TableError::NoHand);
        }
        if self.pots.total() > 0 {
            return Err(TableError::NotAtShowdown);
        }
        let mut cards = self.round.board.take();
        for p in &mut self.players {
            if let Some(hole) = p.hole.take() {
                cards.extend(hole.as_array());
            }
            p.bet = 0;
        }
        self.deck.discard(cards)?;
        self.round.in_progress = false;
        self.round.street = Street::Preflop;

        let gone: Vec<usize> = (0..self.players.len())
            .filter(|&s| self.players[s].stack == 0 || self.players[s].leaving)
            .collect();
        Ok(self.remove_seats(&gone))
    }

    fn remove_seats(&mut self, seats: &[usize]) -> Vec<Player<S>> {
        if seats.is_empty() {
            return Vec::new();
        }
        let dealer = self.round.dealer;
        let mut removed = Vec::with_capacity(seats.len());
        let mut kept = Vec::with_capacity(self.players.len());
        let mut kept_before_dealer = 0;
        let mut dealer_kept = false;
        for (seat, p) in std::mem::take(&mut self.players).into_iter().enumerate() {
            if seats.contains(&seat) {
                removed.push(p);
                continue;
            }
            if let Some(d) = dealer {
                if seat < d {
                    kept_before_dealer += 1;
                } else if seat == d {
                    dealer_kept = true;
                }
            }
            kept.push(p);
        }
        self.players = kept;

        // Keep the button where the next hand expects it.
        self.round.dealer = match dealer {
            _ if self.players.is_empty() => None,
            None => None,
            Some(_) if dealer_kept => Some(kept_before_dealer),
            Some(_) => Some((kept_before_dealer + self.players.len() - 1) % self.players.len()),
        };
        removed
    }

    fn next_funded(&self, from: usize) -> usize {
        let n = self.players.len();
        (1..=n).map(|i| (from + i) % n).find(|&s| self.players[s].stack > 0).unwrap_or(from)
    }

    /// Next seat clockwise from `from` that still owes a decision this street.
    fn next_to_act(&self, from: usize) -> usize {
        let n = self.players.len();
        (1..=n)
            .map(|i| (from + i) % n)
            .find(|&s| {
                let p = &self.players[s];
                p.can_act() && (!p.acted || p.bet < self.round.current_bet)
            })
            .unwrap_or(from)
    }

    fn betting_closed(&self) -> bool {
        if self.players.iter().filter(|p| p.in_hand()).count() <= 1 {
            return true;
        }
        let active: Vec<&Player<S>> = self.players.iter().filter(|p| p.can_act()).collect();
        match active.as_slice() {
            [] => true,
            // Everyone else is all-in; nobody is left to bet against.
            [only] if only.bet >= self.round.current_bet => true,
            _ => active.iter().all(|p| p.acted && p.bet == self.round.current_bet),
        }
    }
}
