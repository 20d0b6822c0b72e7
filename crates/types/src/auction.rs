use crate::board::{Partnership, Position, Vulnerability};
use crate::call::Call;
use crate::contract::{Contract, DoubleStatus};
use crate::error::AuctionError;
use crate::strain::Strain;
use serde::{Deserialize, Serialize};

/// A call together with the seat that made it. The seat is fixed when the
/// call is appended and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatedCall {
    pub seat: Position,
    pub call: Call,
}

/// Where the auction stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionState {
    /// No contract call has been made yet.
    Open,
    /// A contract call stands, with its current doubling state.
    Contested(Contract),
    /// Completed by the trailing-pass rule; `None` when passed out.
    Ended(Option<Contract>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Auction {
    pub dealer: Position,
    pub vulnerability: Vulnerability,
    /// The seat whose partnership is "we" for relative reasoning.
    pub our_seat: Position,
    calls: Vec<SeatedCall>,
}

impl Auction {
    pub fn new(dealer: Position) -> Self {
        Self {
            dealer,
            vulnerability: Vulnerability::None,
            our_seat: dealer,
            calls: Vec::new(),
        }
    }

    /// A fresh auction dealt by `our_seat`, with vulnerability given
    /// relative to that seat's partnership.
    pub fn start(our_seat: Position, vulnerable_we: bool, vulnerable_they: bool) -> Self {
        Self {
            dealer: our_seat,
            vulnerability: Vulnerability::from_sides(
                our_seat.partnership(),
                vulnerable_we,
                vulnerable_they,
            ),
            our_seat,
            calls: Vec::new(),
        }
    }

    pub fn with_dealer(mut self, dealer: Position) -> Self {
        self.dealer = dealer;
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerability = vulnerability;
        self
    }

    pub fn reseat(&mut self, our_seat: Position) {
        self.our_seat = our_seat;
    }

    /// Replays `calls` from `dealer`, failing on the first illegal one.
    pub fn from_calls(dealer: Position, calls: &[Call]) -> Result<Self, AuctionError> {
        let mut auction = Self::new(dealer);
        for call in calls {
            auction.add_call(*call)?;
        }
        Ok(auction)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Call)> {
        self.calls.iter().map(|entry| (entry.seat, &entry.call))
    }

    pub fn entries(&self) -> &[SeatedCall] {
        &self.calls
    }

    pub fn calls(&self) -> impl DoubleEndedIterator<Item = Call> + '_ {
        self.calls.iter().map(|entry| entry.call)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Index of the next call to be made.
    pub fn turn(&self) -> usize {
        self.calls.len()
    }

    /// The prefix of this auction holding its first `len` calls.
    pub fn truncated(&self, len: usize) -> Auction {
        Auction {
            calls: self.calls[..len.min(self.calls.len())].to_vec(),
            ..self.clone()
        }
    }

    /// Append a call for the seat on turn. Returns the index of the call.
    pub fn add_call(&mut self, call: Call) -> Result<usize, AuctionError> {
        if self.is_finished() {
            return Err(AuctionError::Ended);
        }
        if !self.is_legal(&call) {
            return Err(AuctionError::Illegal { call });
        }
        let seat = self.current_player();
        self.calls.push(SeatedCall { seat, call });
        Ok(self.calls.len() - 1)
    }

    /// Append a call, checking that `seat` is the one on turn.
    pub fn add_seated(&mut self, seat: Position, call: Call) -> Result<usize, AuctionError> {
        let expected = self.current_player();
        if seat != expected {
            return Err(AuctionError::OutOfTurn {
                expected,
                actual: seat,
            });
        }
        self.add_call(call)
    }

    /// Parse and add a single call from a string like "1C", "P", or "X".
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bid(&mut self, s: &str) {
        let call = s.parse().expect("invalid call");
        self.add_call(call).expect("illegal call");
    }

    /// Parse and add multiple space-separated calls like "P 1C P".
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bids(&mut self, s: &str) {
        for token in s.split_whitespace() {
            self.bid(token);
        }
    }

    /// Build an auction from space-separated calls like "P 1C P 2C".
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bidding(dealer: Position, calls: &str) -> Self {
        let mut auction = Self::new(dealer);
        auction.bids(calls);
        auction
    }

    pub fn current_partnership(&self) -> Partnership {
        self.current_player().partnership()
    }

    pub fn current_player(&self) -> Position {
        match self.calls.last() {
            Some(entry) => entry.seat.next(),
            None => self.dealer,
        }
    }

    /// Seat number (1..=4) of the player on turn, counted from the dealer.
    pub fn current_seat(&self) -> u8 {
        (self.calls.len() % 4) as u8 + 1
    }

    pub fn is_vulnerable(&self, seat: Position) -> bool {
        self.vulnerability.is_vulnerable(seat)
    }

    pub fn current_contract(&self) -> Option<Contract> {
        let mut last_bid = None;
        let mut double_status = DoubleStatus::Undoubled;

        // First player to name each strain, per side.
        let mut first_bidders: [[Option<Position>; 5]; 2] = [[None; 5]; 2];

        for (position, call) in self.iter() {
            match call {
                Call::Bid { level, strain } => {
                    let slot = &mut first_bidders[position.partnership().idx()][strain.idx()];
                    let declarer = *slot.get_or_insert(position);
                    last_bid = Some((*level, *strain, declarer));
                    double_status = DoubleStatus::Undoubled;
                }
                Call::Double => double_status = DoubleStatus::Doubled,
                Call::Redouble => double_status = DoubleStatus::Redoubled,
                Call::Pass => {}
            }
        }

        last_bid.map(|(level, strain, declarer)| Contract {
            level,
            strain,
            double_status,
            declarer,
        })
    }

    pub fn state(&self) -> AuctionState {
        if self.is_finished() {
            AuctionState::Ended(self.current_contract())
        } else {
            match self.current_contract() {
                Some(contract) => AuctionState::Contested(contract),
                None => AuctionState::Open,
            }
        }
    }

    /// Three passes after a contract call, or four passes with none.
    pub fn is_finished(&self) -> bool {
        let len = self.calls.len();
        if len < 4 {
            return false;
        }
        if !self.calls.iter().any(|e| e.call.is_bid()) {
            return true;
        }
        self.calls[len - 3..].iter().all(|e| e.call.is_pass())
    }

    pub fn is_complete(&self) -> bool {
        self.is_finished()
    }

    /// True once any contract call has been made.
    pub fn is_opened(&self) -> bool {
        self.calls.iter().any(|e| e.call.is_bid())
    }

    pub fn opener(&self) -> Option<Position> {
        self.opening().map(|(position, _)| position)
    }

    /// The first contract call and who made it.
    pub fn opening(&self) -> Option<(Position, Call)> {
        self.calls
            .iter()
            .find(|e| e.call.is_bid())
            .map(|e| (e.seat, e.call))
    }

    /// Returns the last bid (not pass/double/redouble) and who made it.
    pub fn last_bid(&self) -> Option<(Position, Call)> {
        self.calls
            .iter()
            .rev()
            .find(|e| e.call.is_bid())
            .map(|e| (e.seat, e.call))
    }

    pub fn last_call(&self) -> Option<SeatedCall> {
        self.calls.last().copied()
    }

    /// The most recent call made by `seat`.
    pub fn last_call_by(&self, seat: Position) -> Option<Call> {
        self.calls
            .iter()
            .rev()
            .find(|e| e.seat == seat)
            .map(|e| e.call)
    }

    /// The most recent non-pass call made by `seat`.
    pub fn last_action_by(&self, seat: Position) -> Option<Call> {
        self.calls
            .iter()
            .rev()
            .find(|e| e.seat == seat && !e.call.is_pass())
            .map(|e| e.call)
    }

    pub fn calls_by(&self, seat: Position) -> impl Iterator<Item = Call> + '_ {
        self.calls
            .iter()
            .filter(move |e| e.seat == seat)
            .map(|e| e.call)
    }

    /// Returns the minimum legal bid for the given strain.
    pub fn minimum_bid_in(&self, strain: Strain) -> Option<Call> {
        if self.is_finished() {
            return None;
        }
        let Some((_, Call::Bid {
            level,
            strain: last_strain,
        })) = self.last_bid()
        else {
            return Some(Call::Bid { level: 1, strain });
        };
        let min_level = if strain > last_strain { level } else { level + 1 };
        (min_level <= 7).then_some(Call::Bid {
            level: min_level,
            strain,
        })
    }

    /// Returns the index of the last call made by the given position.
    pub fn last_call_index_for_position(&self, position: Position) -> Option<usize> {
        self.calls.iter().rposition(|e| e.seat == position)
    }

    /// Returns true if a player has made any non-Pass call (bid, double, or redouble).
    pub fn player_has_acted(&self, player: Position) -> bool {
        self.iter()
            .any(|(pos, call)| pos == player && !matches!(call, Call::Pass))
    }

    /// Returns true if a partnership has made at least one bid (not pass/double/redouble).
    pub fn partnership_has_bid(&self, partnership: Partnership) -> bool {
        self.iter()
            .any(|(pos, call)| pos.partnership() == partnership && call.is_bid())
    }

    pub fn final_contract(&self) -> Option<Contract> {
        if self.is_complete() {
            self.current_contract()
        } else {
            None
        }
    }

    /// Whether `call` may be made next by the seat on turn.
    pub fn is_legal(&self, call: &Call) -> bool {
        if self.is_finished() {
            return false;
        }
        let side = self.current_partnership();
        match call {
            Call::Pass => true,
            Call::Bid { level, .. } => {
                (1..=7).contains(level)
                    && self
                        .last_bid()
                        .map_or(true, |(_, last)| call.outranks(&last))
            }
            Call::Double => self.current_contract().is_some_and(|contract| {
                contract.double_status == DoubleStatus::Undoubled && !contract.belongs_to(side)
            }),
            Call::Redouble => self.current_contract().is_some_and(|contract| {
                contract.double_status == DoubleStatus::Doubled && contract.belongs_to(side)
            }),
        }
    }

    /// Return all calls that would be legal as the next call in this auction.
    pub fn legal_calls(&self) -> Vec<Call> {
        if self.is_finished() {
            return Vec::new();
        }
        std::iter::once(Call::Pass)
            .chain(Call::all_bids())
            .chain([Call::Double, Call::Redouble])
            .filter(|call| self.is_legal(call))
            .collect()
    }

    /// Flat token sequence, e.g. `["1H", "P", "2H"]`.
    pub fn tokens(&self) -> Vec<String> {
        self.calls().map(Call::render).collect()
    }
}
