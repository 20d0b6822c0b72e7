//! Two-suited overcalls and the defenses against notrump and strong club
//! openings.

use super::{answered_ask, Meaning, Recognizer, ResponseGenerator, ShownSuits};
use crate::config::params::{StrongClubDefenseParams, StrongClubSystem};
use crate::config::ConventionConfig;
use crate::conventions::ConventionId;
use types::{Auction, Call, Hand, Strain, Suit};

const ONE_NOTRUMP: Call = Call::Bid {
    level: 1,
    strain: Strain::NoTrump,
};

/// The suit of RHO's one-level opening when we are directly over it and
/// have not acted.
pub fn rho_one_suit_opening(auction: &Auction) -> Option<Suit> {
    let me = auction.current_player();
    let last = auction.last_call()?;
    let (opener, opening) = auction.opening()?;
    if opener != me.rho() || last.seat != opener || last.call != opening {
        return None;
    }
    match opening {
        Call::Bid { level: 1, strain } => strain.to_suit(),
        _ => None,
    }
}

/// The opponents' opening when it is the only contract call so far and our
/// side has only passed.
pub fn defense_spot(auction: &Auction) -> Option<Call> {
    let side = auction.current_partnership();
    let (opener, opening) = auction.opening()?;
    let (_, last_bid) = auction.last_bid()?;
    if opener.partnership() == side || last_bid != opening {
        return None;
    }
    let quiet = auction
        .entries()
        .iter()
        .all(|entry| entry.call.is_pass() || (entry.seat == opener && entry.call == opening));
    quiet.then_some(opening)
}

fn notrump_defense_spot(auction: &Auction) -> bool {
    defense_spot(auction) == Some(ONE_NOTRUMP)
}

/// Whether the opponents' opening is a strong artificial club.
pub fn strong_club_spot(auction: &Auction, config: &ConventionConfig) -> bool {
    match defense_spot(auction) {
        Some(Call::Bid { level: 2, strain: Strain::Clubs }) => {
            config.is_enabled(ConventionId::StrongTwoClubs)
        }
        Some(Call::Bid { level: 1, strain: Strain::Clubs }) => {
            config.general.opponents_play_strong_club
        }
        _ => false,
    }
}

fn cheapest(auction: &Auction, suit: Suit) -> Option<Call> {
    auction.minimum_bid_in(suit.into())
}

/// The cheapest contract call available.
fn next_step(auction: &Auction) -> Option<Call> {
    Call::all_bids().find(|call| auction.is_legal(call))
}

/// The longer of two suits, `a` on ties.
fn longer(hand: &Hand, a: Suit, b: Suit) -> Suit {
    if hand.length(b) > hand.length(a) {
        b
    } else {
        a
    }
}

fn longest_of(hand: &Hand, suits: impl IntoIterator<Item = Suit>) -> Option<Suit> {
    suits.into_iter().fold(None, |best, suit| match best {
        Some(b) if hand.length(b) >= hand.length(suit) => Some(b),
        _ => Some(suit),
    })
}

/// Bid `suit` cheaply, or pass when partner's contract is already in it.
fn play_in(auction: &Auction, suit: Suit) -> Option<Call> {
    match auction.last_bid() {
        Some((seat, last)) if seat == auction.current_player().partner() && last.suit() == Some(suit) => {
            Some(Call::Pass)
        }
        _ => cheapest(auction, suit),
    }
}

fn two_suited(suits: ShownSuits, min_length: u8) -> Option<Meaning> {
    Some(Meaning::TwoSuited { suits, min_length })
}

/// Advancer's answer to a two-suiter anchored on `anchor` plus an unknown
/// second suit: pass with tolerance for the anchor, otherwise relay.
fn relay_or_pass(auction: &Auction, hand: &Hand, anchor: Suit) -> Option<Call> {
    if hand.length(anchor) >= 3 {
        Some(Call::Pass)
    } else {
        next_step(auction)
    }
}

/// Overcaller's placement after partner's relay: the longest suit among
/// `candidates`.
fn show_second_suit(auction: &Auction, hand: &Hand, candidates: Vec<Suit>) -> Option<Call> {
    let suit = longest_of(hand, candidates)?;
    play_in(auction, suit)
}

fn relay_decode(auction: &Auction, reply: &Call) -> Option<Meaning> {
    (Some(*reply) == next_step(auction)).then_some(Meaning::Relay)
}

#[derive(Debug, Clone, Copy)]
pub struct Michaels;

impl Michaels {
    fn shown(opened: Suit) -> ShownSuits {
        match opened {
            Suit::Clubs | Suit::Diamonds => ShownSuits::Both(Suit::Hearts, Suit::Spades),
            major => ShownSuits::WithMinor(major.other_of_kind()),
        }
    }
}

impl Recognizer for Michaels {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        rho_one_suit_opening(auction).is_some_and(|suit| {
            *call
                == Call::Bid {
                    level: 2,
                    strain: suit.into(),
                }
        })
    }

    fn describe(&self, auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        two_suited(Self::shown(rho_one_suit_opening(auction)?), 5)
    }

    fn decode(&self, auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let (_, cue) = auction.last_bid()?;
        let opened = cue.suit()?;
        let asks = opened.is_major()
            && *reply
                == Call::Bid {
                    level: 2,
                    strain: Strain::NoTrump,
                };
        asks.then_some(Meaning::Relay)
    }
}

impl ResponseGenerator for Michaels {
    fn reply(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (_, cue) = auction.last_bid()?;
        match cue.suit()? {
            Suit::Clubs | Suit::Diamonds => {
                cheapest(auction, longer(hand, Suit::Hearts, Suit::Spades))
            }
            major => {
                let other = major.other_of_kind();
                if hand.length(other) >= 3 {
                    cheapest(auction, other)
                } else {
                    // Ask for the minor.
                    Some(Call::Bid {
                        level: 2,
                        strain: Strain::NoTrump,
                    })
                }
            }
        }
    }

    fn continuation(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (_, cue, reply) = answered_ask(auction)?;
        if !cue.suit()?.is_major() || reply.strain() != Some(Strain::NoTrump) {
            return None;
        }
        cheapest(auction, longer(hand, Suit::Clubs, Suit::Diamonds))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UnusualNotrump;

impl UnusualNotrump {
    fn shown(opened: Suit) -> (Suit, Suit) {
        let mut unbid = Suit::ALL.into_iter().filter(|&suit| suit != opened);
        match (unbid.next(), unbid.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => (Suit::Clubs, Suit::Diamonds),
        }
    }
}

impl Recognizer for UnusualNotrump {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        rho_one_suit_opening(auction).is_some()
            && *call
                == Call::Bid {
                    level: 2,
                    strain: Strain::NoTrump,
                }
    }

    fn describe(&self, auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        let (a, b) = Self::shown(rho_one_suit_opening(auction)?);
        two_suited(ShownSuits::Both(a, b), 5)
    }
}

impl ResponseGenerator for UnusualNotrump {
    fn reply(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (_, opening) = auction.opening()?;
        let (a, b) = Self::shown(opening.suit()?);
        cheapest(auction, longer(hand, a, b))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Dont;

impl Recognizer for Dont {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        notrump_defense_spot(auction)
            && matches!(
                call,
                Call::Double
                    | Call::Bid {
                        level: 2,
                        strain: Strain::Clubs | Strain::Diamonds | Strain::Hearts | Strain::Spades
                    }
            )
    }

    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, call: &Call) -> Option<Meaning> {
        dont_meaning(call, Suit::Hearts)
    }

    fn decode(&self, auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let ask = auction.last_call_by(auction.current_player().partner())?;
        if matches!(ask.suit(), Some(Suit::Hearts | Suit::Spades)) {
            return None;
        }
        relay_decode(auction, reply)
    }
}

/// DONT-style meanings: double is a one-suiter other than spades, a suit
/// below `majors_at` shows it and a higher suit, `majors_at` shows both
/// majors and spades are natural.
fn dont_meaning(call: &Call, majors_at: Suit) -> Option<Meaning> {
    match call {
        Call::Double => Some(Meaning::OneSuited),
        Call::Bid { strain, .. } => {
            let suit = strain.to_suit()?;
            if suit == Suit::Spades {
                Some(Meaning::LongSuit { suit })
            } else if suit == majors_at {
                two_suited(ShownSuits::Both(Suit::Hearts, Suit::Spades), 4)
            } else if suit < majors_at {
                two_suited(ShownSuits::WithHigher(suit), 4)
            } else {
                None
            }
        }
        Call::Pass | Call::Redouble => None,
    }
}

fn dont_reply(auction: &Auction, hand: &Hand) -> Option<Call> {
    let ask = auction.last_call_by(auction.current_player().partner())?;
    match ask {
        Call::Double => next_step(auction),
        Call::Bid { strain, .. } => match strain.to_suit()? {
            // Natural, partner places the contract.
            Suit::Spades => None,
            // Both majors: choose between them.
            Suit::Hearts => play_in(auction, longer(hand, Suit::Hearts, Suit::Spades)),
            anchor => relay_or_pass(auction, hand, anchor),
        },
        _ => None,
    }
}

fn dont_continuation(auction: &Auction, hand: &Hand) -> Option<Call> {
    let (_, ask, reply) = answered_ask(auction)?;
    let relay = reply.is_bid();
    match ask {
        Call::Double if relay => {
            let suit = longest_of(hand, Suit::ALL.into_iter().filter(|&s| s != Suit::Spades))?;
            play_in(auction, suit)
        }
        Call::Bid { strain, .. } if relay && strain.is_minor() => {
            let anchor = strain.to_suit()?;
            show_second_suit(auction, hand, Suit::ALL.into_iter().filter(|&s| s > anchor).collect())
        }
        _ => None,
    }
}

impl ResponseGenerator for Dont {
    fn reply(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        dont_reply(auction, hand)
    }

    fn continuation(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        dont_continuation(auction, hand)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cappelletti;

impl Recognizer for Cappelletti {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        notrump_defense_spot(auction)
            && matches!(
                call,
                Call::Bid {
                    level: 2,
                    strain: Strain::Clubs | Strain::Diamonds | Strain::Hearts | Strain::Spades | Strain::NoTrump
                }
            )
    }

    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, call: &Call) -> Option<Meaning> {
        match call.strain()? {
            Strain::Clubs => Some(Meaning::OneSuited),
            Strain::Diamonds => two_suited(ShownSuits::Both(Suit::Hearts, Suit::Spades), 5),
            Strain::Hearts => two_suited(ShownSuits::WithMinor(Suit::Hearts), 5),
            Strain::Spades => two_suited(ShownSuits::WithMinor(Suit::Spades), 5),
            Strain::NoTrump => two_suited(ShownSuits::Both(Suit::Clubs, Suit::Diamonds), 5),
        }
    }

    fn decode(&self, auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let ask = auction.last_call_by(auction.current_player().partner())?;
        let relay = match ask.strain()? {
            Strain::Clubs => Call::Bid { level: 2, strain: Strain::Diamonds },
            Strain::Hearts | Strain::Spades => Call::Bid { level: 2, strain: Strain::NoTrump },
            _ => return None,
        };
        (*reply == relay).then_some(Meaning::Relay)
    }
}

impl ResponseGenerator for Cappelletti {
    fn reply(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let ask = auction.last_call_by(auction.current_player().partner())?;
        match ask.strain()? {
            Strain::Clubs => Some(Call::Bid { level: 2, strain: Strain::Diamonds }),
            Strain::Diamonds => cheapest(auction, longer(hand, Suit::Hearts, Suit::Spades)),
            Strain::Hearts | Strain::Spades => {
                let major = ask.suit()?;
                if hand.length(major) >= 3 {
                    Some(Call::Pass)
                } else {
                    Some(Call::Bid { level: 2, strain: Strain::NoTrump })
                }
            }
            Strain::NoTrump => cheapest(auction, longer(hand, Suit::Clubs, Suit::Diamonds)),
        }
    }

    fn continuation(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (_, ask, reply) = answered_ask(auction)?;
        match (ask.strain()?, reply.strain()?) {
            (Strain::Clubs, Strain::Diamonds) => {
                let suit = longest_of(hand, Suit::ALL)?;
                play_in(auction, suit)
            }
            (Strain::Hearts | Strain::Spades, Strain::NoTrump) => {
                cheapest(auction, longer(hand, Suit::Clubs, Suit::Diamonds))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Landy;

impl Recognizer for Landy {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        notrump_defense_spot(auction) && *call == (Call::Bid { level: 2, strain: Strain::Clubs })
    }

    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        two_suited(ShownSuits::Both(Suit::Hearts, Suit::Spades), 4)
    }
}

impl ResponseGenerator for Landy {
    fn reply(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        cheapest(auction, longer(hand, Suit::Hearts, Suit::Spades))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrongClubDefense;

impl StrongClubDefense {
    fn system(config: &ConventionConfig) -> StrongClubSystem {
        let params: StrongClubDefenseParams = config.params(ConventionId::StrongClubDefense);
        params.system
    }

    fn cheapest_notrump(auction: &Auction) -> Option<Call> {
        auction.minimum_bid_in(Strain::NoTrump)
    }
}

impl Recognizer for StrongClubDefense {
    fn recognizes(&self, auction: &Auction, config: &ConventionConfig, call: &Call) -> bool {
        if !strong_club_spot(auction, config) {
            return false;
        }
        match Self::system(config) {
            StrongClubSystem::Mathe => {
                *call == Call::Double || Some(*call) == Self::cheapest_notrump(auction)
            }
            StrongClubSystem::Dont => match call {
                Call::Double => true,
                Call::Bid { strain, .. } => strain
                    .to_suit()
                    .is_some_and(|suit| Some(*call) == cheapest(auction, suit)),
                _ => false,
            },
        }
    }

    fn describe(&self, _auction: &Auction, config: &ConventionConfig, call: &Call) -> Option<Meaning> {
        match Self::system(config) {
            StrongClubSystem::Mathe => match call {
                Call::Double => two_suited(ShownSuits::Both(Suit::Hearts, Suit::Spades), 5),
                _ => two_suited(ShownSuits::Both(Suit::Clubs, Suit::Diamonds), 5),
            },
            StrongClubSystem::Dont => dont_meaning(call, Suit::Hearts),
        }
    }

    fn decode(&self, auction: &Auction, config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let ask = auction.last_call_by(auction.current_player().partner())?;
        match Self::system(config) {
            StrongClubSystem::Dont if !matches!(ask.suit(), Some(Suit::Hearts | Suit::Spades)) => {
                relay_decode(auction, reply)
            }
            _ => None,
        }
    }
}

impl ResponseGenerator for StrongClubDefense {
    fn reply(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let ask = auction.last_call_by(auction.current_player().partner())?;
        match Self::system(config) {
            StrongClubSystem::Mathe => match ask {
                Call::Double => cheapest(auction, longer(hand, Suit::Hearts, Suit::Spades)),
                _ => cheapest(auction, longer(hand, Suit::Clubs, Suit::Diamonds)),
            },
            StrongClubSystem::Dont => dont_reply(auction, hand),
        }
    }

    fn continuation(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        match Self::system(config) {
            StrongClubSystem::Mathe => None,
            StrongClubSystem::Dont => dont_continuation(auction, hand),
        }
    }
}
