//! The strong artificial 2♣ opening.

use super::{Meaning, Recognizer, ResponseGenerator};
use crate::config::params::StrongTwoClubsParams;
use crate::config::ConventionConfig;
use crate::conventions::ConventionId;
use types::{Auction, Call, Hand, Strain, Suit};

const TWO_CLUBS: Call = Call::Bid {
    level: 2,
    strain: Strain::Clubs,
};
const WAITING: Call = Call::Bid {
    level: 2,
    strain: Strain::Diamonds,
};

/// Suits responder may show as a positive reply, in the order they are tried.
const POSITIVE_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

#[derive(Debug, Clone, Copy)]
pub struct StrongTwoClubs;

impl StrongTwoClubs {
    fn positive_suit(hand: &Hand, params: &StrongTwoClubsParams) -> Option<Suit> {
        if hand.hcp() < params.positive_min_hcp {
            return None;
        }
        let mut best: Option<Suit> = None;
        for suit in POSITIVE_SUITS {
            if hand.length(suit) < 5 || hand.top_honors(suit, 3) < 2 {
                continue;
            }
            if best.map_or(true, |b| hand.length(suit) > hand.length(b)) {
                best = Some(suit);
            }
        }
        best
    }
}

impl Recognizer for StrongTwoClubs {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        *call == TWO_CLUBS && !auction.is_opened()
    }

    fn decode(&self, _auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        (*reply == WAITING).then_some(Meaning::Waiting)
    }
}

impl ResponseGenerator for StrongTwoClubs {
    fn reply(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let params: StrongTwoClubsParams = config.params(ConventionId::StrongTwoClubs);
        if let Some(suit) = Self::positive_suit(hand, &params) {
            return auction.minimum_bid_in(suit.into());
        }
        if hand.hcp() >= params.positive_min_hcp && hand.is_balanced_for(&config.balanced_shapes()) {
            return Some(Call::Bid {
                level: 2,
                strain: Strain::NoTrump,
            });
        }
        Some(WAITING)
    }

    /// Opener's rebid after the waiting reply.
    fn continuation(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (_, _, reply) = super::answered_ask(auction)?;
        if reply != WAITING {
            return None;
        }
        if hand.is_balanced_for(&config.balanced_shapes()) {
            match hand.hcp() {
                22..=24 => return Some(Call::Bid { level: 2, strain: Strain::NoTrump }),
                25..=27 => return Some(Call::Bid { level: 3, strain: Strain::NoTrump }),
                _ => {}
            }
        }
        // Longest suit, the higher-ranking of equals.
        let suit = hand.longest_suits().into_iter().max()?;
        auction.minimum_bid_in(suit.into())
    }
}
