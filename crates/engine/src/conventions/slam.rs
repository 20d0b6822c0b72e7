//! Ace and key-card asks: Blackwood, Roman Key Card Blackwood and Gerber.

use super::{answered_ask, catalog, mask_counts, ConventionId, Meaning, Recognizer, ResponseGenerator};
use crate::config::params::{KeyCardEncoding, KeyCardParams};
use crate::config::ConventionConfig;
use types::{Auction, Call, Hand, Partnership, Rank, Strain, Suit};

const BLACKWOOD: Call = Call::Bid {
    level: 4,
    strain: Strain::NoTrump,
};
const GERBER: Call = Call::Bid {
    level: 4,
    strain: Strain::Clubs,
};

fn bid(level: u8, strain: Strain) -> Call {
    Call::Bid { level, strain }
}

/// The last contract call made by `side`.
pub fn side_last_bid(auction: &Auction, side: Partnership) -> Option<Call> {
    auction
        .entries()
        .iter()
        .rev()
        .find(|entry| entry.seat.partnership() == side && entry.call.is_bid())
        .map(|entry| entry.call)
}

/// The last suit named by `side`, taken as the agreed trump suit.
pub fn side_last_suit(auction: &Auction, side: Partnership) -> Option<Suit> {
    auction
        .entries()
        .iter()
        .rev()
        .filter(|entry| entry.seat.partnership() == side)
        .find_map(|entry| entry.call.suit())
}

fn is_four_notrump_ask(auction: &Auction, config: &ConventionConfig, call: &Call) -> bool {
    if *call != BLACKWOOD || !auction.is_legal(call) {
        return false;
    }
    // 4NT after an answered Gerber ask is a sign-off.
    if catalog().answered(ConventionId::Gerber, auction, config).is_some() {
        return false;
    }
    side_last_bid(auction, auction.current_partnership())
        .and_then(|last| last.strain())
        .is_some_and(|strain| strain != Strain::NoTrump)
}

fn count_call(step: u8, level: u8, count: u8) -> Call {
    let strains = [Strain::Clubs, Strain::Diamonds, Strain::Hearts, Strain::Spades, Strain::NoTrump];
    bid(level, strains[(step + count) as usize % strains.len()])
}

#[derive(Debug, Clone, Copy)]
pub struct Blackwood;

impl Recognizer for Blackwood {
    fn recognizes(&self, auction: &Auction, config: &ConventionConfig, call: &Call) -> bool {
        is_four_notrump_ask(auction, config, call)
    }

    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        Some(Meaning::AceAsk)
    }

    fn decode(&self, _auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let mask = match reply {
            Call::Bid { level: 5, strain: Strain::Clubs } => 0b1_0001,
            Call::Bid { level: 5, strain: Strain::Diamonds } => 0b0_0010,
            Call::Bid { level: 5, strain: Strain::Hearts } => 0b0_0100,
            Call::Bid { level: 5, strain: Strain::Spades } => 0b0_1000,
            _ => return None,
        };
        Some(Meaning::Aces { mask })
    }
}

impl ResponseGenerator for Blackwood {
    fn reply(&self, _auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        Some(count_call(0, 5, hand.aces() % 4))
    }

    fn continuation(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (trump, missing) = missing_controls(ConventionId::Blackwood, auction, config, hand)?;
        Some(sign_off(auction, trump, missing, hand.hcp()))
    }
}

fn key_cards(hand: &Hand, trump: Suit) -> u8 {
    hand.aces() + u8::from(hand.has_card(trump, Rank::King))
}

#[derive(Debug, Clone, Copy)]
pub struct RomanKeyCard;

impl Recognizer for RomanKeyCard {
    fn recognizes(&self, auction: &Auction, config: &ConventionConfig, call: &Call) -> bool {
        is_four_notrump_ask(auction, config, call)
            && side_last_suit(auction, auction.current_partnership()).is_some()
    }

    fn describe(&self, auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        let trump = side_last_suit(auction, auction.current_partnership())?;
        Some(Meaning::KeyCardAsk { trump })
    }

    fn decode(&self, auction: &Auction, config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let trump = side_last_suit(auction, auction.current_partnership())?;
        let params: KeyCardParams = config.params(ConventionId::RomanKeyCard);
        let (clubs, diamonds) = match params.encoding {
            KeyCardEncoding::FourteenThirty => (0b1_0010, 0b0_1001),
            KeyCardEncoding::ThirtyFourteen => (0b0_1001, 0b1_0010),
        };
        let (mask, queen) = match reply {
            Call::Bid { level: 5, strain: Strain::Clubs } => (clubs, None),
            Call::Bid { level: 5, strain: Strain::Diamonds } => (diamonds, None),
            Call::Bid { level: 5, strain: Strain::Hearts } => (0b0_0100, Some(false)),
            Call::Bid { level: 5, strain: Strain::Spades } => (0b0_0100, Some(true)),
            _ => return None,
        };
        Some(Meaning::KeyCards { trump, mask, queen })
    }
}

impl ResponseGenerator for RomanKeyCard {
    fn reply(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let trump = side_last_suit(auction, auction.current_partnership())?;
        let params: KeyCardParams = config.params(ConventionId::RomanKeyCard);
        let keys = key_cards(hand, trump);
        let (one_or_four, zero_or_three) = match params.encoding {
            KeyCardEncoding::FourteenThirty => (Strain::Clubs, Strain::Diamonds),
            KeyCardEncoding::ThirtyFourteen => (Strain::Diamonds, Strain::Clubs),
        };
        let strain = match keys {
            1 | 4 => one_or_four,
            0 | 3 | 5 => zero_or_three,
            _ if hand.has_card(trump, Rank::Queen) => Strain::Spades,
            _ => Strain::Hearts,
        };
        Some(bid(5, strain))
    }

    fn continuation(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (trump, missing) = missing_controls(ConventionId::RomanKeyCard, auction, config, hand)?;
        Some(sign_off(auction, trump, missing, hand.hcp()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Gerber;

impl Recognizer for Gerber {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        if *call != GERBER {
            return false;
        }
        let Some(last) = auction.last_call() else {
            return false;
        };
        let me = auction.current_player();
        let partner_notrump = matches!(
            auction.last_bid(),
            Some((seat, Call::Bid { level: 1 | 2, strain: Strain::NoTrump })) if seat == me.partner()
        );
        partner_notrump && last.seat == me.rho() && last.call.is_pass()
    }

    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        Some(Meaning::AceAsk)
    }

    fn decode(&self, _auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let mask = match reply {
            Call::Bid { level: 4, strain: Strain::Diamonds } => 0b1_0001,
            Call::Bid { level: 4, strain: Strain::Hearts } => 0b0_0010,
            Call::Bid { level: 4, strain: Strain::Spades } => 0b0_0100,
            Call::Bid { level: 4, strain: Strain::NoTrump } => 0b0_1000,
            _ => return None,
        };
        Some(Meaning::Aces { mask })
    }
}

impl ResponseGenerator for Gerber {
    fn reply(&self, _auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        Some(count_call(1, 4, hand.aces() % 4))
    }

    fn continuation(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (trump, missing) = missing_controls(ConventionId::Gerber, auction, config, hand)?;
        Some(sign_off(auction, trump, missing, hand.hcp()))
    }
}

/// After our ask has been answered: the strain to play in and how many
/// aces (or key cards) the partnership is missing. An ambiguous reply is
/// resolved to the lowest count consistent with our own holding.
pub fn missing_controls(
    id: ConventionId,
    auction: &Auction,
    config: &ConventionConfig,
    hand: &Hand,
) -> Option<(Strain, u8)> {
    let (_, _, reply) = answered_ask(auction)?;
    catalog().answered(id, auction, config)?;
    let reply_context = auction.truncated(auction.len() - 2);
    let meaning = catalog().entry(id)?.recognizer.as_ref()?.decode(&reply_context, config, &reply)?;
    let side = auction.current_partnership();
    let (trump, ours, total, mask) = match meaning {
        Meaning::Aces { mask } => {
            let trump = match id {
                ConventionId::Gerber => Strain::NoTrump,
                _ => side_last_suit(&auction.truncated(auction.len() - 4), side)
                    .map(Strain::from)
                    .unwrap_or(Strain::NoTrump),
            };
            (trump, hand.aces(), 4, mask)
        }
        Meaning::KeyCards { trump, mask, .. } => (Strain::from(trump), key_cards(hand, trump), 5, mask),
        _ => return None,
    };
    let partner = mask_counts(mask).find(|&count| ours + count <= total)?;
    Some((trump, total - ours - partner))
}

/// The asker's placement once the missing controls are known. Two or more
/// missing stops at the five level (four for notrump), one or none bids
/// the small slam, none with grand-slam values bids the grand.
pub fn sign_off(auction: &Auction, trump: Strain, missing: u8, combined_points: u8) -> Call {
    let level = if missing >= 2 {
        let floor = if trump == Strain::NoTrump { 4 } else { 5 };
        if let Some((seat, Call::Bid { level, strain })) = auction.last_bid() {
            if seat.partnership() == auction.current_partnership() && strain == trump && level >= floor {
                return Call::Pass;
            }
        }
        match auction.minimum_bid_in(trump) {
            Some(Call::Bid { level, .. }) => level.max(floor),
            _ => return Call::Pass,
        }
    } else if missing == 0 && combined_points >= crate::kernel::PointRanges::GRAND_SLAM_THRESHOLD {
        7
    } else {
        6
    };
    let call = bid(level, trump);
    if auction.is_legal(&call) {
        call
    } else {
        Call::Pass
    }
}
