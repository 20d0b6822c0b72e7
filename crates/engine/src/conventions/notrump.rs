//! Responses to partner's notrump opening: Stayman and Jacoby transfers.

use super::{answered_ask, ConventionId, Meaning, Recognizer, ResponseGenerator};
use crate::config::params::NotrumpOpeningParams;
use crate::config::ConventionConfig;
use crate::kernel::PointRanges;
use types::{Auction, Call, Hand, Strain, Suit};

/// Level of partner's notrump opening when we are answering it directly
/// and RHO passed.
pub fn partner_notrump_opening(auction: &Auction) -> Option<u8> {
    let me = auction.current_player();
    let (opener, opening) = auction.opening()?;
    let (_, last_bid) = auction.last_bid()?;
    let last = auction.last_call()?;
    if opener != me.partner() || opening != last_bid || !last.call.is_pass() || last.seat != me.rho() {
        return None;
    }
    match opening {
        Call::Bid {
            level: level @ (1 | 2),
            strain: Strain::NoTrump,
        } => Some(level),
        _ => None,
    }
}

fn opener_minimum(config: &ConventionConfig, level: u8) -> u8 {
    let params: NotrumpOpeningParams = config.params(ConventionId::NotrumpOpenings);
    params.range(level).map_or(15, |(min, _)| min)
}

/// The level of the notrump opening our completed ask was made over.
fn asked_over(auction: &Auction) -> Option<u8> {
    let (before, _, _) = answered_ask(auction)?;
    partner_notrump_opening(&before)
}

fn place_contract(auction: &Auction, strain: Strain, level: u8) -> Call {
    let call = Call::Bid { level, strain };
    if auction.is_legal(&call) {
        call
    } else {
        Call::Pass
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Stayman;

impl Recognizer for Stayman {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        partner_notrump_opening(auction).is_some_and(|level| {
            *call
                == Call::Bid {
                    level: level + 1,
                    strain: Strain::Clubs,
                }
        })
    }

    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        Some(Meaning::MajorAsk)
    }

    fn decode(&self, auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let (_, ask) = auction.last_bid()?;
        if reply.level() != ask.level() {
            return None;
        }
        match reply.strain()? {
            Strain::Diamonds => Some(Meaning::MajorReply {
                hearts: false,
                spades: false,
            }),
            Strain::Hearts => Some(Meaning::MajorReply {
                hearts: true,
                spades: false,
            }),
            Strain::Spades => Some(Meaning::MajorReply {
                hearts: false,
                spades: true,
            }),
            _ => None,
        }
    }
}

impl ResponseGenerator for Stayman {
    fn reply(&self, auction: &Auction, _config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let (_, ask) = auction.last_bid()?;
        let level = ask.level()?;
        let strain = if hand.length(Suit::Hearts) >= 4 {
            Strain::Hearts
        } else if hand.length(Suit::Spades) >= 4 {
            Strain::Spades
        } else {
            Strain::Diamonds
        };
        Some(Call::Bid { level, strain })
    }

    fn continuation(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let opened = asked_over(auction)?;
        let (_, _, reply) = answered_ask(auction)?;
        let combined = hand.hcp() + opener_minimum(config, opened);
        let game = combined >= PointRanges::GAME_THRESHOLD;
        let invite = combined >= PointRanges::GAME_THRESHOLD - 2;

        let fit = reply
            .suit()
            .filter(|suit| suit.is_major() && hand.length(*suit) >= 4);
        let call = match fit {
            Some(major) if game => place_contract(auction, major.into(), 4),
            Some(major) if invite => place_contract(auction, major.into(), 3),
            _ if game => place_contract(auction, Strain::NoTrump, 3),
            _ if invite && opened == 1 => place_contract(auction, Strain::NoTrump, 2),
            _ => Call::Pass,
        };
        Some(call)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JacobyTransfers;

impl JacobyTransfers {
    fn target(call: &Call) -> Option<Suit> {
        match call.strain()? {
            Strain::Diamonds => Some(Suit::Hearts),
            Strain::Hearts => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl Recognizer for JacobyTransfers {
    fn recognizes(&self, auction: &Auction, _config: &ConventionConfig, call: &Call) -> bool {
        partner_notrump_opening(auction).is_some_and(|level| {
            call.level() == Some(level + 1) && Self::target(call).is_some()
        })
    }

    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, call: &Call) -> Option<Meaning> {
        Self::target(call).map(|to| Meaning::Transfer { to })
    }

    fn decode(&self, auction: &Auction, _config: &ConventionConfig, reply: &Call) -> Option<Meaning> {
        let (_, ask) = auction.last_bid()?;
        let suit = Self::target(&ask)?;
        (Some(*reply) == auction.minimum_bid_in(suit.into())).then_some(Meaning::Accepted { suit })
    }
}

impl ResponseGenerator for JacobyTransfers {
    fn reply(&self, auction: &Auction, _config: &ConventionConfig, _hand: &Hand) -> Option<Call> {
        let (_, ask) = auction.last_bid()?;
        auction.minimum_bid_in(Self::target(&ask)?.into())
    }

    fn continuation(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call> {
        let opened = asked_over(auction)?;
        let (_, ask, _) = answered_ask(auction)?;
        let suit = Self::target(&ask)?;
        let combined = hand.hcp() + opener_minimum(config, opened);
        let game = combined >= PointRanges::GAME_THRESHOLD;
        let invite = combined >= PointRanges::GAME_THRESHOLD - 2;
        let long = hand.length(suit) >= 6;

        let call = match (long, game, invite) {
            (true, true, _) => place_contract(auction, suit.into(), 4),
            (false, true, _) => place_contract(auction, Strain::NoTrump, 3),
            (true, false, true) => place_contract(auction, suit.into(), 3),
            (false, false, true) if opened == 1 => place_contract(auction, Strain::NoTrump, 2),
            _ => Call::Pass,
        };
        Some(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Position;

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    #[test]
    fn test_notrump_opening_detection() {
        assert_eq!(
            partner_notrump_opening(&Auction::bidding(Position::North, "1N P")),
            Some(1)
        );
        assert_eq!(
            partner_notrump_opening(&Auction::bidding(Position::North, "P P 2N P")),
            Some(2)
        );
        // A notrump response is not an opening.
        assert_eq!(
            partner_notrump_opening(&Auction::bidding(Position::North, "1C P 1N P")),
            None
        );
        assert_eq!(
            partner_notrump_opening(&Auction::bidding(Position::North, "1N 2H")),
            None
        );
    }

    #[test]
    fn test_stayman_over_both_notrumps() {
        let config = ConventionConfig::default();
        let over_one = Auction::bidding(Position::North, "1N P");
        let over_two = Auction::bidding(Position::North, "2N P");
        assert!(Stayman.recognizes(&over_one, &config, &call("2C")));
        assert!(Stayman.recognizes(&over_two, &config, &call("3C")));
        assert!(!Stayman.recognizes(&over_two, &config, &call("2C")));
    }

    #[test]
    fn test_stayman_replies() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P 2C P");
        // C.D.H.S
        let both = Hand::parse("A2.KQ2.AJ32.K432").unwrap();
        let spades = Hand::parse("A32.KQ2.AJ3.K432").unwrap();
        let none = Hand::parse("A32.KQ32.AJ3.K43").unwrap();
        assert_eq!(Stayman.reply(&auction, &config, &both), Some(call("2H")));
        assert_eq!(Stayman.reply(&auction, &config, &spades), Some(call("2S")));
        assert_eq!(Stayman.reply(&auction, &config, &none), Some(call("2D")));
        assert_eq!(
            Stayman.decode(&auction, &config, &call("2D")),
            Some(Meaning::MajorReply {
                hearts: false,
                spades: false
            })
        );
    }

    #[test]
    fn test_stayman_continuation_finds_the_fit() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P 2C P 2H P");
        // 11 hcp with four hearts.
        let hand = Hand::parse("32.K32.KJ32.A432").unwrap();
        assert_eq!(Stayman.continuation(&auction, &config, &hand), Some(call("4H")));

        let auction = Auction::bidding(Position::North, "1N P 2C P 2D P");
        assert_eq!(Stayman.continuation(&auction, &config, &hand), Some(call("3N")));
    }

    #[test]
    fn test_transfer_completion() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P 2D P");
        let hand = Hand::parse("A32.KQ2.AJ3.K432").unwrap();
        assert_eq!(JacobyTransfers.reply(&auction, &config, &hand), Some(call("2H")));
        assert_eq!(
            JacobyTransfers.decode(&auction, &config, &call("2H")),
            Some(Meaning::Accepted { suit: Suit::Hearts })
        );
        assert_eq!(JacobyTransfers.decode(&auction, &config, &call("3H")), None);
    }

    #[test]
    fn test_transfer_continuation() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P 2H P 2S P");
        let weak = Hand::parse("32.432.432.J5432").unwrap();
        let game_long = Hand::parse("2.K32.A2.KJ86543").unwrap();
        assert_eq!(JacobyTransfers.continuation(&auction, &config, &weak), Some(Call::Pass));
        assert_eq!(JacobyTransfers.continuation(&auction, &config, &game_long), Some(call("4S")));
    }
}
