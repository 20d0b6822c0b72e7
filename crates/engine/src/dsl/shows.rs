use crate::config::params::{
    NotrumpDefenseParams, StaymanParams, StrongClubDefenseParams, StrongTwoClubsParams,
    TwoSuitedParams,
};
use crate::conventions::{catalog, notrump, ConventionId};
use crate::dsl::{Band, Param};
use crate::kernel::{AuctionModel, HandConstraint, PointRanges};
use std::fmt::Debug;
use types::{Call, Shape, Suit};

pub trait Shows: Send + Sync + Debug {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint>;
}

fn opponent_suits(auction: &AuctionModel) -> Vec<Suit> {
    Suit::ALL
        .into_iter()
        .filter(|&suit| {
            auction.rho_hand().has_shown_suit(suit) || auction.lho_hand().has_shown_suit(suit)
        })
        .collect()
}

/// Requires a stopper in each suit the opponents have shown.
/// Used for notrump overcalls.
#[derive(Debug)]
pub struct ShowStopperInOpponentSuit;
impl Shows for ShowStopperInOpponentSuit {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        opponent_suits(auction)
            .into_iter()
            .map(HandConstraint::StopperIn)
            .collect()
    }
}

/// Shows 3+ cards in each suit that opponents have NOT shown.
/// Used for takeout doubles to indicate support for all unbid suits.
#[derive(Debug)]
pub struct ShowSupportForUnbidSuits;
impl Shows for ShowSupportForUnbidSuits {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        Suit::ALL
            .iter()
            .filter(|&&suit| {
                !auction.rho_hand().has_shown_suit(suit) && !auction.lho_hand().has_shown_suit(suit)
            })
            .map(|&suit| HandConstraint::MinLength(suit, 3))
            .collect()
    }
}

/// At most this many cards in each suit the opponents have shown.
#[derive(Debug)]
pub struct ShowMaxLengthInOpponentSuit(pub Param);
impl Shows for ShowMaxLengthInOpponentSuit {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        let max = (self.0)(auction);
        opponent_suits(auction)
            .into_iter()
            .map(|suit| HandConstraint::MaxLength(suit, max))
            .collect()
    }
}

#[derive(Debug)]
pub struct ShowMinHcp(pub u8);
impl Shows for ShowMinHcp {
    fn show(&self, _auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        vec![HandConstraint::MinHcp(self.0)]
    }
}

#[derive(Debug)]
pub struct ShowMinHcpFrom(pub Param);
impl Shows for ShowMinHcpFrom {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        vec![HandConstraint::MinHcp((self.0)(auction))]
    }
}

#[derive(Debug)]
pub struct ShowMaxHcp(pub u8);
impl Shows for ShowMaxHcp {
    fn show(&self, _auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        vec![HandConstraint::MaxHcp(self.0)]
    }
}

#[derive(Debug)]
pub struct ShowHcpRange(pub u8, pub u8);
impl Shows for ShowHcpRange {
    fn show(&self, _auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        vec![
            HandConstraint::MinHcp(self.0),
            HandConstraint::MaxHcp(self.1),
        ]
    }
}

/// An HCP range read from configuration.
#[derive(Debug)]
pub struct ShowHcpBand(pub Band);
impl Shows for ShowHcpBand {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        let (min, max) = (self.0)(auction);
        ShowHcpRange(min, max).show(auction, call)
    }
}

/// Our HCP given partner's shown minimum and a target for the partnership.
#[derive(Debug)]
pub struct ShowCombinedHcpRange(pub u8, pub u8);
impl Shows for ShowCombinedHcpRange {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        let partner_min = auction.partner_min_hcp();
        vec![
            HandConstraint::MinHcp(self.0.saturating_sub(partner_min)),
            HandConstraint::MaxHcp(self.1.saturating_sub(partner_min)),
        ]
    }
}

/// One of the configured balanced patterns.
#[derive(Debug)]
pub struct ShowBalanced;
impl Shows for ShowBalanced {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        vec![HandConstraint::Balanced {
            with_5422: auction.config.general.include_5422_in_balanced,
        }]
    }
}

#[derive(Debug)]
pub struct ShowSemiBalanced;
impl Shows for ShowSemiBalanced {
    fn show(&self, _auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        vec![HandConstraint::MaxUnbalancedness(Shape::SemiBalanced)]
    }
}

#[derive(Debug)]
pub struct ShowMinSuitLength(pub u8);
impl Shows for ShowMinSuitLength {
    fn show(&self, _auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        if let Some(suit) = call.suit() {
            return vec![HandConstraint::MinLength(suit, self.0)];
        }
        vec![]
    }
}

#[derive(Debug)]
pub struct ShowMinSuitLengthFrom(pub Param);
impl Shows for ShowMinSuitLengthFrom {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        ShowMinSuitLength((self.0)(auction)).show(auction, call)
    }
}

#[derive(Debug)]
pub struct ShowExactSuitLength(pub u8);
impl Shows for ShowExactSuitLength {
    fn show(&self, _auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        if let Some(suit) = call.suit() {
            return vec![
                HandConstraint::MinLength(suit, self.0),
                HandConstraint::MaxLength(suit, self.0),
            ];
        }
        vec![]
    }
}

#[derive(Debug)]
pub struct ShowMaxLength(pub u8);
impl Shows for ShowMaxLength {
    fn show(&self, _auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        if let Some(suit) = call.suit() {
            return vec![HandConstraint::MaxLength(suit, self.0)];
        }
        vec![]
    }
}

/// Four cards for a one-level bid, five above it.
#[derive(Debug)]
pub struct ShowNaturalLength;
impl Shows for ShowNaturalLength {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        let length = if call.level() == Some(1) { 4 } else { 5 };
        ShowMinSuitLength(length).show(auction, call)
    }
}

#[derive(Debug)]
pub struct ShowSufficientValues;
impl Shows for ShowSufficientValues {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        let (level, strain) = match call {
            Call::Bid { level, strain } => (*level, *strain),
            _ => return vec![],
        };

        let min_combined_points = PointRanges::min_points_for_bid(level, strain);
        let needed_hcp = min_combined_points.saturating_sub(auction.partner_min_hcp());

        vec![HandConstraint::MinHcp(needed_hcp)]
    }
}

#[derive(Debug)]
pub struct ShowOpeningSuitLength;
impl Shows for ShowOpeningSuitLength {
    fn show(&self, _auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        if let Some(suit) = call.suit() {
            let length = if suit.is_major() { 5 } else { 3 };
            return vec![HandConstraint::MinLength(suit, length)];
        }
        vec![]
    }
}

#[derive(Debug)]
pub struct ShowRuleOfFifteen;
impl Shows for ShowRuleOfFifteen {
    fn show(&self, _auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        vec![HandConstraint::RuleOfFifteen]
    }
}

#[derive(Debug)]
pub struct ShowThreeOfTopFiveOrBetter;
impl Shows for ShowThreeOfTopFiveOrBetter {
    fn show(&self, _auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        call.suit()
            .map(HandConstraint::ThreeOfTopFiveOrBetter)
            .into_iter()
            .collect()
    }
}

#[derive(Debug)]
pub struct ShowSupportValues;
impl Shows for ShowSupportValues {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        if let Call::Bid { level, .. } = call {
            let min_combined_points = PointRanges::min_points_for_raise(*level);
            let needed_hcp = min_combined_points.saturating_sub(auction.partner_min_hcp());
            return vec![HandConstraint::MinHcp(needed_hcp)];
        }
        vec![]
    }
}

#[derive(Debug)]
pub struct ShowSupportLength;
impl Shows for ShowSupportLength {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        if let Some(suit) = call.suit() {
            let needed_len = auction
                .partner_hand()
                .length_needed_to_reach_target(suit, 8);
            return vec![HandConstraint::MinLength(suit, needed_len)];
        }
        vec![]
    }
}

#[derive(Debug)]
pub struct ShowMinLengthInPartnerSuit(pub Param);
impl Shows for ShowMinLengthInPartnerSuit {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        auction
            .partner_suit()
            .map(|suit| HandConstraint::MinLength(suit, (self.0)(auction)))
            .into_iter()
            .collect()
    }
}

#[derive(Debug)]
pub struct ShowExactLengthInPartnerSuit(pub u8);
impl Shows for ShowExactLengthInPartnerSuit {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        match auction.partner_suit() {
            Some(suit) => vec![
                HandConstraint::MinLength(suit, self.0),
                HandConstraint::MaxLength(suit, self.0),
            ],
            None => vec![],
        }
    }
}

#[derive(Debug)]
pub struct ShowSupportPointsInPartnerSuit(pub Param);
impl Shows for ShowSupportPointsInPartnerSuit {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        auction
            .partner_suit()
            .map(|suit| HandConstraint::MinSupportPoints(suit, (self.0)(auction)))
            .into_iter()
            .collect()
    }
}

/// Length in each major nobody has bid yet.
#[derive(Debug)]
pub struct ShowMinLengthInUnbidMajors(pub u8);
impl Shows for ShowMinLengthInUnbidMajors {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        Suit::MAJORS
            .into_iter()
            .filter(|&major| !auction.auction.iter().any(|(_, call)| call.suit() == Some(major)))
            .map(|major| HandConstraint::MinLength(major, self.0))
            .collect()
    }
}

#[derive(Debug)]
pub struct ShowBetterContractIsRemote;
impl Shows for ShowBetterContractIsRemote {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        if !call.is_pass() {
            return vec![];
        }
        let Some(partner_max_hcp) = auction.partner_hand().max_hcp else {
            return vec![];
        };
        let our_partnership = auction.auction.current_partnership();
        let contract = match auction.auction.current_contract() {
            Some(c) if c.belongs_to(our_partnership) => c,
            _ => return vec![],
        };

        if contract.is_grand_slam() {
            return vec![];
        }

        let goal = if contract.is_slam() {
            PointRanges::GRAND_SLAM_THRESHOLD
        } else if contract.is_game() {
            PointRanges::SLAM_THRESHOLD
        } else {
            PointRanges::GAME_THRESHOLD
        };

        let threshold = (goal - 1).saturating_sub(partner_max_hcp);
        vec![HandConstraint::MaxHcp(threshold)]
    }
}

/// What the convention's ask promises, as hand constraints.
#[derive(Debug)]
pub struct ShowConventionMeaning(pub ConventionId);
impl Shows for ShowConventionMeaning {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        catalog()
            .describe(self.0, &auction.auction, auction.config, call)
            .map(|meaning| meaning.constraints())
            .unwrap_or_default()
    }
}

/// What a reply to partner's ask encodes. Empty when the reply is outside
/// the convention's scheme.
#[derive(Debug)]
pub struct ShowDecodedReply(pub ConventionId);
impl Shows for ShowDecodedReply {
    fn show(&self, auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        catalog()
            .decode(self.0, &auction.auction, auction.config, call)
            .map(|meaning| meaning.constraints())
            .unwrap_or_default()
    }
}

/// The strength each convention's ask requires.
#[derive(Debug)]
pub struct ShowAskStrength(pub ConventionId);
impl Shows for ShowAskStrength {
    fn show(&self, auction: &AuctionModel, _call: &Call) -> Vec<HandConstraint> {
        let config = auction.config;
        match self.0 {
            ConventionId::StrongTwoClubs => {
                let params: StrongTwoClubsParams = config.params(self.0);
                vec![HandConstraint::MinHcp(params.min_hcp)]
            }
            ConventionId::Stayman => {
                let params: StaymanParams = config.params(self.0);
                let min = match notrump::partner_notrump_opening(&auction.auction) {
                    Some(2) => params.over_two_nt_min_hcp,
                    _ => params.min_hcp,
                };
                vec![HandConstraint::MinHcp(min)]
            }
            ConventionId::Michaels | ConventionId::UnusualNotrump => {
                let params: TwoSuitedParams = config.params(self.0);
                vec![
                    HandConstraint::MinHcp(params.min_hcp),
                    HandConstraint::MaxHcp(params.max_hcp),
                ]
            }
            ConventionId::Dont | ConventionId::Cappelletti | ConventionId::Landy => {
                let params: NotrumpDefenseParams = config.params(self.0);
                vec![HandConstraint::MinHcp(params.min_hcp)]
            }
            ConventionId::StrongClubDefense => {
                let params: StrongClubDefenseParams = config.params(self.0);
                vec![HandConstraint::MinHcp(params.min_hcp)]
            }
            ConventionId::Blackwood | ConventionId::RomanKeyCard | ConventionId::Gerber => {
                vec![HandConstraint::MinHcp(
                    PointRanges::SLAM_THRESHOLD.saturating_sub(auction.partner_min_hcp()),
                )]
            }
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use types::{Auction, Position};

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    #[test]
    fn test_combined_range_uses_partner_minimum() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P");
        let model = AuctionModel::from_auction(&auction, &config);
        assert_eq!(
            ShowCombinedHcpRange(25, 30).show(&model, &call("3N")),
            vec![HandConstraint::MinHcp(10), HandConstraint::MaxHcp(15)]
        );
    }

    #[test]
    fn test_partner_suit_shows() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H 1S");
        let model = AuctionModel::from_auction(&auction, &config);
        fn four(_: &AuctionModel) -> u8 {
            4
        }
        assert_eq!(
            ShowMinLengthInPartnerSuit(four).show(&model, &call("2S")),
            vec![HandConstraint::MinLength(Suit::Hearts, 4)]
        );
        assert_eq!(
            ShowStopperInOpponentSuit.show(&model, &call("2N")),
            vec![HandConstraint::StopperIn(Suit::Spades)]
        );
    }

    #[test]
    fn test_unbid_majors() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1C 1H");
        let model = AuctionModel::from_auction(&auction, &config);
        assert_eq!(
            ShowMinLengthInUnbidMajors(4).show(&model, &Call::Double),
            vec![HandConstraint::MinLength(Suit::Spades, 4)]
        );
    }

    #[test]
    fn test_stayman_strength_over_two_notrump() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "2N P");
        let model = AuctionModel::from_auction(&auction, &config);
        assert_eq!(
            ShowAskStrength(ConventionId::Stayman).show(&model, &call("3C")),
            vec![HandConstraint::MinHcp(4)]
        );
    }
}
