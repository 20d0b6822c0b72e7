//! Game-forcing sequences: slam replies, the strong 2♣ structure, opener's
//! rebids after Jacoby 2NT and the generic calls that keep a force alive.

use crate::conventions::ConventionId;
use crate::dsl::auction_predicates::{BidderOpened, PartnerLastAsked, RhoPassed};
use crate::dsl::call_predicates::{
    AtMostGame, BidderHasShownSuit, IsCheapest, IsLevel, IsNewSuit, IsNotrump, IsSuit,
    PartnerHasShownSuit,
};
use crate::dsl::planner::Planner;
use crate::dsl::rule::Rule;
use crate::dsl::shows::{
    ShowHcpRange, ShowMaxHcp, ShowMaxLength, ShowMinHcp, ShowMinSuitLength, ShowSemiBalanced,
    ShowStopperInOpponentSuit, ShowSupportLength, ShowThreeOfTopFiveOrBetter,
};
use crate::kernel::{AuctionModel, HandConstraint};
use crate::rule;
use crate::rules::conventional::{replies_and_continuations, ConventionAsk, SLAM_ASKS};
use types::{Call, Hand, Shape};

pub fn rules() -> Vec<Box<dyn Rule>> {
    let mut rules = replies_and_continuations(&SLAM_ASKS);
    rules.push(Box::new(ConventionAsk(ConventionId::Blackwood)));
    rules.push(Box::new(ConventionAsk(ConventionId::RomanKeyCard)));
    rules.extend(replies_and_continuations(&[ConventionId::StrongTwoClubs]));
    rules.extend(jacoby_rebids());
    rules.extend(continuation_rules());
    rules
}

fn jacoby_rebids() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(JacobyShortness),
        Box::new(JacobySideSuit),
        Box::new(JacobyThreeNotrump),
        Box::new(JacobyThreeMajor),
        Box::new(JacobyFourMajor),
    ]
}

/// The cheapest most descriptive call, used whenever a force would
/// otherwise end in a pass.
pub fn continuation_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ForcedRaise),
        Box::new(ForcedNewSuit),
        Box::new(ForcedNotrump),
        Box::new(ForcedRebid),
        Box::new(ForcedCheapest),
    ]
}

rule! {
    JacobyShortness: "Jacoby 2NT Rebid Shortness",
    tag: Reply(Jacoby2nt),
    auction: [BidderOpened, PartnerLastAsked(ConventionId::Jacoby2nt), RhoPassed],
    call: [IsLevel(3), IsNewSuit],
    shows: [ShowMaxLength(1)] // Singleton or void
}

rule! {
    JacobySideSuit: "Jacoby 2NT Rebid Side Suit",
    tag: Reply(Jacoby2nt),
    auction: [BidderOpened, PartnerLastAsked(ConventionId::Jacoby2nt), RhoPassed],
    call: [IsLevel(4), IsNewSuit],
    shows: [ShowMinSuitLength(5), ShowThreeOfTopFiveOrBetter]
}

rule! {
    JacobyThreeNotrump: "Jacoby 2NT Rebid 3NT",
    tag: Reply(Jacoby2nt),
    auction: [BidderOpened, PartnerLastAsked(ConventionId::Jacoby2nt), RhoPassed],
    call: [IsLevel(3), IsNotrump],
    shows: [ShowHcpRange(15, 17), ShowSemiBalanced]
}

rule! {
    JacobyThreeMajor: "Jacoby 2NT Rebid Major (3-level)",
    tag: Reply(Jacoby2nt),
    auction: [BidderOpened, PartnerLastAsked(ConventionId::Jacoby2nt), RhoPassed],
    call: [IsLevel(3), IsSuit, BidderHasShownSuit],
    shows: [ShowMinHcp(15)],
    planner: Jacoby3MajorPlanner
}

rule! {
    JacobyFourMajor: "Jacoby 2NT Rebid Major (4-level)",
    tag: Reply(Jacoby2nt),
    auction: [BidderOpened, PartnerLastAsked(ConventionId::Jacoby2nt), RhoPassed],
    call: [IsLevel(4), IsSuit, BidderHasShownSuit],
    shows: [ShowMaxHcp(14)] // Minimum hand
}

/// Strong hands that would rather describe themselves with 3NT don't bid
/// three of the major.
pub struct Jacoby3MajorPlanner;

impl Planner for Jacoby3MajorPlanner {
    fn applies(
        &self,
        _auction: &AuctionModel,
        hand: &Hand,
        _call: &Call,
        shows: &[HandConstraint],
    ) -> bool {
        if !shows.iter().all(|constraint| constraint.check(hand)) {
            return false;
        }
        let notrump_shape = matches!(hand.shape(), Shape::Balanced | Shape::SemiBalanced);
        !(hand.hcp() <= 17 && notrump_shape)
    }
}

rule! {
    ForcedRaise: "Forced Raise",
    tag: Natural(Forced),
    auction: [],
    call: [IsSuit, PartnerHasShownSuit, AtMostGame],
    shows: [ShowSupportLength]
}

rule! {
    ForcedNewSuit: "Forced New Suit",
    tag: Natural(Forced),
    auction: [],
    call: [IsSuit, IsNewSuit, IsCheapest],
    shows: [ShowMinSuitLength(5)],
    chooser: Longest
}

rule! {
    ForcedNotrump: "Forced Notrump",
    tag: Natural(Forced),
    auction: [],
    call: [IsNotrump, IsCheapest],
    shows: [ShowSemiBalanced, ShowStopperInOpponentSuit]
}

rule! {
    ForcedRebid: "Forced Rebid",
    tag: Natural(Forced),
    auction: [],
    call: [IsSuit, BidderHasShownSuit, IsCheapest],
    shows: []
}

rule! {
    ForcedCheapest: "Forced Cheapest Bid",
    tag: Natural(Forced),
    auction: [],
    call: [IsCheapest],
    shows: []
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use types::{Auction, Position, Suit};

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    #[test]
    fn test_jacoby_rebids_follow_the_ask() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H P 2N P");
        let model = AuctionModel::from_auction(&auction, &config);

        let shortness = JacobyShortness.get_semantics(&model, &call("3C")).unwrap();
        assert!(shortness.shows.contains(&HandConstraint::MaxLength(Suit::Clubs, 1)));
        assert!(JacobyShortness.get_semantics(&model, &call("3H")).is_none());
        assert!(JacobyFourMajor.get_semantics(&model, &call("4H")).is_some());
    }

    #[test]
    fn test_jacoby_rebids_need_the_ask() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H P 2H P");
        let model = AuctionModel::from_auction(&auction, &config);
        assert!(JacobyFourMajor.get_semantics(&model, &call("4H")).is_none());
    }

    #[test]
    fn test_three_major_planner_defers_to_notrump() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H P 2N P");
        let model = AuctionModel::from_auction(&auction, &config);
        // C.D.H.S
        let balanced = Hand::parse("K32.A3.AQJ32.K32").unwrap();
        let strong = Hand::parse("A2.A3.AKJ32.K432").unwrap();
        let shows = [HandConstraint::MinHcp(15)];
        assert!(!Jacoby3MajorPlanner.applies(&model, &balanced, &call("3H"), &shows));
        assert!(Jacoby3MajorPlanner.applies(&model, &strong, &call("3H"), &shows));
    }

    #[test]
    fn test_forced_cheapest_takes_the_lowest_bid() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1S P");
        let model = AuctionModel::from_auction(&auction, &config);
        assert!(ForcedCheapest.get_semantics(&model, &call("1N")).is_some());
        assert!(ForcedCheapest.get_semantics(&model, &call("2N")).is_none());
        assert!(ForcedCheapest.get_semantics(&model, &Call::Pass).is_none());
    }
}
