use crate::config::params::{NotrumpOpeningParams, WeakBandParams};
use crate::conventions::ConventionId;
use crate::dsl::auction_predicates::{not_auction, IsNotOpen, IsSeat, UsesRuleOfFifteen};
use crate::dsl::call_predicates::{not_call, IsCall, IsLevel, IsPass, IsStrain, IsSuit};
use crate::dsl::planner::RuleOfTwentyPlanner;
use crate::dsl::rule::Rule;
use crate::dsl::shows::{
    ShowBalanced, ShowExactSuitLength, ShowHcpBand, ShowMinHcp, ShowMinSuitLength,
    ShowOpeningSuitLength, ShowRuleOfFifteen,
};
use crate::kernel::AuctionModel;
use crate::rule;
use crate::rules::conventional::ConventionAsk;
use types::Strain;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConventionAsk(ConventionId::StrongTwoClubs)),
        Box::new(OneNotrumpOpening),
        Box::new(TwoNotrumpOpening),
        Box::new(WeakTwo),
        Box::new(ThreeLevelPreempt),
        Box::new(FourLevelPreempt),
        Box::new(SuitOpening),
        Box::new(FourthSeatOpening),
        Box::new(PassOpening),
    ]
}

fn notrump_range(model: &AuctionModel, level: u8) -> (u8, u8) {
    let params: NotrumpOpeningParams = model.config.params(ConventionId::NotrumpOpenings);
    params.range(level).unwrap_or((15, 17))
}

fn one_notrump_range(model: &AuctionModel) -> (u8, u8) {
    notrump_range(model, 1)
}

fn two_notrump_range(model: &AuctionModel) -> (u8, u8) {
    notrump_range(model, 2)
}

fn weak_band(model: &AuctionModel, id: ConventionId) -> (u8, u8) {
    let params: WeakBandParams = model.config.params(id);
    params.band(model.auction.is_vulnerable(model.auction.current_player()))
}

fn weak_two_band(model: &AuctionModel) -> (u8, u8) {
    weak_band(model, ConventionId::WeakTwos)
}

fn preempt_band(model: &AuctionModel) -> (u8, u8) {
    weak_band(model, ConventionId::Preempts)
}

rule! {
    OneNotrumpOpening: "1NT Opening",
    tag: Natural(Opening),
    requires: NotrumpOpenings,
    auction: [IsNotOpen],
    call: [IsCall(1, Strain::NoTrump)],
    shows: [ShowHcpBand(one_notrump_range), ShowBalanced],
    annotations: [NotrumpSystemsOn]
}

rule! {
    TwoNotrumpOpening: "2NT Opening",
    tag: Natural(Opening),
    requires: NotrumpOpenings,
    auction: [IsNotOpen],
    call: [IsCall(2, Strain::NoTrump)],
    shows: [ShowHcpBand(two_notrump_range), ShowBalanced],
    annotations: [NotrumpSystemsOn]
}

rule! {
    WeakTwo: "Weak Two",
    tag: Natural(Preempt),
    requires: WeakTwos,
    auction: [IsNotOpen, not_auction(IsSeat(4))],
    call: [IsLevel(2), IsSuit, not_call(IsStrain(Strain::Clubs))],
    shows: [ShowExactSuitLength(6), ShowHcpBand(weak_two_band)]
}

rule! {
    ThreeLevelPreempt: "Preemptive Opening",
    tag: Natural(Preempt),
    requires: Preempts,
    auction: [IsNotOpen, not_auction(IsSeat(4))],
    call: [IsLevel(3), IsSuit],
    shows: [ShowExactSuitLength(7), ShowHcpBand(preempt_band)]
}

rule! {
    FourLevelPreempt: "Preemptive Opening",
    tag: Natural(Preempt),
    requires: Preempts,
    auction: [IsNotOpen, not_auction(IsSeat(4))],
    call: [IsLevel(4), IsSuit],
    shows: [ShowMinSuitLength(8), ShowHcpBand(preempt_band)]
}

rule! {
    SuitOpening: "Suit Opening",
    tag: Natural(Opening),
    auction: [IsNotOpen, not_auction(UsesRuleOfFifteen)],
    call: [IsLevel(1), IsSuit],
    shows: [ShowOpeningSuitLength, ShowMinHcp(12)],
    planner: RuleOfTwentyPlanner,
    chooser: Longest
}

rule! {
    FourthSeatOpening: "Suit Opening (4th Seat)",
    tag: Natural(Opening),
    requires: RuleOfFifteen,
    auction: [IsNotOpen, IsSeat(4)],
    call: [IsLevel(1), IsSuit],
    shows: [ShowOpeningSuitLength, ShowRuleOfFifteen],
    chooser: Longest
}

rule! {
    PassOpening: "Pass (Opening)",
    tag: Natural(Pass),
    auction: [IsNotOpen],
    call: [IsPass],
    shows: []
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use crate::kernel::{CallSelector, HandConstraint};
    use types::{Auction, Call, Hand, Position, Suit, Vulnerability};

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    #[test]
    fn test_opening_1major() {
        let config = ConventionConfig::default();
        let model = AuctionModel::from_auction(&Auction::new(Position::North), &config);
        let sem = SuitOpening.get_semantics(&model, &call("1S")).unwrap();

        assert!(sem
            .shows
            .contains(&HandConstraint::MinLength(Suit::Spades, 5)));
    }

    #[test]
    fn test_weak_two_band_follows_vulnerability() {
        let config = ConventionConfig::default();
        let auction = Auction::new(Position::North).with_vulnerability(Vulnerability::NS);
        let model = AuctionModel::from_auction(&auction, &config);
        let sem = WeakTwo.get_semantics(&model, &call("2S")).unwrap();

        assert!(sem
            .shows
            .contains(&HandConstraint::MinLength(Suit::Spades, 6)));
        assert!(sem.shows.contains(&HandConstraint::MinHcp(7)));
        assert!(sem.shows.contains(&HandConstraint::MaxHcp(11)));
        assert!(WeakTwo.get_semantics(&model, &call("2C")).is_none());
    }

    #[test]
    fn test_no_preempt_in_fourth_seat() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "P P P");
        let model = AuctionModel::from_auction(&auction, &config);
        assert!(WeakTwo.get_semantics(&model, &call("2S")).is_none());
        assert!(SuitOpening.get_semantics(&model, &call("1S")).is_none());
        assert!(FourthSeatOpening.get_semantics(&model, &call("1S")).is_some());
    }

    #[test]
    fn test_disabled_notrump_openings() {
        let mut config = ConventionConfig::default();
        config.disable(ConventionId::NotrumpOpenings);
        let model = AuctionModel::from_auction(&Auction::new(Position::North), &config);
        assert!(OneNotrumpOpening.get_semantics(&model, &call("1N")).is_none());
    }

    #[test]
    fn test_opening_selects_longer_suit() {
        let config = ConventionConfig::default();
        let model = AuctionModel::from_auction(&Auction::new(Position::North), &config);
        // C.D.H.S: five spades, four diamonds, 21 hcp.
        let hand = Hand::parse("A2.AKJ2.K2.AQ432").unwrap();
        assert_eq!(CallSelector::select(&hand, &model), Some(call("1S")));
    }

    #[test]
    fn test_balanced_fifteen_opens_notrump() {
        let config = ConventionConfig::default();
        let model = AuctionModel::from_auction(&Auction::new(Position::North), &config);
        let hand = Hand::parse("K32.AQ2.KJ32.Q32").unwrap();
        assert_eq!(CallSelector::select(&hand, &model), Some(call("1N")));
    }
}
