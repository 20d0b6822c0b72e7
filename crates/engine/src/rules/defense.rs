//! First action against an opposing 1NT or strong club opening.

use crate::config::params::NotrumpDefenseParams;
use crate::conventions::{ConventionId, ExclusiveGroup};
use crate::dsl::auction_predicates::OpponentsOpenedOneNotrump;
use crate::dsl::call_predicates::{IsDouble, NotConventional};
use crate::dsl::rule::Rule;
use crate::dsl::shows::ShowMinHcpFrom;
use crate::kernel::AuctionModel;
use crate::rule;
use crate::rules::conventional::ConventionAsk;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConventionAsk(ConventionId::Dont)),
        Box::new(ConventionAsk(ConventionId::Cappelletti)),
        Box::new(ConventionAsk(ConventionId::Landy)),
        Box::new(ConventionAsk(ConventionId::StrongClubDefense)),
        Box::new(NotrumpPenaltyDouble),
    ]
}

/// The penalty double threshold of whichever notrump defense is enabled.
fn penalty_double_min_hcp(model: &AuctionModel) -> u8 {
    ExclusiveGroup::NotrumpDefense
        .members()
        .iter()
        .find(|&&id| model.config.is_enabled(id))
        .map(|&id| model.config.params::<NotrumpDefenseParams>(id))
        .unwrap_or_default()
        .penalty_double_min_hcp
}

rule! {
    NotrumpPenaltyDouble: "Penalty Double of 1NT",
    tag: Natural(PenaltyDouble),
    auction: [OpponentsOpenedOneNotrump],
    call: [IsDouble, NotConventional],
    shows: [ShowMinHcpFrom(penalty_double_min_hcp)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use crate::bid::BidTag;
    use crate::decide::decide;
    use crate::kernel::HandConstraint;
    use types::{Auction, Call, Hand, Position};

    #[test]
    fn test_penalty_double_yields_to_a_conventional_double() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N");
        let model = AuctionModel::from_auction(&auction, &config);
        // DONT uses the double for a single-suited hand.
        assert!(NotrumpPenaltyDouble.get_semantics(&model, &Call::Double).is_none());

        let mut landy = ConventionConfig::default();
        landy.set_enabled(ConventionId::Landy, true);
        let model = AuctionModel::from_auction(&auction, &landy);
        let semantics = NotrumpPenaltyDouble.get_semantics(&model, &Call::Double).unwrap();
        assert!(semantics.shows.contains(&HandConstraint::MinHcp(15)));
    }

    #[test]
    fn test_dont_ask_over_notrump() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N");
        let model = AuctionModel::from_auction(&auction, &config);
        let semantics = ConventionAsk(ConventionId::Dont)
            .get_semantics(&model, &"2C".parse().unwrap())
            .unwrap();
        assert!(semantics.shows.contains(&HandConstraint::MinHcp(8)));
    }

    #[test]
    fn test_dont_spade_one_suiter_bids_two_spades() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N");
        // 8 hcp, seven spades.
        let hand = Hand::parse("2.32.432.AKJ5432").unwrap();
        let bid = decide(&auction, &hand, Position::East, &config).bid().cloned().unwrap();
        assert_eq!(bid.call, "2S".parse().unwrap());
        assert_eq!(bid.tag, BidTag::ask(ConventionId::Dont));

        // Too weak for the defense.
        let weak = Hand::parse("2.32.432.QJ75432").unwrap();
        let call = decide(&auction, &weak, Position::East, &config).call();
        assert_ne!(call, Some("2S".parse().unwrap()));
    }
}
