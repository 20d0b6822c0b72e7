//! Last resort: bid the longest suit the partnership can afford.

use crate::dsl::call_predicates::{IsSuit, NotConventional, OpponentHasNotShownSuit};
use crate::dsl::rule::Rule;
use crate::dsl::shows::{ShowNaturalLength, ShowSufficientValues};
use crate::rule;

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(NaturalSuit)]
}

rule! {
    NaturalSuit: "Natural Suit",
    tag: Natural(Fallback),
    auction: [],
    call: [IsSuit, NotConventional, OpponentHasNotShownSuit],
    shows: [ShowNaturalLength, ShowSufficientValues],
    chooser: Longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use crate::kernel::{AuctionModel, HandConstraint};
    use types::{Auction, Position, Suit};

    #[test]
    fn test_length_follows_level() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1C");
        let model = AuctionModel::from_auction(&auction, &config);

        let one = NaturalSuit.get_semantics(&model, &"1S".parse().unwrap()).unwrap();
        assert!(one.shows.contains(&HandConstraint::MinLength(Suit::Spades, 4)));
        assert!(one.shows.contains(&HandConstraint::MinHcp(16)));

        let two = NaturalSuit.get_semantics(&model, &"2H".parse().unwrap()).unwrap();
        assert!(two.shows.contains(&HandConstraint::MinLength(Suit::Hearts, 5)));
    }

    #[test]
    fn test_never_bids_the_opponents_suit() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H");
        let model = AuctionModel::from_auction(&auction, &config);
        assert!(NaturalSuit.get_semantics(&model, &"2H".parse().unwrap()).is_none());
    }

    #[test]
    fn test_conventional_calls_are_left_alone() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P");
        let model = AuctionModel::from_auction(&auction, &config);
        assert!(NaturalSuit.get_semantics(&model, &"2C".parse().unwrap()).is_none());
    }
}
