use crate::config::params::TakeoutDoubleParams;
use crate::conventions::ConventionId;
use crate::kernel::{AuctionModel, HandConstraint};
use types::{Call, Hand};

/// A planner decides whether a bidding rule applies to a given hand in a given auction.
pub trait Planner: Send + Sync {
    /// Check if the rule applies to the given hand.
    fn applies(
        &self,
        auction: &AuctionModel,
        hand: &Hand,
        call: &Call,
        shows: &[HandConstraint],
    ) -> bool;
}

/// The default planner that checks if the hand satisfies all "shows" constraints.
pub struct GenuinePlanner;

impl Planner for GenuinePlanner {
    fn applies(
        &self,
        _auction: &AuctionModel,
        hand: &Hand,
        _call: &Call,
        shows: &[HandConstraint],
    ) -> bool {
        shows.iter().all(|constraint| constraint.check(hand))
    }
}

/// A planner for Rule of 20 openings.
/// It ignores HCP constraints but respects the length of the call's suit.
pub struct RuleOfTwentyPlanner;

impl Planner for RuleOfTwentyPlanner {
    fn applies(
        &self,
        _auction: &AuctionModel,
        hand: &Hand,
        call: &Call,
        _shows: &[HandConstraint],
    ) -> bool {
        if !HandConstraint::RuleOfTwenty.check(hand) {
            return false;
        }

        match call.suit() {
            Some(suit) => {
                let min_len = if suit.is_major() { 5 } else { 3 };
                hand.length(suit) >= min_len
            }
            None => false,
        }
    }
}

/// A planner for takeout doubles.
/// Either satisfies all constraints (opening values and support for the
/// unbid suits), or is strong enough to double with any shape.
pub struct TakeoutDoublePlanner;

impl Planner for TakeoutDoublePlanner {
    fn applies(
        &self,
        auction: &AuctionModel,
        hand: &Hand,
        call: &Call,
        shows: &[HandConstraint],
    ) -> bool {
        let params: TakeoutDoubleParams = auction.config.params(ConventionId::TakeoutDouble);
        if hand.hcp() >= params.strong_hcp {
            return true;
        }
        GenuinePlanner.applies(auction, hand, call, shows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use types::{Auction, Position, Suit};

    #[test]
    fn test_rule_of_twenty_needs_a_long_enough_suit() {
        let config = ConventionConfig::default();
        let auction = Auction::new(Position::North);
        let model = AuctionModel::from_auction(&auction, &config);
        // C.D.H.S: 11 hcp, 5 spades and 4 hearts.
        let hand = Hand::parse("2.432.AQJ2.KJ432").unwrap();
        assert!(RuleOfTwentyPlanner.applies(&model, &hand, &"1S".parse().unwrap(), &[]));
        assert!(!RuleOfTwentyPlanner.applies(&model, &hand, &"1H".parse().unwrap(), &[]));
    }

    #[test]
    fn test_strong_hand_doubles_with_any_shape() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H");
        let model = AuctionModel::from_auction(&auction, &config);
        let shows = [HandConstraint::MinLength(Suit::Clubs, 3)];
        // 19 hcp with a singleton club.
        let strong = Hand::parse("2.AK32.AQ2.KQJ32").unwrap();
        let minimum = Hand::parse("2.K432.A32.KJ432").unwrap();
        assert!(TakeoutDoublePlanner.applies(&model, &strong, &Call::Double, &shows));
        assert!(!TakeoutDoublePlanner.applies(&model, &minimum, &Call::Double, &shows));
    }
}
