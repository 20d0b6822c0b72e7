//! What the auction has revealed about one seat's hand

use crate::kernel::HandConstraint;
use serde::{Deserialize, Serialize};
use std::fmt;
use types::{Distribution, Shape, Suit};

/// Inferred profile of a hand based on auction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandModel {
    /// Minimum length shown in each suit
    pub min_distribution: Distribution,
    /// Maximum length shown in each suit
    pub max_distribution: Distribution,
    /// Minimum HCP shown, if any
    pub min_hcp: Option<u8>,
    /// Maximum HCP shown, if any
    pub max_hcp: Option<u8>,
    /// Maximum unbalancedness allowed (max shape)
    pub max_shape: Option<Shape>,
}

impl Default for HandModel {
    fn default() -> Self {
        Self {
            min_distribution: Distribution::default(),
            max_distribution: Distribution::max(),
            min_hcp: None,
            max_hcp: None,
            max_shape: None,
        }
    }
}

impl HandModel {
    pub fn apply_constraint(&mut self, constraint: HandConstraint) {
        match constraint {
            HandConstraint::MinHcp(hcp) => self.min_hcp = Some(update_min(self.min_hcp, hcp)),
            HandConstraint::MaxHcp(hcp) => self.max_hcp = Some(update_max(self.max_hcp, hcp)),
            HandConstraint::MinLength(suit, len) => {
                let current = self.min_distribution.length(suit);
                self.min_distribution.set_length(suit, current.max(len));
            }
            HandConstraint::MaxLength(suit, len) => {
                let current = self.max_distribution.length(suit);
                self.max_distribution.set_length(suit, current.min(len));
            }
            HandConstraint::MaxUnbalancedness(shape) => {
                self.max_shape = Some(update_shape_max(self.max_shape, shape));
            }
            HandConstraint::Balanced { .. } => {
                self.max_shape = Some(update_shape_max(self.max_shape, Shape::Balanced));
            }
            HandConstraint::StopperIn(_)
            | HandConstraint::RuleOfTwenty
            | HandConstraint::RuleOfFifteen
            | HandConstraint::ThreeOfTopFiveOrBetter(_)
            | HandConstraint::MinSupportPoints(..)
            | HandConstraint::KeyCards { .. }
            | HandConstraint::TrumpQueen(..) => {
                // Not tracked in the model
            }
        }
    }

    pub fn has_shown_suit(&self, suit: Suit) -> bool {
        self.min_distribution.length(suit) > 0
    }

    pub fn min_length(&self, suit: Suit) -> u8 {
        self.min_distribution.length(suit)
    }

    pub fn max_length(&self, suit: Suit) -> u8 {
        self.max_distribution.length(suit)
    }

    pub fn length_needed_to_reach_target(&self, suit: Suit, target_len: u8) -> u8 {
        target_len.saturating_sub(self.min_length(suit))
    }

    /// The suit with the longest shown minimum length, the higher-ranking
    /// one on ties.
    pub fn longest_shown_suit(&self) -> Option<Suit> {
        Suit::ALL
            .into_iter()
            .filter(|&suit| self.has_shown_suit(suit))
            .max_by_key(|&suit| (self.min_length(suit), suit))
    }
}

impl fmt::Display for HandModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        let hcp_str = match (self.min_hcp, self.max_hcp) {
            (None, None) => "? hcp".to_string(),
            (Some(min), None) => format!("{}+ hcp", min),
            (None, Some(max)) => format!("0-{} hcp", max),
            (Some(min), Some(max)) if min == max => format!("{} hcp", min),
            (Some(min), Some(max)) => format!("{}-{} hcp", min, max),
        };
        parts.push(hcp_str);

        let suit_str = Suit::ALL
            .into_iter()
            .filter_map(|suit| {
                let symbol = suit.symbol();
                match (self.min_length(suit), self.max_length(suit)) {
                    (0, 13) => None,
                    (m, 13) => Some(format!("{}+{}", m, symbol)),
                    (0, m) => Some(format!("0-{}{}", m, symbol)),
                    (min, max) if min == max => Some(format!("{}{}", min, symbol)),
                    (min, max) => Some(format!("{}-{}{}", min, max, symbol)),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        if !suit_str.is_empty() {
            parts.push(suit_str);
        }

        write!(f, "{}", parts.join(", "))
    }
}

/// Update minimum value, taking the maximum of current and new
fn update_min(current: Option<u8>, new: u8) -> u8 {
    current.map(|c| c.max(new)).unwrap_or(new)
}

/// Update maximum value, taking the minimum of current and new
fn update_max(current: Option<u8>, new: u8) -> u8 {
    current.map(|c| c.min(new)).unwrap_or(new)
}

/// Update maximum shape, taking the minimum of current and new
fn update_shape_max(current: Option<Shape>, new: Shape) -> Shape {
    current.map(|c| c.min(new)).unwrap_or(new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use crate::kernel::AuctionModel;
    use types::{Auction, Position};

    fn partner_model(dealer: Position, calls: &str) -> HandModel {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(dealer, calls);
        AuctionModel::from_auction(&auction, &config)
            .partner_hand()
            .clone()
    }

    #[test]
    fn test_empty_auction() {
        let config = ConventionConfig::default();
        let auction = Auction::new(Position::South);
        let auction_model = AuctionModel::from_auction(&auction, &config);
        let model = auction_model.partner_hand();

        assert_eq!(model.min_hcp, None);
        assert_eq!(model.max_hcp, None);
        assert_eq!(model.max_length(Suit::Spades), 13);
    }

    #[test]
    fn test_1nt_opening() {
        // N opens 1NT, E passes → current_player = South
        let model = partner_model(Position::North, "1N P");
        assert_eq!(model.min_hcp, Some(15));
        assert_eq!(model.max_hcp, Some(17));
        assert_eq!(model.max_shape, Some(Shape::Balanced));
    }

    #[test]
    fn test_one_spade_opening() {
        let model = partner_model(Position::North, "1S P");
        assert_eq!(model.min_hcp, Some(12));
        assert_eq!(model.min_length(Suit::Spades), 5);
        assert!(model.has_shown_suit(Suit::Spades));
    }

    #[test]
    fn test_partner_position_filtering() {
        // N:1H, E:P, S:1S, W:P → current_player = North
        let model = partner_model(Position::North, "1H P 1S P");
        // Partner (South) bid 1S
        assert!(model.has_shown_suit(Suit::Spades));
        // North's own 1H bid shouldn't appear in partner model
        assert!(!model.has_shown_suit(Suit::Hearts));
    }

    #[test]
    fn test_weak_two_opening() {
        let model = partner_model(Position::North, "2D P");
        assert_eq!(model.min_length(Suit::Diamonds), 6);
        assert_eq!(model.max_length(Suit::Diamonds), 6);
        assert_eq!(model.min_hcp, Some(5));
    }

    #[test]
    fn test_pass_does_not_update() {
        // N:1C, E:P, S:P → current_player = West, whose partner only passed
        let model = partner_model(Position::North, "1C P P");
        assert!(!model.has_shown_suit(Suit::Clubs));
    }

    #[test]
    fn test_stayman_does_not_show_clubs() {
        // N:1N, E:P, S:2C, W:P → North's partner asked
        let model = partner_model(Position::North, "1N P 2C P");
        assert!(!model.has_shown_suit(Suit::Clubs));
    }

    #[test]
    fn test_apply_constraint() {
        let mut model = HandModel::default();

        model.apply_constraint(HandConstraint::MinHcp(10));
        assert_eq!(model.min_hcp, Some(10));

        model.apply_constraint(HandConstraint::MaxHcp(15));
        assert_eq!(model.max_hcp, Some(15));

        model.apply_constraint(HandConstraint::MinLength(Suit::Spades, 5));
        assert_eq!(model.min_length(Suit::Spades), 5);

        // Tighten
        model.apply_constraint(HandConstraint::MinHcp(12));
        assert_eq!(model.min_hcp, Some(12));

        model.apply_constraint(HandConstraint::MaxHcp(14));
        assert_eq!(model.max_hcp, Some(14));

        model.apply_constraint(HandConstraint::MaxUnbalancedness(Shape::SemiBalanced));
        assert_eq!(model.max_shape, Some(Shape::SemiBalanced));

        model.apply_constraint(HandConstraint::Balanced { with_5422: false });
        assert_eq!(model.max_shape, Some(Shape::Balanced));

        model.apply_constraint(HandConstraint::MaxLength(Suit::Hearts, 4));
        model.apply_constraint(HandConstraint::MaxLength(Suit::Hearts, 3));
        // Try to loosen (should stay at 3)
        model.apply_constraint(HandConstraint::MaxLength(Suit::Hearts, 5));
        assert_eq!(model.max_length(Suit::Hearts), 3);
        assert_eq!(model.longest_shown_suit(), Some(Suit::Spades));
    }

    #[test]
    fn test_display() {
        let mut model = HandModel::default();
        assert_eq!(model.to_string(), "? hcp");

        model.apply_constraint(HandConstraint::MinHcp(10));
        assert_eq!(model.to_string(), "10+ hcp");

        model.apply_constraint(HandConstraint::MinLength(Suit::Clubs, 4));
        assert_eq!(model.to_string(), "10+ hcp, 4+♣");

        let mut model2 = HandModel::default();
        model2.apply_constraint(HandConstraint::MinHcp(15));
        model2.apply_constraint(HandConstraint::MaxHcp(17));
        for suit in Suit::ALL {
            model2.apply_constraint(HandConstraint::MinLength(suit, 2));
            model2.apply_constraint(HandConstraint::MaxLength(suit, 5));
        }
        model2.apply_constraint(HandConstraint::MaxLength(Suit::Spades, 3));
        assert_eq!(model2.to_string(), "15-17 hcp, 2-5♣ 2-5♦ 2-5♥ 2-3♠");

        let mut model3 = HandModel::default();
        model3.apply_constraint(HandConstraint::MaxHcp(5));
        model3.apply_constraint(HandConstraint::MaxLength(Suit::Spades, 4));
        assert_eq!(model3.to_string(), "0-5 hcp, 0-4♠");
    }
}
