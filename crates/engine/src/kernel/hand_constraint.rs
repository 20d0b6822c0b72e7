// cspell:ignore Jxxx
//! Hand constraints shown by calls

use crate::conventions::describe_counts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use types::{BalancedShapes, Hand, Rank, Shape, Suit};

/// Constraints that a hand must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandConstraint {
    /// Minimum high card points
    MinHcp(u8),
    /// Maximum high card points
    MaxHcp(u8),
    /// Minimum length in a specific suit
    MinLength(Suit, u8),
    /// Maximum length in a specific suit
    MaxLength(Suit, u8),
    /// Maximum unbalancedness allowed
    MaxUnbalancedness(Shape),
    /// One of the configured balanced patterns
    Balanced { with_5422: bool },
    /// Must have a stopper in the given suit (A, Kx, Qxx with J or T)
    StopperIn(Suit),
    /// Rule of 20: HCP + length of two longest suits >= 20
    RuleOfTwenty,
    /// Rule of 15: HCP + length of spades >= 15
    RuleOfFifteen,
    /// Good suit quality: 2 of the top 3 or 3 of the top 5 honors
    ThreeOfTopFiveOrBetter(Suit),
    /// HCP plus shortness outside the trump suit
    MinSupportPoints(Suit, u8),
    /// Aces (plus the trump king when `trump` is set) is one of the set bits
    /// of `mask`.
    KeyCards { trump: Option<Suit>, mask: u8 },
    /// Holds (or lacks) the trump queen
    TrumpQueen(Suit, bool),
}

impl HandConstraint {
    /// Check whether a hand satisfies this constraint.
    pub fn check(&self, hand: &Hand) -> bool {
        let dist = hand.distribution();
        match *self {
            HandConstraint::MinHcp(hcp) => hand.hcp() >= hcp,
            HandConstraint::MaxHcp(hcp) => hand.hcp() <= hcp,
            HandConstraint::MinLength(suit, len) => dist.length(suit) >= len,
            HandConstraint::MaxLength(suit, len) => dist.length(suit) <= len,
            HandConstraint::MaxUnbalancedness(max_shape) => hand.shape() <= max_shape,
            HandConstraint::Balanced { with_5422 } => {
                hand.is_balanced_for(&BalancedShapes::with_5422(with_5422))
            }
            HandConstraint::StopperIn(suit) => hand.has_stopper(suit),
            HandConstraint::RuleOfTwenty => {
                let lengths = dist.sorted_lengths();
                hand.hcp() + lengths[0] + lengths[1] >= 20
            }
            HandConstraint::RuleOfFifteen => hand.hcp() + dist.length(Suit::Spades) >= 15,
            HandConstraint::ThreeOfTopFiveOrBetter(suit) => {
                hand.top_honors(suit, 3) >= 2 || hand.top_honors(suit, 5) >= 3
            }
            HandConstraint::MinSupportPoints(trump, points) => hand.support_points(trump) >= points,
            HandConstraint::KeyCards { trump, mask } => {
                let count = key_cards(hand, trump);
                count < 8 && mask & (1 << count) != 0
            }
            HandConstraint::TrumpQueen(suit, held) => hand.has_card(suit, Rank::Queen) == held,
        }
    }

    /// Optimize a list of constraints by combining HCP and length ranges.
    pub fn optimize(constraints: Vec<Self>) -> Vec<Self> {
        let mut min_hcp = 0;
        let mut max_hcp = 40;
        let mut min_lengths = BTreeMap::new();
        let mut max_lengths = BTreeMap::new();

        let mut other_constraints = Vec::new();

        for c in constraints {
            match c {
                HandConstraint::MinHcp(h) => min_hcp = min_hcp.max(h),
                HandConstraint::MaxHcp(h) => max_hcp = max_hcp.min(h),
                HandConstraint::MinLength(s, l) => {
                    let entry = min_lengths.entry(s).or_insert(0);
                    *entry = (*entry).max(l);
                }
                HandConstraint::MaxLength(s, l) => {
                    let entry = max_lengths.entry(s).or_insert(13);
                    *entry = (*entry).min(l);
                }
                _ if other_constraints.contains(&c) => {}
                _ => other_constraints.push(c),
            }
        }

        let mut optimised = Vec::new();
        if min_hcp > 0 {
            optimised.push(HandConstraint::MinHcp(min_hcp));
        }
        if max_hcp < 40 {
            optimised.push(HandConstraint::MaxHcp(max_hcp));
        }
        for (suit, len) in min_lengths {
            if len > 0 {
                optimised.push(HandConstraint::MinLength(suit, len));
            }
        }
        for (suit, len) in max_lengths {
            optimised.push(HandConstraint::MaxLength(suit, len));
        }
        optimised.extend(other_constraints);
        optimised
    }

    /// Human-readable summary of a list of constraints, e.g.
    /// "15-17 HCP, balanced".
    pub fn describe_all(constraints: &[Self]) -> String {
        let min = constraints.iter().find_map(|c| match c {
            HandConstraint::MinHcp(h) => Some(*h),
            _ => None,
        });
        let max = constraints.iter().find_map(|c| match c {
            HandConstraint::MaxHcp(h) => Some(*h),
            _ => None,
        });
        let mut parts = Vec::new();
        match (min, max) {
            (Some(lo), Some(hi)) if lo == hi => parts.push(format!("{lo} HCP")),
            (Some(lo), Some(hi)) => parts.push(format!("{lo}-{hi} HCP")),
            (Some(lo), None) => parts.push(format!("{lo}+ HCP")),
            (None, Some(hi)) => parts.push(format!("0-{hi} HCP")),
            (None, None) => {}
        }
        parts.extend(
            constraints
                .iter()
                .filter(|c| !matches!(c, HandConstraint::MinHcp(_) | HandConstraint::MaxHcp(_)))
                .map(|c| c.to_string()),
        );
        parts.join(", ")
    }
}

/// Aces, plus the trump king when a trump suit is given.
pub fn key_cards(hand: &Hand, trump: Option<Suit>) -> u8 {
    hand.aces() + trump.map_or(0, |suit| u8::from(hand.has_card(suit, Rank::King)))
}

impl fmt::Display for HandConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandConstraint::MinHcp(h) => write!(f, "{h}+ HCP"),
            HandConstraint::MaxHcp(h) => write!(f, "at most {h} HCP"),
            HandConstraint::MinLength(suit, len) => write!(f, "{len}+{}", suit.symbol()),
            HandConstraint::MaxLength(suit, 0) => write!(f, "void in {}", suit.symbol()),
            HandConstraint::MaxLength(suit, len) => write!(f, "at most {len}{}", suit.symbol()),
            HandConstraint::MaxUnbalancedness(Shape::Balanced) => write!(f, "balanced"),
            HandConstraint::MaxUnbalancedness(Shape::SemiBalanced) => {
                write!(f, "balanced or semi-balanced")
            }
            HandConstraint::MaxUnbalancedness(Shape::Unbalanced) => write!(f, "any shape"),
            HandConstraint::Balanced { .. } => write!(f, "balanced"),
            HandConstraint::StopperIn(suit) => write!(f, "{} stopper", suit.symbol()),
            HandConstraint::RuleOfTwenty => write!(f, "rule of 20"),
            HandConstraint::RuleOfFifteen => write!(f, "rule of 15"),
            HandConstraint::ThreeOfTopFiveOrBetter(suit) => write!(f, "good {}", suit.symbol()),
            HandConstraint::MinSupportPoints(suit, points) => {
                write!(f, "{points}+ support points for {}", suit.symbol())
            }
            HandConstraint::KeyCards { trump: None, mask } => {
                write!(f, "{}", describe_counts(*mask, "ace", "aces"))
            }
            HandConstraint::KeyCards {
                trump: Some(suit),
                mask,
            } => write!(
                f,
                "{} for {}",
                describe_counts(*mask, "key card", "key cards"),
                suit.symbol()
            ),
            HandConstraint::TrumpQueen(suit, true) => write!(f, "the {} queen", suit.symbol()),
            HandConstraint::TrumpQueen(suit, false) => write!(f, "no {} queen", suit.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::parse(s).unwrap()
    }

    #[test]
    fn test_display_counts_agree_in_number() {
        let one = HandConstraint::KeyCards { trump: None, mask: 1 << 1 };
        assert_eq!(one.to_string(), "1 ace");
        let zero_or_four = HandConstraint::KeyCards {
            trump: None,
            mask: 1 | 1 << 4,
        };
        assert_eq!(zero_or_four.to_string(), "0 or 4 aces");
        let key_card = HandConstraint::KeyCards {
            trump: Some(Suit::Hearts),
            mask: 1 << 1,
        };
        assert_eq!(key_card.to_string(), "1 key card for ♥");
        assert_eq!(
            HandConstraint::MaxUnbalancedness(Shape::SemiBalanced).to_string(),
            "balanced or semi-balanced"
        );
    }

    #[test]
    fn test_optimize_merges_ranges() {
        let optimized = HandConstraint::optimize(vec![
            HandConstraint::MinHcp(6),
            HandConstraint::MinHcp(10),
            HandConstraint::MaxHcp(17),
            HandConstraint::MinLength(Suit::Spades, 4),
            HandConstraint::MinLength(Suit::Spades, 5),
            HandConstraint::StopperIn(Suit::Hearts),
            HandConstraint::StopperIn(Suit::Hearts),
        ]);
        assert_eq!(
            optimized,
            vec![
                HandConstraint::MinHcp(10),
                HandConstraint::MaxHcp(17),
                HandConstraint::MinLength(Suit::Spades, 5),
                HandConstraint::StopperIn(Suit::Hearts),
            ]
        );
    }

    #[test]
    fn test_optimize_orders_suits() {
        let optimized = HandConstraint::optimize(vec![
            HandConstraint::MinLength(Suit::Spades, 4),
            HandConstraint::MinLength(Suit::Clubs, 3),
        ]);
        assert_eq!(
            optimized,
            vec![
                HandConstraint::MinLength(Suit::Clubs, 3),
                HandConstraint::MinLength(Suit::Spades, 4),
            ]
        );
    }

    #[test]
    fn test_key_cards() {
        // C.D.H.S: two aces and the spade king.
        let h = hand("A32.A32.432.K432");
        assert!(HandConstraint::KeyCards { trump: None, mask: 0b100 }.check(&h));
        assert!(HandConstraint::KeyCards {
            trump: Some(Suit::Spades),
            mask: 0b1000
        }
        .check(&h));
        assert!(!HandConstraint::KeyCards {
            trump: Some(Suit::Hearts),
            mask: 0b1000
        }
        .check(&h));
        assert!(HandConstraint::TrumpQueen(Suit::Spades, false).check(&h));
    }

    #[test]
    fn test_support_points() {
        // Four hearts, 11 hcp, a doubleton spade.
        let h = hand("K32.A432.KJ32.32");
        assert!(HandConstraint::MinSupportPoints(Suit::Hearts, 12).check(&h));
        assert!(!HandConstraint::MinSupportPoints(Suit::Hearts, 13).check(&h));
    }

    #[test]
    fn test_configured_balanced() {
        // 5-4-2-2
        let h = hand("AK.Q2.KJ32.Q5432");
        assert!(!HandConstraint::Balanced { with_5422: false }.check(&h));
        assert!(HandConstraint::Balanced { with_5422: true }.check(&h));
    }

    #[test]
    fn test_describe_all() {
        let text = HandConstraint::describe_all(&[
            HandConstraint::MinHcp(15),
            HandConstraint::MaxHcp(17),
            HandConstraint::Balanced { with_5422: false },
        ]);
        assert_eq!(text, "15-17 HCP, balanced");
        let text = HandConstraint::describe_all(&[
            HandConstraint::MinHcp(6),
            HandConstraint::MinLength(Suit::Hearts, 4),
        ]);
        assert_eq!(text, "6+ HCP, 4+♥");
    }
}
