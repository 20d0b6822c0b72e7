//! Picks the call to make from the rules active in an auction.

use crate::dsl::planner::{GenuinePlanner, Planner};
use crate::dsl::rule::Rule;
use crate::kernel::trace::{BidTrace, SelectedCall, SelectionStep};
use crate::kernel::{AuctionModel, CallSemantics, Forcing, HandConstraint};
use crate::rules::{registry, LayerKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use types::{Call, Hand, Suit};

/// A call whose rule the hand satisfies.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub call: Call,
    pub semantics: CallSemantics,
}

/// How a rule picks among several satisfied calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Chooser {
    /// The lowest call.
    #[default]
    Cheapest,
    /// The highest call.
    Highest,
    /// The call showing the hand's longest suit, with the usual tie-breaks
    /// between equal-length suits.
    Longest,
}

impl Chooser {
    pub fn choose(self, items: &[Candidate], hand: &Hand) -> Option<Call> {
        match self {
            Chooser::Cheapest => items.first().map(|item| item.call),
            Chooser::Highest => items.last().map(|item| item.call),
            Chooser::Longest => choose_longest(items, hand),
        }
    }
}

/// Call selector implementing the layered rule stack
pub struct CallSelector;

impl CallSelector {
    /// Select the best call for `hand`
    pub fn select(hand: &Hand, auction_model: &AuctionModel) -> Option<Call> {
        Self::select_with_trace(hand, auction_model).selected_call()
    }

    /// Select the best call and return a detailed trace of the selection process
    pub fn select_with_trace<'a>(hand: &Hand, auction_model: &AuctionModel<'a>) -> BidTrace<'a> {
        let forcing = Forcing::of(auction_model);
        let legal_calls = auction_model.auction.legal_calls();
        let mut selection_steps = Vec::new();

        let mut selected = registry()
            .active_layers(auction_model, forcing)
            .into_iter()
            .find_map(|layer| {
                select_from_rules(
                    layer.kind,
                    &layer.rules,
                    hand,
                    auction_model,
                    &legal_calls,
                    &mut selection_steps,
                )
            });

        let mut forced_override = false;
        let passing = selected.as_ref().map_or(true, |s| s.call.is_pass());
        if passing && !forcing.allows_pass() {
            debug!(?forcing, "pass is not allowed, looking for a forced continuation");
            if let Some(continuation) = select_from_rules(
                LayerKind::Forced,
                registry().forced_continuation(),
                hand,
                auction_model,
                &legal_calls,
                &mut selection_steps,
            ) {
                selected = Some(continuation);
                forced_override = true;
            }
        }

        if let Some(selected) = &selected {
            debug!(
                call = %selected.call,
                rule = %selected.semantics.rule_name,
                layer = ?selected.layer,
                "selected call"
            );
        }

        BidTrace {
            auction_model: auction_model.clone(),
            forcing,
            selection_steps,
            selected,
            forced_override,
        }
    }
}

/// Try each rule in order; the first with any satisfied call picks one.
fn select_from_rules(
    layer: LayerKind,
    rules: &[Box<dyn Rule>],
    hand: &Hand,
    auction_model: &AuctionModel,
    legal_calls: &[Call],
    steps: &mut Vec<SelectionStep>,
) -> Option<SelectedCall> {
    for rule in rules {
        let mut satisfied_calls = Vec::new();

        for call in legal_calls {
            let Some(semantics) = rule.get_semantics(auction_model, call) else {
                continue;
            };
            let planner: &dyn Planner = semantics.planner.as_deref().unwrap_or(&GenuinePlanner);
            let satisfied = planner.applies(auction_model, hand, call, &semantics.shows);

            let failed_constraints: Vec<HandConstraint> = if satisfied {
                Vec::new()
            } else {
                semantics
                    .shows
                    .iter()
                    .filter(|constraint| !constraint.check(hand))
                    .copied()
                    .collect()
            };

            trace!(?layer, rule = %semantics.rule_name, %call, satisfied, "considered call");

            steps.push(SelectionStep {
                layer,
                rule_name: semantics.rule_name.clone(),
                call: *call,
                semantics: semantics.clone(),
                satisfied,
                failed_constraints,
            });

            if satisfied {
                satisfied_calls.push(Candidate {
                    call: *call,
                    semantics,
                });
            }
        }

        let Some(call) = rule.chooser().choose(&satisfied_calls, hand) else {
            continue;
        };
        if let Some(candidate) = satisfied_calls.into_iter().find(|c| c.call == call) {
            return Some(SelectedCall {
                layer,
                call,
                semantics: candidate.semantics,
            });
        }
    }
    None
}

/// The candidate showing the hand's longest suit. Equal lengths in
/// different suits at the one level go to the higher suit with five or
/// more cards, and to diamonds with four-four minors. Otherwise the
/// earlier, cheaper call stands.
fn choose_longest(items: &[Candidate], hand: &Hand) -> Option<Call> {
    let mut best: Option<(&Candidate, Option<(Suit, u8)>)> = None;
    for item in items {
        let shown = longest_shown_suit(item, hand);
        let replace = match (best, shown) {
            (None, _) => true,
            (Some((_, None)), Some(_)) => true,
            (Some((current, Some(held))), Some(candidate)) => {
                outranks(candidate, item.call, held, current.call)
            }
            _ => false,
        };
        if replace {
            best = Some((item, shown));
        }
    }
    best.map(|(item, _)| item.call)
}

fn outranks(
    (suit, len): (Suit, u8),
    call: Call,
    (best_suit, best_len): (Suit, u8),
    best_call: Call,
) -> bool {
    if len != best_len {
        return len > best_len;
    }
    if suit == best_suit || call.level() != Some(1) || best_call.level() != Some(1) {
        return false;
    }
    let both_minors = suit.is_minor() && best_suit.is_minor();
    suit as u8 > best_suit as u8 && (len >= 5 || (len >= 4 && both_minors))
}

/// The shown suit where the hand is longest, the first on ties.
fn longest_shown_suit(item: &Candidate, hand: &Hand) -> Option<(Suit, u8)> {
    item.semantics
        .shows
        .iter()
        .filter_map(|constraint| match constraint {
            HandConstraint::MinLength(suit, _) => Some((*suit, hand.length(*suit))),
            _ => None,
        })
        .fold(None, |best, (suit, len)| match best {
            Some((_, best_len)) if best_len >= len => best,
            _ => Some((suit, len)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bid::{BidTag, NaturalKind};

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    /// A candidate for `call` showing at least `min_length` in each of `suits`.
    fn candidate(call_str: &str, suits: &[Suit], min_length: u8) -> Candidate {
        Candidate {
            call: call(call_str),
            semantics: CallSemantics {
                shows: suits
                    .iter()
                    .map(|&suit| HandConstraint::MinLength(suit, min_length))
                    .collect(),
                annotations: vec![],
                rule_name: "test".to_string(),
                tag: BidTag::Natural(NaturalKind::Fallback),
                planner: None,
            },
        }
    }

    fn longest(items: &[Candidate], hand: &str) -> Option<Call> {
        Chooser::Longest.choose(items, &Hand::parse(hand).unwrap())
    }

    #[test]
    fn test_longer_suit_wins() {
        // C.D.H.S: three clubs, five diamonds
        let items = [
            candidate("1C", &[Suit::Clubs], 3),
            candidate("1D", &[Suit::Diamonds], 3),
        ];
        assert_eq!(longest(&items, "K53.QJ876.K76.AT"), Some(call("1D")));
    }

    #[test]
    fn test_four_four_minors_prefer_diamonds_at_the_one_level() {
        let hand = "Q642.A764.KQ9.J6";
        let one_level = [
            candidate("1C", &[Suit::Clubs], 3),
            candidate("1D", &[Suit::Diamonds], 3),
        ];
        assert_eq!(longest(&one_level, hand), Some(call("1D")));
        let two_level = [
            candidate("2C", &[Suit::Clubs], 4),
            candidate("2D", &[Suit::Diamonds], 4),
        ];
        assert_eq!(longest(&two_level, hand), Some(call("2C")));
    }

    #[test]
    fn test_three_three_minors_bid_clubs() {
        let items = [
            candidate("1C", &[Suit::Clubs], 3),
            candidate("1D", &[Suit::Diamonds], 3),
        ];
        assert_eq!(longest(&items, "752.AKQ.QT76.K98"), Some(call("1C")));
    }

    #[test]
    fn test_majors_up_the_line_unless_five_five() {
        let items = [
            candidate("1H", &[Suit::Hearts], 4),
            candidate("1S", &[Suit::Spades], 4),
        ];
        assert_eq!(longest(&items, "42.652.8643.KQJ4"), Some(call("1H")));
        assert_eq!(longest(&items, "64.6.AK732.QJ854"), Some(call("1S")));
    }

    #[test]
    fn test_same_suit_keeps_the_cheaper_call() {
        let items = [
            candidate("3C", &[Suit::Clubs], 6),
            candidate("5C", &[Suit::Clubs], 6),
        ];
        assert_eq!(longest(&items, "AQJ754.K7.QJ72.6"), Some(call("3C")));
        // A double showing both majors ties with 1S on spade length.
        let items = [
            candidate("X", &[Suit::Hearts, Suit::Spades], 4),
            candidate("1S", &[Suit::Spades], 5),
        ];
        assert_eq!(longest(&items, "32.432.432.AKQJ2"), Some(Call::Double));
    }

    #[test]
    fn test_calls_without_a_suit() {
        let hand = "Q642.A764.KQ9.J6";
        let notrump = candidate("1N", &[], 0);
        let items = [notrump.clone(), candidate("2D", &[Suit::Diamonds], 4)];
        assert_eq!(longest(&items, hand), Some(call("2D")));
        assert_eq!(longest(&[notrump], hand), Some(call("1N")));
        assert_eq!(longest(&[], hand), None);
    }
}
