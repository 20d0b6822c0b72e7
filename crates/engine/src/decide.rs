//! One turn of the engine: defer, or pick a call and say why.

use crate::bid::{Bid, BidTag, Decision, NaturalKind};
use crate::config::ConventionConfig;
use crate::kernel::{AuctionModel, BidTrace, CallSelector};
use tracing::debug;
use types::{Auction, Call, Hand, Position};

const NO_RULE: &str = "Pass (no rule applies)";

/// The engine's call for `our_seat`, or [`Decision::Defer`] when the auction
/// is over or another seat is on turn.
pub fn decide(
    auction: &Auction,
    hand: &Hand,
    our_seat: Position,
    config: &ConventionConfig,
) -> Decision {
    decide_with_trace(auction, hand, our_seat, config).0
}

/// Like [`decide`], also returning every rule and call the selector tried.
/// The trace is `None` when the engine deferred.
pub fn decide_with_trace<'a>(
    auction: &Auction,
    hand: &Hand,
    our_seat: Position,
    config: &'a ConventionConfig,
) -> (Decision, Option<BidTrace<'a>>) {
    if auction.is_finished() {
        debug!("auction is over, deferring");
        return (Decision::Defer, None);
    }
    if auction.current_player() != our_seat {
        debug!(on_turn = %auction.current_player(), %our_seat, "not our turn, deferring");
        return (Decision::Defer, None);
    }

    let model = AuctionModel::from_auction(auction, config);
    let trace = CallSelector::select_with_trace(hand, &model);
    let bid = match &trace.selected {
        Some(selected) => Bid {
            call: selected.call,
            seat: our_seat,
            tag: selected.semantics.tag,
            rationale: selected.semantics.rationale(),
        },
        None => {
            debug!("no rule matched, passing");
            neutral_pass(our_seat)
        }
    };
    (Decision::Bid(bid), Some(trace))
}

/// A pass that claims nothing about the hand.
pub(crate) fn neutral_pass(seat: Position) -> Bid {
    Bid {
        call: Call::Pass,
        seat,
        tag: BidTag::Natural(NaturalKind::Pass),
        rationale: NO_RULE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bid::ConventionRole;
    use crate::conventions::ConventionId;

    fn hand(s: &str) -> Hand {
        Hand::parse(s).unwrap()
    }

    #[test]
    fn test_defers_when_not_our_turn() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H");
        let decision = decide(&auction, &hand("K32.Q32.KJ32.Q32"), Position::North, &config);
        assert_eq!(decision, Decision::Defer);
    }

    #[test]
    fn test_defers_when_auction_is_over() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "P P P P");
        let decision = decide(&auction, &hand("K32.Q32.KJ32.Q32"), Position::North, &config);
        assert_eq!(decision, Decision::Defer);
    }

    #[test]
    fn test_two_club_opening_is_tagged_as_an_ask() {
        let config = ConventionConfig::default();
        let auction = Auction::new(Position::North);
        // 25 hcp.
        let decision = decide(&auction, &hand("AK2.AK2.AQ32.KQ2"), Position::North, &config);
        let bid = decision.bid().unwrap();
        assert_eq!(bid.call, "2C".parse().unwrap());
        assert_eq!(
            bid.tag,
            BidTag::Convention {
                id: ConventionId::StrongTwoClubs,
                role: ConventionRole::Ask
            }
        );
    }

    #[test]
    fn test_bust_responder_keeps_bidding_after_two_notrump_rebid() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "2C P 2D P 2N P");
        let decision = decide(&auction, &hand("5432.5432.432.32"), Position::South, &config);
        let bid = decision.bid().unwrap();
        assert_eq!(bid.call, "3N".parse().unwrap());
        assert_eq!(bid.tag, BidTag::Natural(NaturalKind::Forced));
    }

    #[test]
    fn test_unmatched_hand_passes_neutrally() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1C");
        let decision = decide(&auction, &hand("32.32.Q5432.K432"), Position::East, &config);
        let bid = decision.bid().unwrap();
        assert_eq!(bid.call, Call::Pass);
        assert_eq!(bid.seat, Position::East);
        assert_eq!(bid.tag, BidTag::Natural(NaturalKind::Pass));
    }

    #[test]
    fn test_trace_records_rejections() {
        let config = ConventionConfig::default();
        let auction = Auction::new(Position::North);
        let (decision, trace) =
            decide_with_trace(&auction, &hand("32.32.Q5432.K432"), Position::North, &config);
        assert_eq!(decision.call(), Some(Call::Pass));
        let trace = trace.unwrap();
        assert!(trace.rejected().any(|step| step.rule_name == "1NT Opening"));
    }
}
