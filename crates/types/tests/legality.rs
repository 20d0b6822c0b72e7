//! Property-based tests for the auction legality checker.
//!
//! Random auctions are grown by picking from `legal_calls()`; at every step
//! the checker must agree with the laws on what may be appended, and the
//! completion rule must hold.

use proptest::prelude::*;
use types::{Auction, AuctionError, Call, DoubleStatus, Position};

fn dealer_strategy() -> impl Strategy<Value = Position> {
    prop::sample::select(Position::ALL.to_vec())
}

fn every_call() -> Vec<Call> {
    std::iter::once(Call::Pass)
        .chain(Call::all_bids())
        .chain([Call::Double, Call::Redouble])
        .collect()
}

/// Grow an auction by repeatedly choosing among the legal calls.
fn grow(dealer: Position, picks: &[usize]) -> Auction {
    let mut auction = Auction::new(dealer);
    for pick in picks {
        let legal = auction.legal_calls();
        if legal.is_empty() {
            break;
        }
        // Favour passes so auctions actually finish.
        let call = if pick % 3 == 0 {
            Call::Pass
        } else {
            legal[pick % legal.len()]
        };
        auction.add_call(call).expect("legal call rejected");
    }
    auction
}

fn expected_finished(auction: &Auction) -> bool {
    let calls: Vec<Call> = auction.calls().collect();
    if calls.len() < 4 {
        return false;
    }
    if calls.iter().all(Call::is_pass) {
        return true;
    }
    calls[calls.len() - 3..].iter().all(Call::is_pass)
}

proptest! {
    #[test]
    fn appended_calls_are_always_legal(
        dealer in dealer_strategy(),
        picks in prop::collection::vec(0usize..64, 0..40),
    ) {
        let auction = grow(dealer, &picks);
        let replayed = Auction::from_calls(dealer, &auction.calls().collect::<Vec<_>>());
        prop_assert!(replayed.is_ok());
    }

    #[test]
    fn legal_bids_strictly_outrank_the_last_bid(
        dealer in dealer_strategy(),
        picks in prop::collection::vec(0usize..64, 0..40),
    ) {
        let auction = grow(dealer, &picks);
        if let Some((_, last)) = auction.last_bid() {
            for call in auction.legal_calls().iter().filter(|c| c.is_bid()) {
                prop_assert!(call.outranks(&last));
            }
        }
    }

    #[test]
    fn doubles_and_redoubles_follow_the_contract(
        dealer in dealer_strategy(),
        picks in prop::collection::vec(0usize..64, 0..40),
    ) {
        let auction = grow(dealer, &picks);
        let side = auction.current_partnership();
        let contract = auction.current_contract();
        let legal = auction.legal_calls();
        if legal.contains(&Call::Double) {
            let c = contract.expect("double without a contract");
            prop_assert!(!c.belongs_to(side));
            prop_assert_eq!(c.double_status, DoubleStatus::Undoubled);
        }
        if legal.contains(&Call::Redouble) {
            let c = contract.expect("redouble without a contract");
            prop_assert!(c.belongs_to(side));
            prop_assert_eq!(c.double_status, DoubleStatus::Doubled);
        }
    }

    #[test]
    fn illegal_calls_are_rejected(
        dealer in dealer_strategy(),
        picks in prop::collection::vec(0usize..64, 0..40),
        choice in 0usize..38,
    ) {
        let mut auction = grow(dealer, &picks);
        let call = every_call()[choice];
        let legal = auction.is_legal(&call);
        let before = auction.len();
        let result = auction.add_call(call);
        prop_assert_eq!(result.is_ok(), legal);
        if !legal {
            prop_assert_eq!(auction.len(), before);
            let rejected = matches!(
                result,
                Err(AuctionError::Illegal { .. }) | Err(AuctionError::Ended)
            );
            prop_assert!(rejected, "unexpected {:?}", result);
        }
    }

    #[test]
    fn completion_rule_holds(
        dealer in dealer_strategy(),
        picks in prop::collection::vec(0usize..64, 0..60),
    ) {
        let auction = grow(dealer, &picks);
        prop_assert_eq!(auction.is_finished(), expected_finished(&auction));
        if auction.is_finished() {
            prop_assert!(auction.legal_calls().is_empty());
        }
    }
}
