use crate::bid::BidTag;
use crate::conventions::ConventionId;
use crate::dsl::annotations::Annotation;
use crate::dsl::auction_predicates::AuctionPredicate;
use crate::dsl::call_predicates::CallPredicate;
use crate::dsl::planner::Planner;
use crate::dsl::shows::Shows;
use crate::kernel::{AuctionModel, CallSemantics, Chooser, HandConstraint};
use std::sync::Arc;
use types::Call;

/// A bidding rule
pub trait Rule: Send + Sync {
    /// The name of the rule for the given call
    fn name(&self, call: &Call) -> String;

    /// How calls made under this rule are labelled
    fn tag(&self) -> BidTag;

    /// A convention that must be enabled, beyond the one named by the tag
    fn requires(&self) -> Option<ConventionId> {
        None
    }

    /// Auction criteria that must be met for this rule to apply
    fn auction_criteria(&self) -> Vec<Box<dyn AuctionPredicate>>;

    /// Call predicates that must be met for this rule to apply
    fn call_predicates(&self) -> Vec<Box<dyn CallPredicate>>;

    /// What this rule shows about the hand
    fn shows(&self) -> Vec<Box<dyn Shows>>;

    /// Metadata about this bid (not hand constraints)
    fn annotations(&self) -> Vec<Annotation> {
        vec![]
    }

    /// Annotations for one particular call. Defaults to [`Rule::annotations`].
    fn call_annotations(&self, _auction: &AuctionModel, _call: &Call) -> Vec<Annotation> {
        self.annotations()
    }

    /// Optional planner for this rule
    fn planner(&self) -> Option<Arc<dyn Planner>> {
        None
    }

    /// How to pick among several satisfied calls
    fn chooser(&self) -> Chooser {
        Chooser::Cheapest
    }

    /// Whether the configuration switches this rule on.
    fn enabled(&self, auction: &AuctionModel) -> bool {
        [self.requires(), self.tag().convention()]
            .into_iter()
            .flatten()
            .all(|id| auction.config.is_enabled(id))
    }

    /// Try to interpret a call using this rule.
    fn get_semantics(&self, auction: &AuctionModel, call: &Call) -> Option<CallSemantics> {
        if !self.enabled(auction) {
            return None;
        }

        // Check auction criteria
        for criterion in self.auction_criteria() {
            if !criterion.check(auction) {
                return None;
            }
        }

        // Check call predicates
        for predicate in self.call_predicates() {
            if !predicate.check(auction, call) {
                return None;
            }
        }

        // Collect constraints
        let mut constraints = Vec::new();
        for show in self.shows() {
            constraints.extend(show.show(auction, call));
        }

        Some(CallSemantics {
            shows: HandConstraint::optimize(constraints),
            annotations: self.call_annotations(auction, call),
            rule_name: self.name(call),
            tag: self.tag(),
            planner: self.planner(),
        })
    }
}
