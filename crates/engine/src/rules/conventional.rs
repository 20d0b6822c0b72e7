//! Rules backed by the convention catalog: the asks it recognizes, the
//! replies it generates and the asker's continuation after the reply.

use crate::bid::{BidTag, ConventionRole};
use crate::conventions::{catalog, slam, ConventionId, Meaning};
use crate::dsl::annotations::Annotation;
use crate::dsl::auction_predicates::{AuctionPredicate, OurAskAnswered, PartnerAsked};
use crate::dsl::call_predicates::{not_call, CallPredicate, IsPass, Recognized};
use crate::dsl::planner::Planner;
use crate::dsl::rule::Rule;
use crate::dsl::shows::{
    ShowAskStrength, ShowConventionMeaning, ShowDecodedReply, ShowMinSuitLength, Shows,
};
use crate::kernel::{AuctionModel, HandConstraint};
use std::sync::Arc;
use types::{Call, Hand, Strain, Suit};

/// Conventions whose replies and continuations come from the catalog.
pub const GENERATED: [ConventionId; 12] = [
    ConventionId::StrongTwoClubs,
    ConventionId::Stayman,
    ConventionId::JacobyTransfers,
    ConventionId::Michaels,
    ConventionId::UnusualNotrump,
    ConventionId::Blackwood,
    ConventionId::RomanKeyCard,
    ConventionId::Gerber,
    ConventionId::Dont,
    ConventionId::Cappelletti,
    ConventionId::Landy,
    ConventionId::StrongClubDefense,
];

pub const SLAM_ASKS: [ConventionId; 3] = [
    ConventionId::Blackwood,
    ConventionId::RomanKeyCard,
    ConventionId::Gerber,
];

fn is_slam_ask(id: ConventionId) -> bool {
    SLAM_ASKS.contains(&id)
}

/// Whether partner may pass this ask.
fn ask_is_forcing(id: ConventionId, call: &Call) -> bool {
    match id {
        ConventionId::Dont => *call == Call::Double,
        ConventionId::Cappelletti => matches!(
            call.strain(),
            Some(Strain::Clubs | Strain::Diamonds | Strain::NoTrump)
        ),
        ConventionId::StrongClubDefense => {
            *call == Call::Double || call.strain() == Some(Strain::NoTrump)
        }
        _ => true,
    }
}

/// Replies and continuations for every generated convention, in catalog order.
pub fn replies_and_continuations(ids: &[ConventionId]) -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();
    for &id in ids {
        rules.push(Box::new(ConventionReply(id)));
        rules.push(Box::new(ConventionContinuation(id)));
    }
    rules
}

/// The seat on turn makes convention `id`'s ask.
#[derive(Debug, Clone, Copy)]
pub struct ConventionAsk(pub ConventionId);

impl Rule for ConventionAsk {
    fn name(&self, _call: &Call) -> String {
        self.0.label().to_string()
    }

    fn tag(&self) -> BidTag {
        BidTag::ask(self.0)
    }

    fn auction_criteria(&self) -> Vec<Box<dyn AuctionPredicate>> {
        vec![]
    }

    fn call_predicates(&self) -> Vec<Box<dyn CallPredicate>> {
        vec![Box::new(Recognized(self.0))]
    }

    fn shows(&self) -> Vec<Box<dyn Shows>> {
        vec![
            Box::new(ShowConventionMeaning(self.0)),
            Box::new(ShowAskStrength(self.0)),
        ]
    }

    fn call_annotations(&self, _auction: &AuctionModel, call: &Call) -> Vec<Annotation> {
        let mut annotations = vec![Annotation::Artificial];
        if self.0 == ConventionId::StrongTwoClubs {
            annotations.push(Annotation::GameForcing);
        } else if ask_is_forcing(self.0, call) {
            annotations.push(Annotation::Forcing);
        }
        annotations
    }

    fn planner(&self) -> Option<Arc<dyn Planner>> {
        Some(Arc::new(AskPlanner(self.0)))
    }
}

/// Partner asked; the seat on turn answers as the convention dictates.
#[derive(Debug, Clone, Copy)]
pub struct ConventionReply(pub ConventionId);

impl Rule for ConventionReply {
    fn name(&self, _call: &Call) -> String {
        format!("{} Reply", self.0.label())
    }

    fn tag(&self) -> BidTag {
        BidTag::Convention {
            id: self.0,
            role: ConventionRole::Reply,
        }
    }

    fn auction_criteria(&self) -> Vec<Box<dyn AuctionPredicate>> {
        vec![Box::new(PartnerAsked(self.0))]
    }

    fn call_predicates(&self) -> Vec<Box<dyn CallPredicate>> {
        vec![Box::new(not_call(IsPass))]
    }

    fn shows(&self) -> Vec<Box<dyn Shows>> {
        if self.0 == ConventionId::StrongTwoClubs {
            vec![Box::new(ShowDecodedReply(self.0)), Box::new(ShowPositiveSuit)]
        } else {
            vec![Box::new(ShowDecodedReply(self.0))]
        }
    }

    fn call_annotations(&self, _auction: &AuctionModel, call: &Call) -> Vec<Annotation> {
        let artificial =
            is_slam_ask(self.0) || (self.0 == ConventionId::StrongTwoClubs && *call == WAITING);
        if artificial {
            vec![Annotation::Artificial]
        } else {
            vec![]
        }
    }

    fn planner(&self) -> Option<Arc<dyn Planner>> {
        Some(Arc::new(GeneratedReplyPlanner(self.0)))
    }
}

const WAITING: Call = Call::Bid {
    level: 2,
    strain: Strain::Diamonds,
};

/// A positive suit reply to 2♣ promises five cards.
#[derive(Debug)]
struct ShowPositiveSuit;
impl Shows for ShowPositiveSuit {
    fn show(&self, _auction: &AuctionModel, call: &Call) -> Vec<HandConstraint> {
        match call.suit() {
            Some(suit) if *call != WAITING => vec![HandConstraint::MinLength(suit, 5)],
            _ => vec![],
        }
    }
}

/// Our ask has been answered; the asker places the contract or rebids.
#[derive(Debug, Clone, Copy)]
pub struct ConventionContinuation(pub ConventionId);

impl Rule for ConventionContinuation {
    fn name(&self, _call: &Call) -> String {
        format!("{} Continuation", self.0.label())
    }

    fn tag(&self) -> BidTag {
        BidTag::Convention {
            id: self.0,
            role: ConventionRole::Continuation,
        }
    }

    fn auction_criteria(&self) -> Vec<Box<dyn AuctionPredicate>> {
        vec![Box::new(OurAskAnswered(self.0))]
    }

    fn call_predicates(&self) -> Vec<Box<dyn CallPredicate>> {
        vec![]
    }

    fn shows(&self) -> Vec<Box<dyn Shows>> {
        if self.0 == ConventionId::StrongTwoClubs {
            // Opener rebids a four-card or longer suit.
            vec![Box::new(ShowMinSuitLength(4))]
        } else {
            vec![]
        }
    }

    fn planner(&self) -> Option<Arc<dyn Planner>> {
        if is_slam_ask(self.0) {
            Some(Arc::new(SlamSignoffPlanner(self.0)))
        } else {
            Some(Arc::new(ContinuationPlanner(self.0)))
        }
    }
}

/// Makes an ask only with the shape its meaning promises.
pub struct AskPlanner(pub ConventionId);

impl AskPlanner {
    fn has_fit(model: &AuctionModel, hand: &Hand) -> bool {
        let side = model.auction.current_partnership();
        let trump = slam::side_last_suit(&model.auction, side).or_else(|| model.partner_suit());
        trump.is_some_and(|suit| hand.length(suit) + model.partner_hand().min_length(suit) >= 8)
    }
}

impl Planner for AskPlanner {
    fn applies(
        &self,
        auction: &AuctionModel,
        hand: &Hand,
        call: &Call,
        shows: &[HandConstraint],
    ) -> bool {
        if !shows.iter().all(|constraint| constraint.check(hand)) {
            return false;
        }
        let meaning = catalog().describe(self.0, &auction.auction, auction.config, call);
        match (self.0, meaning) {
            (_, Some(Meaning::TwoSuited { suits, min_length })) => {
                suits.held_by(hand, min_length.max(5), min_length)
            }
            // DONT-style doubles leave spades to the natural 2♠.
            (id, Some(Meaning::OneSuited)) => Suit::ALL.into_iter().any(|suit| {
                let dont_style = matches!(id, ConventionId::Dont | ConventionId::StrongClubDefense);
                hand.length(suit) >= 6 && !(dont_style && suit == Suit::Spades)
            }),
            (ConventionId::Stayman, _) => Suit::MAJORS.into_iter().any(|suit| hand.length(suit) >= 4),
            (ConventionId::Blackwood | ConventionId::RomanKeyCard, _) => Self::has_fit(auction, hand),
            _ => true,
        }
    }
}

/// Accepts exactly the reply the catalog generates for the hand.
pub struct GeneratedReplyPlanner(pub ConventionId);

impl Planner for GeneratedReplyPlanner {
    fn applies(
        &self,
        auction: &AuctionModel,
        hand: &Hand,
        call: &Call,
        _shows: &[HandConstraint],
    ) -> bool {
        catalog().reply(self.0, &auction.auction, auction.config, hand) == Some(*call)
    }
}

/// Accepts exactly the continuation the catalog generates for the hand.
pub struct ContinuationPlanner(pub ConventionId);

impl Planner for ContinuationPlanner {
    fn applies(
        &self,
        auction: &AuctionModel,
        hand: &Hand,
        call: &Call,
        _shows: &[HandConstraint],
    ) -> bool {
        catalog().continuation(self.0, &auction.auction, auction.config, hand) == Some(*call)
    }
}

/// Places the contract after an ace or key-card reply, counting partner's
/// shown minimum towards slam values.
pub struct SlamSignoffPlanner(pub ConventionId);

impl Planner for SlamSignoffPlanner {
    fn applies(
        &self,
        auction: &AuctionModel,
        hand: &Hand,
        call: &Call,
        _shows: &[HandConstraint],
    ) -> bool {
        let Some((trump, missing)) =
            slam::missing_controls(self.0, &auction.auction, auction.config, hand)
        else {
            return false;
        };
        let combined = hand.hcp() + auction.partner_min_hcp();
        slam::sign_off(&auction.auction, trump, missing, combined) == *call
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use types::{Auction, Position};

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    fn applies(rule: &dyn Rule, model: &AuctionModel, hand: &Hand, call: &Call) -> bool {
        let Some(semantics) = rule.get_semantics(model, call) else {
            return false;
        };
        semantics
            .planner
            .as_ref()
            .is_some_and(|planner| planner.applies(model, hand, call, &semantics.shows))
    }

    #[test]
    fn test_stayman_ask_needs_a_major() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P");
        let model = AuctionModel::from_auction(&auction, &config);
        let with_major = Hand::parse("32.K32.AQ32.J432").unwrap();
        let without = Hand::parse("K432.AQ32.J32.32").unwrap();

        let semantics = ConventionAsk(ConventionId::Stayman)
            .get_semantics(&model, &call("2C"))
            .unwrap();
        assert!(semantics.has_annotation(Annotation::Forcing));
        assert!(semantics.shows.contains(&HandConstraint::MinHcp(8)));
        assert!(applies(&ConventionAsk(ConventionId::Stayman), &model, &with_major, &call("2C")));
        assert!(!applies(&ConventionAsk(ConventionId::Stayman), &model, &without, &call("2C")));
    }

    #[test]
    fn test_two_clubs_is_game_forcing() {
        let config = ConventionConfig::default();
        let model = AuctionModel::from_auction(&Auction::new(Position::North), &config);
        let semantics = ConventionAsk(ConventionId::StrongTwoClubs)
            .get_semantics(&model, &call("2C"))
            .unwrap();
        assert!(semantics.has_annotation(Annotation::GameForcing));
        assert!(semantics.shows.contains(&HandConstraint::MinHcp(22)));
    }

    #[test]
    fn test_reply_follows_the_generator() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P 2C P");
        let model = AuctionModel::from_auction(&auction, &config);
        let four_hearts = Hand::parse("Q32.K32.AQ32.K32").unwrap();
        let reply = ConventionReply(ConventionId::Stayman);

        assert!(applies(&reply, &model, &four_hearts, &call("2H")));
        assert!(!applies(&reply, &model, &four_hearts, &call("2D")));
        assert_eq!(
            reply.get_semantics(&model, &call("2H")).unwrap().tag,
            BidTag::Convention {
                id: ConventionId::Stayman,
                role: ConventionRole::Reply
            }
        );
        assert!(reply.get_semantics(&model, &Call::Pass).is_none());
    }

    #[test]
    fn test_two_notrump_rebid_keeps_the_game_force() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "2C P 2D P 2N P");
        let model = AuctionModel::from_auction(&auction, &config);
        assert!(model.game_forcing());
    }

    #[test]
    fn test_dont_single_suit_double_is_the_only_forcing_call() {
        assert!(ask_is_forcing(ConventionId::Dont, &Call::Double));
        assert!(!ask_is_forcing(ConventionId::Dont, &call("2H")));
        assert!(ask_is_forcing(ConventionId::Cappelletti, &call("2D")));
        assert!(!ask_is_forcing(ConventionId::Cappelletti, &call("2S")));
    }
}
