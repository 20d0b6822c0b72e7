//! A table seen from one seat: the live configuration plus the auction.

use crate::bid::{Bid, BidTag, NaturalKind};
use crate::config::ConventionConfig;
use crate::decide::{decide, neutral_pass};
use crate::error::SessionError;
use crate::explain::{explain, Explanation};
use crate::fallback::{self, BidPredictor, PendingCorrection};
use tracing::{debug, warn};
use types::{Auction, Call, Hand, Position};

/// Below this many hcp a pass never looks odd enough to second-guess.
const IMPLAUSIBLE_PASS_HCP: u8 = 12;

/// First phase of a turn: the engine's own answer, computed synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    /// Index the auction was at when the turn began.
    pub turn: usize,
    /// `None` when the engine deferred.
    pub provisional: Option<Bid>,
    /// Whether asking the predictor is worthwhile.
    pub wants_correction: bool,
}

#[derive(Debug, Clone)]
pub struct BiddingSession {
    config: ConventionConfig,
    auction: Auction,
}

impl BiddingSession {
    pub fn new(config: ConventionConfig) -> Self {
        Self {
            config,
            auction: Auction::default(),
        }
    }

    pub fn with_auction(config: ConventionConfig, auction: Auction) -> Self {
        Self { config, auction }
    }

    /// Replace the auction with a fresh one dealt by `our_seat`.
    pub fn start_auction(&mut self, our_seat: Position, vulnerable_we: bool, vulnerable_they: bool) {
        self.auction = Auction::start(our_seat, vulnerable_we, vulnerable_they);
        debug!(%our_seat, vulnerability = ?self.auction.vulnerability, "auction started");
    }

    pub fn config(&self) -> &ConventionConfig {
        &self.config
    }

    /// Conventions may be toggled between turns; every decision reads the
    /// config afresh.
    pub fn config_mut(&mut self) -> &mut ConventionConfig {
        &mut self.config
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    /// The engine's call for our seat, or `None` when it is not our turn or
    /// the auction is over.
    pub fn get_bid(&self, hand: &Hand) -> Option<Bid> {
        let bid = decide(&self.auction, hand, self.auction.our_seat, &self.config)
            .bid()
            .cloned()?;
        if self.auction.is_legal(&bid.call) {
            debug!(call = %bid.call, rationale = %bid.rationale, "engine call");
            Some(bid)
        } else {
            warn!(call = %bid.call, rule = %bid.rationale, "engine produced an illegal call, passing");
            Some(neutral_pass(bid.seat))
        }
    }

    pub fn is_legal(&self, call: &Call) -> bool {
        self.auction.is_legal(call)
    }

    /// What `call` would mean as the next call.
    pub fn explain(&self, call: &Call) -> Explanation {
        explain(call, &self.auction, &self.config)
    }

    /// Append our own call. Returns its index in the auction.
    pub fn commit(&mut self, bid: &Bid) -> Result<usize, SessionError> {
        Ok(self.auction.add_seated(bid.seat, bid.call)?)
    }

    /// Append a call made at another seat.
    pub fn record(&mut self, call: Call) -> Result<usize, SessionError> {
        Ok(self.auction.add_call(call)?)
    }

    pub fn begin_turn(&self, hand: &Hand) -> PendingTurn {
        let provisional = self.get_bid(hand);
        let live = !self.auction.is_finished()
            && self.auction.current_player() == self.auction.our_seat;
        let wants_correction = live
            && match &provisional {
                None => true,
                Some(bid) => bid.call == Call::Pass && hand.hcp() >= IMPLAUSIBLE_PASS_HCP,
            };
        PendingTurn {
            turn: self.auction.turn(),
            provisional,
            wants_correction,
        }
    }

    /// Second phase: ask `predictor` for a better call at the current turn.
    pub fn request_correction<'a>(
        &self,
        predictor: &'a dyn BidPredictor,
        hand: &Hand,
    ) -> PendingCorrection<'a> {
        fallback::request_correction(
            predictor,
            &self.auction,
            hand,
            self.config.general.predictor_min_confidence,
        )
    }

    /// Commit the corrected or provisional call, provided the auction has
    /// not moved on since `pending` was taken. A correction only replaces a
    /// deferral or an implausible pass.
    pub fn finalize(
        &mut self,
        pending: PendingTurn,
        correction: Option<Call>,
    ) -> Result<Option<Bid>, SessionError> {
        let actual = self.auction.turn();
        if actual != pending.turn {
            warn!(expected = pending.turn, actual, "discarding stale turn result");
            return Err(SessionError::StaleTurn {
                expected: pending.turn,
                actual,
            });
        }

        if correction.is_some() && !pending.wants_correction {
            debug!("engine call stands, ignoring correction");
        }
        let corrected = correction
            .filter(|_| pending.wants_correction)
            .filter(|call| self.auction.is_legal(call))
            .map(|call| Bid {
                call,
                seat: self.auction.current_player(),
                tag: BidTag::Natural(NaturalKind::Fallback),
                rationale: "Predicted call".to_string(),
            });
        let Some(bid) = corrected.or(pending.provisional) else {
            return Ok(None);
        };
        self.commit(&bid)?;
        Ok(Some(bid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::ConventionId;
    use crate::error::PredictorError;
    use crate::fallback::{Prediction, PredictionRequest};
    use async_trait::async_trait;
    use futures::executor::block_on;

    fn hand(s: &str) -> Hand {
        Hand::parse(s).unwrap()
    }

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    struct Always(&'static str);

    #[async_trait]
    impl BidPredictor for Always {
        async fn predict(&self, _request: &PredictionRequest) -> Result<Prediction, PredictorError> {
            Ok(Prediction {
                token: self.0.to_string(),
                confidence: 0.95,
            })
        }
    }

    #[test]
    fn test_start_auction_sets_relative_vulnerability() {
        let mut session = BiddingSession::new(ConventionConfig::default());
        session.start_auction(Position::East, true, false);
        assert_eq!(session.auction().dealer, Position::East);
        assert!(session.auction().is_vulnerable(Position::West));
        assert!(!session.auction().is_vulnerable(Position::North));
    }

    #[test]
    fn test_get_bid_and_commit() {
        let mut session = BiddingSession::new(ConventionConfig::default());
        session.start_auction(Position::South, false, false);
        let bid = session.get_bid(&hand("K32.Q32.AK32.KJ2")).unwrap();
        assert_eq!(bid.call, call("1N"));
        assert_eq!(session.commit(&bid), Ok(0));
        // Now West is on turn.
        assert_eq!(session.get_bid(&hand("K32.Q32.AK32.KJ2")), None);
    }

    #[test]
    fn test_commit_out_of_turn_fails() {
        let mut session = BiddingSession::new(ConventionConfig::default());
        session.start_auction(Position::South, false, false);
        let bid = neutral_pass(Position::North);
        assert!(matches!(session.commit(&bid), Err(SessionError::Auction(_))));
    }

    #[test]
    fn test_toggling_between_turns_changes_the_answer() {
        let mut auction = Auction::bidding(Position::North, "1N P");
        auction.reseat(Position::South);
        let mut session = BiddingSession::with_auction(ConventionConfig::default(), auction);
        // Four cards in each major, 10 hcp.
        let major = hand("32.K32.AQ32.J432");
        assert_eq!(session.get_bid(&major).unwrap().call, call("2C"));

        session.config_mut().disable(ConventionId::Stayman);
        assert_ne!(session.get_bid(&major).unwrap().call, call("2C"));
    }

    #[test]
    fn test_explain_uses_the_session_auction() {
        let mut session = BiddingSession::new(ConventionConfig::default());
        session.start_auction(Position::North, false, false);
        let explanation = session.explain(&call("1N"));
        assert_eq!(explanation.rule_name.as_deref(), Some("1NT Opening"));
    }

    #[test]
    fn test_strong_hand_pass_asks_for_correction() {
        let mut auction = Auction::bidding(Position::North, "1S");
        auction.reseat(Position::East);
        let session = BiddingSession::with_auction(ConventionConfig::default(), auction);
        // 15 hcp, long in the opponent's suit, nothing to bid.
        let strong = hand("K2.Q2.5432.AKQJ2");
        let pending = session.begin_turn(&strong);
        assert_eq!(pending.turn, 1);
        assert_eq!(pending.provisional.map(|bid| bid.call), Some(Call::Pass));
        assert!(pending.wants_correction);

        let weak = hand("32.32.5432.Q5432");
        assert!(!session.begin_turn(&weak).wants_correction);
    }

    #[test]
    fn test_no_correction_when_not_on_turn() {
        let session = BiddingSession::with_auction(
            ConventionConfig::default(),
            Auction::bidding(Position::North, "1S"),
        );
        let pending = session.begin_turn(&hand("K2.Q2.5432.AKQJ2"));
        assert_eq!(pending.provisional, None);
        assert!(!pending.wants_correction);
    }

    #[test]
    fn test_finalize_applies_correction() {
        let mut auction = Auction::bidding(Position::North, "1S");
        auction.reseat(Position::East);
        let mut session = BiddingSession::with_auction(ConventionConfig::default(), auction);
        let our_hand = hand("K2.Q2.5432.AKQJ2");
        let pending = session.begin_turn(&our_hand);
        let correction = block_on(session.request_correction(&Always("2C"), &our_hand).outcome());
        let bid = session.finalize(pending, correction).unwrap().unwrap();
        assert_eq!(bid.call, call("2C"));
        assert_eq!(bid.tag, BidTag::Natural(NaturalKind::Fallback));
        assert_eq!(session.auction().len(), 2);
    }

    #[test]
    fn test_finalize_rejects_illegal_correction() {
        let mut auction = Auction::bidding(Position::North, "1S");
        auction.reseat(Position::East);
        let mut session = BiddingSession::with_auction(ConventionConfig::default(), auction);
        let pending = session.begin_turn(&hand("K2.Q2.5432.AKQJ2"));
        assert!(pending.wants_correction);
        // Redouble needs an opposing double.
        let bid = session.finalize(pending, Some(Call::Redouble)).unwrap();
        assert_eq!(bid.map(|bid| bid.call), Some(Call::Pass));
        assert_eq!(session.auction().tokens(), vec!["1S", "P"]);
    }

    #[test]
    fn test_finalize_keeps_a_forced_call() {
        let mut auction = Auction::bidding(Position::North, "2C P");
        auction.reseat(Position::South);
        let mut session = BiddingSession::with_auction(ConventionConfig::default(), auction);
        let pending = session.begin_turn(&hand("5432.5432.432.32"));
        assert_eq!(pending.provisional.as_ref().map(|bid| bid.call), Some(call("2D")));
        assert!(!pending.wants_correction);

        let bid = session.finalize(pending, Some(Call::Pass)).unwrap().unwrap();
        assert_eq!(bid.call, call("2D"));
        assert_eq!(session.auction().tokens(), vec!["2C", "P", "2D"]);
    }

    #[test]
    fn test_finalize_keeps_a_sound_call() {
        let mut session = BiddingSession::new(ConventionConfig::default());
        session.start_auction(Position::North, false, false);
        let pending = session.begin_turn(&hand("K32.Q32.AK32.KJ2"));
        assert!(!pending.wants_correction);
        let bid = session.finalize(pending, Some(call("1C"))).unwrap();
        assert_eq!(bid.map(|bid| bid.call), Some(call("1N")));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut session = BiddingSession::new(ConventionConfig::default());
        session.start_auction(Position::North, false, false);
        let our_hand = hand("K32.Q32.AK32.KJ2");
        let pending = session.begin_turn(&our_hand);
        session.record(call("P")).unwrap();
        assert_eq!(
            session.finalize(pending, None),
            Err(SessionError::StaleTurn {
                expected: 0,
                actual: 1
            })
        );
        assert_eq!(session.auction().len(), 1);
    }
}
