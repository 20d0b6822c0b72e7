//! Boundary to an external call predictor.
//!
//! The predictor is consulted only when the rule engine has nothing
//! plausible to say. Its answer arrives asynchronously, so a request is
//! tied to the auction turn it was made for and can be abandoned at any
//! point. The engine never waits on a predictor to make its own decision.

use crate::error::PredictorError;
use async_trait::async_trait;
use futures::future::{AbortHandle, Abortable, Aborted, BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use types::{Auction, Call, Hand, Position, Vulnerability};

/// Everything a predictor gets to see about the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Calls so far as "1C", "P", "X", "XX" tokens.
    pub tokens: Vec<String>,
    /// The hand in C.D.H.S form.
    pub hand: String,
    pub dealer: Position,
    pub vulnerability: Vulnerability,
    /// Index of the call being predicted.
    pub turn: usize,
}

impl PredictionRequest {
    pub fn new(auction: &Auction, hand: &Hand) -> Self {
        Self {
            tokens: auction.tokens(),
            hand: hand.to_string(),
            dealer: auction.dealer,
            vulnerability: auction.vulnerability,
            turn: auction.turn(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub token: String,
    /// In `[0, 1]`.
    pub confidence: f32,
}

#[async_trait]
pub trait BidPredictor: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictorError>;
}

/// An in-flight correction for one turn.
pub struct PendingCorrection<'a> {
    pub turn: usize,
    future: Abortable<BoxFuture<'a, Option<Call>>>,
    handle: AbortHandle,
}

impl<'a> PendingCorrection<'a> {
    /// Handle that cancels the request, e.g. when the auction moves on.
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    /// The accepted correction, or `None` if there is none or the request
    /// was aborted.
    pub async fn outcome(self) -> Option<Call> {
        match self.future.await {
            Ok(call) => call,
            Err(Aborted) => {
                debug!(turn = self.turn, "correction aborted");
                None
            }
        }
    }
}

/// Ask `predictor` for a call at the current turn of `auction`.
///
/// The prediction is accepted only when its confidence reaches
/// `threshold`, its token parses and the call is legal at that turn.
pub fn request_correction<'a>(
    predictor: &'a dyn BidPredictor,
    auction: &Auction,
    hand: &Hand,
    threshold: f32,
) -> PendingCorrection<'a> {
    let request = PredictionRequest::new(auction, hand);
    let turn = request.turn;
    let auction = auction.clone();
    let future = async move {
        let prediction = match predictor.predict(&request).await {
            Ok(prediction) => prediction,
            Err(err) => {
                warn!(turn, %err, "predictor failed, no correction");
                return None;
            }
        };
        accept(&prediction, &auction, threshold)
    }
    .boxed();
    let (handle, registration) = AbortHandle::new_pair();
    PendingCorrection {
        turn,
        future: Abortable::new(future, registration),
        handle,
    }
}

fn accept(prediction: &Prediction, auction: &Auction, threshold: f32) -> Option<Call> {
    if prediction.confidence.is_nan() || prediction.confidence < threshold {
        debug!(
            token = %prediction.token,
            confidence = prediction.confidence,
            threshold,
            "prediction below threshold"
        );
        return None;
    }
    let call: Call = match prediction.token.parse() {
        Ok(call) => call,
        Err(err) => {
            warn!(token = %prediction.token, %err, "unparseable prediction");
            return None;
        }
    };
    if !auction.is_legal(&call) {
        warn!(%call, "predicted call is illegal here");
        return None;
    }
    Some(call)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct Fixed(Result<Prediction, PredictorError>);

    #[async_trait]
    impl BidPredictor for Fixed {
        async fn predict(&self, _request: &PredictionRequest) -> Result<Prediction, PredictorError> {
            self.0.clone()
        }
    }

    fn predicting(token: &str, confidence: f32) -> Fixed {
        Fixed(Ok(Prediction {
            token: token.to_string(),
            confidence,
        }))
    }

    fn hand() -> Hand {
        Hand::parse("AK2.KQ2.AJ32.Q32").unwrap()
    }

    #[test]
    fn test_request_describes_the_table() {
        let auction = Auction::bidding(Position::East, "1H P")
            .with_vulnerability(Vulnerability::EW);
        let request = PredictionRequest::new(&auction, &hand());
        assert_eq!(request.tokens, vec!["1H", "P"]);
        assert_eq!(request.dealer, Position::East);
        assert_eq!(request.vulnerability, Vulnerability::EW);
        assert_eq!(request.turn, 2);
        assert_eq!(Hand::parse(&request.hand).unwrap(), hand());
    }

    #[test]
    fn test_confident_legal_prediction_is_accepted() {
        let predictor = predicting("2N", 0.9);
        let auction = Auction::bidding(Position::North, "1H P");
        let pending = request_correction(&predictor, &auction, &hand(), 0.65);
        assert_eq!(pending.turn, 2);
        assert_eq!(block_on(pending.outcome()), Some("2N".parse().unwrap()));
    }

    #[test]
    fn test_low_confidence_is_discarded() {
        let predictor = predicting("2N", 0.3);
        let auction = Auction::bidding(Position::North, "1H P");
        let pending = request_correction(&predictor, &auction, &hand(), 0.65);
        assert_eq!(block_on(pending.outcome()), None);
    }

    #[test]
    fn test_illegal_and_garbled_predictions_are_discarded() {
        let auction = Auction::bidding(Position::North, "1H P");
        let illegal = predicting("1C", 0.99);
        assert_eq!(
            block_on(request_correction(&illegal, &auction, &hand(), 0.5).outcome()),
            None
        );
        let garbled = predicting("8Z", 0.99);
        assert_eq!(
            block_on(request_correction(&garbled, &auction, &hand(), 0.5).outcome()),
            None
        );
    }

    #[test]
    fn test_predictor_failure_means_no_correction() {
        let predictor = Fixed(Err(PredictorError::Unavailable("offline".into())));
        let auction = Auction::new(Position::North);
        let pending = request_correction(&predictor, &auction, &hand(), 0.5);
        assert_eq!(block_on(pending.outcome()), None);
    }

    #[test]
    fn test_aborted_request_yields_nothing() {
        let predictor = predicting("1N", 0.99);
        let auction = Auction::new(Position::North);
        let pending = request_correction(&predictor, &auction, &hand(), 0.5);
        pending.abort_handle().abort();
        assert_eq!(block_on(pending.outcome()), None);
    }
}
