//! Rule-based contract bridge bidding.
//!
//! Given a hand, the auction so far and a convention configuration, the
//! engine either defers or proposes one call with a label saying which
//! convention or natural treatment produced it. Rules live in ordered
//! layers (see [`rules`]); the first layer with a rule that fits the hand
//! decides. A forcing auction is never passed out, and an illegal candidate
//! is replaced by a pass before it reaches the caller.

pub mod bid;
pub mod config;
pub mod conventions;
pub mod decide;
pub mod dsl;
pub mod error;
pub mod explain;
pub mod fallback;
pub mod kernel;
pub mod rules;
pub mod session;

pub use bid::{Bid, BidTag, ConventionRole, Decision, NaturalKind};
pub use config::{ConventionConfig, Preferences};
pub use conventions::ConventionId;
pub use decide::{decide, decide_with_trace};
pub use error::{ConfigError, PredictorError, SessionError};
pub use explain::{explain, explain_all, Explanation};
pub use fallback::{BidPredictor, PendingCorrection, Prediction, PredictionRequest};
pub use kernel::{BidTrace, HandConstraint};
pub use session::{BiddingSession, PendingTurn};
