//! Error types for the engine crate.

use thiserror::Error;
use types::AuctionError;

/// Failures loading or editing a convention configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid convention config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid preferences: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown convention `{0}`")]
    UnknownConvention(String),
}

/// Failures committing calls through a [`crate::BiddingSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Auction(#[from] AuctionError),

    #[error("result for turn {expected} arrived after the auction moved to turn {actual}")]
    StaleTurn { expected: usize, actual: usize },
}

/// Failures reported by a fallback predictor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictorError {
    #[error("predictor unavailable: {0}")]
    Unavailable(String),

    #[error("malformed prediction: {0}")]
    Malformed(String),
}
