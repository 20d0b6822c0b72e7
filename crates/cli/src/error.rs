use engine::ConfigError;
use thiserror::Error;
use types::{AuctionError, CallError, HandError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("bad hand: {0}")]
    Hand(#[from] HandError),

    #[error("bad call: {0}")]
    Call(#[from] CallError),

    #[error("bad auction: {0}")]
    Auction(#[from] AuctionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown dealer {0:?}, expected one of N, E, S, W")]
    Dealer(String),

    #[error("unknown vulnerability {0:?}, expected none, ns, ew or both")]
    Vulnerability(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
