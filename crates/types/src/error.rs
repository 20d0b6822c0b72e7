use crate::board::Position;
use crate::call::Call;
use crate::card::Card;
use thiserror::Error;

/// A call token that does not name a call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("bid level {0} is outside 1..=7")]
    InvalidLevel(u8),
    #[error("unrecognized call token: {0:?}")]
    InvalidToken(String),
}

/// A card collection that is not a legal 13-card hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("a hand holds 13 cards, got {0}")]
    WrongCardCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("hand text must have four dot-separated suits: {0:?}")]
    MalformedSuits(String),
    #[error("unrecognized rank {rank:?} in {text:?}")]
    InvalidRank { rank: char, text: String },
}

/// A call that cannot be appended to an auction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuctionError {
    #[error("the auction is over")]
    Ended,
    #[error("{call} is not a legal call here")]
    Illegal { call: Call },
    #[error("it is {expected}'s turn, not {actual}'s")]
    OutOfTurn { expected: Position, actual: Position },
}
