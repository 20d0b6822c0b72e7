//! The engine's answer for one turn and how it is labelled.

use crate::conventions::ConventionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use types::{Call, Position};

/// Which half of a convention exchange a call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConventionRole {
    Ask,
    Reply,
    Continuation,
}

/// Families of natural calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaturalKind {
    Opening,
    Preempt,
    Response,
    Raise,
    NewSuit,
    Notrump,
    Invitation,
    Rebid,
    Overcall,
    Advance,
    TakeoutDouble,
    NegativeDouble,
    ResponsiveDouble,
    SupportDouble,
    ReopeningDouble,
    PenaltyDouble,
    /// Made only because partner's last call did not allow a pass.
    Forced,
    /// Nothing more specific applied.
    Fallback,
    Pass,
}

/// Where a call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidTag {
    Convention { id: ConventionId, role: ConventionRole },
    Natural(NaturalKind),
}

impl BidTag {
    pub fn ask(id: ConventionId) -> Self {
        BidTag::Convention {
            id,
            role: ConventionRole::Ask,
        }
    }

    pub fn convention(self) -> Option<ConventionId> {
        match self {
            BidTag::Convention { id, .. } => Some(id),
            BidTag::Natural(_) => None,
        }
    }

    pub fn is_natural(self, kind: NaturalKind) -> bool {
        self == BidTag::Natural(kind)
    }
}

impl fmt::Display for BidTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidTag::Convention { id, role } => {
                let role = match role {
                    ConventionRole::Ask => "ask",
                    ConventionRole::Reply => "reply",
                    ConventionRole::Continuation => "continuation",
                };
                write!(f, "{} {}", id.as_str(), role)
            }
            BidTag::Natural(kind) => write!(f, "natural {:?}", kind),
        }
    }
}

/// A chosen call together with why it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub call: Call,
    pub seat: Position,
    pub tag: BidTag,
    pub rationale: String,
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.call, self.rationale)
    }
}

/// Result of asking the engine for a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Bid(Bid),
    /// The auction is over or it is not our turn.
    Defer,
}

impl Decision {
    pub fn call(&self) -> Option<Call> {
        self.bid().map(|bid| bid.call)
    }

    pub fn bid(&self) -> Option<&Bid> {
        match self {
            Decision::Bid(bid) => Some(bid),
            Decision::Defer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_convention() {
        assert_eq!(
            BidTag::ask(ConventionId::Stayman).convention(),
            Some(ConventionId::Stayman)
        );
        assert_eq!(BidTag::Natural(NaturalKind::Opening).convention(), None);
        assert_eq!(BidTag::ask(ConventionId::Stayman).to_string(), "stayman ask");
    }

    #[test]
    fn test_defer_has_no_call() {
        assert_eq!(Decision::Defer.call(), None);
    }
}
