//! What a call would mean if made now, without looking at any hand.

use crate::bid::{BidTag, ConventionRole};
use crate::config::ConventionConfig;
use crate::conventions::catalog;
use crate::kernel::{AuctionModel, CallInterpreter, HandConstraint};
use serde::Serialize;
use std::fmt;
use types::{Auction, Call};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub call: Call,
    /// The rule that reads the call, if any does.
    pub rule_name: Option<String>,
    pub tag: Option<BidTag>,
    /// The convention's own reading of an artificial call.
    pub meaning: Option<String>,
    pub shows: Vec<HandConstraint>,
    pub text: String,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.call, self.text)
    }
}

/// Interpret `call` as the next call of `auction`.
pub fn explain(call: &Call, auction: &Auction, config: &ConventionConfig) -> Explanation {
    let model = AuctionModel::from_auction(auction, config);
    let Some(semantics) = CallInterpreter::interpret(&model, call) else {
        return Explanation {
            call: *call,
            rule_name: None,
            tag: None,
            meaning: None,
            shows: Vec::new(),
            text: "no agreed meaning".to_string(),
        };
    };

    let meaning = match semantics.tag {
        BidTag::Convention {
            id,
            role: ConventionRole::Ask,
        } => catalog().describe(id, auction, config, call),
        BidTag::Convention {
            id,
            role: ConventionRole::Reply,
        } => catalog().decode(id, auction, config, call),
        _ => None,
    }
    .map(|meaning| meaning.to_string());

    let text = match &meaning {
        Some(meaning) => format!("{} ({})", semantics.rationale(), meaning),
        None => semantics.rationale(),
    };

    Explanation {
        call: *call,
        rule_name: Some(semantics.rule_name.clone()),
        tag: Some(semantics.tag),
        meaning,
        shows: HandConstraint::optimize(semantics.shows),
        text,
    }
}

/// Every legal next call with its interpretation, lowest call first.
pub fn explain_all(auction: &Auction, config: &ConventionConfig) -> Vec<Explanation> {
    let mut calls = auction.legal_calls();
    calls.sort();
    calls
        .iter()
        .map(|call| explain(call, auction, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::ConventionId;
    use types::Position;

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    #[test]
    fn test_explain_notrump_opening() {
        let config = ConventionConfig::default();
        let explanation = explain(&call("1N"), &Auction::new(Position::North), &config);
        assert_eq!(explanation.rule_name.as_deref(), Some("1NT Opening"));
        assert!(explanation.text.starts_with("1NT Opening: 15-17 HCP"));
        assert!(explanation.shows.contains(&HandConstraint::MinHcp(15)));
        assert!(explanation.meaning.is_none());
    }

    #[test]
    fn test_explain_artificial_call() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P");
        let explanation = explain(&call("2C"), &auction, &config);
        assert_eq!(explanation.tag, Some(BidTag::ask(ConventionId::Stayman)));
        assert!(explanation.meaning.is_some());
    }

    #[test]
    fn test_explain_unknown_call() {
        let config = ConventionConfig::empty();
        let auction = Auction::bidding(Position::North, "1H");
        let explanation = explain(&call("2H"), &auction, &config);
        assert!(explanation.rule_name.is_none());
        assert_eq!(explanation.text, "no agreed meaning");
    }

    #[test]
    fn test_explain_all_covers_legal_calls() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1C");
        let all = explain_all(&auction, &config);
        assert_eq!(all.len(), auction.legal_calls().len());
        assert!(all.iter().any(|e| e.call == Call::Pass));
        assert!(!all.iter().any(|e| e.call == call("1C")));
        assert!(all.iter().any(|e| e.rule_name.is_some()));
    }
}
