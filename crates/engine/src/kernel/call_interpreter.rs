//! Reads the meaning of calls already made.

use crate::kernel::{AuctionModel, CallSemantics, Forcing};
use crate::rules::registry;
use types::Call;

/// Interprets the semantic meaning of calls
pub struct CallInterpreter;

impl CallInterpreter {
    /// The first rule, over the layers active for the caller, that accepts
    /// `call` in this auction.
    pub fn interpret(auction_model: &AuctionModel, call: &Call) -> Option<CallSemantics> {
        let forcing = Forcing::of(auction_model);
        registry()
            .active_layers(auction_model, forcing)
            .into_iter()
            .flat_map(|layer| layer.rules.iter())
            .find_map(|rule| rule.get_semantics(auction_model, call))
    }
}
