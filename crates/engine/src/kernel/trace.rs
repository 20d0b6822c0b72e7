//! Tracing for bid selection
use crate::kernel::{AuctionModel, CallSemantics, Forcing, HandConstraint};
use crate::rules::LayerKind;
use serde::Serialize;
use types::Call;

/// A detailed trace of the bid selection process
#[derive(Debug, Clone, Serialize)]
pub struct BidTrace<'a> {
    /// The auction state and models of the players
    pub auction_model: AuctionModel<'a>,
    /// The obligation partner's last call put on us
    pub forcing: Forcing,
    /// Detailed steps of the selection process
    pub selection_steps: Vec<SelectionStep>,
    /// The winning call (if any)
    pub selected: Option<SelectedCall>,
    /// Set when a pass was replaced because partner's call was forcing
    pub forced_override: bool,
}

impl BidTrace<'_> {
    pub fn selected_call(&self) -> Option<Call> {
        self.selected.as_ref().map(|s| s.call)
    }

    /// Steps whose rule the hand failed.
    pub fn rejected(&self) -> impl Iterator<Item = &SelectionStep> {
        self.selection_steps.iter().filter(|step| !step.satisfied)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectedCall {
    pub layer: LayerKind,
    pub call: Call,
    pub semantics: CallSemantics,
}

/// A single step in the bid selection process
#[derive(Debug, Clone, Serialize)]
pub struct SelectionStep {
    /// The layer the rule belongs to
    pub layer: LayerKind,
    pub rule_name: String,
    /// The call being considered
    pub call: Call,
    /// The semantics of the call
    pub semantics: CallSemantics,
    /// Whether the hand satisfied all constraints
    pub satisfied: bool,
    /// Which constraints failed (if any)
    pub failed_constraints: Vec<HandConstraint>,
}
