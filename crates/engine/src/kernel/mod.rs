//! Kernel
//!
//! Builds a model of what every seat has shown, then picks the call whose
//! rule the hand satisfies, layer by layer.

pub mod auction_model;
pub mod call_interpreter;
pub mod call_selector;
pub mod call_semantics;
pub mod forcing;
pub mod hand_constraint;
pub mod hand_model;
pub mod point_ranges;
pub mod trace;

pub use auction_model::{AuctionModel, Interpretation};
pub use call_interpreter::CallInterpreter;
pub use call_selector::{CallSelector, Candidate, Chooser};
pub use call_semantics::CallSemantics;
pub use forcing::Forcing;
pub use hand_constraint::HandConstraint;
pub use hand_model::HandModel;
pub use point_ranges::PointRanges;
pub use trace::{BidTrace, SelectedCall, SelectionStep};
