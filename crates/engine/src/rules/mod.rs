//! The bidding rules, one module per layer of the decision cascade.

pub mod competitive;
pub mod conventional;
pub mod defense;
pub mod forced;
pub mod natural;
pub mod opening;
pub mod registry;
pub mod responses;

pub use registry::{registry, Layer, LayerKind, RuleRegistry};
