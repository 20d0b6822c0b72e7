//! Annotations for bidding rules
//!
//! Annotations are metadata about a bid's meaning that don't describe
//! hand constraints. They're used for categorization (e.g., activating
//! the notrump response system) and to decide whether partner may pass.

use serde::{Deserialize, Serialize};

/// Metadata attached to a bid by its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// This bid activates the notrump system (Stayman, transfers, etc.)
    NotrumpSystemsOn,
    /// This bid is a suited or notrump overcall
    Overcall,
    /// Partner may not pass at their next turn
    Forcing,
    /// Our side may not stop below game
    GameForcing,
    /// Says nothing about the strain named
    Artificial,
}
