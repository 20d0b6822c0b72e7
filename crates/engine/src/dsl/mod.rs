//! The rule language: predicates over the auction and the candidate call,
//! what a call shows, and the `rule!` macro tying them together.

pub mod annotations;
pub mod auction_predicates;
pub mod call_predicates;
pub mod macros;
pub mod planner;
pub mod rule;
pub mod shows;

use crate::kernel::AuctionModel;

/// A number read from the auction or its configuration.
pub type Param = fn(&AuctionModel) -> u8;

/// An inclusive HCP range read from the auction or its configuration.
pub type Band = fn(&AuctionModel) -> (u8, u8);
