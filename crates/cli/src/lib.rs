pub mod bidding_utils;
pub mod error;

pub use error::CliError;
