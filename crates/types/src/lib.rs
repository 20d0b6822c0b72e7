pub mod auction;
pub mod board;
pub mod call;
pub mod card;
pub mod contract;
pub mod error;
pub mod hand;
pub mod io;
pub mod rank;
pub mod strain;
pub mod suit;

pub use auction::{Auction, AuctionState, SeatedCall};
pub use board::{Partnership, Position, Vulnerability};
pub use call::Call;
pub use card::Card;
pub use contract::{Contract, DoubleStatus};
pub use error::{AuctionError, CallError, HandError};
pub use hand::{BalancedShapes, Distribution, DistributionMode, Hand, Shape};
pub use rank::Rank;
pub use strain::Strain;
pub use suit::Suit;
