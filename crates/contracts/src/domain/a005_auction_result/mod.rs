pub mod aggregate;

pub use aggregate::{AuctionResult, AuctionResultId};
