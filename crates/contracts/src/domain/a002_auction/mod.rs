pub mod aggregate;

pub use aggregate::{Auction, AuctionDto, AuctionId, AUCTION_STATUSES};
