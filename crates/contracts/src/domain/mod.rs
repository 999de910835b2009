pub mod common;

pub mod a001_report;
pub mod a002_auction;
pub mod a003_document;
pub mod a004_emission;
pub mod a005_auction_result;
