//! Token data feeds.
//!
//! This crate provides:
//! - The `TokenFeed` trait consumed by the polling loop
//! - A built-in simulated feed for demo mode
//! - A DexScreener REST feed for live market data

pub mod dexscreener;
pub mod error;
pub mod feed;

pub use dexscreener::DexScreenerFeed;
pub use error::FeedError;
pub use feed::{SimulatedFeed, TokenFeed};
