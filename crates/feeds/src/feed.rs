//! Feed trait and the built-in simulated feed.

use crate::error::FeedError;
use async_trait::async_trait;
use compact_str::CompactString;
use memewatch_core::TokenRecord;

/// Source of token snapshots.
///
/// A feed returns zero or more records per call. Records are consumed once
/// by the polling loop and discarded; feeds hold no per-record state.
#[async_trait]
pub trait TokenFeed: Send + Sync {
    /// Fetch the current batch of token records.
    async fn fetch(&self) -> Result<Vec<TokenRecord>, FeedError>;

    /// Feed name for logging.
    fn name(&self) -> &'static str;
}

/// Simulated feed for demo mode.
///
/// Returns a fixed pair of records each cycle: one that clears every screen
/// and one that fails them all. Stands in for a live feed when running
/// without `--live`.
#[derive(Debug, Default)]
pub struct SimulatedFeed;

impl SimulatedFeed {
    pub fn new() -> Self {
        Self
    }

    fn records() -> Vec<TokenRecord> {
        vec![
            TokenRecord {
                symbol: CompactString::new("MOONCAT"),
                price: 0.000023,
                volume_5m: 45000.0,
                liquidity: 80000.0,
                market_cap: 150000.0,
                rug_check_passed: true,
                honeypot_passed: true,
                risk_score: 85,
                buy_signal: true,
                sell_signal: false,
            },
            TokenRecord {
                symbol: CompactString::new("RUGME"),
                price: 0.000001,
                volume_5m: 1200.0,
                liquidity: 500.0,
                market_cap: 10000.0,
                rug_check_passed: false,
                honeypot_passed: false,
                risk_score: 10,
                buy_signal: false,
                sell_signal: false,
            },
        ]
    }
}

#[async_trait]
impl TokenFeed for SimulatedFeed {
    async fn fetch(&self) -> Result<Vec<TokenRecord>, FeedError> {
        Ok(Self::records())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
