//! Token snapshot definitions.

use crate::Signal;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Snapshot of one token at evaluation time.
///
/// Produced fresh by a feed on every polling cycle and discarded after the
/// cycle; no identity is carried across cycles. The screen results
/// (`rug_check_passed`, `honeypot_passed`) and `risk_score` are opaque
/// values computed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Token symbol (e.g., "MOONCAT")
    pub symbol: CompactString,
    /// Price in USD
    pub price: f64,
    /// USD volume over the trailing 5 minutes
    pub volume_5m: f64,
    /// Pool liquidity in USD
    pub liquidity: f64,
    /// Market capitalization in USD
    pub market_cap: f64,
    /// Rug-pull safety screen outcome
    pub rug_check_passed: bool,
    /// Honeypot safety screen outcome
    pub honeypot_passed: bool,
    /// Externally computed trust score, 0-100 (higher is safer)
    pub risk_score: u8,
    /// Entry signal from the upstream strategy
    pub buy_signal: bool,
    /// Exit signal from the upstream strategy
    pub sell_signal: bool,
}

impl TokenRecord {
    /// Create a record with market data only, screen fields fail-closed.
    ///
    /// Feeds that cannot supply screen results use this so that an
    /// unscreened token never carries a passing screen by accident.
    pub fn unscreened(symbol: &str, price: f64, volume_5m: f64, liquidity: f64, market_cap: f64) -> Self {
        Self {
            symbol: CompactString::new(symbol),
            price,
            volume_5m,
            liquidity,
            market_cap,
            rug_check_passed: false,
            honeypot_passed: false,
            risk_score: 0,
            buy_signal: false,
            sell_signal: false,
        }
    }

    /// Derive the tri-state signal label.
    ///
    /// `buy_signal` wins over `sell_signal`; neither set means hold. The two
    /// flags are not mutually enforced upstream, so both-set resolves to buy.
    #[inline]
    pub fn signal(&self) -> Signal {
        if self.buy_signal {
            Signal::Buy
        } else if self.sell_signal {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }

    /// Check if both safety screens passed.
    #[inline]
    pub fn screens_passed(&self) -> bool {
        self.rug_check_passed && self.honeypot_passed
    }
}
