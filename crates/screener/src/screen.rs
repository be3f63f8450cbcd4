//! Alert predicate over token records.

use memewatch_core::TokenRecord;
use serde::{Deserialize, Serialize};

/// Screening thresholds, fixed for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Minimum pool liquidity in USD.
    pub min_liquidity_usd: f64,
    /// Minimum 5-minute volume in USD.
    pub min_volume_usd: f64,
    /// Minimum risk score to alert on.
    pub risk_score_threshold: u8,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            min_liquidity_usd: 30_000.0,
            min_volume_usd: 10_000.0,
            risk_score_threshold: 70,
        }
    }
}

/// Screener that gates which records become alerts.
#[derive(Debug, Clone)]
pub struct AlertScreener {
    config: ScreenerConfig,
}

impl AlertScreener {
    /// Create a screener with the given thresholds.
    pub fn new(config: ScreenerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// Alert predicate.
    ///
    /// A record alerts iff its risk score clears the threshold and both
    /// safety screens passed. The liquidity and volume floors are NOT part
    /// of the predicate; see `below_floors`.
    pub fn passes(&self, record: &TokenRecord) -> bool {
        record.risk_score >= self.config.risk_score_threshold && record.screens_passed()
    }

    /// Advisory check against the liquidity and volume floors.
    ///
    /// Kept out of `passes` to match the deployed alerting behavior, where
    /// the floors are configured but never gate alerts. Callers use this
    /// only to log the discrepancy.
    pub fn below_floors(&self, record: &TokenRecord) -> bool {
        record.liquidity < self.config.min_liquidity_usd
            || record.volume_5m < self.config.min_volume_usd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;
    use pretty_assertions::assert_eq;

    fn record(risk_score: u8, rug: bool, honeypot: bool) -> TokenRecord {
        TokenRecord {
            symbol: CompactString::new("MOONCAT"),
            price: 0.000023,
            volume_5m: 45000.0,
            liquidity: 80000.0,
            market_cap: 150000.0,
            rug_check_passed: rug,
            honeypot_passed: honeypot,
            risk_score,
            buy_signal: true,
            sell_signal: false,
        }
    }

    #[test]
    fn test_passes_all_conditions() {
        let screener = AlertScreener::new(ScreenerConfig::default());
        assert!(screener.passes(&record(85, true, true)));
    }

    #[test]
    fn test_passes_at_exact_threshold() {
        let screener = AlertScreener::new(ScreenerConfig::default());
        assert!(screener.passes(&record(70, true, true)));
        assert!(!screener.passes(&record(69, true, true)));
    }

    #[test]
    fn test_fails_any_single_condition() {
        let screener = AlertScreener::new(ScreenerConfig::default());
        assert!(!screener.passes(&record(10, true, true)));
        assert!(!screener.passes(&record(85, false, true)));
        assert!(!screener.passes(&record(85, true, false)));
    }

    #[test]
    fn test_rugme_never_passes() {
        let screener = AlertScreener::new(ScreenerConfig::default());
        let mut rugme = record(10, false, false);
        rugme.symbol = CompactString::new("RUGME");
        rugme.buy_signal = false;
        assert!(!screener.passes(&rugme));
    }

    #[test]
    fn test_floors_do_not_gate_alerts() {
        let screener = AlertScreener::new(ScreenerConfig::default());
        let mut thin = record(85, true, true);
        thin.liquidity = 500.0;
        thin.volume_5m = 100.0;

        // Below both floors, still alerts
        assert!(screener.below_floors(&thin));
        assert!(screener.passes(&thin));
    }

    #[test]
    fn test_below_floors_boundaries() {
        let screener = AlertScreener::new(ScreenerConfig::default());

        let mut at_floor = record(85, true, true);
        at_floor.liquidity = 30_000.0;
        at_floor.volume_5m = 10_000.0;
        assert!(!screener.below_floors(&at_floor));

        at_floor.volume_5m = 9_999.0;
        assert!(screener.below_floors(&at_floor));
    }

    #[test]
    fn test_custom_threshold() {
        let screener = AlertScreener::new(ScreenerConfig {
            risk_score_threshold: 90,
            ..Default::default()
        });
        assert!(!screener.passes(&record(85, true, true)));
        assert!(screener.passes(&record(95, true, true)));
    }

    #[test]
    fn test_config_defaults() {
        let config = ScreenerConfig::default();
        assert_eq!(config.min_liquidity_usd, 30_000.0);
        assert_eq!(config.min_volume_usd, 10_000.0);
        assert_eq!(config.risk_score_threshold, 70);
    }
}
