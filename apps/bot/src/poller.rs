//! The filter-and-notify polling loop.
//!
//! Each cycle is an explicit `Result`: fetch, screen every record, push an
//! alert for each one that passes. The driver picks the next sleep from the
//! cycle outcome: the full poll interval after a clean cycle, the shortened
//! retry interval after a failed one. Runtime errors are logged and the
//! loop keeps going; nothing here terminates the process.

use memewatch_alerts::{AlertSink, Notifier};
use memewatch_feeds::{FeedError, TokenFeed};
use memewatch_screener::AlertScreener;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum CycleError {
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),
}

/// Run one polling cycle. Returns the number of alerts pushed.
///
/// A feed failure fails the whole cycle. Delivery failures do not: the
/// notifier absorbs them, so records after a failed send are still
/// processed.
pub async fn run_cycle<S: AlertSink>(
    feed: &dyn TokenFeed,
    screener: &AlertScreener,
    notifier: &Notifier<S>,
) -> Result<u32, CycleError> {
    let records = feed.fetch().await?;
    debug!(feed = feed.name(), count = records.len(), "Fetched token records");

    let mut alerts = 0u32;
    for record in &records {
        if !screener.passes(record) {
            debug!(symbol = %record.symbol, risk_score = record.risk_score, "Record skipped");
            continue;
        }
        if screener.below_floors(record) {
            // Floors are configured but do not gate alerts; surface the gap
            debug!(
                symbol = %record.symbol,
                liquidity = record.liquidity,
                volume_5m = record.volume_5m,
                "Alerting record is below liquidity/volume floors"
            );
        }
        notifier.notify(record).await;
        alerts += 1;
    }

    Ok(alerts)
}

/// Delay before the next cycle, chosen from the last cycle's outcome.
pub fn next_delay(
    outcome: &Result<u32, CycleError>,
    poll_interval: Duration,
    retry_interval: Duration,
) -> Duration {
    match outcome {
        Ok(_) => poll_interval,
        Err(_) => retry_interval,
    }
}

/// Drive the polling loop forever.
pub async fn run<S: AlertSink>(
    feed: Box<dyn TokenFeed>,
    screener: AlertScreener,
    notifier: Notifier<S>,
    poll_interval: Duration,
    retry_interval: Duration,
) {
    info!(
        feed = feed.name(),
        poll_secs = poll_interval.as_secs(),
        retry_secs = retry_interval.as_secs(),
        "🚀 Memecoin alert bot started"
    );

    loop {
        let outcome = run_cycle(feed.as_ref(), &screener, &notifier).await;

        match &outcome {
            Ok(alerts) => info!(alerts, "Cycle complete"),
            Err(e) => error!(error = %e, "⚠️ Cycle failed"),
        }

        tokio::time::sleep(next_delay(&outcome, poll_interval, retry_interval)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use compact_str::CompactString;
    use memewatch_alerts::AlertError;
    use memewatch_core::TokenRecord;
    use memewatch_feeds::SimulatedFeed;
    use memewatch_screener::ScreenerConfig;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    struct RecordingSink {
        messages: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> (Self, Arc<Mutex<Vec<String>>>) {
            let messages = Arc::new(Mutex::new(Vec::new()));
            let sink = Self {
                messages: Arc::clone(&messages),
                fail,
            };
            (sink, messages)
        }
    }

    #[async_trait]
    impl AlertSink for RecordingSink {
        async fn send(&self, text: &str) -> Result<(), AlertError> {
            self.messages.lock().unwrap().push(text.to_string());
            if self.fail {
                Err(AlertError::InvalidRecipient("test".into()))
            } else {
                Ok(())
            }
        }
    }

    struct VecFeed(Vec<TokenRecord>);

    #[async_trait]
    impl TokenFeed for VecFeed {
        async fn fetch(&self) -> Result<Vec<TokenRecord>, FeedError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "test"
        }
    }

    struct FailingFeed;

    #[async_trait]
    impl TokenFeed for FailingFeed {
        async fn fetch(&self) -> Result<Vec<TokenRecord>, FeedError> {
            Err(FeedError::RequestFailed("connection refused".into()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn passing_record(symbol: &str) -> TokenRecord {
        TokenRecord {
            symbol: CompactString::new(symbol),
            price: 0.000023,
            volume_5m: 45000.0,
            liquidity: 80000.0,
            market_cap: 150000.0,
            rug_check_passed: true,
            honeypot_passed: true,
            risk_score: 85,
            buy_signal: true,
            sell_signal: false,
        }
    }

    fn screener() -> AlertScreener {
        AlertScreener::new(ScreenerConfig::default())
    }

    #[tokio::test]
    async fn test_cycle_alerts_only_passing_records() {
        let feed = SimulatedFeed::new();
        let (sink, messages) = RecordingSink::new(false);
        let notifier = Notifier::new(sink);

        // MOONCAT passes, RUGME does not
        let alerts = run_cycle(&feed, &screener(), &notifier).await.unwrap();
        assert_eq!(alerts, 1);
        assert_eq!(messages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cycle_sends_expected_message() {
        let feed = SimulatedFeed::new();
        let (sink, messages) = RecordingSink::new(false);
        let notifier = Notifier::new(sink);

        run_cycle(&feed, &screener(), &notifier).await.unwrap();

        let sent = messages.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("BUY"));
        assert!(sent[0].contains("MOONCAT"));
        assert!(!sent[0].contains("RUGME"));
    }

    #[tokio::test]
    async fn test_cycle_skips_failing_records_entirely() {
        let mut rugme = passing_record("RUGME");
        rugme.risk_score = 10;
        rugme.rug_check_passed = false;
        rugme.honeypot_passed = false;
        rugme.buy_signal = false;

        let feed = VecFeed(vec![rugme]);
        let (sink, messages) = RecordingSink::new(false);
        let notifier = Notifier::new(sink);

        let alerts = run_cycle(&feed, &screener(), &notifier).await.unwrap();
        assert_eq!(alerts, 0);
        assert!(messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cycle_with_empty_feed() {
        let feed = VecFeed(Vec::new());
        let (sink, _messages) = RecordingSink::new(false);
        let notifier = Notifier::new(sink);

        let alerts = run_cycle(&feed, &screener(), &notifier).await.unwrap();
        assert_eq!(alerts, 0);
    }

    #[tokio::test]
    async fn test_feed_failure_fails_cycle() {
        let (sink, messages) = RecordingSink::new(false);
        let notifier = Notifier::new(sink);

        let outcome = run_cycle(&FailingFeed, &screener(), &notifier).await;
        assert!(matches!(outcome, Err(CycleError::Feed(_))));
        assert!(messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_fail_cycle() {
        let feed = VecFeed(vec![passing_record("AAA"), passing_record("BBB")]);
        let (sink, messages) = RecordingSink::new(true);
        let notifier = Notifier::new(sink);

        // Every send fails, yet the cycle is clean and both records were
        // attempted
        let alerts = run_cycle(&feed, &screener(), &notifier).await.unwrap();
        assert_eq!(alerts, 2);
        assert_eq!(messages.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_next_delay_after_clean_cycle() {
        let poll = Duration::from_secs(300);
        let retry = Duration::from_secs(60);

        assert_eq!(next_delay(&Ok(0), poll, retry), poll);
        assert_eq!(next_delay(&Ok(7), poll, retry), poll);
    }

    #[test]
    fn test_next_delay_after_failed_cycle() {
        let poll = Duration::from_secs(300);
        let retry = Duration::from_secs(60);
        let failed = Err(CycleError::Feed(FeedError::RequestFailed("down".into())));

        assert_eq!(next_delay(&failed, poll, retry), retry);
    }
}
