//! Alert notification logic.

use crate::formatter::format_signal_message;
use async_trait::async_trait;
use memewatch_core::TokenRecord;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
    #[error("invalid recipient id: {0}")]
    InvalidRecipient(String),
}

/// Delivery endpoint for formatted alert messages.
///
/// The trait is the seam between the polling loop and the transport, so the
/// loop can be exercised without a network.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver one message to the configured recipient.
    async fn send(&self, text: &str) -> Result<(), AlertError>;
}

/// Notifier that formats records and absorbs delivery failures.
///
/// A failed send is logged and swallowed here; the polling loop never sees
/// it, so one record's delivery failure cannot abort a cycle.
pub struct Notifier<S> {
    sink: S,
}

impl<S: AlertSink> Notifier<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Format and send an alert for a record.
    ///
    /// Returns true if the message was delivered. No retry, no delivery
    /// confirmation beyond the transport result.
    pub async fn notify(&self, record: &TokenRecord) -> bool {
        let message = format_signal_message(record);

        match self.sink.send(&message).await {
            Ok(()) => {
                info!(symbol = %record.symbol, signal = %record.signal(), "✅ Alert sent");
                true
            }
            Err(e) => {
                error!(symbol = %record.symbol, error = %e, "Telegram send failed");
                false
            }
        }
    }
}
