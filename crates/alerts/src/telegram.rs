//! Telegram delivery sink.

use crate::notifier::{AlertError, AlertSink};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

/// Telegram sink: one bot, one recipient, Markdown messages.
///
/// The bot handle is created once and held for the process lifetime.
#[derive(Debug)]
pub struct TelegramSink {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSink {
    /// Create a sink for the given bot token and recipient id.
    ///
    /// The recipient must be a numeric Telegram user or chat id; anything
    /// else is rejected here so misconfiguration surfaces at startup rather
    /// than on the first alert.
    pub fn new(token: &str, recipient: &str) -> Result<Self, AlertError> {
        let id: i64 = recipient
            .trim()
            .parse()
            .map_err(|_| AlertError::InvalidRecipient(recipient.to_string()))?;

        Ok(Self {
            bot: Bot::new(token),
            chat_id: ChatId(id),
        })
    }
}

#[async_trait]
impl AlertSink for TelegramSink {
    async fn send(&self, text: &str) -> Result<(), AlertError> {
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Markdown)
            .await?;
        Ok(())
    }
}
