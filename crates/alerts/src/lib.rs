//! Telegram alert delivery for screened token records.
//!
//! This crate provides:
//! - The pure alert message formatter
//! - The `AlertSink` delivery trait
//! - A Telegram sink and the failure-absorbing `Notifier`

pub mod formatter;
pub mod notifier;
pub mod telegram;

pub use formatter::format_signal_message;
pub use notifier::{AlertError, AlertSink, Notifier};
pub use telegram::TelegramSink;
