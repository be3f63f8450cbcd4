//! Alert screening for token records.
//!
//! Decides which records from a feed become alerts.

pub mod screen;

pub use screen::{AlertScreener, ScreenerConfig};
