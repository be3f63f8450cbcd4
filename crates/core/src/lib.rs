//! Core data types for the memecoin alert bot.

pub mod signal;
pub mod token;

pub use signal::*;
pub use token::*;
