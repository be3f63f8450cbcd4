//! Trade signal labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggested action derived from a token record's signal flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Label used in alert messages.
    pub fn label(self) -> &'static str {
        match self {
            Signal::Buy => "BUY 🚀",
            Signal::Sell => "SELL 🔻",
            Signal::Hold => "HOLD ⏸️",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
