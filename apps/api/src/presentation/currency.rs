use std::fmt;

use serde::{Deserialize, Serialize};

/// Display currencies. Rates are fixed constants, not fetched live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    #[default]
    Inr,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Inr, Currency::Eur];

    /// Units of this currency per USD.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Inr => 83.2,
            Currency::Eur => 0.92,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
        }
    }

    /// Converts a USD amount. The caller is responsible for any rounding beforehand.
    pub fn convert(&self, usd: f64) -> f64 {
        usd * self.rate()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
