//! Risk-free assessment of an odds pair.

use rust_decimal::Decimal;
use serde::Serialize;

/// Result of checking two odds for a guaranteed-profit split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Sum of the implied probabilities of both outcomes.
    pub implied_probability: Decimal,
    /// True only when the total implied probability is strictly below 1.
    pub is_risk_free: bool,
}

impl Assessment {
    /// Classifies a total implied probability.
    pub fn new(implied_probability: Decimal) -> Self {
        Self {
            implied_probability,
            is_risk_free: implied_probability < Decimal::ONE,
        }
    }

    /// Bookmaker overround. Negative for an arbitrage.
    pub fn margin(&self) -> Decimal {
        self.implied_probability - Decimal::ONE
    }

    /// Theoretical return on the budget in percent, before quantization.
    ///
    /// `None` when the implied probability is so small the ROI overflows.
    pub fn roi_percent(&self) -> Option<Decimal> {
        Decimal::ONE
            .checked_div(self.implied_probability)?
            .checked_sub(Decimal::ONE)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}
