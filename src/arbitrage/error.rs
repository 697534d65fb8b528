//! Calculator error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Calculator error.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Total implied probability is not below 1. A normal outcome, not a failure.
    #[error("no arbitrage opportunity: total implied probability {implied_probability} is not below 1")]
    NoOpportunity { implied_probability: Decimal },
    #[error("odds {odds} are below the minimum of {min}")]
    OddsTooLow { odds: Decimal, min: Decimal },
    #[error("odds {odds} are above the maximum of {max}")]
    OddsTooHigh { odds: Decimal, max: Decimal },
    #[error("budget {budget} is below the minimum of {min}")]
    BudgetTooLow { budget: Decimal, min: Decimal },
    #[error("budget {budget} is above the maximum of {max}")]
    BudgetTooHigh { budget: Decimal, max: Decimal },
    /// An intermediate amount does not fit in a `Decimal`.
    #[error("{0} out of representable range")]
    AmountOutOfRange(&'static str),
    #[error("invalid curve: {0}")]
    InvalidCurve(String),
}

impl CalcError {
    /// Returns true for the recoverable no-opportunity outcome.
    pub fn is_no_opportunity(&self) -> bool {
        matches!(self, CalcError::NoOpportunity { .. })
    }
}
