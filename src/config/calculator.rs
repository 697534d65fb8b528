//! Input bounds and display settings for the calculator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Lowest decimal odds accepted from the user.
pub const DEFAULT_MIN_ODDS: Decimal = dec!(1.01);
/// Highest decimal odds accepted from the user.
pub const DEFAULT_MAX_ODDS: Decimal = dec!(10000);
/// Smallest budget accepted from the user.
pub const DEFAULT_MIN_BUDGET: Decimal = dec!(0.01);
/// Largest budget accepted from the user.
pub const DEFAULT_MAX_BUDGET: Decimal = dec!(1000000000000);
/// Currency symbol prefixed to money amounts.
pub const DEFAULT_CURRENCY: &str = "£";

/// Calculator settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorConfig {
    /// Minimum odds for either outcome (e.g., "1.01"). Must exceed 1.
    pub min_odds: Option<Decimal>,
    /// Maximum odds for either outcome (default: "10000").
    pub max_odds: Option<Decimal>,
    /// Minimum total budget (e.g., "0.01").
    pub min_budget: Option<Decimal>,
    /// Maximum total budget (default: "1000000000000").
    pub max_budget: Option<Decimal>,
    /// Currency symbol for reports (default: "£").
    pub currency: Option<String>,
}

impl CalculatorConfig {
    pub fn min_odds(&self) -> Decimal {
        self.min_odds.unwrap_or(DEFAULT_MIN_ODDS)
    }

    pub fn max_odds(&self) -> Decimal {
        self.max_odds.unwrap_or(DEFAULT_MAX_ODDS)
    }

    pub fn min_budget(&self) -> Decimal {
        self.min_budget.unwrap_or(DEFAULT_MIN_BUDGET)
    }

    pub fn max_budget(&self) -> Decimal {
        self.max_budget.unwrap_or(DEFAULT_MAX_BUDGET)
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}
