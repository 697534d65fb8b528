//! Rendering of calculator results for the terminal.
//!
//! Table output is for people, JSON output is for scripts. Neither
//! performs any arithmetic beyond presentation rounding.

mod json;
mod table;

pub use json::{assessment_json, curve_json, evaluation_json, no_opportunity_json};
pub use table::{
    NO_OPPORTUNITY_MESSAGE, format_assessment, format_curve, format_evaluation,
    format_no_opportunity,
};

use rust_decimal::Decimal;

/// Report rendering error.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Formats a money amount with its currency symbol (e.g., "£60.00").
pub fn format_money(currency: &str, amount: Decimal) -> String {
    format!("{}{:.2}", currency, amount.round_dp(2))
}

/// Formats a percentage with two places (e.g., "1.95%").
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

/// Like [`format_percent`], with "n/a" for a value that overflowed.
pub fn format_optional_percent(value: Option<Decimal>) -> String {
    value.map(format_percent).unwrap_or_else(|| "n/a".to_string())
}
