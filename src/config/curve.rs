//! ROI sweep configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

pub const DEFAULT_CURVE_MAX_ODDS: Decimal = dec!(100);
pub const DEFAULT_CURVE_POINTS: usize = 500;
/// Upper limit on samples in one sweep.
pub const MAX_CURVE_POINTS: usize = 10_000;

/// ROI sweep settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurveConfig {
    /// Upper bound of the swept second-outcome odds (default: "100").
    pub max_odds: Option<Decimal>,
    /// Number of samples in the sweep (default: 500).
    pub points: Option<usize>,
}

impl CurveConfig {
    pub fn max_odds(&self) -> Decimal {
        self.max_odds.unwrap_or(DEFAULT_CURVE_MAX_ODDS)
    }

    pub fn points(&self) -> usize {
        self.points.unwrap_or(DEFAULT_CURVE_POINTS)
    }
}
