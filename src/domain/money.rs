//! Cent quantization for money amounts.
//!
//! Bookmakers accept and pay whole cents only, so every stake, return and
//! profit is rounded in an explicit direction, never to nearest.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Number of decimal places in a money amount.
pub const CENT_SCALE: u32 = 2;

/// Rounds down to whole cents: `floor(100 * x) / 100`.
pub fn floor2(value: Decimal) -> Decimal {
    quantize(value, RoundingStrategy::ToNegativeInfinity)
}

/// Rounds up to whole cents: `ceil(100 * x) / 100`.
pub fn ceil2(value: Decimal) -> Decimal {
    quantize(value, RoundingStrategy::ToPositiveInfinity)
}

/// Returns true if the value has no fractional cents.
pub fn is_quantized(value: Decimal) -> bool {
    value.round_dp(CENT_SCALE) == value
}

fn quantize(value: Decimal, strategy: RoundingStrategy) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(CENT_SCALE, strategy);
    // Pad to two places so amounts always render as "60.00".
    rounded.rescale(CENT_SCALE);
    rounded
}

/// Direction in which a raw stake is quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Cent ceiling.
    Up,
    /// Cent floor.
    Down,
}

impl Rounding {
    /// Quantizes the value in this direction.
    pub fn apply(self, value: Decimal) -> Decimal {
        match self {
            Rounding::Up => ceil2(value),
            Rounding::Down => floor2(value),
        }
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rounding::Up => write!(f, "up"),
            Rounding::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_floor2_truncates_fractional_cents() {
        assert_eq!(floor2(dec!(46.340909)), dec!(46.34));
        assert_eq!(floor2(dec!(101.999)), dec!(101.99));
    }

    #[test]
    fn test_ceil2_rounds_any_fraction_up() {
        assert_eq!(ceil2(dec!(53.657894)), dec!(53.66));
        assert_eq!(ceil2(dec!(10.001)), dec!(10.01));
    }

    #[test]
    fn test_exact_cents_are_unchanged() {
        assert_eq!(floor2(dec!(60)), dec!(60.00));
        assert_eq!(ceil2(dec!(40.5)), dec!(40.50));
    }

    #[test]
    fn test_quantized_values_render_with_two_places() {
        assert_eq!(floor2(dec!(120)).to_string(), "120.00");
        assert_eq!(ceil2(dec!(0.1)).to_string(), "0.10");
    }

    #[test]
    fn test_is_quantized() {
        assert!(is_quantized(dec!(12.34)));
        assert!(is_quantized(dec!(12)));
        assert!(!is_quantized(dec!(12.345)));
    }

    #[test]
    fn test_rounding_apply() {
        assert_eq!(Rounding::Up.apply(dec!(1.231)), dec!(1.24));
        assert_eq!(Rounding::Down.apply(dec!(1.239)), dec!(1.23));
    }
}
