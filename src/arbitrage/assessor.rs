//! Total implied probability check.

use rust_decimal::Decimal;

use crate::domain::Assessment;

/// Assesses whether two decimal odds admit a guaranteed-profit split.
///
/// Both odds must be greater than 1. A total implied probability of
/// exactly 1 is break-even and is not classified as risk-free.
pub fn assess(odds1: Decimal, odds2: Decimal) -> Assessment {
    Assessment::new(Decimal::ONE / odds1 + Decimal::ONE / odds2)
}
