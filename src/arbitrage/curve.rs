//! ROI sweep over the second outcome's odds.

use rust_decimal::Decimal;
use serde::Serialize;

use super::assess;

/// One sample of the ROI curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurvePoint {
    /// Odds of the second outcome.
    pub odds: Decimal,
    pub implied_probability: Decimal,
    /// Theoretical ROI in percent; negative where the pair is not risk-free,
    /// `None` if it does not fit in a `Decimal`.
    pub roi_percent: Option<Decimal>,
    pub is_risk_free: bool,
}

impl CurvePoint {
    fn sample(odds1: Decimal, odds2: Decimal) -> Self {
        let assessment = assess(odds1, odds2);
        Self {
            odds: odds2,
            implied_probability: assessment.implied_probability,
            roi_percent: assessment.roi_percent(),
            is_risk_free: assessment.is_risk_free,
        }
    }
}

/// Sweeps `points` evenly spaced second-outcome odds from `min_odds2` to
/// `max_odds2` inclusive, holding the first odds fixed.
pub fn roi_curve(
    odds1: Decimal,
    min_odds2: Decimal,
    max_odds2: Decimal,
    points: usize,
) -> Vec<CurvePoint> {
    match points {
        0 => Vec::new(),
        1 => vec![CurvePoint::sample(odds1, min_odds2)],
        _ => {
            let last = points - 1;
            let step = (max_odds2 - min_odds2) / Decimal::from(last);
            (0..points)
                .map(|i| {
                    // Pin the final sample so step drift cannot miss the bound.
                    let odds2 = if i == last {
                        max_odds2
                    } else {
                        min_odds2 + step * Decimal::from(i)
                    };
                    CurvePoint::sample(odds1, odds2)
                })
                .collect()
        }
    }
}

/// Second-outcome odds at which the pair breaks even.
///
/// Any odds strictly above this value make the pair risk-free.
pub fn break_even_odds(odds1: Decimal) -> Decimal {
    odds1 / (odds1 - Decimal::ONE)
}

/// Returns the sample with the highest ROI.
pub fn best_point(points: &[CurvePoint]) -> Option<&CurvePoint> {
    points
        .iter()
        .filter(|p| p.roi_percent.is_some())
        .max_by_key(|p| p.roi_percent)
}
