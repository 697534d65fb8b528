//! Validating front for the arbitrage pipeline.

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::curve::{CurvePoint, roi_curve};
use super::{CalcError, assess, try_evaluate};
use crate::config::{
    CalculatorConfig, DEFAULT_MAX_BUDGET, DEFAULT_MAX_ODDS, DEFAULT_MIN_BUDGET, DEFAULT_MIN_ODDS,
    MAX_CURVE_POINTS,
};
use crate::domain::{Assessment, Evaluation};

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Calculator checks inputs against configured bounds before running the
/// core formulas, and turns "no opportunity" into a typed outcome.
#[derive(Debug, Clone)]
pub struct Calculator {
    min_odds: Decimal,
    max_odds: Decimal,
    min_budget: Decimal,
    max_budget: Decimal,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ODDS, DEFAULT_MIN_BUDGET)
    }
}

impl Calculator {
    /// Creates a calculator with explicit lower bounds and the default upper
    /// bounds. `min_odds` must exceed 1.
    pub fn new(min_odds: Decimal, min_budget: Decimal) -> Self {
        Self {
            min_odds,
            max_odds: DEFAULT_MAX_ODDS,
            min_budget,
            max_budget: DEFAULT_MAX_BUDGET,
        }
    }

    /// Replaces the upper bounds on odds and budget.
    pub fn with_limits(mut self, max_odds: Decimal, max_budget: Decimal) -> Self {
        self.max_odds = max_odds;
        self.max_budget = max_budget;
        self
    }

    /// Creates a calculator from the `calculator` config section.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.min_odds(), config.min_budget())
            .with_limits(config.max_odds(), config.max_budget())
    }

    pub fn min_odds(&self) -> Decimal {
        self.min_odds
    }

    pub fn max_odds(&self) -> Decimal {
        self.max_odds
    }

    pub fn min_budget(&self) -> Decimal {
        self.min_budget
    }

    pub fn max_budget(&self) -> Decimal {
        self.max_budget
    }

    pub fn validate_odds(&self, odds: Decimal) -> Result<Decimal> {
        if odds < self.min_odds {
            return Err(CalcError::OddsTooLow {
                odds,
                min: self.min_odds,
            });
        }
        if odds > self.max_odds {
            return Err(CalcError::OddsTooHigh {
                odds,
                max: self.max_odds,
            });
        }
        Ok(odds)
    }

    pub fn validate_budget(&self, budget: Decimal) -> Result<Decimal> {
        if budget < self.min_budget {
            return Err(CalcError::BudgetTooLow {
                budget,
                min: self.min_budget,
            });
        }
        if budget > self.max_budget {
            return Err(CalcError::BudgetTooHigh {
                budget,
                max: self.max_budget,
            });
        }
        Ok(budget)
    }

    /// Validates both odds and assesses the pair.
    pub fn assess(&self, odds1: Decimal, odds2: Decimal) -> Result<Assessment> {
        let odds1 = self.validate_odds(odds1)?;
        let odds2 = self.validate_odds(odds2)?;
        Ok(assess(odds1, odds2))
    }

    /// Validates inputs and evaluates the pair against the budget.
    pub fn evaluate(&self, odds1: Decimal, odds2: Decimal, budget: Decimal) -> Result<Evaluation> {
        let odds1 = self.validate_odds(odds1)?;
        let odds2 = self.validate_odds(odds2)?;
        let budget = self.validate_budget(budget)?;

        debug!(odds1 = %odds1, odds2 = %odds2, budget = %budget, "Evaluating odds pair");

        let evaluation = try_evaluate(odds1, odds2, budget)?;

        info!(
            odds1 = %odds1,
            odds2 = %odds2,
            payout = %evaluation.payout(),
            guaranteed_profit = %evaluation.guaranteed_profit(),
            "Arbitrage opportunity found"
        );

        Ok(evaluation)
    }

    /// Sweeps the second outcome's odds from the minimum up to `max_odds2`.
    pub fn curve(
        &self,
        odds1: Decimal,
        max_odds2: Decimal,
        points: usize,
    ) -> Result<Vec<CurvePoint>> {
        let odds1 = self.validate_odds(odds1)?;

        if max_odds2 < self.min_odds || max_odds2 > self.max_odds {
            return Err(CalcError::InvalidCurve(format!(
                "max odds {} are outside {}..={}",
                max_odds2, self.min_odds, self.max_odds
            )));
        }
        if points == 0 {
            return Err(CalcError::InvalidCurve("points must be positive".into()));
        }
        if points > MAX_CURVE_POINTS {
            return Err(CalcError::InvalidCurve(format!(
                "points must not exceed {}",
                MAX_CURVE_POINTS
            )));
        }

        debug!(odds1 = %odds1, max_odds2 = %max_odds2, points, "Sweeping ROI curve");

        Ok(roi_curve(odds1, self.min_odds, max_odds2, points))
    }
}
