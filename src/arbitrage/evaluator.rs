//! Assessment-to-allocation pipeline.

use rust_decimal::Decimal;
use tracing::debug;

use super::{CalcError, allocate, assess};
use crate::domain::Evaluation;
use crate::domain::money::floor2;

/// Payout target and theoretical profit for a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub payout: Decimal,
    pub profit: Decimal,
}

/// Derives the common payout from the budget and a total implied
/// probability below 1. Both values are floored to cents.
///
/// Returns `None` if the payout does not fit in a `Decimal`.
pub fn derive_payout(budget: Decimal, implied_probability: Decimal) -> Option<Payout> {
    let payout = floor2(budget.checked_div(implied_probability)?);
    let profit = floor2(payout.checked_sub(budget)?);
    Some(Payout { payout, profit })
}

/// Evaluates an odds pair against a budget.
///
/// Fails with [`CalcError::NoOpportunity`] when the odds are not risk-free
/// (no bets are built in that case) and with [`CalcError::AmountOutOfRange`]
/// when an amount overflows.
pub fn try_evaluate(odds1: Decimal, odds2: Decimal, budget: Decimal) -> Result<Evaluation, CalcError> {
    let assessment = assess(odds1, odds2);
    if !assessment.is_risk_free {
        debug!(
            odds1 = %odds1,
            odds2 = %odds2,
            implied_probability = %assessment.implied_probability,
            "No arbitrage opportunity"
        );
        return Err(CalcError::NoOpportunity {
            implied_probability: assessment.implied_probability,
        });
    }

    let Payout { payout, profit } = derive_payout(budget, assessment.implied_probability)
        .ok_or(CalcError::AmountOutOfRange("payout"))?;
    let allocation =
        allocate(payout, odds1, odds2).ok_or(CalcError::AmountOutOfRange("stakes"))?;

    let evaluation = Evaluation::new(
        assessment.implied_probability,
        budget,
        payout,
        profit,
        allocation.bets,
        allocation.rounding,
    );

    debug!(
        odds1 = %odds1,
        odds2 = %odds2,
        budget = %budget,
        payout = %payout,
        stake1 = %allocation.bets[0].stake(),
        stake2 = %allocation.bets[1].stake(),
        guaranteed_profit = %evaluation.guaranteed_profit(),
        "Stakes allocated"
    );

    Ok(evaluation)
}

/// Evaluates an odds pair against a budget.
///
/// Returns `None` when the odds are not risk-free or the amounts overflow;
/// use [`try_evaluate`] to tell the two apart.
pub fn evaluate(odds1: Decimal, odds2: Decimal, budget: Decimal) -> Option<Evaluation> {
    try_evaluate(odds1, odds2, budget).ok()
}
