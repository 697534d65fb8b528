//! Completed two-way arbitrage evaluation.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Bet, Leg, Rounding};

/// Evaluation holds the stake split for a risk-free odds pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    implied_probability: Decimal,
    budget: Decimal,
    payout: Decimal,
    theoretical_profit: Decimal,
    guaranteed_profit: Decimal,
    bets: [Bet; 2],
    rounding: [Rounding; 2],
}

impl Evaluation {
    /// Assembles an evaluation; the guaranteed profit is the smaller leg profit.
    pub fn new(
        implied_probability: Decimal,
        budget: Decimal,
        payout: Decimal,
        theoretical_profit: Decimal,
        bets: [Bet; 2],
        rounding: [Rounding; 2],
    ) -> Self {
        let guaranteed_profit = bets[0].profit().min(bets[1].profit());
        Self {
            implied_probability,
            budget,
            payout,
            theoretical_profit,
            guaranteed_profit,
            bets,
            rounding,
        }
    }

    pub fn implied_probability(&self) -> Decimal {
        self.implied_probability
    }

    pub fn budget(&self) -> Decimal {
        self.budget
    }

    /// Common gross return targeted on both outcomes.
    pub fn payout(&self) -> Decimal {
        self.payout
    }

    /// Payout minus budget, before stakes are quantized.
    pub fn theoretical_profit(&self) -> Decimal {
        self.theoretical_profit
    }

    /// Minimum realized profit across both legs.
    pub fn guaranteed_profit(&self) -> Decimal {
        self.guaranteed_profit
    }

    pub fn bets(&self) -> &[Bet; 2] {
        &self.bets
    }

    pub fn bet(&self, leg: Leg) -> &Bet {
        &self.bets[leg.index()]
    }

    /// Direction each leg's stake was quantized in.
    pub fn rounding(&self, leg: Leg) -> Rounding {
        self.rounding[leg.index()]
    }

    /// The leg whose profit sets the guaranteed floor.
    pub fn worst_leg(&self) -> Leg {
        if self.bets[1].profit() < self.bets[0].profit() {
            Leg::Second
        } else {
            Leg::First
        }
    }

    /// Sum of both rounded stakes.
    pub fn total_stake(&self) -> Decimal {
        self.bets[0].stake() + self.bets[1].stake()
    }

    /// Smallest return minus everything staked: what the worst outcome nets.
    pub fn net_profit(&self) -> Decimal {
        self.bets[0].returns().min(self.bets[1].returns()) - self.total_stake()
    }

    /// Theoretical profit as a percentage of the budget.
    pub fn roi_percent(&self) -> Option<Decimal> {
        self.theoretical_profit
            .checked_div(self.budget)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}
