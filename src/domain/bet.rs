//! Single-outcome bet.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::floor2;

/// Position of a bet within the two-way pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    First,
    Second,
}

impl Leg {
    /// Index into a two-element bet array.
    pub fn index(self) -> usize {
        match self {
            Leg::First => 0,
            Leg::Second => 1,
        }
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leg::First => write!(f, "Bet 1"),
            Leg::Second => write!(f, "Bet 2"),
        }
    }
}

/// Bet represents the money placed on one outcome and what it pays.
///
/// Built fully populated from a quantized stake; all amounts are whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bet {
    odds: Decimal,
    stake: Decimal,
    #[serde(rename = "return")]
    returns: Decimal,
    profit: Decimal,
}

impl Bet {
    /// Settles a bet: return and profit are derived from the given stake,
    /// which must already be quantized to cents.
    ///
    /// Returns `None` if the return does not fit in a `Decimal`.
    pub fn settle(odds: Decimal, stake: Decimal) -> Option<Self> {
        let returns = floor2(stake.checked_mul(odds)?);
        let profit = floor2(returns.checked_sub(stake)?);
        Some(Self {
            odds,
            stake,
            returns,
            profit,
        })
    }

    /// Decimal odds, inclusive of stake.
    pub fn odds(&self) -> Decimal {
        self.odds
    }

    /// Money placed on this outcome.
    pub fn stake(&self) -> Decimal {
        self.stake
    }

    /// Gross payout if this outcome occurs.
    pub fn returns(&self) -> Decimal {
        self.returns
    }

    /// Return minus this bet's own stake.
    pub fn profit(&self) -> Decimal {
        self.profit
    }

    /// Break-even probability implied by the odds.
    pub fn implied_probability(&self) -> Decimal {
        Decimal::ONE / self.odds
    }
}
