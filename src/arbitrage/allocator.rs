//! Stake allocation with cent quantization.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::domain::{Bet, Rounding};

/// Allocation is the pair of settled bets for a payout target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub bets: [Bet; 2],
    pub rounding: [Rounding; 2],
}

/// Picks the quantization direction for each leg.
///
/// The lower-odds leg rounds up so its return still reaches the payout; the
/// higher-odds leg rounds down. Equal odds round both down.
pub fn rounding_directions(odds1: Decimal, odds2: Decimal) -> [Rounding; 2] {
    match odds1.cmp(&odds2) {
        Ordering::Less => [Rounding::Up, Rounding::Down],
        Ordering::Greater => [Rounding::Down, Rounding::Up],
        Ordering::Equal => [Rounding::Down, Rounding::Down],
    }
}

/// Splits a payout target into two quantized stakes and settles both bets.
///
/// Returns `None` if a stake or return leaves the `Decimal` range.
pub fn allocate(payout: Decimal, odds1: Decimal, odds2: Decimal) -> Option<Allocation> {
    let rounding = rounding_directions(odds1, odds2);

    let stake1 = rounding[0].apply(payout.checked_div(odds1)?);
    let stake2 = rounding[1].apply(payout.checked_div(odds2)?);

    Some(Allocation {
        bets: [Bet::settle(odds1, stake1)?, Bet::settle(odds2, stake2)?],
        rounding,
    })
}
