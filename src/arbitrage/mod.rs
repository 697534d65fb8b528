//! Two-way arbitrage assessment and stake allocation.
//!
//! The pipeline is `assess` -> `derive_payout` -> `allocate`, wrapped by
//! `evaluate`. Everything here is pure and synchronous.

mod allocator;
mod assessor;
mod calculator;
pub mod curve;
mod error;
mod evaluator;

pub use allocator::{Allocation, allocate, rounding_directions};
pub use assessor::assess;
pub use calculator::Calculator;
pub use curve::{CurvePoint, best_point, break_even_odds, roi_curve};
pub use error::CalcError;
pub use evaluator::{Payout, derive_payout, evaluate, try_evaluate};
