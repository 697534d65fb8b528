//! Domain models for two-way arbitrage betting.

mod assessment;
mod bet;
mod evaluation;
pub mod money;

pub use assessment::Assessment;
pub use bet::{Bet, Leg};
pub use evaluation::Evaluation;
pub use money::Rounding;
