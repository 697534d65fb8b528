//! Stake calculator for two-way arbitrage betting.
//!
//! Given decimal odds for two mutually exclusive outcomes and a budget,
//! decides whether a guaranteed profit exists and splits the budget into
//! cent-quantized stakes that profit on either outcome.

pub mod arbitrage;
pub mod config;
pub mod domain;
pub mod report;

pub use arbitrage::{CalcError, Calculator, assess, evaluate};
pub use domain::{Assessment, Bet, Evaluation, Leg, Rounding};
