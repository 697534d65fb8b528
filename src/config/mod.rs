//! Configuration loading and validation for the calculator.
//!
//! Uses serde_yaml to load YAML configuration files with support for
//! environment variable overrides.

mod app;
mod calculator;
mod curve;
mod error;

pub use app::AppConfig;
pub use calculator::{
    CalculatorConfig, DEFAULT_CURRENCY, DEFAULT_MAX_BUDGET, DEFAULT_MAX_ODDS, DEFAULT_MIN_BUDGET,
    DEFAULT_MIN_ODDS,
};
pub use curve::{CurveConfig, DEFAULT_CURVE_MAX_ODDS, DEFAULT_CURVE_POINTS, MAX_CURVE_POINTS};
pub use error::ConfigError;

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use std::{env, fs};

/// Config file used when no path is given and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Overrides `app.log_level`.
pub const LOG_LEVEL_ENV: &str = "ARBCALC_LOG_LEVEL";
/// Overrides `calculator.currency`.
pub const CURRENCY_ENV: &str = "ARBCALC_CURRENCY";

/// Root configuration structure.
///
/// Required sections: app.
/// Optional sections: calculator, curve.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Application-level settings like name and log level.
    pub app: AppConfig,
    /// Input bounds and currency (optional).
    pub calculator: Option<CalculatorConfig>,
    /// ROI sweep defaults (optional).
    pub curve: Option<CurveConfig>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then loads YAML config and applies overrides from
    /// `ARBCALC_LOG_LEVEL` and `ARBCALC_CURRENCY`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, else from [`DEFAULT_CONFIG_PATH`] if it
    /// exists, else fall back to built-in defaults with env overrides.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load(default_path);
        }

        dotenvy::dotenv().ok();
        let mut config = Config::default();
        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Calculator section, or defaults when absent.
    pub fn calculator(&self) -> CalculatorConfig {
        self.calculator.clone().unwrap_or_default()
    }

    /// Curve section, or defaults when absent.
    pub fn curve(&self) -> CurveConfig {
        self.curve.clone().unwrap_or_default()
    }

    /// Apply overrides from a variable lookup (the process environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()) {
            self.app.log_level = Some(level);
        }

        if let Some(currency) = lookup(CURRENCY_ENV).filter(|v| !v.is_empty()) {
            self.calculator.get_or_insert_with(Default::default).currency = Some(currency);
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if let Some(ref level) = self.app.log_level {
            if !matches!(
                level.as_str(),
                "trace" | "debug" | "info" | "warn" | "warning" | "error"
            ) {
                return Err(ConfigError::Validation(format!(
                    "app.log_level: unknown level {}",
                    level
                )));
            }
        }

        if let Some(ref calculator) = self.calculator {
            if calculator.min_odds() <= Decimal::ONE {
                return Err(ConfigError::Validation(
                    "calculator.min_odds must be greater than 1".into(),
                ));
            }
            if calculator.max_odds() < calculator.min_odds() {
                return Err(ConfigError::Validation(
                    "calculator.max_odds must be at least calculator.min_odds".into(),
                ));
            }
            if calculator.min_budget() <= Decimal::ZERO {
                return Err(ConfigError::Validation(
                    "calculator.min_budget must be positive".into(),
                ));
            }
            if calculator.max_budget() < calculator.min_budget() {
                return Err(ConfigError::Validation(
                    "calculator.max_budget must be at least calculator.min_budget".into(),
                ));
            }
        }

        if let Some(ref curve) = self.curve {
            if curve.points() == 0 {
                return Err(ConfigError::Validation(
                    "curve.points must be positive".into(),
                ));
            }
            if curve.points() > MAX_CURVE_POINTS {
                return Err(ConfigError::Validation(format!(
                    "curve.points must not exceed {}",
                    MAX_CURVE_POINTS
                )));
            }
            let calculator = self.calculator();
            if curve.max_odds() < calculator.min_odds() {
                return Err(ConfigError::Validation(format!(
                    "curve.max_odds must be at least calculator.min_odds ({})",
                    calculator.min_odds()
                )));
            }
            if curve.max_odds() > calculator.max_odds() {
                return Err(ConfigError::Validation(format!(
                    "curve.max_odds must not exceed calculator.max_odds ({})",
                    calculator.max_odds()
                )));
            }
        }

        Ok(())
    }
}
