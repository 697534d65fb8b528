//! Command-line interface definitions.

mod commands;

pub use commands::run;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// arbcalc - Two-way arbitrage stake calculator.
#[derive(Parser, Debug)]
#[command(name = "arbcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: configs/config.yaml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether two odds admit a risk-free split
    Assess(AssessArgs),

    /// Split a budget into stakes that profit on either outcome
    Evaluate(EvaluateArgs),

    /// Sweep ROI across the second outcome's odds
    Curve(CurveArgs),
}

/// Log level accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[value(alias = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Arguments for the `assess` subcommand.
#[derive(Parser, Debug)]
pub struct AssessArgs {
    /// Decimal odds for outcome 1
    #[arg(long)]
    pub odds1: Decimal,

    /// Decimal odds for outcome 2
    #[arg(long)]
    pub odds2: Decimal,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Decimal odds for outcome 1
    #[arg(long)]
    pub odds1: Decimal,

    /// Decimal odds for outcome 2
    #[arg(long)]
    pub odds2: Decimal,

    /// Total stake to split across both outcomes
    #[arg(long)]
    pub budget: Decimal,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `curve` subcommand.
#[derive(Parser, Debug)]
pub struct CurveArgs {
    /// Known decimal odds for outcome 1
    #[arg(long)]
    pub odds1: Decimal,

    /// Upper bound for outcome 2 odds (default from config)
    #[arg(long)]
    pub max_odds: Option<Decimal>,

    /// Number of samples (default from config)
    #[arg(long)]
    pub points: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::parse_from([
            "arbcalc", "evaluate", "--odds1", "1.90", "--odds2", "2.20", "--budget", "100",
        ]);
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.odds1, dec!(1.90));
                assert_eq!(args.odds2, dec!(2.20));
                assert_eq!(args.budget, dec!(100));
                assert_eq!(args.format, OutputFormat::Table);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "arbcalc", "assess", "--odds1", "2", "--odds2", "3", "--format", "json",
            "--config", "custom.yaml", "--log-level", "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(
            cli.command,
            Commands::Assess(AssessArgs { format: OutputFormat::Json, .. })
        ));
    }

    #[test]
    fn test_parse_curve_optional_args() {
        let cli = Cli::parse_from(["arbcalc", "curve", "--odds1", "1.5"]);
        match cli.command {
            Commands::Curve(args) => {
                assert_eq!(args.odds1, dec!(1.5));
                assert!(args.max_odds.is_none());
                assert!(args.points.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_log_level() {
        let cli = Cli::parse_from([
            "arbcalc", "--log-level", "warning", "assess", "--odds1", "2", "--odds2", "3",
        ]);
        assert_eq!(cli.log_level.map(LogLevel::as_str), Some("warn"));

        let cli = Cli::parse_from(["arbcalc", "assess", "--odds1", "2", "--odds2", "3"]);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Cli::try_parse_from([
            "arbcalc", "--log-level", "bogus", "assess", "--odds1", "2", "--odds2", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_numeric_odds() {
        let result = Cli::try_parse_from(["arbcalc", "assess", "--odds1", "abc", "--odds2", "2"]);
        assert!(result.is_err());
    }
}
