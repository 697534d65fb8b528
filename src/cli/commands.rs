//! Subcommand handlers.

use anyhow::Result;
use tracing::debug;

use super::{AssessArgs, Cli, Commands, CurveArgs, EvaluateArgs, OutputFormat};
use arbcalc::arbitrage::{CalcError, Calculator, break_even_odds};
use arbcalc::config::{Config, CurveConfig};
use arbcalc::report;

/// Runs the parsed command against the loaded configuration.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let calculator_config = config.calculator();
    let calculator = Calculator::from_config(&calculator_config);

    let output = match &cli.command {
        Commands::Assess(args) => assess(&calculator, args)?,
        Commands::Evaluate(args) => evaluate(&calculator, args, calculator_config.currency())?,
        Commands::Curve(args) => curve(&calculator, args, &config.curve())?,
    };

    println!("{}", output);
    Ok(())
}

fn assess(calculator: &Calculator, args: &AssessArgs) -> Result<String> {
    let assessment = calculator.assess(args.odds1, args.odds2)?;

    Ok(match args.format {
        OutputFormat::Table => report::format_assessment(&assessment),
        OutputFormat::Json => report::assessment_json(&assessment)?,
    })
}

fn evaluate(calculator: &Calculator, args: &EvaluateArgs, currency: &str) -> Result<String> {
    match calculator.evaluate(args.odds1, args.odds2, args.budget) {
        Ok(evaluation) => Ok(match args.format {
            OutputFormat::Table => report::format_evaluation(&evaluation, currency),
            OutputFormat::Json => report::evaluation_json(&evaluation)?,
        }),
        // Not risk-free is a normal answer, not a failure.
        Err(CalcError::NoOpportunity {
            implied_probability,
        }) => Ok(match args.format {
            OutputFormat::Table => report::format_no_opportunity(implied_probability),
            OutputFormat::Json => report::no_opportunity_json(implied_probability)?,
        }),
        Err(e) => Err(e.into()),
    }
}

fn curve(calculator: &Calculator, args: &CurveArgs, defaults: &CurveConfig) -> Result<String> {
    let max_odds = args.max_odds.unwrap_or_else(|| defaults.max_odds());
    let points = args.points.unwrap_or_else(|| defaults.points());

    let samples = calculator.curve(args.odds1, max_odds, points)?;
    let break_even = break_even_odds(args.odds1);

    debug!(samples = samples.len(), break_even = %break_even, "ROI curve computed");

    Ok(match args.format {
        OutputFormat::Table => report::format_curve(args.odds1, break_even, &samples),
        OutputFormat::Json => report::curve_json(args.odds1, break_even, &samples)?,
    })
}
