//! Human-readable tables.

use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use super::{format_money, format_optional_percent, format_percent};
use crate::arbitrage::{CurvePoint, best_point};
use crate::domain::{Assessment, Evaluation, Leg};

/// Shown in place of a stake table when the odds are not risk-free.
pub const NO_OPPORTUNITY_MESSAGE: &str = "No arbitrage opportunity exists with these odds.";

#[derive(Tabled)]
struct BetRow {
    #[tabled(rename = "Bet")]
    leg: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Return")]
    returns: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Rounding")]
    rounding: String,
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct CurveRow {
    #[tabled(rename = "Odds 2")]
    odds: String,
    #[tabled(rename = "Implied Probability")]
    implied_probability: String,
    #[tabled(rename = "ROI")]
    roi: String,
    #[tabled(rename = "Risk-free")]
    risk_free: &'static str,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Formats the implied probability summary for an odds pair.
pub fn format_assessment(assessment: &Assessment) -> String {
    let rows = vec![
        MetricRow {
            metric: "Implied probability",
            value: format!("{:.4}", assessment.implied_probability.round_dp(4)),
        },
        MetricRow {
            metric: "Margin",
            value: format_percent(assessment.margin() * Decimal::ONE_HUNDRED),
        },
        MetricRow {
            metric: "ROI",
            value: format_optional_percent(assessment.roi_percent()),
        },
        MetricRow {
            metric: "Risk-free",
            value: yes_no(assessment.is_risk_free).to_string(),
        },
    ];

    Table::new(rows).to_string()
}

/// Formats the stake table and profit summary of an evaluation.
pub fn format_evaluation(evaluation: &Evaluation, currency: &str) -> String {
    let rows: Vec<BetRow> = [Leg::First, Leg::Second]
        .into_iter()
        .map(|leg| {
            let bet = evaluation.bet(leg);
            BetRow {
                leg: leg.to_string(),
                odds: bet.odds().to_string(),
                stake: format_money(currency, bet.stake()),
                returns: format_money(currency, bet.returns()),
                profit: format_money(currency, bet.profit()),
                rounding: evaluation.rounding(leg).to_string(),
            }
        })
        .collect();

    format!(
        "Arbitrage opportunity found!\n\n\
         {}\n\n\
         Total stake:        {}\n\
         Payout:             {}\n\
         Guaranteed profit:  {}\n\
         Theoretical profit: {} ({})\n\
         Worst-case net:     {}",
        Table::new(rows),
        format_money(currency, evaluation.total_stake()),
        format_money(currency, evaluation.payout()),
        format_money(currency, evaluation.guaranteed_profit()),
        format_money(currency, evaluation.theoretical_profit()),
        format_optional_percent(evaluation.roi_percent()),
        format_money(currency, evaluation.net_profit()),
    )
}

/// Formats the no-opportunity outcome.
pub fn format_no_opportunity(implied_probability: Decimal) -> String {
    format!(
        "{}\nTotal implied probability: {:.4}",
        NO_OPPORTUNITY_MESSAGE,
        implied_probability.round_dp(4)
    )
}

/// Formats an ROI sweep with its break-even odds and best sample.
pub fn format_curve(odds1: Decimal, break_even: Decimal, points: &[CurvePoint]) -> String {
    let rows: Vec<CurveRow> = points
        .iter()
        .map(|p| CurveRow {
            odds: format!("{:.2}", p.odds.round_dp(2)),
            implied_probability: format!("{:.4}", p.implied_probability.round_dp(4)),
            roi: format_optional_percent(p.roi_percent),
            risk_free: yes_no(p.is_risk_free),
        })
        .collect();

    let best = best_point(points)
        .map(|p| {
            format!(
                "{} at odds {:.2}",
                format_optional_percent(p.roi_percent),
                p.odds.round_dp(2)
            )
        })
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "ROI vs odds for outcome 2 (outcome 1 at {})\n\n\
         {}\n\n\
         Break-even odds: {:.4}\n\
         Best ROI:        {}",
        odds1,
        Table::new(rows),
        break_even.round_dp(4),
        best
    )
}
