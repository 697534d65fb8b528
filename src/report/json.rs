//! Machine-readable output.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ReportError;
use crate::arbitrage::CurvePoint;
use crate::domain::{Assessment, Evaluation};

#[derive(Serialize)]
struct AssessmentReport<'a> {
    #[serde(flatten)]
    assessment: &'a Assessment,
    margin: Decimal,
    roi_percent: Option<Decimal>,
}

#[derive(Serialize)]
struct EvaluationReport<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    total_stake: Decimal,
    net_profit: Decimal,
    roi_percent: Option<Decimal>,
}

#[derive(Serialize)]
struct NoOpportunityReport {
    opportunity: bool,
    implied_probability: Decimal,
}

#[derive(Serialize)]
struct CurveReport<'a> {
    odds1: Decimal,
    break_even_odds: Decimal,
    points: &'a [CurvePoint],
}

pub fn assessment_json(assessment: &Assessment) -> Result<String, ReportError> {
    let report = AssessmentReport {
        assessment,
        margin: assessment.margin(),
        roi_percent: assessment.roi_percent().map(|r| r.round_dp(4)),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn evaluation_json(evaluation: &Evaluation) -> Result<String, ReportError> {
    let report = EvaluationReport {
        evaluation,
        total_stake: evaluation.total_stake(),
        net_profit: evaluation.net_profit(),
        roi_percent: evaluation.roi_percent().map(|r| r.round_dp(2)),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn no_opportunity_json(implied_probability: Decimal) -> Result<String, ReportError> {
    let report = NoOpportunityReport {
        opportunity: false,
        implied_probability,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn curve_json(
    odds1: Decimal,
    break_even_odds: Decimal,
    points: &[CurvePoint],
) -> Result<String, ReportError> {
    let report = CurveReport {
        odds1,
        break_even_odds,
        points,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
