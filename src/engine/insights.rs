use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ComputationDegenerate;
use super::rounding::{round_half_up, round_to};
use crate::domain::ScenarioResult;

/// Relative impact of a comparison scenario against a baseline.
///
/// Percentages are `None` when the baseline value is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub baseline: String,
    pub comparison: String,
    /// MSEK, comparison minus baseline
    pub cost_difference: f64,
    /// Tons CO2e, comparison minus baseline
    pub co2_difference: i64,
    pub cost_percentage: Option<i64>,
    pub co2_percentage: Option<i64>,
    pub better_scenario: String,
}

/// Compare the first two results of an ordered collection, the first being
/// the baseline. Fewer than two results yields no insight.
pub fn generate_insights<'a, I>(results: I) -> Option<Insights>
where
    I: IntoIterator<Item = &'a ScenarioResult>,
{
    let mut results = results.into_iter();
    let baseline = results.next()?;
    let comparison = results.next()?;
    Some(compare(baseline, comparison))
}

pub fn compare(baseline: &ScenarioResult, comparison: &ScenarioResult) -> Insights {
    let cost_difference = comparison.total_cost_msek - baseline.total_cost_msek;
    let co2_difference = comparison.co2_total_tons as i64 - baseline.co2_total_tons as i64;

    let cost_percentage = reported_percentage(
        &baseline.name,
        cost_difference,
        baseline.total_cost_msek,
        "cost",
    );
    let co2_percentage = reported_percentage(
        &baseline.name,
        co2_difference as f64,
        baseline.co2_total_tons as f64,
        "co2",
    );

    // Both cheaper and cleaner, otherwise the baseline stands
    let better_scenario = if cost_difference < 0.0 && co2_difference < 0 {
        comparison.name.clone()
    } else {
        baseline.name.clone()
    };

    Insights {
        baseline: baseline.name.clone(),
        comparison: comparison.name.clone(),
        cost_difference: round_to(cost_difference, 2),
        co2_difference,
        cost_percentage,
        co2_percentage,
        better_scenario,
    }
}

fn reported_percentage(
    baseline_name: &str,
    difference: f64,
    baseline: f64,
    metric: &'static str,
) -> Option<i64> {
    match relative_percentage(difference, baseline, metric) {
        Ok(percentage) => Some(percentage),
        Err(e) => {
            debug!(baseline = %baseline_name, error = %e, "percentage unavailable");
            None
        }
    }
}

fn relative_percentage(
    difference: f64,
    baseline: f64,
    metric: &'static str,
) -> Result<i64, ComputationDegenerate> {
    if baseline == 0.0 {
        return Err(ComputationDegenerate { metric });
    }
    Ok(round_half_up(difference / baseline * 100.0) as i64)
}
