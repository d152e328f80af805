use serde::{Deserialize, Serialize};

use super::rounding::round_to;
use crate::domain::{ScenarioResult, TransportMode};

/// Dashboard totals over every held scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub scenario_count: usize,
    #[serde(rename = "totalCostMSEK")]
    pub total_cost_msek: f64,
    pub total_co2_tons: u64,
    #[serde(rename = "averageCostMSEK")]
    pub average_cost_msek: f64,
    pub efficiencies: Vec<ScenarioEfficiency>,
}

/// Per-ton view of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEfficiency {
    pub name: String,
    pub transport_mode: TransportMode,
    /// Rail capacity as a share of demand (%); above 100 means spare capacity
    pub rail_share_percent: f64,
    /// Currency units per ton moved
    pub cost_per_ton: f64,
    /// kg CO2e per ton moved
    pub co2_kg_per_ton: f64,
}

impl ScenarioEfficiency {
    pub fn of(result: &ScenarioResult) -> Self {
        let tonnage = result.tonnage;
        let per_ton = |value: f64, scale: f64| {
            if tonnage > 0.0 {
                round_to(value / (tonnage / scale), 2)
            } else {
                0.0
            }
        };

        Self {
            name: result.name.clone(),
            transport_mode: result.transport_mode,
            rail_share_percent: per_ton(result.rail_capacity_tons as f64 * 100.0, 1.0),
            cost_per_ton: per_ton(result.total_cost_msek, 1_000_000.0),
            co2_kg_per_ton: per_ton(result.co2_total_tons as f64, 1000.0),
        }
    }
}

pub fn summarize<'a, I>(results: I) -> PortfolioSummary
where
    I: IntoIterator<Item = &'a ScenarioResult>,
{
    let results: Vec<&ScenarioResult> = results.into_iter().collect();
    let scenario_count = results.len();

    let total_cost: f64 = results.iter().map(|r| r.total_cost_msek).sum();
    let total_co2_tons: u64 = results.iter().map(|r| r.co2_total_tons).sum();
    let average_cost = if scenario_count > 0 {
        total_cost / scenario_count as f64
    } else {
        0.0
    };

    PortfolioSummary {
        scenario_count,
        total_cost_msek: round_to(total_cost, 2),
        total_co2_tons,
        average_cost_msek: round_to(average_cost, 2),
        efficiencies: results.into_iter().map(ScenarioEfficiency::of).collect(),
    }
}
