use std::sync::Arc;

use rand::Rng;
use tracing::info;

use super::calculator::ScenarioCalculator;
use crate::domain::{ScenarioInput, ScenarioResult, TransportMode};

/// The two Hissmofors case-study scenarios offered out of the box.
pub fn preloaded_inputs() -> Vec<ScenarioInput> {
    vec![
        ScenarioInput {
            name: "Current Terminal (Diesel, Limited Capacity)".to_string(),
            tonnage: 720_000.0,
            transport_mode: TransportMode::RailDiesel,
            train_frequency: 2.5,
            distance_to_terminal: 80.0,
            distance_to_customer: 120.0,
            description: Some(
                "Current situation with diesel trains and limited capacity".to_string(),
            ),
        },
        ScenarioInput {
            name: "Upgraded Electrified Terminal (High Capacity)".to_string(),
            tonnage: 720_000.0,
            transport_mode: TransportMode::RailElectric,
            train_frequency: 10.0,
            distance_to_terminal: 0.0,
            distance_to_customer: 0.0,
            description: Some(
                "Future scenario with electrified terminal and full rail capacity".to_string(),
            ),
        },
    ]
}

/// Results for the preloaded scenarios, calculated once at start-up.
#[derive(Debug, Clone)]
pub struct PreloadedScenarios {
    results: Arc<[ScenarioResult]>,
}

impl PreloadedScenarios {
    pub fn compute<R: Rng>(calculator: &mut ScenarioCalculator<R>) -> Self {
        let results: Arc<[ScenarioResult]> = preloaded_inputs()
            .iter()
            .map(|input| calculator.calculate(input))
            .collect();
        info!(count = results.len(), "preloaded scenarios calculated");
        Self { results }
    }

    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    pub fn to_vec(&self) -> Vec<ScenarioResult> {
        self.results.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_preloaded_scenarios_with_case_study_values() {
        let mut calc = ScenarioCalculator::from_seed(Some(5));
        let preloaded = PreloadedScenarios::compute(&mut calc);
        let results = preloaded.results();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rail_capacity_tons, 195000);
        assert_eq!(results[0].truck_volume_tons, 525000);
        assert_eq!(results[1].rail_capacity_tons, 780000);
        assert_eq!(results[1].truck_volume_tons, 0);
        assert_eq!(results[1].co2_rail_tons, 0);
        assert_eq!(
            results[0].description.as_deref(),
            Some("Current situation with diesel trains and limited capacity")
        );
    }

    #[test]
    fn test_snapshot_is_shared_not_recomputed() {
        let mut calc = ScenarioCalculator::from_seed(None);
        let preloaded = PreloadedScenarios::compute(&mut calc);
        let clone = preloaded.clone();
        assert_eq!(preloaded.results(), clone.results());
        assert_eq!(preloaded.to_vec(), clone.to_vec());
    }

    #[test]
    fn test_preloaded_names_are_unique() {
        let inputs = preloaded_inputs();
        assert_ne!(inputs[0].name, inputs[1].name);
    }
}
