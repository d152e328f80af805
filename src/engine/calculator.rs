use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use super::allocation::{total_cost_msek, Allocation};
use super::emissions::Emissions;
use super::error::ValidationError;
use super::rounding::group_thousands;
use super::route::RouteSynthesizer;
use super::validator::validate_input;
use crate::domain::{RawScenarioInput, ScenarioInput, ScenarioResult, TransportMode};

/// Turns validated scenario parameters into a `ScenarioResult`.
///
/// Cost, emissions and notes are pure functions of the input; only the
/// route points draw from the synthesizer's generator.
pub struct ScenarioCalculator<R = StdRng> {
    routes: RouteSynthesizer<R>,
}

impl ScenarioCalculator<StdRng> {
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(RouteSynthesizer::from_seed(seed))
    }
}

impl<R: Rng> ScenarioCalculator<R> {
    pub fn new(routes: RouteSynthesizer<R>) -> Self {
        Self { routes }
    }

    /// Validate a raw submission, then calculate it.
    pub fn calculate_raw(&mut self, raw: &RawScenarioInput) -> Result<ScenarioResult, ValidationError> {
        let input = validate_input(raw)?;
        Ok(self.calculate(&input))
    }

    pub fn calculate(&mut self, input: &ScenarioInput) -> ScenarioResult {
        let allocation = Allocation::for_input(input);

        if input.transport_mode == TransportMode::Truck && allocation.rail_capacity_tons > 0.0 {
            warn!(
                scenario = %input.name,
                train_frequency = input.train_frequency,
                "truck mode with scheduled trains: rail capacity is priced but not counted as emitting"
            );
        }

        let total_cost_msek = total_cost_msek(input, &allocation);
        let emissions = Emissions::for_allocation(input, &allocation);
        let notes = scenario_notes(input.transport_mode, &allocation);
        let route = self.routes.synthesize(input);

        debug!(
            scenario = %input.name,
            mode = %input.transport_mode,
            rail_tons = allocation.rail_whole_tons(),
            truck_tons = allocation.truck_whole_tons(),
            total_cost_msek,
            co2_total_tons = emissions.total_tons,
            "scenario calculated"
        );

        ScenarioResult {
            name: input.name.clone(),
            rail_capacity_tons: allocation.rail_whole_tons(),
            truck_volume_tons: allocation.truck_whole_tons(),
            total_cost_msek,
            co2_rail_tons: emissions.rail_tons,
            co2_truck_tons: emissions.truck_tons,
            co2_total_tons: emissions.total_tons,
            route,
            notes,
            transport_mode: input.transport_mode,
            train_frequency: input.train_frequency,
            distance_to_terminal: input.distance_to_terminal,
            distance_to_customer: input.distance_to_customer,
            tonnage: input.tonnage,
            description: input.description.clone(),
        }
    }
}

/// Notable facts about an allocation, in fixed order: electric traction,
/// then road volume, then rail volume.
pub fn scenario_notes(mode: TransportMode, allocation: &Allocation) -> Vec<String> {
    let mut notes = Vec::new();
    if mode == TransportMode::RailElectric {
        notes.push("Electric rail transport with zero CO2 emissions".to_string());
    }
    if allocation.truck_volume_tons > 0.0 {
        notes.push(format!(
            "{} tons/year transported by truck",
            group_thousands(allocation.truck_whole_tons())
        ));
    }
    if allocation.rail_capacity_tons > 0.0 {
        notes.push(format!(
            "{} tons/year transported by rail",
            group_thousands(allocation.rail_whole_tons())
        ));
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawNumber;
    use crate::engine::route::{DESTINATION, ORIGIN};

    fn diesel_limited() -> ScenarioInput {
        ScenarioInput {
            name: "Current Terminal (Diesel, Limited Capacity)".into(),
            tonnage: 720000.0,
            transport_mode: TransportMode::RailDiesel,
            train_frequency: 2.5,
            distance_to_terminal: 80.0,
            distance_to_customer: 120.0,
            description: None,
        }
    }

    fn electric_upgraded() -> ScenarioInput {
        ScenarioInput {
            name: "Upgraded Electrified Terminal (High Capacity)".into(),
            tonnage: 720000.0,
            transport_mode: TransportMode::RailElectric,
            train_frequency: 10.0,
            distance_to_terminal: 0.0,
            distance_to_customer: 0.0,
            description: None,
        }
    }

    #[test]
    fn test_diesel_limited_capacity_result() {
        let mut calc = ScenarioCalculator::from_seed(Some(3));
        let result = calc.calculate(&diesel_limited());

        assert_eq!(result.name, "Current Terminal (Diesel, Limited Capacity)");
        assert_eq!(result.rail_capacity_tons, 195000);
        assert_eq!(result.truck_volume_tons, 525000);
        assert!((result.total_cost_msek - 24.24).abs() < 1e-9);
        assert_eq!(result.co2_rail_tons, 210600);
        assert_eq!(result.co2_truck_tons, 157500);
        assert_eq!(result.co2_total_tons, 368100);
        assert_eq!(
            result.notes,
            vec![
                "525,000 tons/year transported by truck",
                "195,000 tons/year transported by rail",
            ]
        );
        assert_eq!(result.route.len(), 3);
        assert_eq!(result.route[0], ORIGIN);
        assert_eq!(result.tonnage, 720000.0);
        assert_eq!(result.transport_mode, TransportMode::RailDiesel);
    }

    #[test]
    fn test_electric_upgrade_result() {
        let mut calc = ScenarioCalculator::from_seed(Some(3));
        let result = calc.calculate(&electric_upgraded());

        assert_eq!(result.rail_capacity_tons, 780000);
        assert_eq!(result.truck_volume_tons, 0);
        assert_eq!(result.co2_rail_tons, 0);
        assert_eq!(result.co2_total_tons, 0);
        assert!((result.total_cost_msek - 89.7).abs() < 1e-9);
        assert_eq!(
            result.notes,
            vec![
                "Electric rail transport with zero CO2 emissions",
                "780,000 tons/year transported by rail",
            ]
        );
        assert_eq!(result.route, vec![ORIGIN, DESTINATION]);
    }

    #[test]
    fn test_truck_only_notes() {
        let allocation = Allocation {
            rail_capacity_tons: 0.0,
            truck_volume_tons: 1500.0,
        };
        assert_eq!(
            scenario_notes(TransportMode::Truck, &allocation),
            vec!["1,500 tons/year transported by truck"]
        );
    }

    #[test]
    fn test_recalculation_is_idempotent_apart_from_route() {
        let mut calc = ScenarioCalculator::from_seed(None);
        let first = calc.calculate(&diesel_limited());
        let second = calc.calculate(&diesel_limited());

        assert_eq!(first.rail_capacity_tons, second.rail_capacity_tons);
        assert_eq!(first.truck_volume_tons, second.truck_volume_tons);
        assert_eq!(first.total_cost_msek, second.total_cost_msek);
        assert_eq!(first.co2_rail_tons, second.co2_rail_tons);
        assert_eq!(first.co2_truck_tons, second.co2_truck_tons);
        assert_eq!(first.co2_total_tons, second.co2_total_tons);
        assert_eq!(first.notes, second.notes);
    }

    #[test]
    fn test_calculate_raw_propagates_validation_error() {
        let mut calc = ScenarioCalculator::from_seed(Some(1));
        let raw = RawScenarioInput {
            name: None,
            tonnage: None,
            transport_mode: Some("rail_diesel".into()),
            train_frequency: Some(RawNumber::from(2.5)),
            distance_to_terminal: Some(RawNumber::from(80.0)),
            distance_to_customer: Some(RawNumber::from(120.0)),
            description: None,
        };
        let err = calc.calculate_raw(&raw).unwrap_err();
        assert_eq!(err.missing, vec!["name", "tonnage"]);
    }

    #[test]
    fn test_calculate_raw_accepts_form_text() {
        let mut calc = ScenarioCalculator::from_seed(Some(1));
        let raw = RawScenarioInput {
            name: Some("Form".into()),
            tonnage: Some("720000".into()),
            transport_mode: Some("rail_diesel".into()),
            train_frequency: Some("2.5".into()),
            distance_to_terminal: Some("80".into()),
            distance_to_customer: Some("120".into()),
            description: None,
        };
        let result = calc.calculate_raw(&raw).unwrap();
        assert_eq!(result.rail_capacity_tons, 195000);
        assert_eq!(result.truck_volume_tons, 525000);
    }
}
