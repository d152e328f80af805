use serde::{Deserialize, Serialize};

use super::allocation::Allocation;
use super::rounding::whole_tons;
use crate::domain::{ScenarioInput, TransportMode};

/// Diesel locomotive consumption (litres per 10 km)
pub const DIESEL_TRAIN_LITRES_PER_10KM: f64 = 45.0;
/// Truck consumption (litres per 10 km)
pub const TRUCK_LITRES_PER_10KM: f64 = 5.0;
/// Diesel emission factor (kg CO2e per litre)
pub const KG_CO2E_PER_LITRE: f64 = 3.0;

const KG_PER_TON: f64 = 1000.0;

/// Annual CO2e per mode in whole tons.
///
/// Each figure is rounded on its own, so `total_tons` can differ from
/// `rail_tons + truck_tons` by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emissions {
    pub rail_tons: u64,
    pub truck_tons: u64,
    pub total_tons: u64,
}

impl Emissions {
    pub fn for_allocation(input: &ScenarioInput, allocation: &Allocation) -> Self {
        let rail = rail_emissions_tons(input, allocation);
        let truck = truck_emissions_tons(input, allocation);
        Self {
            rail_tons: whole_tons(rail),
            truck_tons: whole_tons(truck),
            total_tons: whole_tons(rail + truck),
        }
    }
}

/// Only diesel traction emits on the rail leg, which spans the terminal
/// distance. Electric rail runs on fossil-free power; `Truck` mode emits
/// nothing on rail even if trains are scheduled.
pub fn rail_emissions_tons(input: &ScenarioInput, allocation: &Allocation) -> f64 {
    match input.transport_mode {
        TransportMode::RailDiesel => {
            allocation.rail_capacity_tons
                * (input.distance_to_terminal / 10.0)
                * DIESEL_TRAIN_LITRES_PER_10KM
                * KG_CO2E_PER_LITRE
                / KG_PER_TON
        }
        TransportMode::RailElectric | TransportMode::Truck => 0.0,
    }
}

/// Road emissions cover both legs and do not depend on the transport mode.
pub fn truck_emissions_tons(input: &ScenarioInput, allocation: &Allocation) -> f64 {
    let road_km = input.distance_to_terminal + input.distance_to_customer;
    allocation.truck_volume_tons * road_km / 10.0 * TRUCK_LITRES_PER_10KM * KG_CO2E_PER_LITRE
        / KG_PER_TON
}
