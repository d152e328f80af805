use serde::Serialize;

use super::rounding::{round_to, whole_tons};
use crate::domain::{ScenarioInput, TransportMode};

/// Payload of one train (tons)
pub const TONS_PER_TRAIN: f64 = 1500.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Rail haulage rates (currency units per ton)
pub const RAIL_RATE_ELECTRIC: f64 = 115.0;
pub const RAIL_RATE_DIESEL: f64 = 120.0;

/// Road haulage rate (currency units per ton-km)
pub const TRUCK_RATE_PER_TON_KM: f64 = 8.0;

const UNITS_PER_MSEK: f64 = 1_000_000.0;

/// Split of annual tonnage between rail and road, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allocation {
    /// Rail capacity ceiling; may exceed demand
    pub rail_capacity_tons: f64,
    /// Demand not covered by rail
    pub truck_volume_tons: f64,
}

impl Allocation {
    /// Rail takes `frequency × 1500 × 52` tons/year regardless of demand;
    /// trucks carry whatever is left, never less than zero.
    pub fn for_input(input: &ScenarioInput) -> Self {
        let rail_capacity_tons = input.train_frequency * TONS_PER_TRAIN * WEEKS_PER_YEAR;
        let truck_volume_tons = (input.tonnage - rail_capacity_tons).max(0.0);
        Self {
            rail_capacity_tons,
            truck_volume_tons,
        }
    }

    pub fn rail_whole_tons(&self) -> u64 {
        whole_tons(self.rail_capacity_tons)
    }

    pub fn truck_whole_tons(&self) -> u64 {
        whole_tons(self.truck_volume_tons)
    }
}

/// Per-ton rail rate. Everything that isn't electric is billed at the diesel
/// rate, including `Truck` mode with a nonzero train frequency.
pub fn rail_rate_per_ton(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::RailElectric => RAIL_RATE_ELECTRIC,
        TransportMode::RailDiesel | TransportMode::Truck => RAIL_RATE_DIESEL,
    }
}

/// Annual cost in MSEK, rounded to two decimals.
pub fn total_cost_msek(input: &ScenarioInput, allocation: &Allocation) -> f64 {
    let rail_cost = allocation.rail_capacity_tons * rail_rate_per_ton(input.transport_mode);
    let road_km = input.distance_to_terminal + input.distance_to_customer;
    let truck_cost = allocation.truck_volume_tons * TRUCK_RATE_PER_TON_KM * road_km / 1000.0;

    round_to((rail_cost + truck_cost) / UNITS_PER_MSEK, 2)
}
