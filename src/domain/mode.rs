use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// How the rail leg of a scenario is hauled.
///
/// `Truck` means road only for emissions purposes; see the allocation
/// module for how rail capacity is still priced under this mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransportMode {
    RailDiesel,
    RailElectric,
    Truck,
}

impl TransportMode {
    /// Human readable label as shown in the scenario builder
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::RailDiesel => "Rail Diesel",
            TransportMode::RailElectric => "Rail Electric",
            TransportMode::Truck => "Truck Only",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TransportMode::RailDiesel => "Diesel-powered trains",
            TransportMode::RailElectric => "Electric trains with fossil-free electricity",
            TransportMode::Truck => "Road transport only",
        }
    }

    pub fn is_rail(&self) -> bool {
        matches!(self, TransportMode::RailDiesel | TransportMode::RailElectric)
    }
}
