use serde::{Deserialize, Serialize};
use validator::Validate;

use super::TransportMode;

/// A latitude/longitude pair, serialized as `[lat, lon]` for map renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(p: GeoPoint) -> Self {
        [p.lat, p.lon]
    }
}

/// Normalized scenario parameters, produced by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    #[validate(length(min = 1))]
    pub name: String,

    /// Annual demand (tons/year)
    #[validate(range(exclusive_min = 0.0, max = 1.0e12))]
    pub tonnage: f64,

    pub transport_mode: TransportMode,

    /// Trains per week
    #[validate(range(min = 0.0, max = 10000.0))]
    pub train_frequency: f64,

    /// Origin to rail terminal (km)
    #[validate(range(min = 0.0, max = 40000.0))]
    pub distance_to_terminal: f64,

    /// Terminal to customer (km)
    #[validate(range(min = 0.0, max = 40000.0))]
    pub distance_to_customer: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A numeric field as submitted: JSON number, form text, or anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawNumber {
    /// The finite value this field carries, if any. Blank text is absent.
    pub fn to_finite(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
            RawNumber::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawNumber {
    fn from(n: f64) -> Self {
        RawNumber::Number(n)
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        RawNumber::Text(s.to_string())
    }
}

/// A text field as submitted. Non-string JSON is kept so the validator can
/// still name the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    Other(serde_json::Value),
}

impl RawText {
    /// Trimmed text, `None` when blank or not a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawText::Text(s) => Some(s.trim()).filter(|s| !s.is_empty()),
            RawText::Other(_) => None,
        }
    }
}

impl From<&str> for RawText {
    fn from(s: &str) -> Self {
        RawText::Text(s.to_string())
    }
}

impl From<String> for RawText {
    fn from(s: String) -> Self {
        RawText::Text(s)
    }
}

/// Scenario parameters exactly as received from a client, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScenarioInput {
    #[serde(default)]
    pub name: Option<RawText>,
    #[serde(default)]
    pub tonnage: Option<RawNumber>,
    #[serde(default)]
    pub transport_mode: Option<RawText>,
    #[serde(default)]
    pub train_frequency: Option<RawNumber>,
    #[serde(default)]
    pub distance_to_terminal: Option<RawNumber>,
    #[serde(default)]
    pub distance_to_customer: Option<RawNumber>,
    #[serde(default)]
    pub description: Option<RawText>,
}

impl From<&ScenarioInput> for RawScenarioInput {
    fn from(input: &ScenarioInput) -> Self {
        Self {
            name: Some(input.name.clone().into()),
            tonnage: Some(input.tonnage.into()),
            transport_mode: Some(input.transport_mode.to_string().into()),
            train_frequency: Some(input.train_frequency.into()),
            distance_to_terminal: Some(input.distance_to_terminal.into()),
            distance_to_customer: Some(input.distance_to_customer.into()),
            description: input.description.clone().map(RawText::from),
        }
    }
}

/// Derived metrics for one scenario. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub name: String,

    /// Tons/year movable by rail at the configured train frequency
    pub rail_capacity_tons: u64,
    /// Tons/year left over for road haulage
    pub truck_volume_tons: u64,

    #[serde(rename = "totalCostMSEK")]
    pub total_cost_msek: f64,

    pub co2_rail_tons: u64,
    pub co2_truck_tons: u64,
    pub co2_total_tons: u64,

    /// Origin, optional terminal, destination
    pub route: Vec<GeoPoint>,
    pub notes: Vec<String>,

    pub transport_mode: TransportMode,
    pub train_frequency: f64,
    pub distance_to_terminal: f64,
    pub distance_to_customer: f64,
    pub tonnage: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
