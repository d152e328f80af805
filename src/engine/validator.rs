use std::str::FromStr;

use validator::Validate;

use super::error::ValidationError;
use crate::domain::{RawNumber, RawScenarioInput, RawText, ScenarioInput, TransportMode};

/// Required fields in reporting order: (wire name, struct field name)
pub const REQUIRED_FIELDS: [(&str, &str); 6] = [
    ("name", "name"),
    ("tonnage", "tonnage"),
    ("transportMode", "transport_mode"),
    ("trainFrequency", "train_frequency"),
    ("distanceToTerminal", "distance_to_terminal"),
    ("distanceToCustomer", "distance_to_customer"),
];

/// Check a raw submission for completeness and normalize it.
///
/// A field is missing when it is absent, blank, or (for numbers) not a
/// finite value. Zero counts as present. Every present field is range
/// checked even when others are missing, so one pass reports all problems:
/// tonnage must be positive, frequency and distances non-negative, and all
/// four are capped (see `ScenarioInput`). An unrecognized or non-string
/// transport mode is invalid rather than missing.
pub fn validate_input(raw: &RawScenarioInput) -> Result<ScenarioInput, ValidationError> {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();

    let name = raw.name.as_ref().and_then(RawText::as_text).map(str::to_string);
    if name.is_none() {
        missing.push("name".to_string());
    }

    let tonnage = finite(&raw.tonnage, "tonnage", &mut missing);

    let transport_mode = match &raw.transport_mode {
        Some(RawText::Other(_)) => {
            invalid.push("transportMode".to_string());
            None
        }
        Some(text) => match text.as_text() {
            Some(mode) => {
                let parsed = TransportMode::from_str(mode).ok();
                if parsed.is_none() {
                    invalid.push("transportMode".to_string());
                }
                parsed
            }
            None => {
                missing.push("transportMode".to_string());
                None
            }
        },
        None => {
            missing.push("transportMode".to_string());
            None
        }
    };

    let train_frequency = finite(&raw.train_frequency, "trainFrequency", &mut missing);
    let distance_to_terminal = finite(&raw.distance_to_terminal, "distanceToTerminal", &mut missing);
    let distance_to_customer = finite(&raw.distance_to_customer, "distanceToCustomer", &mut missing);

    let unusable = !missing.is_empty() || !invalid.is_empty();

    // Gaps are filled with defaults only to run the range rules; results for
    // those fields are ignored below.
    let input = ScenarioInput {
        name: name.unwrap_or_default(),
        tonnage: tonnage.unwrap_or_default(),
        transport_mode: transport_mode.unwrap_or(TransportMode::Truck),
        train_frequency: train_frequency.unwrap_or_default(),
        distance_to_terminal: distance_to_terminal.unwrap_or_default(),
        distance_to_customer: distance_to_customer.unwrap_or_default(),
        description: raw
            .description
            .as_ref()
            .and_then(RawText::as_text)
            .map(str::to_string),
    };

    if let Err(errors) = input.validate() {
        let field_errors = errors.field_errors();
        for (wire, field) in REQUIRED_FIELDS {
            let flagged = field_errors.contains_key(field) || field_errors.contains_key(wire);
            let reported = missing.iter().chain(invalid.iter()).any(|f| f == wire);
            if flagged && !reported {
                invalid.push(wire.to_string());
            }
        }
    }

    if !unusable && invalid.is_empty() {
        return Ok(input);
    }

    invalid.sort_by_key(|field| {
        REQUIRED_FIELDS
            .iter()
            .position(|(wire, _)| wire == field)
            .unwrap_or(REQUIRED_FIELDS.len())
    });
    Err(ValidationError { missing, invalid })
}

fn finite(field: &Option<RawNumber>, wire: &str, missing: &mut Vec<String>) -> Option<f64> {
    let value = field.as_ref().and_then(RawNumber::to_finite);
    if value.is_none() {
        missing.push(wire.to_string());
    }
    value
}
