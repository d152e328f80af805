use itertools::Itertools;
use thiserror::Error;

/// A scenario input that cannot be calculated.
///
/// Carries every offending field at once so a client can report all of
/// them in one round trip. Field names use the wire (camelCase) spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.missing, .invalid))]
pub struct ValidationError {
    /// Absent, empty, or not a finite number
    pub missing: Vec<String>,
    /// Present but outside the allowed domain
    pub invalid: Vec<String>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    /// All offending fields, missing first.
    pub fn fields(&self) -> Vec<String> {
        self.missing.iter().chain(self.invalid.iter()).cloned().collect()
    }
}

fn describe(missing: &[String], invalid: &[String]) -> String {
    match (missing.is_empty(), invalid.is_empty()) {
        (false, true) => format!("Missing required fields: {}", missing.iter().join(", ")),
        (true, false) => format!("Invalid fields: {}", invalid.iter().join(", ")),
        _ => format!(
            "Missing required fields: {}; invalid fields: {}",
            missing.iter().join(", "),
            invalid.iter().join(", ")
        ),
    }
}

/// A relative change was requested against a zero baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("baseline {metric} is zero, relative change is undefined")]
pub struct ComputationDegenerate {
    pub metric: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_only_message() {
        let err = ValidationError {
            missing: vec!["name".into(), "tonnage".into()],
            invalid: vec![],
        };
        assert_eq!(err.to_string(), "Missing required fields: name, tonnage");
    }

    #[test]
    fn test_combined_message_and_field_order() {
        let err = ValidationError {
            missing: vec!["transportMode".into()],
            invalid: vec!["tonnage".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required fields: transportMode; invalid fields: tonnage"
        );
        assert_eq!(err.fields(), vec!["transportMode", "tonnage"]);
    }

    #[test]
    fn test_degenerate_display() {
        let err = ComputationDegenerate { metric: "co2" };
        assert_eq!(err.to_string(), "baseline co2 is zero, relative change is undefined");
    }
}
