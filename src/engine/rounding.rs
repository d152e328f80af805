//! Rounding and number formatting shared by the models.
//!
//! Halves round toward positive infinity, so `-2.5` becomes `-2` and
//! `2.5` becomes `3`.

pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

/// Round a non-negative tonnage to whole tons. Negative input clamps to zero.
pub fn whole_tons(value: f64) -> u64 {
    round_half_up(value.max(0.0)) as u64
}

/// Format with comma thousands separators, e.g. `525000` -> `525,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let head = bytes.len() % 3;

    let mut groups: Vec<&str> = Vec::with_capacity(bytes.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend((head..digits.len()).step_by(3).map(|i| &digits[i..i + 3]));
    groups.join(",")
}
