//! Text to temperature parsing.
//!
//! Accepts a number with an optional unit tag (`"21.5"`, `"21.5 °C"`,
//! `"70F"`, `"-40 fahrenheit"`). Untagged numbers take the caller's default
//! unit. The usual missing spellings (`""`, `"nan"`, `"NA"`, `"<NA>"`,
//! `"None"`, `"null"`) parse to the missing scalar.

use crate::error::{TemperatureError, TemperatureResult};
use crate::scalar::{NA, TemperatureScalar, TemperatureValue};
use crate::unit::TemperatureUnit;

const MISSING_SPELLINGS: [&str; 6] = ["", "nan", "na", "<na>", "none", "null"];

/// Parse one temperature, reading untagged numbers in `default_unit`.
pub fn parse_temperature(
    raw_text: &str,
    default_unit: TemperatureUnit,
) -> TemperatureResult<TemperatureScalar> {
    let trimmed = raw_text.trim();
    if is_missing_spelling(trimmed) {
        return Ok(NA);
    }
    // A missing marker may still carry a unit tag ("nan °C").
    if let Some((head, tail)) = trimmed.split_once(char::is_whitespace) {
        if is_missing_spelling(head) {
            tail.parse::<TemperatureUnit>()?;
            return Ok(NA);
        }
    }

    let (value, unit) = split_value_and_unit(trimmed)?;
    let unit = if unit.is_empty() {
        default_unit
    } else {
        unit.parse::<TemperatureUnit>()?
    };

    if !value.is_finite() {
        return Err(TemperatureError::Parse(format!(
            "Temperature must be finite, got '{}'",
            raw_text
        )));
    }

    Ok(TemperatureScalar::Value(TemperatureValue::new(value, unit)))
}

fn is_missing_spelling(text: &str) -> bool {
    MISSING_SPELLINGS.contains(&text.to_lowercase().as_str())
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "21.5 °C" -> (21.5, "°C")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> TemperatureResult<(f64, &str)> {
    let split_idx = input
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(input.len());

    let (num_part, unit_part) = input.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        TemperatureError::Parse(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim()))
}
