//! The two supported temperature units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use su_core::constants::FAHRENHEIT_OFFSET;

use crate::error::TemperatureError;

/// Unit a temperature magnitude is expressed in.
///
/// Celsius is canonical: storage always holds Celsius magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Convert a magnitude in this unit to Celsius.
    #[inline]
    pub fn to_celsius(self, magnitude: f64) -> f64 {
        match self {
            Self::Celsius => magnitude,
            Self::Fahrenheit => (magnitude - FAHRENHEIT_OFFSET) / 9.0 * 5.0,
        }
    }

    /// Convert a Celsius magnitude to this unit.
    #[inline]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius / 5.0 * 9.0 + FAHRENHEIT_OFFSET,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "Celsius"),
            Self::Fahrenheit => write!(f, "Fahrenheit"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = TemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "℃" | "degc" | "celsius" => Ok(Self::Celsius),
            "f" | "°f" | "℉" | "degf" | "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(TemperatureError::Parse(format!(
                "Unknown temperature unit '{}'",
                other
            ))),
        }
    }
}
