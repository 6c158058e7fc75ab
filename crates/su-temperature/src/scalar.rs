//! Scalar temperatures and the missing scalar.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use su_core::units::{Temperature, as_degc, as_degf, degc, degf};
use su_frame::ExtensionScalar;
use su_frame::extension::DEFAULT_NA_REPR;

use crate::unit::TemperatureUnit;

/// A magnitude tagged with its unit. Immutable.
///
/// Equality and ordering compare Celsius-equivalent magnitudes, so
/// `212 °F == 100 °C`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemperatureValue {
    magnitude: f64,
    unit: TemperatureUnit,
}

impl TemperatureValue {
    pub const fn new(magnitude: f64, unit: TemperatureUnit) -> Self {
        Self { magnitude, unit }
    }

    pub const fn celsius(magnitude: f64) -> Self {
        Self::new(magnitude, TemperatureUnit::Celsius)
    }

    pub const fn fahrenheit(magnitude: f64) -> Self {
        Self::new(magnitude, TemperatureUnit::Fahrenheit)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn to_celsius(&self) -> f64 {
        self.unit.to_celsius(self.magnitude)
    }

    pub fn to_fahrenheit(&self) -> f64 {
        TemperatureUnit::Fahrenheit.from_celsius(self.to_celsius())
    }

    /// Same temperature expressed in `unit`.
    pub fn to_unit(&self, unit: TemperatureUnit) -> Self {
        if unit == self.unit {
            return *self;
        }
        Self::new(unit.from_celsius(self.to_celsius()), unit)
    }

    /// As a `uom` thermodynamic temperature.
    pub fn to_thermodynamic(&self) -> Temperature {
        match self.unit {
            TemperatureUnit::Celsius => degc(self.magnitude),
            TemperatureUnit::Fahrenheit => degf(self.magnitude),
        }
    }

    pub fn from_thermodynamic(t: Temperature, unit: TemperatureUnit) -> Self {
        let magnitude = match unit {
            TemperatureUnit::Celsius => as_degc(t),
            TemperatureUnit::Fahrenheit => as_degf(t),
        };
        Self::new(magnitude, unit)
    }
}

impl PartialEq for TemperatureValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_celsius() == other.to_celsius()
    }
}

impl PartialOrd for TemperatureValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_celsius().partial_cmp(&other.to_celsius())
    }
}

impl fmt::Display for TemperatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.magnitude, self.unit.symbol()),
            None => write!(f, "{} {}", self.magnitude, self.unit.symbol()),
        }
    }
}

impl ExtensionScalar for TemperatureValue {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_scalar(&self, other: &dyn ExtensionScalar) -> bool {
        other
            .as_any()
            .downcast_ref::<TemperatureValue>()
            .is_some_and(|o| o == self)
    }
}

/// Shorthand for a Celsius temperature.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

/// Shorthand for a Fahrenheit temperature.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fahrenheit(pub f64);

impl From<Celsius> for TemperatureValue {
    fn from(c: Celsius) -> Self {
        Self::celsius(c.0)
    }
}

impl From<Fahrenheit> for TemperatureValue {
    fn from(f: Fahrenheit) -> Self {
        Self::fahrenheit(f.0)
    }
}

/// Element of a temperature column: a value or missing.
///
/// `Na` never compares equal to anything, itself included; use
/// [`is_missing`](Self::is_missing) to test for it.
#[derive(Debug, Clone, Copy)]
pub enum TemperatureScalar {
    Na,
    Value(TemperatureValue),
}

/// The missing temperature.
pub const NA: TemperatureScalar = TemperatureScalar::Na;

impl TemperatureScalar {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Na)
    }

    pub fn value(&self) -> Option<TemperatureValue> {
        match self {
            Self::Na => None,
            Self::Value(v) => Some(*v),
        }
    }

    pub fn to_celsius(&self) -> Option<f64> {
        self.value().map(|v| v.to_celsius())
    }

    pub fn to_fahrenheit(&self) -> Option<f64> {
        self.value().map(|v| v.to_fahrenheit())
    }
}

impl PartialEq for TemperatureScalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for TemperatureScalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for TemperatureScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Na => write!(f, "{}", DEFAULT_NA_REPR),
            Self::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<TemperatureValue> for TemperatureScalar {
    fn from(v: TemperatureValue) -> Self {
        Self::Value(v)
    }
}

impl From<Option<TemperatureValue>> for TemperatureScalar {
    fn from(v: Option<TemperatureValue>) -> Self {
        v.map_or(Self::Na, Self::Value)
    }
}

impl From<Celsius> for TemperatureScalar {
    fn from(c: Celsius) -> Self {
        Self::Value(c.into())
    }
}

impl From<Fahrenheit> for TemperatureScalar {
    fn from(f: Fahrenheit) -> Self {
        Self::Value(f.into())
    }
}
