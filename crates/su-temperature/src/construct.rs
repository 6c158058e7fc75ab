//! Input shapes accepted when building temperature columns.

use tracing::trace;

use crate::array::TemperatureArray;
use crate::error::TemperatureResult;
use crate::parser::parse_temperature;
use crate::scalar::{TemperatureScalar, TemperatureValue};
use crate::storage::MaskedBuffer;
use crate::unit::TemperatureUnit;

/// A source sequence for a temperature column.
///
/// Numeric and text variants are read in the unit given at construction;
/// scalars carry their own unit; arrays are copied as-is.
#[derive(Debug, Clone)]
pub enum TemperatureInput {
    /// Magnitudes, `NaN` marking missing entries.
    Floats(Vec<f64>),
    /// Magnitudes, `None` marking missing entries.
    Options(Vec<Option<f64>>),
    Ints(Vec<i64>),
    Scalars(Vec<TemperatureScalar>),
    /// Text parsed with [`parse_temperature`].
    Text(Vec<String>),
    Array(TemperatureArray),
    /// All-missing column of the given length.
    Missing(usize),
}

impl TemperatureInput {
    /// Normalize into canonical storage, reading bare magnitudes in `unit`.
    pub(crate) fn into_buffer(self, unit: TemperatureUnit) -> TemperatureResult<MaskedBuffer> {
        trace!(unit = %unit, "building temperature buffer");
        match self {
            Self::Floats(v) => MaskedBuffer::from_floats(&v, unit),
            Self::Options(v) => MaskedBuffer::from_options(&v, unit),
            Self::Ints(v) => {
                let floats: Vec<f64> = v.into_iter().map(|i| i as f64).collect();
                MaskedBuffer::from_floats(&floats, unit)
            }
            Self::Scalars(v) => MaskedBuffer::from_scalars(&v),
            Self::Text(v) => {
                let scalars = v
                    .iter()
                    .map(|t| parse_temperature(t, unit))
                    .collect::<TemperatureResult<Vec<_>>>()?;
                MaskedBuffer::from_scalars(&scalars)
            }
            Self::Array(a) => Ok(a.into_buffer()),
            Self::Missing(len) => Ok(MaskedBuffer::missing(len)),
        }
    }
}

/// Build a column from `input`, reading bare magnitudes and untagged text in
/// `unit` and tagging the result with `unit` for display.
pub fn to_temperature(
    input: impl Into<TemperatureInput>,
    unit: TemperatureUnit,
) -> TemperatureResult<TemperatureArray> {
    let buffer = input.into().into_buffer(unit)?;
    Ok(TemperatureArray::from_buffer(buffer).with_unit(unit))
}

impl From<Vec<f64>> for TemperatureInput {
    fn from(v: Vec<f64>) -> Self {
        Self::Floats(v)
    }
}

impl From<&[f64]> for TemperatureInput {
    fn from(v: &[f64]) -> Self {
        Self::Floats(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for TemperatureInput {
    fn from(v: [f64; N]) -> Self {
        Self::Floats(v.to_vec())
    }
}

impl From<Vec<Option<f64>>> for TemperatureInput {
    fn from(v: Vec<Option<f64>>) -> Self {
        Self::Options(v)
    }
}

impl From<Vec<i64>> for TemperatureInput {
    fn from(v: Vec<i64>) -> Self {
        Self::Ints(v)
    }
}

impl<const N: usize> From<[i64; N]> for TemperatureInput {
    fn from(v: [i64; N]) -> Self {
        Self::Ints(v.to_vec())
    }
}

impl From<Vec<TemperatureScalar>> for TemperatureInput {
    fn from(v: Vec<TemperatureScalar>) -> Self {
        Self::Scalars(v)
    }
}

impl<const N: usize> From<[TemperatureScalar; N]> for TemperatureInput {
    fn from(v: [TemperatureScalar; N]) -> Self {
        Self::Scalars(v.to_vec())
    }
}

impl From<Vec<TemperatureValue>> for TemperatureInput {
    fn from(v: Vec<TemperatureValue>) -> Self {
        Self::Scalars(v.into_iter().map(TemperatureScalar::Value).collect())
    }
}

impl From<Vec<&str>> for TemperatureInput {
    fn from(v: Vec<&str>) -> Self {
        Self::Text(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for TemperatureInput {
    fn from(v: Vec<String>) -> Self {
        Self::Text(v)
    }
}

impl From<TemperatureArray> for TemperatureInput {
    fn from(a: TemperatureArray) -> Self {
        Self::Array(a)
    }
}

impl From<&TemperatureArray> for TemperatureInput {
    fn from(a: &TemperatureArray) -> Self {
        Self::Array(a.clone())
    }
}
