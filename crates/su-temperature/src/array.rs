//! The temperature extension array.

use std::fmt;
use std::ops::Range;

use tracing::debug;

use su_core::resolve_position;
use su_core::units::{Temperature, degc};

use crate::construct::TemperatureInput;
use crate::dtype::{CELSIUS, CelsiusType};
use crate::error::TemperatureResult;
use crate::options::DisplayOptions;
use crate::scalar::{NA, TemperatureScalar, TemperatureValue};
use crate::storage::MaskedBuffer;
use crate::unit::TemperatureUnit;

/// A column of temperatures with missing-value support.
///
/// Owns exactly one [`MaskedBuffer`] of Celsius magnitudes. The `unit` tag
/// only affects element access and display; it never changes storage.
///
/// Every operation that selects, reorders or fills returns a new array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemperatureArray {
    buffer: MaskedBuffer,
    unit: TemperatureUnit,
}

/// Positional selector for [`TemperatureArray::index`].
#[derive(Debug, Clone, PartialEq)]
pub enum Indexer {
    /// One position; negatives count from the end.
    Position(i64),
    /// Contiguous range, copied.
    Range(Range<usize>),
    /// Gathered positions; order kept, repeats allowed, negatives from the end.
    Positions(Vec<i64>),
}

/// Result of [`TemperatureArray::index`].
#[derive(Debug, Clone)]
pub enum Selection {
    Scalar(TemperatureScalar),
    Array(TemperatureArray),
}

impl TemperatureArray {
    /// Build a Celsius column from any supported input.
    ///
    /// Bare numbers are Celsius magnitudes; `NaN`/`None`/NA become missing.
    pub fn new(input: impl Into<TemperatureInput>) -> TemperatureResult<Self> {
        let buffer = input.into().into_buffer(TemperatureUnit::Celsius)?;
        Ok(Self::from_buffer(buffer))
    }

    pub fn from_buffer(buffer: MaskedBuffer) -> Self {
        Self {
            buffer,
            unit: TemperatureUnit::Celsius,
        }
    }

    /// `len` missing elements.
    pub fn missing(len: usize) -> Self {
        Self::from_buffer(MaskedBuffer::missing(len))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Same values, read and displayed in `unit`.
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn dtype(&self) -> &'static CelsiusType {
        &CELSIUS
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &MaskedBuffer {
        &self.buffer
    }

    pub(crate) fn into_buffer(self) -> MaskedBuffer {
        self.buffer
    }

    fn with_buffer(&self, buffer: MaskedBuffer) -> Self {
        Self {
            buffer,
            unit: self.unit,
        }
    }

    fn scalar_from_celsius(&self, celsius: Option<f64>) -> TemperatureScalar {
        match celsius {
            Some(c) => TemperatureValue::celsius(c).to_unit(self.unit).into(),
            None => NA,
        }
    }

    /// Element at `index`; negatives count from the end.
    pub fn get(&self, index: i64) -> TemperatureResult<TemperatureScalar> {
        let i = resolve_position(index, self.len(), "temperature array")?;
        Ok(self.scalar_from_celsius(self.buffer.get(i)?))
    }

    pub fn index(&self, indexer: Indexer) -> TemperatureResult<Selection> {
        match indexer {
            Indexer::Position(i) => self.get(i).map(Selection::Scalar),
            Indexer::Range(r) => self.slice(r.start, r.end).map(Selection::Array),
            Indexer::Positions(p) => self.take(&p, false, None).map(Selection::Array),
        }
    }

    /// Copy of `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> TemperatureResult<Self> {
        Ok(self.with_buffer(self.buffer.slice(start, end)?))
    }

    /// Gather by position.
    ///
    /// Without `allow_fill`, negative indices count from the end and
    /// `fill_value` is ignored. With it, `-1` installs `fill_value` (missing
    /// when `None` or NA) and other negatives are an error.
    pub fn take(
        &self,
        indices: &[i64],
        allow_fill: bool,
        fill_value: Option<TemperatureScalar>,
    ) -> TemperatureResult<Self> {
        let buffer = if allow_fill {
            let fill = fill_value.and_then(|s| s.to_celsius());
            self.buffer.take(indices, fill)?
        } else {
            let len = self.len();
            let resolved = indices
                .iter()
                .map(|&i| resolve_position(i, len, "take").map(|p| p as i64))
                .collect::<Result<Vec<_>, _>>()?;
            self.buffer.take(&resolved, None)?
        };
        Ok(self.with_buffer(buffer))
    }

    /// One flag per element, `true` where missing.
    pub fn isna(&self) -> Vec<bool> {
        self.buffer.mask().to_vec()
    }

    /// Number of non-missing elements.
    pub fn count(&self) -> usize {
        self.len() - self.buffer.missing_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = TemperatureScalar> + '_ {
        self.buffer.iter().map(|c| self.scalar_from_celsius(c))
    }

    /// Arrays end to end. The result takes the unit tag of the first array.
    pub fn concat(arrays: &[&TemperatureArray]) -> Self {
        let buffers: Vec<&MaskedBuffer> = arrays.iter().map(|a| &a.buffer).collect();
        let unit = arrays.first().map(|a| a.unit).unwrap_or_default();
        let buffer = MaskedBuffer::concat(&buffers);
        debug!(parts = arrays.len(), len = buffer.len(), "concat temperature arrays");
        Self { buffer, unit }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Missing elements replaced by `value`.
    pub fn fillna(&self, value: impl Into<TemperatureValue>) -> TemperatureResult<Self> {
        Ok(self.with_buffer(self.buffer.fill_missing(value.into().to_celsius())?))
    }

    /// Missing elements take the last valid value before them.
    pub fn ffill(&self) -> Self {
        let mut last: Option<f64> = None;
        let values: Vec<Option<f64>> = self
            .buffer
            .iter()
            .map(|v| {
                if v.is_some() {
                    last = v;
                }
                last
            })
            .collect();
        self.with_buffer(MaskedBuffer::from_checked(&values))
    }

    /// Missing elements take the next valid value after them.
    pub fn bfill(&self) -> Self {
        let mut next: Option<f64> = None;
        let mut values: Vec<Option<f64>> = self
            .buffer
            .iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|v| {
                if v.is_some() {
                    next = v;
                }
                next
            })
            .collect();
        values.reverse();
        self.with_buffer(MaskedBuffer::from_checked(&values))
    }

    /// Only the non-missing elements, in order.
    pub fn dropna(&self) -> Self {
        let values: Vec<Option<f64>> = self.buffer.iter().filter(Option::is_some).collect();
        self.with_buffer(MaskedBuffer::from_checked(&values))
    }

    pub fn to_celsius_values(&self) -> Vec<Option<f64>> {
        self.buffer.iter().collect()
    }

    pub fn to_fahrenheit_values(&self) -> Vec<Option<f64>> {
        self.buffer
            .iter()
            .map(|c| c.map(|c| TemperatureUnit::Fahrenheit.from_celsius(c)))
            .collect()
    }

    /// Element as a `uom` quantity, `None` where missing.
    pub fn thermodynamic(&self, index: usize) -> TemperatureResult<Option<Temperature>> {
        Ok(self.buffer.get(index)?.map(degc))
    }

    /// Display string for one element under the default options.
    pub fn format_element(&self, index: usize) -> TemperatureResult<String> {
        self.format_element_with(index, &DisplayOptions::default())
    }

    pub fn format_element_with(
        &self,
        index: usize,
        options: &DisplayOptions,
    ) -> TemperatureResult<String> {
        let celsius = self.buffer.get(index)?;
        let unit = options.unit.unwrap_or(self.unit);
        Ok(options.format(celsius.map(|c| TemperatureValue::celsius(c).to_unit(unit))))
    }

    /// Display strings for every element.
    pub fn format_with(&self, options: &DisplayOptions) -> Vec<String> {
        let unit = options.unit.unwrap_or(self.unit);
        self.buffer
            .iter()
            .map(|c| options.format(c.map(|c| TemperatureValue::celsius(c).to_unit(unit))))
            .collect()
    }
}

impl fmt::Display for TemperatureArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<TemperatureArray>")?;
        let items = self.format_with(&DisplayOptions::default());
        writeln!(f, "[{}]", items.join(", "))?;
        write!(f, "Length: {}, dtype: {}", self.len(), CELSIUS)
    }
}
