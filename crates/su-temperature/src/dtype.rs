//! The dtype descriptor for temperature columns.

use std::fmt;

use su_frame::registry;
use su_frame::{ExtensionArray, ExtensionDtype, FrameResult};

use crate::array::TemperatureArray;
use crate::construct::TemperatureInput;
use crate::error::TemperatureResult;
use crate::scalar::{NA, TemperatureScalar};
use crate::unit::TemperatureUnit;

/// Descriptor for "temperature column stored in Celsius".
///
/// Stateless: every instance is equal to every other, so the host sees
/// repeated temperature columns as one homogeneous type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CelsiusType;

/// The process-wide descriptor instance.
pub static CELSIUS: CelsiusType = CelsiusType;

impl CelsiusType {
    pub const NAME: &'static str = "celsius";

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Canonical storage unit.
    pub fn unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    pub fn na_value(&self) -> TemperatureScalar {
        NA
    }

    /// Entry point the host uses to build a column of this type.
    pub fn construct_array_from_sequence(
        &self,
        seq: impl Into<TemperatureInput>,
    ) -> TemperatureResult<TemperatureArray> {
        TemperatureArray::new(seq)
    }

    /// Make the type resolvable by name in the host.
    pub fn register() {
        registry::register(&CELSIUS);
    }
}

impl fmt::Display for CelsiusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::NAME)
    }
}

impl ExtensionDtype for CelsiusType {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn construct_empty(&self, len: usize) -> Box<dyn ExtensionArray> {
        Box::new(TemperatureArray::missing(len))
    }

    fn construct_from_floats(&self, values: &[Option<f64>]) -> FrameResult<Box<dyn ExtensionArray>> {
        let array = TemperatureArray::new(values.to_vec())?;
        Ok(Box::new(array))
    }
}
