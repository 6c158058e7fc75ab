//! Host-facing implementation of the extension array protocol.

use std::any::Any;
use std::sync::Arc;

use su_frame::{Cell, ExtensionArray, ExtensionDtype, FrameError, FrameResult};

use crate::array::TemperatureArray;
use crate::dtype::{CELSIUS, CelsiusType};
use crate::scalar::TemperatureScalar;

impl ExtensionArray for TemperatureArray {
    fn dtype(&self) -> &'static dyn ExtensionDtype {
        &CELSIUS
    }

    fn len(&self) -> usize {
        TemperatureArray::len(self)
    }

    fn isna(&self) -> Vec<bool> {
        TemperatureArray::isna(self)
    }

    fn take(&self, indices: &[i64], allow_fill: bool) -> FrameResult<Box<dyn ExtensionArray>> {
        Ok(Box::new(TemperatureArray::take(self, indices, allow_fill, None)?))
    }

    fn slice(&self, start: usize, end: usize) -> FrameResult<Box<dyn ExtensionArray>> {
        Ok(Box::new(TemperatureArray::slice(self, start, end)?))
    }

    fn concat_same_type(
        &self,
        others: &[&dyn ExtensionArray],
    ) -> FrameResult<Box<dyn ExtensionArray>> {
        let mut parts: Vec<&TemperatureArray> = Vec::with_capacity(others.len() + 1);
        parts.push(self);
        for other in others {
            let array = other
                .as_any()
                .downcast_ref::<TemperatureArray>()
                .ok_or_else(|| FrameError::TypeMismatch {
                    expected: CelsiusType::NAME.to_string(),
                    found: other.dtype().name().to_string(),
                })?;
            parts.push(array);
        }
        Ok(Box::new(TemperatureArray::concat(&parts)))
    }

    fn scalar_at(&self, index: usize) -> FrameResult<Cell> {
        let index = i64::try_from(index).map_err(|_| FrameError::IndexOutOfBounds {
            index: i64::MAX,
            len: TemperatureArray::len(self),
        })?;
        match self.get(index)? {
            TemperatureScalar::Na => Ok(Cell::Na),
            TemperatureScalar::Value(v) => Ok(Cell::Ext(Arc::new(v))),
        }
    }

    fn format_at(&self, index: usize) -> FrameResult<String> {
        Ok(self.format_element(index)?)
    }

    fn clone_boxed(&self) -> Box<dyn ExtensionArray> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
