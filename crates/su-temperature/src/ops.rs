//! Element-wise comparison.
//!
//! Comparisons work on Celsius magnitudes regardless of the unit tags
//! involved. A missing element on either side yields `None` rather than a
//! boolean.

use std::cmp::Ordering;

use su_core::ensure_same_len;
use su_frame::ExtensionArray;

use crate::array::TemperatureArray;
use crate::dtype::CelsiusType;
use crate::error::{TemperatureError, TemperatureResult};
use crate::scalar::{Celsius, Fahrenheit, TemperatureScalar, TemperatureValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    fn apply(self, ord: Option<Ordering>) -> Option<bool> {
        let ord = ord?;
        Some(match self {
            Self::Eq => ord == Ordering::Equal,
            Self::Ne => ord != Ordering::Equal,
            Self::Lt => ord == Ordering::Less,
            Self::Le => ord != Ordering::Greater,
            Self::Gt => ord == Ordering::Greater,
            Self::Ge => ord != Ordering::Less,
        })
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// Broadcast against every element.
    Scalar(TemperatureScalar),
    /// Compared position by position; lengths must match.
    Array(&'a TemperatureArray),
}

impl From<TemperatureScalar> for Operand<'_> {
    fn from(s: TemperatureScalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<TemperatureValue> for Operand<'_> {
    fn from(v: TemperatureValue) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<Celsius> for Operand<'_> {
    fn from(c: Celsius) -> Self {
        Self::Scalar(TemperatureValue::from(c).into())
    }
}

impl From<Fahrenheit> for Operand<'_> {
    fn from(f: Fahrenheit) -> Self {
        Self::Scalar(TemperatureValue::from(f).into())
    }
}

impl<'a> From<&'a TemperatureArray> for Operand<'a> {
    fn from(a: &'a TemperatureArray) -> Self {
        Self::Array(a)
    }
}

fn cmp_celsius(a: Option<f64>, b: Option<f64>) -> Option<Ordering> {
    a?.partial_cmp(&b?)
}

impl TemperatureArray {
    /// Compare every element against `other`.
    pub fn compare<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        op: CompareOp,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        let lhs = self.buffer().iter();
        match other.into() {
            Operand::Scalar(s) => {
                let rhs = s.to_celsius();
                Ok(lhs.map(|a| op.apply(cmp_celsius(a, rhs))).collect())
            }
            Operand::Array(other) => {
                ensure_same_len(self.len(), other.len(), "compared arrays")?;
                Ok(lhs
                    .zip(other.buffer().iter())
                    .map(|(a, b)| op.apply(cmp_celsius(a, b)))
                    .collect())
            }
        }
    }

    pub fn eq_elementwise<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        self.compare(other, CompareOp::Eq)
    }

    pub fn ne_elementwise<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        self.compare(other, CompareOp::Ne)
    }

    pub fn lt_elementwise<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        self.compare(other, CompareOp::Lt)
    }

    pub fn le_elementwise<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        self.compare(other, CompareOp::Le)
    }

    pub fn gt_elementwise<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        self.compare(other, CompareOp::Gt)
    }

    pub fn ge_elementwise<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        self.compare(other, CompareOp::Ge)
    }

    /// Compare against a column known to the host only by its trait object.
    ///
    /// Anything other than a temperature column is a type mismatch.
    pub fn compare_dyn(
        &self,
        other: &dyn ExtensionArray,
        op: CompareOp,
    ) -> TemperatureResult<Vec<Option<bool>>> {
        match other.as_any().downcast_ref::<TemperatureArray>() {
            Some(other) => self.compare(other, op),
            None => Err(TemperatureError::TypeMismatch {
                expected: CelsiusType::NAME.to_string(),
                found: other.dtype().name().to_string(),
            }),
        }
    }
}
