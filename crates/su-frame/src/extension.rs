//! The extension protocol.
//!
//! A column type becomes first-class in the host by implementing
//! [`ExtensionDtype`] for its descriptor and [`ExtensionArray`] for its
//! storage. The host only ever talks to these traits.

use std::any::Any;
use std::fmt;

use crate::cell::Cell;
use crate::error::FrameResult;

/// Placeholder the host prints for a missing element.
pub const DEFAULT_NA_REPR: &str = "NaN";

/// Descriptor consulted by the host for construction and display.
pub trait ExtensionDtype: fmt::Debug + Send + Sync {
    /// Name used for type dispatch and display.
    fn name(&self) -> &'static str;

    /// Placeholder printed for missing elements.
    fn na_repr(&self) -> &str {
        DEFAULT_NA_REPR
    }

    /// An all-missing array of `len` elements (used when alignment creates rows).
    fn construct_empty(&self, len: usize) -> Box<dyn ExtensionArray>;

    /// Build an array from host floats, `None` being missing.
    fn construct_from_floats(&self, values: &[Option<f64>]) -> FrameResult<Box<dyn ExtensionArray>>;

    /// Dtypes are identified by name.
    fn is_same(&self, other: &dyn ExtensionDtype) -> bool {
        self.name() == other.name()
    }
}

/// Column storage for an extension type.
///
/// Every method that looks like it changes the array returns a new one.
pub trait ExtensionArray: fmt::Debug + Send + Sync {
    fn dtype(&self) -> &'static dyn ExtensionDtype;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One flag per element, `true` where missing.
    fn isna(&self) -> Vec<bool>;

    /// Gather by position.
    ///
    /// With `allow_fill`, `-1` yields a missing element and any other negative
    /// index is an error. Without it, negatives count from the end.
    fn take(&self, indices: &[i64], allow_fill: bool) -> FrameResult<Box<dyn ExtensionArray>>;

    /// Copy of the contiguous range `start..end`.
    fn slice(&self, start: usize, end: usize) -> FrameResult<Box<dyn ExtensionArray>>;

    /// `self` followed by each of `others`, which must share this dtype.
    fn concat_same_type(
        &self,
        others: &[&dyn ExtensionArray],
    ) -> FrameResult<Box<dyn ExtensionArray>>;

    /// Boxed element at `index`.
    fn scalar_at(&self, index: usize) -> FrameResult<Cell>;

    /// Display string for the element at `index`.
    fn format_at(&self, index: usize) -> FrameResult<String>;

    fn clone_boxed(&self) -> Box<dyn ExtensionArray>;

    fn as_any(&self) -> &dyn Any;
}

/// Element value boxed by an extension type.
pub trait ExtensionScalar: fmt::Debug + fmt::Display + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Value equality across the boxed boundary.
    fn eq_scalar(&self, other: &dyn ExtensionScalar) -> bool;
}

impl Clone for Box<dyn ExtensionArray> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
