//! Single element values handed out by the host.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::extension::{DEFAULT_NA_REPR, ExtensionScalar};

/// A single element read out of any column.
#[derive(Debug, Clone)]
pub enum Cell {
    Na,
    Float(f64),
    Bool(bool),
    Ext(Arc<dyn ExtensionScalar>),
}

impl Cell {
    pub fn is_na(&self) -> bool {
        matches!(self, Self::Na)
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Downcast a boxed extension scalar.
    pub fn downcast_ext<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Ext(scalar) => scalar.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Structural equality: two missing cells compare equal, as the host's
/// assertion helpers require.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Na, Self::Na) => true,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Ext(a), Self::Ext(b)) => a.eq_scalar(b.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Na => write!(f, "{}", DEFAULT_NA_REPR),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Ext(s) => write!(f, "{}", s),
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Self::Float(v),
            None => Self::Na,
        }
    }
}
