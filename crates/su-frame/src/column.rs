//! Column storage as seen by the host.

use tracing::trace;

use su_core::resolve_position;

use crate::cell::Cell;
use crate::error::{FrameError, FrameResult};
use crate::extension::{DEFAULT_NA_REPR, ExtensionArray};
use crate::registry;

/// Either a native column or an extension array.
#[derive(Debug, Clone)]
pub enum Column {
    /// Native float column; `None` is missing.
    Float64(Vec<Option<f64>>),
    /// Native boolean column; cannot hold missing values.
    Bool(Vec<bool>),
    Extension(Box<dyn ExtensionArray>),
}

impl Column {
    /// Native float column from raw floats, `NaN` being missing.
    pub fn from_floats(values: &[f64]) -> Self {
        Self::Float64(
            values
                .iter()
                .map(|v| if v.is_nan() { None } else { Some(*v) })
                .collect(),
        )
    }

    /// Build a column of a registered extension dtype.
    pub fn from_registered(dtype: &str, values: &[Option<f64>]) -> FrameResult<Self> {
        let dtype =
            registry::lookup(dtype).ok_or_else(|| FrameError::UnknownDtype(dtype.to_string()))?;
        Ok(Self::Extension(dtype.construct_from_floats(values)?))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Float64(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Extension(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype_name(&self) -> &'static str {
        match self {
            Self::Float64(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Extension(a) => a.dtype().name(),
        }
    }

    pub fn as_bools(&self) -> Option<&[bool]> {
        match self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[Option<f64>]> {
        match self {
            Self::Float64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> Option<&dyn ExtensionArray> {
        match self {
            Self::Extension(a) => Some(a.as_ref()),
            _ => None,
        }
    }

    pub fn isna(&self) -> Vec<bool> {
        match self {
            Self::Float64(v) => v.iter().map(Option::is_none).collect(),
            Self::Bool(v) => vec![false; v.len()],
            Self::Extension(a) => a.isna(),
        }
    }

    /// Number of non-missing elements.
    pub fn count(&self) -> usize {
        self.isna().iter().filter(|m| !**m).count()
    }

    pub fn cell(&self, index: usize) -> FrameResult<Cell> {
        let len = self.len();
        if index >= len {
            return Err(FrameError::IndexOutOfBounds {
                index: index as i64,
                len,
            });
        }
        match self {
            Self::Float64(v) => Ok(Cell::from(v[index])),
            Self::Bool(v) => Ok(Cell::Bool(v[index])),
            Self::Extension(a) => a.scalar_at(index),
        }
    }

    /// Display string for one element. Missing extension elements render
    /// with their dtype's `na_repr`.
    pub fn format_at(&self, index: usize) -> FrameResult<String> {
        match self {
            Self::Extension(a) => match a.scalar_at(index)? {
                Cell::Na => Ok(a.dtype().na_repr().to_string()),
                _ => a.format_at(index),
            },
            Self::Float64(_) => match self.cell(index)? {
                Cell::Na => Ok(DEFAULT_NA_REPR.to_string()),
                cell => Ok(cell.to_string()),
            },
            Self::Bool(_) => Ok(self.cell(index)?.to_string()),
        }
    }

    /// Gather rows by position.
    ///
    /// See [`ExtensionArray::take`] for the meaning of `allow_fill`. A boolean
    /// column asked to materialize missing rows is promoted to float64.
    pub fn take(&self, indices: &[i64], allow_fill: bool) -> FrameResult<Column> {
        trace!(dtype = self.dtype_name(), n = indices.len(), allow_fill, "column take");
        let len = self.len();
        match self {
            Self::Extension(a) => Ok(Self::Extension(a.take(indices, allow_fill)?)),
            Self::Float64(v) => {
                let out = gather(indices, len, allow_fill, |i| v[i])?;
                Ok(Self::Float64(out.into_iter().map(Option::flatten).collect()))
            }
            Self::Bool(v) => {
                let out = gather(indices, len, allow_fill, |i| v[i])?;
                if out.iter().all(Option::is_some) {
                    Ok(Self::Bool(out.into_iter().flatten().collect()))
                } else {
                    Ok(Self::Float64(
                        out.into_iter()
                            .map(|b| b.map(|b| if b { 1.0 } else { 0.0 }))
                            .collect(),
                    ))
                }
            }
        }
    }

    /// Copy of rows `start..end`, clamped to the column length.
    pub fn slice(&self, start: usize, end: usize) -> FrameResult<Column> {
        let end = end.min(self.len());
        let start = start.min(end);
        match self {
            Self::Float64(v) => Ok(Self::Float64(v[start..end].to_vec())),
            Self::Bool(v) => Ok(Self::Bool(v[start..end].to_vec())),
            Self::Extension(a) => Ok(Self::Extension(a.slice(start, end)?)),
        }
    }

    /// Same values in a type able to hold missing elements.
    pub fn promote_for_missing(&self) -> Column {
        match self {
            Self::Bool(v) => Self::Float64(
                v.iter()
                    .map(|b| Some(if *b { 1.0 } else { 0.0 }))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// An all-missing column of the same type as `self`.
    pub fn missing_like(&self, len: usize) -> Column {
        match self {
            Self::Float64(_) | Self::Bool(_) => Self::Float64(vec![None; len]),
            Self::Extension(a) => Self::Extension(a.dtype().construct_empty(len)),
        }
    }

    /// Concatenate columns of one type, in order.
    pub fn concat(columns: &[&Column]) -> FrameResult<Column> {
        let Some((first, rest)) = columns.split_first() else {
            return Ok(Self::Float64(Vec::new()));
        };

        match first {
            Self::Float64(head) => {
                let mut out = head.clone();
                for col in rest {
                    match col {
                        Self::Float64(v) => out.extend_from_slice(v),
                        other => return Err(mismatch(first, other)),
                    }
                }
                Ok(Self::Float64(out))
            }
            Self::Bool(head) => {
                let mut out = head.clone();
                for col in rest {
                    match col {
                        Self::Bool(v) => out.extend_from_slice(v),
                        other => return Err(mismatch(first, other)),
                    }
                }
                Ok(Self::Bool(out))
            }
            Self::Extension(head) => {
                let mut others: Vec<&dyn ExtensionArray> = Vec::with_capacity(rest.len());
                for col in rest {
                    match col {
                        Self::Extension(a) if a.dtype().is_same(head.dtype()) => {
                            others.push(a.as_ref())
                        }
                        other => return Err(mismatch(first, other)),
                    }
                }
                Ok(Self::Extension(head.concat_same_type(&others)?))
            }
        }
    }

    /// Convert a float column to a registered extension dtype.
    pub fn astype(&self, dtype: &str) -> FrameResult<Column> {
        if self.dtype_name() == dtype {
            return Ok(self.clone());
        }
        match self {
            Self::Float64(v) => Self::from_registered(dtype, v),
            other => Err(FrameError::TypeMismatch {
                expected: "float64".to_string(),
                found: other.dtype_name().to_string(),
            }),
        }
    }
}

/// Structural equality: same type, same length, equal cells (missing equals missing).
impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float64(a), Self::Float64(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Extension(a), Self::Extension(b)) => {
                a.dtype().is_same(b.dtype())
                    && a.len() == b.len()
                    && (0..a.len()).all(|i| match (a.scalar_at(i), b.scalar_at(i)) {
                        (Ok(x), Ok(y)) => x == y,
                        _ => false,
                    })
            }
            _ => false,
        }
    }
}

fn mismatch(expected: &Column, found: &Column) -> FrameError {
    FrameError::TypeMismatch {
        expected: expected.dtype_name().to_string(),
        found: found.dtype_name().to_string(),
    }
}

fn gather<T: Copy>(
    indices: &[i64],
    len: usize,
    allow_fill: bool,
    get: impl Fn(usize) -> T,
) -> FrameResult<Vec<Option<T>>> {
    indices
        .iter()
        .map(|&idx| {
            if allow_fill {
                match idx {
                    -1 => Ok(None),
                    i if i < -1 => Err(FrameError::IndexOutOfBounds { index: i, len }),
                    i => Ok(Some(get(resolve_position(i, len, "take")?))),
                }
            } else {
                Ok(Some(get(resolve_position(idx, len, "take")?)))
            }
        })
        .collect()
}

/// Positions to gather for a forward fill: each missing slot takes the last
/// valid position before it, or `-1` when there is none.
pub(crate) fn ffill_positions(mask: &[bool]) -> Vec<i64> {
    let mut last = -1_i64;
    mask.iter()
        .enumerate()
        .map(|(i, &missing)| {
            if !missing {
                last = i as i64;
            }
            last
        })
        .collect()
}

/// Mirror of [`ffill_positions`] looking forward.
pub(crate) fn bfill_positions(mask: &[bool]) -> Vec<i64> {
    let mut next = -1_i64;
    let mut out: Vec<i64> = mask
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &missing)| {
            if !missing {
                next = i as i64;
            }
            next
        })
        .collect();
    out.reverse();
    out
}
