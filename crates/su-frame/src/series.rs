//! One labelled column.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use su_core::resolve_position;

use crate::cell::Cell;
use crate::column::{Column, bfill_positions, ffill_positions};
use crate::error::{FrameError, FrameResult};
use crate::frame::DataFrame;
use crate::label::Label;

/// A column plus the row labels the host keeps for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: Option<String>,
    index: Vec<Label>,
    values: Column,
}

impl Series {
    /// Series with the default `0..len` index.
    pub fn new(name: Option<&str>, values: Column) -> Self {
        Self {
            name: name.map(str::to_string),
            index: Label::range(values.len()),
            values,
        }
    }

    pub fn with_index(name: Option<&str>, index: Vec<Label>, values: Column) -> FrameResult<Self> {
        if index.len() != values.len() {
            return Err(FrameError::LengthMismatch {
                what: "series index",
                expected: values.len(),
                found: index.len(),
            });
        }
        Ok(Self {
            name: name.map(str::to_string),
            index,
            values,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn index(&self) -> &[Label] {
        &self.index
    }

    pub fn values(&self) -> &Column {
        &self.values
    }

    pub fn into_values(self) -> Column {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dtype_name(&self) -> &'static str {
        self.values.dtype_name()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> FrameResult<Self> {
        let n = n.min(self.len());
        Ok(Self {
            name: self.name.clone(),
            index: self.index[..n].to_vec(),
            values: self.values.slice(0, n)?,
        })
    }

    /// Map every index label through `f`.
    pub fn rename(&self, f: impl Fn(&Label) -> Label) -> Self {
        Self {
            name: self.name.clone(),
            index: self.index.iter().map(f).collect(),
            values: self.values.clone(),
        }
    }

    /// Element at a position; negatives count from the end.
    pub fn iloc(&self, position: i64) -> FrameResult<Cell> {
        let i = resolve_position(position, self.len(), "iloc")?;
        self.values.cell(i)
    }

    /// Rows at the given positions, in order, repeats allowed.
    pub fn take(&self, positions: &[i64]) -> FrameResult<Self> {
        let len = self.len();
        let index = positions
            .iter()
            .map(|&p| Ok(self.index[resolve_position(p, len, "take")?].clone()))
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(Self {
            name: self.name.clone(),
            index,
            values: self.values.take(positions, false)?,
        })
    }

    /// Rows `start..end`, clamped like a slice expression.
    pub fn iloc_slice(&self, start: usize, end: usize) -> FrameResult<Self> {
        let end = end.min(self.len());
        let start = start.min(end);
        Ok(Self {
            name: self.name.clone(),
            index: self.index[start..end].to_vec(),
            values: self.values.slice(start, end)?,
        })
    }

    /// Element under `label`.
    pub fn loc(&self, label: &Label) -> FrameResult<Cell> {
        let i = position_of(&self.index, label)?;
        self.values.cell(i)
    }

    /// Rows under each of `labels`; every label must exist.
    pub fn loc_many(&self, labels: &[Label]) -> FrameResult<Self> {
        let positions = labels
            .iter()
            .map(|l| position_of(&self.index, l).map(|p| p as i64))
            .collect::<FrameResult<Vec<_>>>()?;
        self.take(&positions)
    }

    /// Conform to `labels`; labels not present become missing rows.
    pub fn reindex(&self, labels: &[Label]) -> FrameResult<Self> {
        let positions = reindex_positions(&self.index, labels)?;
        debug!(
            from = self.len(),
            to = labels.len(),
            dtype = self.dtype_name(),
            "reindex series"
        );
        Ok(Self {
            name: self.name.clone(),
            index: labels.to_vec(),
            values: self.values.take(&positions, true)?,
        })
    }

    /// Boolean series flagging missing elements.
    pub fn isna(&self) -> Self {
        Self {
            name: self.name.clone(),
            index: self.index.clone(),
            values: Column::Bool(self.values.isna()),
        }
    }

    /// Propagate the last valid value forward over missing elements.
    pub fn ffill(&self) -> FrameResult<Self> {
        let positions = ffill_positions(&self.values.isna());
        Ok(Self {
            name: self.name.clone(),
            index: self.index.clone(),
            values: self.values.take(&positions, true)?,
        })
    }

    /// Propagate the next valid value backward over missing elements.
    pub fn bfill(&self) -> FrameResult<Self> {
        let positions = bfill_positions(&self.values.isna());
        Ok(Self {
            name: self.name.clone(),
            index: self.index.clone(),
            values: self.values.take(&positions, true)?,
        })
    }

    /// Drop missing rows.
    pub fn dropna(&self) -> FrameResult<Self> {
        let keep: Vec<i64> = self
            .values
            .isna()
            .iter()
            .enumerate()
            .filter(|(_, missing)| !**missing)
            .map(|(i, _)| i as i64)
            .collect();
        debug!(dropped = self.len() - keep.len(), "dropna series");
        self.take(&keep)
    }

    /// Convert to a registered extension dtype.
    pub fn astype(&self, dtype: &str) -> FrameResult<Self> {
        Ok(Self {
            name: self.name.clone(),
            index: self.index.clone(),
            values: self.values.astype(dtype)?,
        })
    }

    /// Single-column frame; an unnamed series becomes column `"0"`.
    pub fn to_frame(&self) -> FrameResult<DataFrame> {
        let name = self.name.clone().unwrap_or_else(|| "0".to_string());
        DataFrame::with_index(self.index.clone(), vec![(name, self.values.clone())])
    }

    /// Stack series end to end, keeping their labels.
    pub fn concat(series: &[&Series]) -> FrameResult<Self> {
        let columns: Vec<&Column> = series.iter().map(|s| &s.values).collect();
        let values = Column::concat(&columns)?;
        let index = series.iter().flat_map(|s| s.index.iter().cloned()).collect();
        debug!(parts = series.len(), len = values.len(), "concat series");
        Ok(Self {
            name: series.first().and_then(|s| s.name.clone()),
            index,
            values,
        })
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .index
            .iter()
            .map(|l| l.to_string().len())
            .max()
            .unwrap_or(0);
        for (i, label) in self.index.iter().enumerate() {
            let value = self.values.format_at(i).map_err(|_| fmt::Error)?;
            writeln!(f, "{:<width$}    {}", label.to_string(), value, width = width)?;
        }
        match &self.name {
            Some(name) => write!(f, "Name: {}, dtype: {}", name, self.dtype_name()),
            None => write!(f, "dtype: {}", self.dtype_name()),
        }
    }
}

pub(crate) fn position_of(index: &[Label], label: &Label) -> FrameResult<usize> {
    index
        .iter()
        .position(|l| l == label)
        .ok_or_else(|| FrameError::LabelNotFound(label.to_string()))
}

/// Source position for every target label, `-1` where the label is absent.
pub(crate) fn reindex_positions(index: &[Label], labels: &[Label]) -> FrameResult<Vec<i64>> {
    let mut lookup: HashMap<&Label, i64> = HashMap::with_capacity(index.len());
    for (i, label) in index.iter().enumerate() {
        if lookup.insert(label, i as i64).is_some() {
            return Err(FrameError::DuplicateLabels);
        }
    }
    Ok(labels
        .iter()
        .map(|l| lookup.get(l).copied().unwrap_or(-1))
        .collect())
}
