//! Labelled collection of named columns.

use std::fmt;

use tracing::debug;

use su_core::resolve_position;

use crate::cell::Cell;
use crate::column::Column;
use crate::error::{FrameError, FrameResult};
use crate::label::Label;
use crate::series::{Series, position_of, reindex_positions};

/// Columns sharing one row index. Column order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    index: Vec<Label>,
    columns: Vec<(String, Column)>,
}

impl DataFrame {
    /// Frame with the default `0..len` index.
    pub fn new<S: Into<String>>(columns: Vec<(S, Column)>) -> FrameResult<Self> {
        let len = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        Self::with_index(Label::range(len), columns)
    }

    pub fn with_index<S: Into<String>>(
        index: Vec<Label>,
        columns: Vec<(S, Column)>,
    ) -> FrameResult<Self> {
        let mut out: Vec<(String, Column)> = Vec::with_capacity(columns.len());
        for (name, col) in columns {
            let name = name.into();
            if col.len() != index.len() {
                return Err(FrameError::LengthMismatch {
                    what: "frame column",
                    expected: index.len(),
                    found: col.len(),
                });
            }
            if out.iter().any(|(n, _)| *n == name) {
                return Err(FrameError::DuplicateColumn(name));
            }
            out.push((name, col));
        }
        Ok(Self {
            index,
            columns: out,
        })
    }

    pub fn index(&self) -> &[Label] {
        &self.index
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }

    pub fn column(&self, name: &str) -> FrameResult<Series> {
        let col = self.column_ref(name)?;
        Series::with_index(Some(name), self.index.clone(), col.clone())
    }

    fn column_ref(&self, name: &str) -> FrameResult<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    fn map_columns(
        &self,
        index: Vec<Label>,
        f: impl Fn(&Column) -> FrameResult<Column>,
    ) -> FrameResult<Self> {
        let columns = self
            .columns
            .iter()
            .map(|(n, c)| Ok((n.clone(), f(c)?)))
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(Self { index, columns })
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> FrameResult<Self> {
        let n = n.min(self.index.len());
        self.map_columns(self.index[..n].to_vec(), |c| c.slice(0, n))
    }

    /// Map every row label through `f`.
    pub fn rename(&self, f: impl Fn(&Label) -> Label) -> Self {
        Self {
            index: self.index.iter().map(f).collect(),
            columns: self.columns.clone(),
        }
    }

    /// Summary of index, columns, non-null counts and dtypes.
    pub fn info(&self) -> String {
        let mut out = String::from("<DataFrame>\n");
        match (self.index.first(), self.index.last()) {
            (Some(first), Some(last)) => out.push_str(&format!(
                "Index: {} entries, {} to {}\n",
                self.index.len(),
                first,
                last
            )),
            _ => out.push_str("Index: 0 entries\n"),
        }
        out.push_str(&format!(
            "Data columns (total {} columns):\n",
            self.columns.len()
        ));
        out.push_str(" #   Column  Non-Null Count  Dtype\n");
        for (i, (name, col)) in self.columns.iter().enumerate() {
            out.push_str(&format!(
                " {:<3} {:<7} {:<15} {}\n",
                i,
                name,
                format!("{} non-null", col.count()),
                col.dtype_name()
            ));
        }
        out
    }

    /// Rows at the given positions; negatives count from the end.
    pub fn take(&self, positions: &[i64]) -> FrameResult<Self> {
        let len = self.index.len();
        let index = positions
            .iter()
            .map(|&p| Ok(self.index[resolve_position(p, len, "take")?].clone()))
            .collect::<FrameResult<Vec<_>>>()?;
        self.map_columns(index, |c| c.take(positions, false))
    }

    /// Element at (row position, column position).
    pub fn iloc(&self, row: i64, col: usize) -> FrameResult<Cell> {
        let i = resolve_position(row, self.index.len(), "iloc row")?;
        self.column_at(col)?.1.cell(i)
    }

    /// One row restricted to the given column positions.
    pub fn iloc_row(&self, row: i64, cols: &[usize]) -> FrameResult<Vec<(String, Cell)>> {
        let i = resolve_position(row, self.index.len(), "iloc row")?;
        cols.iter()
            .map(|&c| {
                let (name, col) = self.column_at(c)?;
                Ok((name.clone(), col.cell(i)?))
            })
            .collect()
    }

    /// Column subset by position.
    pub fn iloc_cols(&self, cols: &[usize]) -> FrameResult<Self> {
        let columns = cols
            .iter()
            .map(|&c| self.column_at(c).cloned())
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(Self {
            index: self.index.clone(),
            columns,
        })
    }

    /// Rows and columns by position.
    pub fn iloc_many(&self, rows: &[i64], cols: &[usize]) -> FrameResult<Self> {
        self.iloc_cols(cols)?.take(rows)
    }

    /// Element under (row label, column name).
    pub fn loc(&self, label: &Label, col: &str) -> FrameResult<Cell> {
        let i = position_of(&self.index, label)?;
        self.column_ref(col)?.cell(i)
    }

    /// One row restricted to the named columns.
    pub fn loc_row(&self, label: &Label, cols: &[&str]) -> FrameResult<Vec<(String, Cell)>> {
        let i = position_of(&self.index, label)?;
        cols.iter()
            .map(|&c| Ok((c.to_string(), self.column_ref(c)?.cell(i)?)))
            .collect()
    }

    /// Column subset by name.
    pub fn loc_cols(&self, cols: &[&str]) -> FrameResult<Self> {
        let columns = cols
            .iter()
            .map(|&c| Ok((c.to_string(), self.column_ref(c)?.clone())))
            .collect::<FrameResult<Vec<_>>>()?;
        Ok(Self {
            index: self.index.clone(),
            columns,
        })
    }

    /// Rows by label and columns by name.
    pub fn loc_many(&self, labels: &[Label], cols: &[&str]) -> FrameResult<Self> {
        let positions = labels
            .iter()
            .map(|l| position_of(&self.index, l).map(|p| p as i64))
            .collect::<FrameResult<Vec<_>>>()?;
        self.loc_cols(cols)?.take(&positions)
    }

    /// Conform to `labels`; absent labels become all-missing rows.
    pub fn reindex(&self, labels: &[Label]) -> FrameResult<Self> {
        let positions = reindex_positions(&self.index, labels)?;
        debug!(
            from = self.index.len(),
            to = labels.len(),
            columns = self.columns.len(),
            "reindex frame"
        );
        self.map_columns(labels.to_vec(), |c| c.take(&positions, true))
    }

    /// Boolean frame flagging missing elements.
    pub fn isna(&self) -> Self {
        Self {
            index: self.index.clone(),
            columns: self
                .columns
                .iter()
                .map(|(n, c)| (n.clone(), Column::Bool(c.isna())))
                .collect(),
        }
    }

    /// Drop every row with a missing element in any column.
    pub fn dropna(&self) -> FrameResult<Self> {
        let mut keep = vec![true; self.index.len()];
        for (_, col) in &self.columns {
            for (k, missing) in keep.iter_mut().zip(col.isna()) {
                *k &= !missing;
            }
        }
        let positions: Vec<i64> = keep
            .iter()
            .enumerate()
            .filter(|(_, k)| **k)
            .map(|(i, _)| i as i64)
            .collect();
        debug!(dropped = self.index.len() - positions.len(), "dropna frame");
        self.take(&positions)
    }

    /// Stack frames vertically.
    ///
    /// The result holds the union of all columns in order of first
    /// appearance; a frame lacking a column contributes missing rows of that
    /// column's type.
    pub fn concat(frames: &[&DataFrame]) -> FrameResult<Self> {
        let mut names: Vec<&str> = Vec::new();
        for frame in frames {
            for (name, _) in &frame.columns {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }

        let mut columns = Vec::with_capacity(names.len());
        for name in &names {
            let template = frames
                .iter()
                .find_map(|f| f.column_ref(name).ok())
                .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))?;
            let gaps = frames.iter().any(|f| f.column_ref(name).is_err());
            let parts: Vec<Column> = frames
                .iter()
                .map(|f| match f.column_ref(name) {
                    Ok(c) if gaps => c.promote_for_missing(),
                    Ok(c) => c.clone(),
                    Err(_) => template.missing_like(f.index.len()),
                })
                .collect();
            let refs: Vec<&Column> = parts.iter().collect();
            columns.push((name.to_string(), Column::concat(&refs)?));
        }

        let index: Vec<Label> = frames.iter().flat_map(|f| f.index.iter().cloned()).collect();
        debug!(parts = frames.len(), rows = index.len(), "concat frames");
        Self::with_index(index, columns)
    }

    fn column_at(&self, col: usize) -> FrameResult<&(String, Column)> {
        self.columns
            .get(col)
            .ok_or(FrameError::IndexOutOfBounds {
                index: col as i64,
                len: self.columns.len(),
            })
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for (name, _) in &self.columns {
            write!(f, " {:>10}", name)?;
        }
        for (i, label) in self.index.iter().enumerate() {
            write!(f, "\n{:<3}", label.to_string())?;
            for (_, col) in &self.columns {
                let value = col.format_at(i).map_err(|_| fmt::Error)?;
                write!(f, " {:>10}", value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            ("A", Column::from_floats(&[0.0, 1.0, 2.0])),
            ("B", Column::Bool(vec![true, false, true])),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = DataFrame::new(vec![
            ("A", Column::from_floats(&[0.0, 1.0])),
            ("B", Column::from_floats(&[0.0])),
        ])
        .unwrap_err();
        assert!(matches!(err, FrameError::LengthMismatch { .. }));
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = DataFrame::new(vec![
            ("A", Column::from_floats(&[0.0])),
            ("A", Column::from_floats(&[1.0])),
        ])
        .unwrap_err();
        assert_eq!(err, FrameError::DuplicateColumn("A".into()));
    }

    #[test]
    fn reindex_promotes_bool() {
        let r = frame().reindex(&[Label::Int(2), Label::Int(7)]).unwrap();
        assert_eq!(r.shape(), (2, 2));
        assert_eq!(
            r.column("B").unwrap().values(),
            &Column::Float64(vec![Some(1.0), None])
        );
    }

    #[test]
    fn concat_fills_absent_columns() {
        let a = frame();
        let b = DataFrame::new(vec![("A", Column::from_floats(&[9.0]))]).unwrap();
        let c = DataFrame::concat(&[&a, &b]).unwrap();
        assert_eq!(c.shape(), (4, 2));
        assert_eq!(c.column("B").unwrap().values().isna(), vec![false, false, false, true]);
    }

    #[test]
    fn info_lists_columns() {
        let text = frame().info();
        assert!(text.contains("Index: 3 entries, 0 to 2"));
        assert!(text.contains("3 non-null"));
        assert!(text.contains("bool"));
    }

    #[test]
    fn iloc_out_of_range() {
        assert!(frame().iloc(3, 0).is_err());
        assert!(frame().iloc(0, 2).is_err());
        assert_eq!(frame().iloc(-1, 0).unwrap(), Cell::Float(2.0));
    }
}
