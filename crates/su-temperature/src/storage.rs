//! Masked storage: Celsius magnitudes plus a parallel missing mask.

use su_core::{ensure_finite, ensure_same_len};

use crate::error::{TemperatureError, TemperatureResult};
use crate::scalar::TemperatureScalar;
use crate::unit::TemperatureUnit;

/// Magnitude written under masked positions. Never read back as a value.
const MASKED_SENTINEL: f64 = f64::NAN;

/// Ordered Celsius magnitudes with a missing mask (`true` = missing).
///
/// Invariants:
/// - `values.len() == mask.len()`
/// - every unmasked magnitude is finite
/// - the buffer owns its memory; clones and slices copy
#[derive(Debug, Clone, Default)]
pub struct MaskedBuffer {
    values: Vec<f64>,
    mask: Vec<bool>,
}

impl MaskedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `len` missing entries.
    pub fn missing(len: usize) -> Self {
        Self {
            values: vec![MASKED_SENTINEL; len],
            mask: vec![true; len],
        }
    }

    /// Build from explicit value/mask pairs (Celsius).
    ///
    /// An unmasked `NaN` is treated as missing; an unmasked infinity is rejected.
    pub fn from_parts(values: Vec<f64>, mask: Vec<bool>) -> TemperatureResult<Self> {
        ensure_same_len(values.len(), mask.len(), "values and mask")?;
        let mut buffer = Self::with_capacity(values.len());
        for (v, m) in values.into_iter().zip(mask) {
            buffer.push(if m { None } else { Some(v) })?;
        }
        Ok(buffer)
    }

    /// Build from magnitudes in `unit`, `NaN` marking missing entries.
    pub fn from_floats(values: &[f64], unit: TemperatureUnit) -> TemperatureResult<Self> {
        let mut buffer = Self::with_capacity(values.len());
        for &v in values {
            buffer.push(Some(unit.to_celsius(v)))?;
        }
        Ok(buffer)
    }

    /// Build from optional magnitudes in `unit`.
    pub fn from_options(values: &[Option<f64>], unit: TemperatureUnit) -> TemperatureResult<Self> {
        let mut buffer = Self::with_capacity(values.len());
        for v in values {
            buffer.push(v.map(|v| unit.to_celsius(v)))?;
        }
        Ok(buffer)
    }

    /// Build from scalars of either unit.
    pub fn from_scalars(values: &[TemperatureScalar]) -> TemperatureResult<Self> {
        let mut buffer = Self::with_capacity(values.len());
        for s in values {
            buffer.push(s.to_celsius())?;
        }
        Ok(buffer)
    }

    /// Rebuild from magnitudes read out of another buffer, which already
    /// satisfy the invariants.
    pub(crate) fn from_checked(values: &[Option<f64>]) -> Self {
        Self {
            values: values.iter().map(|v| v.unwrap_or(MASKED_SENTINEL)).collect(),
            mask: values.iter().map(Option::is_none).collect(),
        }
    }

    fn with_capacity(len: usize) -> Self {
        Self {
            values: Vec::with_capacity(len),
            mask: Vec::with_capacity(len),
        }
    }

    /// Append one Celsius magnitude; `None` and `NaN` become missing.
    fn push(&mut self, celsius: Option<f64>) -> TemperatureResult<()> {
        match celsius {
            Some(v) if !v.is_nan() => {
                self.values.push(ensure_finite(v, "temperature magnitude")?);
                self.mask.push(false);
            }
            _ => {
                self.values.push(MASKED_SENTINEL);
                self.mask.push(true);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// # Panics
    ///
    /// If `index >= len`.
    #[inline]
    pub fn is_missing(&self, index: usize) -> bool {
        self.mask[index]
    }

    /// Raw Celsius magnitude; meaningless where [`is_missing`](Self::is_missing).
    ///
    /// # Panics
    ///
    /// If `index >= len`.
    #[inline]
    pub fn value_at(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Checked access: `Ok(None)` where missing.
    pub fn get(&self, index: usize) -> TemperatureResult<Option<f64>> {
        if index >= self.len() {
            return Err(TemperatureError::Index {
                index: index as i64,
                len: self.len(),
            });
        }
        Ok(if self.mask[index] {
            None
        } else {
            Some(self.values[index])
        })
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values
            .iter()
            .zip(&self.mask)
            .map(|(v, m)| if *m { None } else { Some(*v) })
    }

    pub fn missing_count(&self) -> usize {
        self.mask.iter().filter(|m| **m).count()
    }

    /// Gather positions in order.
    ///
    /// `-1` yields `fill` (Celsius) when given, else a missing entry. Any other
    /// index outside `0..len` is an error.
    pub fn take(&self, indices: &[i64], fill: Option<f64>) -> TemperatureResult<Self> {
        let len = self.len();
        let mut out = Self::with_capacity(indices.len());
        for &idx in indices {
            match idx {
                -1 => out.push(fill)?,
                i if i >= 0 && (i as usize) < len => {
                    let i = i as usize;
                    out.values.push(self.values[i]);
                    out.mask.push(self.mask[i]);
                }
                i => return Err(TemperatureError::Index { index: i, len }),
            }
        }
        Ok(out)
    }

    /// Copy of `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> TemperatureResult<Self> {
        if start > end || end > self.len() {
            return Err(TemperatureError::Index {
                index: end as i64,
                len: self.len(),
            });
        }
        Ok(Self {
            values: self.values[start..end].to_vec(),
            mask: self.mask[start..end].to_vec(),
        })
    }

    /// Buffers end to end, in order.
    pub fn concat(buffers: &[&MaskedBuffer]) -> Self {
        let total = buffers.iter().map(|b| b.len()).sum();
        let mut out = Self::with_capacity(total);
        for b in buffers {
            out.values.extend_from_slice(&b.values);
            out.mask.extend_from_slice(&b.mask);
        }
        out
    }

    /// Missing entries replaced by `celsius`.
    pub fn fill_missing(&self, celsius: f64) -> TemperatureResult<Self> {
        let celsius = ensure_finite(celsius, "fill value")?;
        Ok(Self {
            values: self
                .iter()
                .map(|v| v.unwrap_or(celsius))
                .collect(),
            mask: vec![false; self.len()],
        })
    }
}

/// Equal when masks match and unmasked magnitudes match.
impl PartialEq for MaskedBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_becomes_missing() {
        let b = MaskedBuffer::from_floats(&[0.0, f64::NAN, 2.0], TemperatureUnit::Celsius).unwrap();
        assert_eq!(b.mask(), &[false, true, false]);
        assert_eq!(b.missing_count(), 1);
        assert_eq!(b.get(1).unwrap(), None);
        assert_eq!(b.get(2).unwrap(), Some(2.0));
    }

    #[test]
    fn infinity_is_rejected() {
        let err = MaskedBuffer::from_floats(&[f64::INFINITY], TemperatureUnit::Celsius).unwrap_err();
        assert!(matches!(err, TemperatureError::Construction { .. }));
    }

    #[test]
    fn mismatched_parts_are_rejected() {
        let err = MaskedBuffer::from_parts(vec![1.0, 2.0], vec![false]).unwrap_err();
        assert!(matches!(err, TemperatureError::Construction { .. }));
        assert!(err.to_string().contains("Length mismatch: values and mask"));
    }

    #[test]
    fn masked_value_does_not_leak() {
        let b = MaskedBuffer::from_parts(vec![5.0, 6.0], vec![true, false]).unwrap();
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![None, Some(6.0)]);
        let other = MaskedBuffer::from_parts(vec![99.0, 6.0], vec![true, false]).unwrap();
        assert_eq!(b, other);
    }

    #[test]
    fn fahrenheit_input_is_stored_as_celsius() {
        let b = MaskedBuffer::from_floats(&[212.0, 32.0], TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(b.value_at(0), 100.0);
        assert_eq!(b.value_at(1), 0.0);
    }

    #[test]
    fn take_sentinel_and_fill() {
        let b = MaskedBuffer::from_floats(&[0.0, 1.0, 2.0], TemperatureUnit::Celsius).unwrap();

        let t = b.take(&[2, -1, 0], None).unwrap();
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![Some(2.0), None, Some(0.0)]);

        let t = b.take(&[-1], Some(7.5)).unwrap();
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![Some(7.5)]);
        assert!(!t.is_missing(0));
    }

    #[test]
    fn take_out_of_range() {
        let b = MaskedBuffer::from_floats(&[0.0], TemperatureUnit::Celsius).unwrap();
        assert!(matches!(
            b.take(&[1], None),
            Err(TemperatureError::Index { index: 1, len: 1 })
        ));
        assert!(matches!(
            b.take(&[-2], None),
            Err(TemperatureError::Index { index: -2, .. })
        ));
        assert_eq!(MaskedBuffer::new().take(&[-1], None).unwrap().missing_count(), 1);
    }

    #[test]
    fn concat_preserves_order() {
        let a = MaskedBuffer::from_options(&[Some(1.0), None], TemperatureUnit::Celsius).unwrap();
        let b = MaskedBuffer::from_options(&[Some(3.0)], TemperatureUnit::Celsius).unwrap();
        let c = MaskedBuffer::concat(&[&a, &b]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn clone_owns_memory() {
        let a = MaskedBuffer::from_floats(&[1.0, 2.0], TemperatureUnit::Celsius).unwrap();
        let b = a.clone();
        assert_ne!(a.values.as_ptr(), b.values.as_ptr());
        let s = a.slice(0, 1).unwrap();
        assert_ne!(a.values.as_ptr(), s.values.as_ptr());
    }

    #[test]
    fn slice_bounds() {
        let a = MaskedBuffer::from_floats(&[1.0, 2.0], TemperatureUnit::Celsius).unwrap();
        assert_eq!(a.slice(1, 2).unwrap().len(), 1);
        assert_eq!(a.slice(2, 2).unwrap().len(), 0);
        assert!(a.slice(1, 3).is_err());
        assert!(a.slice(2, 1).is_err());
    }

    #[test]
    fn fill_missing_clears_mask() {
        let a = MaskedBuffer::missing(2).fill_missing(4.0).unwrap();
        assert_eq!(a.missing_count(), 0);
        assert_eq!(a.value_at(1), 4.0);
    }
}
