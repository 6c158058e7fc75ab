use crate::CoreError;

/// Magnitude type for every stored temperature.
pub type Real = f64;

/// Absolute and relative tolerance for float comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-12,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Two sequences that must line up element by element.
pub fn ensure_same_len(left: usize, right: usize, what: &'static str) -> Result<(), CoreError> {
    if left == right {
        Ok(())
    } else {
        Err(CoreError::LengthMismatch { what, left, right })
    }
}

/// Resolve a possibly negative position against `len`, counting from the end
/// for negatives.
pub fn resolve_position(index: i64, len: usize, what: &'static str) -> Result<usize, CoreError> {
    let len_i = len as i64;
    let resolved = if index < 0 { index + len_i } else { index };
    if (0..len_i).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(CoreError::IndexOob { what, index, len })
    }
}
