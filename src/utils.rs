//! Relative-difference formulas with explicit zero-denominator signalling.

use crate::machine::RoundoffFloat;
use crate::types::Error;

/// Symmetric relative difference `|a − b| / ((a + b) / 2)`.
///
/// Returns `Error::UndefinedResult` when `a + b` is exactly zero, so that an
/// undefined comparison is never mistaken for a perfect match.
#[inline]
pub fn relative_difference<T: RoundoffFloat>(a: T, b: T) -> Result<T, Error> {
    let mean = (a + b) / T::from_f64(2.0);
    if mean == T::zero() {
        return Err(Error::UndefinedResult);
    }
    Ok(((a - b) / mean).abs())
}

/// Relative error of `value` against `baseline`: `|value − baseline| / |baseline|`.
///
/// Returns `Error::UndefinedResult` when `baseline` is exactly zero.
#[inline]
pub fn relative_error<T: RoundoffFloat>(value: T, baseline: T) -> Result<T, Error> {
    if baseline == T::zero() {
        return Err(Error::UndefinedResult);
    }
    Ok(((value - baseline) / baseline).abs())
}
