//! Spherical Bessel function tables by upward and downward recurrence.
//!
//! Upper interface over the internal upward and Miller recurrences:
//! validates the argument and resolves the starting order. The `_into`
//! variants fill a caller-provided slice and work without `alloc`; the
//! `Vec`-returning ones allocate a table of length lmax + 1 and call them.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::algo::miller::downward_recurrence;
use crate::algo::upward::upward_recurrence;
use crate::machine::RoundoffFloat;
use crate::types::{Error, StartOrder};

/// Both recurrences divide by x.
#[inline]
pub(crate) fn check_argument<T: RoundoffFloat>(x: T) -> Result<(), Error> {
    if x == T::zero() || !x.is_finite() {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

/// Fill `y[l]` with j_l(x) for l = 0..y.len() by upward recurrence.
///
/// Seeds j_0 = sin(x)/x and j_1 = sin(x)/x² − cos(x)/x, then applies
/// j_{l+1} = ((2l+1)/x) j_l − j_{l−1}. Accurate while l stays below |x|;
/// above that rounding errors are amplified at every step and the table
/// diverges from the true values. An empty `y` is left untouched.
///
/// Returns `Error::InvalidArgument` if x is zero or not finite.
pub fn bessel_up_into<T: RoundoffFloat>(x: T, y: &mut [T]) -> Result<(), Error> {
    check_argument(x)?;
    upward_recurrence(x, y);
    Ok(())
}

/// Fill `y[l]` with j_l(x) for l = 0..y.len() by downward (Miller)
/// recurrence.
///
/// Starts from 1 at order `m_start` and 0 at `m_start + 1`, applies
/// j_{l−1} = ((2l+1)/x) j_l − j_{l+1} down to l = 0, and rescales the table
/// so that entry 0 equals sin(x)/x. `start` selects `m_start` relative to
/// lmax = y.len() − 1; see [`StartOrder`] for how the margin relates to
/// accuracy. The margin is taken as given: a margin too small for the
/// argument yields inaccurate high orders without any error. An empty `y`
/// is left untouched.
///
/// Returns `Error::InvalidArgument` if x is zero or not finite, or if the
/// starting order does not exceed lmax. Returns `Error::UndefinedResult` if
/// the unnormalized j_0 comes out as exactly zero or a step overflows.
pub fn bessel_down_into<T: RoundoffFloat>(
    x: T,
    y: &mut [T],
    start: StartOrder,
) -> Result<(), Error> {
    check_argument(x)?;
    let Some(lmax) = y.len().checked_sub(1) else {
        return Ok(());
    };
    let m_start = start.resolve(lmax)?;
    downward_recurrence(x, m_start, y)
}

/// Compute j_l(x) for l = 0, 1, ..., lmax by upward recurrence.
///
/// See [`bessel_up_into`] for the method and its accuracy.
///
/// Returns `Error::InvalidArgument` if x is zero or not finite.
#[cfg(feature = "alloc")]
pub fn bessel_up<T: RoundoffFloat>(x: T, lmax: usize) -> Result<Vec<T>, Error> {
    let mut y = vec![T::zero(); lmax + 1];
    bessel_up_into(x, &mut y)?;
    Ok(y)
}

/// Compute j_l(x) for l = 0, 1, ..., lmax by downward (Miller) recurrence.
///
/// See [`bessel_down_into`] for the method, the role of `start`, and the
/// error cases.
#[cfg(feature = "alloc")]
pub fn bessel_down<T: RoundoffFloat>(
    x: T,
    lmax: usize,
    start: StartOrder,
) -> Result<Vec<T>, Error> {
    let mut y = vec![T::zero(); lmax + 1];
    bessel_down_into(x, &mut y, start)?;
    Ok(y)
}
