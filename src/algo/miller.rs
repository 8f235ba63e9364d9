//! Miller algorithm for spherical Bessel functions.
//!
//! The recurrence j_{l−1}(x) = ((2l+1)/x) j_l(x) − j_{l+1}(x) is run from an
//! arbitrary seed (1 at `m_start`, 0 at `m_start + 1`). Run in this direction
//! the minimal solution j_l dominates, so the seed's error decays; the values
//! are correct up to one common factor, which the caller fixes by matching a
//! single known value.

use crate::algo::upward::j0;
use crate::machine::RoundoffFloat;
use crate::types::Error;

/// Unnormalized downward recurrence from `m_start` to order `stop`.
///
/// `window[i]` receives the value for order `base + i`; orders outside the
/// window are not stored. Returns the value at order `stop` on the same
/// scale as the window.
///
/// Caller guarantees x != 0 and finite, `stop <= base` and
/// `m_start >= base + window.len()`. Returns `Error::UndefinedResult` if a
/// step overflows even after rescaling, i.e. (2l+1)/x itself is not
/// representable.
pub(crate) fn recur_down<T: RoundoffFloat>(
    x: T,
    m_start: usize,
    stop: usize,
    base: usize,
    window: &mut [T],
) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();
    debug_assert!(stop <= base && m_start >= base + window.len());

    let big = T::rescale_threshold();

    for w_item in window.iter_mut() {
        *w_item = zero;
    }

    // p1 = j_{l+1}, p2 = j_l, both unnormalized
    let mut p1 = zero;
    let mut p2 = one;

    for l in (stop + 1..=m_start).rev() {
        let ratio = T::from_index(2 * l + 1) / x;

        // Bring the running pair to unit size before a step that could
        // push it past sqrt(MACH_HUGE); stored orders share the same scale.
        let peak = p1.abs().max(p2.abs());
        if peak > big / (ratio.abs() + one) {
            let scale = one / peak;
            p1 = p1 * scale;
            p2 = p2 * scale;
            for w_item in window.iter_mut() {
                *w_item = *w_item * scale;
            }
        }

        let pt = p2;
        p2 = ratio * pt - p1;
        p1 = pt;
        if !p2.is_finite() {
            return Err(Error::UndefinedResult);
        }

        let lower = l - 1;
        if lower >= base && lower - base < window.len() {
            window[lower - base] = p2;
        }
    }

    Ok(p2)
}

/// Fill `y[l]` with j_l(x) for l = 0..y.len() by downward recurrence from
/// `m_start`, normalized so that `y[0]` equals sin(x)/x.
///
/// Caller guarantees x != 0 and finite, and `m_start >= y.len()`.
/// Returns `Error::UndefinedResult` if the recurrence overflows or the
/// unnormalized j_0 is exactly zero.
pub(crate) fn downward_recurrence<T: RoundoffFloat>(
    x: T,
    m_start: usize,
    y: &mut [T],
) -> Result<(), Error> {
    if y.is_empty() {
        return Ok(());
    }

    let p0 = recur_down(x, m_start, 0, 0, y)?;
    if p0 == T::zero() {
        return Err(Error::UndefinedResult);
    }
    let cnorm = j0(x) / p0;
    if !cnorm.is_finite() {
        return Err(Error::UndefinedResult);
    }

    for y_item in y.iter_mut() {
        *y_item = *y_item * cnorm;
    }

    Ok(())
}
