//! Reference spherical Bessel function j_l(x).
//!
//! Each order is evaluated in the regime where its method is stable:
//!
//! - |x| < 1: power series, whose terms shrink from the first one on.
//! - |x| >= 1 and l < |x|: upward recurrence from the closed-form seeds.
//! - |x| >= 1 and l >= |x|: Miller recurrence started well above both l and
//!   |x|, matched to the largest upward value below |x|.
//!
//! The Miller start grows with |x| and the match avoids sin(x)/x, so neither
//! failure mode of the fixed-margin kernels in [`sphj`](crate::sphj) carries
//! over. Used to measure the kernels' errors, not by the kernels themselves.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use num_traits::Float;

use crate::algo::miller::recur_down;
use crate::algo::series_j::series_j;
use crate::algo::upward::{j0, j1};
use crate::machine::RoundoffFloat;
use crate::types::Error;

/// Whether the upward recurrence is stable for order `l` at `x`.
#[inline]
fn upward_is_stable<T: RoundoffFloat>(l: usize, x: T) -> bool {
    let ax = x.abs();
    ax >= T::one() && ax > T::from_index(l)
}

/// Number of leading orders in `0..=top` that the upward recurrence handles.
fn stable_count<T: RoundoffFloat>(top: usize, x: T) -> usize {
    (0..=top).take_while(|&l| upward_is_stable(l, x)).count()
}

/// Miller starting order for orders up to `top`.
///
/// top + 20 + sqrt(40 · max(top, |x|)); the seed's error then decays below
/// machine epsilon before reaching `top`.
fn miller_start<T: RoundoffFloat>(top: usize, ax: T) -> Result<usize, Error> {
    let reach = ax.to_f64().ok_or(Error::InvalidArgument)?.max(top as f64);
    let margin = Float::ceil(Float::sqrt(40.0 * reach)) as usize;
    top.checked_add(20 + margin).ok_or(Error::InvalidArgument)
}

/// Largest-magnitude upward value among orders `0..n_up`, with its order.
fn stable_anchor<T: RoundoffFloat>(x: T, n_up: usize) -> (usize, T) {
    let mut p1 = j0(x);
    let mut best = (0, p1);
    if n_up < 2 {
        return best;
    }
    let mut p2 = j1(x);
    if p2.abs() > best.1.abs() {
        best = (1, p2);
    }
    for k in 1..n_up - 1 {
        let pt = p2;
        p2 = (T::from_index(2 * k + 1) / x) * pt - p1;
        p1 = pt;
        if p2.abs() > best.1.abs() {
            best = (k + 1, p2);
        }
    }
    best
}

/// j_l(x) from the closed-form seeds and `l − 1` upward steps.
fn upward_single<T: RoundoffFloat>(l: usize, x: T) -> T {
    if l == 0 {
        return j0(x);
    }
    let mut p1 = j0(x);
    let mut p2 = j1(x);
    for k in 1..l {
        let pt = p2;
        p2 = (T::from_index(2 * k + 1) / x) * pt - p1;
        p1 = pt;
    }
    p2
}

/// Spherical Bessel function of the first kind, j_l(x).
///
/// Defined at x = 0 (1 for l = 0, 0 otherwise). Returns
/// `Error::InvalidArgument` if x is not finite.
pub fn spherical_jn<T: RoundoffFloat>(l: usize, x: T) -> Result<T, Error> {
    if !x.is_finite() {
        return Err(Error::InvalidArgument);
    }
    let ax = x.abs();
    if ax < T::one() {
        return Ok(series_j(l, x));
    }
    if upward_is_stable(l, x) {
        return Ok(upward_single(l, x));
    }

    let (l0, anchor) = stable_anchor(x, stable_count(l, x));
    let mut at_l = [T::zero()];
    let at_l0 = recur_down(x, miller_start(l, ax)?, l0, l, &mut at_l)?;
    if at_l0 == T::zero() {
        return Err(Error::UndefinedResult);
    }
    Ok(anchor * (at_l[0] / at_l0))
}

/// j_l(x) for l = 0, 1, ..., lmax.
///
/// Returns `Error::InvalidArgument` if x is not finite.
#[cfg(feature = "alloc")]
pub fn spherical_jn_table<T: RoundoffFloat>(x: T, lmax: usize) -> Result<Vec<T>, Error> {
    if !x.is_finite() {
        return Err(Error::InvalidArgument);
    }
    let mut y = vec![T::zero(); lmax + 1];

    let n_up = stable_count(lmax, x);
    if n_up == 0 {
        for (l, y_item) in y.iter_mut().enumerate() {
            *y_item = series_j(l, x);
        }
        return Ok(y);
    }

    crate::algo::upward::upward_recurrence(x, &mut y[..n_up]);
    if n_up > lmax {
        return Ok(y);
    }

    let (l0, anchor) = y[..n_up]
        .iter()
        .enumerate()
        .fold((0, T::zero()), |best, (l, &v)| {
            if v.abs() > best.1.abs() {
                (l, v)
            } else {
                best
            }
        });
    let rest = &mut y[n_up..];
    let at_l0 = recur_down(x, miller_start(lmax, x.abs())?, l0, n_up, rest)?;
    if at_l0 == T::zero() {
        return Err(Error::UndefinedResult);
    }
    for y_item in rest.iter_mut() {
        *y_item = anchor * (*y_item / at_l0);
    }
    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    // mpmath 30-digit reference values
    const CASES: [(usize, f64, f64); 14] = [
        (0, 1.0, 0.84147098480789650665),
        (1, 1.0, 0.30116867893975678925),
        (3, 0.1, 9.5185197208655686299e-6),
        (5, 1.0, 9.2561158611258163567e-5),
        (8, 0.1, 2.9012001025301912298e-16),
        (3, 10.0, -0.039495844984470324358),
        (8, 10.0, 0.12557802364956783121),
        (15, 10.0, 0.00106354271461442134),
        (25, 10.0, 1.284342236009569715e-9),
        (40, 30.0, 5.4547023530357503449e-5),
        (60, 50.0, 1.339715305096215892e-4),
        (100, 80.0, 4.5247964400094990568e-7),
        (12, 7.5, 0.0013567114231533771579),
        (12, -7.5, 0.0013567114231533771579),
    ];

    #[test]
    fn single_values() {
        for (l, x, expected) in CASES {
            let v = spherical_jn(l, x).unwrap();
            let err = ((v - expected) / expected).abs();
            assert!(err < 1e-14, "j_{l}({x}): {err}");
        }
    }

    #[test]
    fn large_order_at_large_argument() {
        // the power series alone loses about four digits here
        let table = spherical_jn_table(80.0_f64, 100).unwrap();
        let err = ((table[100] - 4.5247964400094990568e-7) / 4.5247964400094990568e-7).abs();
        assert!(err < 1e-14, "{err}");
        let err = ((table[90] - spherical_jn(90, 80.0_f64).unwrap()) / table[90]).abs();
        assert!(err < 1e-14, "{err}");
    }

    #[test]
    fn table_agrees_with_single_values() {
        for x in [0.1_f64, 1.0, 2.5, 10.0, 30.0] {
            let table = spherical_jn_table(x, 45).unwrap();
            for (l, &v) in table.iter().enumerate() {
                let single = spherical_jn(l, x).unwrap();
                assert!(
                    (v - single).abs() <= 1e-14 * single.abs(),
                    "j_{l}({x}): {v} vs {single}"
                );
            }
        }
    }

    #[test]
    fn miller_start_grows_with_argument() {
        assert_eq!(miller_start(25, 10.0_f64), Ok(25 + 20 + 32));
        assert!(miller_start(25, 80.0_f64).unwrap() > miller_start(25, 10.0_f64).unwrap());
    }

    #[test]
    fn defined_at_zero() {
        assert_eq!(spherical_jn(0, 0.0_f64), Ok(1.0));
        assert_eq!(spherical_jn(4, 0.0_f64), Ok(0.0));
        assert_eq!(spherical_jn_table(0.0_f64, 2).unwrap(), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(spherical_jn(2, f64::NAN), Err(Error::InvalidArgument));
        assert_eq!(spherical_jn_table(f64::NEG_INFINITY, 2), Err(Error::InvalidArgument));
    }
}
