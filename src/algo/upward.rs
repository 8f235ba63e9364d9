//! Upward three-term recurrence for spherical Bessel functions.
//!
//! j_{l+1}(x) = ((2l+1)/x) j_l(x) − j_{l−1}(x), seeded with the closed forms
//! of j_0 and j_1. Forward-unstable once l exceeds |x|: j_l decays there while
//! the companion solution y_l grows, and every rounding error excites y_l.

use crate::machine::RoundoffFloat;

/// j_0(x) = sin(x)/x.
#[inline]
pub(crate) fn j0<T: RoundoffFloat>(x: T) -> T {
    x.sin() / x
}

/// j_1(x) = sin(x)/x² − cos(x)/x.
#[inline]
pub(crate) fn j1<T: RoundoffFloat>(x: T) -> T {
    x.sin() / (x * x) - x.cos() / x
}

/// Fill `y[l]` with j_l(x) for l = 0..y.len() by upward recurrence.
///
/// Caller guarantees x != 0 and finite.
pub(crate) fn upward_recurrence<T: RoundoffFloat>(x: T, y: &mut [T]) {
    let n = y.len();
    if n == 0 {
        return;
    }
    y[0] = j0(x);
    if n == 1 {
        return;
    }
    y[1] = j1(x);

    for l in 1..n - 1 {
        let two_l_plus_one = T::from_index(2 * l + 1);
        y[l + 1] = (two_l_plus_one / x) * y[l] - y[l - 1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_match_closed_forms() {
        // mpmath: j_0(1) = 0.84147098480789650665, j_1(1) = 0.30116867893975678925
        assert!((j0(1.0_f64) - 0.84147098480789650665).abs() < 1e-15);
        assert!((j1(1.0_f64) - 0.30116867893975678925).abs() < 1e-15);
    }

    #[test]
    fn empty_and_short_tables() {
        let mut empty: [f64; 0] = [];
        upward_recurrence(1.0, &mut empty);

        let mut one = [0.0_f64];
        upward_recurrence(2.0, &mut one);
        assert_eq!(one[0], 2.0_f64.sin() / 2.0);

        let mut two = [0.0_f64; 2];
        upward_recurrence(2.0, &mut two);
        assert_eq!(two[1], j1(2.0));
    }

    #[test]
    fn stable_below_the_turning_point() {
        // mpmath: j_3(10) = -0.039495844984470324358, j_8(10) = 0.12557802364956783121
        let mut y = [0.0_f64; 9];
        upward_recurrence(10.0, &mut y);
        assert!((y[3] - (-0.039495844984470324358)).abs() < 1e-14);
        assert!((y[8] - 0.12557802364956783121).abs() < 1e-14);
    }
}
