//! Power series for j_l(x), used by the reference evaluation.
//!
//! j_l(x) = x^l / (2l+1)!! · Σ_k (−x²/2)^k / (k! · (2l+3)(2l+5)···(2l+2k+1))
//!
//! Every term is a ratio of the previous one, so neither the double factorial
//! nor x^l is formed on its own. The series converges for all x, but for
//! |x| > 1 the terms grow before they shrink and cancellation loses digits
//! (about four of them for j_100(80)); the caller only uses it for |x| < 1.

use crate::machine::RoundoffFloat;

/// Hard cap on series terms. With |x| < 1 the ratio test falls below machine
/// epsilon well before this.
const MAX_TERMS: usize = 500;

/// Evaluate j_l(x) by its power series.
pub(crate) fn series_j<T: RoundoffFloat>(l: usize, x: T) -> T {
    let one = T::one();
    let half = T::from_f64(0.5);
    let tol = T::MACH_EPSILON;

    // x^l / (2l+1)!!
    let mut prefactor = one;
    for i in 1..=l {
        prefactor = prefactor * (x / T::from_index(2 * i + 1));
    }

    let neg_half_x2 = -(x * x) * half;
    let mut term = one;
    let mut sum = one;
    for k in 1..=MAX_TERMS {
        let denom = T::from_index(k) * T::from_index(2 * l + 2 * k + 1);
        term = term * neg_half_x2 / denom;
        sum = sum + term;
        if term.abs() <= tol * sum.abs() {
            break;
        }
    }

    prefactor * sum
}
