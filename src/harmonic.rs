//! Harmonic partial sums in ascending and descending term order.
//!
//! Both orders add the same terms 1/k. Ascending order adds ever smaller terms
//! to an ever larger accumulator, so the low bits of late terms are lost;
//! descending order builds up the small terms first. The gap between the two
//! results is pure rounding.

use crate::machine::RoundoffFloat;
use crate::types::Error;
use crate::utils;

/// Σ 1/k for k = 1, 2, ..., n.
///
/// Returns `Error::InvalidArgument` for n = 0.
pub fn sum_up<T: RoundoffFloat>(n: usize) -> Result<T, Error> {
    if n < 1 {
        return Err(Error::InvalidArgument);
    }
    let one = T::one();
    let mut sum = T::zero();
    for k in 1..=n {
        sum = sum + one / T::from_index(k);
    }
    Ok(sum)
}

/// Σ 1/k for k = n, n−1, ..., 1.
///
/// Returns `Error::InvalidArgument` for n = 0.
pub fn sum_down<T: RoundoffFloat>(n: usize) -> Result<T, Error> {
    if n < 1 {
        return Err(Error::InvalidArgument);
    }
    let one = T::one();
    let mut sum = T::zero();
    for k in (1..=n).rev() {
        sum = sum + one / T::from_index(k);
    }
    Ok(sum)
}

/// `|S_up − S_down| / ((S_up + S_down) / 2)` for the first `n` terms.
///
/// Returns `Error::InvalidArgument` for n = 0 and `Error::UndefinedResult`
/// if the two sums add to exactly zero.
pub fn relative_difference<T: RoundoffFloat>(n: usize) -> Result<T, Error> {
    let up = sum_up::<T>(n)?;
    let down = sum_down::<T>(n)?;
    utils::relative_difference(up, down)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_term_is_exactly_one() {
        assert_eq!(sum_up::<f64>(1), Ok(1.0));
        assert_eq!(sum_down::<f64>(1), Ok(1.0));
        assert_eq!(relative_difference::<f64>(1), Ok(0.0));
    }

    #[test]
    fn zero_terms_is_rejected() {
        assert_eq!(sum_up::<f64>(0), Err(Error::InvalidArgument));
        assert_eq!(sum_down::<f32>(0), Err(Error::InvalidArgument));
        assert_eq!(relative_difference::<f64>(0), Err(Error::InvalidArgument));
    }

    #[test]
    fn ten_terms() {
        // mpmath: H_10 = 2.9289682539682539683
        let up = sum_up::<f64>(10).unwrap();
        let down = sum_down::<f64>(10).unwrap();
        assert!((up - 2.9289682539682539683).abs() < 1e-15);
        assert!((down - 2.9289682539682539683).abs() < 1e-15);
    }

    #[test]
    fn double_precision_difference_stays_at_rounding_level() {
        for n in [10, 100, 1000, 10000, 100000] {
            let d = relative_difference::<f64>(n).unwrap();
            assert!(d >= 0.0);
            assert!(d < 1e-12, "n = {n}: {d}");
        }
    }

    #[test]
    fn single_precision_orders_diverge() {
        // mpmath: H_1000000 = 14.392726722865723631. Ascending f32 stalls
        // near 14.357; descending stays within 1e-4 of the true value.
        let up = sum_up::<f32>(1_000_000).unwrap();
        let down = sum_down::<f32>(1_000_000).unwrap();
        assert!(((down as f64) - 14.392726722865723631).abs() < 1e-3);
        assert!(((up as f64) - 14.392726722865723631).abs() > 1e-2);
        assert!(relative_difference::<f32>(1_000_000).unwrap() > 1e-3);
    }
}
