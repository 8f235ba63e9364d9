//! Three summations of the series with limit 1 − ln 2.
//!
//! All three are equal in exact arithmetic:
//!
//! - S1(n) = Σ_{k=1}^{2n} (−1)^k · k/(k+1)
//! - S2(n) = −Σ_{j=1}^{n} (2j−1)/(2j) + Σ_{j=1}^{n} (2j)/(2j+1)
//! - S3(n) = Σ_{k=1}^{n} 1/(2k(2k+1))
//!
//! S1 and S2 add terms of magnitude close to 1 to reach a result near 0.3; S2
//! additionally cancels two sums that both grow like n. S3 adds small positive
//! terms only and serves as the baseline.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::machine::RoundoffFloat;
#[cfg(feature = "alloc")]
use crate::types::SeriesErrors;
use crate::types::Error;
#[cfg(feature = "alloc")]
use crate::utils::relative_error;

/// Alternating form, 2n terms.
///
/// Returns `Error::InvalidArgument` for n = 0.
pub fn series_s1<T: RoundoffFloat>(n: usize) -> Result<T, Error> {
    if n < 1 {
        return Err(Error::InvalidArgument);
    }
    let one = T::one();
    let mut total = T::zero();
    for k in 1..=2 * n {
        let fk = T::from_index(k);
        let sign = if k % 2 == 0 { one } else { -one };
        total = total + sign * fk / (fk + one);
    }
    Ok(total)
}

/// Difference of two monotone sums of n terms each.
///
/// Returns `Error::InvalidArgument` for n = 0.
pub fn series_s2<T: RoundoffFloat>(n: usize) -> Result<T, Error> {
    if n < 1 {
        return Err(Error::InvalidArgument);
    }
    let mut odd_over_even = T::zero();
    let mut even_over_odd = T::zero();
    for j in 1..=n {
        let two_j = T::from_index(2 * j);
        odd_over_even = odd_over_even + T::from_index(2 * j - 1) / two_j;
        even_over_odd = even_over_odd + two_j / T::from_index(2 * j + 1);
    }
    Ok(-odd_over_even + even_over_odd)
}

/// Direct form, n positive terms.
///
/// Returns `Error::InvalidArgument` for n = 0.
pub fn series_s3<T: RoundoffFloat>(n: usize) -> Result<T, Error> {
    if n < 1 {
        return Err(Error::InvalidArgument);
    }
    let one = T::one();
    let mut result = T::zero();
    for k in 1..=n {
        let denominator = T::from_index(2 * k) * T::from_index(2 * k + 1);
        result = result + one / denominator;
    }
    Ok(result)
}

/// Relative errors of S1 and S2 against S3 for each n in `ns`.
///
/// S3(n) > 0 for every n >= 1, so the zero-baseline guard in
/// [`relative_error`] cannot trigger for valid input.
/// Returns `Error::InvalidArgument` if any n is 0.
#[cfg(feature = "alloc")]
pub fn series_relative_errors<T: RoundoffFloat>(
    ns: &[usize],
) -> Result<Vec<SeriesErrors<T>>, Error> {
    ns.iter()
        .map(|&n| {
            let s1 = series_s1::<T>(n)?;
            let s2 = series_s2::<T>(n)?;
            let s3 = series_s3::<T>(n)?;
            Ok(SeriesErrors {
                n,
                err1: relative_error(s1, s3)?,
                err2: relative_error(s2, s3)?,
            })
        })
        .collect()
}
