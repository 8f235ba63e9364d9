//! Result tables for the three experiments.
//!
//! Each row type renders as one tab-separated line and carries a matching
//! `HEADER`. Relative errors that are undefined (zero denominator) are kept as
//! `None` and printed as `undefined`.

use alloc::vec::Vec;
use core::fmt;

use crate::harmonic::{sum_down, sum_up};
use crate::machine::RoundoffFloat;
use crate::reference::spherical_jn_table;
use crate::series::{series_s1, series_s2, series_s3};
use crate::sphj::{bessel_down, bessel_up};
use crate::types::{Error, StartOrder};
use crate::utils::{relative_difference, relative_error};

struct Deviation<T>(Option<T>);

impl<T: RoundoffFloat> fmt::Display for Deviation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2e}"),
            None => write!(f, "undefined"),
        }
    }
}

/// One `n` of the harmonic-sum experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicRow<T: RoundoffFloat> {
    pub n: usize,
    pub up: T,
    pub down: T,
    /// Symmetric relative difference of `up` and `down`.
    pub difference: Option<T>,
}

impl<T: RoundoffFloat> HarmonicRow<T> {
    pub const HEADER: &'static str = "N\tsum_up\t\t\tsum_down\t\tdifference";
}

impl<T: RoundoffFloat> fmt::Display for HarmonicRow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.16e}\t{:.16e}\t{}",
            self.n,
            self.up,
            self.down,
            Deviation(self.difference)
        )
    }
}

/// One `n` of the series-comparison experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRow<T: RoundoffFloat> {
    pub n: usize,
    pub s1: T,
    pub s2: T,
    pub s3: T,
    pub err1: Option<T>,
    pub err2: Option<T>,
}

impl<T: RoundoffFloat> SeriesRow<T> {
    pub const HEADER: &'static str = "N\tS1\t\tS2\t\tS3\t\tErr1\t\tErr2";
}

impl<T: RoundoffFloat> fmt::Display for SeriesRow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.8}\t{:.8}\t{:.8}\t{}\t{}",
            self.n,
            self.s1,
            self.s2,
            self.s3,
            Deviation(self.err1),
            Deviation(self.err2)
        )
    }
}

/// One order `l` of the recurrence comparison at a fixed x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BesselRow<T: RoundoffFloat> {
    pub l: usize,
    pub up: T,
    pub down: T,
    pub reference: T,
    /// Relative error of `up` against `reference`.
    pub err_up: Option<T>,
    /// Relative error of `down` against `reference`.
    pub err_down: Option<T>,
}

impl<T: RoundoffFloat> BesselRow<T> {
    pub const HEADER: &'static str = "l\tUp\t\tDown\t\tReference\tErrUp\t\tErrDown";
}

impl<T: RoundoffFloat> fmt::Display for BesselRow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.6e}\t{:.6e}\t{:.6e}\t{}\t{}",
            self.l,
            self.up,
            self.down,
            self.reference,
            Deviation(self.err_up),
            Deviation(self.err_down)
        )
    }
}

/// Ascending and descending harmonic sums for each n in `ns`.
///
/// Returns `Error::InvalidArgument` if any n is 0.
pub fn harmonic_table<T: RoundoffFloat>(ns: &[usize]) -> Result<Vec<HarmonicRow<T>>, Error> {
    ns.iter()
        .map(|&n| {
            let up = sum_up::<T>(n)?;
            let down = sum_down::<T>(n)?;
            Ok(HarmonicRow {
                n,
                up,
                down,
                difference: relative_difference(up, down).ok(),
            })
        })
        .collect()
}

/// The three series forms and their errors for each n in `ns`.
///
/// Returns `Error::InvalidArgument` if any n is 0.
pub fn series_table<T: RoundoffFloat>(ns: &[usize]) -> Result<Vec<SeriesRow<T>>, Error> {
    ns.iter()
        .map(|&n| {
            let s1 = series_s1::<T>(n)?;
            let s2 = series_s2::<T>(n)?;
            let s3 = series_s3::<T>(n)?;
            Ok(SeriesRow {
                n,
                s1,
                s2,
                s3,
                err1: relative_error(s1, s3).ok(),
                err2: relative_error(s2, s3).ok(),
            })
        })
        .collect()
}

/// Upward, downward and reference j_l(x) for l = 0..=lmax.
///
/// Returns the errors of [`bessel_up`] and [`bessel_down`].
pub fn bessel_comparison<T: RoundoffFloat>(
    x: T,
    lmax: usize,
    start: StartOrder,
) -> Result<Vec<BesselRow<T>>, Error> {
    let up = bessel_up(x, lmax)?;
    let down = bessel_down(x, lmax, start)?;
    let reference = spherical_jn_table(x, lmax)?;

    Ok(up
        .into_iter()
        .zip(down)
        .zip(reference)
        .enumerate()
        .map(|(l, ((up, down), reference))| BesselRow {
            l,
            up,
            down,
            reference,
            err_up: relative_error(up, reference).ok(),
            err_down: relative_error(down, reference).ok(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn harmonic_rows() {
        let rows = harmonic_table::<f64>(&[1, 10]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].up, 1.0);
        assert_eq!(rows[0].difference, Some(0.0));
        assert!(rows[1].to_string().starts_with("10\t2.92896825396825"));
        assert!(harmonic_table::<f64>(&[0]).is_err());
    }

    #[test]
    fn series_rows_render_six_columns() {
        let rows = series_table::<f64>(&[10, 100]).unwrap();
        let line = rows[0].to_string();
        assert_eq!(line.split('\t').count(), 6);
        assert!(line.starts_with("10\t0.28360955"));
        assert!(rows.iter().all(|r| r.err1.is_some() && r.err2.is_some()));
    }

    #[test]
    fn bessel_rows() {
        let rows = bessel_comparison(0.1_f64, 10, StartOrder::default()).unwrap();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].l, 0);
        assert!(rows[10].err_up.unwrap() > 1e-2);
        assert!(rows[10].err_down.unwrap() < 1e-13);
        assert_eq!(rows[3].to_string().split('\t').count(), 6);
    }

    #[test]
    fn bessel_reference_holds_past_large_argument() {
        // mpmath: j_60(50) = 1.339715305096215892e-4, j_100(80) = 4.5247964400094990568e-7
        let rows = bessel_comparison(50.0_f64, 60, StartOrder::default()).unwrap();
        let err = (rows[60].reference - 1.339715305096215892e-4).abs() / 1.339715305096215892e-4;
        assert!(err < 1e-14, "{err}");

        let rows = bessel_comparison(80.0_f64, 100, StartOrder::default()).unwrap();
        let expected = 4.5247964400094990568e-7;
        let err = (rows[100].reference - expected).abs() / expected;
        assert!(err < 1e-14, "{err}");
    }

    #[test]
    fn bessel_comparison_propagates_errors() {
        assert_eq!(
            bessel_comparison(0.0_f64, 5, StartOrder::default()),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn undefined_deviation_renders_as_text() {
        let row = HarmonicRow {
            n: 1,
            up: 0.0_f64,
            down: 0.0,
            difference: None,
        };
        assert!(row.to_string().ends_with("\tundefined"));
    }
}
