//! Core types shared by the summation and recurrence kernels.

use core::fmt;

use crate::algo::constants::DEFAULT_START_MARGIN;
use crate::machine::RoundoffFloat;

/// Starting order of the downward (Miller) recurrence.
///
/// The recurrence is seeded at `m_start` and `m_start + 1` with arbitrary
/// values, so `m_start` must lie strictly above the highest order requested.
/// How far above is an empirical trade-off: the margin has to be large enough
/// for the seed's error to decay before the recurrence reaches `lmax`, and the
/// required margin grows with |x|. The kernel never adapts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartOrder {
    /// Start at `lmax + margin`. The margin must be at least 1.
    Margin(usize),
    /// Start at a fixed order, which must exceed `lmax`.
    Explicit(usize),
}

impl StartOrder {
    /// Resolve the starting order for a table of orders `0..=lmax`.
    pub(crate) fn resolve(self, lmax: usize) -> Result<usize, Error> {
        let m_start = match self {
            StartOrder::Margin(margin) => lmax.checked_add(margin).ok_or(Error::InvalidArgument)?,
            StartOrder::Explicit(m_start) => m_start,
        };
        if m_start <= lmax {
            return Err(Error::InvalidArgument);
        }
        Ok(m_start)
    }
}

impl Default for StartOrder {
    /// `Margin(DEFAULT_START_MARGIN)`.
    fn default() -> Self {
        StartOrder::Margin(DEFAULT_START_MARGIN)
    }
}

/// Relative errors of the two alternative series forms at one `n`,
/// measured against the direct sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesErrors<T: RoundoffFloat> {
    /// Number of paired terms.
    pub n: usize,
    /// |S1 − S3| / S3 (alternating form).
    pub err1: T,
    /// |S2 − S3| / S3 (difference of two monotone sums).
    pub err2: T,
}

/// Error type for the summation and recurrence kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Invalid input (e.g., n = 0, x = 0 or non-finite, m_start <= lmax).
    InvalidArgument,
    /// A relative formula or normalization divided by an exact zero.
    UndefinedResult,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => {
                write!(f, "invalid argument: check n, x and starting order constraints")
            }
            Error::UndefinedResult => {
                write!(f, "undefined result: denominator is exactly zero")
            }
        }
    }
}

impl core::error::Error for Error {}
