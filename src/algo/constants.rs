//! Shared constants used by the kernels.

#![allow(clippy::excessive_precision)]

/// Default distance between `lmax` and the downward recurrence's starting order.
///
/// Empirical: enough for |x| up to roughly 10 at `lmax` = 25 in f64. Larger
/// arguments need a larger margin (see [`StartOrder`](crate::StartOrder)).
pub const DEFAULT_START_MARGIN: usize = 15;

/// 1 − ln 2, the limit of all three series forms.
pub const SERIES_LIMIT: f64 = 3.06852819440054690583e-01;
