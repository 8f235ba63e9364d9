//! Machine constants and the `RoundoffFloat` trait.
//!
//! Every kernel is generic over this trait so the same summation or
//! recurrence can be replayed in single and double precision.

use num_traits::Float;

/// Floating-point trait for the summation and recurrence kernels.
///
/// Implemented for `f64` and `f32`. Provides the machine constants the
/// kernels need for truncation and overflow control.
pub trait RoundoffFloat:
    Float + core::fmt::Debug + core::fmt::Display + core::fmt::LowerExp + 'static
{
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number.
    const MACH_TINY: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    fn from_f64(x: f64) -> Self;

    /// Conversion of a term index or recurrence order.
    ///
    /// Exact for indices up to 2^53 (f64) or 2^24 (f32); beyond that the
    /// index itself is rounded, which is part of what a summation in that
    /// precision experiences.
    #[inline]
    fn from_index(n: usize) -> Self {
        Self::from_f64(n as f64)
    }

    /// Magnitude above which the downward recurrence rescales its table.
    ///
    /// sqrt(MACH_HUGE), so one more recurrence step cannot overflow.
    fn rescale_threshold() -> Self;
}

impl RoundoffFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn rescale_threshold() -> f64 {
        1.3407807929942596e+154
    } // sqrt(MACH_HUGE)
}

#[allow(clippy::excessive_precision)]
impl RoundoffFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn rescale_threshold() -> f32 {
        1.8446743e+19
    } // sqrt(MACH_HUGE)
}
