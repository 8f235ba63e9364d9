//! Internal recurrence and series routines.
//!
//! All functions are `pub(crate)`; the public entry points in
//! [`sphj`](crate::sphj) and [`reference`](crate::reference) validate the
//! argument before calling in here.
//!
//! # Output convention
//!
//! Table routines write orders `0..y.len()` into a caller-provided slice
//! instead of allocating; [`sphj::bessel_up_into`](crate::sphj::bessel_up_into)
//! and [`sphj::bessel_down_into`](crate::sphj::bessel_down_into) expose them
//! without `alloc`. An empty slice is a no-op.

pub(crate) mod constants;

// Recurrences
pub(crate) mod miller;
pub(crate) mod upward;

// Reference evaluation
pub(crate) mod series_j;
