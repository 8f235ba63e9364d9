//! Floating-point error accumulation in summation and recurrence.
//!
//! Three independent experiments, each computing the same quantity along
//! two or three paths that agree in exact arithmetic and measuring how far
//! the floating-point results drift apart:
//!
//! - [`harmonic`]: Σ 1/k added in ascending vs. descending order.
//! - [`series`]: three equivalent forms of a series with limit 1 − ln 2.
//! - [`sphj`]: spherical Bessel functions j_l(x) by upward vs. downward
//!   recurrence, checked against [`reference::spherical_jn`].
//!
//! All kernels are generic over [`RoundoffFloat`] (`f32`, `f64`) so each
//! experiment can be replayed in single precision.
//!
//! # Example
//!
//! ```
//! use roundoff::{bessel_down, bessel_up, spherical_jn, StartOrder};
//!
//! let up = bessel_up(0.1_f64, 10).unwrap();
//! let down = bessel_down(0.1_f64, 10, StartOrder::default()).unwrap();
//! let exact = spherical_jn(10, 0.1_f64).unwrap();
//!
//! assert!(((down[10] - exact) / exact).abs() < 1e-13);
//! assert!(((up[10] - exact) / exact).abs() > 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub(crate) mod algo;
pub mod harmonic;
pub mod machine;
pub mod reference;
#[cfg(feature = "alloc")]
pub mod report;
pub mod series;
pub mod sphj;
#[cfg(feature = "alloc")]
pub mod sweep;
pub mod types;
pub mod utils;

pub use algo::constants::{DEFAULT_START_MARGIN, SERIES_LIMIT};
pub use machine::RoundoffFloat;
pub use types::{Error, SeriesErrors, StartOrder};

// ── Summation kernels ──

pub use harmonic::{relative_difference, sum_down, sum_up};
#[cfg(feature = "alloc")]
pub use series::series_relative_errors;
pub use series::{series_s1, series_s2, series_s3};

// ── Recurrence kernels ──

pub use reference::spherical_jn;
#[cfg(feature = "alloc")]
pub use reference::spherical_jn_table;
#[cfg(feature = "alloc")]
pub use sphj::{bessel_down, bessel_up};
pub use sphj::{bessel_down_into, bessel_up_into};

// ── Sweeps and tables ──

#[cfg(feature = "alloc")]
pub use report::{
    bessel_comparison, harmonic_table, series_table, BesselRow, HarmonicRow, SeriesRow,
};
#[cfg(feature = "alloc")]
pub use sweep::logspace_orders;
