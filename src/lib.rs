//! Spline under tension interpolation after Cline and Renka
//!
//! A tension parameter blends an ordinary cubic spline (zero tension) with
//! hyperbolic pieces that pull the curve towards the piecewise linear
//! interpolant, suppressing overshoot near sharp changes in the data.
//! Fitting solves one tridiagonal system for the second derivatives at the
//! samples; evaluation is closed form per segment.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Numerical kernels: boundary coefficients, hyperbolic helpers, tridiagonal solve
pub mod math;
/// Spline fitting, boundary modes and segment lookup
pub mod spline;

pub use io::error::{Result, SplineError};
pub use spline::boundary::BoundaryMode;
pub use spline::tension::SplineUnderTension;
