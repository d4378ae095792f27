//! Numerical constants and demonstration defaults

use crate::spline::boundary::BoundaryMode;

// Below this magnitude sinh(x) - x is summed as a series instead of subtracted
/// Switch-over point for the `sinh(x) - x` series
pub const SINHM_SERIES_THRESHOLD: f64 = 0.5;

// Above this argument e^(-2x) is below f64 resolution and sinh(x) nears overflow
/// Argument from which hyperbolic quotients are formed from decaying exponentials
pub const EXPONENT_SCALING_THRESHOLD: f64 = 20.0;

// Demonstration data: a sampled sine wave
/// Number of samples fitted by the demonstration
pub const DEFAULT_SAMPLES: usize = 2048;
/// Spacing between consecutive sample abscissae
pub const DEFAULT_SPACING: f64 = 0.05;
/// Tension applied by the demonstration
pub const DEFAULT_TENSION: f64 = 0.1;
/// Boundary mode used by the demonstration
pub const DEFAULT_BOUNDARY_MODE: BoundaryMode = BoundaryMode::NeitherGiven;

// Query layout reproduces the classic comparison table
/// Number of query points evaluated
pub const DEFAULT_QUERIES: usize = 1024;
/// Offset of the first query from the first sample
pub const FIRST_QUERY_OFFSET: f64 = 0.033_33;
/// Offset of every later query from its sample
pub const QUERY_OFFSET: f64 = 0.333_3;

/// Fixed seed for reproducible sample noise
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Header of the interpolated value row
pub const INTERPOLATED_HEADER: &str = "yvals; interp";
/// Header of the reference value row
pub const REFERENCE_HEADER: &str = "actual yvals";
/// Header of the query abscissa row
pub const QUERY_HEADER: &str = "xvals";
