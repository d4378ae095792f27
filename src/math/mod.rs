//! Numerical kernels behind the tension spline

/// One-sided boundary slope estimates
pub mod coefficient;
/// Cancellation-free hyperbolic differences
pub mod hyperbolic;
/// Tension-dependent tridiagonal assembly and solve
pub mod tridiagonal;
