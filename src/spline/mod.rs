//! Spline fitting and evaluation

/// Endpoint slope policies
pub mod boundary;
/// Segment location for queries
pub mod search;
/// The spline under tension itself
pub mod tension;
