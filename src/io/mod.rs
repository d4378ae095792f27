//! Input/output operations and error handling

/// Command-line demonstration driver
pub mod cli;
/// Numerical constants and demonstration defaults
pub mod configuration;
/// Error types for fitting and output
pub mod error;
/// Comparison table output
pub mod table;
