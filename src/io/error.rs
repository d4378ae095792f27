//! Error types for spline fitting and the demonstration driver

use std::fmt;
use std::path::PathBuf;

/// Main error type for all spline operations
#[derive(Debug)]
pub enum SplineError {
    /// Fewer than two samples were supplied
    InsufficientSamples {
        /// Number of samples actually supplied
        count: usize,
    },

    /// The abscissae are not strictly increasing
    ///
    /// Raised either by the up-front domain check or by the segment sweep
    /// of the tridiagonal solve, whichever sees the offending pair first
    NonMonotonicDomain {
        /// Index of the right-hand sample of the offending segment
        index: usize,
        /// Abscissa at `index - 1`
        left: f64,
        /// Abscissa at `index`
        right: f64,
    },

    /// Abscissa and ordinate sequences differ in length
    LengthMismatch {
        /// Number of abscissae
        x_len: usize,
        /// Number of ordinates
        y_len: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSamples { count } => {
                write!(f, "Insufficient samples in data: got {count}, need at least 2")
            }
            Self::NonMonotonicDomain { index, left, right } => {
                write!(
                    f,
                    "Data not strictly increasing at index {index} ({left} followed by {right})"
                )
            }
            Self::LengthMismatch { x_len, y_len } => {
                write!(
                    f,
                    "Sample length mismatch: {x_len} abscissae but {y_len} ordinates"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SplineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for spline results
pub type Result<T> = std::result::Result<T, SplineError>;

impl From<std::io::Error> for SplineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SplineError {
    SplineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a non-monotonic domain error for the segment ending at `index`
pub const fn non_monotonic(index: usize, left: f64, right: f64) -> SplineError {
    SplineError::NonMonotonicDomain { index, left, right }
}
