//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tension_spline::SplineError;
    use tension_spline::io::error::{invalid_parameter, non_monotonic};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SplineError::FileSystem {
            path: "/tmp/rows.txt".into(),
            operation: "create",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/tmp/rows.txt"));
        assert!(message.contains("create"));
        assert!(message.contains("file not found"));
    }

    // Tests fitting errors carry no source
    // Verified by returning self as source
    #[test]
    fn test_fitting_errors_have_no_source() {
        assert!(SplineError::InsufficientSamples { count: 1 }.source().is_none());
        assert!(non_monotonic(2, 1.0, 1.0).source().is_none());
    }

    // Tests InsufficientSamples formatting
    // Verified by omitting the count from message
    #[test]
    fn test_insufficient_samples_error() {
        let message = SplineError::InsufficientSamples { count: 1 }.to_string();
        assert!(message.contains("Insufficient samples"));
        assert!(message.contains("got 1"));
    }

    // Tests NonMonotonicDomain formatting includes the offending pair
    // Verified by omitting the index from message
    #[test]
    fn test_non_monotonic_error() {
        let error = non_monotonic(3, 2.5, 2.0);
        assert!(matches!(
            error,
            SplineError::NonMonotonicDomain { index: 3, .. }
        ));

        let message = error.to_string();
        assert!(message.contains("not strictly increasing"));
        assert!(message.contains("index 3"));
        assert!(message.contains("2.5"));
    }

    // Tests LengthMismatch formatting
    // Verified by swapping the lengths in the message
    #[test]
    fn test_length_mismatch_error() {
        let message = SplineError::LengthMismatch { x_len: 4, y_len: 3 }.to_string();
        assert!(message.contains("4 abscissae"));
        assert!(message.contains("3 ordinates"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tension", &f64::INFINITY, &"tension must be finite");

        let message = error.to_string();
        assert!(message.contains("tension"));
        assert!(message.contains("inf"));
        assert!(message.contains("must be finite"));
    }

    // Tests I/O errors convert into file system errors
    // Verified by dropping the source in the conversion
    #[test]
    fn test_from_io_error() {
        let error: SplineError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(error, SplineError::FileSystem { .. }));
        assert!(error.source().is_some());
    }
}
