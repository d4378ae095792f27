//! Tests for boundary mode codes and parsing

#[cfg(test)]
mod tests {
    use tension_spline::{BoundaryMode, SplineError};

    // Tests every mode survives a round trip through its code
    // Verified by swapping the codes of the two one-sided modes
    #[test]
    fn test_codes_round_trip() {
        for (expected_code, mode) in BoundaryMode::ALL.iter().enumerate() {
            assert_eq!(usize::from(mode.code()), expected_code);
            assert_eq!(BoundaryMode::try_from(mode.code()).ok(), Some(*mode));
        }
        assert_eq!(BoundaryMode::try_from(1).ok(), Some(BoundaryMode::LeftGiven));
        assert_eq!(BoundaryMode::try_from(2).ok(), Some(BoundaryMode::RightGiven));
    }

    // Tests codes outside 0..=3 are rejected as invalid parameters
    // Verified by mapping unknown codes to the default mode
    #[test]
    fn test_unknown_code_rejected() {
        let err = BoundaryMode::try_from(4).expect_err("code 4 does not exist");
        assert!(matches!(
            err,
            SplineError::InvalidParameter {
                parameter: "boundary_mode",
                ..
            }
        ));
    }

    // Tests parsing from text accepts codes and rejects anything else
    // Verified by ignoring the parse error
    #[test]
    fn test_from_str() {
        assert_eq!(" 0 ".parse::<BoundaryMode>().ok(), Some(BoundaryMode::BothGiven));
        assert_eq!("3".parse::<BoundaryMode>().ok(), Some(BoundaryMode::NeitherGiven));
        assert!("7".parse::<BoundaryMode>().is_err());
        assert!("left".parse::<BoundaryMode>().is_err());
        assert!("3 estimated".parse::<BoundaryMode>().is_err());
    }

    // Tests every mode parses back from its displayed text
    // Verified by dropping the description handling from parsing
    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in BoundaryMode::ALL {
            assert_eq!(mode.to_string().parse::<BoundaryMode>().ok(), Some(mode));
        }
    }

    // Tests which slopes each mode takes from the caller
    // Verified by inverting the right-slope check
    #[test]
    fn test_given_slopes() {
        assert!(BoundaryMode::BothGiven.left_given());
        assert!(BoundaryMode::BothGiven.right_given());
        assert!(BoundaryMode::LeftGiven.left_given());
        assert!(!BoundaryMode::LeftGiven.right_given());
        assert!(!BoundaryMode::RightGiven.left_given());
        assert!(BoundaryMode::RightGiven.right_given());
        assert!(!BoundaryMode::NeitherGiven.left_given());
        assert!(!BoundaryMode::NeitherGiven.right_given());
    }

    // Tests the default mode estimates both slopes and displays its code
    // Verified by changing the default variant
    #[test]
    fn test_default_and_display() {
        assert_eq!(BoundaryMode::default(), BoundaryMode::NeitherGiven);
        let text = BoundaryMode::default().to_string();
        assert!(text.starts_with('3'));
        assert!(text.contains("estimated"));
    }
}
