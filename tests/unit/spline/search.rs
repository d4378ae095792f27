//! Tests for segment location

#[cfg(test)]
mod tests {
    use tension_spline::spline::search::locate_segment;

    const XS: [f64; 5] = [0.0, 1.0, 2.5, 4.0, 7.0];

    // Tests values strictly inside segments
    // Verified by returning the upper bound of the bisection
    #[test]
    fn test_interior_values() {
        assert_eq!(locate_segment(&XS, 0.5), 0);
        assert_eq!(locate_segment(&XS, 1.7), 1);
        assert_eq!(locate_segment(&XS, 3.9), 2);
        assert_eq!(locate_segment(&XS, 6.99), 3);
    }

    // Tests values on samples resolve to the segment starting there, except the last sample
    // Verified by comparing with >= in the bisection
    #[test]
    fn test_values_on_samples() {
        assert_eq!(locate_segment(&XS, 0.0), 0);
        assert_eq!(locate_segment(&XS, 1.0), 1);
        assert_eq!(locate_segment(&XS, 2.5), 2);
        assert_eq!(locate_segment(&XS, 4.0), 3);
        assert_eq!(locate_segment(&XS, 7.0), 3);
    }

    // Tests out-of-domain values clamp to the boundary segments
    // Verified by removing the clamp to the last segment
    #[test]
    fn test_clamps_outside_domain() {
        assert_eq!(locate_segment(&XS, -100.0), 0);
        assert_eq!(locate_segment(&XS, 1e9), 3);
        assert_eq!(locate_segment(&XS, f64::NEG_INFINITY), 0);
        assert_eq!(locate_segment(&XS, f64::INFINITY), 3);
    }

    // Tests every located segment satisfies x[i] <= value <= x[i + 1] on a dense sweep
    // Verified by shifting the midpoint computation
    #[test]
    fn test_contract_on_dense_sweep() {
        let xs: Vec<f64> = (0..37).map(|i| f64::from(i).powf(1.3)).collect();
        let last = xs[xs.len() - 1];

        for step in 0..=1000 {
            let value = last * f64::from(step) / 1000.0;
            let i = locate_segment(&xs, value);
            assert!(i + 1 < xs.len());
            assert!(
                xs[i] <= value && value <= xs[i + 1],
                "{value} placed in [{}, {}]",
                xs[i],
                xs[i + 1]
            );
        }
    }

    // Tests degenerate inputs never panic
    // Verified by subtracting one from an empty length
    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(locate_segment(&[], 1.0), 0);
        assert_eq!(locate_segment(&[3.0], 1.0), 0);
        assert_eq!(locate_segment(&[0.0, 1.0], 5.0), 0);
        assert_eq!(locate_segment(&XS, f64::NAN), 3);
    }
}
