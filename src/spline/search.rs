//! Segment location for evaluation queries

/// Index `i` of the segment `[x_values[i], x_values[i + 1]]` holding `value`
///
/// Queries left of the domain map to the first segment and queries right of
/// it to the last, so the caller extrapolates from the nearest boundary
/// segment instead of failing. A query landing exactly on an interior sample
/// resolves to the segment starting there, while the right endpoint belongs
/// to the last segment. `NaN` resolves to the last segment.
///
/// Expects at least two strictly increasing abscissae; shorter input yields 0.
pub fn locate_segment(x_values: &[f64], value: f64) -> usize {
    let n = x_values.len();
    if n < 2 {
        return 0;
    }

    let mut klo = 0;
    let mut khi = n - 1;
    while khi - klo > 1 {
        let k = usize::midpoint(khi, klo);
        match x_values.get(k) {
            Some(x_k) if *x_k > value => khi = k,
            _ => klo = k,
        }
    }

    klo
}
