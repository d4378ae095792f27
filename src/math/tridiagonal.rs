//! Tension-dependent tridiagonal system for the second derivatives
//!
//! Continuity of the first derivative at every interior sample, plus one
//! slope condition at each end, gives a symmetric tridiagonal system in the
//! per-sample second derivatives. Each segment contributes a [`TermPair`] to
//! the two rows it touches. The system is reduced with the Thomas algorithm
//! while the segments are swept, so invalid spacing aborts the solve before
//! any result exists.

use crate::io::configuration::EXPONENT_SCALING_THRESHOLD;
use crate::io::error::{Result, SplineError, non_monotonic};
use crate::math::coefficient::BoundaryCoefficient;
use crate::math::hyperbolic::{cosh_ratio, coshm, ratio_to_sinh, sinhm};
use crate::spline::boundary::BoundaryMode;

/// Contribution of one segment to the tridiagonal system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermPair {
    /// Added to the diagonal of both rows the segment touches
    pub diagonal: f64,
    /// Off-diagonal coupling between the segment's two samples
    pub off_diagonal: f64,
}

impl TermPair {
    /// Terms for a segment of length `del` under scaled tension `sigma`
    ///
    /// Zero tension gives the cubic spline terms `del / 3` and `del / 6`;
    /// positive tension gives their hyperbolic generalisation, which tends to
    /// the same values as `sigma` goes to zero. Both stay finite however
    /// large `sigma * del` grows.
    pub fn new(sigma: f64, del: f64) -> Self {
        if sigma == 0.0 {
            return Self {
                diagonal: del / 3.0,
                off_diagonal: del / 6.0,
            };
        }

        let sigdel = sigma * del;
        if sigdel >= EXPONENT_SCALING_THRESHOLD {
            // (x coth x - 1) and (1 - x / sinh x) over sigma^2 del
            let scale = sigma * sigma * del;
            return Self {
                diagonal: sigdel.mul_add(cosh_ratio(sigdel, sigdel), -1.0) / scale,
                off_diagonal: (1.0 - ratio_to_sinh(sigdel)) / scale,
            };
        }

        let sinhm_sigdel = sinhm(sigdel);
        let denom = sigma * sigma * del * (sigdel + sinhm_sigdel);

        Self {
            diagonal: sigdel.mul_add(coshm(sigdel), -sinhm_sigdel) / denom,
            off_diagonal: sinhm_sigdel / denom,
        }
    }
}

/// A validated segment: its term pair and first-difference slope
#[derive(Debug, Clone, Copy)]
struct Segment {
    terms: TermPair,
    slope: f64,
}

impl Segment {
    /// Builds the segment ending at sample `index`
    ///
    /// Fails on a non-positive (or `NaN`) length.
    fn new(sigma: f64, index: usize, (x0, x1): (f64, f64), (y0, y1): (f64, f64)) -> Result<Self> {
        let del = x1 - x0;
        if del.is_nan() || del <= 0.0 {
            return Err(non_monotonic(index, x0, x1));
        }

        Ok(Self {
            terms: TermPair::new(sigma, del),
            slope: (y1 - y0) / del,
        })
    }
}

/// Solve for the second derivative at every sample
///
/// `sigma` is the already scaled, non-negative tension. `left_slope` and
/// `right_slope` are read only when `mode` says they are given; missing slopes
/// are estimated from the boundary samples.
///
/// # Errors
///
/// Returns an error if:
/// - `x_values` and `y_values` have different lengths
/// - Fewer than 2 samples are provided
/// - `x_values` is not strictly increasing, either end to end or on any
///   segment met during the sweep
pub fn solve(
    sigma: f64,
    x_values: &[f64],
    y_values: &[f64],
    left_slope: f64,
    right_slope: f64,
    mode: BoundaryMode,
) -> Result<Vec<f64>> {
    if x_values.len() != y_values.len() {
        return Err(SplineError::LengthMismatch {
            x_len: x_values.len(),
            y_len: y_values.len(),
        });
    }

    let n = x_values.len();
    let (Some(&first_x), Some(&last_x)) = (x_values.first(), x_values.last()) else {
        return Err(SplineError::InsufficientSamples { count: n });
    };
    if n < 2 {
        return Err(SplineError::InsufficientSamples { count: n });
    }
    if last_x.is_nan() || last_x <= first_x {
        return Err(non_monotonic(n - 1, first_x, last_x));
    }

    let (left, right) =
        resolve_boundary_slopes(sigma, x_values, y_values, left_slope, right_slope, mode)?;

    sweep(sigma, x_values, y_values, left, right)
}

/// Effective endpoint slopes under `mode`
fn resolve_boundary_slopes(
    sigma: f64,
    x_values: &[f64],
    y_values: &[f64],
    left_slope: f64,
    right_slope: f64,
    mode: BoundaryMode,
) -> Result<(f64, f64)> {
    if mode == BoundaryMode::NeitherGiven
        && let Some(slopes) = three_point_slopes(sigma, x_values, y_values)
    {
        return Ok(slopes);
    }

    // Two samples leave no room for a three-point estimate, so mode 3 lands here too
    let left = if mode.left_given() {
        left_slope
    } else {
        leading_secant(x_values, y_values)?
    };
    let right = if mode.right_given() {
        right_slope
    } else {
        trailing_secant(x_values, y_values)?
    };

    Ok((left, right))
}

/// Three-point slope estimates at both ends, when there are three samples
fn three_point_slopes(sigma: f64, x_values: &[f64], y_values: &[f64]) -> Option<(f64, f64)> {
    let ([x0, x1, x2, ..], [y0, y1, y2, ..]) = (x_values, y_values) else {
        return None;
    };
    let ([.., xa, xb, xc], [.., ya, yb, yc]) = (x_values, y_values) else {
        return None;
    };

    let first = BoundaryCoefficient::three_term(x1 - x0, x2 - x0, sigma);
    let last = BoundaryCoefficient::three_term(-(xc - xb), -(xc - xa), sigma);

    Some((first.slope(&[*y0, *y1, *y2]), last.slope(&[*yc, *yb, *ya])))
}

/// Two-point slope estimate at the first sample
fn leading_secant(x_values: &[f64], y_values: &[f64]) -> Result<f64> {
    match (x_values, y_values) {
        ([x0, x1, ..], [y0, y1, ..]) => {
            let delx1 = x1 - x0;
            let delx2 = delx1 + delx1;
            if delx1.is_nan() || delx1 <= 0.0 || delx2 <= delx1 {
                return Err(non_monotonic(1, *x0, *x1));
            }
            Ok(BoundaryCoefficient::two_term(delx1).slope(&[*y0, *y1]))
        }
        _ => Err(SplineError::InsufficientSamples {
            count: x_values.len(),
        }),
    }
}

/// Two-point slope estimate at the last sample
fn trailing_secant(x_values: &[f64], y_values: &[f64]) -> Result<f64> {
    match (x_values, y_values) {
        ([.., xa, xb], [.., ya, yb]) => {
            let delxn = xb - xa;
            let delxnm = delxn + delxn;
            if delxn.is_nan() || delxn <= 0.0 || delxnm <= delxn {
                return Err(non_monotonic(x_values.len() - 1, *xa, *xb));
            }
            Ok(BoundaryCoefficient::two_term(-delxn).slope(&[*yb, *ya]))
        }
        _ => Err(SplineError::InsufficientSamples {
            count: x_values.len(),
        }),
    }
}

/// Forward elimination over the segments followed by back substitution
fn sweep(
    sigma: f64,
    x_values: &[f64],
    y_values: &[f64],
    left_slope: f64,
    right_slope: f64,
) -> Result<Vec<f64>> {
    let n = x_values.len();
    let abscissae = x_values.iter().zip(x_values.iter().skip(1));
    let ordinates = y_values.iter().zip(y_values.iter().skip(1));
    let mut segments = abscissae
        .zip(ordinates)
        .enumerate()
        .map(|(i, ((&x0, &x1), (&y0, &y1)))| Segment::new(sigma, i + 1, (x0, x1), (y0, y1)));

    let Some(first) = segments.next() else {
        return Err(SplineError::InsufficientSamples { count: n });
    };
    let mut prior = first?;

    // Reduced right-hand side and elimination multipliers
    let mut reduced = Vec::with_capacity(n);
    let mut multipliers = Vec::with_capacity(n - 1);

    let mut last_reduced = (prior.slope - left_slope) / prior.terms.diagonal;
    let mut last_multiplier = prior.terms.off_diagonal / prior.terms.diagonal;
    reduced.push(last_reduced);
    multipliers.push(last_multiplier);

    for segment in segments {
        let next = segment?;
        let pivot = prior.terms.off_diagonal.mul_add(
            -last_multiplier,
            prior.terms.diagonal + next.terms.diagonal,
        );
        last_reduced = prior
            .terms
            .off_diagonal
            .mul_add(-last_reduced, next.slope - prior.slope)
            / pivot;
        last_multiplier = next.terms.off_diagonal / pivot;
        reduced.push(last_reduced);
        multipliers.push(last_multiplier);
        prior = next;
    }

    let pivot = prior
        .terms
        .off_diagonal
        .mul_add(-last_multiplier, prior.terms.diagonal);
    let mut next_value = prior
        .terms
        .off_diagonal
        .mul_add(-last_reduced, right_slope - prior.slope)
        / pivot;
    reduced.push(next_value);

    for (value, multiplier) in reduced.iter_mut().rev().skip(1).zip(multipliers.iter().rev()) {
        *value = multiplier.mul_add(-next_value, *value);
        next_value = *value;
    }

    Ok(reduced)
}
