//! Cancellation-free hyperbolic differences used by the tension formulas
//!
//! Every tension-branch expression subtracts the leading Taylor terms of
//! `sinh` or `cosh`. Computed naively those differences lose most of their
//! significant digits once `sigma * del` becomes small, so both are evaluated
//! here in a form that stays accurate down to zero.
//!
//! Large arguments need the opposite care: the formulas only ever use
//! quotients of hyperbolic functions, and those are formed from decaying
//! exponentials so they stay finite long after `sinh` alone overflows.

use crate::io::configuration::{EXPONENT_SCALING_THRESHOLD, SINHM_SERIES_THRESHOLD};

/// `sinh(x) - x`
///
/// Uses the odd Taylor series below [`SINHM_SERIES_THRESHOLD`], where the
/// direct difference would cancel, and the direct form above it.
pub fn sinhm(x: f64) -> f64 {
    if x.abs() >= SINHM_SERIES_THRESHOLD {
        return x.sinh() - x;
    }

    // x^3/3! * (1 + x^2/(4*5) * (1 + x^2/(6*7) * (1 + ...)))
    let x2 = x * x;
    let tail = [20.0, 42.0, 72.0, 110.0, 156.0, 210.0]
        .iter()
        .rev()
        .fold(1.0, |acc, divisor| (x2 / divisor).mul_add(acc, 1.0));

    x * x2 / 6.0 * tail
}

/// `cosh(x) - 1`, evaluated as `2 sinh^2(x / 2)`
pub fn coshm(x: f64) -> f64 {
    let half = (x / 2.0).sinh();
    2.0 * half * half
}

/// `1 - e^(-2b)`, the common denominator of the scaled quotients
fn decay_complement(b: f64) -> f64 {
    -(-2.0 * b).exp_m1()
}

/// `sinh(a) / sinh(b)` for `b > 0`
///
/// From [`EXPONENT_SCALING_THRESHOLD`] on, both hyperbolic sines are divided
/// by `e^b / 2` first, so the quotient stays finite wherever it is
/// representable even though `sinh(b)` itself would overflow.
pub fn sinh_ratio(a: f64, b: f64) -> f64 {
    if b < EXPONENT_SCALING_THRESHOLD {
        return a.sinh() / b.sinh();
    }

    ((a - b).exp() - (-a - b).exp()) / decay_complement(b)
}

/// `cosh(a) / sinh(b)` for `b > 0`, scaled like [`sinh_ratio`]
pub fn cosh_ratio(a: f64, b: f64) -> f64 {
    if b < EXPONENT_SCALING_THRESHOLD {
        return a.cosh() / b.sinh();
    }

    ((a - b).exp() + (-a - b).exp()) / decay_complement(b)
}

/// `b / sinh(b)` for `b > 0`
pub fn ratio_to_sinh(b: f64) -> f64 {
    if b < EXPONENT_SCALING_THRESHOLD {
        return b / b.sinh();
    }

    2.0 * b * (-b).exp() / decay_complement(b)
}

/// `coshm(x)` divided by `e^scale / 2`
///
/// Ratios of `coshm` values with arguments up to `scale` are unchanged by
/// the common factor, which keeps them finite for any argument.
pub fn scaled_coshm(x: f64, scale: f64) -> f64 {
    let x = x.abs();
    2.0f64.mul_add(-(-scale).exp(), (x - scale).exp() + (-x - scale).exp())
}
