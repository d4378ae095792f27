//! One-sided boundary slope estimates consistent with the tension model
//!
//! When an endpoint slope is not supplied, it is synthesised as a linear
//! combination of the nearest ordinates. The weights depend on the signed
//! distances from the boundary sample, so the same routine serves both ends:
//! positive deltas look rightwards from the first sample, negative deltas
//! look leftwards from the last one.

use crate::io::configuration::EXPONENT_SCALING_THRESHOLD;
use crate::math::hyperbolic::{coshm, scaled_coshm};

/// Weights of a two- or three-point boundary slope estimate
///
/// The slope is `c1 * y0 + c2 * y1 (+ c3 * y2)` where `y0` is the boundary
/// ordinate and `y1`, `y2` sit at `del1`, `del2` from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCoefficient {
    /// Secant through the boundary sample and its neighbour
    TwoTerm {
        /// Weight of the boundary ordinate
        c1: f64,
        /// Weight of the neighbouring ordinate
        c2: f64,
    },
    /// Three-point estimate matching the local tension curve
    ThreeTerm {
        /// Weight of the boundary ordinate
        c1: f64,
        /// Weight of the ordinate at `del1`
        c2: f64,
        /// Weight of the ordinate at `del2`
        c3: f64,
    },
}

impl BoundaryCoefficient {
    /// Secant weights over a single signed delta
    ///
    /// Independent of tension. `del1` must be non-zero.
    pub fn two_term(del1: f64) -> Self {
        let c1 = -1.0 / del1;
        Self::TwoTerm { c1, c2: -c1 }
    }

    /// Three-point weights over two signed deltas of the same sign
    ///
    /// With zero tension these are the unequally spaced finite-difference
    /// weights. Otherwise they are the weights that reproduce the slope of
    /// the tension curve through the three points. Both deltas must be
    /// non-zero and distinct.
    pub fn three_term(del1: f64, del2: f64, sigma: f64) -> Self {
        if sigma == 0.0 {
            let del = del2 - del1;
            return Self::ThreeTerm {
                c1: -(del1 + del2) / (del1 * del2),
                c2: del2 / (del1 * del),
                c3: -del1 / (del2 * del),
            };
        }

        let far = sigma * del1.abs().max(del2.abs());
        if far >= EXPONENT_SCALING_THRESHOLD {
            // Same weights with every coshm divided by e^far / 2
            let scaled1 = scaled_coshm(sigma * del1, far);
            let scaled2 = scaled_coshm(sigma * del2, far);
            let denom = scaled1.mul_add(del2 - del1, -del1 * (scaled2 - scaled1));

            return Self::ThreeTerm {
                c1: (scaled2 - scaled1) / denom,
                c2: -scaled2 / denom,
                c3: scaled1 / denom,
            };
        }

        let coshm1 = coshm(sigma * del1);
        let coshm2 = coshm(sigma * del2);
        let sinh_sum = (sigma * (del2 + del1) / 2.0).sinh();
        let sinh_diff = (sigma * (del2 - del1) / 2.0).sinh();
        let cross = sinh_sum * sinh_diff;

        let denom = coshm1.mul_add(del2 - del1, -2.0 * del1 * cross);

        Self::ThreeTerm {
            c1: 2.0 * cross / denom,
            c2: -coshm2 / denom,
            c3: coshm1 / denom,
        }
    }

    /// Apply the weights to the ordinates nearest the boundary
    ///
    /// `ordinates` starts at the boundary sample and walks inwards. Missing
    /// ordinates contribute nothing and surplus ones are ignored.
    pub fn slope(&self, ordinates: &[f64]) -> f64 {
        let weights = match *self {
            Self::TwoTerm { c1, c2 } => [c1, c2, 0.0],
            Self::ThreeTerm { c1, c2, c3 } => [c1, c2, c3],
        };

        weights
            .iter()
            .zip(ordinates)
            .map(|(weight, ordinate)| weight * ordinate)
            .sum()
    }
}
