//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial)
//! over arbitrary (non-uniform) point sets.
//!
//! Coefficients are computed once at construction by divided differences and
//! evaluated at query points using Horner's scheme for numerical stability.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::grid::non_finite_idx;
use crate::interpolation::traits::Interpolator;

/// Minimum allowed separation between any two abscissae.
pub const DEFAULT_X_TOL: f64 = 1e-12;

/// The interpolating polynomial through `(x[i], y[i])` in Newton form.
///
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`
#[derive(Debug, Clone)]
pub struct NewtonPolynom {
    x: Vec<f64>,
    coeffs: Vec<f64>,
}

impl NewtonPolynom {
    /// Builds the polynomial through the given points.
    ///
    /// The abscissae may appear in any order but must be pairwise distinct
    /// (separation at least [`DEFAULT_X_TOL`]).
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if either vector is empty.
    /// - [`InterpolationError::UnequalLength`] if lengths differ.
    /// - [`InterpolationError::NonFiniteSample`] for NaN/infinite entries.
    /// - [`InterpolationError::DuplicateX`] for (near-)coincident abscissae.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if let Some(idx) = non_finite_idx(x) {
            return Err(InterpolationError::NonFiniteSample { idx });
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteSample { idx });
        }
        for i in 0..x.len() {
            for j in i + 1..x.len() {
                if (x[i] - x[j]).abs() < DEFAULT_X_TOL {
                    return Err(InterpolationError::DuplicateX { x1: x[i], x2: x[j] });
                }
            }
        }

        let coeffs = divided_differences(x, y);
        Ok(Self { x: x.to_vec(), coeffs })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Interpolator for NewtonPolynom {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Newton
    }

    /// Evaluates `P` via Horner's nested form:
    ///
    /// ```text
    /// P(zq) = c[0] + (zq - x[0]) * [ c[1] + (zq - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    ///
    /// The global polynomial is defined everywhere; query points outside the
    /// data range extrapolate it.
    fn eval(&self, z: f64) -> f64 {
        let n = self.x.len();
        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeffs[j] + (z - self.x[j]) * p;
        }
        p
    }
}

/// Computes Newton divided-difference coefficients in place over one table row.
#[inline]
fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}
