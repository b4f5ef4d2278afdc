//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation)
//! over a uniform grid.
//!
//! Each consecutive pair of breakpoints defines a line segment. Query points
//! inside `[a, b]` are interpolated linearly on the enclosing segment; query
//! points outside are clamped to the nearest boundary sample.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::grid::{non_finite_idx, UniformGrid};
use crate::interpolation::traits::Interpolator;

/// Piecewise-linear interpolant over `n + 1` uniformly spaced samples.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    grid: UniformGrid,
    y: Vec<f64>,
}

impl LinearInterpolation {
    /// Builds the interpolant from `n + 1` samples over `[a, b]`.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidInterval`] unless finite `a < b`.
    /// - [`InterpolationError::InvalidIntervalCount`] for `n < 1`.
    /// - [`InterpolationError::SampleLengthMismatch`] unless `y.len() == n + 1`.
    /// - [`InterpolationError::NonFiniteSample`] for NaN/infinite samples.
    pub fn new(a: f64, b: f64, n: usize, y: &[f64]) -> Result<Self, InterpolationError> {
        let grid = UniformGrid::new(a, b, n)?;
        if y.len() != n + 1 {
            return Err(InterpolationError::SampleLengthMismatch {
                expected: n + 1,
                got: y.len(),
            });
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteSample { idx });
        }
        Ok(Self { grid, y: y.to_vec() })
    }

    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }
}

impl Interpolator for LinearInterpolation {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Linear
    }

    fn eval(&self, z: f64) -> f64 {
        let n = self.grid.n();
        if z < self.grid.a() {
            return self.y[0];
        }
        if z > self.grid.b() {
            return self.y[n];
        }

        let i = self.grid.interval_of(z);
        let t = (z - self.grid.knot(i)) / self.grid.h();
        self.y[i] + t * (self.y[i + 1] - self.y[i])
    }
}
