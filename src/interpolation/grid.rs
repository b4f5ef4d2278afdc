//! Uniform sample grids.
//!
//! Provides [`UniformGrid`], the shared description of `n` equal intervals
//! over `[a, b]` with `n + 1` breakpoints `x_i = a + i*h`, `h = (b - a)/n`.
//! Shared by the uniform-grid interpolators (linear, clamped cubic spline).

use crate::interpolation::errors::InterpolationError;

/// A uniform grid of `n` intervals over `[a, b]`.
///
/// Invariant: `a < b`, `n >= 1`, hence `h > 0`.
#[derive(Debug, Copy, Clone)]
pub struct UniformGrid {
    a: f64,
    b: f64,
    n: usize,
    h: f64,
}

impl UniformGrid {
    pub fn new(a: f64, b: f64, n: usize) -> Result<Self, InterpolationError> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(InterpolationError::InvalidInterval { a, b });
        }
        if n < 1 {
            return Err(InterpolationError::InvalidIntervalCount { got: n });
        }
        let h = (b - a) / n as f64;
        Ok(Self { a, b, n, h })
    }

    // getters
    pub fn a(&self) -> f64 { self.a }
    pub fn b(&self) -> f64 { self.b }
    pub fn n(&self) -> usize { self.n }
    pub fn h(&self) -> f64 { self.h }

    /// Breakpoint `x_i = a + i*h`.
    #[inline]
    pub fn knot(&self, i: usize) -> f64 {
        self.a + self.h * i as f64
    }

    /// Index of the interval containing `z`, clamped to `[0, n-1]` so that
    /// `z == b` falls into the last interval. Callers ensure `z >= a`.
    #[inline]
    pub(crate) fn interval_of(&self, z: f64) -> usize {
        let i = ((z - self.a) / self.h) as usize;
        i.min(self.n - 1)
    }
}

pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
