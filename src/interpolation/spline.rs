//! Clamped cubic spline interpolation over a uniform grid.
//!
//! Stores the `n + 1` samples together with one first derivative per
//! breakpoint. The two boundary derivatives are caller-supplied (0 by
//! default); the interior ones come from the second-derivative continuity
//! conditions at the interior knots, which form a diagonally dominant
//! tridiagonal system solved by [`crate::linalg::TridiagonalSystem`].
//! Evaluation blends the cubic Hermite basis on the enclosing interval.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::grid::{non_finite_idx, UniformGrid};
use crate::interpolation::traits::Interpolator;
use crate::linalg::TridiagonalSystem;

/// Uniform clamped cubic Hermite spline.
///
/// # Fields
/// - `grid`   : `n` intervals over `[a, b]`
/// - `y`      : samples at the `n + 1` breakpoints (copied in, never aliased)
/// - `yprime` : first derivatives at the breakpoints; `yprime[0]` and
///   `yprime[n]` are the boundary conditions, the rest are solved
#[derive(Debug, Clone)]
pub struct CubicSpline {
    grid: UniformGrid,
    y: Vec<f64>,
    yprime: Vec<f64>,
}

impl CubicSpline {
    /// Builds the spline with the default boundary derivatives `(0, 0)`.
    #[inline]
    pub fn new(a: f64, b: f64, n: usize, y: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_boundary_conditions(a, b, n, y, 0.0, 0.0)
    }

    /// Builds the spline with explicit boundary derivatives.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidInterval`] unless finite `a < b`.
    /// - [`InterpolationError::InvalidIntervalCount`] for `n < 1`.
    /// - [`InterpolationError::SampleLengthMismatch`] unless `y.len() == n + 1`.
    /// - [`InterpolationError::NonFiniteSample`] for NaN/infinite samples.
    /// - [`InterpolationError::NonFiniteBoundary`] for NaN/infinite slopes.
    pub fn with_boundary_conditions(
        a: f64,
        b: f64,
        n: usize,
        y: &[f64],
        yprime0: f64,
        yprimen: f64,
    ) -> Result<Self, InterpolationError> {
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

        let mut spline = Self {
            grid,
            y: y.to_vec(),
            yprime: vec![0.0; n + 1],
        };
        spline.set_boundary_conditions(yprime0, yprimen)?;
        Ok(spline)
    }

    /// Overwrites the boundary derivatives and re-solves the full interior
    /// system (O(n), never patched incrementally).
    ///
    /// On error the previous derivative vector is left untouched.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteBoundary`] for NaN/infinite slopes.
    /// - [`InterpolationError::DegenerateSystem`] if elimination hits a
    ///   zero pivot (cannot happen for this diagonally dominant system).
    pub fn set_boundary_conditions(
        &mut self,
        yprime0: f64,
        yprimen: f64,
    ) -> Result<(), InterpolationError> {
        if !yprime0.is_finite() {
            return Err(InterpolationError::NonFiniteBoundary { got: yprime0 });
        }
        if !yprimen.is_finite() {
            return Err(InterpolationError::NonFiniteBoundary { got: yprimen });
        }

        self.yprime = self.solve_derivatives(yprime0, yprimen)?;
        Ok(())
    }

    /// Current derivative vector, length `n + 1`.
    pub fn derivatives(&self) -> &[f64] {
        &self.yprime
    }

    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    /// Computes the full derivative vector for the given boundary slopes.
    ///
    /// Continuity of the second derivative at each interior knot `i` gives
    ///
    /// ```text
    /// yp[i-1] + 4 yp[i] + yp[i+1] = (3/h)(y[i+1] - y[i-1]),  i = 1..n-1
    /// ```
    ///
    /// an (n-1)x(n-1) tridiagonal system with diagonal 4 and off-diagonals 1.
    /// The first and last rows move the known boundary slopes to the right-
    /// hand side (for `n == 2` both corrections hit the single row).
    fn solve_derivatives(
        &self,
        yprime0: f64,
        yprimen: f64,
    ) -> Result<Vec<f64>, InterpolationError> {
        let n = self.grid.n();
        let h = self.grid.h();

        let mut yprime = vec![0.0; n + 1];
        yprime[0] = yprime0;
        yprime[n] = yprimen;

        // n == 1: no interior knots, nothing to solve
        if n > 1 {
            let m = n - 1;
            let sub = vec![1.0; m - 1];
            let diag = vec![4.0; m];
            let sup = vec![1.0; m - 1];

            let mut rhs = vec![0.0; m];
            for k in 0..m {
                let i = k + 1;
                rhs[k] = 3.0 / h * (self.y[i + 1] - self.y[i - 1]);
            }
            rhs[0] -= yprime0;
            rhs[m - 1] -= yprimen;

            let system = TridiagonalSystem::new(sub, diag, sup)?;
            let interior = system.solve(&rhs)?;
            yprime[1..n].copy_from_slice(&interior);
        }

        Ok(yprime)
    }
}

impl Interpolator for CubicSpline {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SplineClamped
    }

    /// Evaluates the spline at `z`.
    ///
    /// Outside `[a, b]` the nearest boundary sample is returned (no
    /// extrapolation). Inside, `z` is mapped to `t in [0, 1]` on its
    /// interval and the cubic Hermite basis is blended:
    ///
    /// ```text
    /// s(z) = y[i] h0(t) + y[i+1] h1(t) + h yp[i] h2(t) + h yp[i+1] h3(t)
    /// ```
    fn eval(&self, z: f64) -> f64 {
        let n = self.grid.n();
        if z < self.grid.a() {
            return self.y[0];
        }
        if z > self.grid.b() {
            return self.y[n];
        }

        let h = self.grid.h();
        let i = self.grid.interval_of(z);
        let t = (z - self.grid.knot(i)) / h;

        self.y[i] * h0(t)
            + self.y[i + 1] * h1(t)
            + h * self.yprime[i] * h2(t)
            + h * self.yprime[i + 1] * h3(t)
    }
}

// cubic Hermite basis on the unit interval

#[inline]
fn h0(t: f64) -> f64 {
    1.0 - 3.0 * t * t + 2.0 * t * t * t
}

#[inline]
fn h1(t: f64) -> f64 {
    3.0 * t * t - 2.0 * t * t * t
}

#[inline]
fn h2(t: f64) -> f64 {
    t - 2.0 * t * t + t * t * t
}

#[inline]
fn h3(t: f64) -> f64 {
    -(t * t) + t * t * t
}
