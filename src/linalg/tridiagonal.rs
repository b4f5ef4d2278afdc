//! Tridiagonal Linear Systems
//!
//! Implements the [Thomas algorithm](https://en.wikipedia.org/wiki/Tridiagonal_matrix_algorithm):
//! forward elimination of the sub-diagonal followed by back substitution,
//! O(m) time and O(m) scratch for an `m x m` system.
//!
//! The solver does not pivot. It is stable for diagonally dominant systems
//! (the only kind the spline builder constructs); a pivot falling below
//! [`PIVOT_TOL`] during elimination is reported as
//! [`LinearSystemError::ZeroPivot`] instead of propagating NaNs.

use crate::linalg::errors::LinearSystemError;

/// Minimum pivot magnitude accepted during elimination.
pub const PIVOT_TOL: f64 = 1e-12;

/// An `m x m` linear system with nonzero entries only on the main diagonal
/// and its two immediate neighbors.
///
/// # Fields
/// - `sub`  : sub-diagonal, `m - 1` entries
/// - `diag` : main diagonal, `m` entries
/// - `sup`  : super-diagonal, `m - 1` entries
#[derive(Debug, Clone)]
pub struct TridiagonalSystem {
    sub:  Vec<f64>,
    diag: Vec<f64>,
    sup:  Vec<f64>,
}

impl TridiagonalSystem {
    /// Builds a system from its three bands.
    ///
    /// # Errors
    /// - [`LinearSystemError::EmptySystem`] if `diag` is empty.
    /// - [`LinearSystemError::BandLengthMismatch`] if either off-band does
    ///   not have exactly one entry fewer than `diag`.
    pub fn new(
        sub: Vec<f64>,
        diag: Vec<f64>,
        sup: Vec<f64>,
    ) -> Result<Self, LinearSystemError> {
        let m = diag.len();
        if m == 0 {
            return Err(LinearSystemError::EmptySystem);
        }
        if sub.len() != m - 1 {
            return Err(LinearSystemError::BandLengthMismatch {
                band: "sub",
                diag_len: m,
                band_len: sub.len(),
            });
        }
        if sup.len() != m - 1 {
            return Err(LinearSystemError::BandLengthMismatch {
                band: "super",
                diag_len: m,
                band_len: sup.len(),
            });
        }
        Ok(Self { sub, diag, sup })
    }

    /// System dimension `m`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.diag.len()
    }

    /// Solves `A x = rhs` for `x`.
    ///
    /// # Behavior
    /// Forward sweep: each row is normalized by its pivot and the
    /// sub-diagonal entry below is eliminated with the already-reduced row
    /// above. Back substitution then walks the rows last to first. The bands
    /// themselves are never mutated; the sweep works on scratch copies.
    ///
    /// # Errors
    /// - [`LinearSystemError::RhsLengthMismatch`] if `rhs.len() != m`.
    /// - [`LinearSystemError::ZeroPivot`] if any reduced pivot magnitude
    ///   drops below [`PIVOT_TOL`].
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>, LinearSystemError> {
        let m = self.dim();
        if rhs.len() != m {
            return Err(LinearSystemError::RhsLengthMismatch {
                expected: m,
                got: rhs.len(),
            });
        }

        // c holds the normalized super-diagonal, x the evolving rhs/solution
        let mut c = vec![0.0; m - 1];
        let mut x = rhs.to_vec();

        let mut pivot = self.diag[0];
        if pivot.abs() < PIVOT_TOL {
            return Err(LinearSystemError::ZeroPivot { row: 0, pivot });
        }
        if m > 1 {
            c[0] = self.sup[0] / pivot;
        }
        x[0] /= pivot;

        // forward elimination
        for i in 1..m {
            pivot = self.diag[i] - self.sub[i - 1] * c[i - 1];
            if pivot.abs() < PIVOT_TOL {
                return Err(LinearSystemError::ZeroPivot { row: i, pivot });
            }
            if i < m - 1 {
                c[i] = self.sup[i] / pivot;
            }
            x[i] = (x[i] - self.sub[i - 1] * x[i - 1]) / pivot;
        }

        // back substitution
        for i in (0..m - 1).rev() {
            x[i] -= c[i] * x[i + 1];
        }

        Ok(x)
    }
}
