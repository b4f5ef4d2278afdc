//! Linear-system error types.
//!
//! ┌ shape errors   : empty system, mismatched band or rhs lengths
//! └ runtime errors : (near-)zero pivot during elimination

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearSystemError {
    #[error("empty system: diagonal has no entries")]
    EmptySystem,

    #[error("band length mismatch: {band} band has {band_len} entries for a {diag_len}-row system")]
    BandLengthMismatch {
        band: &'static str,
        diag_len: usize,
        band_len: usize,
    },

    #[error("rhs length mismatch: system is {expected}x{expected}, rhs has {got} entries")]
    RhsLengthMismatch { expected: usize, got: usize },

    #[error("(near-)zero pivot {pivot} in row {row}: system is degenerate")]
    ZeroPivot { row: usize, pivot: f64 },
}
