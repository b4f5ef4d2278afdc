use thiserror::Error;

use crate::linalg::errors::LinearSystemError;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("invalid interval: require finite a < b, got a={a}, b={b}")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid interval count: need at least 1, got {got}")]
    InvalidIntervalCount { got: usize },

    #[error("sample length mismatch: grid with {expected} breakpoints, got {got} samples")]
    SampleLengthMismatch { expected: usize, got: usize },

    #[error("non-finite sample at index {idx}")]
    NonFiniteSample { idx: usize },

    #[error("non-finite boundary derivative {got}")]
    NonFiniteBoundary { got: f64 },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("degenerate derivative system: {0}")]
    DegenerateSystem(#[from] LinearSystemError),
}
