//! Spectral-transform error types.

use thiserror::Error;

/// Precondition violations of the inverse transform.
///
/// The radix-2 recursion only exists for power-of-two lengths; anything else
/// is a caller error, never a silently truncated result.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("empty sequence: nothing to transform")]
    EmptySequence,

    #[error("sequence length {got} is not a power of two")]
    NonPowerOfTwoLength { got: usize },
}
