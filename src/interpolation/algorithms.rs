//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Linear`]        piecewise linear over a uniform grid
/// - [`Algorithm::Newton`]        global divided-difference polynomial
/// - [`Algorithm::SplineClamped`] uniform clamped cubic Hermite spline
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Linear,
    Newton,
    SplineClamped,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Linear => "linear",
            Algorithm::Newton => "newton",
            Algorithm::SplineClamped => "clamped cubic spline",
        }
    }
}
