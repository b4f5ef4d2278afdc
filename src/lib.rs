//! Numeric approximation primitives over uniformly sampled data.
//!
//! ├ [`interpolation`] : linear, Newton, and clamped cubic-spline interpolation
//! │                     behind a shared [`interpolation::Interpolator`] trait
//! ├ [`linalg`]        : tridiagonal linear systems and their O(m) solver
//! └ [`fourier`]       : forward spectral transform and its radix-2 inverse

pub mod fourier;
pub mod interpolation;
pub mod linalg;
