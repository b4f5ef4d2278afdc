pub mod algorithms;
pub mod errors;
pub mod grid;
pub mod traits;
pub use traits::Interpolator;

pub mod linear;
pub mod newton;
pub mod spline;
