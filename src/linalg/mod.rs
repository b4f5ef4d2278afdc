pub mod errors;
pub mod tridiagonal;

pub use tridiagonal::TridiagonalSystem;
