pub mod dft;
pub mod errors;
pub mod ifft;

pub use num_complex::Complex64;
