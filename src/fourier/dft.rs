//! Discrete Fourier Transform (forward)
//!
//! Implements the textbook
//! [discrete Fourier transform](https://en.wikipedia.org/wiki/Discrete_Fourier_transform)
//! directly from its definition:
//!
//! ```text
//! X[k] = sum_{j=0}^{N-1} x[j] * e^{-i 2 pi j k / N}
//! ```
//!
//! Any length is accepted and the output length equals the input length.
//! O(N^2); intended for moderate N and as the round-trip oracle for
//! [`crate::fourier::ifft`].

use std::f64::consts::TAU;

use num_complex::Complex64;

/// Forward transform of a complex sequence.
pub fn dft(x: &[Complex64]) -> Vec<Complex64> {
    let n = x.len();
    let mut out = Vec::with_capacity(n);

    for k in 0..n {
        let mut sum = Complex64::new(0.0, 0.0);
        for (j, &xj) in x.iter().enumerate() {
            // j*k reduced mod n keeps the angle in [0, 2pi)
            let angle = -TAU * ((j * k) % n) as f64 / n as f64;
            sum += xj * Complex64::from_polar(1.0, angle);
        }
        out.push(sum);
    }

    out
}

/// Forward transform of a real sequence.
#[inline]
pub fn dft_real(x: &[f64]) -> Vec<Complex64> {
    let lifted: Vec<Complex64> = x.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    dft(&lifted)
}
