//! Inverse Fast Fourier Transform
//!
//! Radix-2 [Cooley-Tukey](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! recursion over the even- and odd-indexed halves of the input. Decimation
//! is done with strided views (offset + doubled stride) into the caller's
//! slice, and both recursive halves land in disjoint halves of one shared
//! output buffer, so no per-level allocation takes place. Recursion depth is
//! exactly `log2(N)`.
//!
//! The recursion itself computes the *unnormalized* inverse (positive
//! rotation `omega = e^{i 2 pi / N}`); the top-level [`ifft`] applies the
//! `1/N` scale once, so `ifft(dft(x))` reconstructs `x`.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::fourier::errors::TransformError;

/// Inverse transform of a complex sequence of power-of-two length.
///
/// # Behavior
/// Validates the length once up front; the recursion below operates on
/// already-validated power-of-two lengths and cannot fail.
///
/// # Errors
/// - [`TransformError::EmptySequence`] for an empty input.
/// - [`TransformError::NonPowerOfTwoLength`] if `c.len()` is not `2^m`.
pub fn ifft(c: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    let n = c.len();
    if n == 0 {
        return Err(TransformError::EmptySequence);
    }
    if !n.is_power_of_two() {
        return Err(TransformError::NonPowerOfTwoLength { got: n });
    }

    let mut out = vec![Complex64::new(0.0, 0.0); n];
    ifft_rec(c, 0, 1, n, &mut out);

    let scale = 1.0 / n as f64;
    for v in &mut out {
        *v *= scale;
    }

    Ok(out)
}

/// One recursion level over the strided view `c[offset], c[offset+stride], ..`
/// of length `n`, written into `out[0..n]`.
fn ifft_rec(c: &[Complex64], offset: usize, stride: usize, n: usize, out: &mut [Complex64]) {
    if n == 1 {
        out[0] = c[offset];
        return;
    }

    let m = n / 2;
    let (even, odd) = out.split_at_mut(m);

    // even indices keep the offset, odd indices shift by one stride
    ifft_rec(c, offset, stride * 2, m, even);
    ifft_rec(c, offset + stride, stride * 2, m, odd);

    let omega = Complex64::from_polar(1.0, TAU / n as f64);
    for j in 0..m {
        let t = omega.powu(j as u32) * odd[j];
        let u = even[j];
        even[j] = u + t;
        odd[j] = u - t;
    }
}
