use ripple::interpolation::errors::InterpolationError;
use ripple::interpolation::spline::CubicSpline;
use ripple::interpolation::Interpolator;

type RippleResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-9;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn regression_oracle() -> RippleResult {
    let mut spl = CubicSpline::new(-1.0, 2.0, 3, &[2.0, 0.0, 2.0, 3.0])?;
    spl.set_boundary_conditions(9.0, 0.0)?;
    assert_vec_close(spl.derivatives(), &[9.0, -3.0, 3.0, 0.0]);
    assert_eq!(spl.algorithm().algorithm_name(), "clamped cubic spline");
    Ok(())
}

#[test]
fn breakpoint_exactness() -> RippleResult {
    let y = [2.0, 0.0, 2.0, 3.0, -1.0, 0.5];
    let spl = CubicSpline::new(-1.0, 4.0, 5, &y)?;
    for (i, &yi) in y.iter().enumerate() {
        let xi = spl.grid().knot(i);
        assert!(approx_eq(spl.eval(xi), yi), "breakpoint {} off", i);
    }
    Ok(())
}

#[test]
fn clamps_outside_interval() -> RippleResult {
    let y = [2.0, 0.0, 2.0, 3.0];
    let spl = CubicSpline::new(-1.0, 2.0, 3, &y)?;
    for delta in [1e-9, 0.5, 100.0] {
        assert_eq!(spl.eval(-1.0 - delta), y[0]);
        assert_eq!(spl.eval(2.0 + delta), y[3]);
    }
    Ok(())
}

#[test]
fn derivative_vector_shape() -> RippleResult {
    let n = 7;
    let y: Vec<f64> = (0..=n).map(|i| (i as f64).sin()).collect();
    let mut spl = CubicSpline::new(0.0, 7.0, n, &y)?;
    assert_eq!(spl.derivatives().len(), n + 1);
    // default boundary conditions
    assert_eq!(spl.derivatives()[0], 0.0);
    assert_eq!(spl.derivatives()[n], 0.0);

    spl.set_boundary_conditions(1.25, -0.5)?;
    assert_eq!(spl.derivatives().len(), n + 1);
    assert_eq!(spl.derivatives()[0], 1.25);
    assert_eq!(spl.derivatives()[n], -0.5);
    Ok(())
}

#[test]
fn set_boundary_conditions_idempotent() -> RippleResult {
    let y = [1.0, -2.0, 0.0, 4.0, 4.0];
    let mut spl = CubicSpline::new(0.0, 2.0, 4, &y)?;

    spl.set_boundary_conditions(3.0, -7.0)?;
    let first = spl.derivatives().to_vec();
    spl.set_boundary_conditions(3.0, -7.0)?;
    let second = spl.derivatives().to_vec();

    // bit-identical, not merely close
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn explicit_default_matches_new() -> RippleResult {
    let y = [1.0, -2.0, 0.0, 4.0];
    let a = CubicSpline::new(0.0, 3.0, 3, &y)?;
    let b = CubicSpline::with_boundary_conditions(0.0, 3.0, 3, &y, 0.0, 0.0)?;
    assert_eq!(a.derivatives(), b.derivatives());
    Ok(())
}

#[test]
fn reproduces_cubic_exactly() -> RippleResult {
    // f  = t^3 - 2t + 1
    // f' = 3t^2 - 2
    let f = |t: f64| t * t * t - 2.0 * t + 1.0;
    let fp = |t: f64| 3.0 * t * t - 2.0;

    let (a, b, n) = (0.0, 3.0, 6);
    let h = (b - a) / n as f64;
    let y: Vec<f64> = (0..=n).map(|i| f(a + i as f64 * h)).collect();

    let spl = CubicSpline::with_boundary_conditions(a, b, n, &y, fp(a), fp(b))?;
    for k in 0..=60 {
        let z = a + (b - a) * k as f64 / 60.0;
        assert!(
            approx_eq(spl.eval(z), f(z)),
            "cubic not reproduced at z={}: got {}, want {}",
            z, spl.eval(z), f(z)
        );
    }
    Ok(())
}

#[test]
fn quadratic_with_exact_slopes() -> RippleResult {
    // y  = x^2 on [0, 2]
    let y = [0.0, 1.0, 4.0];
    let spl = CubicSpline::with_boundary_conditions(0.0, 2.0, 2, &y, 0.0, 4.0)?;
    assert!(approx_eq(spl.eval(0.5), 0.25));
    assert!(approx_eq(spl.eval(1.5), 2.25));
    Ok(())
}

#[test]
fn single_interval_blends_hermite() -> RippleResult {
    let spl = CubicSpline::new(0.0, 1.0, 1, &[1.0, 3.0])?;
    assert!(approx_eq(spl.eval(0.0), 1.0));
    assert!(approx_eq(spl.eval(1.0), 3.0));
    // zero slopes at both ends: midpoint is the mean of the endpoint values
    assert!(approx_eq(spl.eval(0.5), 2.0));
    Ok(())
}

#[test]
fn two_intervals_single_row_system() -> RippleResult {
    // n == 2 collapses the interior system to one row:
    // 4 yp[1] = (3/h)(y[2] - y[0]) - yp[0] - yp[2]
    let y = [0.0, 1.0, 4.0];
    let mut spl = CubicSpline::new(0.0, 2.0, 2, &y)?;
    spl.set_boundary_conditions(1.0, 3.0)?;
    let expected = (3.0 * (y[2] - y[0]) - 1.0 - 3.0) / 4.0;
    assert!(approx_eq(spl.derivatives()[1], expected));
    Ok(())
}

#[test]
fn failed_update_preserves_state() -> RippleResult {
    let mut spl = CubicSpline::new(-1.0, 2.0, 3, &[2.0, 0.0, 2.0, 3.0])?;
    spl.set_boundary_conditions(9.0, 0.0)?;
    let before = spl.derivatives().to_vec();

    let err = spl.set_boundary_conditions(f64::NAN, 0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteBoundary { .. }));
    assert_eq!(spl.derivatives(), &before[..]);
    Ok(())
}

#[test]
fn sample_length_mismatch_error() {
    let err = CubicSpline::new(0.0, 3.0, 3, &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::SampleLengthMismatch { expected: 4, got: 3 }
    ));
}

#[test]
fn zero_intervals_error() {
    let err = CubicSpline::new(0.0, 1.0, 0, &[1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidIntervalCount { got: 0 }));
}

#[test]
fn inverted_interval_error() {
    let err = CubicSpline::new(2.0, -1.0, 3, &[2.0, 0.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidInterval { .. }));
}

#[test]
fn non_finite_sample_error() {
    let err = CubicSpline::new(0.0, 3.0, 3, &[1.0, f64::NAN, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteSample { idx: 1 }));
}
