use ripple::interpolation::errors::InterpolationError;
use ripple::interpolation::linear::LinearInterpolation;
use ripple::interpolation::Interpolator;

type RippleResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[test]
fn hat_function_midpoint() -> RippleResult {
    // samples at x = -1, 1, 3
    let lin = LinearInterpolation::new(-1.0, 3.0, 2, &[-3.0, 1.0, -3.0])?;
    assert!(approx_eq(lin.eval(0.5), 0.0));
    assert_eq!(lin.algorithm().algorithm_name(), "linear");
    Ok(())
}

#[test]
fn exact_hits() -> RippleResult {
    let y = [0.0, 2.0, 3.0, 3.0, 8.0];
    let lin = LinearInterpolation::new(0.0, 4.0, 4, &y)?;
    for (i, &yi) in y.iter().enumerate() {
        assert!(approx_eq(lin.eval(i as f64), yi));
    }
    Ok(())
}

#[test]
fn segment_midpoints() -> RippleResult {
    let y = [0.0, 2.0, 3.0];
    let lin = LinearInterpolation::new(0.0, 2.0, 2, &y)?;
    assert!(approx_eq(lin.eval(0.5), 1.0));
    assert!(approx_eq(lin.eval(1.5), 2.5));
    Ok(())
}

#[test]
fn clamps_outside_interval() -> RippleResult {
    let y = [4.0, 1.0, -2.0];
    let lin = LinearInterpolation::new(0.0, 2.0, 2, &y)?;
    assert_eq!(lin.eval(-3.0), 4.0);
    assert_eq!(lin.eval(2.0001), -2.0);
    Ok(())
}

#[test]
fn eval_many_matches_eval() -> RippleResult {
    let lin = LinearInterpolation::new(0.0, 2.0, 2, &[0.0, 2.0, 3.0])?;
    let zs = [-1.0, 0.0, 0.25, 1.9, 3.0];
    let many = lin.eval_many(&zs);
    for (z, v) in zs.iter().zip(many.iter()) {
        assert_eq!(lin.eval(*z), *v);
    }
    Ok(())
}

#[test]
fn sample_length_mismatch_error() {
    let err = LinearInterpolation::new(0.0, 2.0, 2, &[0.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::SampleLengthMismatch { expected: 3, got: 2 }
    ));
}

#[test]
fn inverted_interval_error() {
    let err = LinearInterpolation::new(2.0, 2.0, 1, &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidInterval { .. }));
}
