use crate::interpolation::algorithms::Algorithm;

pub trait Interpolator {
    /// algorithm variant backing this interpolant
    fn algorithm(&self) -> Algorithm;

    /// evaluates a single query point
    /// total over all reals; each method documents its out-of-range behavior
    fn eval(&self, z: f64) -> f64;

    /// evaluates many query points
    #[inline]
    fn eval_many(&self, zs: &[f64]) -> Vec<f64> {
        zs.iter().map(|&zq| self.eval(zq)).collect()
    }
}
