use rsl_interpolation::{Accelerator, Cache, DynSpline2d, make_spline2d};

use crate::Result;

/// Pure query interface over a fitted 2D scalar approximant.
///
/// Answers the value, both first partials and the three second partials at
/// any point inside the knot rectangle.
pub trait Interpolant2d: Send + Sync {
    /// Interpolated value `f(x, y)`.
    fn eval(&self, x: f64, y: f64) -> Result<f64>;

    /// `∂f/∂x`.
    fn partial_x(&self, x: f64, y: f64) -> Result<f64>;

    /// `∂f/∂y`.
    fn partial_y(&self, x: f64, y: f64) -> Result<f64>;

    /// `∂²f/∂x²`.
    fn partial_xx(&self, x: f64, y: f64) -> Result<f64>;

    /// `∂²f/∂x∂y`.
    fn partial_xy(&self, x: f64, y: f64) -> Result<f64>;

    /// `∂²f/∂y²`.
    fn partial_yy(&self, x: f64, y: f64) -> Result<f64>;
}

/// Builds a 2D interpolant of the given type (`"bicubic"`) over the tensor
/// grid `x × y`.
///
/// `z` holds the samples flattened in Fortran order: `z[j * x.len() + i]` is
/// the value at `(x[i], y[j])`, matching the backend spline layout.
pub fn make_interp2d(typ: &str, x: &[f64], y: &[f64], z: &[f64]) -> Result<Box<dyn Interpolant2d>> {
    if z.len() != x.len() * y.len() {
        return Err(crate::InterpError::SizeMismatch {
            expected: x.len() * y.len(),
            got: z.len(),
        });
    }
    Ok(Box::new(Spline2d { spline: make_spline2d(typ, x, y, z)? }))
}

/// [`Interpolant2d`] backed by a backend 2D spline; fresh accelerators and
/// cell cache per query, as in the 1D case.
struct Spline2d {
    spline: DynSpline2d<f64>,
}

macro_rules! eval2d_impl {
    ($method:ident, $backend:ident) => {
        fn $method(&self, x: f64, y: f64) -> Result<f64> {
            Ok(self.spline.$backend(
                x,
                y,
                &mut Accelerator::new(),
                &mut Accelerator::new(),
                &mut Cache::new(),
            )?)
        }
    };
}

impl Interpolant2d for Spline2d {
    eval2d_impl!(eval, eval);
    eval2d_impl!(partial_x, eval_deriv_x);
    eval2d_impl!(partial_y, eval_deriv_y);
    eval2d_impl!(partial_xx, eval_deriv_xx);
    eval2d_impl!(partial_xy, eval_deriv_xy);
    eval2d_impl!(partial_yy, eval_deriv_yy);
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn bilinear_interp() -> Box<dyn Interpolant2d> {
        let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..6).map(|j| 0.5 * j as f64).collect();
        let mut z = vec![0.0; x.len() * y.len()];
        for (j, yj) in y.iter().enumerate() {
            for (i, xi) in x.iter().enumerate() {
                z[j * x.len() + i] = 3.0 * xi - 2.0 * yj + 1.0;
            }
        }
        make_interp2d("bicubic", &x, &y, &z).unwrap()
    }

    #[test]
    fn test_plane_reproduction() {
        let interp = bilinear_interp();
        assert_relative_eq!(interp.eval(3.25, 1.25).unwrap(), 8.25, max_relative = 1e-10);
        assert_relative_eq!(interp.partial_x(3.25, 1.25).unwrap(), 3.0, max_relative = 1e-8);
        assert_relative_eq!(interp.partial_y(3.25, 1.25).unwrap(), -2.0, max_relative = 1e-8);
        assert_relative_eq!(interp.partial_xy(3.25, 1.25).unwrap(), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let x = [0.0, 1.0];
        let y = [0.0, 1.0, 2.0];
        let z = [0.0; 5];
        assert!(make_interp2d("bicubic", &x, &y, &z).is_err());
    }
}
