use rsl_interpolation::{Accelerator, DynSpline, make_spline};

use crate::Result;

/// Pure query interface over a fitted 1D scalar approximant.
///
/// Implementations answer the value and the first two derivatives at any
/// point inside the knot support; evaluation outside it is a domain error,
/// never an extrapolation.
pub trait Interpolant1d: Send + Sync {
    /// Interpolated value `f(x)`.
    fn eval(&self, x: f64) -> Result<f64>;

    /// First derivative `f'(x)`.
    fn eval_deriv(&self, x: f64) -> Result<f64>;

    /// Second derivative `f''(x)`.
    fn eval_deriv2(&self, x: f64) -> Result<f64>;
}

/// Builds a 1D interpolant of the given type over `(x, y)` samples.
///
/// `typ` is handed to the backend spline factory; the types exercised here
/// are `"cubic"`, `"cubic_periodic"`, `"akima"` and `"steffen"`.
///
/// # Example
/// ```
/// # use interpolants::*;
/// # fn main() -> Result<()> {
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [0.0, 1.0, 4.0, 9.0, 16.0];
/// let interp = make_interp1d("cubic", &x, &y)?;
/// let value = interp.eval(2.5)?;
/// # Ok(())
/// # }
/// ```
pub fn make_interp1d(typ: &str, x: &[f64], y: &[f64]) -> Result<Box<dyn Interpolant1d>> {
    if x.len() != y.len() {
        return Err(crate::InterpError::SizeMismatch { expected: x.len(), got: y.len() });
    }
    Ok(Box::new(Spline1d { spline: make_spline(typ, x, y)? }))
}

/// [`Interpolant1d`] backed by a backend spline.
///
/// A fresh [`Accelerator`] is created per query: the pure interface cannot
/// thread the lookup state through `&self`, and the bisection restart is
/// cheap next to the spline kernel itself.
struct Spline1d {
    spline: DynSpline<f64>,
}

impl Interpolant1d for Spline1d {
    fn eval(&self, x: f64) -> Result<f64> {
        Ok(self.spline.eval(x, &mut Accelerator::new())?)
    }

    fn eval_deriv(&self, x: f64) -> Result<f64> {
        Ok(self.spline.eval_deriv(x, &mut Accelerator::new())?)
    }

    fn eval_deriv2(&self, x: f64) -> Result<f64> {
        Ok(self.spline.eval_deriv2(x, &mut Accelerator::new())?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn linear_interp() -> Box<dyn Interpolant1d> {
        let x: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|x| 2.0 * x + 1.0).collect();
        make_interp1d("cubic", &x, &y).unwrap()
    }

    #[test]
    fn test_linear_reproduction() {
        let interp = linear_interp();
        assert_relative_eq!(interp.eval(3.5).unwrap(), 8.0, max_relative = 1e-12);
        assert_relative_eq!(interp.eval_deriv(3.5).unwrap(), 2.0, max_relative = 1e-10);
        assert_relative_eq!(interp.eval_deriv2(3.5).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_domain_errors() {
        let interp = linear_interp();
        assert!(interp.eval(11.5).is_err());
        assert!(interp.eval(-0.5).is_err());
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0];
        assert!(make_interp1d("cubic", &x, &y).is_err());
    }
}
