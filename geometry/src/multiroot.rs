use crate::{GeometryError, Result};

const SOLVER: &str = "multiroot";

/// Damped-Newton root finder for two-dimensional residuals.
///
/// Fills the contract of the hybrid multiroot solvers used to invert
/// interpolated charts: caller supplies a residual callback and an initial
/// guess; the solver answers the root, or a numerical-error kind carrying the
/// iteration count and last residual. The Jacobian is estimated by forward
/// differences and the Newton step is halved until the residual decreases,
/// which keeps the iteration inside the basin on the strongly sheared outer
/// flux surfaces.
#[derive(Clone, Copy, Debug)]
pub struct Multiroot {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Multiroot {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self { tolerance, max_iterations }
    }

    /// Finds `x` with `|f(x)|₁ < tolerance`, starting from `guess`.
    ///
    /// Errors raised by the residual itself (typically interpolation domain
    /// errors when an iterate leaves the chart support) propagate unchanged.
    pub fn solve<F>(&self, f: F, guess: [f64; 2]) -> Result<[f64; 2]>
    where
        F: Fn([f64; 2]) -> Result<[f64; 2]>,
    {
        let mut x = guess;
        let mut fx = f(x)?;
        for iteration in 1..=self.max_iterations {
            let residual = fx[0].abs() + fx[1].abs();
            if !residual.is_finite() {
                log::warn!("{SOLVER}: non-finite residual at iteration {iteration}");
                return Err(GeometryError::SolverNonFinite { solver: SOLVER });
            }
            if residual < self.tolerance {
                return Ok(x);
            }

            let step = self.newton_step(&f, x, fx)?;
            // Backtrack until the step actually reduces the residual.
            let mut lambda = 1.0;
            let mut advanced = false;
            for _ in 0..8 {
                let trial = [x[0] - lambda * step[0], x[1] - lambda * step[1]];
                match f(trial) {
                    Ok(ftrial)
                        if ftrial[0].abs() + ftrial[1].abs() < residual =>
                    {
                        x = trial;
                        fx = ftrial;
                        advanced = true;
                        break;
                    }
                    _ => lambda *= 0.5,
                }
            }
            if !advanced {
                log::warn!(
                    "{SOLVER}: stuck after {iteration} iterations, residual {residual:.3e}"
                );
                return Err(GeometryError::SolverStuck {
                    solver: SOLVER,
                    iterations: iteration,
                    residual,
                });
            }
        }

        let residual = fx[0].abs() + fx[1].abs();
        if residual < self.tolerance {
            return Ok(x);
        }
        log::warn!(
            "{SOLVER}: no convergence after {} iterations, residual {residual:.3e}",
            self.max_iterations
        );
        Err(GeometryError::SolverNotConverged {
            solver: SOLVER,
            iterations: self.max_iterations,
            residual,
        })
    }

    /// Newton step `J⁻¹ f` with a forward-difference Jacobian.
    fn newton_step<F>(&self, f: &F, x: [f64; 2], fx: [f64; 2]) -> Result<[f64; 2]>
    where
        F: Fn([f64; 2]) -> Result<[f64; 2]>,
    {
        let h0 = 1e-7 * x[0].abs().max(1.0);
        let h1 = 1e-7 * x[1].abs().max(1.0);
        let f0 = f([x[0] + h0, x[1]])?;
        let f1 = f([x[0], x[1] + h1])?;
        let j00 = (f0[0] - fx[0]) / h0;
        let j10 = (f0[1] - fx[1]) / h0;
        let j01 = (f1[0] - fx[0]) / h1;
        let j11 = (f1[1] - fx[1]) / h1;

        let det = j00 * j11 - j01 * j10;
        if det == 0.0 || !det.is_finite() {
            return Err(GeometryError::SolverNonFinite { solver: SOLVER });
        }
        Ok([(j11 * fx[0] - j01 * fx[1]) / det, (j00 * fx[1] - j10 * fx[0]) / det])
    }
}

impl Default for Multiroot {
    /// Tolerance and iteration budget used by the chart inversions.
    fn default() -> Self {
        Self::new(1.0e-12, 100)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_system() {
        let solver = Multiroot::default();
        let root = solver
            .solve(|[x, y]| Ok([2.0 * x + y - 3.0, x - y]), [10.0, -10.0])
            .unwrap();
        assert_relative_eq!(root[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(root[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nonlinear_system() {
        let solver = Multiroot::default();
        // Intersection of a circle and a line in the first quadrant.
        let root = solver
            .solve(|[x, y]| Ok([x * x + y * y - 2.0, x - y]), [2.0, 0.5])
            .unwrap();
        assert_relative_eq!(root[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(root[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_exhausted_iterations() {
        // Unreachable tolerance: the quadratic root at the origin halves the
        // iterate per step, far too slowly for five iterations.
        let solver = Multiroot::new(1e-30, 5);
        let out = solver.solve(|[x, y]| Ok([x * x, y]), [1.0, 1.0]);
        assert!(matches!(
            out,
            Err(GeometryError::SolverNotConverged { .. }) | Err(GeometryError::SolverStuck { .. })
        ));
    }

    #[test]
    fn test_non_finite_residual() {
        let solver = Multiroot::default();
        let out = solver.solve(|[x, _]| Ok([(x - 2.0).sqrt(), 0.0]), [0.0, 0.0]);
        assert!(matches!(out, Err(GeometryError::SolverNonFinite { .. })));
    }
}
