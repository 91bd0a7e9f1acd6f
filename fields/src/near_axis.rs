use std::f64::consts::TAU;

use geometry::{CovariantMetric, MetricNearAxis};
use tensors::{DIR3, IR3};

use crate::field::check_factors;
use crate::{IR3Field, IR3FieldC1, Result};

/// Quasi-symmetric stellarator equilibrium in the near-axis expansion.
///
/// The field follows the magnetic axis with strength set by the axis
/// curvature to first order in the distance `r`:
/// `Bᵠ = (2π/L)(1 + 2κ(φ) r cosθ)` and `Bᶿ = (ι − N)·Bᵠ`, with `ι` the
/// on-axis rotational transform and `N` the field-period count (the axis
/// helicity shows up in the poloidal component because the poloidal angle is
/// measured in the torsion-absorbed frame of [`MetricNearAxis`]). Normalised
/// to the on-axis field `axis_field` \[T\]; `t_factor` is one.
pub struct EquilibriumNearAxis<'a> {
    metric: &'a MetricNearAxis,
    m_factor: f64,
    length_factor: f64,
    iota_factor: f64,
}

impl<'a> EquilibriumNearAxis<'a> {
    pub fn new(metric: &'a MetricNearAxis, axis_field: f64, axis_iota: f64) -> Result<Self> {
        check_factors(axis_field.abs(), 1.0)?;
        let length_factor = TAU / metric.axis_length();
        let iota_factor = (axis_iota - metric.field_periods() as f64) * length_factor;
        Ok(Self { metric, m_factor: axis_field.abs(), length_factor, iota_factor })
    }

    /// On-axis field \[T\].
    pub fn axis_field(&self) -> f64 {
        self.m_factor
    }
}

impl IR3Field for EquilibriumNearAxis<'_> {
    fn contravariant(&self, position: IR3, _time: f64) -> Result<IR3> {
        let (r, theta) = (position.u, position.v);
        let kappa = self.metric.curvature(position.w)?;
        let b_w = self.length_factor * (1.0 + 2.0 * kappa * r * theta.cos());
        Ok(IR3::new(0.0, self.iota_factor * b_w, b_w))
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        1.0
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

impl IR3FieldC1 for EquilibriumNearAxis<'_> {
    fn del_contravariant(&self, position: IR3, _time: f64) -> Result<DIR3> {
        let (r, theta) = (position.u, position.v);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let kappa = self.metric.curvature(position.w)?;
        let kappa_prime = self.metric.curvature_derivative(position.w)?;
        let d_u = 2.0 * self.length_factor * kappa * cos_theta;
        let d_v = -2.0 * self.length_factor * kappa * r * sin_theta;
        let d_w = 2.0 * self.length_factor * kappa_prime * r * cos_theta;
        Ok(DIR3 {
            uu: 0.0,
            uv: 0.0,
            uw: 0.0,
            vu: self.iota_factor * d_u,
            vv: self.iota_factor * d_v,
            vw: self.iota_factor * d_w,
            wu: d_u,
            wv: d_v,
            ww: d_w,
        })
    }

    fn partial_t_contravariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::zeros())
    }

    fn partial_t_covariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::zeros())
    }

    fn partial_t_magnitude(&self, _position: IR3, _time: f64) -> Result<f64> {
        Ok(0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn metric() -> MetricNearAxis {
        let n = 17;
        let period = TAU / 4.0;
        let phi: Vec<f64> = (0..n).map(|i| period * i as f64 / (n - 1) as f64).collect();
        let kappa: Vec<f64> = phi.iter().map(|p| 1.2 + 0.2 * (4.0 * p).sin()).collect();
        MetricNearAxis::new(4, TAU, &phi, &kappa).unwrap()
    }

    #[test]
    fn test_on_axis_magnitude() {
        let metric = metric();
        let field = EquilibriumNearAxis::new(&metric, 1.0, 0.42).unwrap();
        // On the axis the versor is purely toroidal and |B| is the axis
        // field up to the (ι − N) poloidal correction of order r².
        let q = IR3::new(1e-10, 0.3, 0.2);
        assert_relative_eq!(field.magnitude(q, 0.0).unwrap(), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn test_del_contravariant_against_finite_differences() {
        let metric = metric();
        let field = EquilibriumNearAxis::new(&metric, 1.0, 0.42).unwrap();
        let q = IR3::new(0.02, 0.8, 0.3);
        let h = 1e-6;
        let db = field.del_contravariant(q, 0.0).unwrap();
        for (direction, expected_v, expected_w) in [
            (IR3::new(h, 0.0, 0.0), db.vu, db.wu),
            (IR3::new(0.0, h, 0.0), db.vv, db.wv),
            (IR3::new(0.0, 0.0, h), db.vw, db.ww),
        ] {
            let plus = field.contravariant(q + direction, 0.0).unwrap();
            let minus = field.contravariant(q - direction, 0.0).unwrap();
            assert_relative_eq!(
                expected_v,
                (plus.v - minus.v) / (2.0 * h),
                max_relative = 1e-4,
                epsilon = 1e-9
            );
            assert_relative_eq!(
                expected_w,
                (plus.w - minus.w) / (2.0 * h),
                max_relative = 1e-4,
                epsilon = 1e-9
            );
        }
    }
}
