use geometry::{CovariantMetric, MetricPolarTorus};
use tensors::{DIR3, IR3};

use crate::field::check_factors;
use crate::{IR3Field, IR3FieldC1, Result};

/// Radial profile supplied by the caller (e.g. a safety-factor law).
pub type RadialProfile = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Magnetostatic equilibrium of a large-aspect-ratio circular tokamak.
///
/// Toroidal coordinates come from a [`MetricPolarTorus`]; the poloidal flux
/// is constant over circumferences of constant `r` and the poloidal
/// dependence enters through the `1/R` toroidal factor only. The radial
/// structure is set by the safety-factor profile `q(r)` and its derivative,
/// supplied as closures. The field is normalised to its on-axis magnitude
/// (`m_factor`, \[T\]); being an equilibrium, `t_factor` is one.
///
/// The derived queries (covariant components, magnitude, versors, curl,
/// magnitude gradient) are shadowed with closed forms.
pub struct EquilibriumCircular<'a> {
    m_factor: f64,
    metric: &'a MetricPolarTorus,
    q: RadialProfile,
    qprime: RadialProfile,
}

impl<'a> EquilibriumCircular<'a> {
    pub fn new(
        m_factor: f64,
        metric: &'a MetricPolarTorus,
        q: RadialProfile,
        qprime: RadialProfile,
    ) -> Result<Self> {
        check_factors(m_factor, 1.0)?;
        Ok(Self { m_factor, metric, q, qprime })
    }

    /// Safety factor at radius `r`.
    pub fn q(&self, r: f64) -> f64 {
        (self.q)(r)
    }

    /// Safety-factor derivative at radius `r`.
    pub fn qprime(&self, r: f64) -> f64 {
        (self.qprime)(r)
    }
}

impl IR3Field for EquilibriumCircular<'_> {
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let m = self.magnitude(position, time)?;
        Ok(m * self.contravariant_versor(position, time)?)
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

    fn covariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let m = self.magnitude(position, time)?;
        Ok(m * self.covariant_versor(position, time)?)
    }

    /// `|B| = √(q² + ε²r²) / (q R)`, in on-axis units.
    fn magnitude(&self, position: IR3, _time: f64) -> Result<f64> {
        let eps_r = self.metric.iaspect_ratio() * position.u;
        let q = self.q(position.u);
        let l = (q * q + eps_r * eps_r).sqrt();
        let big_r = 1.0 + eps_r * position.v.cos();
        Ok(l / (q * big_r))
    }

    fn covariant_versor(&self, position: IR3, time: f64) -> Result<IR3> {
        let b = self.contravariant_versor(position, time)?;
        Ok(self.metric.to_covariant(b, position)?)
    }

    fn contravariant_versor(&self, position: IR3, _time: f64) -> Result<IR3> {
        let r0 = self.metric.major_radius();
        let (r, theta) = (position.u, position.v);
        let eps_r = self.metric.iaspect_ratio() * r;
        let q = self.q(r);
        let big_r = 1.0 + eps_r * theta.cos();
        let aux = 1.0 / (r0 * big_r * (q * q + eps_r * eps_r).sqrt());
        Ok(IR3::new(0.0, big_r * aux, q * aux))
    }
}

impl IR3FieldC1 for EquilibriumCircular<'_> {
    fn del_contravariant(&self, position: IR3, _time: f64) -> Result<DIR3> {
        let r0 = self.metric.major_radius();
        let eps = self.metric.iaspect_ratio();
        let (r, theta) = (position.u, position.v);
        let q = self.q(r);
        let qprime = self.qprime(r);
        let drdr = eps * theta.cos();
        let drdtheta = -r * eps * theta.sin();
        let big_r = 1.0 + r * drdr;
        let db_vu = -(qprime * big_r + q * drdr) / (r0 * q * q * big_r * big_r);
        let db_vv = -q * drdtheta / (r0 * q * q * big_r * big_r);
        let db_wu = -2.0 * drdr / (r0 * big_r * big_r * big_r);
        let db_wv = -2.0 * drdtheta / (r0 * big_r * big_r * big_r);
        Ok(DIR3 {
            uu: 0.0, uv: 0.0, uw: 0.0,
            vu: db_vu, vv: db_vv, vw: 0.0,
            wu: db_wu, wv: db_wv, ww: 0.0,
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

    /// Only the toroidal component survives in an up-down-symmetric
    /// equilibrium with a constant covariant toroidal field.
    fn curl(&self, position: IR3, time: f64) -> Result<IR3> {
        let jacobian = self.metric.jacobian(position)?;
        let db = self.del_covariant(position, time)?;
        Ok(IR3::new(0.0, 0.0, db.vu / jacobian))
    }

    fn del_magnitude(&self, position: IR3, _time: f64) -> Result<IR3> {
        let (r, theta) = (position.u, position.v);
        let eps = self.metric.iaspect_ratio();
        let eps_r = eps * r;
        let q = self.q(r);
        let qprime = self.qprime(r);
        let l = (q * q + eps_r * eps_r).sqrt();
        let lprime = (q * qprime + eps * eps_r) / l;
        let du_r = eps * theta.cos();
        let big_r = 1.0 + r * du_r;
        let aux = (q * big_r).powi(-2);
        Ok(IR3::new(
            (q * big_r * lprime - l * (big_r * qprime + q * du_r)) * aux,
            q * l * eps_r * theta.sin() * aux,
            0.0,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use tensors::inner_product;

    fn field(metric: &MetricPolarTorus) -> EquilibriumCircular<'_> {
        EquilibriumCircular::new(
            1.0,
            metric,
            Box::new(|r| 1.0 + 2.0 * r * r),
            Box::new(|r| 4.0 * r),
        )
        .unwrap()
    }

    #[test]
    fn test_on_axis_magnitude_is_unity() {
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let b = field(&metric);
        let q0 = IR3::new(1e-12, 0.0, 0.0);
        assert_relative_eq!(b.magnitude(q0, 0.0).unwrap(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_magnitude_consistent_with_components() {
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let b = field(&metric);
        let q = IR3::new(0.15, 0.8, 0.0);
        let contravariant = b.contravariant(q, 0.0).unwrap();
        let covariant = b.covariant(q, 0.0).unwrap();
        assert_relative_eq!(
            inner_product(contravariant, covariant).sqrt(),
            b.magnitude(q, 0.0).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_covariant_matches_metric_lowering() {
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let b = field(&metric);
        let q = IR3::new(0.2, 1.3, 0.4);
        let lowered = metric.to_covariant(b.contravariant(q, 0.0).unwrap(), q).unwrap();
        let direct = b.covariant(q, 0.0).unwrap();
        assert_relative_eq!(direct.v, lowered.v, max_relative = 1e-12, epsilon = 1e-14);
        assert_relative_eq!(direct.w, lowered.w, max_relative = 1e-12);
    }

    #[test]
    fn test_del_contravariant_against_finite_differences() {
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let b = field(&metric);
        let q = IR3::new(0.15, 0.8, 0.0);
        let h = 1e-6;
        let db = b.del_contravariant(q, 0.0).unwrap();

        let plus = b.contravariant(q + IR3::new(h, 0.0, 0.0), 0.0).unwrap();
        let minus = b.contravariant(q - IR3::new(h, 0.0, 0.0), 0.0).unwrap();
        assert_relative_eq!(db.vu, (plus.v - minus.v) / (2.0 * h), max_relative = 1e-6);
        assert_relative_eq!(db.wu, (plus.w - minus.w) / (2.0 * h), max_relative = 1e-6);

        let plus = b.contravariant(q + IR3::new(0.0, h, 0.0), 0.0).unwrap();
        let minus = b.contravariant(q - IR3::new(0.0, h, 0.0), 0.0).unwrap();
        assert_relative_eq!(db.vv, (plus.v - minus.v) / (2.0 * h), max_relative = 1e-6);
        assert_relative_eq!(db.wv, (plus.w - minus.w) / (2.0 * h), max_relative = 1e-6);
    }

    #[test]
    fn test_del_magnitude_against_finite_differences() {
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let b = field(&metric);
        let q = IR3::new(0.15, 0.8, 0.0);
        let h = 1e-6;
        let grad = b.del_magnitude(q, 0.0).unwrap();
        for (direction, expected) in [
            (IR3::new(h, 0.0, 0.0), grad.u),
            (IR3::new(0.0, h, 0.0), grad.v),
        ] {
            let fd = (b.magnitude(q + direction, 0.0).unwrap()
                - b.magnitude(q - direction, 0.0).unwrap())
                / (2.0 * h);
            assert_relative_eq!(expected, fd, max_relative = 1e-6, epsilon = 1e-10);
        }
    }
}
