use tensors::{DDIR3, DIR3, DSM3, IR3, SM3};

use crate::{ConnectedMetric, CovariantMetric, GeometryError, Morphism, Result};

/// Polar chart `q = (r, θ, φ)` around a circular magnetic axis: `r` is the
/// distance to the axis circle normalised to `minor_radius`, `θ` the poloidal
/// angle measured counterclockwise from the low-field-side midplane, `φ` the
/// toroidal angle measured clockwise when looking from the torus top. Radii
/// are in SI metres.
pub struct MorphismPolarTorus {
    minor_radius: f64,
    major_radius: f64,
    iaspect_ratio: f64,
    volume_factor: f64,
    iminor_radius: f64,
}

impl MorphismPolarTorus {
    pub fn new(minor_radius: f64, major_radius: f64) -> Result<Self> {
        for (name, value) in [("minor_radius", minor_radius), ("major_radius", major_radius)] {
            if value <= 0.0 {
                return Err(GeometryError::NonPositive { name, value });
            }
        }
        Ok(Self {
            minor_radius,
            major_radius,
            iaspect_ratio: minor_radius / major_radius,
            volume_factor: minor_radius * minor_radius * major_radius,
            iminor_radius: 1.0 / minor_radius,
        })
    }

    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Inverse aspect ratio `a/R₀`.
    pub fn iaspect_ratio(&self) -> f64 {
        self.iaspect_ratio
    }
}

impl Morphism for MorphismPolarTorus {
    fn point(&self, q: IR3) -> Result<IR3> {
        let (r, theta, phi) = (q.u, q.v, q.w);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let big_r = self.major_radius * (1.0 + self.iaspect_ratio * r * cos_theta);
        Ok(IR3::new(big_r * cos_phi, -big_r * sin_phi, self.minor_radius * r * sin_theta))
    }

    fn inverse(&self, x: IR3) -> Result<IR3> {
        let big_r = (x.u * x.u + x.v * x.v).sqrt();
        let delta_r = big_r - self.major_radius;
        Ok(IR3::new(
            self.iminor_radius * (x.w * x.w + delta_r * delta_r).sqrt(),
            x.w.atan2(delta_r),
            (-x.v).atan2(x.u),
        ))
    }

    fn del(&self, q: IR3) -> Result<DIR3> {
        let (r, theta, phi) = (q.u, q.v, q.w);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let big_r = self.major_radius * (1.0 + self.iaspect_ratio * r * cos_theta);
        let a_cos_theta = self.minor_radius * cos_theta;
        let ar_cos_theta = r * a_cos_theta;
        let a_sin_theta = self.minor_radius * sin_theta;
        let ar_sin_theta = r * a_sin_theta;
        Ok(DIR3 {
            uu: a_cos_theta * cos_phi,
            uv: -ar_sin_theta * cos_phi,
            uw: -big_r * sin_phi,
            vu: -a_cos_theta * sin_phi,
            vv: ar_sin_theta * sin_phi,
            vw: -big_r * cos_phi,
            wu: a_sin_theta,
            wv: ar_cos_theta,
            ww: 0.0,
        })
    }

    fn ddel(&self, q: IR3) -> Result<DDIR3> {
        let (r, theta, phi) = (q.u, q.v, q.w);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let big_r = self.major_radius * (1.0 + self.iaspect_ratio * r * cos_theta);
        let a_cos_theta = self.minor_radius * cos_theta;
        let ar_cos_theta = r * a_cos_theta;
        let a_sin_theta = self.minor_radius * sin_theta;
        let ar_sin_theta = r * a_sin_theta;
        Ok(DDIR3 {
            uuu: 0.0,
            uuv: -a_sin_theta * cos_phi,
            uuw: -a_cos_theta * sin_phi,
            uvv: -ar_cos_theta * cos_phi,
            uvw: ar_sin_theta * sin_phi,
            uww: -big_r * cos_phi,
            vuu: 0.0,
            vuv: a_sin_theta * sin_phi,
            vuw: -a_cos_theta * cos_phi,
            vvv: ar_cos_theta * sin_phi,
            vvw: ar_sin_theta * cos_phi,
            vww: big_r * sin_phi,
            wuu: 0.0,
            wuv: a_cos_theta,
            wuw: 0.0,
            wvv: -ar_sin_theta,
            wvw: 0.0,
            www: 0.0,
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        let r_factor = 1.0 + self.iaspect_ratio * q.u * q.v.cos();
        Ok(self.volume_factor * q.u * r_factor)
    }

    fn del_inverse(&self, q: IR3) -> Result<DIR3> {
        let (r, theta, phi) = (q.u, q.v, q.w);
        let ir = 1.0 / r;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let i_big_r = 1.0 / (self.major_radius * (1.0 + self.iaspect_ratio * r * cos_theta));
        let ia_cos_theta = self.iminor_radius * cos_theta;
        let iar_cos_theta = ir * ia_cos_theta;
        let ia_sin_theta = self.iminor_radius * sin_theta;
        let iar_sin_theta = ir * ia_sin_theta;
        Ok(DIR3 {
            uu: ia_cos_theta * cos_phi,
            uv: -ia_cos_theta * sin_phi,
            uw: ia_sin_theta,
            vu: -iar_sin_theta * cos_phi,
            vv: iar_sin_theta * sin_phi,
            vw: iar_cos_theta,
            wu: -i_big_r * sin_phi,
            wv: -i_big_r * cos_phi,
            ww: 0.0,
        })
    }
}

/// Diagonal metric of the polar-torus chart,
/// `g = diag(a², a²r², R²)` with `R = R₀(1 + (a/R₀) r cosθ)`.
pub struct MetricPolarTorus {
    morphism: MorphismPolarTorus,
    minor2: f64,
}

impl MetricPolarTorus {
    pub fn new(minor_radius: f64, major_radius: f64) -> Result<Self> {
        let morphism = MorphismPolarTorus::new(minor_radius, major_radius)?;
        Ok(Self { morphism, minor2: minor_radius * minor_radius })
    }

    pub fn minor_radius(&self) -> f64 {
        self.morphism.minor_radius()
    }

    pub fn major_radius(&self) -> f64 {
        self.morphism.major_radius()
    }

    /// Inverse aspect ratio `a/R₀`.
    pub fn iaspect_ratio(&self) -> f64 {
        self.morphism.iaspect_ratio()
    }

    fn big_r(&self, q: IR3) -> f64 {
        self.morphism.major_radius * (1.0 + self.morphism.iaspect_ratio * q.u * q.v.cos())
    }
}

impl CovariantMetric for MetricPolarTorus {
    fn g(&self, q: IR3) -> Result<SM3> {
        let big_r = self.big_r(q);
        Ok(SM3 {
            uu: self.minor2,
            vv: self.minor2 * q.u * q.u,
            ww: big_r * big_r,
            ..SM3::zeros()
        })
    }

    fn del_g(&self, q: IR3) -> Result<DSM3> {
        let (r, theta) = (q.u, q.v);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let big_r = self.big_r(q);
        let a = self.morphism.minor_radius;
        Ok(DSM3 {
            vvu: 2.0 * self.minor2 * r,
            wwu: 2.0 * big_r * a * cos_theta,
            wwv: -2.0 * big_r * a * r * sin_theta,
            ..DSM3::zeros()
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        self.morphism.jacobian(q)
    }

    fn g_inverse(&self, q: IR3) -> Result<SM3> {
        let big_r = self.big_r(q);
        Ok(SM3 {
            uu: 1.0 / self.minor2,
            vv: 1.0 / (self.minor2 * q.u * q.u),
            ww: 1.0 / (big_r * big_r),
            ..SM3::zeros()
        })
    }

    fn to_covariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        let big_r = self.big_r(q);
        Ok(IR3::new(
            self.minor2 * b.u,
            self.minor2 * q.u * q.u * b.v,
            big_r * big_r * b.w,
        ))
    }

    fn to_contravariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        let big_r = self.big_r(q);
        Ok(IR3::new(
            b.u / self.minor2,
            b.v / (self.minor2 * q.u * q.u),
            b.w / (big_r * big_r),
        ))
    }
}

impl ConnectedMetric for MetricPolarTorus {
    fn morphism(&self) -> &dyn Morphism {
        &self.morphism
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::MetricConnected;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn chart() -> MorphismPolarTorus {
        MorphismPolarTorus::new(0.3, 1.0).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let morphism = chart();
        let q = IR3::new(0.5, 1.2, -2.0);
        let back = morphism.inverse(morphism.point(q).unwrap()).unwrap();
        assert_relative_eq!(back.u, q.u, max_relative = 1e-12);
        assert_relative_eq!(back.v, q.v, max_relative = 1e-12);
        assert_relative_eq!(back.w, q.w, max_relative = 1e-12);
    }

    #[test]
    fn test_jacobian_matches_determinant() {
        let morphism = chart();
        let q = IR3::new(0.4, PI / 5.0, 0.7);
        assert_relative_eq!(
            morphism.del(q).unwrap().determinant(),
            morphism.jacobian(q).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_translation_of_zero_is_identity() {
        let morphism = chart();
        let q = IR3::new(0.5, 0.3, 1.0);
        let moved = morphism.translation(q, IR3::zeros()).unwrap();
        assert_relative_eq!(moved.u, q.u, max_relative = 1e-12);
        assert_relative_eq!(moved.v, q.v, max_relative = 1e-12);
        assert_relative_eq!(moved.w, q.w, max_relative = 1e-12);
    }

    #[test]
    fn test_connected_metric_identities() {
        let morphism = chart();
        let connected = MetricConnected::new(&morphism);
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let q = IR3::new(0.45, 0.9, 0.2);

        // g from the closed form against g from the tangent basis.
        let g_closed = metric.g(q).unwrap();
        let g_derived = connected.g(q).unwrap();
        assert_relative_eq!(g_closed.uu, g_derived.uu, max_relative = 1e-12);
        assert_relative_eq!(g_closed.vv, g_derived.vv, max_relative = 1e-12);
        assert_relative_eq!(g_closed.ww, g_derived.ww, max_relative = 1e-12);

        // g·g⁻¹ = 1.
        let ig = metric.g_inverse(q).unwrap();
        assert_relative_eq!(g_closed.uu * ig.uu, 1.0, max_relative = 1e-12);
        assert_relative_eq!(g_closed.vv * ig.vv, 1.0, max_relative = 1e-12);
        assert_relative_eq!(g_closed.ww * ig.ww, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_del_g_against_finite_differences() {
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let connected_morphism = chart();
        let connected = MetricConnected::new(&connected_morphism);
        let q = IR3::new(0.5, 0.7, 0.1);
        let h = 1e-6;

        for (direction, pick) in [
            (IR3::new(h, 0.0, 0.0), 0),
            (IR3::new(0.0, h, 0.0), 1),
        ] {
            let g_plus = metric.g(q + direction).unwrap();
            let g_minus = metric.g(q - direction).unwrap();
            let dg_closed = metric.del_g(q).unwrap();
            let dg_derived = connected.del_g(q).unwrap();
            let (fd_vv, fd_ww) =
                ((g_plus.vv - g_minus.vv) / (2.0 * h), (g_plus.ww - g_minus.ww) / (2.0 * h));
            let (closed_vv, closed_ww, derived_ww) = match pick {
                0 => (dg_closed.vvu, dg_closed.wwu, dg_derived.wwu),
                _ => (dg_closed.vvv, dg_closed.wwv, dg_derived.wwv),
            };
            assert_relative_eq!(closed_vv, fd_vv, max_relative = 1e-6, epsilon = 1e-8);
            assert_relative_eq!(closed_ww, fd_ww, max_relative = 1e-6, epsilon = 1e-8);
            assert_relative_eq!(derived_ww, fd_ww, max_relative = 1e-6, epsilon = 1e-8);
        }
    }
}
