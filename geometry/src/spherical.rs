use tensors::{DDIR3, DIR3, DSM3, IR3, SM3};

use crate::{ConnectedMetric, CovariantMetric, GeometryError, Morphism, Result};

/// Spherical chart `q = (r, φ, θ)` with the polar angle `φ` measured from
/// the `z` axis and the azimuth `θ` from the `x` axis:
/// `x = Lref·r·cosθ·sinφ`, `y = Lref·r·sinθ·sinφ`, `z = Lref·r·cosφ`.
pub struct MorphismSpherical {
    lref: f64,
    ilref: f64,
    lref3: f64,
}

impl MorphismSpherical {
    pub fn new(lref: f64) -> Result<Self> {
        if lref <= 0.0 {
            return Err(GeometryError::NonPositive { name: "lref", value: lref });
        }
        Ok(Self { lref, ilref: 1.0 / lref, lref3: lref * lref * lref })
    }

    pub fn lref(&self) -> f64 {
        self.lref
    }
}

impl Morphism for MorphismSpherical {
    fn point(&self, q: IR3) -> Result<IR3> {
        let (r_si, phi, theta) = (self.lref * q.u, q.v, q.w);
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Ok(IR3::new(
            r_si * cos_theta * sin_phi,
            r_si * sin_theta * sin_phi,
            r_si * cos_phi,
        ))
    }

    fn inverse(&self, x: IR3) -> Result<IR3> {
        let r_sin_phi_squared = x.u * x.u + x.v * x.v;
        Ok(IR3::new(
            self.ilref * (r_sin_phi_squared + x.w * x.w).sqrt(),
            r_sin_phi_squared.sqrt().atan2(x.w),
            x.v.atan2(x.u),
        ))
    }

    fn del(&self, q: IR3) -> Result<DIR3> {
        let (r, phi, theta) = (q.u, q.v, q.w);
        let cos_phi = self.lref * phi.cos();
        let sin_phi = self.lref * phi.sin();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Ok(DIR3 {
            uu: cos_theta * sin_phi,
            uv: r * cos_theta * cos_phi,
            uw: -r * sin_theta * sin_phi,
            vu: sin_theta * sin_phi,
            vv: r * sin_theta * cos_phi,
            vw: r * cos_theta * sin_phi,
            wu: cos_phi,
            wv: -r * sin_phi,
            ww: 0.0,
        })
    }

    fn ddel(&self, q: IR3) -> Result<DDIR3> {
        let (r, phi, theta) = (q.u, q.v, q.w);
        let cos_phi = self.lref * phi.cos();
        let sin_phi = self.lref * phi.sin();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Ok(DDIR3 {
            uuu: 0.0,
            uuv: cos_theta * cos_phi,
            uuw: -sin_theta * sin_phi,
            uvv: -r * cos_theta * sin_phi,
            uvw: -r * sin_theta * cos_phi,
            uww: -r * cos_theta * sin_phi,
            vuu: 0.0,
            vuv: sin_theta * cos_phi,
            vuw: cos_theta * sin_phi,
            vvv: -r * sin_theta * sin_phi,
            vvw: r * cos_theta * cos_phi,
            vww: -r * sin_theta * sin_phi,
            wuu: 0.0,
            wuv: -sin_phi,
            wuw: 0.0,
            wvv: -r * cos_phi,
            wvw: 0.0,
            www: 0.0,
        })
    }

    fn del_inverse(&self, q: IR3) -> Result<DIR3> {
        let (ir, phi, theta) = (1.0 / q.u, q.v, q.w);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let cos_phi = self.ilref * phi.cos();
        let sin_phi = phi.sin();
        let csc_phi = self.ilref / sin_phi;
        let sin_phi = self.ilref * sin_phi;
        Ok(DIR3 {
            uu: cos_theta * sin_phi,
            uv: sin_theta * sin_phi,
            uw: cos_phi,
            vu: ir * cos_theta * cos_phi,
            vv: ir * sin_theta * cos_phi,
            vw: -ir * sin_phi,
            wu: -ir * sin_theta * csc_phi,
            wv: ir * cos_theta * csc_phi,
            ww: 0.0,
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        Ok(self.lref3 * q.u * q.u * q.v.sin())
    }
}

/// Diagonal metric of the spherical chart,
/// `g = Lref²·diag(1, r², r²sin²φ)`.
pub struct MetricSpherical {
    morphism: MorphismSpherical,
    lref2: f64,
}

impl MetricSpherical {
    pub fn new(lref: f64) -> Result<Self> {
        let morphism = MorphismSpherical::new(lref)?;
        Ok(Self { morphism, lref2: lref * lref })
    }
}

impl CovariantMetric for MetricSpherical {
    fn g(&self, q: IR3) -> Result<SM3> {
        let r2 = q.u * q.u;
        let sin_phi = q.v.sin();
        Ok(SM3 {
            uu: self.lref2,
            vv: self.lref2 * r2,
            ww: self.lref2 * r2 * sin_phi * sin_phi,
            ..SM3::zeros()
        })
    }

    fn del_g(&self, q: IR3) -> Result<DSM3> {
        let (r, phi) = (q.u, q.v);
        let (sin_phi, cos_phi) = phi.sin_cos();
        Ok(DSM3 {
            vvu: 2.0 * self.lref2 * r,
            wwu: 2.0 * self.lref2 * r * sin_phi * sin_phi,
            wwv: 2.0 * self.lref2 * r * r * sin_phi * cos_phi,
            ..DSM3::zeros()
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        self.morphism.jacobian(q)
    }

    fn del_jacobian(&self, q: IR3) -> Result<IR3> {
        let lref3 = self.lref2 * self.morphism.lref();
        let (r, phi) = (q.u, q.v);
        let (sin_phi, cos_phi) = phi.sin_cos();
        Ok(IR3::new(lref3 * 2.0 * r * sin_phi, lref3 * r * r * cos_phi, 0.0))
    }

    fn g_inverse(&self, q: IR3) -> Result<SM3> {
        let ilref2 = 1.0 / self.lref2;
        let ifactor = ilref2 / (q.u * q.u);
        let isin_phi = 1.0 / q.v.sin();
        Ok(SM3 {
            uu: ilref2,
            vv: ifactor,
            ww: ifactor * isin_phi * isin_phi,
            ..SM3::zeros()
        })
    }

    fn to_covariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        let factor = self.lref2 * q.u * q.u;
        let sin_phi = q.v.sin();
        Ok(IR3::new(
            self.lref2 * b.u,
            factor * b.v,
            factor * sin_phi * sin_phi * b.w,
        ))
    }

    fn to_contravariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        let factor = self.lref2 * q.u * q.u;
        let sin_phi = q.v.sin();
        Ok(IR3::new(
            b.u / self.lref2,
            b.v / factor,
            b.w / (factor * sin_phi * sin_phi),
        ))
    }

    fn christoffel_first_kind(&self, q: IR3) -> Result<DDIR3> {
        let (r, phi) = (q.u, q.v);
        let (sin_phi, cos_phi) = phi.sin_cos();
        let factor = self.lref2 * r;
        let term1 = factor * sin_phi * sin_phi;
        let term2 = factor * r * sin_phi * cos_phi;
        Ok(DDIR3 {
            uvv: -factor,
            uww: -term1,
            vuv: factor,
            vww: -term2,
            wuw: term1,
            wvw: term2,
            ..DDIR3::zeros()
        })
    }

    fn christoffel_second_kind(&self, q: IR3) -> Result<DDIR3> {
        let (r, phi) = (q.u, q.v);
        let ir = 1.0 / r;
        let (sin_phi, cos_phi) = phi.sin_cos();
        Ok(DDIR3 {
            uvv: -r,
            uww: -r * sin_phi * sin_phi,
            vuv: ir,
            vww: -sin_phi * cos_phi,
            wuw: ir,
            wvw: cos_phi / sin_phi,
            ..DDIR3::zeros()
        })
    }

    fn inertial_force(&self, q: IR3, dot_q: IR3) -> Result<IR3> {
        let gamma = self.christoffel_second_kind(q)?;
        Ok(IR3::new(
            -(gamma.uvv * dot_q.v * dot_q.v + gamma.uww * dot_q.w * dot_q.w),
            -(2.0 * gamma.vuv * dot_q.u * dot_q.v + gamma.vww * dot_q.w * dot_q.w),
            -2.0 * (gamma.wuw * dot_q.u + gamma.wvw * dot_q.v) * dot_q.w,
        ))
    }
}

impl ConnectedMetric for MetricSpherical {
    fn morphism(&self) -> &dyn Morphism {
        &self.morphism
    }
}
