use tensors::{DDIR3, DIR3, DSM3, IR3, SM3};

use crate::{ConnectedMetric, CovariantMetric, GeometryError, Morphism, Result};

/// Cylindrical chart `q = (r, φ, z)`, lengths normalised to `Lref`:
/// `x = Lref·r·cosφ`, `y = Lref·r·sinφ`, `z = Lref·z`.
pub struct MorphismCylindrical {
    lref: f64,
    ilref: f64,
    lref3: f64,
}

impl MorphismCylindrical {
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

impl Morphism for MorphismCylindrical {
    fn point(&self, q: IR3) -> Result<IR3> {
        let (r, phi, z) = (q.u, q.v, q.w);
        Ok(IR3::new(
            self.lref * r * phi.cos(),
            self.lref * r * phi.sin(),
            self.lref * z,
        ))
    }

    fn inverse(&self, x: IR3) -> Result<IR3> {
        let r_si = (x.u * x.u + x.v * x.v).sqrt();
        Ok(IR3::new(self.ilref * r_si, x.v.atan2(x.u), self.ilref * x.w))
    }

    fn del(&self, q: IR3) -> Result<DIR3> {
        let (r, phi) = (q.u, q.v);
        let lref_sin = self.lref * phi.sin();
        let lref_cos = self.lref * phi.cos();
        Ok(DIR3 {
            uu: lref_cos, uv: -r * lref_sin, uw: 0.0,
            vu: lref_sin, vv: r * lref_cos, vw: 0.0,
            wu: 0.0, wv: 0.0, ww: self.lref,
        })
    }

    fn ddel(&self, q: IR3) -> Result<DDIR3> {
        let (r, phi) = (q.u, q.v);
        let lref_sin = self.lref * phi.sin();
        let lref_cos = self.lref * phi.cos();
        Ok(DDIR3 {
            uuv: -lref_sin,
            uvv: -r * lref_cos,
            vuv: lref_cos,
            vvv: -r * lref_sin,
            ..DDIR3::zeros()
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        Ok(self.lref3 * q.u)
    }

    fn del_inverse(&self, q: IR3) -> Result<DIR3> {
        let (ir, phi) = (1.0 / q.u, q.v);
        let ilref_sin = self.ilref * phi.sin();
        let ilref_cos = self.ilref * phi.cos();
        Ok(DIR3 {
            uu: ilref_cos, uv: ilref_sin, uw: 0.0,
            vu: -ilref_sin * ir, vv: ilref_cos * ir, vw: 0.0,
            wu: 0.0, wv: 0.0, ww: self.ilref,
        })
    }
}

/// Diagonal metric of the cylindrical chart,
/// `g = Lref²·diag(1, r², 1)`.
pub struct MetricCylindrical {
    morphism: MorphismCylindrical,
    lref2: f64,
}

impl MetricCylindrical {
    pub fn new(lref: f64) -> Result<Self> {
        let morphism = MorphismCylindrical::new(lref)?;
        Ok(Self { morphism, lref2: lref * lref })
    }
}

impl CovariantMetric for MetricCylindrical {
    fn g(&self, q: IR3) -> Result<SM3> {
        Ok(SM3 {
            uu: self.lref2,
            vv: self.lref2 * q.u * q.u,
            ww: self.lref2,
            ..SM3::zeros()
        })
    }

    fn del_g(&self, q: IR3) -> Result<DSM3> {
        Ok(DSM3 { vvu: 2.0 * self.lref2 * q.u, ..DSM3::zeros() })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        self.morphism.jacobian(q)
    }

    fn del_jacobian(&self, _q: IR3) -> Result<IR3> {
        Ok(IR3::new(self.lref2 * self.morphism.lref(), 0.0, 0.0))
    }

    fn g_inverse(&self, q: IR3) -> Result<SM3> {
        let ilref2 = 1.0 / self.lref2;
        Ok(SM3 {
            uu: ilref2,
            vv: ilref2 / (q.u * q.u),
            ww: ilref2,
            ..SM3::zeros()
        })
    }

    fn to_covariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        Ok(IR3::new(
            self.lref2 * b.u,
            self.lref2 * q.u * q.u * b.v,
            self.lref2 * b.w,
        ))
    }

    fn to_contravariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        let ilref2 = 1.0 / self.lref2;
        Ok(IR3::new(ilref2 * b.u, ilref2 * b.v / (q.u * q.u), ilref2 * b.w))
    }

    fn christoffel_first_kind(&self, q: IR3) -> Result<DDIR3> {
        Ok(DDIR3 {
            uvv: -self.lref2 * q.u,
            vuv: self.lref2 * q.u,
            ..DDIR3::zeros()
        })
    }

    fn christoffel_second_kind(&self, q: IR3) -> Result<DDIR3> {
        Ok(DDIR3 { uvv: -q.u, vuv: 1.0 / q.u, ..DDIR3::zeros() })
    }
}

impl ConnectedMetric for MetricCylindrical {
    fn morphism(&self) -> &dyn Morphism {
        &self.morphism
    }
}
