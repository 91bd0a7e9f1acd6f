use tensors::{DDIR3, DIR3, DSM3, IR3, SM3};

use crate::{ConnectedMetric, CovariantMetric, GeometryError, Morphism, Result};

/// Identity chart scaled by a reference length: `x = Lref·q`.
pub struct MorphismCartesian {
    lref: f64,
    ilref: f64,
    lref3: f64,
}

impl MorphismCartesian {
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

impl Morphism for MorphismCartesian {
    fn point(&self, q: IR3) -> Result<IR3> {
        Ok(self.lref * q)
    }

    fn inverse(&self, x: IR3) -> Result<IR3> {
        Ok(self.ilref * x)
    }

    fn del(&self, _q: IR3) -> Result<DIR3> {
        Ok(DIR3 { uu: self.lref, vv: self.lref, ww: self.lref, ..DIR3::zeros() })
    }

    fn ddel(&self, _q: IR3) -> Result<DDIR3> {
        Ok(DDIR3::zeros())
    }

    fn jacobian(&self, _q: IR3) -> Result<f64> {
        Ok(self.lref3)
    }

    fn del_inverse(&self, _q: IR3) -> Result<DIR3> {
        Ok(DIR3 { uu: self.ilref, vv: self.ilref, ww: self.ilref, ..DIR3::zeros() })
    }

    fn to_covariant(&self, a: IR3, _q: IR3) -> Result<IR3> {
        Ok(self.lref * a)
    }

    fn to_contravariant(&self, a: IR3, _q: IR3) -> Result<IR3> {
        Ok(self.ilref * a)
    }

    fn from_covariant(&self, a: IR3, _q: IR3) -> Result<IR3> {
        Ok(self.ilref * a)
    }

    fn from_contravariant(&self, a: IR3, _q: IR3) -> Result<IR3> {
        Ok(self.lref * a)
    }

    fn translation(&self, q: IR3, delta: IR3) -> Result<IR3> {
        Ok(q + self.ilref * delta)
    }
}

/// Euclidean metric of the scaled-identity chart: `g = Lref² δ_ij`.
pub struct MetricCartesian {
    morphism: MorphismCartesian,
    lref2: f64,
    ilref2: f64,
}

impl MetricCartesian {
    pub fn new(lref: f64) -> Result<Self> {
        let morphism = MorphismCartesian::new(lref)?;
        Ok(Self { morphism, lref2: lref * lref, ilref2: 1.0 / (lref * lref) })
    }

    pub fn lref(&self) -> f64 {
        self.morphism.lref()
    }
}

impl CovariantMetric for MetricCartesian {
    fn g(&self, _q: IR3) -> Result<SM3> {
        Ok(SM3 { uu: self.lref2, vv: self.lref2, ww: self.lref2, ..SM3::zeros() })
    }

    fn del_g(&self, _q: IR3) -> Result<DSM3> {
        Ok(DSM3::zeros())
    }

    fn jacobian(&self, _q: IR3) -> Result<f64> {
        Ok(self.lref2 * self.morphism.lref())
    }

    fn del_jacobian(&self, _q: IR3) -> Result<IR3> {
        Ok(IR3::zeros())
    }

    fn to_covariant(&self, b: IR3, _q: IR3) -> Result<IR3> {
        Ok(self.lref2 * b)
    }

    fn to_contravariant(&self, b: IR3, _q: IR3) -> Result<IR3> {
        Ok(self.ilref2 * b)
    }

    fn christoffel_first_kind(&self, _q: IR3) -> Result<DDIR3> {
        Ok(DDIR3::zeros())
    }

    fn christoffel_second_kind(&self, _q: IR3) -> Result<DDIR3> {
        Ok(DDIR3::zeros())
    }

    fn inertial_force(&self, _q: IR3, _dot_q: IR3) -> Result<IR3> {
        Ok(IR3::zeros())
    }
}

impl ConnectedMetric for MetricCartesian {
    fn morphism(&self) -> &dyn Morphism {
        &self.morphism
    }
}
