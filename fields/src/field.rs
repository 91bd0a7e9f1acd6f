use geometry::CovariantMetric;
use tensors::{DIR3, IR3, contract_first, dsm3_contract_first, inner_product, lower_first};

use crate::{FieldError, Result};

/// Whether two metric handles refer to the same metric **object**.
///
/// Composites and dynamics validate shared geometry by address identity, the
/// only notion of "same coordinates" that survives type erasure.
pub fn same_metric(a: &dyn CovariantMetric, b: &dyn CovariantMetric) -> bool {
    std::ptr::addr_eq(a as *const dyn CovariantMetric, b as *const dyn CovariantMetric)
}

/// Checks the two field normalisations at construction time.
pub(crate) fn check_factors(m_factor: f64, t_factor: f64) -> Result<()> {
    if m_factor <= f64::EPSILON {
        return Err(FieldError::NonPositive { name: "m_factor", value: m_factor });
    }
    if t_factor <= f64::EPSILON {
        return Err(FieldError::NonPositive { name: "t_factor", value: t_factor });
    }
    Ok(())
}

/// Time-dependent 3-vector field over a covariant metric.
///
/// Only **adimensional** values are ever returned: multiply by
/// [`m_factor`](IR3Field::m_factor) for SI magnitudes and feed times
/// normalised to [`t_factor`](IR3Field::t_factor). Implementors answer the
/// contravariant components; covariant components, magnitude and versors are
/// derived through the metric and may be shadowed with closed forms.
pub trait IR3Field: Send + Sync {
    /// Contravariant components of the adimensional field.
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3>;

    /// Magnitude normalisation \[SI\].
    fn m_factor(&self) -> f64;

    /// Time normalisation \[s\].
    fn t_factor(&self) -> f64;

    /// The metric defining the field's coordinates.
    fn metric(&self) -> &dyn CovariantMetric;

    /// Covariant components, `B_i = g_ij Bʲ`.
    fn covariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let a = self.contravariant(position, time)?;
        Ok(self.metric().to_covariant(a, position)?)
    }

    /// Field magnitude, `|B| = √(B_i Bⁱ)`.
    fn magnitude(&self, position: IR3, time: f64) -> Result<f64> {
        let a = self.contravariant(position, time)?;
        let b = self.metric().to_covariant(a, position)?;
        Ok(inner_product(a, b).sqrt())
    }

    /// Covariant components of the field versor.
    fn covariant_versor(&self, position: IR3, time: f64) -> Result<IR3> {
        let imagnitude = 1.0 / self.magnitude(position, time)?;
        Ok(imagnitude * self.covariant(position, time)?)
    }

    /// Contravariant components of the field versor.
    fn contravariant_versor(&self, position: IR3, time: f64) -> Result<IR3> {
        let imagnitude = 1.0 / self.magnitude(position, time)?;
        Ok(imagnitude * self.contravariant(position, time)?)
    }
}

/// Continuously differentiable field: spatial derivatives of the
/// contravariant components and the time derivative are also available, and
/// from them curl and magnitude gradients.
///
/// Spatial derivatives are taken with respect to the coordinates of the
/// metric, time derivatives with respect to the field's own normalised time.
pub trait IR3FieldC1: IR3Field {
    /// Derivatives `∂ⱼBⁱ` of the contravariant components.
    fn del_contravariant(&self, position: IR3, time: f64) -> Result<DIR3>;

    /// Time derivative of the contravariant components.
    fn partial_t_contravariant(&self, position: IR3, time: f64) -> Result<IR3>;

    /// Derivatives of the covariant components,
    /// `∂ᵢB_j = g_jk ∂ᵢBᵏ + (∂ᵢg_jk) Bᵏ`.
    fn del_covariant(&self, position: IR3, time: f64) -> Result<DIR3> {
        let g = self.metric();
        let c1 = dsm3_contract_first(&g.del_g(position)?, self.contravariant(position, time)?);
        let c2 = lower_first(&g.g(position)?, &self.del_contravariant(position, time)?);
        Ok(DIR3 {
            uu: c1.uu + c2.uu, uv: c1.uv + c2.uv, uw: c1.uw + c2.uw,
            vu: c1.vu + c2.vu, vv: c1.vv + c2.vv, vw: c1.vw + c2.vw,
            wu: c1.wu + c2.wu, wv: c1.wv + c2.wv, ww: c1.ww + c2.ww,
        })
    }

    /// Time derivative of the covariant components, `g_jk ∂ₜBᵏ`.
    fn partial_t_covariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let db = self.partial_t_contravariant(position, time)?;
        Ok(self.metric().to_covariant(db, position)?)
    }

    /// Curl, `(∇×B)ᵏ = εᵏⁱʲ ∂ᵢB_j / √g` (contravariant components).
    fn curl(&self, position: IR3, time: f64) -> Result<IR3> {
        let ijacobian = 1.0 / self.metric().jacobian(position)?;
        let db = self.del_covariant(position, time)?;
        Ok(IR3::new(
            (db.wv - db.vw) * ijacobian,
            (db.uw - db.wu) * ijacobian,
            (db.vu - db.uv) * ijacobian,
        ))
    }

    /// Magnitude gradient (covariant components),
    /// `2B ∂ᵢB = B_j ∂ᵢBʲ + Bʲ ∂ᵢB_j`.
    fn del_magnitude(&self, position: IR3, time: f64) -> Result<IR3> {
        let half_imagnitude = 0.5 / self.magnitude(position, time)?;
        Ok(half_imagnitude
            * (contract_first(
                &self.del_covariant(position, time)?,
                self.contravariant(position, time)?,
            ) + contract_first(
                &self.del_contravariant(position, time)?,
                self.covariant(position, time)?,
            )))
    }

    /// Magnitude time derivative, by the same product rule as
    /// [`del_magnitude`](IR3FieldC1::del_magnitude).
    fn partial_t_magnitude(&self, position: IR3, time: f64) -> Result<f64> {
        let half_imagnitude = 0.5 / self.magnitude(position, time)?;
        Ok(half_imagnitude
            * (inner_product(
                self.partial_t_covariant(position, time)?,
                self.contravariant(position, time)?,
            ) + inner_product(
                self.partial_t_contravariant(position, time)?,
                self.covariant(position, time)?,
            )))
    }
}
