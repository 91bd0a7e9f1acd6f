use tensors::{DDIR3, DSM3, IR3, SM3, dd_contract_first, dd_contract_second, inner_product};

use crate::{ConnectedMetric, CovariantMetric, Morphism, Result};

/// Covariant metric derived entirely from a borrowed morphism.
///
/// Nothing geometric is duplicated: the metric comes from the tangent basis,
/// the Christoffel symbols from the morphism derivative stacks, the metric
/// derivatives from the symbols, and the jacobian from the chart itself.
/// Charts that can do better (interpolated metric components, closed forms)
/// ship their own `CovariantMetric` implementation instead.
pub struct MetricConnected<'a> {
    morphism: &'a dyn Morphism,
}

impl<'a> MetricConnected<'a> {
    pub fn new(morphism: &'a dyn Morphism) -> Self {
        Self { morphism }
    }
}

impl CovariantMetric for MetricConnected<'_> {
    /// `g_ij = e_i · e_j` over the tangent basis.
    fn g(&self, q: IR3) -> Result<SM3> {
        let [e1, e2, e3] = self.morphism.tan_basis(q)?;
        Ok(SM3 {
            uu: inner_product(e1, e1),
            uv: inner_product(e1, e2),
            uw: inner_product(e1, e3),
            vv: inner_product(e2, e2),
            vw: inner_product(e2, e3),
            ww: inner_product(e3, e3),
        })
    }

    /// `∂ₖ g_ij = Γ_ijk + Γ_jik`, from the symbols without touching the
    /// morphism again.
    fn del_g(&self, q: IR3) -> Result<DSM3> {
        let gamma = self.christoffel_first_kind(q)?;
        Ok(DSM3 {
            uuu: gamma.uuu + gamma.uuu,
            uuv: gamma.uuv + gamma.uuv,
            uuw: gamma.uuw + gamma.uuw,
            uvu: gamma.uuv + gamma.vuu,
            uvv: gamma.uvv + gamma.vuv,
            uvw: gamma.uvw + gamma.vuw,
            uwu: gamma.uuw + gamma.wuu,
            uwv: gamma.uvw + gamma.wuv,
            uww: gamma.uww + gamma.wuw,
            vvu: gamma.vuv + gamma.vuv,
            vvv: gamma.vvv + gamma.vvv,
            vvw: gamma.vvw + gamma.vvw,
            vwu: gamma.vuw + gamma.wuv,
            vwv: gamma.vvw + gamma.wvv,
            vww: gamma.vww + gamma.wvw,
            wwu: gamma.wuw + gamma.wuw,
            wwv: gamma.wvw + gamma.wvw,
            www: gamma.www + gamma.www,
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        self.morphism.jacobian(q)
    }

    /// `∂ᵢJ = J (Γ¹_i1 + Γ²_i2 + Γ³_i3)`.
    fn del_jacobian(&self, q: IR3) -> Result<IR3> {
        let jacobian = self.jacobian(q)?;
        let gamma = self.christoffel_second_kind(q)?;
        Ok(IR3::new(
            jacobian * (gamma.uuu + gamma.vuv + gamma.wuw),
            jacobian * (gamma.uuv + gamma.vvv + gamma.wvw),
            jacobian * (gamma.uuw + gamma.vvw + gamma.www),
        ))
    }

    /// `Γ_kij = e_k · ∂²x/∂qⁱ∂qʲ`.
    fn christoffel_first_kind(&self, q: IR3) -> Result<DDIR3> {
        Ok(dd_contract_first(&self.morphism.del(q)?, &self.morphism.ddel(q)?))
    }

    /// `Γᵏ_ij = eᵏ · ∂²x/∂qⁱ∂qʲ`.
    fn christoffel_second_kind(&self, q: IR3) -> Result<DDIR3> {
        Ok(dd_contract_second(&self.morphism.del_inverse(q)?, &self.morphism.ddel(q)?))
    }
}

impl ConnectedMetric for MetricConnected<'_> {
    fn morphism(&self) -> &dyn Morphism {
        self.morphism
    }
}
