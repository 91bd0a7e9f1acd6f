use tensors::{DDIR3, DIR3, DSM3, IR3, SM3, contract, contract_second, quadratic, raise_dd};

use crate::{Morphism, Result};

/// Covariant metric tensor of a coordinate system over ℝ³.
///
/// Implementors answer the six components `g_ij` and their eighteen partial
/// derivatives; the rest of the contract (jacobian and its gradient, inverse
/// metric and its derivatives, Christoffel symbols of both kinds, inertial
/// force, component conversions) is derived here and may be shadowed by
/// cheaper closed forms. All methods must keep `g_ij qⁱ qʲ` in SI m².
pub trait CovariantMetric: Send + Sync {
    /// Covariant components `g_ij(q)`.
    fn g(&self, q: IR3) -> Result<SM3>;

    /// Partial derivatives `∂ₖ g_ij(q)`.
    fn del_g(&self, q: IR3) -> Result<DSM3>;

    /// Jacobian `√det g`, the volume element of the coordinate system.
    fn jacobian(&self, q: IR3) -> Result<f64> {
        Ok(self.g(q)?.determinant().sqrt())
    }

    /// Gradient of the jacobian, from `g` and `∂g` alone.
    fn del_jacobian(&self, q: IR3) -> Result<IR3> {
        let g = self.g(q)?;
        let dg = self.del_g(q)?;
        let ijacobian = 1.0 / self.jacobian(q)?;
        let aux_1a = IR3::new(g.uw * g.vw, g.uv * g.vw, g.uv * g.uw);
        let aux_1b = DIR3 {
            uu: dg.uvu, uv: dg.uwu, uw: dg.vwu,
            vu: dg.uvv, vv: dg.uwv, vw: dg.vwv,
            wu: dg.uvw, wv: dg.uww, ww: dg.vww,
        };
        let aux_1 = contract_second(&aux_1b, aux_1a);
        let aux_2a = IR3::new(g.vv * g.ww, g.uu * g.ww, g.uu * g.vv);
        let aux_2b = DIR3 {
            uu: dg.uuu, uv: dg.vvu, uw: dg.wwu,
            vu: dg.uuv, vv: dg.vvv, vw: dg.wwv,
            wu: dg.uuw, wv: dg.vvw, ww: dg.www,
        };
        let aux_2 = contract_second(&aux_2b, aux_2a);
        let aux_3a = IR3::new(g.uu * g.vw, g.vv * g.uw, g.ww * g.uv);
        let aux_3b = DIR3 {
            uu: dg.vwu, uv: dg.uwu, uw: dg.uvu,
            vu: dg.vwv, vv: dg.uwv, vw: dg.uvv,
            wu: dg.vww, wv: dg.uww, ww: dg.uvw,
        };
        let aux_3 = contract_second(&aux_3b, aux_3a);
        let aux_4a = IR3::new(g.vw * g.vw, g.uw * g.uw, g.uv * g.uv);
        let aux_4 = contract_second(&aux_2b, aux_4a);
        Ok(ijacobian * (aux_1 + 0.5 * aux_2 - aux_3 - 0.5 * aux_4))
    }

    /// Lowers the index of a contravariant vector, `B_i = g_ij Bʲ`.
    fn to_covariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        Ok(contract(&self.g(q)?, b))
    }

    /// Raises the index of a covariant vector, `Bⁱ = gⁱʲ B_j`.
    fn to_contravariant(&self, b: IR3, q: IR3) -> Result<IR3> {
        Ok(contract(&self.g_inverse(q)?, b))
    }

    /// Contravariant components `gⁱʲ(q)`.
    fn g_inverse(&self, q: IR3) -> Result<SM3> {
        Ok(self.g(q)?.inverse())
    }

    /// Derivatives of the inverse metric, `∂ₖ gⁱʲ = −gⁱᵐ ∂ₖg_mn gⁿʲ`.
    fn del_g_inverse(&self, q: IR3) -> Result<DSM3> {
        let ig = self.g_inverse(q)?;
        let sandwich = tensors::congruence(&ig, &self.del_g(q)?, &ig);
        Ok(DSM3 {
            uuu: -sandwich.uuu, uuv: -sandwich.uuv, uuw: -sandwich.uuw,
            uvu: -sandwich.uvu, uvv: -sandwich.uvv, uvw: -sandwich.uvw,
            uwu: -sandwich.uwu, uwv: -sandwich.uwv, uww: -sandwich.uww,
            vvu: -sandwich.vvu, vvv: -sandwich.vvv, vvw: -sandwich.vvw,
            vwu: -sandwich.vwu, vwv: -sandwich.vwv, vww: -sandwich.vww,
            wwu: -sandwich.wwu, wwv: -sandwich.wwv, www: -sandwich.www,
        })
    }

    /// Christoffel symbols of the first kind,
    /// `Γ_kij = ½ (∂ⱼg_ki + ∂ᵢg_kj − ∂ₖg_ij)`.
    fn christoffel_first_kind(&self, q: IR3) -> Result<DDIR3> {
        let dg = self.del_g(q)?;
        Ok(DDIR3 {
            uuu: 0.5 * dg.uuu,
            uuv: 0.5 * dg.uuv,
            uuw: 0.5 * dg.uuw,
            uvv: 0.5 * (dg.uvv + dg.uvv - dg.vvu),
            uvw: 0.5 * (dg.uvw + dg.uwv - dg.vwu),
            uww: 0.5 * (dg.uww + dg.uww - dg.wwu),
            vuu: 0.5 * (dg.uvu + dg.uvu - dg.uuv),
            vuv: 0.5 * dg.vvu,
            vuw: 0.5 * (dg.uvw + dg.vwu - dg.uwv),
            vvv: 0.5 * dg.vvv,
            vvw: 0.5 * dg.vvw,
            vww: 0.5 * (dg.vww + dg.vww - dg.wwv),
            wuu: 0.5 * (dg.uwu + dg.uwu - dg.uuw),
            wuv: 0.5 * (dg.uwv + dg.vwu - dg.uvw),
            wuw: 0.5 * dg.wwu,
            wvv: 0.5 * (dg.vwv + dg.vwv - dg.vvw),
            wvw: 0.5 * dg.wwv,
            www: 0.5 * dg.www,
        })
    }

    /// Christoffel symbols of the second kind, `Γᵏ_ij = gᵏᵐ Γ_mij`.
    fn christoffel_second_kind(&self, q: IR3) -> Result<DDIR3> {
        Ok(raise_dd(&self.g_inverse(q)?, &self.christoffel_first_kind(q)?))
    }

    /// Inertial force `−Γᵏ_ij q̇ⁱ q̇ʲ` felt by a particle moving with the
    /// contravariant velocity `dot_q`.
    fn inertial_force(&self, q: IR3, dot_q: IR3) -> Result<IR3> {
        let gamma = self.christoffel_second_kind(q)?;
        Ok(-1.0 * quadratic(&gamma, dot_q, dot_q))
    }
}

/// A covariant metric that derives from a chart map and can hand it out, so
/// that callers may move between cartesian and curvilinear components.
pub trait ConnectedMetric: CovariantMetric {
    /// The morphism this metric is connected to.
    fn morphism(&self) -> &dyn Morphism;
}
