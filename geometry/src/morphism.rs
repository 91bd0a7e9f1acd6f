use tensors::{DDIR3, DIR3, IR3, contract_first, contract_second};

use crate::Result;

/// Chart map `x(q)` from a set of curvilinear coordinates `q` into cartesian
/// space (SI metres), together with its inverse and derivatives.
///
/// Implementors provide the forward map, the inverse map and the first and
/// second derivative stacks; everything else (jacobian, inverse derivative,
/// bases, component conversions, translations) is derived here and may be
/// shadowed with closed forms where the chart allows it. Evaluation returns
/// `Result` so interpolated charts can surface domain and solver errors.
pub trait Morphism: Send + Sync {
    /// Cartesian image `x(q)`.
    fn point(&self, q: IR3) -> Result<IR3>;

    /// Curvilinear pre-image `q(x)`; undefined on coordinate singularities.
    fn inverse(&self, x: IR3) -> Result<IR3>;

    /// Derivative stack `∂ⱼxⁱ`.
    fn del(&self, q: IR3) -> Result<DIR3>;

    /// Second-derivative stack `∂ₖ∂ⱼxⁱ`.
    fn ddel(&self, q: IR3) -> Result<DDIR3>;

    /// Transformation jacobian `det(∂x/∂q)`, also the volume element.
    fn jacobian(&self, q: IR3) -> Result<f64> {
        Ok(self.del(q)?.determinant())
    }

    /// Derivative of the inverse map, `∂q/∂x` evaluated at `x(q)`.
    fn del_inverse(&self, q: IR3) -> Result<DIR3> {
        Ok(self.del(q)?.inverse())
    }

    /// Tangent basis `{e_i = ∂x/∂qⁱ}`: the columns of [`Morphism::del`].
    fn tan_basis(&self, q: IR3) -> Result<[IR3; 3]> {
        let d = self.del(q)?;
        Ok([
            IR3::new(d.uu, d.vu, d.wu),
            IR3::new(d.uv, d.vv, d.wv),
            IR3::new(d.uw, d.vw, d.ww),
        ])
    }

    /// Dual basis `{eⁱ = ∇qⁱ}`: the rows of [`Morphism::del_inverse`].
    fn dual_basis(&self, q: IR3) -> Result<[IR3; 3]> {
        let d = self.del_inverse(q)?;
        Ok([
            IR3::new(d.uu, d.uv, d.uw),
            IR3::new(d.vu, d.vv, d.vw),
            IR3::new(d.wu, d.wv, d.ww),
        ])
    }

    /// Covariant components of a cartesian vector `A` at `q`.
    fn to_covariant(&self, a: IR3, q: IR3) -> Result<IR3> {
        Ok(contract_first(&self.del(q)?, a))
    }

    /// Contravariant components of a cartesian vector `A` at `q`.
    fn to_contravariant(&self, a: IR3, q: IR3) -> Result<IR3> {
        Ok(contract_second(&self.del_inverse(q)?, a))
    }

    /// Cartesian vector from covariant components at `q`.
    fn from_covariant(&self, a: IR3, q: IR3) -> Result<IR3> {
        Ok(contract_first(&self.del_inverse(q)?, a))
    }

    /// Cartesian vector from contravariant components at `q`.
    fn from_contravariant(&self, a: IR3, q: IR3) -> Result<IR3> {
        Ok(contract_second(&self.del(q)?, a))
    }

    /// Curvilinear coordinates of the point reached by the cartesian
    /// displacement `delta` from `x(q)`.
    fn translation(&self, q: IR3, delta: IR3) -> Result<IR3> {
        self.inverse(self.point(q)? + delta)
    }
}
