use fields::{IR3Field, IR3FieldC1, same_metric};
use tensors::{IR3, codata, contravariant_cross, inner_product};

use crate::{DynamicsError, Gyron, Result};

/// Sign of the parallel velocity when generating a state from an energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VppSign {
    Minus,
    Plus,
}

impl VppSign {
    fn value(self) -> f64 {
        match self {
            VppSign::Minus => -1.0,
            VppSign::Plus => 1.0,
        }
    }
}

/// Littlejohn guiding-centre dynamics in general curvilinear coordinates,
///
/// `ι dq̃ᵏ/dτ = ṽ∥ bᵏ + Ω̃⁻¹ [ṽ∥ c̃ᵏ + (b × d̃)ᵏ]`,
/// `ι dṽ∥/dτ = −d̃_i (bⁱ + Ω̃⁻¹ c̃ⁱ)`,
///
/// with `d̃ = ½ μ̃ ∇̃B̃ − Ẽ + ṽ∥ ∂τb` collecting the perpendicular drives,
/// `c̃ = ṽ∥ ∇̃×b` the curvature drive and `1/ι = 1 + c̃∥/Ω̃`. The curl and
/// time derivative of the versor are recovered from the C¹ field through
/// `∇×B = B ∇×b + ∇B×b` and `∂ₜB = B ∂ₜb + b ∂ₜB`.
///
/// The state holds the curvilinear position divided by `Lref` and the signed
/// parallel velocity normalised to `Vref`; the magnetic moment is normalised
/// to `Uref/Bref` with `Uref = ½ m Vref²`.
pub struct GuidingCentre<'a> {
    lref: f64,
    vref: f64,
    tref: f64,
    qom_tilde: f64,
    mu_tilde: f64,
    magnetic_field: &'a dyn IR3FieldC1,
    electric_field: Option<&'a dyn IR3Field>,
    ib_time_factor: f64,
    ie_time_factor: f64,
    oref_tilde: f64,
    ioref_tilde: f64,
}

impl<'a> GuidingCentre<'a> {
    /// Builds the guiding-centre equations for a particle with
    /// charge-to-mass ratio `qom` (normalised to the proton's) and magnetic
    /// moment `mu` (normalised to `Uref/Bref`). The magnetic field is
    /// mandatory; an electric field, if supplied, must live on the same
    /// metric object.
    pub fn new(
        lref: f64,
        vref: f64,
        qom: f64,
        mu: f64,
        magnetic_field: &'a dyn IR3FieldC1,
        electric_field: Option<&'a dyn IR3Field>,
    ) -> Result<Self> {
        for (name, value) in [("lref", lref), ("vref", vref)] {
            if value <= 0.0 {
                return Err(DynamicsError::NonPositive { name, value });
            }
        }
        if let Some(e) = electric_field
            && !same_metric(e.metric(), magnetic_field.metric())
        {
            return Err(DynamicsError::MismatchedFieldMetrics);
        }
        let tref = lref / vref;
        let oref_tilde =
            qom * codata::E / codata::M_PROTON * magnetic_field.m_factor() * tref;
        Ok(Self {
            lref,
            vref,
            tref,
            qom_tilde: qom,
            mu_tilde: mu,
            magnetic_field,
            electric_field,
            ib_time_factor: tref / magnetic_field.t_factor(),
            ie_time_factor: electric_field.map(|e| tref / e.t_factor()).unwrap_or(0.0),
            oref_tilde,
            ioref_tilde: 1.0 / oref_tilde,
        })
    }

    pub fn lref(&self) -> f64 {
        self.lref
    }

    pub fn vref(&self) -> f64 {
        self.vref
    }

    pub fn tref(&self) -> f64 {
        self.tref
    }

    pub fn qom_tilde(&self) -> f64 {
        self.qom_tilde
    }

    pub fn mu_tilde(&self) -> f64 {
        self.mu_tilde
    }

    pub fn oref_tilde(&self) -> f64 {
        self.oref_tilde
    }

    pub fn magnetic_field(&self) -> &dyn IR3FieldC1 {
        self.magnetic_field
    }

    pub fn electric_field(&self) -> Option<&dyn IR3Field> {
        self.electric_field
    }

    /// Curvilinear position (coordinate units) of a state.
    pub fn position(&self, s: &[f64; 4]) -> IR3 {
        IR3::new(self.lref * s[0], self.lref * s[1], self.lref * s[2])
    }

    /// Signed normalised parallel velocity of a state.
    pub fn vpp(&self, s: &[f64; 4]) -> f64 {
        s[3]
    }

    /// Parallel energy `ṽ∥²`.
    pub fn energy_parallel(&self, s: &[f64; 4]) -> f64 {
        s[3] * s[3]
    }

    /// Perpendicular energy `μ̃ B̃(q, t)`.
    pub fn energy_perpendicular(&self, s: &[f64; 4], time: f64) -> Result<f64> {
        let b = self
            .magnetic_field
            .magnitude(self.position(s), self.ib_time_factor * time)?;
        Ok(self.mu_tilde * b)
    }

    /// State with the given position and total energy, the parallel velocity
    /// taking the requested sign: `ṽ∥ = ±√(Ẽ − μ̃B̃)`.
    pub fn generate_state(
        &self,
        position: IR3,
        energy_tilde: f64,
        sign: VppSign,
        time: f64,
    ) -> Result<[f64; 4]> {
        let ilref = 1.0 / self.lref;
        let b = self.magnetic_field.magnitude(position, self.ib_time_factor * time)?;
        let vpp = sign.value() * (energy_tilde - self.mu_tilde * b).sqrt();
        Ok([ilref * position.u, ilref * position.v, ilref * position.w, vpp])
    }
}

impl Gyron for GuidingCentre<'_> {
    type State = [f64; 4];

    fn dot(&self, s: &[f64; 4], time: f64) -> Result<[f64; 4]> {
        let q = self.position(s);
        let vpp = self.vpp(s);
        let jacobian = self.magnetic_field.metric().jacobian(q)?;
        let b_time = time * self.ib_time_factor;

        let covariant_b = self.magnetic_field.covariant_versor(q, b_time)?;
        let contravariant_b = self.magnetic_field.contravariant_versor(q, b_time)?;
        let inverse_b = 1.0 / self.magnetic_field.magnitude(q, b_time)?;
        let grad_b = self.lref * self.magnetic_field.del_magnitude(q, b_time)?;

        // ∇×b and ∂τb recovered from the field derivatives.
        let partial_t_b_mag =
            self.ib_time_factor * self.magnetic_field.partial_t_magnitude(q, b_time)?;
        let curl_b = inverse_b
            * (self.lref * self.magnetic_field.curl(q, b_time)?
                - contravariant_cross(grad_b, covariant_b, jacobian));
        let partial_t_b = inverse_b
            * (self.ib_time_factor * self.magnetic_field.partial_t_covariant(q, b_time)?
                - partial_t_b_mag * covariant_b);

        let c_tilde = vpp * curl_b;
        let mut d_tilde = 0.5 * self.mu_tilde * grad_b + vpp * partial_t_b;
        if let Some(e) = self.electric_field {
            let e_time = time * self.ie_time_factor;
            d_tilde -= self.oref_tilde * e.covariant(q, e_time)?;
        }

        let i_omega = self.ioref_tilde * inverse_b;
        let iota = 1.0 / (1.0 + i_omega * inner_product(covariant_b, c_tilde));

        let dot_x = iota
            * (vpp * contravariant_b
                + i_omega
                    * (vpp * c_tilde + contravariant_cross(covariant_b, d_tilde, jacobian)));
        let dot_vpp = -iota * inner_product(contravariant_b + i_omega * c_tilde, d_tilde);
        Ok([dot_x.u, dot_x.v, dot_x.w, dot_vpp])
    }
}
