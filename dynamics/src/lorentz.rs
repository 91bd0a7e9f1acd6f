use fields::{IR3Field, same_metric};
use geometry::CovariantMetric;
use tensors::{IR3, codata, covariant_cross, inner_product};

use crate::{DynamicsError, Gyron, Result};

/// Full Lorentz-force dynamics in general curvilinear coordinates,
///
/// `dq̃ᵏ/dτ = ṽᵏ`,
/// `dṽᵏ/dτ = Ω̃ref (ṽ×B̃)ᵏ + Ẽref Ẽᵏ − Γ̃ᵏ_ij ṽⁱ ṽʲ`.
///
/// The state holds the curvilinear position divided by `Lref` and the three
/// contravariant components of the velocity normalised to `Vref`. The
/// equations work over whatever metric the fields point to; the cross
/// product is resolved covariantly and raised back through the metric, and
/// the inertial force comes from the metric so specialised charts keep their
/// closed forms.
pub struct Lorentz<'a> {
    lref: f64,
    vref: f64,
    tref: f64,
    qom_tilde: f64,
    magnetic_field: &'a dyn IR3Field,
    electric_field: Option<&'a dyn IR3Field>,
    ib_time_factor: f64,
    ie_time_factor: f64,
    oref_tilde: f64,
    eref_tilde: f64,
    metric: &'a dyn CovariantMetric,
}

impl<'a> Lorentz<'a> {
    /// Builds the equations of motion for a particle with charge-to-mass
    /// ratio `qom` (normalised to the proton's). The magnetic field is
    /// mandatory; an electric field, if supplied, must live on the same
    /// metric object.
    pub fn new(
        lref: f64,
        vref: f64,
        qom: f64,
        magnetic_field: &'a dyn IR3Field,
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
        let eref_tilde = electric_field
            .map(|e| oref_tilde * e.m_factor() / (magnetic_field.m_factor() * vref))
            .unwrap_or(0.0);
        Ok(Self {
            lref,
            vref,
            tref,
            qom_tilde: qom,
            magnetic_field,
            electric_field,
            ib_time_factor: tref / magnetic_field.t_factor(),
            ie_time_factor: electric_field.map(|e| tref / e.t_factor()).unwrap_or(0.0),
            oref_tilde,
            eref_tilde,
            metric: magnetic_field.metric(),
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

    pub fn oref_tilde(&self) -> f64 {
        self.oref_tilde
    }

    pub fn eref_tilde(&self) -> f64 {
        self.eref_tilde
    }

    pub fn magnetic_field(&self) -> &dyn IR3Field {
        self.magnetic_field
    }

    pub fn electric_field(&self) -> Option<&dyn IR3Field> {
        self.electric_field
    }

    /// Curvilinear position (coordinate units) of a state.
    pub fn position(&self, s: &[f64; 6]) -> IR3 {
        IR3::new(self.lref * s[0], self.lref * s[1], self.lref * s[2])
    }

    /// Contravariant normalised velocity of a state.
    pub fn velocity(&self, s: &[f64; 6]) -> IR3 {
        IR3::new(s[3], s[4], s[5])
    }

    /// Assembles a state from a curvilinear position and a contravariant
    /// normalised velocity.
    pub fn generate_state(&self, q: IR3, v: IR3) -> [f64; 6] {
        [q.u / self.lref, q.v / self.lref, q.w / self.lref, v.u, v.v, v.w]
    }

    /// Kinetic energy `|ṽ|²`, in `Uref = ½ m Vref²` units.
    pub fn energy_kinetic(&self, s: &[f64; 6]) -> Result<f64> {
        let q = self.position(s);
        let v = self.velocity(s);
        Ok(inner_product(v, self.metric.to_covariant(v, q)?))
    }

    /// Parallel energy `ṽ∥²` at a given time.
    pub fn energy_parallel(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        let q = self.position(s);
        let v = self.velocity(s);
        let b = self.magnetic_field.covariant_versor(q, self.ib_time_factor * time)?;
        let v_parallel = inner_product(v, b);
        Ok(v_parallel * v_parallel)
    }

    /// Perpendicular energy `|ṽ×b|²` at a given time.
    pub fn energy_perpendicular(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        let q = self.position(s);
        let v = self.velocity(s);
        let b = self.magnetic_field.contravariant_versor(q, self.ib_time_factor * time)?;
        let v_perpendicular = covariant_cross(v, b, self.metric.jacobian(q)?);
        Ok(inner_product(v_perpendicular, self.metric.to_contravariant(v_perpendicular, q)?))
    }
}

impl Gyron for Lorentz<'_> {
    type State = [f64; 6];

    fn dot(&self, s: &[f64; 6], time: f64) -> Result<[f64; 6]> {
        let q = self.position(s);
        let v = self.velocity(s);
        let b = self.magnetic_field.contravariant(q, self.ib_time_factor * time)?;
        let v_cross_b = covariant_cross(v, b, self.metric.jacobian(q)?);
        let mut dot_v = self.lref * self.metric.inertial_force(q, v)?
            + self.oref_tilde * self.metric.to_contravariant(v_cross_b, q)?;
        if let Some(e) = self.electric_field {
            dot_v += self.eref_tilde * e.contravariant(q, self.ie_time_factor * time)?;
        }
        Ok([v.u, v.v, v.w, dot_v.u, dot_v.v, dot_v.w])
    }
}
