use fields::{IR3Field, same_metric};
use geometry::{ConnectedMetric, CovariantMetric, MetricCartesian, Morphism};
use tensors::{IR3, codata, cross_product, inner_product};

use crate::{DynamicsError, Lorentz, Result, rk4_step};

/// Boris velocity rotation in a magnetic field: with
/// `T = tan(½ Ω̃ref Δτ B̃)` and `S = 2T/(1+T²)`,
/// `v' = v + T(v×b)`, `v⁺ = v + S(v'×b)`.
///
/// Velocity and field versor are cartesian-valued; the rotation angle is
/// exact thanks to the tangent half-angle form.
pub fn boris_push(velocity: IR3, oref_tilde: f64, b_norm: f64, b_versor: IR3, dt: f64) -> IR3 {
    let t = (0.5 * oref_tilde * dt * b_norm).tan();
    let s = 2.0 * t / (1.0 + t * t);
    let v_prime = velocity + t * cross_product(velocity, b_versor);
    velocity + s * cross_product(v_prime, b_versor)
}

/// Full Boris kick–rotate–kick update: electric half-impulse, magnetic
/// rotation, electric half-impulse.
pub fn boris_push_with_electric(
    velocity: IR3,
    oref_tilde: f64,
    eref_tilde: f64,
    e_cart: IR3,
    b_norm: f64,
    b_versor: IR3,
    dt: f64,
) -> IR3 {
    let half_e_impulse = (0.5 * eref_tilde * dt) * e_cart;
    let v_minus = velocity + half_e_impulse;
    let v_plus = boris_push(v_minus, oref_tilde, b_norm, b_versor, dt);
    v_plus + half_e_impulse
}

/// Normalisation factors and field handles shared by the three steppers.
struct BorisCore<'a> {
    lref: f64,
    vref: f64,
    tref: f64,
    qom: f64,
    oref: f64,
    magnetic_field: &'a dyn IR3Field,
    electric_field: Option<&'a dyn IR3Field>,
    ib_time_factor: f64,
    ie_time_factor: f64,
    eref_tilde: f64,
}

impl<'a> BorisCore<'a> {
    fn new(
        lref: f64,
        vref: f64,
        qom: f64,
        magnetic_field: &'a dyn IR3Field,
        electric_field: Option<&'a dyn IR3Field>,
        metric: &dyn CovariantMetric,
    ) -> Result<Self> {
        for (name, value) in [("lref", lref), ("vref", vref)] {
            if value <= 0.0 {
                return Err(DynamicsError::NonPositive { name, value });
            }
        }
        if !same_metric(magnetic_field.metric(), metric) {
            return Err(DynamicsError::ForeignMetric);
        }
        if let Some(e) = electric_field
            && !same_metric(e.metric(), magnetic_field.metric())
        {
            return Err(DynamicsError::MismatchedFieldMetrics);
        }
        let tref = lref / vref;
        let oref = qom * codata::E / codata::M_PROTON * magnetic_field.m_factor() * tref;
        let eref_tilde = electric_field
            .map(|e| oref * e.m_factor() / (magnetic_field.m_factor() * vref))
            .unwrap_or(0.0);
        Ok(Self {
            lref,
            vref,
            tref,
            qom,
            oref,
            magnetic_field,
            electric_field,
            ib_time_factor: tref / magnetic_field.t_factor(),
            ie_time_factor: electric_field.map(|e| tref / e.t_factor()).unwrap_or(0.0),
            eref_tilde,
        })
    }
}

/// Boris stepper over a cartesian chart: positions and velocities are
/// cartesian (SI metres, `Vref` units), the fields' contravariant components
/// are read as cartesian directly and the position update is the straight
/// line `x ← x + (Lref Δτ) v`.
pub struct CartesianBoris<'a> {
    core: BorisCore<'a>,
}

impl<'a> CartesianBoris<'a> {
    /// The supplied metric must be the cartesian metric the fields live on.
    pub fn new(
        lref: f64,
        vref: f64,
        qom: f64,
        magnetic_field: &'a dyn IR3Field,
        electric_field: Option<&'a dyn IR3Field>,
        metric: &'a MetricCartesian,
    ) -> Result<Self> {
        Ok(Self {
            core: BorisCore::new(lref, vref, qom, magnetic_field, electric_field, metric)?,
        })
    }

    pub fn lref(&self) -> f64 {
        self.core.lref
    }

    pub fn vref(&self) -> f64 {
        self.core.vref
    }

    pub fn tref(&self) -> f64 {
        self.core.tref
    }

    pub fn oref(&self) -> f64 {
        self.core.oref
    }

    pub fn position(&self, s: &[f64; 6]) -> IR3 {
        IR3::new(s[0], s[1], s[2])
    }

    pub fn velocity(&self, s: &[f64; 6]) -> IR3 {
        IR3::new(s[3], s[4], s[5])
    }

    pub fn generate_state(&self, x: IR3, v: IR3) -> [f64; 6] {
        [x.u, x.v, x.w, v.u, v.v, v.w]
    }

    /// Advances the state by one time step `dt` (normalised to `Tref`).
    pub fn do_step(&self, s: &[f64; 6], time: f64, dt: f64) -> Result<[f64; 6]> {
        let core = &self.core;
        let x = self.position(s);
        let v = self.velocity(s);
        let b_time = time * core.ib_time_factor;
        let b_norm = core.magnetic_field.magnitude(x, b_time)?;
        let b_versor = core.magnetic_field.contravariant_versor(x, b_time)?;
        let updated_v = match core.electric_field {
            Some(e) => {
                let e_cart = e.contravariant(x, time * core.ie_time_factor)?;
                boris_push_with_electric(
                    v,
                    core.oref,
                    core.eref_tilde,
                    e_cart,
                    b_norm,
                    b_versor,
                    dt,
                )
            }
            None => boris_push(v, core.oref, b_norm, b_versor, dt),
        };
        let updated_x = x + (core.lref * dt) * updated_v;
        Ok(self.generate_state(updated_x, updated_v))
    }

    /// Kinetic energy `|ṽ|²`.
    pub fn energy_kinetic(&self, s: &[f64; 6]) -> f64 {
        let v = self.velocity(s);
        inner_product(v, v)
    }

    pub fn energy_parallel(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        let b = self
            .core
            .magnetic_field
            .contravariant_versor(self.position(s), time * self.core.ib_time_factor)?;
        let v_parallel = inner_product(self.velocity(s), b);
        Ok(v_parallel * v_parallel)
    }

    pub fn energy_perpendicular(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        let b = self
            .core
            .magnetic_field
            .contravariant_versor(self.position(s), time * self.core.ib_time_factor)?;
        let v_perpendicular = cross_product(self.velocity(s), b);
        Ok(inner_product(v_perpendicular, v_perpendicular))
    }

    /// Integrates the matched Lorentz system backwards by `Δτ/2` to produce
    /// the staggered initial condition `(x₀, v₋₁/₂)` from a Cauchy pair.
    pub fn half_back_step(&self, x: IR3, v: IR3, time: f64, dt: f64) -> Result<[f64; 6]> {
        let core = &self.core;
        let lorentz =
            Lorentz::new(core.lref, core.vref, core.qom, core.magnetic_field, core.electric_field)?;
        let state = lorentz.generate_state(x, v);
        let back = rk4_step(&lorentz, &state, time, -0.5 * dt)?;
        let v_half_back = lorentz.velocity(&back);
        Ok(self.generate_state(x, v_half_back))
    }
}

/// Boris stepper over an arbitrary connected chart: the velocity update runs
/// in cartesian space (fields pulled back through the morphism), the
/// position update re-inverts the chart at the translated cartesian point.
pub struct ClassicalBoris<'a> {
    core: BorisCore<'a>,
    morphism: &'a dyn Morphism,
}

impl<'a> ClassicalBoris<'a> {
    /// The supplied metric must be the connected metric the fields live on.
    pub fn new(
        lref: f64,
        vref: f64,
        qom: f64,
        magnetic_field: &'a dyn IR3Field,
        electric_field: Option<&'a dyn IR3Field>,
        metric: &'a dyn ConnectedMetric,
    ) -> Result<Self> {
        let covariant: &dyn CovariantMetric = metric;
        Ok(Self {
            core: BorisCore::new(lref, vref, qom, magnetic_field, electric_field, covariant)?,
            morphism: metric.morphism(),
        })
    }

    pub fn morphism(&self) -> &dyn Morphism {
        self.morphism
    }

    pub fn position(&self, s: &[f64; 6]) -> IR3 {
        IR3::new(s[0], s[1], s[2])
    }

    pub fn velocity(&self, s: &[f64; 6]) -> IR3 {
        IR3::new(s[3], s[4], s[5])
    }

    pub fn generate_state(&self, q: IR3, v: IR3) -> [f64; 6] {
        [q.u, q.v, q.w, v.u, v.v, v.w]
    }

    /// Cartesian field data at a state: `|B̃|`, the cartesian field versor
    /// and the cartesian electric field.
    fn cartesian_field_data(&self, s: &[f64; 6], time: f64) -> Result<(f64, IR3, IR3)> {
        let core = &self.core;
        let q = self.position(s);
        let e_cart = match core.electric_field {
            Some(e) => self
                .morphism
                .from_contravariant(e.contravariant(q, time * core.ie_time_factor)?, q)?,
            None => IR3::zeros(),
        };
        let b_cart = self.morphism.from_contravariant(
            core.magnetic_field.contravariant(q, time * core.ib_time_factor)?,
            q,
        )?;
        let b_norm = inner_product(b_cart, b_cart).sqrt();
        Ok((b_norm, b_cart / b_norm, e_cart))
    }

    fn cartesian_velocity_update(&self, s: &[f64; 6], time: f64, dt: f64) -> Result<IR3> {
        let (b_norm, b_versor, e_cart) = self.cartesian_field_data(s, time)?;
        Ok(boris_push_with_electric(
            self.velocity(s),
            self.core.oref,
            self.core.eref_tilde,
            e_cart,
            b_norm,
            b_versor,
            dt,
        ))
    }

    /// Advances the state by one time step, re-inverting the chart at the
    /// translated cartesian point.
    pub fn do_step(&self, s: &[f64; 6], time: f64, dt: f64) -> Result<[f64; 6]> {
        let q = self.position(s);
        let updated_v = self.cartesian_velocity_update(s, time, dt)?;
        let updated_q = self.morphism.translation(q, (self.core.lref * dt) * updated_v)?;
        Ok(self.generate_state(updated_q, updated_v))
    }

    pub fn energy_kinetic(&self, s: &[f64; 6]) -> f64 {
        let v = self.velocity(s);
        inner_product(v, v)
    }

    pub fn energy_parallel(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        let q = self.position(s);
        let b = self.morphism.from_contravariant(
            self.core
                .magnetic_field
                .contravariant_versor(q, time * self.core.ib_time_factor)?,
            q,
        )?;
        let v_parallel = inner_product(self.velocity(s), b);
        Ok(v_parallel * v_parallel)
    }

    pub fn energy_perpendicular(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        let q = self.position(s);
        let b = self.morphism.from_contravariant(
            self.core
                .magnetic_field
                .contravariant_versor(q, time * self.core.ib_time_factor)?,
            q,
        )?;
        let v_perpendicular = cross_product(self.velocity(s), b);
        Ok(inner_product(v_perpendicular, v_perpendicular))
    }

    /// Integrates the matched Lorentz system backwards by `Δτ/2` to produce
    /// the staggered initial condition `(q₀, v₋₁/₂)` from a Cauchy pair.
    pub fn half_back_step(&self, q: IR3, v: IR3, time: f64, dt: f64) -> Result<[f64; 6]> {
        let core = &self.core;
        let lorentz =
            Lorentz::new(core.lref, core.vref, core.qom, core.magnetic_field, core.electric_field)?;
        let state = lorentz.generate_state(q, self.morphism.to_contravariant(v, q)?);
        let back = rk4_step(&lorentz, &state, time, -0.5 * dt)?;
        let q_half_back = lorentz.position(&back);
        let v_half_back =
            self.morphism.from_contravariant(lorentz.velocity(&back), q_half_back)?;
        Ok(self.generate_state(q, v_half_back))
    }
}

/// Boris stepper with the Delzanno curvilinear position update: the velocity
/// rotation runs in cartesian space as in [`ClassicalBoris`], but the
/// position advances through the midpoint rule
/// `q½ = q + ½ Lref Δτ (e₀ᵏ·v)`, `q ← q + Lref Δτ (e½ᵏ·v)`, avoiding the
/// chart inversion entirely.
pub struct CurvilinearBoris<'a> {
    inner: ClassicalBoris<'a>,
}

impl<'a> CurvilinearBoris<'a> {
    pub fn new(
        lref: f64,
        vref: f64,
        qom: f64,
        magnetic_field: &'a dyn IR3Field,
        electric_field: Option<&'a dyn IR3Field>,
        metric: &'a dyn ConnectedMetric,
    ) -> Result<Self> {
        Ok(Self {
            inner: ClassicalBoris::new(lref, vref, qom, magnetic_field, electric_field, metric)?,
        })
    }

    pub fn position(&self, s: &[f64; 6]) -> IR3 {
        self.inner.position(s)
    }

    pub fn velocity(&self, s: &[f64; 6]) -> IR3 {
        self.inner.velocity(s)
    }

    pub fn generate_state(&self, q: IR3, v: IR3) -> [f64; 6] {
        self.inner.generate_state(q, v)
    }

    pub fn do_step(&self, s: &[f64; 6], time: f64, dt: f64) -> Result<[f64; 6]> {
        let lref_dt = self.inner.core.lref * dt;
        let morphism = self.inner.morphism;
        let q = self.position(s);
        let updated_v = self.inner.cartesian_velocity_update(s, time, dt)?;
        let dot_q_star = morphism.to_contravariant(updated_v, q)?;
        let q_half_step = q + (0.5 * lref_dt) * dot_q_star;
        let dot_q_half_step = morphism.to_contravariant(updated_v, q_half_step)?;
        let updated_q = q + lref_dt * dot_q_half_step;
        Ok(self.generate_state(updated_q, updated_v))
    }

    pub fn energy_kinetic(&self, s: &[f64; 6]) -> f64 {
        self.inner.energy_kinetic(s)
    }

    pub fn energy_parallel(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        self.inner.energy_parallel(s, time)
    }

    pub fn energy_perpendicular(&self, s: &[f64; 6], time: f64) -> Result<f64> {
        self.inner.energy_perpendicular(s, time)
    }

    pub fn half_back_step(&self, q: IR3, v: IR3, time: f64, dt: f64) -> Result<[f64; 6]> {
        self.inner.half_back_step(q, v, time, dt)
    }
}
