use std::f64::consts::TAU;

use datasets::CastorDataset;
use geometry::{CovariantMetric, MetricHelena};
use interpolants::FourierComplex;
use num_complex::Complex64;
use tensors::{DIR3, IR3};

use crate::field::check_factors;
use crate::{IR3Field, IR3FieldC1, Result};

/// Complex covariant vector potential of a CASTOR eigenmode,
/// `A_k(s, χ, φ, t) = e^{λt + inφ} Σₘ Â_k,m(s) e^{imχ}`.
struct Potential {
    a1: FourierComplex,
    a2: FourierComplex,
    a3: FourierComplex,
    eigenvalue: Complex64,
    i_n_tor: Complex64,
    highest_m: f64,
}

impl Potential {
    fn new(dataset: &CastorDataset, typ: &str) -> Result<Self> {
        let s = dataset.s.as_slice().expect("contiguous grid");
        let m = dataset.m.as_slice().expect("contiguous grid");
        let build = |table| -> Result<FourierComplex> {
            let (re, im) = CastorDataset::split_parts(table);
            Ok(FourierComplex::new(typ, s, &re, &im, m)?)
        };
        Ok(Self {
            a1: build(&dataset.a1)?,
            a2: build(&dataset.a2)?,
            a3: build(&dataset.a3)?,
            eigenvalue: dataset.eigenvalue,
            i_n_tor: Complex64::new(0.0, dataset.n_tor),
            highest_m: dataset.m.iter().fold(0.0, |acc: f64, m| acc.max(m.abs())),
        })
    }

    /// Common phase factor `e^{λt + inφ}`.
    fn phase(&self, time: f64, phi: f64) -> Complex64 {
        (self.eigenvalue * time + self.i_n_tor * phi).exp()
    }

    fn covariant_at(&self, s: f64, chi: f64) -> Result<[Complex64; 3]> {
        Ok([self.a1.eval(s, chi)?, self.a2.eval(s, chi)?, self.a3.eval(s, chi)?])
    }
}

/// Sweeps the poloidal cross section (φ = 0, t = 0) at an angular resolution
/// proportional to the highest harmonic and returns the factor that brings
/// the maximum magnitude there to one.
fn cross_section_normalisation<F>(s_grid: &[f64], highest_m: f64, magnitude: F) -> Result<f64>
where
    F: Fn(IR3) -> Result<f64>,
{
    let chi_count = ((8.0 * highest_m) as usize).max(8);
    let delta_chi = TAU / chi_count as f64;
    let mut max_magnitude: f64 = 0.0;
    for &s in s_grid {
        for k in 0..chi_count {
            let value = magnitude(IR3::new(s, delta_chi * k as f64, 0.0))?;
            // The coordinate jacobian vanishes on the axis; keep the sweep to
            // the points where the magnitude is meaningful.
            if value.is_finite() {
                max_magnitude = max_magnitude.max(value);
            }
        }
    }
    log::debug!("cross-section maximum before normalisation: {max_magnitude:.6e}");
    Ok(1.0 / max_magnitude)
}

/// CASTOR vector-potential eigenmode (C⁰ field over a HELENA metric).
///
/// Covariant components are the harmonic sums of [`Potential`]; the time
/// normalisation is the on-axis Alfvén time `R₀/v_A`. At construction the
/// field is rescaled so that its maximum magnitude over the poloidal cross
/// section is one; [`CastorEigenmodeA::with_norm_factor`] skips the sweep and
/// applies an externally chosen factor instead (e.g. one shared with the
/// matching magnetic eigenmode).
pub struct CastorEigenmodeA<'a> {
    metric: &'a MetricHelena<'a>,
    potential: Potential,
    m_factor: f64,
    t_factor: f64,
    norm_factor: f64,
}

impl<'a> CastorEigenmodeA<'a> {
    pub fn new(
        m_factor: f64,
        v_alfven: f64,
        dataset: &CastorDataset,
        metric: &'a MetricHelena<'a>,
        typ: &str,
    ) -> Result<Self> {
        let mut field = Self::with_norm_factor(m_factor, v_alfven, dataset, metric, typ, 1.0)?;
        let s_grid = dataset.s.as_slice().expect("contiguous grid");
        field.norm_factor = cross_section_normalisation(
            s_grid,
            field.potential.highest_m,
            |q| field.magnitude(q, 0.0),
        )?;
        Ok(field)
    }

    pub fn with_norm_factor(
        m_factor: f64,
        v_alfven: f64,
        dataset: &CastorDataset,
        metric: &'a MetricHelena<'a>,
        typ: &str,
        norm_factor: f64,
    ) -> Result<Self> {
        let t_factor = metric.dataset().rmag / v_alfven;
        check_factors(m_factor, t_factor)?;
        Ok(Self {
            metric,
            potential: Potential::new(dataset, typ)?,
            m_factor,
            t_factor,
            norm_factor,
        })
    }

    /// The normalisation applied on top of the raw harmonic data.
    pub fn native_factor(&self) -> f64 {
        self.norm_factor
    }

    /// On-axis Alfvén velocity \[m/s\] implied by the time normalisation.
    pub fn v_alfven(&self) -> f64 {
        self.metric.dataset().rmag / self.t_factor
    }
}

impl IR3Field for CastorEigenmodeA<'_> {
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let a = self.covariant(position, time)?;
        Ok(self.metric.to_contravariant(a, position)?)
    }

    fn covariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let (s, phi) = (position.u, position.w);
        let chi = self.metric.reduce_chi(position.v);
        let factor = self.norm_factor * self.potential.phase(time, phi);
        let [a1, a2, a3] = self.potential.covariant_at(s, chi)?;
        Ok(IR3::new((factor * a1).re, (factor * a2).re, (factor * a3).re))
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        self.t_factor
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

/// CASTOR magnetic eigenmode `B = ∇̃×A` (C¹ field over a HELENA metric).
///
/// Contravariant components follow from the covariant potential harmonics by
/// the curl rule `Bⁱ = εⁱʲᵏ ∂ⱼA_k / √g`; derivatives additionally use
/// `∂ₗBⁱ = (εⁱʲᵏ ∂²ⱼₗA_k − Bⁱ ∂ₗ√g)/√g`.
pub struct CastorEigenmodeB<'a> {
    metric: &'a MetricHelena<'a>,
    potential: Potential,
    m_factor: f64,
    t_factor: f64,
    norm_factor: f64,
    n_tor_squared: f64,
}

impl<'a> CastorEigenmodeB<'a> {
    pub fn new(
        m_factor: f64,
        v_alfven: f64,
        dataset: &CastorDataset,
        metric: &'a MetricHelena<'a>,
        typ: &str,
    ) -> Result<Self> {
        let mut field = Self::with_norm_factor(m_factor, v_alfven, dataset, metric, typ, 1.0)?;
        let s_grid = dataset.s.as_slice().expect("contiguous grid");
        field.norm_factor = cross_section_normalisation(
            s_grid,
            field.potential.highest_m,
            |q| field.magnitude(q, 0.0),
        )?;
        Ok(field)
    }

    pub fn with_norm_factor(
        m_factor: f64,
        v_alfven: f64,
        dataset: &CastorDataset,
        metric: &'a MetricHelena<'a>,
        typ: &str,
        norm_factor: f64,
    ) -> Result<Self> {
        let t_factor = metric.dataset().rmag / v_alfven;
        check_factors(m_factor, t_factor)?;
        Ok(Self {
            metric,
            potential: Potential::new(dataset, typ)?,
            m_factor,
            t_factor,
            norm_factor,
            n_tor_squared: dataset.n_tor * dataset.n_tor,
        })
    }

    pub fn native_factor(&self) -> f64 {
        self.norm_factor
    }

    /// Numerators `εⁱʲᵏ ∂ⱼA_k` of the contravariant curl, before the phase
    /// factor and the jacobian division.
    fn curl_numerators(&self, s: f64, chi: f64) -> Result<[Complex64; 3]> {
        let p = &self.potential;
        let a1 = p.a1.eval(s, chi)?;
        let a2 = p.a2.eval(s, chi)?;
        Ok([
            p.a3.partial_v(s, chi)? - p.i_n_tor * a2,
            p.i_n_tor * a1 - p.a3.partial_u(s, chi)?,
            p.a2.partial_u(s, chi)? - p.a1.partial_v(s, chi)?,
        ])
    }

    /// Second-derivative numerators `εⁱʲᵏ ∂²ⱼₗA_k` for `l = s, χ, φ`, row
    /// per component, column per derivative.
    fn curl_derivative_numerators(&self, s: f64, chi: f64) -> Result<[[Complex64; 3]; 3]> {
        let p = &self.potential;
        let a1 = p.a1.eval(s, chi)?;
        let a2 = p.a2.eval(s, chi)?;
        let d1a1 = p.a1.partial_u(s, chi)?;
        let d1a2 = p.a2.partial_u(s, chi)?;
        let d2a1 = p.a1.partial_v(s, chi)?;
        let d2a2 = p.a2.partial_v(s, chi)?;
        Ok([
            [
                p.a3.partial2_uv(s, chi)? - p.i_n_tor * d1a2,
                p.a3.partial2_vv(s, chi)? - p.i_n_tor * d2a2,
                p.i_n_tor * p.a3.partial_v(s, chi)? + self.n_tor_squared * a2,
            ],
            [
                p.i_n_tor * d1a1 - p.a3.partial2_uu(s, chi)?,
                p.i_n_tor * d2a1 - p.a3.partial2_uv(s, chi)?,
                -self.n_tor_squared * a1 - p.i_n_tor * p.a3.partial_u(s, chi)?,
            ],
            [
                p.a2.partial2_uu(s, chi)? - p.a1.partial2_uv(s, chi)?,
                p.a2.partial2_uv(s, chi)? - p.a1.partial2_vv(s, chi)?,
                p.i_n_tor * d1a2 - p.i_n_tor * d2a1,
            ],
        ])
    }
}

impl IR3Field for CastorEigenmodeB<'_> {
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let (s, phi) = (position.u, position.w);
        let chi = self.metric.reduce_chi(position.v);
        let factor = self.norm_factor * self.potential.phase(time, phi)
            / self.metric.jacobian(position)?;
        let numerators = self.curl_numerators(s, chi)?;
        Ok(IR3::new(
            (factor * numerators[0]).re,
            (factor * numerators[1]).re,
            (factor * numerators[2]).re,
        ))
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        self.t_factor
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

impl IR3FieldC1 for CastorEigenmodeB<'_> {
    fn del_contravariant(&self, position: IR3, time: f64) -> Result<DIR3> {
        let (s, phi) = (position.u, position.w);
        let chi = self.metric.reduce_chi(position.v);
        let factor = self.norm_factor * self.potential.phase(time, phi);
        let numerators = self.curl_derivative_numerators(s, chi)?;
        let b = self.contravariant(position, time)?;
        let dj = self.metric.del_jacobian(position)?;
        let ijacobian = 1.0 / self.metric.jacobian(position)?;
        let entry = |i: usize, b_i: f64, dj_l: f64, l: usize| {
            ijacobian * ((factor * numerators[i][l]).re - b_i * dj_l)
        };
        Ok(DIR3 {
            uu: entry(0, b.u, dj.u, 0),
            uv: entry(0, b.u, dj.v, 1),
            uw: entry(0, b.u, dj.w, 2),
            vu: entry(1, b.v, dj.u, 0),
            vv: entry(1, b.v, dj.v, 1),
            vw: entry(1, b.v, dj.w, 2),
            wu: entry(2, b.w, dj.u, 0),
            wv: entry(2, b.w, dj.v, 1),
            ww: entry(2, b.w, dj.w, 2),
        })
    }

    /// `∂ₜB = λ·B` for an `e^{λt}` eigenmode.
    fn partial_t_contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let (s, phi) = (position.u, position.w);
        let chi = self.metric.reduce_chi(position.v);
        let factor = self.norm_factor * self.potential.eigenvalue
            * self.potential.phase(time, phi)
            / self.metric.jacobian(position)?;
        let numerators = self.curl_numerators(s, chi)?;
        Ok(IR3::new(
            (factor * numerators[0]).re,
            (factor * numerators[1]).re,
            (factor * numerators[2]).re,
        ))
    }
}

/// CASTOR electric eigenmode `E = −λA` (C⁰ field over a HELENA metric).
pub struct CastorEigenmodeE<'a> {
    potential_field: CastorEigenmodeA<'a>,
}

impl<'a> CastorEigenmodeE<'a> {
    pub fn new(
        m_factor: f64,
        v_alfven: f64,
        dataset: &CastorDataset,
        metric: &'a MetricHelena<'a>,
        typ: &str,
    ) -> Result<Self> {
        let mut field = Self::with_norm_factor(m_factor, v_alfven, dataset, metric, typ, 1.0)?;
        let s_grid = dataset.s.as_slice().expect("contiguous grid");
        let norm = cross_section_normalisation(
            s_grid,
            field.potential_field.potential.highest_m,
            |q| field.magnitude(q, 0.0),
        )?;
        field.potential_field.norm_factor = norm;
        Ok(field)
    }

    pub fn with_norm_factor(
        m_factor: f64,
        v_alfven: f64,
        dataset: &CastorDataset,
        metric: &'a MetricHelena<'a>,
        typ: &str,
        norm_factor: f64,
    ) -> Result<Self> {
        Ok(Self {
            potential_field: CastorEigenmodeA::with_norm_factor(
                m_factor,
                v_alfven,
                dataset,
                metric,
                typ,
                norm_factor,
            )?,
        })
    }

    pub fn native_factor(&self) -> f64 {
        self.potential_field.native_factor()
    }
}

impl IR3Field for CastorEigenmodeE<'_> {
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let e = self.covariant(position, time)?;
        Ok(self.potential_field.metric.to_contravariant(e, position)?)
    }

    fn covariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let potential = &self.potential_field.potential;
        let (s, phi) = (position.u, position.w);
        let chi = self.potential_field.metric.reduce_chi(position.v);
        let factor = -potential.eigenvalue
            * self.potential_field.norm_factor
            * potential.phase(time, phi);
        let [a1, a2, a3] = potential.covariant_at(s, chi)?;
        Ok(IR3::new((factor * a1).re, (factor * a2).re, (factor * a3).re))
    }

    fn m_factor(&self) -> f64 {
        self.potential_field.m_factor
    }

    fn t_factor(&self) -> f64 {
        self.potential_field.t_factor
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.potential_field.metric
    }
}
