use geometry::{CovariantMetric, MetricHelena};
use interpolants::{Interpolant2d, make_interp2d};
use tensors::{DIR3, IR3};

use crate::field::check_factors;
use crate::{IR3Field, IR3FieldC1, Result};

/// Magnetostatic equilibrium reconstructed from a HELENA mapping.
///
/// The two nonzero contravariant components `Bᵡ`, `Bᵠ` are 2D-interpolated
/// over `(s, χ)` from the mapping arrays, normalised to the on-axis field
/// (`m_factor = |bmag|`) and to the axis radius (contravariant components
/// carry 1/m). Being an equilibrium, `t_factor` is one.
pub struct EquilibriumHelena<'a> {
    metric: &'a MetricHelena<'a>,
    b_chi: Box<dyn Interpolant2d>,
    b_phi: Box<dyn Interpolant2d>,
    m_factor: f64,
}

impl<'a> EquilibriumHelena<'a> {
    pub fn new(metric: &'a MetricHelena<'a>, typ: &str) -> Result<Self> {
        let dataset = metric.dataset();
        let m_factor = dataset.bmag.abs();
        check_factors(m_factor, 1.0)?;
        let r0 = dataset.rmag;

        let (ns, nchi) = dataset.contravariant_b2.dim();
        let mut b_chi_flat = Vec::with_capacity(ns * nchi);
        let mut b_phi_flat = Vec::with_capacity(ns * nchi);
        for j in 0..nchi {
            for i in 0..ns {
                b_chi_flat.push(dataset.contravariant_b2[[i, j]] / r0);
                b_phi_flat.push(dataset.contravariant_b3[[i, j]] / r0);
            }
        }
        let s_grid = dataset.s.as_slice().expect("contiguous grid");
        let chi_grid = dataset.chi.as_slice().expect("contiguous grid");
        Ok(Self {
            metric,
            b_chi: make_interp2d(typ, s_grid, chi_grid, &b_chi_flat)?,
            b_phi: make_interp2d(typ, s_grid, chi_grid, &b_phi_flat)?,
            m_factor,
        })
    }

    /// On-axis field \[T\].
    pub fn b0(&self) -> f64 {
        self.m_factor
    }

    /// Axis radius \[m\].
    pub fn r0(&self) -> f64 {
        self.metric.dataset().rmag
    }
}

impl IR3Field for EquilibriumHelena<'_> {
    fn contravariant(&self, position: IR3, _time: f64) -> Result<IR3> {
        let (s, chi) = (position.u, self.metric.reduce_chi(position.v));
        Ok(IR3::new(0.0, self.b_chi.eval(s, chi)?, self.b_phi.eval(s, chi)?))
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        1.0
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

impl IR3FieldC1 for EquilibriumHelena<'_> {
    fn del_contravariant(&self, position: IR3, _time: f64) -> Result<DIR3> {
        let (s, chi) = (position.u, self.metric.reduce_chi(position.v));
        Ok(DIR3 {
            uu: 0.0,
            uv: 0.0,
            uw: 0.0,
            vu: self.b_chi.partial_x(s, chi)?,
            vv: self.b_chi.partial_y(s, chi)?,
            vw: 0.0,
            wu: self.b_phi.partial_x(s, chi)?,
            wv: self.b_phi.partial_y(s, chi)?,
            ww: 0.0,
        })
    }

    fn partial_t_contravariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::zeros())
    }

    fn partial_t_covariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::zeros())
    }

    fn partial_t_magnitude(&self, _position: IR3, _time: f64) -> Result<f64> {
        Ok(0.0)
    }
}
