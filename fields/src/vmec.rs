use geometry::{CovariantMetric, MetricVmec};
use interpolants::{Interpolant1d, make_interp1d};
use tensors::{DIR3, IR3};

use crate::field::check_factors;
use crate::{IR3Field, IR3FieldC1, Result};

/// Magnetostatic equilibrium reconstructed from a VMEC Fourier description.
///
/// The two nonzero contravariant components are the Nyquist-table series
/// `Bᶿ = Σ bsupumnc(s)·cos(mθ − nζ)` and `Bᶻ = Σ bsupvmnc(s)·cos(mθ − nζ)`,
/// with the radial coefficient profiles 1D-interpolated in the flux. The
/// field is normalised to the on-axis value (`m_factor = |b0|`); being an
/// equilibrium, `t_factor` is one.
pub struct EquilibriumVmec<'a> {
    metric: &'a MetricVmec<'a>,
    m: Vec<f64>,
    n: Vec<f64>,
    btheta_mn: Vec<Box<dyn Interpolant1d>>,
    bzeta_mn: Vec<Box<dyn Interpolant1d>>,
    m_factor: f64,
}

impl<'a> EquilibriumVmec<'a> {
    pub fn new(metric: &'a MetricVmec<'a>, typ: &str) -> Result<Self> {
        let dataset = metric.dataset();
        let m_factor = dataset.b0.abs();
        check_factors(m_factor, 1.0)?;

        let sgrid = dataset.sgrid.as_slice().expect("contiguous grid");
        let harmonics = dataset.xm_nyq.len();
        let mut btheta_mn = Vec::with_capacity(harmonics);
        let mut bzeta_mn = Vec::with_capacity(harmonics);
        for i in 0..harmonics {
            let btheta: Vec<f64> =
                dataset.bsupumnc.column(i).iter().map(|b| b / m_factor).collect();
            let bzeta: Vec<f64> =
                dataset.bsupvmnc.column(i).iter().map(|b| b / m_factor).collect();
            btheta_mn.push(make_interp1d(typ, sgrid, &btheta)?);
            bzeta_mn.push(make_interp1d(typ, sgrid, &bzeta)?);
        }
        Ok(Self {
            metric,
            m: dataset.xm_nyq.to_vec(),
            n: dataset.xn_nyq.to_vec(),
            btheta_mn,
            bzeta_mn,
            m_factor,
        })
    }

    /// On-axis field \[T\].
    pub fn b0(&self) -> f64 {
        self.m_factor
    }
}

impl IR3Field for EquilibriumVmec<'_> {
    fn contravariant(&self, position: IR3, _time: f64) -> Result<IR3> {
        let (s, zeta, theta) = (position.u, position.v, position.w);
        let mut bzeta = 0.0;
        let mut btheta = 0.0;
        for i in 0..self.m.len() {
            let cos_mn = (self.m[i] * theta - self.n[i] * zeta).cos();
            bzeta += self.bzeta_mn[i].eval(s)? * cos_mn;
            btheta += self.btheta_mn[i].eval(s)? * cos_mn;
        }
        Ok(IR3::new(0.0, bzeta, btheta))
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

impl IR3FieldC1 for EquilibriumVmec<'_> {
    fn del_contravariant(&self, position: IR3, _time: f64) -> Result<DIR3> {
        let (s, zeta, theta) = (position.u, position.v, position.w);
        let mut d = DIR3::zeros();
        for i in 0..self.m.len() {
            let (m, n) = (self.m[i], self.n[i]);
            let (sin_mn, cos_mn) = (m * theta - n * zeta).sin_cos();
            let bzeta_mn = self.bzeta_mn[i].eval(s)?;
            let btheta_mn = self.btheta_mn[i].eval(s)?;
            d.vu += self.bzeta_mn[i].eval_deriv(s)? * cos_mn;
            d.vv += n * bzeta_mn * sin_mn;
            d.vw += -m * bzeta_mn * sin_mn;
            d.wu += self.btheta_mn[i].eval_deriv(s)? * cos_mn;
            d.wv += n * btheta_mn * sin_mn;
            d.ww += -m * btheta_mn * sin_mn;
        }
        Ok(d)
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
