use num_complex::Complex64;

use crate::{Interpolant1d, Result, make_interp1d};

/// Complex Fourier composite `f(u, v) = Σₘ fₘ(u) e^{imv}`.
///
/// Each harmonic amplitude `fₘ(u)` is a complex-valued function of the real
/// argument `u`, built by interpolating sampled real and imaginary parts.
/// Angular derivatives follow from differentiation under the sum (factors of
/// `im` and `−m²`), radial derivatives from the interpolants.
///
/// `dreal` and `dimag` hold `n_u × n_m` samples with the harmonic index
/// varying fastest: the amplitude of harmonic `i` at knot `k` sits at
/// `k * m.len() + i`.
pub struct FourierComplex {
    m: Vec<f64>,
    re: Vec<Box<dyn Interpolant1d>>,
    im: Vec<Box<dyn Interpolant1d>>,
}

impl FourierComplex {
    pub fn new(
        typ: &str,
        u: &[f64],
        dreal: &[f64],
        dimag: &[f64],
        m: &[f64],
    ) -> Result<Self> {
        let (n_u, n_m) = (u.len(), m.len());
        for samples in [dreal, dimag] {
            if samples.len() != n_u * n_m {
                return Err(crate::InterpError::HarmonicMismatch {
                    n_u,
                    n_m,
                    got: samples.len(),
                });
            }
        }

        let pick = |samples: &[f64], i: usize| -> Vec<f64> {
            (0..n_u).map(|k| samples[k * n_m + i]).collect()
        };
        let mut re = Vec::with_capacity(n_m);
        let mut im = Vec::with_capacity(n_m);
        for i in 0..n_m {
            re.push(make_interp1d(typ, u, &pick(dreal, i))?);
            im.push(make_interp1d(typ, u, &pick(dimag, i))?);
        }
        Ok(Self { m: m.to_vec(), re, im })
    }

    /// Number of harmonics in the sum.
    pub fn harmonics(&self) -> usize {
        self.m.len()
    }

    /// Largest harmonic number in absolute value.
    pub fn highest_harmonic(&self) -> f64 {
        self.m.iter().fold(0.0, |acc, m| acc.max(m.abs()))
    }

    fn sum<F>(&self, v: f64, mut term: F) -> Result<Complex64>
    where
        F: FnMut(usize, f64) -> Result<Complex64>,
    {
        let mut acc = Complex64::new(0.0, 0.0);
        for (i, &m) in self.m.iter().enumerate() {
            acc += term(i, m)? * Complex64::new(0.0, m * v).exp();
        }
        Ok(acc)
    }

    fn amplitude(&self, i: usize, u: f64) -> Result<Complex64> {
        Ok(Complex64::new(self.re[i].eval(u)?, self.im[i].eval(u)?))
    }

    /// Value `f(u, v)`.
    pub fn eval(&self, u: f64, v: f64) -> Result<Complex64> {
        self.sum(v, |i, _| self.amplitude(i, u))
    }

    /// `∂f/∂u`.
    pub fn partial_u(&self, u: f64, v: f64) -> Result<Complex64> {
        self.sum(v, |i, _| {
            Ok(Complex64::new(self.re[i].eval_deriv(u)?, self.im[i].eval_deriv(u)?))
        })
    }

    /// `∂f/∂v = Σₘ im fₘ(u) e^{imv}`.
    pub fn partial_v(&self, u: f64, v: f64) -> Result<Complex64> {
        self.sum(v, |i, m| Ok(Complex64::new(0.0, m) * self.amplitude(i, u)?))
    }

    /// `∂²f/∂u²`.
    pub fn partial2_uu(&self, u: f64, v: f64) -> Result<Complex64> {
        self.sum(v, |i, _| {
            Ok(Complex64::new(self.re[i].eval_deriv2(u)?, self.im[i].eval_deriv2(u)?))
        })
    }

    /// `∂²f/∂u∂v`.
    pub fn partial2_uv(&self, u: f64, v: f64) -> Result<Complex64> {
        self.sum(v, |i, m| {
            Ok(Complex64::new(0.0, m)
                * Complex64::new(self.re[i].eval_deriv(u)?, self.im[i].eval_deriv(u)?))
        })
    }

    /// `∂²f/∂v² = −Σₘ m² fₘ(u) e^{imv}`.
    pub fn partial2_vv(&self, u: f64, v: f64) -> Result<Complex64> {
        self.sum(v, |i, m| Ok(-m * m * self.amplitude(i, u)?))
    }
}
