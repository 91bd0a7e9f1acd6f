use std::f64::consts::PI;

use datasets::VmecDataset;
use interpolants::{Interpolant1d, make_interp1d};
use tensors::{DDIR3, DIR3, IR3};

use tensors::{DSM3, SM3};

use crate::{ConnectedMetric, CovariantMetric, MetricConnected, Morphism, Multiroot, Result};

/// VMEC chart `q = (s, ζ, θ)`: `s` is the toroidal flux normalised to its
/// boundary value, `ζ` the toroidal angle measured counterclockwise when
/// looking from the torus top, `θ` the poloidal angle. The poloidal plane is
/// the stellarator-symmetric Fourier series
/// `R = Σ R_mn(s)·cos(mθ − nζ)`, `Z = Σ Z_mn(s)·sin(mθ − nζ)`,
/// with the radial coefficient profiles 1D-interpolated in `s`.
///
/// The inverse map is a numerical root find over `(s, θ)` at fixed `ζ`,
/// seeded from the magnetic axis; negative-flux iterates are folded back by
/// `(−s, θ) → (s, θ + π)`.
pub struct MorphismVmec<'a> {
    dataset: &'a VmecDataset,
    m: Vec<f64>,
    n: Vec<f64>,
    r_mn: Vec<Box<dyn Interpolant1d>>,
    z_mn: Vec<Box<dyn Interpolant1d>>,
}

/// Running sums of the Fourier series and its angle/flux derivatives at one
/// point.
#[derive(Default)]
struct SeriesDel {
    r: f64,
    drdu: f64,
    drdv: f64,
    drdw: f64,
    dzdu: f64,
    dzdv: f64,
    dzdw: f64,
}

impl<'a> MorphismVmec<'a> {
    /// Builds the chart with radial interpolants of type `typ` (usually
    /// `"cubic"`).
    pub fn new(dataset: &'a VmecDataset, typ: &str) -> Result<Self> {
        let sgrid = dataset.sgrid.as_slice().expect("contiguous grid");
        let harmonics = dataset.xm.len();
        let mut r_mn = Vec::with_capacity(harmonics);
        let mut z_mn = Vec::with_capacity(harmonics);
        for i in 0..harmonics {
            r_mn.push(make_interp1d(typ, sgrid, &VmecDataset::harmonic_profile(&dataset.rmnc, i))?);
            z_mn.push(make_interp1d(typ, sgrid, &VmecDataset::harmonic_profile(&dataset.zmns, i))?);
        }
        Ok(Self {
            dataset,
            m: dataset.xm.to_vec(),
            n: dataset.xn.to_vec(),
            r_mn,
            z_mn,
        })
    }

    pub fn dataset(&self) -> &VmecDataset {
        self.dataset
    }

    /// Poloidal-plane position `(R, Z)` at `q = (s, ζ, θ)`.
    pub fn get_rz(&self, q: IR3) -> Result<(f64, f64)> {
        let (s, zeta, theta) = (q.u, q.v, q.w);
        let mut r = 0.0;
        let mut z = 0.0;
        for i in 0..self.m.len() {
            let angle = self.m[i] * theta - self.n[i] * zeta;
            r += self.r_mn[i].eval(s)? * angle.cos();
            z += self.z_mn[i].eval(s)? * angle.sin();
        }
        Ok((r, z))
    }

    fn series_del(&self, s: f64, zeta: f64, theta: f64) -> Result<SeriesDel> {
        let mut acc = SeriesDel::default();
        for i in 0..self.m.len() {
            let (m, n) = (self.m[i], self.n[i]);
            let (sin_mn, cos_mn) = (m * theta - n * zeta).sin_cos();
            let r_mn = self.r_mn[i].eval(s)?;
            let z_mn = self.z_mn[i].eval(s)?;
            acc.r += r_mn * cos_mn;
            acc.drdu += self.r_mn[i].eval_deriv(s)? * cos_mn;
            acc.drdv += n * r_mn * sin_mn;
            acc.drdw += -m * r_mn * sin_mn;
            acc.dzdu += self.z_mn[i].eval_deriv(s)? * sin_mn;
            acc.dzdv += -n * z_mn * cos_mn;
            acc.dzdw += m * z_mn * cos_mn;
        }
        Ok(acc)
    }

    fn reflection_past_axis(&self, flux: f64, theta: f64) -> (f64, f64) {
        if flux < 0.0 { (-flux, theta + PI) } else { (flux, theta) }
    }

    fn invert_at_zeta(&self, r: f64, z: f64, zeta: f64, guess: [f64; 2]) -> Result<IR3> {
        let roots = Multiroot::default().solve(
            |args| {
                let (flux, theta) = self.reflection_past_axis(args[0], args[1]);
                let (r_trial, z_trial) = self.get_rz(IR3::new(flux, zeta, theta))?;
                Ok([r_trial - r, z_trial - z])
            },
            guess,
        )?;
        let (flux, theta) = self.reflection_past_axis(roots[0], roots[1]);
        Ok(IR3::new(flux, zeta, theta))
    }
}

impl Morphism for MorphismVmec<'_> {
    fn point(&self, q: IR3) -> Result<IR3> {
        let zeta = q.v;
        let (r, z) = self.get_rz(q)?;
        Ok(IR3::new(r * zeta.cos(), r * zeta.sin(), z))
    }

    fn inverse(&self, x: IR3) -> Result<IR3> {
        let r = (x.u * x.u + x.v * x.v).sqrt();
        let zeta = x.v.atan2(x.u);
        let (r_axis, z_axis) = self.get_rz(IR3::new(0.0, zeta, 0.0))?;
        let guess = [0.5, (x.w - z_axis).atan2(r - r_axis)];
        self.invert_at_zeta(r, x.w, zeta, guess)
    }

    fn del(&self, q: IR3) -> Result<DIR3> {
        let (s, zeta, theta) = (q.u, q.v, q.w);
        let a = self.series_del(s, zeta, theta)?;
        let (sin_zeta, cos_zeta) = zeta.sin_cos();
        Ok(DIR3 {
            uu: a.drdu * cos_zeta,
            uv: a.drdv * cos_zeta - a.r * sin_zeta,
            uw: a.drdw * cos_zeta,
            vu: a.drdu * sin_zeta,
            vv: a.drdv * sin_zeta + a.r * cos_zeta,
            vw: a.drdw * sin_zeta,
            wu: a.dzdu,
            wv: a.dzdv,
            ww: a.dzdw,
        })
    }

    fn ddel(&self, q: IR3) -> Result<DDIR3> {
        let (s, zeta, theta) = (q.u, q.v, q.w);
        let mut a = SeriesDel::default();
        let mut d2r = [0.0_f64; 6]; // uu, uv, uw, vv, vw, ww
        let mut d2z = [0.0_f64; 6];
        for i in 0..self.m.len() {
            let (m, n) = (self.m[i], self.n[i]);
            let (sin_mn, cos_mn) = (m * theta - n * zeta).sin_cos();
            let r_mn = self.r_mn[i].eval(s)?;
            let z_mn = self.z_mn[i].eval(s)?;
            let drdu_mn = self.r_mn[i].eval_deriv(s)?;
            let dzdu_mn = self.z_mn[i].eval_deriv(s)?;
            a.r += r_mn * cos_mn;
            a.drdu += drdu_mn * cos_mn;
            a.drdv += n * r_mn * sin_mn;
            a.drdw += -m * r_mn * sin_mn;
            a.dzdu += dzdu_mn * sin_mn;
            a.dzdv += -n * z_mn * cos_mn;
            a.dzdw += m * z_mn * cos_mn;
            d2r[0] += self.r_mn[i].eval_deriv2(s)? * cos_mn;
            d2r[1] += n * drdu_mn * sin_mn;
            d2r[2] += -m * drdu_mn * sin_mn;
            d2r[3] += -n * n * r_mn * cos_mn;
            d2r[4] += m * n * r_mn * cos_mn;
            d2r[5] += -m * m * r_mn * cos_mn;
            d2z[0] += self.z_mn[i].eval_deriv2(s)? * sin_mn;
            d2z[1] += -n * dzdu_mn * cos_mn;
            d2z[2] += m * dzdu_mn * cos_mn;
            d2z[3] += -n * n * z_mn * sin_mn;
            d2z[4] += m * n * z_mn * sin_mn;
            d2z[5] += -m * m * z_mn * sin_mn;
        }
        let (sin_zeta, cos_zeta) = zeta.sin_cos();
        Ok(DDIR3 {
            uuu: d2r[0] * cos_zeta,
            uuv: d2r[1] * cos_zeta - a.drdu * sin_zeta,
            uuw: d2r[2] * cos_zeta,
            uvv: (d2r[3] - a.r) * cos_zeta - 2.0 * a.drdv * sin_zeta,
            uvw: d2r[4] * cos_zeta - a.drdw * sin_zeta,
            uww: d2r[5] * cos_zeta,
            vuu: d2r[0] * sin_zeta,
            vuv: d2r[1] * sin_zeta + a.drdu * cos_zeta,
            vuw: d2r[2] * sin_zeta,
            vvv: (d2r[3] - a.r) * sin_zeta + 2.0 * a.drdv * cos_zeta,
            vvw: d2r[4] * sin_zeta + a.drdw * cos_zeta,
            vww: d2r[5] * sin_zeta,
            wuu: d2z[0],
            wuv: d2z[1],
            wuw: d2z[2],
            wvv: d2z[3],
            wvw: d2z[4],
            www: d2z[5],
        })
    }

    /// Re-inverts the chart at the displaced point, seeding the root find
    /// from the starting coordinates instead of the axis.
    fn translation(&self, q: IR3, delta: IR3) -> Result<IR3> {
        let x = self.point(q)? + delta;
        let r = (x.u * x.u + x.v * x.v).sqrt();
        let zeta = x.v.atan2(x.u);
        self.invert_at_zeta(r, x.w, zeta, [q.u, q.w])
    }
}

/// VMEC metric: everything is derived from the Fourier chart through the
/// connected-metric machinery, typed so field constructors can reach the
/// VMEC-specific morphism underneath.
pub struct MetricVmec<'a> {
    inner: MetricConnected<'a>,
    morphism: &'a MorphismVmec<'a>,
}

impl<'a> MetricVmec<'a> {
    pub fn new(morphism: &'a MorphismVmec<'a>) -> Self {
        Self { inner: MetricConnected::new(morphism), morphism }
    }

    pub fn vmec_morphism(&self) -> &MorphismVmec<'a> {
        self.morphism
    }

    pub fn dataset(&self) -> &datasets::VmecDataset {
        self.morphism.dataset()
    }
}

impl CovariantMetric for MetricVmec<'_> {
    fn g(&self, q: IR3) -> Result<SM3> {
        self.inner.g(q)
    }

    fn del_g(&self, q: IR3) -> Result<DSM3> {
        self.inner.del_g(q)
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        self.inner.jacobian(q)
    }

    fn del_jacobian(&self, q: IR3) -> Result<IR3> {
        self.inner.del_jacobian(q)
    }

    fn christoffel_first_kind(&self, q: IR3) -> Result<DDIR3> {
        self.inner.christoffel_first_kind(q)
    }

    fn christoffel_second_kind(&self, q: IR3) -> Result<DDIR3> {
        self.inner.christoffel_second_kind(q)
    }
}

impl ConnectedMetric for MetricVmec<'_> {
    fn morphism(&self) -> &dyn Morphism {
        self.morphism
    }
}
