use std::f64::consts::PI;

use datasets::HelenaDataset;
use interpolants::{Interpolant2d, make_interp2d};
use ndarray::{Array2, ArrayView2};
use tensors::{DDIR3, DIR3, DSM3, IR3, SM3};

use crate::{ConnectedMetric, CovariantMetric, Morphism, Multiroot, Result};

/// Flattens a `(ns, nchi)` grid into the Fortran-ordered vector the 2D
/// interpolant factory expects (`s` index fastest).
fn flatten(array: &ArrayView2<f64>) -> Vec<f64> {
    let (ns, nchi) = array.dim();
    let mut out = Vec::with_capacity(ns * nchi);
    for j in 0..nchi {
        for i in 0..ns {
            out.push(array[[i, j]]);
        }
    }
    out
}

fn interp_over_grid(
    dataset: &HelenaDataset,
    values: &Array2<f64>,
    typ: &str,
) -> Result<Box<dyn Interpolant2d>> {
    Ok(make_interp2d(
        typ,
        dataset.s.as_slice().expect("contiguous grid"),
        dataset.chi.as_slice().expect("contiguous grid"),
        &flatten(&values.view()),
    )?)
}

/// HELENA chart `q = (s, χ, φ)`: `s = √(Ψ/Ψ_b)` is the square root of the
/// poloidal flux per radian normalised to its boundary value, `χ` the
/// poloidal angle such that `Bᵠ = q·Bᵡ`, measured counterclockwise from the
/// low-field-side midplane, and `φ` the toroidal angle measured clockwise
/// from the torus top.
///
/// The poloidal plane `(R, Z)` is 2D-interpolated from the mapping arrays;
/// the inverse map is a numerical root find, with negative-flux iterates
/// folded back by the reflection `(−s, χ) → (s, χ + π)`.
pub struct MorphismHelena<'a> {
    dataset: &'a HelenaDataset,
    r: Box<dyn Interpolant2d>,
    z: Box<dyn Interpolant2d>,
}

impl<'a> MorphismHelena<'a> {
    /// Builds the chart with 2D interpolants of type `typ` (usually
    /// `"bicubic"`).
    pub fn new(dataset: &'a HelenaDataset, typ: &str) -> Result<Self> {
        let rgeo = dataset.rgeo;
        let a = dataset.eps * rgeo;
        let r_grid = dataset.x.mapv(|x| a * x + rgeo);
        let z_grid = dataset.y.mapv(|y| a * y);
        Ok(Self {
            dataset,
            r: interp_over_grid(dataset, &r_grid, typ)?,
            z: interp_over_grid(dataset, &z_grid, typ)?,
        })
    }

    pub fn dataset(&self) -> &HelenaDataset {
        self.dataset
    }

    fn reflection_past_axis(&self, s: f64, chi: f64) -> (f64, f64) {
        if s < 0.0 {
            (-s, self.dataset.reduce_chi(chi + PI))
        } else {
            (s, self.dataset.reduce_chi(chi))
        }
    }

    fn invert_plane(&self, r: f64, z: f64, guess: [f64; 2]) -> Result<(f64, f64)> {
        let roots = Multiroot::default().solve(
            |args| {
                let (s, chi) = self.reflection_past_axis(args[0], args[1]);
                Ok([self.r.eval(s, chi)? - r, self.z.eval(s, chi)? - z])
            },
            guess,
        )?;
        Ok(self.reflection_past_axis(roots[0], roots[1]))
    }
}

impl Morphism for MorphismHelena<'_> {
    fn point(&self, q: IR3) -> Result<IR3> {
        let (s, chi, phi) = (q.u, self.dataset.reduce_chi(q.v), q.w);
        let r = self.r.eval(s, chi)?;
        Ok(IR3::new(r * phi.cos(), -r * phi.sin(), self.z.eval(s, chi)?))
    }

    fn inverse(&self, x: IR3) -> Result<IR3> {
        let r = (x.u * x.u + x.v * x.v).sqrt();
        let guess = [0.5, x.w.atan2(r - self.dataset.raxis())];
        let (s, chi) = self.invert_plane(r, x.w, guess)?;
        Ok(IR3::new(s, chi, (-x.v).atan2(x.u)))
    }

    fn del(&self, q: IR3) -> Result<DIR3> {
        let (s, chi, phi) = (q.u, self.dataset.reduce_chi(q.v), q.w);
        let r = self.r.eval(s, chi)?;
        let ru = self.r.partial_x(s, chi)?;
        let rv = self.r.partial_y(s, chi)?;
        let (sin_phi, cos_phi) = phi.sin_cos();
        Ok(DIR3 {
            uu: ru * cos_phi,
            uv: rv * cos_phi,
            uw: -r * sin_phi,
            vu: -ru * sin_phi,
            vv: -rv * sin_phi,
            vw: -r * cos_phi,
            wu: self.z.partial_x(s, chi)?,
            wv: self.z.partial_y(s, chi)?,
            ww: 0.0,
        })
    }

    fn ddel(&self, q: IR3) -> Result<DDIR3> {
        let (s, chi, phi) = (q.u, self.dataset.reduce_chi(q.v), q.w);
        let r = self.r.eval(s, chi)?;
        let ru = self.r.partial_x(s, chi)?;
        let rv = self.r.partial_y(s, chi)?;
        let ruu = self.r.partial_xx(s, chi)?;
        let ruv = self.r.partial_xy(s, chi)?;
        let rvv = self.r.partial_yy(s, chi)?;
        let (sin_phi, cos_phi) = phi.sin_cos();
        Ok(DDIR3 {
            uuu: ruu * cos_phi,
            uuv: ruv * cos_phi,
            uuw: -ru * sin_phi,
            uvv: rvv * cos_phi,
            uvw: -rv * sin_phi,
            uww: -r * cos_phi,
            vuu: -ruu * sin_phi,
            vuv: -ruv * sin_phi,
            vuw: -ru * cos_phi,
            vvv: -rvv * sin_phi,
            vvw: -rv * cos_phi,
            vww: r * sin_phi,
            wuu: self.z.partial_xx(s, chi)?,
            wuv: self.z.partial_xy(s, chi)?,
            wuw: 0.0,
            wvv: self.z.partial_yy(s, chi)?,
            wvw: 0.0,
            www: 0.0,
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        let (s, chi) = (q.u, self.dataset.reduce_chi(q.v));
        let r = self.r.eval(s, chi)?;
        let ru = self.r.partial_x(s, chi)?;
        let rv = self.r.partial_y(s, chi)?;
        let zu = self.z.partial_x(s, chi)?;
        let zv = self.z.partial_y(s, chi)?;
        Ok(r * (ru * zv - rv * zu))
    }

    /// Re-inverts the chart at the displaced point, seeding the root find
    /// from the starting coordinates instead of the axis.
    fn translation(&self, q: IR3, delta: IR3) -> Result<IR3> {
        let x = self.point(q)? + delta;
        let r = (x.u * x.u + x.v * x.v).sqrt();
        let (s, chi) = self.invert_plane(r, x.w, [q.u, q.v])?;
        Ok(IR3::new(s, chi, (-x.v).atan2(x.u)))
    }
}

/// HELENA metric: the four nonzero covariant components are interpolated
/// directly from the mapping arrays instead of being assembled from the
/// morphism, and the Christoffel symbols use the metric-derivative rule so
/// second derivatives of the `(R, Z)` interpolants never enter.
pub struct MetricHelena<'a> {
    morphism: &'a MorphismHelena<'a>,
    guu: Box<dyn Interpolant2d>,
    guv: Box<dyn Interpolant2d>,
    gvv: Box<dyn Interpolant2d>,
    gww: Box<dyn Interpolant2d>,
    squared_r0: f64,
}

impl<'a> MetricHelena<'a> {
    pub fn new(morphism: &'a MorphismHelena<'a>, typ: &str) -> Result<Self> {
        let dataset = morphism.dataset();
        Ok(Self {
            morphism,
            guu: interp_over_grid(dataset, &dataset.covariant_g11, typ)?,
            guv: interp_over_grid(dataset, &dataset.covariant_g12, typ)?,
            gvv: interp_over_grid(dataset, &dataset.covariant_g22, typ)?,
            gww: interp_over_grid(dataset, &dataset.covariant_g33, typ)?,
            squared_r0: dataset.rmag * dataset.rmag,
        })
    }

    pub fn dataset(&self) -> &HelenaDataset {
        self.morphism.dataset()
    }

    /// Maps an arbitrary poloidal angle into the stored branch.
    pub fn reduce_chi(&self, chi: f64) -> f64 {
        self.dataset().reduce_chi(chi)
    }
}

impl CovariantMetric for MetricHelena<'_> {
    fn g(&self, q: IR3) -> Result<SM3> {
        let (s, chi) = (q.u, self.reduce_chi(q.v));
        Ok(SM3 {
            uu: self.squared_r0 * self.guu.eval(s, chi)?,
            uv: self.squared_r0 * self.guv.eval(s, chi)?,
            uw: 0.0,
            vv: self.squared_r0 * self.gvv.eval(s, chi)?,
            vw: 0.0,
            ww: self.squared_r0 * self.gww.eval(s, chi)?,
        })
    }

    fn del_g(&self, q: IR3) -> Result<DSM3> {
        let (s, chi) = (q.u, self.reduce_chi(q.v));
        Ok(DSM3 {
            uuu: self.squared_r0 * self.guu.partial_x(s, chi)?,
            uuv: self.squared_r0 * self.guu.partial_y(s, chi)?,
            uuw: 0.0,
            uvu: self.squared_r0 * self.guv.partial_x(s, chi)?,
            uvv: self.squared_r0 * self.guv.partial_y(s, chi)?,
            uvw: 0.0,
            uwu: 0.0,
            uwv: 0.0,
            uww: 0.0,
            vvu: self.squared_r0 * self.gvv.partial_x(s, chi)?,
            vvv: self.squared_r0 * self.gvv.partial_y(s, chi)?,
            vvw: 0.0,
            vwu: 0.0,
            vwv: 0.0,
            vww: 0.0,
            wwu: self.squared_r0 * self.gww.partial_x(s, chi)?,
            wwv: self.squared_r0 * self.gww.partial_y(s, chi)?,
            www: 0.0,
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        self.morphism.jacobian(q)
    }
}

impl ConnectedMetric for MetricHelena<'_> {
    fn morphism(&self) -> &dyn Morphism {
        self.morphism
    }
}
