use std::f64::consts::TAU;

use interpolants::{Interpolant1d, make_interp1d};
use tensors::{DSM3, IR3, SM3};

use crate::{CovariantMetric, GeometryError, Result};

/// Near-axis coordinates `q = (r, θ, φ)` of a quasi-symmetric stellarator
/// equilibrium: `r` is the distance to the magnetic axis \[m\], `θ` the
/// poloidal angle measured in the torsion-absorbed frame (so the accumulated
/// axis torsion shows up as the axis helicity in the rotational transform,
/// not in the metric), and `φ` the axis-following toroidal angle.
///
/// To first order in `r` the metric is diagonal,
/// `g = diag(1, r², ℓ'²(1 − κ(φ) r cosθ)²)`, with `κ(φ)` the axis curvature
/// (periodically interpolated over one field period) and `ℓ' = L/2π` the
/// uniform arclength rate of the axis. Angular profiles use the backend's
/// periodic spline type, so no boundary reflection is ever needed.
pub struct MetricNearAxis {
    field_periods: usize,
    axis_length: f64,
    dldphi: f64,
    curvature: Box<dyn Interpolant1d>,
    period: f64,
}

impl MetricNearAxis {
    /// Builds the metric from curvature samples over one field period
    /// (`phi_grid` covering `[0, 2π/field_periods]` inclusive).
    pub fn new(
        field_periods: usize,
        axis_length: f64,
        phi_grid: &[f64],
        curvature_samples: &[f64],
    ) -> Result<Self> {
        if axis_length <= 0.0 {
            return Err(GeometryError::NonPositive { name: "axis_length", value: axis_length });
        }
        if field_periods == 0 {
            return Err(GeometryError::NonPositive { name: "field_periods", value: 0.0 });
        }
        let curvature = make_interp1d("cubic_periodic", phi_grid, curvature_samples)?;
        Ok(Self {
            field_periods,
            axis_length,
            dldphi: axis_length / TAU,
            curvature,
            period: TAU / field_periods as f64,
        })
    }

    pub fn field_periods(&self) -> usize {
        self.field_periods
    }

    pub fn axis_length(&self) -> f64 {
        self.axis_length
    }

    /// Folds the toroidal angle into the stored field period.
    pub fn reduce_phi(&self, phi: f64) -> f64 {
        phi.rem_euclid(self.period)
    }

    /// Axis curvature at the (unreduced) toroidal angle.
    pub fn curvature(&self, phi: f64) -> Result<f64> {
        Ok(self.curvature.eval(self.reduce_phi(phi))?)
    }

    /// Curvature derivative with respect to the toroidal angle.
    pub fn curvature_derivative(&self, phi: f64) -> Result<f64> {
        Ok(self.curvature.eval_deriv(self.reduce_phi(phi))?)
    }

    fn shrink(&self, q: IR3) -> Result<f64> {
        Ok(1.0 - self.curvature(q.w)? * q.u * q.v.cos())
    }
}

impl CovariantMetric for MetricNearAxis {
    fn g(&self, q: IR3) -> Result<SM3> {
        let shrink = self.shrink(q)?;
        Ok(SM3 {
            uu: 1.0,
            vv: q.u * q.u,
            ww: self.dldphi * self.dldphi * shrink * shrink,
            ..SM3::zeros()
        })
    }

    fn del_g(&self, q: IR3) -> Result<DSM3> {
        let (r, theta) = (q.u, q.v);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let kappa = self.curvature(q.w)?;
        let kappa_prime = self.curvature_derivative(q.w)?;
        let shrink = 1.0 - kappa * r * cos_theta;
        let lp2 = self.dldphi * self.dldphi;
        Ok(DSM3 {
            vvu: 2.0 * r,
            wwu: -2.0 * lp2 * shrink * kappa * cos_theta,
            wwv: 2.0 * lp2 * shrink * kappa * r * sin_theta,
            www: -2.0 * lp2 * shrink * kappa_prime * r * cos_theta,
            ..DSM3::zeros()
        })
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        Ok(q.u * self.dldphi * self.shrink(q)?)
    }

    fn del_jacobian(&self, q: IR3) -> Result<IR3> {
        let (r, theta) = (q.u, q.v);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let kappa = self.curvature(q.w)?;
        let kappa_prime = self.curvature_derivative(q.w)?;
        Ok(IR3::new(
            self.dldphi * (1.0 - 2.0 * kappa * r * cos_theta),
            self.dldphi * kappa * r * r * sin_theta,
            -self.dldphi * kappa_prime * r * r * cos_theta,
        ))
    }
}
