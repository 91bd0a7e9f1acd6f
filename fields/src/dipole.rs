use geometry::{CovariantMetric, MetricSpherical};
use tensors::{DIR3, IR3};

use crate::field::check_factors;
use crate::{IR3Field, IR3FieldC1, Result};

/// Magnetospheric model field: a dipole plus a tanh-smoothed equatorial
/// current sheet,
/// `B = d·∇(cosθ/r̃²) + c·tanh(r̃cosθ/δ)·u_x`,
/// in spherical coordinates with the geocentric distance normalised to the
/// Earth radius and the azimuth measured from noon.
///
/// `dipole_factor` is given in Gauss·R_E³ and `csheet_factor` in mGauss (the
/// conventional 0.31 and 0.15); both are converted to SI before being divided
/// by `m_factor`. The sheet is smoothed over `smooth_factor` Earth radii.
pub struct DipoleCurrentSheet {
    metric: MetricSpherical,
    m_factor: f64,
    c_bar: f64,
    d_bar: f64,
    idelta: f64,
}

impl DipoleCurrentSheet {
    /// Mean Earth radius \[m\].
    pub const EARTH_RADIUS: f64 = 6378137.0;
    /// Average field at the Earth surface \[T\].
    pub const EARTH_SURFACE_AVG_FIELD: f64 = 0.5e-4;

    pub fn new(
        smooth_factor: f64,
        dipole_factor: f64,
        csheet_factor: f64,
        m_factor: f64,
    ) -> Result<Self> {
        check_factors(m_factor, 1.0)?;
        if smooth_factor <= 0.0 {
            return Err(crate::FieldError::NonPositive {
                name: "smooth_factor",
                value: smooth_factor,
            });
        }
        Ok(Self {
            metric: MetricSpherical::new(Self::EARTH_RADIUS)?,
            m_factor,
            c_bar: 1.0e-7 * csheet_factor / (Self::EARTH_RADIUS * m_factor),
            d_bar: 1.0e-4 * dipole_factor / (Self::EARTH_RADIUS * m_factor),
            idelta: 1.0 / smooth_factor,
        })
    }

    /// The recommended Luhmann–Friesen magnitudes over the average surface
    /// field.
    pub fn with_defaults(smooth_factor: f64) -> Result<Self> {
        Self::new(smooth_factor, 0.31, 0.15, Self::EARTH_SURFACE_AVG_FIELD)
    }
}

impl IR3Field for DipoleCurrentSheet {
    fn contravariant(&self, position: IR3, _time: f64) -> Result<IR3> {
        let r = position.u;
        let (r3, r4) = (r * r * r, r * r * r * r);
        let (sin_v, cos_v) = position.v.sin_cos();
        let (sin_w, cos_w) = position.w.sin_cos();
        let tanh_factor = self.c_bar * (self.idelta * r * cos_v).tanh();
        let b_u = -2.0 * self.d_bar * cos_v / r3 + tanh_factor * sin_v * cos_w;
        let b_v = -self.d_bar * sin_v / r4 + tanh_factor * cos_v * cos_w / r;
        let b_w = -tanh_factor * sin_w / (r * sin_v);
        Ok(IR3::new(b_u, b_v, b_w))
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        1.0
    }

    fn metric(&self) -> &dyn CovariantMetric {
        &self.metric
    }
}

impl IR3FieldC1 for DipoleCurrentSheet {
    fn del_contravariant(&self, position: IR3, _time: f64) -> Result<DIR3> {
        let r = position.u;
        let r2 = r * r;
        let (r3, r4, r5) = (r2 * r, r2 * r2, r2 * r2 * r);
        let (sin_v, cos_v) = position.v.sin_cos();
        let (sin_w, cos_w) = position.w.sin_cos();
        let tanh_factor = self.c_bar * (self.idelta * r * cos_v).tanh();
        let sech_square = (self.idelta * r * cos_v).cosh().powi(-2);
        let c_bar = self.c_bar;
        let d_bar = self.d_bar;
        let idelta = self.idelta;

        let db_uu = cos_v * (6.0 * d_bar / r4 + c_bar * cos_w * idelta * sin_v * sech_square);
        let db_uv = 2.0 * d_bar * sin_v / r3
            + cos_w * (cos_v * tanh_factor - c_bar * idelta * r * sin_v * sin_v * sech_square);
        let db_uw = -sin_v * sin_w * tanh_factor;
        let db_vu = 4.0 * d_bar * sin_v / r5
            + cos_v * cos_w * (c_bar * cos_v * idelta * r * sech_square - tanh_factor) / r2;
        let db_vv = -cos_v * d_bar / r4
            - cos_w * sin_v * (c_bar * cos_v * idelta * r * sech_square + tanh_factor) / r;
        let db_vw = -cos_v * sin_w * tanh_factor / r;
        let db_wu = sin_w
            * (tanh_factor / (r2 * sin_v) - c_bar * cos_v * idelta * sech_square / (r * sin_v));
        let db_wv =
            sin_w * (c_bar * idelta * sech_square + cos_v * tanh_factor / (r * sin_v * sin_v));
        let db_ww = -cos_w * tanh_factor / (r * sin_v);

        Ok(DIR3 {
            uu: db_uu, uv: db_uv, uw: db_uw,
            vu: db_vu, vv: db_vv, vw: db_vw,
            wu: db_wu, wv: db_wv, ww: db_ww,
        })
    }

    fn partial_t_contravariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::zeros())
    }
}
