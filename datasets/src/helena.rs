use std::f64::consts::TAU;

use ndarray::{Array1, Array2};

use crate::{DatasetError, Result};

/// Raw HELENA mapping arrays, exactly as the `fort.12` convention stores
/// them: `npsi` flux surfaces of which the axis row is **not** stored, `nchi`
/// poloidal samples covering half a period for up-down-symmetric equilibria
/// and a full period otherwise.
///
/// All 2D arrays are `(npsi - 1, nchi)`, row-major over flux surfaces.
pub struct HelenaRaw {
    /// Square root of the normalised poloidal flux, including the axis 0.
    pub s: Array1<f64>,
    /// Poloidal angle grid: `[0, π]` when `symmetric`, `[0, 2π)` otherwise.
    pub chi: Array1<f64>,
    /// Metric factor `gm11` of the mapping.
    pub gm11: Array2<f64>,
    /// Metric factor `gm12` of the mapping.
    pub gm12: Array2<f64>,
    /// Metric factor `gm33` of the mapping.
    pub gm33: Array2<f64>,
    /// Normalised horizontal offset of each grid node from the geometric
    /// centre.
    pub x: Array2<f64>,
    /// Normalised vertical offset of each grid node from the midplane.
    pub y: Array2<f64>,
    /// Safety factor profile.
    pub q: Array1<f64>,
    /// Poloidal current profile `R·Bφ`.
    pub rbphi: Array1<f64>,
    /// Pressure profile.
    pub p0: Array1<f64>,
    /// Poloidal flux at the boundary per radian.
    pub cpsurf: f64,
    /// Normalised plasma radius.
    pub radius: f64,
    /// Inverse aspect ratio.
    pub eps: f64,
    /// Magnetic-axis major radius \[m\].
    pub rmag: f64,
    /// On-axis magnetic field \[T\].
    pub bmag: f64,
    /// Whether the equilibrium is up-down symmetric (half-period storage).
    pub symmetric: bool,
}

/// Validated HELENA mapping with the axis row completed and all poloidal
/// grids covering the full `[0, 2π]` period.
///
/// Up-down-symmetric inputs are mirrored about the midplane at construction
/// (`x`, `gm11`, `gm33` even in χ; `y`, `gm12` odd), so every stored grid is
/// single-valued over the full period and no reflection is needed at
/// evaluation time. Axis-indeterminate quantities use the three-point
/// extrapolation from the first three off-axis surfaces.
pub struct HelenaDataset {
    /// Flux-surface grid (axis included).
    pub s: Array1<f64>,
    /// Full-period poloidal grid, `[0, 2π]` inclusive.
    pub chi: Array1<f64>,
    /// Horizontal offsets, `(npsi, nchi)`.
    pub x: Array2<f64>,
    /// Vertical offsets, `(npsi, nchi)`.
    pub y: Array2<f64>,
    /// Covariant metric component `g_ss`.
    pub covariant_g11: Array2<f64>,
    /// Covariant metric component `g_sχ`.
    pub covariant_g12: Array2<f64>,
    /// Covariant metric component `g_χχ`.
    pub covariant_g22: Array2<f64>,
    /// Covariant metric component `g_φφ`.
    pub covariant_g33: Array2<f64>,
    /// Contravariant field component `Bᵡ`, normalised HELENA units.
    pub contravariant_b2: Array2<f64>,
    /// Contravariant field component `Bᵠ`, normalised HELENA units.
    pub contravariant_b3: Array2<f64>,
    /// Coordinate jacobian on the grid.
    pub jacobian: Array2<f64>,
    /// Safety factor profile.
    pub q: Array1<f64>,
    /// Poloidal current profile `R·Bφ`.
    pub rbphi: Array1<f64>,
    /// Pressure profile.
    pub p0: Array1<f64>,
    /// Poloidal flux at the boundary per radian.
    pub cpsurf: f64,
    /// Normalised plasma radius.
    pub radius: f64,
    /// Inverse aspect ratio.
    pub eps: f64,
    /// Magnetic-axis major radius \[m\].
    pub rmag: f64,
    /// On-axis magnetic field \[T\].
    pub bmag: f64,
    /// Geometric major radius \[m\].
    pub rgeo: f64,
}

/// Parity of a poloidal profile under the midplane reflection χ → 2π − χ.
#[derive(Clone, Copy)]
enum Parity {
    Even,
    Odd,
}

impl HelenaDataset {
    pub fn new(raw: HelenaRaw) -> Result<Self> {
        let npsi = raw.s.len();
        if npsi < 4 {
            return Err(DatasetError::TooFewSurfaces { needed: 4, got: npsi });
        }
        let nchi_stored = raw.chi.len();
        let expected = (npsi - 1, nchi_stored);
        for (name, array) in [
            ("gm11", &raw.gm11),
            ("gm12", &raw.gm12),
            ("gm33", &raw.gm33),
            ("x", &raw.x),
            ("y", &raw.y),
        ] {
            if array.dim() != expected {
                return Err(DatasetError::ShapeMismatch { name, expected, got: array.dim() });
            }
        }
        for (name, profile) in [("q", &raw.q), ("rbphi", &raw.rbphi), ("p0", &raw.p0)] {
            if profile.len() != npsi {
                return Err(DatasetError::ProfileMismatch {
                    name,
                    expected: npsi,
                    got: profile.len(),
                });
            }
        }
        for (name, value) in [("eps", raw.eps), ("radius", raw.radius), ("bmag", raw.bmag.abs())]
        {
            if value <= 0.0 {
                return Err(DatasetError::NonPositiveScalar { name, value });
            }
        }

        let chi = full_period_grid(&raw.chi, raw.symmetric);
        let layout = |array: &Array2<f64>, parity: Parity| {
            layout_2d(array, &raw.s, raw.symmetric, parity)
        };
        let gm11 = layout(&raw.gm11, Parity::Even);
        let gm12 = layout(&raw.gm12, Parity::Odd);
        let gm33 = layout(&raw.gm33, Parity::Even);
        let x = layout(&raw.x, Parity::Even);
        let y = layout(&raw.y, Parity::Odd);

        let nchi = chi.len();
        // Flux functions copied over each surface so the 2D algebra below
        // stays elementwise.
        let mut f = Array2::zeros((npsi, nchi));
        let mut qof = Array2::zeros((npsi, nchi));
        let mut cap_f = Array2::zeros((npsi, nchi));
        for i in 0..npsi {
            f.row_mut(i).fill(2.0 * raw.cpsurf * raw.s[i]);
            qof.row_mut(i).fill(raw.q[i] / raw.rbphi[i]);
            cap_f.row_mut(i).fill(raw.rbphi[i]);
        }

        let jacobian = &f * &qof * &gm33;
        let covariant_g33 = gm33.clone();
        let covariant_g22 = &qof * &qof * &gm33 * &gm11;
        let covariant_g12 = -(&qof * &qof * &f * &gm33 * &gm12);
        let mut covariant_g11 = (1.0 + &qof * &qof * &gm12 * &gm12 * &gm33) * &f * &f / &gm11;
        let g11_axis = axis_extrapolation(&covariant_g11, &raw.s);
        covariant_g11.row_mut(0).fill(g11_axis);
        // f/J is indeterminate on the axis, so Bᵡ is written as 1/(qoF·gm33).
        let contravariant_b2 = 1.0 / (&qof * &gm33);
        let contravariant_b3 = &cap_f / &gm33;

        let rgeo = raw.radius / raw.eps * raw.rmag;
        log::debug!("HELENA mapping laid out: {npsi} surfaces x {nchi} poloidal points");

        Ok(Self {
            s: raw.s,
            chi,
            x,
            y,
            covariant_g11,
            covariant_g12,
            covariant_g22,
            covariant_g33,
            contravariant_b2,
            contravariant_b3,
            jacobian,
            q: raw.q,
            rbphi: raw.rbphi,
            p0: raw.p0,
            cpsurf: raw.cpsurf,
            radius: raw.radius,
            eps: raw.eps,
            rmag: raw.rmag,
            bmag: raw.bmag,
            rgeo,
        })
    }

    /// Maps an arbitrary poloidal angle into the stored `[0, 2π]` branch.
    pub fn reduce_chi(&self, chi: f64) -> f64 {
        chi.rem_euclid(TAU)
    }

    /// Magnetic-axis major radius \[m\].
    pub fn raxis(&self) -> f64 {
        self.rmag
    }

    /// Plasma minor radius \[m\].
    pub fn minor_radius(&self) -> f64 {
        self.eps * self.rgeo
    }
}

impl std::fmt::Debug for HelenaDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelenaDataset")
            .field("surfaces", &self.s.len())
            .field("poloidal points", &self.chi.len())
            .field("Bmag [T]", &format!("{:.7}", self.bmag))
            .field("Rgeo [m]", &format!("{:.7}", self.rgeo))
            .field("eps", &self.eps)
            .finish()
    }
}

/// Completes the poloidal grid over the full period: symmetric inputs are
/// mirrored about χ = π, full-period inputs gain the 2π wrap point.
fn full_period_grid(chi: &Array1<f64>, symmetric: bool) -> Array1<f64> {
    let n = chi.len();
    if symmetric {
        let mut full = Vec::with_capacity(2 * n - 1);
        full.extend(chi.iter().copied());
        for j in (0..n - 1).rev() {
            full.push(TAU - chi[j]);
        }
        Array1::from_vec(full)
    } else {
        let mut full = Vec::with_capacity(n + 1);
        full.extend(chi.iter().copied());
        full.push(TAU);
        Array1::from_vec(full)
    }
}

/// Lays a stored `(npsi - 1, nchi)` field out over the complete grid:
/// axis row from the three-point extrapolation, poloidal completion by
/// parity mirroring (symmetric storage) or periodic wrap.
fn layout_2d(
    array: &Array2<f64>,
    s: &Array1<f64>,
    symmetric: bool,
    parity: Parity,
) -> Array2<f64> {
    let (rows, nchi_stored) = array.dim();
    let npsi = rows + 1;
    let nchi = if symmetric { 2 * nchi_stored - 1 } else { nchi_stored + 1 };

    let mut out = Array2::zeros((npsi, nchi));
    for i in 0..rows {
        for j in 0..nchi_stored {
            out[[i + 1, j]] = array[[i, j]];
        }
        for j in 1..nchi - nchi_stored + 1 {
            let (src, sign) = if symmetric {
                let mirrored = array[[i, nchi_stored - 1 - j]];
                match parity {
                    Parity::Even => (mirrored, 1.0),
                    Parity::Odd => (mirrored, -1.0),
                }
            } else {
                (array[[i, 0]], 1.0)
            };
            out[[i + 1, nchi_stored - 1 + j]] = sign * src;
        }
    }
    let axis = axis_extrapolation(&out, s);
    out.row_mut(0).fill(axis);
    out
}

/// Three-point extrapolation of a 2D field to the magnetic axis, from the
/// first column of the first three off-axis surfaces.
fn axis_extrapolation(array: &Array2<f64>, s: &Array1<f64>) -> f64 {
    let a1 = array[[1, 0]];
    let a2 = array[[2, 0]];
    let a3 = array[[3, 0]];
    let ds0 = s[1] - s[0];
    let ds2 = s[2] - s[1];
    let ds3 = s[3] - s[1];
    (a1 * (ds0 + ds2) * (ds2 - ds3) * (ds0 + ds3)
        + ds0 * (-(a3 * ds2 * (ds0 + ds2)) + a2 * ds3 * (ds0 + ds3)))
        / (ds2 * (ds2 - ds3) * ds3)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// Fabricates a shifted-circle mapping covering half a period.
    pub(crate) fn circular_raw(npsi: usize, nchi: usize) -> HelenaRaw {
        let s = Array1::from_iter((0..npsi).map(|i| i as f64 / (npsi - 1) as f64));
        let chi = Array1::from_iter((0..nchi).map(|j| PI * j as f64 / (nchi - 1) as f64));

        let shape = (npsi - 1, nchi);
        let mut x = Array2::zeros(shape);
        let mut y = Array2::zeros(shape);
        let mut gm11 = Array2::zeros(shape);
        let mut gm12 = Array2::zeros(shape);
        let mut gm33 = Array2::zeros(shape);
        for i in 0..npsi - 1 {
            let si = s[i + 1];
            for j in 0..nchi {
                let cj = chi[j];
                x[[i, j]] = si * cj.cos();
                y[[i, j]] = si * cj.sin();
                gm11[[i, j]] = si * si + 0.1;
                gm12[[i, j]] = 0.05 * si * cj.sin();
                gm33[[i, j]] = (1.0 + 0.3 * si * cj.cos()).powi(2);
            }
        }

        HelenaRaw {
            s,
            chi,
            gm11,
            gm12,
            gm33,
            x,
            y,
            q: Array1::from_elem(npsi, 1.5),
            rbphi: Array1::from_elem(npsi, 1.0),
            p0: Array1::from_elem(npsi, 0.0),
            cpsurf: 0.02,
            radius: 0.3,
            eps: 0.3,
            rmag: 1.0,
            bmag: 1.0,
            symmetric: true,
        }
    }

    #[test]
    fn test_symmetric_completion() {
        let dataset = HelenaDataset::new(circular_raw(11, 9)).unwrap();
        let nchi = dataset.chi.len();
        assert_eq!(nchi, 17);
        assert_relative_eq!(dataset.chi[nchi - 1], TAU);
        // y is odd about the midplane: y(χ) = −y(2π − χ).
        let j = 2;
        assert_relative_eq!(dataset.y[[5, j]], -dataset.y[[5, nchi - 1 - j]], epsilon = 1e-14);
        // x is even.
        assert_relative_eq!(dataset.x[[5, j]], dataset.x[[5, nchi - 1 - j]], epsilon = 1e-14);
    }

    #[test]
    fn test_axis_row_is_finite() {
        let dataset = HelenaDataset::new(circular_raw(11, 9)).unwrap();
        for j in 0..dataset.chi.len() {
            assert!(dataset.covariant_g11[[0, j]].is_finite());
            assert!(dataset.x[[0, j]].is_finite());
        }
    }

    #[test]
    fn test_reduce_chi() {
        let dataset = HelenaDataset::new(circular_raw(11, 9)).unwrap();
        assert_relative_eq!(dataset.reduce_chi(TAU + 0.5), 0.5, epsilon = 1e-14);
        assert_relative_eq!(dataset.reduce_chi(-0.5), TAU - 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_shape_validation() {
        let mut raw = circular_raw(11, 9);
        raw.gm12 = Array2::zeros((3, 3));
        assert!(matches!(
            HelenaDataset::new(raw),
            Err(DatasetError::ShapeMismatch { name: "gm12", .. })
        ));
    }
}
