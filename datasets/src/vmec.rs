use ndarray::{Array1, Array2};

use crate::{DatasetError, Result};

/// Fourier description of a VMEC equilibrium, as stored in a `wout_*.nc`
/// file: flux-surface profiles of the `(R, Z)` Fourier coefficients over the
/// poloidal/toroidal harmonic tables, plus the (Nyquist-sized) contravariant
/// field coefficient tables.
///
/// Coefficient arrays are `(ns, nm)`: row `k` holds every harmonic on flux
/// surface `sgrid[k]`. The represented quantities are
/// `R(s, ζ, θ) = Σ rmnc·cos(mθ − nζ)` and `Z = Σ zmns·sin(mθ − nζ)`, with
/// stellarator symmetry assumed.
pub struct VmecDataset {
    /// Normalised toroidal-flux grid.
    pub sgrid: Array1<f64>,
    /// Poloidal mode numbers of the geometry tables.
    pub xm: Array1<f64>,
    /// Toroidal mode numbers of the geometry tables.
    pub xn: Array1<f64>,
    /// Cosine coefficients of `R` \[m\], `(ns, nm)`.
    pub rmnc: Array2<f64>,
    /// Sine coefficients of `Z` \[m\], `(ns, nm)`.
    pub zmns: Array2<f64>,
    /// Poloidal mode numbers of the field tables (Nyquist sized).
    pub xm_nyq: Array1<f64>,
    /// Toroidal mode numbers of the field tables (Nyquist sized).
    pub xn_nyq: Array1<f64>,
    /// Cosine coefficients of `B^θ` \[T\], `(ns, nm_nyq)`.
    pub bsupumnc: Array2<f64>,
    /// Cosine coefficients of `B^ζ` \[T\], `(ns, nm_nyq)`.
    pub bsupvmnc: Array2<f64>,
    /// On-axis magnetic field \[T\].
    pub b0: f64,
}

impl VmecDataset {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sgrid: Array1<f64>,
        xm: Array1<f64>,
        xn: Array1<f64>,
        rmnc: Array2<f64>,
        zmns: Array2<f64>,
        xm_nyq: Array1<f64>,
        xn_nyq: Array1<f64>,
        bsupumnc: Array2<f64>,
        bsupvmnc: Array2<f64>,
        b0: f64,
    ) -> Result<Self> {
        let ns = sgrid.len();
        for (name, array, nm) in [
            ("rmnc", &rmnc, xm.len()),
            ("zmns", &zmns, xm.len()),
            ("bsupumnc", &bsupumnc, xm_nyq.len()),
            ("bsupvmnc", &bsupvmnc, xm_nyq.len()),
        ] {
            if array.dim() != (ns, nm) {
                return Err(DatasetError::ShapeMismatch {
                    name,
                    expected: (ns, nm),
                    got: array.dim(),
                });
            }
        }
        for (name, modes, reference) in
            [("xn", &xn, xm.len()), ("xn_nyq", &xn_nyq, xm_nyq.len())]
        {
            if modes.len() != reference {
                return Err(DatasetError::ProfileMismatch {
                    name,
                    expected: reference,
                    got: modes.len(),
                });
            }
        }
        if b0.abs() <= 0.0 {
            return Err(DatasetError::NonPositiveScalar { name: "b0", value: b0 });
        }

        log::debug!(
            "VMEC tables: {ns} surfaces, {} geometry harmonics, {} field harmonics",
            xm.len(),
            xm_nyq.len()
        );
        Ok(Self { sgrid, xm, xn, rmnc, zmns, xm_nyq, xn_nyq, bsupumnc, bsupvmnc, b0 })
    }

    /// Radial profile of one geometry harmonic, as a contiguous sample
    /// vector.
    pub fn harmonic_profile(table: &Array2<f64>, i: usize) -> Vec<f64> {
        table.column(i).to_vec()
    }
}

impl std::fmt::Debug for VmecDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VmecDataset")
            .field("surfaces", &self.sgrid.len())
            .field("harmonics", &self.xm.len())
            .field("nyquist harmonics", &self.xm_nyq.len())
            .field("B0 [T]", &format!("{:.7}", self.b0))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Circular-torus harmonics: R = r0 + a·s·cosθ, Z = a·s·sinθ.
    pub(crate) fn circular_vmec(ns: usize, r0: f64, a: f64) -> VmecDataset {
        let sgrid = Array1::from_iter((0..ns).map(|k| k as f64 / (ns - 1) as f64));
        let xm = Array1::from_vec(vec![0.0, 1.0]);
        let xn = Array1::from_vec(vec![0.0, 0.0]);
        let mut rmnc = Array2::zeros((ns, 2));
        let mut zmns = Array2::zeros((ns, 2));
        for k in 0..ns {
            rmnc[[k, 0]] = r0;
            rmnc[[k, 1]] = a * sgrid[k];
            zmns[[k, 1]] = a * sgrid[k];
        }
        let xm_nyq = xm.clone();
        let xn_nyq = xn.clone();
        let mut bsupumnc = Array2::zeros((ns, 2));
        let mut bsupvmnc = Array2::zeros((ns, 2));
        for k in 0..ns {
            bsupumnc[[k, 0]] = 0.2;
            bsupvmnc[[k, 0]] = 1.0;
        }
        VmecDataset::new(
            sgrid, xm, xn, rmnc, zmns, xm_nyq, xn_nyq, bsupumnc, bsupvmnc, 1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_creation_and_profiles() {
        let vmec = circular_vmec(8, 1.0, 0.3);
        let profile = VmecDataset::harmonic_profile(&vmec.rmnc, 1);
        assert_eq!(profile.len(), 8);
        assert!((profile[7] - 0.3).abs() < 1e-14);
    }

    #[test]
    fn test_shape_validation() {
        let vmec = circular_vmec(8, 1.0, 0.3);
        let bad = VmecDataset::new(
            vmec.sgrid.clone(),
            vmec.xm.clone(),
            Array1::zeros(5),
            vmec.rmnc.clone(),
            vmec.zmns.clone(),
            vmec.xm_nyq.clone(),
            vmec.xn_nyq.clone(),
            vmec.bsupumnc.clone(),
            vmec.bsupvmnc.clone(),
            1.0,
        );
        assert!(bad.is_err());
    }
}
