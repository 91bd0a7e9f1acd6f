use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::{DatasetError, Result};

/// Eigenmode data from a CASTOR `ceig` file: the complex eigenvalue, the
/// toroidal mode number and the complex covariant vector-potential harmonics
/// `Â_k,m(s)` over the radial grid.
///
/// Harmonic arrays are `(npsi, nm)`: row `k` holds every poloidal harmonic at
/// `s[k]`. `a1` is the true first covariant component (the `−i·a1` storage
/// quirk of the file format is a parser concern).
pub struct CastorDataset {
    /// Toroidal mode number.
    pub n_tor: f64,
    /// Complex MHD eigenvalue λ.
    pub eigenvalue: Complex64,
    /// Radial grid (square root of normalised poloidal flux).
    pub s: Array1<f64>,
    /// Poloidal harmonic numbers.
    pub m: Array1<f64>,
    /// Covariant potential harmonics, first component.
    pub a1: Array2<Complex64>,
    /// Covariant potential harmonics, second component.
    pub a2: Array2<Complex64>,
    /// Covariant potential harmonics, third component.
    pub a3: Array2<Complex64>,
}

impl CastorDataset {
    pub fn new(
        n_tor: f64,
        eigenvalue: Complex64,
        s: Array1<f64>,
        m: Array1<f64>,
        a1: Array2<Complex64>,
        a2: Array2<Complex64>,
        a3: Array2<Complex64>,
    ) -> Result<Self> {
        let expected = (s.len(), m.len());
        for (name, array) in [("a1", &a1), ("a2", &a2), ("a3", &a3)] {
            if array.dim() != expected {
                return Err(DatasetError::ShapeMismatch { name, expected, got: array.dim() });
            }
        }
        log::debug!(
            "CASTOR eigenmode: n_tor = {n_tor}, {} radial points, {} harmonics",
            s.len(),
            m.len()
        );
        Ok(Self { n_tor, eigenvalue, s, m, a1, a2, a3 })
    }

    /// Splits one harmonic table into the contiguous real/imaginary sample
    /// vectors consumed by the Fourier-composite constructor (harmonic index
    /// fastest).
    pub fn split_parts(table: &Array2<Complex64>) -> (Vec<f64>, Vec<f64>) {
        let re = table.iter().map(|z| z.re).collect();
        let im = table.iter().map(|z| z.im).collect();
        (re, im)
    }
}

impl std::fmt::Debug for CastorDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CastorDataset")
            .field("n_tor", &self.n_tor)
            .field("eigenvalue", &self.eigenvalue)
            .field("radial points", &self.s.len())
            .field("harmonics", &self.m.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_parts_layout() {
        let s = Array1::from_vec(vec![0.0, 0.5, 1.0]);
        let m = Array1::from_vec(vec![1.0, 2.0]);
        let mut a = Array2::from_elem((3, 2), Complex64::new(0.0, 0.0));
        a[[1, 0]] = Complex64::new(3.0, -1.0);
        let dataset = CastorDataset::new(
            2.0,
            Complex64::new(0.0, 0.1),
            s,
            m,
            a.clone(),
            a.clone(),
            a,
        )
        .unwrap();

        let (re, im) = CastorDataset::split_parts(&dataset.a1);
        // Row-major flattening keeps the harmonic index fastest.
        assert_eq!(re.len(), 6);
        assert_eq!(re[2], 3.0);
        assert_eq!(im[2], -1.0);
    }

    #[test]
    fn test_shape_validation() {
        let s = Array1::from_vec(vec![0.0, 1.0]);
        let m = Array1::from_vec(vec![1.0]);
        let good = Array2::from_elem((2, 1), Complex64::new(0.0, 0.0));
        let bad = Array2::from_elem((1, 1), Complex64::new(0.0, 0.0));
        assert!(
            CastorDataset::new(1.0, Complex64::new(0.0, 0.0), s, m, good.clone(), bad, good)
                .is_err()
        );
    }
}
