#[derive(thiserror::Error, Debug)]
pub enum InterpError {
    /// Error from [`rsl_interpolation`].
    #[error("Interpolation error: {0}")]
    InterpolationError(#[from] rsl_interpolation::InterpolationError),

    /// Evaluation outside the interpolant's support.
    #[error("Interpolation domain error: {0}")]
    DomainError(#[from] rsl_interpolation::DomainError),

    /// Knot grid and sample array lengths disagree.
    #[error("grid/sample size mismatch: {expected} grid points, {got} samples")]
    SizeMismatch { expected: usize, got: usize },

    /// Harmonic table and sample array lengths disagree.
    #[error("harmonic layout mismatch: {n_u} knots x {n_m} harmonics != {got} samples")]
    HarmonicMismatch { n_u: usize, n_m: usize, got: usize },
}
