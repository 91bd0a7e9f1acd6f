#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// A 2D array does not match the coordinate grids.
    #[error("array `{name}`: expected shape {expected:?}, got {got:?}")]
    ShapeMismatch {
        name: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A profile array does not match its coordinate grid.
    #[error("profile `{name}`: expected {expected} samples, got {got}")]
    ProfileMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// Not enough flux surfaces for the axis extrapolation.
    #[error("need at least {needed} flux surfaces, got {got}")]
    TooFewSurfaces { needed: usize, got: usize },

    /// A scalar that must be strictly positive is not.
    #[error("non-positive scalar `{name}`: {value}")]
    NonPositiveScalar { name: &'static str, value: f64 },
}
