#[derive(thiserror::Error, Debug)]
pub enum GeometryError {
    /// Error from [`interpolants`].
    #[error("Interpolation error: {0}")]
    InterpError(#[from] interpolants::InterpError),

    /// Error from [`datasets`].
    #[error("Dataset error: {0}")]
    DatasetError(#[from] datasets::DatasetError),

    /// The root solver ran out of iterations above tolerance.
    #[error("{solver}: still above tolerance after {iterations} iterations (residual {residual:.3e})")]
    SolverNotConverged {
        solver: &'static str,
        iterations: usize,
        residual: f64,
    },

    /// The root solver cannot reduce the residual any further.
    #[error("{solver}: iteration stuck after {iterations} iterations (residual {residual:.3e})")]
    SolverStuck {
        solver: &'static str,
        iterations: usize,
        residual: f64,
    },

    /// The user-supplied residual returned NaN or infinity.
    #[error("{solver}: user function returned a non-finite residual")]
    SolverNonFinite { solver: &'static str },

    /// A constructor argument that must be strictly positive is not.
    #[error("non-positive argument `{name}`: {value}")]
    NonPositive { name: &'static str, value: f64 },
}
