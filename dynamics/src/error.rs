#[derive(thiserror::Error, Debug)]
pub enum DynamicsError {
    /// Error from [`fields`].
    #[error("Field error: {0}")]
    FieldError(#[from] fields::FieldError),

    /// Error from [`geometry`].
    #[error("Geometry error: {0}")]
    GeometryError(#[from] geometry::GeometryError),

    /// Electric and magnetic fields must share one metric object.
    #[error("electric and magnetic fields are defined over different metrics")]
    MismatchedFieldMetrics,

    /// The stepper's metric is not the one the magnetic field lives on.
    #[error("the magnetic field is not defined over the supplied metric")]
    ForeignMetric,

    /// A reference scale that must be strictly positive is not.
    #[error("non-positive reference `{name}`: {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// Ensemble state count does not match the gyron count.
    #[error("ensemble of {gyrons} gyrons fed {states} states")]
    EnsembleSizeMismatch { gyrons: usize, states: usize },
}
