#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    /// Error from [`geometry`].
    #[error("Geometry error: {0}")]
    GeometryError(#[from] geometry::GeometryError),

    /// Error from [`interpolants`].
    #[error("Interpolation error: {0}")]
    InterpError(#[from] interpolants::InterpError),

    /// Error from [`datasets`].
    #[error("Dataset error: {0}")]
    DatasetError(#[from] datasets::DatasetError),

    /// Composite members must share one metric object.
    #[error("field {index} of the composite does not share the common metric")]
    MismatchedMetrics { index: usize },

    /// A normalisation that must be strictly positive is not.
    #[error("non-positive normalisation `{name}`: {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A composite over zero fields is meaningless.
    #[error("empty field composite")]
    EmptyCombo,
}
