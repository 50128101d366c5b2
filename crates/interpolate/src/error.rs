use thiserror::Error;

/// Errors that can occur when building or evaluating an interpolation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("got {x} x-values but {y} y-values")]
    LengthMismatch { x: usize, y: usize },

    #[error("no sample points")]
    Empty,

    #[error("sample {index} is not finite")]
    NonFinite { index: usize },

    #[error("duplicate x-value {value}")]
    DuplicateX { value: f64 },

    #[error("spline needs at least 2 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("x-values must be strictly increasing for spline interpolation")]
    NotAscending,

    #[error("x = {x} is outside the sampled range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("linear interpolator rejected the samples: {0}")]
    Interpolator(String),
}
