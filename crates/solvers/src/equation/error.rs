use std::error::Error as StdError;

use thiserror::Error;

use super::{BracketError, ConfigError};

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("derivative is zero at x = {x} (iteration {iter})")]
    ZeroDerivative { iter: usize, x: f64 },

    #[error("division by zero at x = {x} (iteration {iter})")]
    DivisionByZero { iter: usize, x: f64 },

    #[error("complex root: discriminant {discriminant} is negative (iteration {iter})")]
    ComplexRoot { iter: usize, discriminant: f64 },

    #[error("no convergence within {max_iters} iterations, last estimate x = {x}")]
    NotConverged { max_iters: usize, x: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
