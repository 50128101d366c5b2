use thiserror::Error;

use super::jacobi::ConfigError;

/// Errors that can occur when building or solving a linear system.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("expected {expected} constants, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("row {row} has {got} coefficients, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("coefficient matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("coefficient at ({row}, {col}) is not finite: {value}")]
    NonFiniteCoefficient { row: usize, col: usize, value: f64 },

    #[error("constant at index {index} is not finite: {value}")]
    NonFiniteConstant { index: usize, value: f64 },

    #[error("matrix is singular: zero pivot in row {row}")]
    SingularMatrix { row: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("iterate became non-finite in sweep {iters}")]
    Diverged { iters: usize },

    #[error("no convergence within {iters} iterations, last change {change}")]
    NotConverged { iters: usize, change: f64 },
}
