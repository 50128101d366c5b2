//! Solvers for square linear systems `A·x = b`.
//!
//! A [`System`] owns private copies of the coefficient matrix and constants
//! vector, so solving never touches the caller's data. Two solvers are
//! available:
//!
//! - [`System::solve_direct`]: Gaussian elimination without pivoting
//! - [`System::solve_iterative`]: Gauss-Jacobi iteration (see [`jacobi`])

mod direct;
mod error;
mod system;

pub mod jacobi;

pub use error::Error;
pub use system::System;
