//! Gauss-Jacobi iteration for square linear systems.
//!
//! Each sweep updates every unknown from the previous iterate only:
//!
//! ```text
//! x_new[i] = (b[i] - Σ_{j≠i} a[i][j] · x_old[j]) / a[i][i]
//! ```
//!
//! Updated values are not reused within a sweep (that would be Gauss-Seidel).
//! Iteration stops once the largest component-wise change falls below the
//! tolerance. Convergence is guaranteed for strictly diagonally dominant
//! matrices, and not in general.

mod config;
mod solution;

pub use config::{Config, ConfigError};
pub use solution::Solution;

use ndarray::Array1;

use super::{Error, System};

impl System {
    /// Solves the system by Gauss-Jacobi iteration.
    ///
    /// Starts from `initial_guess` if it has one entry per unknown. A guess of
    /// any other length is ignored with a warning and the zero vector is used
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, a diagonal entry is zero, an
    /// iterate overflows to a non-finite value, or the iteration does not
    /// converge within `config.max_iters` sweeps.
    pub fn solve_iterative(
        &self,
        config: &Config,
        initial_guess: Option<&[f64]>,
    ) -> Result<Solution, Error> {
        config.validate()?;

        let n = self.dim();
        let a = self.coefficients();
        let b = self.constants();

        #[allow(clippy::float_cmp)]
        if let Some(row) = (0..n).find(|&i| a[[i, i]] == 0.0) {
            return Err(Error::SingularMatrix { row });
        }

        let mut x = match initial_guess {
            Some(guess) if guess.len() == n => Array1::from(guess.to_vec()),
            Some(guess) => {
                log::warn!(
                    "initial guess has {} entries but the system has {n} unknowns, starting from zero",
                    guess.len()
                );
                Array1::zeros(n)
            }
            None => Array1::zeros(n),
        };

        let mut change = f64::INFINITY;
        for iter in 1..=config.max_iters {
            let next = Array1::from_shape_fn(n, |i| {
                let off_diagonal: f64 = (0..n)
                    .filter(|&j| j != i)
                    .map(|j| a[[i, j]] * x[j])
                    .sum();
                (b[i] - off_diagonal) / a[[i, i]]
            });

            if next.iter().any(|value| !value.is_finite()) {
                log::debug!("jacobi diverged in sweep {iter}");
                return Err(Error::Diverged { iters: iter });
            }

            change = next
                .iter()
                .zip(x.iter())
                .map(|(new, old)| (new - old).abs())
                .fold(0.0, f64::max);
            x = next;

            log::trace!("jacobi sweep {iter}: max change {change}");
            if change < config.tolerance {
                log::debug!("jacobi converged after {iter} sweeps");
                return Ok(Solution { x, iters: iter });
            }
        }

        Err(Error::NotConverged {
            iters: config.max_iters,
            change,
        })
    }
}
