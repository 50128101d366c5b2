use ndarray::Array1;

use super::{Error, System};

impl System {
    /// Solves the system by Gaussian elimination followed by back-substitution.
    ///
    /// Elimination runs on a fresh copy of the stored system, so repeated calls
    /// give identical results. Rows are never exchanged: a zero pivot fails
    /// even when a row swap would make the system solvable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if a pivot is exactly zero.
    pub fn solve_direct(&self) -> Result<Array1<f64>, Error> {
        let n = self.dim();
        let mut m = self.coefficients().clone();
        let mut b = self.constants().clone();

        // Forward elimination to upper-triangular form.
        for k in 0..n {
            let pivot = m[[k, k]];

            #[allow(clippy::float_cmp)]
            if pivot == 0.0 {
                return Err(Error::SingularMatrix { row: k });
            }

            for i in (k + 1)..n {
                let factor = m[[i, k]] / pivot;
                let update = factor * b[k];
                b[i] -= update;
                for j in k..n {
                    let update = factor * m[[k, j]];
                    m[[i, j]] -= update;
                }
            }
        }

        // Back-substitution, last unknown first.
        let mut x = Array1::<f64>::zeros(n);
        for i in (0..n).rev() {
            let known: f64 = ((i + 1)..n).map(|j| m[[i, j]] * x[j]).sum();
            x[i] = (b[i] - known) / m[[i, i]];
        }

        log::debug!("gaussian elimination solved a {n}x{n} system");
        Ok(x)
    }
}
