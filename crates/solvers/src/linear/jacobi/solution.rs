use ndarray::Array1;

/// The result of a converged Gauss-Jacobi run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Approximate solution vector.
    pub x: Array1<f64>,
    /// Number of sweeps performed (1-based).
    pub iters: usize,
}
