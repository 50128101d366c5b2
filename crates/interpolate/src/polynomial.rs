use crate::Interpolation;

impl Interpolation {
    /// Evaluates the interpolating polynomial at `x` in Lagrange form.
    #[must_use]
    pub fn lagrange(&self, x: f64) -> f64 {
        let xs = &self.x;
        xs.iter()
            .zip(&self.y)
            .enumerate()
            .map(|(i, (&xi, &yi))| {
                let basis: f64 = xs
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &xj)| (x - xj) / (xi - xj))
                    .product();
                yi * basis
            })
            .sum()
    }

    /// Evaluates the interpolating polynomial at `x` in Newton form.
    ///
    /// Uses the divided differences computed at construction, nested
    /// Horner-style.
    #[must_use]
    pub fn newton(&self, x: f64) -> f64 {
        let n = self.newton.len();
        (0..n - 1)
            .rev()
            .fold(self.newton[n - 1], |acc, i| acc * (x - self.x[i]) + self.newton[i])
    }
}

/// Returns the top row of the divided-difference table for the samples.
///
/// Entry `k` is `f[x_0, ..., x_k]`. Requires distinct x-values.
pub(crate) fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut coef = y.to_vec();
    for order in 1..n {
        for i in (order..n).rev() {
            coef[i] = (coef[i] - coef[i - 1]) / (x[i] - x[i - order]);
        }
    }
    coef
}
