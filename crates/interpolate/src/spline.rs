use ndarray::Array1;
use ninterp::{
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};

use crate::{Error, Interpolation};

impl Interpolation {
    /// Evaluates the piecewise-linear interpolant at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two samples, the x-values are
    /// not strictly increasing, or `x` lies outside the sampled range.
    pub fn linear_spline(&self, x: f64) -> Result<f64, Error> {
        let (splines, _) = self.locate(x)?;
        splines
            .linear
            .interpolate(&[x])
            .map_err(|e| Error::Interpolator(e.to_string()))
    }

    /// Evaluates the natural cubic spline at `x`.
    ///
    /// The spline has continuous first and second derivatives at every
    /// interior sample and zero second derivative at both ends.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two samples, the x-values are
    /// not strictly increasing, or `x` lies outside the sampled range.
    pub fn cubic_spline(&self, x: f64) -> Result<f64, Error> {
        let (splines, i) = self.locate(x)?;
        let coef = &splines.cubic;
        let dx = x - self.x[i];
        Ok(self.y[i] + coef.b[i] * dx + coef.c[i] * dx.powi(2) + coef.d[i] * dx.powi(3))
    }

    /// Returns the fitted splines and the index `i` of the first segment
    /// `[x_i, x_{i+1}]` containing `x`.
    fn locate(&self, x: f64) -> Result<(&Splines, usize), Error> {
        let splines = self.splines.as_ref().map_err(Clone::clone)?;

        let out_of_range = Error::OutOfRange {
            x,
            min: self.x[0],
            max: self.x[self.x.len() - 1],
        };
        let i = self
            .x
            .windows(2)
            .position(|w| w[0] <= x && x <= w[1])
            .ok_or(out_of_range)?;

        Ok((splines, i))
    }
}

/// Spline interpolants fitted once per sample table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Splines {
    linear: Interp1DOwned<f64, Linear>,
    cubic: NaturalCubic,
}

impl Splines {
    /// Fits both splines.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two samples or the x-values
    /// are not strictly increasing.
    pub(crate) fn fit(x: &[f64], y: &[f64]) -> Result<Self, Error> {
        if x.len() < 2 {
            return Err(Error::TooFewPoints { got: x.len() });
        }
        if x.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::NotAscending);
        }

        let linear = Interp1DOwned::new(
            Array1::from(x.to_vec()),
            Array1::from(y.to_vec()),
            Linear,
            Extrapolate::Error,
        )
        .map_err(|e| Error::Interpolator(e.to_string()))?;

        Ok(Self {
            linear,
            cubic: NaturalCubic::fit(x, y),
        })
    }
}

/// Per-segment coefficients of a natural cubic spline.
///
/// On segment `i`, `S(x) = y_i + b_i·dx + c_i·dx² + d_i·dx³` with `dx = x - x_i`.
#[derive(Debug, Clone, PartialEq)]
struct NaturalCubic {
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl NaturalCubic {
    /// Solves the tridiagonal system for the spline with `c_0 = c_{n-1} = 0`.
    ///
    /// Requires at least two strictly increasing x-values.
    fn fit(x: &[f64], y: &[f64]) -> Self {
        let n = x.len();
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

        let mut mu = vec![0.0; n - 1];
        let mut z = vec![0.0; n];
        for i in 1..n - 1 {
            let alpha = 3.0 / h[i] * (y[i + 1] - y[i]) - 3.0 / h[i - 1] * (y[i] - y[i - 1]);
            let l = 2.0 * (x[i + 1] - x[i - 1]) - h[i - 1] * mu[i - 1];
            mu[i] = h[i] / l;
            z[i] = (alpha - h[i - 1] * z[i - 1]) / l;
        }

        let mut b = vec![0.0; n - 1];
        let mut c = vec![0.0; n];
        let mut d = vec![0.0; n - 1];
        for j in (0..n - 1).rev() {
            c[j] = z[j] - mu[j] * c[j + 1];
            b[j] = (y[j + 1] - y[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
            d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
        }

        Self { b, c, d }
    }
}
