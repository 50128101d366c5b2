use crate::{Error, polynomial::divided_differences, spline::Splines};

/// Sample points `(x_i, y_i)` prepared for interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    /// Newton coefficients `f[x_0], f[x_0, x_1], ..., f[x_0, ..., x_{n-1}]`.
    pub(crate) newton: Vec<f64>,
    /// Spline fits, or the reason the samples cannot be splined.
    pub(crate) splines: Result<Splines, Error>,
}

impl Interpolation {
    /// Copies and validates the samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length, are empty, contain a
    /// NaN or infinite value, or repeat an x-value.
    pub fn new(x_values: &[f64], y_values: &[f64]) -> Result<Self, Error> {
        if x_values.len() != y_values.len() {
            return Err(Error::LengthMismatch {
                x: x_values.len(),
                y: y_values.len(),
            });
        }

        if x_values.is_empty() {
            return Err(Error::Empty);
        }

        if let Some(index) = x_values
            .iter()
            .zip(y_values)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(Error::NonFinite { index });
        }

        for (i, &value) in x_values.iter().enumerate() {
            #[allow(clippy::float_cmp)]
            if x_values[i + 1..].iter().any(|&other| other == value) {
                return Err(Error::DuplicateX { value });
            }
        }

        Ok(Self {
            newton: divided_differences(x_values, y_values),
            splines: Splines::fit(x_values, y_values),
            x: x_values.to_vec(),
            y: y_values.to_vec(),
        })
    }

    /// Returns the number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`: an interpolation has at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the sample x-values.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x
    }

    /// Returns the sample y-values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.y
    }
}
