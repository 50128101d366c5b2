use ndarray::{Array1, Array2};

use super::Error;

/// A square linear system `A·x = b`.
///
/// The coefficients and constants are copied in at construction and never
/// exposed mutably, so every solve starts from the caller's original values.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    coefficients: Array2<f64>,
    constants: Array1<f64>,
}

impl System {
    /// Creates a system from a slice of coefficient rows and a constants slice.
    ///
    /// Rows can be anything that views as `&[f64]`, such as `Vec<f64>` or
    /// fixed-size arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of constants differs from the number of
    /// rows, if any row is not as long as the matrix is tall, or if a
    /// coefficient or constant is NaN or infinite.
    pub fn new<R: AsRef<[f64]>>(coefficients: &[R], constants: &[f64]) -> Result<Self, Error> {
        let n = coefficients.len();

        if constants.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                got: constants.len(),
            });
        }

        for (row, values) in coefficients.iter().enumerate() {
            let got = values.as_ref().len();
            if got != n {
                return Err(Error::RaggedRow {
                    row,
                    expected: n,
                    got,
                });
            }
        }

        let coefficients = Array2::from_shape_fn((n, n), |(i, j)| coefficients[i].as_ref()[j]);
        let constants = Array1::from(constants.to_vec());

        Self::from_arrays(coefficients, constants)
    }

    /// Creates a system from owned arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square, if the number of
    /// constants differs from the number of rows, or if a coefficient or
    /// constant is NaN or infinite.
    pub fn from_arrays(coefficients: Array2<f64>, constants: Array1<f64>) -> Result<Self, Error> {
        let (rows, cols) = coefficients.dim();

        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }

        if constants.len() != rows {
            return Err(Error::DimensionMismatch {
                expected: rows,
                got: constants.len(),
            });
        }

        if let Some(((row, col), &value)) = coefficients
            .indexed_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(Error::NonFiniteCoefficient { row, col, value });
        }

        if let Some((index, &value)) = constants
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(Error::NonFiniteConstant { index, value });
        }

        Ok(Self {
            coefficients,
            constants,
        })
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.constants.len()
    }

    /// Returns the coefficient matrix.
    #[must_use]
    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coefficients
    }

    /// Returns the constants vector.
    #[must_use]
    pub fn constants(&self) -> &Array1<f64> {
        &self.constants
    }

    /// Returns the residual `b - A·x` for a candidate solution.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have [`System::dim`] entries.
    #[must_use]
    pub fn residual(&self, x: &Array1<f64>) -> Array1<f64> {
        &self.constants - &self.coefficients.dot(x)
    }
}
