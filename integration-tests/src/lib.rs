//! Shared fixtures for the cross-crate tests.

use std::cell::Cell;

use numeth_core::Function;
use thiserror::Error;

/// `f(x) = x² - 4`, roots at `±2`.
#[must_use]
pub fn quadratic(x: f64) -> f64 {
    x * x - 4.0
}

/// Derivative of [`quadratic`].
#[must_use]
pub fn quadratic_derivative(x: f64) -> f64 {
    2.0 * x
}

/// `g(x) = cos(x)`, fixed point near `0.739085`.
#[must_use]
pub fn cosine(x: f64) -> f64 {
    x.cos()
}

/// Fixed point of [`cosine`] (the Dottie number).
pub const DOTTIE: f64 = 0.739_085_133_215_160_6;

/// Wraps a closure and counts how many times it is called.
pub struct Counting<F> {
    function: F,
    calls: Cell<usize>,
}

impl<F: Fn(f64) -> f64> Counting<F> {
    pub fn new(function: F) -> Self {
        Self {
            function,
            calls: Cell::new(0),
        }
    }

    /// Returns the number of evaluations so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Fn(f64) -> f64> Function for Counting<F> {
    type Error = std::convert::Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok((self.function)(x))
    }
}

/// Error raised by [`Sqrt`] outside its domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("sqrt is undefined at {0}")]
pub struct NegativeInput(pub f64);

/// `f(x) = sqrt(x) - 1`, failing for negative `x`.
pub struct Sqrt;

impl Function for Sqrt {
    type Error = NegativeInput;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        if x < 0.0 {
            return Err(NegativeInput(x));
        }
        Ok(x.sqrt() - 1.0)
    }
}

/// A strictly diagonally dominant 3×3 system with solution `[1, 2, -1]`.
#[must_use]
pub fn dominant_system() -> (Vec<Vec<f64>>, Vec<f64>) {
    let a = vec![
        vec![10.0, -1.0, 2.0],
        vec![-1.0, 11.0, -1.0],
        vec![2.0, -1.0, 10.0],
    ];
    // b = A · [1, 2, -1]
    let b = vec![6.0, 22.0, -10.0];
    (a, b)
}
