use numeth_core::Function;
use thiserror::Error;

use super::{Error, evaluate::evaluate};

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// An endpoint is NaN or infinite.
    #[error("non-finite endpoint {value}")]
    NonFinite { value: f64 },

    /// Both endpoints are equal.
    #[error("zero width: both endpoints are {value}")]
    ZeroWidth { value: f64 },

    /// The function has the same sign (or a zero or NaN) at both endpoints.
    #[error("no sign change: f({left}) = {f_left}, f({right}) = {f_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },
}

/// Ordered finite bounds for a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        for value in [a, b] {
            if !value.is_finite() {
                return Err(BracketError::NonFinite { value });
            }
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth { value: a });
        }

        if a < b {
            Ok(Self { left: a, right: b })
        } else {
            Ok(Self { left: b, right: a })
        }
    }
}

/// A bracket `[left, right]` with the function values at its endpoints.
///
/// The endpoint values always have opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    /// Validates `bracket`, evaluates `f` at both ends, and checks for a sign change.
    ///
    /// Endpoint checks happen before any evaluation.
    pub(super) fn evaluate<F: Function>(f: &F, bracket: [f64; 2]) -> Result<Self, Error> {
        let bounds = Bounds::new(bracket)?;
        let f_left = evaluate(f, bounds.left)?;
        let f_right = evaluate(f, bounds.right)?;
        Ok(Self::new(bounds, f_left, f_right)?)
    }

    fn new(bounds: Bounds, f_left: f64, f_right: f64) -> Result<Self, BracketError> {
        let Bounds { left, right } = bounds;

        if f_left * f_right < 0.0 {
            Ok(Self {
                left,
                right,
                f_left,
                f_right,
            })
        } else {
            Err(BracketError::NoSignChange {
                left,
                right,
                f_left,
                f_right,
            })
        }
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns half the bracket width.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Returns where the chord through both endpoints crosses zero.
    pub(super) fn false_position(&self) -> f64 {
        (self.left * self.f_right - self.right * self.f_left) / (self.f_right - self.f_left)
    }

    /// Replaces the endpoint whose value has the same sign as `fx`.
    ///
    /// The left endpoint moves when `f(left) * fx > 0`; otherwise the right
    /// endpoint moves.
    pub(super) fn shrink(&mut self, x: f64, fx: f64) {
        if self.f_left * fx > 0.0 {
            self.left = x;
            self.f_left = fx;
        } else {
            self.right = x;
            self.f_right = fx;
        }
    }
}
