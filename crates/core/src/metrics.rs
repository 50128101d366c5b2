//! Error metrics between a true value and an approximation of it.
//!
//! These are diagnostics for checking solver output against known answers;
//! no solver depends on them.

use thiserror::Error;

/// Errors that can occur when computing an error metric.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    /// The metric divides by the true value, which is zero.
    #[error("true value is zero, so the relative error is undefined")]
    ZeroTrueValue,
}

/// Returns `|true_value - approx_value|`.
#[must_use]
pub fn absolute_error(true_value: f64, approx_value: f64) -> f64 {
    (true_value - approx_value).abs()
}

/// Returns `|(true_value - approx_value) / true_value|`.
///
/// # Errors
///
/// Returns [`MetricError::ZeroTrueValue`] if `true_value` is zero.
pub fn relative_error(true_value: f64, approx_value: f64) -> Result<f64, MetricError> {
    #[allow(clippy::float_cmp)]
    if true_value == 0.0 {
        return Err(MetricError::ZeroTrueValue);
    }
    Ok(((true_value - approx_value) / true_value).abs())
}

/// Returns the relative error expressed as a percentage.
///
/// # Errors
///
/// Returns [`MetricError::ZeroTrueValue`] if `true_value` is zero.
pub fn percentage_error(true_value: f64, approx_value: f64) -> Result<f64, MetricError> {
    relative_error(true_value, approx_value).map(|e| e * 100.0)
}
