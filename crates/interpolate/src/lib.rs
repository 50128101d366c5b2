//! Polynomial and spline interpolation through a table of sample points.
//!
//! An [`Interpolation`] is built once from `(x, y)` samples and then
//! evaluated with any of four interpolants:
//!
//! - [`Interpolation::lagrange`]: the interpolating polynomial in Lagrange form
//! - [`Interpolation::newton`]: the same polynomial from divided differences
//! - [`Interpolation::linear_spline`]: piecewise linear between samples
//! - [`Interpolation::cubic_spline`]: natural cubic spline
//!
//! The polynomial forms accept samples in any order and extrapolate freely.
//! The splines need strictly increasing x-values and only evaluate inside the
//! sampled range.

mod error;
mod interpolation;
mod polynomial;
mod spline;

pub use error::Error;
pub use interpolation::Interpolation;
