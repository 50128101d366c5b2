//! Root finders for scalar equations `f(x) = 0`.
//!
//! Every method lives in its own module and exposes two entry points:
//! `solve`, which reports each iteration to an [`Observer`], and
//! `solve_unobserved`. All methods share a [`Config`] (tolerance and
//! iteration bound), return a [`Solution`], and fail with an [`Error`].
//!
//! # Methods
//!
//! Bracketing methods need an interval whose endpoint values differ in sign.
//! They report progress with [`BracketEvent`]:
//!
//! - [`bisection`]: halves the bracket; stops on bracket half-width
//! - [`regula_falsi`]: splits the bracket at the chord's zero; stops on `|f(x)|`
//!
//! Open methods start from one or more guesses and may diverge.
//! They report progress with [`StepEvent`] and stop on step size:
//!
//! - [`fixed_point`]: iterates `x = g(x)`
//! - [`newton_raphson`]: tangent steps using a supplied derivative
//! - [`secant`]: chord steps through the last two iterates
//! - [`muller`]: parabola through the last three iterates
//!
//! # Iteration bound
//!
//! The iteration counter starts at 0 and each method loops while
//! `iter <= max_iters`, making up to `max_iters + 1` attempts before
//! returning [`Error::NotConverged`].
//!
//! [`Observer`]: numeth_core::Observer

mod action;
mod bracket;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;

pub mod bisection;
pub mod fixed_point;
pub mod muller;
pub mod newton_raphson;
pub mod regula_falsi;
pub mod secant;

pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{BracketEvent, StepEvent};
pub use solution::{Solution, Status};
