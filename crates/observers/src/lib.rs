//! Reusable observers for the numeth root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the different root finders in `numeth-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogProgress`]: logs every event through the `log` facade
//! - [`StopWhen`]: stops the solver once a predicate holds
//!
//! [`Observer`]: numeth_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

mod log_progress;
mod stop_when;
pub mod traits;

pub use log_progress::LogProgress;
pub use stop_when::{StopWhen, residual_below, step_below};
