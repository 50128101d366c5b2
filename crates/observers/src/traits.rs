//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different root finders.
//!
//! # Event traits
//!
//! - [`HasIter`]: events that carry an iteration counter
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasStep`]: events that carry a step size
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numeth_core::Observer;
//! use numeth_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use numeth_solvers::equation::{Action, BracketEvent, StepEvent};

/// An event that carries the solver's iteration counter.
pub trait HasIter {
    /// Returns the 0-based iteration this event was emitted in.
    fn iter(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the function value at the evaluated point.
    fn residual(&self) -> f64;
}

/// An event that carries a step size.
pub trait HasStep {
    /// Returns the magnitude of the step taken in this iteration.
    fn step(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIter for BracketEvent {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasIter for StepEvent {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for BracketEvent {
    fn residual(&self) -> f64 {
        self.fx
    }
}

impl HasStep for StepEvent {
    fn step(&self) -> f64 {
        StepEvent::step(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
