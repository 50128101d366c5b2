/// Indicates how a root finder finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The method's stop criterion was met.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful root finder run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the solver finished.
    pub status: Status,
    /// Approximate root (or fixed point).
    pub x: f64,
    /// Iteration at which the solver finished (0-based).
    pub iters: usize,
}

impl Solution {
    pub(super) fn converged(x: f64, iters: usize) -> Self {
        Self {
            status: Status::Converged,
            x,
            iters,
        }
    }

    pub(super) fn stopped(x: f64, iters: usize) -> Self {
        Self {
            status: Status::StoppedByObserver,
            x,
            iters,
        }
    }
}
