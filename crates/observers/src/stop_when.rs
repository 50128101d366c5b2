use numeth_core::Observer;

use crate::traits::{CanStopEarly, HasResidual, HasStep};

/// Stops the solver as soon as a predicate on the event holds.
///
/// Works with any event type and any action implementing [`CanStopEarly`].
///
/// ```rust
/// use numeth_core::Closure;
/// use numeth_observers::StopWhen;
/// use numeth_solvers::equation::{BracketEvent, Config, Status, bisection};
///
/// let f = Closure::new(|x: f64| x * x - 2.0);
/// let observer = StopWhen::new(|event: &BracketEvent| event.iter == 4);
///
/// let solution = bisection::solve(&f, [0.0, 2.0], &Config::default(), observer).unwrap();
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.iters, 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<P> {
    predicate: P,
}

impl<P> StopWhen<P> {
    /// Wraps a predicate.
    pub const fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<E, A, P> Observer<E, A> for StopWhen<P>
where
    P: FnMut(&E) -> bool,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event).then(A::stop_early)
    }
}

/// Stops once the absolute residual drops below `tolerance`.
pub fn residual_below<E: HasResidual>(tolerance: f64) -> StopWhen<impl FnMut(&E) -> bool> {
    StopWhen::new(move |event: &E| event.residual().abs() < tolerance)
}

/// Stops once a step is smaller than `tolerance`.
pub fn step_below<E: HasStep>(tolerance: f64) -> StopWhen<impl FnMut(&E) -> bool> {
    StopWhen::new(move |event: &E| event.step() < tolerance)
}
