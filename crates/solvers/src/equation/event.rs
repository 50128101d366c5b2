/// Iteration event emitted by the bracketing methods.
///
/// Emitted by [`bisection`](super::bisection) and
/// [`regula_falsi`](super::regula_falsi) once per iteration, after the new
/// point has been evaluated and before the bracket is narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketEvent {
    /// Iteration counter (0-based).
    pub iter: usize,
    /// Bracket the point was taken from.
    pub bracket: [f64; 2],
    /// The evaluated point.
    pub x: f64,
    /// Function value at `x`.
    pub fx: f64,
}

/// Iteration event emitted by the open methods.
///
/// Emitted by [`fixed_point`](super::fixed_point),
/// [`newton_raphson`](super::newton_raphson), [`secant`](super::secant), and
/// [`muller`](super::muller) once per iteration, after the next iterate has
/// been computed and before the convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// Iteration counter (0-based).
    pub iter: usize,
    /// The current iterate.
    pub x: f64,
    /// The iterate proposed by this step.
    pub next: f64,
}

impl StepEvent {
    /// Returns the magnitude of the step, `|next - x|`.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.next - self.x).abs()
    }
}
