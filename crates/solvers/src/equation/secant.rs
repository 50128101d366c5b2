//! Secant method: Newton-Raphson with a finite-difference slope.
//!
//! Starting from two guesses `x0` and `x1`, each iteration computes
//!
//! ```text
//! x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! and stops when `|x2 - x1| < tolerance`. No derivative is needed, and only
//! one new function evaluation is made per iteration.

use numeth_core::{Function, Observer};

use super::{Action, Config, Error, Solution, StepEvent, evaluate::evaluate};

/// Finds a root of `f` starting from the two guesses in `guesses`.
///
/// The observer receives a [`StepEvent`] per iteration (with `x` set to the
/// newer of the two points) and may return [`Action::StopEarly`] to accept the
/// proposed iterate.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `f` takes the same value at both
/// points. Also returns an error if the config is invalid, `f` fails, or the
/// iteration budget runs out.
pub fn solve<F, Obs>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<StepEvent, Action>,
{
    config.validate()?;

    let [mut x0, mut x1] = guesses;
    let mut f0 = evaluate(f, x0)?;

    for iter in 0..=config.max_iters {
        let f1 = evaluate(f, x1)?;

        #[allow(clippy::float_cmp)]
        if f1 == f0 {
            return Err(Error::DivisionByZero { iter, x: x1 });
        }

        let next = x1 - f1 * (x1 - x0) / (f1 - f0);
        log::trace!("secant iter {iter}: f({x1}) = {f1}, next = {next}");

        let event = StepEvent {
            iter,
            x: x1,
            next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped(next, iter));
        }

        if event.step() < config.tolerance {
            log::debug!("secant converged to {next} after {iter} iterations");
            return Ok(Solution::converged(next, iter));
        }

        (x0, f0) = (x1, f1);
        x1 = next;
    }

    Err(Error::NotConverged {
        max_iters: config.max_iters,
        x: x1,
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `f` takes the same value at both
/// points. Also returns an error if the config is invalid, `f` fails, or the
/// iteration budget runs out.
pub fn solve_unobserved<F: Function>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, guesses, config, ())
}
