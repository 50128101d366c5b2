//! Newton-Raphson: follow the tangent line to its zero.
//!
//! Each iteration computes `x_next = x - f(x) / f'(x)` and stops when
//! `|x_next - x| < tolerance`. Convergence is quadratic near a simple root,
//! but the method can wander or cycle from a poor starting point.

use numeth_core::{Function, Observer};

use super::{Action, Config, Error, Solution, StepEvent, evaluate::evaluate};

/// Finds a root of `f` starting from `x0`, using `df` as its derivative.
///
/// The observer receives a [`StepEvent`] per iteration and may return
/// [`Action::StopEarly`] to accept the proposed iterate.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `df` is exactly zero at an iterate.
/// Also returns an error if the config is invalid, `f` or `df` fails, or the
/// iteration budget runs out.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<StepEvent, Action>,
{
    config.validate()?;

    let mut x = x0;

    for iter in 0..=config.max_iters {
        let fx = evaluate(f, x)?;
        let dfx = evaluate(df, x)?;

        #[allow(clippy::float_cmp)]
        if dfx == 0.0 {
            return Err(Error::ZeroDerivative { iter, x });
        }

        let next = x - fx / dfx;
        log::trace!("newton iter {iter}: f({x}) = {fx}, f'({x}) = {dfx}, next = {next}");

        let event = StepEvent { iter, x, next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped(next, iter));
        }

        if event.step() < config.tolerance {
            log::debug!("newton converged to {next} after {iter} iterations");
            return Ok(Solution::converged(next, iter));
        }

        x = next;
    }

    Err(Error::NotConverged {
        max_iters: config.max_iters,
        x,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `df` is exactly zero at an iterate.
/// Also returns an error if the config is invalid, `f` or `df` fails, or the
/// iteration budget runs out.
pub fn solve_unobserved<F: Function, D: Function>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, df, x0, config, ())
}
