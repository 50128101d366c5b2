//! Bisection: halve a sign-changing bracket until it is small enough.
//!
//! Each iteration evaluates the midpoint `x = (a + b) / 2` and stops when
//! `f(x) == 0` or the half-width `(b - a) / 2` drops below the tolerance.
//! Otherwise the endpoint whose value shares the sign of `f(x)` moves to `x`.
//!
//! Convergence is guaranteed for continuous functions but only linear: each
//! iteration gains one bit of accuracy.

use numeth_core::{Function, Observer};

use super::{
    Action, BracketEvent, Config, Error, Solution, bracket::Bracket, evaluate::evaluate,
};

/// Finds a root of `f` in `bracket` using bisection.
///
/// The observer receives a [`BracketEvent`] for every midpoint evaluation and
/// may return [`Action::StopEarly`] to end the search at that midpoint.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket is invalid or does
/// not change sign, `f` fails, or the iteration budget runs out.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<BracketEvent, Action>,
{
    config.validate()?;

    let mut bracket = Bracket::evaluate(f, bracket)?;

    for iter in 0..=config.max_iters {
        let x = bracket.midpoint();
        let fx = evaluate(f, x)?;
        log::trace!("bisection iter {iter}: f({x}) = {fx}");

        let event = BracketEvent {
            iter,
            bracket: bracket.as_array(),
            x,
            fx,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped(x, iter));
        }

        #[allow(clippy::float_cmp)]
        if fx == 0.0 || bracket.half_width() < config.tolerance {
            log::debug!("bisection converged to {x} after {iter} iterations");
            return Ok(Solution::converged(x, iter));
        }

        bracket.shrink(x, fx);
    }

    Err(Error::NotConverged {
        max_iters: config.max_iters,
        x: bracket.midpoint(),
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket is invalid or does
/// not change sign, `f` fails, or the iteration budget runs out.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
