//! Regula falsi (false position): bisection with a chord instead of a midpoint.
//!
//! Each iteration evaluates the point where the straight line through
//! `(a, f(a))` and `(b, f(b))` crosses zero, then narrows the bracket with the
//! same sign rule as [`bisection`](super::bisection).
//!
//! Unlike bisection, the stop criterion is `|f(x)| < tolerance`. The bracket
//! width is never checked, and for convex or concave functions one endpoint
//! typically stays fixed for the whole run.

use numeth_core::{Function, Observer};

use super::{
    Action, BracketEvent, Config, Error, Solution, bracket::Bracket, evaluate::evaluate,
};

/// Finds a root of `f` in `bracket` using the false position method.
///
/// The observer receives a [`BracketEvent`] for every chord evaluation and may
/// return [`Action::StopEarly`] to end the search at that point.
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
        let x = bracket.false_position();
        let fx = evaluate(f, x)?;
        log::trace!("regula falsi iter {iter}: f({x}) = {fx}");

        let event = BracketEvent {
            iter,
            bracket: bracket.as_array(),
            x,
            fx,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped(x, iter));
        }

        if fx.abs() < config.tolerance {
            log::debug!("regula falsi converged to {x} after {iter} iterations");
            return Ok(Solution::converged(x, iter));
        }

        bracket.shrink(x, fx);
    }

    Err(Error::NotConverged {
        max_iters: config.max_iters,
        x: bracket.false_position(),
    })
}

/// Runs regula falsi without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numeth_core::Closure;

    use crate::equation::{BracketError, Status};

    #[test]
    fn finds_square_root_of_four() {
        let f = Closure::new(|x: f64| x * x - 4.0);
        let config = Config::new(1e-10, 100).unwrap();

        let solution = solve_unobserved(&f, [0.0, 3.0], &config).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn stops_on_residual_not_width() {
        // The chord hits the root of a line exactly, while the bracket is still wide.
        let f = Closure::new(|x: f64| x - 1.0);

        let solution =
            solve_unobserved(&f, [0.0, 3.0], &Config::default()).expect("should converge");

        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn keeps_far_endpoint_for_convex_function() {
        let f = Closure::new(|x: f64| x * x - 4.0);

        let mut rights = Vec::new();
        let observer = |event: &BracketEvent| {
            rights.push(event.bracket[1]);
            None::<Action>
        };
        solve(&f, [0.0, 3.0], &Config::default(), observer).expect("should converge");

        assert!(rights.len() > 1);
        assert!(rights.iter().all(|&right| right == 3.0));
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let f = Closure::new(|x: f64| x * x + 1.0);
        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
        ));
    }

    #[test]
    fn reports_non_convergence() {
        let f = Closure::new(|x: f64| x.powi(9) - 1e-3);
        let config = Config::new(1e-14, 5).unwrap();

        let result = solve_unobserved(&f, [0.0, 2.0], &config);

        assert!(matches!(result, Err(Error::NotConverged { max_iters: 5, .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = Closure::new(|x: f64| x * x - 4.0);
        let observer = |event: &BracketEvent| (event.iter == 1).then_some(Action::StopEarly);

        let solution = solve(&f, [0.0, 3.0], &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
    }
}
