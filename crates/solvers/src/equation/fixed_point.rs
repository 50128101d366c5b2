//! Fixed-point iteration: repeat `x = g(x)` until the step is small.
//!
//! The iteration converges when `g` is a contraction near the fixed point
//! (`|g'(x)| < 1`). This is not checked, so a divergent map simply exhausts
//! the iteration budget.

use numeth_core::{Function, Observer};

use super::{Action, Config, Error, Solution, StepEvent, evaluate::evaluate};

/// Finds a fixed point `x = g(x)` starting from `x0`.
///
/// Stops when `|g(x) - x| < tolerance` and returns `g(x)`. The observer
/// receives a [`StepEvent`] per iteration and may return
/// [`Action::StopEarly`] to accept the proposed iterate.
///
/// # Errors
///
/// Returns an error if the config is invalid, `g` fails, or the iteration
/// budget runs out.
pub fn solve<G, Obs>(g: &G, x0: f64, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    G: Function,
    Obs: Observer<StepEvent, Action>,
{
    config.validate()?;

    let mut x = x0;

    for iter in 0..=config.max_iters {
        let next = evaluate(g, x)?;
        log::trace!("fixed point iter {iter}: g({x}) = {next}");

        let event = StepEvent { iter, x, next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped(next, iter));
        }

        if event.step() < config.tolerance {
            log::debug!("fixed point converged to {next} after {iter} iterations");
            return Ok(Solution::converged(next, iter));
        }

        x = next;
    }

    Err(Error::NotConverged {
        max_iters: config.max_iters,
        x,
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, `g` fails, or the iteration
/// budget runs out.
pub fn solve_unobserved<G: Function>(g: &G, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(g, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numeth_core::Closure;

    use crate::equation::Status;

    /// Solution of `x = cos(x)` (the Dottie number).
    const DOTTIE: f64 = 0.739_085_133_215_160_6;

    #[test]
    fn finds_fixed_point_of_cosine() {
        let g = Closure::new(f64::cos);

        let solution = solve_unobserved(&g, 1.0, &Config::default()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, DOTTIE, epsilon = 1e-8);
    }

    #[test]
    fn starting_on_fixed_point_converges_immediately() {
        let g = Closure::new(|x: f64| 0.5 * x + 1.0);

        let solution = solve_unobserved(&g, 2.0, &Config::default()).expect("should converge");

        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn divergent_map_exhausts_budget() {
        let g = Closure::new(|x: f64| 2.0 * x + 1.0);
        let config = Config::new(1e-6, 20).unwrap();

        let result = solve_unobserved(&g, 1.0, &config);

        assert!(matches!(result, Err(Error::NotConverged { max_iters: 20, .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let g = Closure::new(f64::cos);
        let config = Config {
            tolerance: -1.0,
            ..Config::default()
        };

        assert!(matches!(
            solve_unobserved(&g, 1.0, &config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn observer_sees_each_step() {
        let g = Closure::new(|x: f64| 0.5 * x);

        let mut steps = Vec::new();
        let observer = |event: &StepEvent| {
            steps.push((event.x, event.next));
            (event.iter == 2).then_some(Action::StopEarly)
        };

        let solution = solve(&g, 8.0, &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_relative_eq!(solution.x, 1.0);
        assert_eq!(steps, vec![(8.0, 4.0), (4.0, 2.0), (2.0, 1.0)]);
    }
}
