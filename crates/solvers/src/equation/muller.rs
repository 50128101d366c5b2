//! Muller's method: fit a parabola through three points and jump to its root.
//!
//! Given `(x0, f0)`, `(x1, f1)`, `(x2, f2)`, the parabola through them is
//! written around `x2` as `a·h² + b·h + c` with
//!
//! ```text
//! h1 = x1 - x0            h2 = x2 - x1
//! d1 = (f1 - f0) / h1     d2 = (f2 - f1) / h2
//! a  = (d2 - d1) / (h2 + h1)
//! b  = a·h2 + d2
//! c  = f2
//! ```
//!
//! The next iterate is `x3 = x2 - 2c / (b ± sqrt(b² - 4ac))`. The sign is
//! chosen to give the denominator the larger magnitude, which avoids
//! cancellation. Only real roots are followed: a negative discriminant is an
//! error.

use numeth_core::{Function, Observer};

use super::{Action, Config, Error, Solution, StepEvent, evaluate::evaluate};

/// Finds a root of `f` starting from the three guesses in `guesses`.
///
/// The observer receives a [`StepEvent`] per iteration (with `x` set to the
/// newest of the three points) and may return [`Action::StopEarly`] to accept
/// the proposed iterate.
///
/// # Errors
///
/// Returns [`Error::ComplexRoot`] if the parabola has no real root.
/// Returns [`Error::DivisionByZero`] if two points coincide or the chosen
/// denominator is zero.
/// Also returns an error if the config is invalid, `f` fails, or the iteration
/// budget runs out.
pub fn solve<F, Obs>(
    f: &F,
    guesses: [f64; 3],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<StepEvent, Action>,
{
    config.validate()?;

    let [mut x0, mut x1, mut x2] = guesses;
    let mut f0 = evaluate(f, x0)?;
    let mut f1 = evaluate(f, x1)?;

    for iter in 0..=config.max_iters {
        let f2 = evaluate(f, x2)?;

        let h1 = x1 - x0;
        let h2 = x2 - x1;
        #[allow(clippy::float_cmp)]
        if h1 == 0.0 || h2 == 0.0 || h1 + h2 == 0.0 {
            return Err(Error::DivisionByZero { iter, x: x2 });
        }

        let d1 = (f1 - f0) / h1;
        let d2 = (f2 - f1) / h2;
        let a = (d2 - d1) / (h2 + h1);
        let b = a * h2 + d2;
        let c = f2;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Err(Error::ComplexRoot { iter, discriminant });
        }

        let root = discriminant.sqrt();
        let denominator = if (b + root).abs() > (b - root).abs() {
            b + root
        } else {
            b - root
        };
        #[allow(clippy::float_cmp)]
        if denominator == 0.0 {
            return Err(Error::DivisionByZero { iter, x: x2 });
        }

        let next = x2 - 2.0 * c / denominator;
        log::trace!("muller iter {iter}: f({x2}) = {f2}, next = {next}");

        let event = StepEvent { iter, x: x2, next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped(next, iter));
        }

        if event.step() < config.tolerance {
            log::debug!("muller converged to {next} after {iter} iterations");
            return Ok(Solution::converged(next, iter));
        }

        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
        x2 = next;
    }

    Err(Error::NotConverged {
        max_iters: config.max_iters,
        x: x2,
    })
}

/// Runs Muller's method without observation.
///
/// # Errors
///
/// Returns [`Error::ComplexRoot`] if the parabola has no real root.
/// Returns [`Error::DivisionByZero`] if two points coincide or the chosen
/// denominator is zero.
/// Also returns an error if the config is invalid, `f` fails, or the iteration
/// budget runs out.
pub fn solve_unobserved<F: Function>(
    f: &F,
    guesses: [f64; 3],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, guesses, config, ())
}
