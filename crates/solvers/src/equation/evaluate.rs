use numeth_core::Function;

use super::Error;

/// Evaluates `f` at `x`, boxing any function error with the failing `x`.
pub(super) fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    f.call(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
    })
}
