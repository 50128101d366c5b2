use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Solvers treat implementations as opaque: they only call [`Function::call`]
/// and propagate any error it returns. Implementations are expected to be
/// deterministic, so that the same `x` always yields the same result.
///
/// Plain closures can be used through [`Closure`] (infallible) and
/// [`TryClosure`] (fallible).
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `x` is outside the function's domain or the
    /// evaluation otherwise fails.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: Function + ?Sized> Function for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// Wraps an infallible closure `Fn(f64) -> f64` as a [`Function`].
#[derive(Debug, Clone, Copy)]
pub struct Closure<F> {
    function: F,
}

impl<F> Closure<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a function from a closure.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Function for Closure<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.function)(x))
    }
}

impl<F> From<F> for Closure<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Closure::new(function)
    }
}

/// Wraps a fallible closure `Fn(f64) -> Result<f64, E>` as a [`Function`].
///
/// Errors returned by the closure reach the caller of the solver unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TryClosure<F> {
    function: F,
}

impl<F> TryClosure<F> {
    /// Creates a fallible function from a closure.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, E> Function for TryClosure<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.function)(x)
    }
}
