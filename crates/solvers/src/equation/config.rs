use thiserror::Error;

/// Configuration shared by the root finders.
///
/// `tolerance` is compared against each method's own stop quantity (bracket
/// half-width, step size, or residual magnitude). The iteration loop runs
/// while `iter <= max_iters`, so a method makes at most `max_iters + 1`
/// attempts before giving up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub tolerance: f64,
    pub max_iters: usize,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least one")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            max_iters,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the tolerance and iteration bound are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}
