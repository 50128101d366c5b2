use thiserror::Error;

/// Configuration for Gauss-Jacobi iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub tolerance: f64,
    pub max_iters: usize,
}

/// Errors that can occur when validating a Gauss-Jacobi config.
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
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive or
    /// `max_iters` is zero.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(1e-6, 0), Err(ConfigError::MaxIters));
    }

    #[test]
    fn tolerance_is_checked_first() {
        let config = Config {
            tolerance: 0.0,
            max_iters: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::Tolerance));
    }
}
