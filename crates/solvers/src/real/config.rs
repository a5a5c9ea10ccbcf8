use thiserror::Error;

/// Configuration for the real-valued search engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a real-valued search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            max_iters: 200,
        }
    }
}

impl Config {
    /// Creates a new config with a validated precision.
    ///
    /// The search stops once the bracket is no wider than `epsilon`, or after
    /// `max_iters` bisections, whichever comes first.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self { epsilon, max_iters })
    }

    /// Returns a copy of this config with a different precision.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self, ConfigError> {
        Self::new(epsilon, self.max_iters)
    }

    /// Returns the bracket width at which the search is considered converged.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of bisections.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
