//! Tunable parameters for building a [`PathUncertainty`](crate::scene::PathUncertainty).

use crate::error::ConfigError;
use crate::uncertainty::{PropagationMode, DEFAULT_CHI_SQUARE, DEFAULT_NOISE_FACTOR};

/// Parameters for ellipse scaling and covariance propagation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyConfig {
    /// Chi-square scale applied to every ellipse
    pub chi_square: f64,
    /// Variance added per unit distance travelled
    pub noise_factor: f64,
    /// Which covariance each estimate grows from
    pub propagation: PropagationMode,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            chi_square: DEFAULT_CHI_SQUARE,
            noise_factor: DEFAULT_NOISE_FACTOR,
            propagation: PropagationMode::Accumulate,
        }
    }
}

impl UncertaintyConfig {
    pub fn with_chi_square(mut self, chi_square: f64) -> Self {
        self.chi_square = chi_square;
        self
    }

    pub fn with_noise_factor(mut self, noise_factor: f64) -> Self {
        self.noise_factor = noise_factor;
        self
    }

    pub fn with_propagation(mut self, propagation: PropagationMode) -> Self {
        self.propagation = propagation;
        self
    }

    /// Check that the scale and noise factor are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.chi_square.is_finite() && self.chi_square > 0.0) {
            return Err(ConfigError::InvalidChiSquare(self.chi_square));
        }
        if !(self.noise_factor.is_finite() && self.noise_factor >= 0.0) {
            return Err(ConfigError::InvalidNoiseFactor(self.noise_factor));
        }
        Ok(())
    }
}
