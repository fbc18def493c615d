//! Annealing run configuration.

use crate::error::{AnnealError, Result};

use super::schedule::{CoolingScheme, ScheduleParams};
use super::types::Diagnostic;

/// Configuration for one annealing run on the Rastrigin objective.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{AnnealConfig, CoolingScheme};
///
/// let config = AnnealConfig::default()
///     .with_dimensions(5)
///     .with_initial_temperature(800.0)
///     .with_min_temperature(0.5)
///     .with_scheme(CoolingScheme::Harmonic)
///     .with_iterations_per_level(150)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealConfig {
    /// Number of coordinates per solution.
    pub dimensions: usize,

    /// Total neighbor-evaluation budget. 0 returns the initial solution.
    pub max_iterations: usize,

    /// Starting temperature.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Factor (geometric) or decrement (linear). Ignored by the other schemes.
    pub cooling_rate: f64,

    /// Neighbor evaluations per temperature level.
    pub iterations_per_level: usize,

    /// Cooling rule.
    pub scheme: CoolingScheme,

    /// Seed for [`crate::random::create_rng`].
    pub seed: u64,

    /// Conditions noticed while building this config, such as an unknown
    /// scheme name. Copied into the run result.
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            dimensions: 3,
            max_iterations: 1000,
            initial_temperature: 1000.0,
            min_temperature: 0.1,
            cooling_rate: 0.9,
            iterations_per_level: 100,
            scheme: CoolingScheme::Geometric,
            seed: 42,
            diagnostics: Vec::new(),
        }
    }
}

impl AnnealConfig {
    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.dimensions = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, r: f64) -> Self {
        self.cooling_rate = r;
        self
    }

    pub fn with_iterations_per_level(mut self, n: usize) -> Self {
        self.iterations_per_level = n;
        self
    }

    pub fn with_scheme(mut self, scheme: CoolingScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the scheme by name, falling back to geometric for unknown names.
    ///
    /// The fallback is recorded in [`AnnealConfig::diagnostics`].
    pub fn with_scheme_name(mut self, name: &str) -> Self {
        let (scheme, diagnostic) = CoolingScheme::resolve(name);
        self.scheme = scheme;
        self.diagnostics.extend(diagnostic);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parameters handed to the cooling schedule.
    pub fn schedule_params(&self) -> ScheduleParams {
        ScheduleParams {
            initial_temperature: self.initial_temperature,
            min_temperature: self.min_temperature,
            cooling_rate: self.cooling_rate,
            max_iterations: self.max_iterations,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions == 0 {
            return Err(AnnealError::InvalidDimensions);
        }
        let (initial, min) = (self.initial_temperature, self.min_temperature);
        if !initial.is_finite() || !min.is_finite() || min <= 0.0 || min >= initial {
            return Err(AnnealError::InvalidTemperature { initial, min });
        }
        if self.iterations_per_level == 0 {
            return Err(AnnealError::InvalidIterationsPerLevel);
        }
        if !self.cooling_rate.is_finite() {
            return Err(AnnealError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}
