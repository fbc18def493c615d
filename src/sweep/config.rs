//! Sweep configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnnealError, Result};
use crate::sa::CoolingScheme;

/// Inclusive float axis `start, start + step, ..., <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ValueRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl ValueRange {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// A single-value axis.
    pub fn single(value: f64) -> Self {
        Self::new(value, value, 1.0)
    }

    /// Axis values, computed as `start + i·step` so rounding error does
    /// not accumulate across the axis.
    pub fn values(&self) -> Vec<f64> {
        let span = (self.end - self.start) / self.step;
        let count = (span + 1e-9).floor() as usize + 1;
        (0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }

    fn validate(&self, axis: &str) -> Result<()> {
        let finite = self.start.is_finite() && self.end.is_finite() && self.step.is_finite();
        if !finite || self.step <= 0.0 || self.end < self.start {
            return Err(AnnealError::InvalidSweep(format!(
                "{axis}: need finite start <= end and step > 0, got {self:?}"
            )));
        }
        Ok(())
    }
}

/// Inclusive integer axis `start, start + step, ..., <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountRange {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl CountRange {
    pub fn new(start: usize, end: usize, step: usize) -> Self {
        Self { start, end, step }
    }

    pub fn single(value: usize) -> Self {
        Self::new(value, value, 1)
    }

    pub fn values(&self) -> Vec<usize> {
        (self.start..=self.end).step_by(self.step.max(1)).collect()
    }

    fn validate(&self, axis: &str) -> Result<()> {
        if self.step == 0 || self.end < self.start || self.start == 0 {
            return Err(AnnealError::InvalidSweep(format!(
                "{axis}: need 1 <= start <= end and step > 0, got {self:?}"
            )));
        }
        Ok(())
    }
}

/// Grid of hyperparameters to run over.
///
/// Every field has a default, so a TOML file only needs to list what it
/// changes.
///
/// # Examples
///
/// ```
/// use u_anneal::sweep::SweepConfig;
///
/// let config = SweepConfig::from_toml_str(r#"
///     dimensions = 5
///     schemes = ["geometric", "harmonic"]
///     trials = 3
///
///     [initial_temperature]
///     start = 100.0
///     end = 300.0
///     step = 100.0
/// "#).unwrap();
///
/// assert_eq!(config.dimensions, 5);
/// assert_eq!(config.initial_temperature.values(), vec![100.0, 200.0, 300.0]);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SweepConfig {
    pub dimensions: usize,
    pub max_iterations: usize,
    /// Scheme names; unknown names run as geometric with a diagnostic.
    pub schemes: Vec<String>,
    pub initial_temperature: ValueRange,
    pub min_temperature: ValueRange,
    /// Only the first value is used for schemes that ignore the rate.
    pub cooling_rate: ValueRange,
    pub iterations_per_level: CountRange,
    /// Runs averaged per grid point.
    pub trials: usize,
    /// Base seed; each run derives its own from it.
    pub seed: u64,
    /// Evaluate grid points on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            dimensions: 3,
            max_iterations: 1000,
            schemes: CoolingScheme::ALL
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            initial_temperature: ValueRange::new(500.0, 1500.0, 100.0),
            min_temperature: ValueRange::new(0.1, 1.0, 0.1),
            cooling_rate: ValueRange::new(0.8, 0.99, 0.05),
            iterations_per_level: CountRange::new(50, 200, 50),
            trials: 1,
            seed: 42,
            parallel: false,
        }
    }
}

impl SweepConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.dimensions = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_initial_temperature(mut self, range: ValueRange) -> Self {
        self.initial_temperature = range;
        self
    }

    pub fn with_min_temperature(mut self, range: ValueRange) -> Self {
        self.min_temperature = range;
        self
    }

    pub fn with_cooling_rate(mut self, range: ValueRange) -> Self {
        self.cooling_rate = range;
        self
    }

    pub fn with_iterations_per_level(mut self, range: CountRange) -> Self {
        self.iterations_per_level = range;
        self
    }

    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the grid shape. Per-run checks happen in
    /// [`crate::sa::AnnealConfig::validate`].
    pub fn validate(&self) -> Result<()> {
        if self.dimensions == 0 {
            return Err(AnnealError::InvalidDimensions);
        }
        if self.schemes.is_empty() {
            return Err(AnnealError::InvalidSweep("no cooling schemes".into()));
        }
        if self.trials == 0 {
            return Err(AnnealError::InvalidSweep("trials must be at least 1".into()));
        }
        self.initial_temperature.validate("initial_temperature")?;
        self.min_temperature.validate("min_temperature")?;
        self.cooling_rate.validate("cooling_rate")?;
        self.iterations_per_level.validate("iterations_per_level")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes() {
        let config = SweepConfig::default();
        assert_eq!(config.initial_temperature.values().len(), 11);
        assert_eq!(config.min_temperature.values().len(), 10);
        let rates = config.cooling_rate.values();
        assert_eq!(rates.len(), 4);
        assert!((rates[3] - 0.95).abs() < 1e-12);
        assert_eq!(config.iterations_per_level.values(), vec![50, 100, 150, 200]);
        assert_eq!(config.schemes.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_temperature_axis_ends_at_one() {
        let values = SweepConfig::default().min_temperature.values();
        assert!((values[0] - 0.1).abs() < 1e-12);
        assert!((values[9] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_axes() {
        assert_eq!(ValueRange::single(2.5).values(), vec![2.5]);
        assert_eq!(CountRange::single(7).values(), vec![7]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SweepConfig::from_toml_str("trials = 4\nparallel = true").unwrap();
        assert_eq!(config.trials, 4);
        assert!(config.parallel);
        assert_eq!(config.dimensions, 3);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_toml_error() {
        let err = SweepConfig::from_toml_str("trials = \"many\"").unwrap_err();
        assert!(matches!(err, AnnealError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SweepConfig::load("/nonexistent/sweep.toml").unwrap_err();
        assert!(matches!(err, AnnealError::Io(_)));
    }

    #[test]
    fn test_validate_rejects_bad_axes() {
        let zero_step = SweepConfig::default().with_cooling_rate(ValueRange::new(0.8, 0.9, 0.0));
        assert!(zero_step.validate().is_err());

        let reversed = SweepConfig::default().with_initial_temperature(ValueRange::new(10.0, 5.0, 1.0));
        assert!(reversed.validate().is_err());

        let zero_level = SweepConfig::default().with_iterations_per_level(CountRange::new(0, 10, 5));
        assert!(zero_level.validate().is_err());

        let no_trials = SweepConfig::default().with_trials(0);
        assert!(no_trials.validate().is_err());

        let no_schemes = SweepConfig::default().with_schemes(Vec::<String>::new());
        assert!(no_schemes.validate().is_err());
    }
}
