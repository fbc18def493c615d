//! Cartesian expansion of a sweep into individual runs.

use tracing::warn;

use crate::error::Result;
use crate::sa::{AnnealConfig, CoolingScheme, Diagnostic};

use super::config::SweepConfig;

/// One hyperparameter combination of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    /// Name as written in the sweep config.
    pub scheme_name: String,
    /// The scheme actually run.
    pub scheme: CoolingScheme,
    pub initial_temperature: f64,
    pub min_temperature: f64,
    pub cooling_rate: f64,
    pub iterations_per_level: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl GridPoint {
    /// Builds the run configuration for this point.
    pub fn anneal_config(&self, dimensions: usize, max_iterations: usize, seed: u64) -> AnnealConfig {
        AnnealConfig {
            dimensions,
            max_iterations,
            initial_temperature: self.initial_temperature,
            min_temperature: self.min_temperature,
            cooling_rate: self.cooling_rate,
            iterations_per_level: self.iterations_per_level,
            scheme: self.scheme,
            seed,
            diagnostics: self.diagnostics.clone(),
        }
    }
}

/// Expands `config` into grid points, in scheme, initial temperature, min
/// temperature, cooling rate, iterations-per-level order.
///
/// Schemes that ignore the cooling rate get only the first rate value.
/// Combinations with `min_temperature >= initial_temperature` are skipped.
pub fn expand(config: &SweepConfig) -> Result<Vec<GridPoint>> {
    config.validate()?;

    let initial_temps = config.initial_temperature.values();
    let min_temps = config.min_temperature.values();
    let rates = config.cooling_rate.values();
    let levels = config.iterations_per_level.values();

    let mut points = Vec::new();
    let mut skipped = 0usize;

    for name in &config.schemes {
        let (scheme, diagnostic) = CoolingScheme::resolve(name);
        let diagnostics: Vec<Diagnostic> = diagnostic.into_iter().collect();
        let scheme_rates = if scheme.uses_cooling_rate() {
            &rates[..]
        } else {
            &rates[..1]
        };

        for &initial_temperature in &initial_temps {
            for &min_temperature in &min_temps {
                if min_temperature >= initial_temperature {
                    skipped += 1;
                    continue;
                }
                for &cooling_rate in scheme_rates {
                    for &iterations_per_level in &levels {
                        points.push(GridPoint {
                            scheme_name: name.clone(),
                            scheme,
                            initial_temperature,
                            min_temperature,
                            cooling_rate,
                            iterations_per_level,
                            diagnostics: diagnostics.clone(),
                        });
                    }
                }
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped temperature pairs with min >= initial");
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::config::{CountRange, ValueRange};

    #[test]
    fn test_default_grid_size() {
        let points = expand(&SweepConfig::default()).unwrap();
        // 11 initial × 10 min × 4 levels, times 4 rates for the two
        // rate-driven schemes and 1 for the other three.
        let per_rate = 11 * 10 * 4;
        assert_eq!(points.len(), per_rate * (4 + 4 + 1 + 1 + 1));
    }

    #[test]
    fn test_rate_free_schemes_use_first_rate() {
        let points = expand(&SweepConfig::default()).unwrap();
        for p in points.iter().filter(|p| !p.scheme.uses_cooling_rate()) {
            assert!((p.cooling_rate - 0.8).abs() < 1e-12);
        }
    }

    #[test]
    fn test_order_matches_nesting() {
        let config = SweepConfig::default()
            .with_schemes(["linear"])
            .with_initial_temperature(ValueRange::new(100.0, 200.0, 100.0))
            .with_min_temperature(ValueRange::single(1.0))
            .with_cooling_rate(ValueRange::new(1.0, 2.0, 1.0))
            .with_iterations_per_level(CountRange::new(10, 20, 10));
        let points = expand(&config).unwrap();
        let keys: Vec<(f64, f64, usize)> = points
            .iter()
            .map(|p| (p.initial_temperature, p.cooling_rate, p.iterations_per_level))
            .collect();
        assert_eq!(
            keys,
            vec![
                (100.0, 1.0, 10),
                (100.0, 1.0, 20),
                (100.0, 2.0, 10),
                (100.0, 2.0, 20),
                (200.0, 1.0, 10),
                (200.0, 1.0, 20),
                (200.0, 2.0, 10),
                (200.0, 2.0, 20),
            ]
        );
    }

    #[test]
    fn test_unknown_scheme_carries_diagnostic() {
        let config = SweepConfig::default()
            .with_schemes(["cubic"])
            .with_initial_temperature(ValueRange::single(100.0))
            .with_min_temperature(ValueRange::single(1.0));
        let points = expand(&config).unwrap();
        assert_eq!(points.len(), 4 * 4);
        for p in &points {
            assert_eq!(p.scheme, CoolingScheme::Geometric);
            assert_eq!(p.scheme_name, "cubic");
            assert_eq!(p.diagnostics.len(), 1);
        }
    }

    #[test]
    fn test_skips_inverted_temperatures() {
        let config = SweepConfig::default()
            .with_schemes(["geometric"])
            .with_initial_temperature(ValueRange::new(1.0, 3.0, 1.0))
            .with_min_temperature(ValueRange::single(2.0))
            .with_cooling_rate(ValueRange::single(0.9))
            .with_iterations_per_level(CountRange::single(10));
        let points = expand(&config).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].initial_temperature, 3.0);
    }

    #[test]
    fn test_anneal_config_roundtrip() {
        let points = expand(&SweepConfig::default()).unwrap();
        let config = points[0].anneal_config(3, 1000, 9);
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, 9);
        assert_eq!(config.scheme, points[0].scheme);
    }
}
