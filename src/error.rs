//! Error types for annealing runs and sweep configuration.

use thiserror::Error;

/// Errors surfaced to the caller before any annealing work starts.
///
/// Numeric edge cases inside the loop (temperature reaching zero, the
/// logarithmic schedule's first step) are handled internally and never
/// produce an error.
#[derive(Debug, Error)]
pub enum AnnealError {
    /// The solution vector must have at least one coordinate.
    #[error("dimensions must be at least 1")]
    InvalidDimensions,

    /// Temperatures must satisfy `initial > min > 0` and be finite.
    #[error("invalid temperatures: initial {initial}, min {min} (need initial > min > 0)")]
    InvalidTemperature { initial: f64, min: f64 },

    /// At least one neighbor must be evaluated per temperature level.
    #[error("iterations_per_level must be at least 1")]
    InvalidIterationsPerLevel,

    /// The cooling rate is not a finite number.
    #[error("cooling rate must be finite, got {0}")]
    InvalidCoolingRate(f64),

    /// Strict parsing of a cooling scheme name failed.
    #[error("unknown cooling scheme: {0}")]
    UnknownScheme(String),

    /// A sweep grid or trial count is unusable.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealError>;
