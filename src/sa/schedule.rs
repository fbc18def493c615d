//! Cooling schemes and the temperature transition function.
//!
//! A [`CoolingScheme`] is the name a caller picks. Once the run parameters
//! are known it is resolved into a [`CoolingSchedule`], which carries the
//! fixed payload each rule needs, so the per-level update is a plain match
//! with no string handling.

use std::fmt;
use std::str::FromStr;

use crate::error::AnnealError;

use super::types::Diagnostic;

/// Smallest temperature used as a divisor.
///
/// At or below this value the Metropolis test rejects every worsening move.
pub const TEMPERATURE_FLOOR: f64 = 1e-12;

/// The five supported cooling rules.
///
/// | Scheme | Update |
/// |---|---|
/// | geometric | `T ← T · r` |
/// | linear | `T ← T − r` |
/// | exponential | `T ← T0 · (Tmin/T0)^(t/M)` |
/// | logarithmic | `T ← T0 / ln(t + 1)` |
/// | harmonic | `T ← A/(t+1) + T0 − A`, `A = (T0 − Tmin)(M+1)/M` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoolingScheme {
    #[default]
    Geometric,
    Linear,
    Exponential,
    Logarithmic,
    Harmonic,
}

impl CoolingScheme {
    /// All schemes, in report order.
    pub const ALL: [CoolingScheme; 5] = [
        CoolingScheme::Geometric,
        CoolingScheme::Linear,
        CoolingScheme::Exponential,
        CoolingScheme::Logarithmic,
        CoolingScheme::Harmonic,
    ];

    /// Lower-case name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            CoolingScheme::Geometric => "geometric",
            CoolingScheme::Linear => "linear",
            CoolingScheme::Exponential => "exponential",
            CoolingScheme::Logarithmic => "logarithmic",
            CoolingScheme::Harmonic => "harmonic",
        }
    }

    /// Whether the rule reads the cooling rate at all.
    ///
    /// Exponential, logarithmic and harmonic cooling depend only on the
    /// iteration count, so any rate passed with them is a placeholder.
    pub fn uses_cooling_rate(self) -> bool {
        matches!(self, CoolingScheme::Geometric | CoolingScheme::Linear)
    }

    /// Lenient lookup: unknown names fall back to geometric cooling.
    ///
    /// The fallback is reported through the returned [`Diagnostic`] and a
    /// `tracing` warning rather than failing the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::sa::CoolingScheme;
    ///
    /// let (scheme, diag) = CoolingScheme::resolve("harmonic");
    /// assert_eq!(scheme, CoolingScheme::Harmonic);
    /// assert!(diag.is_none());
    ///
    /// let (scheme, diag) = CoolingScheme::resolve("unknown");
    /// assert_eq!(scheme, CoolingScheme::Geometric);
    /// assert!(diag.is_some());
    /// ```
    pub fn resolve(name: &str) -> (CoolingScheme, Option<Diagnostic>) {
        match name.parse() {
            Ok(scheme) => (scheme, None),
            Err(_) => {
                tracing::warn!(
                    scheme = name,
                    "unknown cooling scheme, using geometric by default"
                );
                (
                    CoolingScheme::Geometric,
                    Some(Diagnostic::UnknownCoolingScheme {
                        name: name.to_string(),
                    }),
                )
            }
        }
    }
}

impl fmt::Display for CoolingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoolingScheme {
    type Err = AnnealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoolingScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnnealError::UnknownScheme(s.to_string()))
    }
}

/// Fixed run parameters a schedule may read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleParams {
    /// `T0`.
    pub initial_temperature: f64,
    /// `Tmin`.
    pub min_temperature: f64,
    /// `r`; ignored by rate-free schemes.
    pub cooling_rate: f64,
    /// `M`, the total iteration budget.
    pub max_iterations: usize,
}

/// A cooling scheme bound to the parameters of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// `T ← T · factor`.
    Geometric { factor: f64 },

    /// `T ← T − step`.
    Linear { step: f64 },

    /// `T ← T0 · ratio^(t/M)` with `ratio = Tmin/T0`.
    Exponential {
        initial: f64,
        ratio: f64,
        max_iterations: usize,
        min: f64,
    },

    /// `T ← T0 / ln(t + 1)`.
    Logarithmic { initial: f64 },

    /// `T ← A/(t + 1) + T0 − A`.
    Harmonic { initial: f64, amplitude: f64 },
}

impl CoolingSchedule {
    /// Binds `scheme` to `params`.
    pub fn new(scheme: CoolingScheme, params: &ScheduleParams) -> Self {
        let t0 = params.initial_temperature;
        let t_min = params.min_temperature;
        match scheme {
            CoolingScheme::Geometric => CoolingSchedule::Geometric {
                factor: params.cooling_rate,
            },
            CoolingScheme::Linear => CoolingSchedule::Linear {
                step: params.cooling_rate,
            },
            CoolingScheme::Exponential => CoolingSchedule::Exponential {
                initial: t0,
                ratio: t_min / t0,
                max_iterations: params.max_iterations,
                min: t_min,
            },
            CoolingScheme::Logarithmic => CoolingSchedule::Logarithmic { initial: t0 },
            CoolingScheme::Harmonic => {
                let span = t0 - t_min;
                // With M = 0 the (M+1)/M factor is undefined; its limit as the
                // budget grows is 1.
                let amplitude = if params.max_iterations == 0 {
                    span
                } else {
                    let m = params.max_iterations as f64;
                    span * (m + 1.0) / m
                };
                CoolingSchedule::Harmonic {
                    initial: t0,
                    amplitude,
                }
            }
        }
    }

    /// Next temperature given the current one and the iteration count `t`
    /// reached at the end of the level.
    pub fn next_temperature(&self, temperature: f64, iteration: usize) -> f64 {
        let t = iteration as f64;
        match *self {
            CoolingSchedule::Geometric { factor } => temperature * factor,

            CoolingSchedule::Linear { step } => temperature - step,

            CoolingSchedule::Exponential {
                initial,
                ratio,
                max_iterations,
                min,
            } => {
                if max_iterations == 0 {
                    min
                } else {
                    initial * ratio.powf(t / max_iterations as f64)
                }
            }

            CoolingSchedule::Logarithmic { initial } => {
                if iteration == 0 {
                    initial
                } else {
                    initial / (t + 1.0).ln()
                }
            }

            CoolingSchedule::Harmonic { initial, amplitude } => {
                amplitude / (t + 1.0) + initial - amplitude
            }
        }
    }
}
