//! Simulated annealing on the Rastrigin benchmark.
//!
//! - **Objective**: the Rastrigin function, a multimodal benchmark with a
//!   single global minimum of 0 at the origin.
//! - **Simulated Annealing (SA)**: perturb/evaluate/accept loop driven by
//!   one of five cooling schemes (geometric, linear, exponential,
//!   logarithmic, harmonic).
//! - **Sweeps**: grid and averaging drivers plus markdown reports, built
//!   purely on top of [`anneal`].
//!
//! # Reproducibility
//!
//! Randomness always comes from a generator supplied by the caller or
//! seeded explicitly from [`sa::AnnealConfig::seed`]. The same seed and
//! configuration give bit-identical results.
//!
//! # Example
//!
//! ```
//! use u_anneal::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let result = u_anneal::anneal(3, 1000, 1000.0, 0.1, 0.9, 100, "geometric", &mut rng)?;
//! assert!(result.best_energy >= 0.0);
//! # Ok::<(), u_anneal::AnnealError>(())
//! ```

pub mod error;
pub mod objective;
pub mod random;
pub mod sa;
pub mod sweep;

pub use error::{AnnealError, Result};
pub use sa::{anneal, AnnealResult};
