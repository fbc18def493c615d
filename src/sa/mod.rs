//! Simulated Annealing (SA) on the Rastrigin objective.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability that
//! shrinks as the temperature drops, which lets the walk leave the local
//! minima Rastrigin is full of.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod schedule;
mod types;

pub use config::AnnealConfig;
pub use runner::{anneal, anneal_with_scheme, metropolis_accept, AnnealResult, AnnealRunner};
pub use schedule::{CoolingSchedule, CoolingScheme, ScheduleParams, TEMPERATURE_FLOOR};
pub use types::{AnnealingState, Diagnostic};
