//! Hyperparameter sweeps over [`crate::sa::anneal`].
//!
//! A sweep runs every combination of initial temperature, floor
//! temperature, cooling rate and level length for each cooling scheme,
//! averages each combination over a number of independently seeded trials,
//! and renders the outcome as markdown tables.
//!
//! Nothing here touches the annealing loop itself; every run goes through
//! [`crate::sa::AnnealRunner`] with its own generator.

mod config;
mod grid;
mod report;
mod runner;

pub use config::{CountRange, SweepConfig, ValueRange};
pub use grid::{expand, GridPoint};
pub use report::{BestOfGrid, RunDetails, SweepTable};
pub use runner::{SweepReport, SweepRow, SweepRunner};
