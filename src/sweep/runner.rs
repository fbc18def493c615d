//! Runs every grid point of a sweep and aggregates trials.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::Result;
use crate::random::derive_seed;
use crate::sa::{AnnealRunner, CoolingScheme, Diagnostic};

use super::config::SweepConfig;
use super::grid::{expand, GridPoint};

/// Aggregated outcome of one grid point.
#[derive(Debug, Clone)]
pub struct SweepRow {
    pub point: GridPoint,
    /// Mean best energy over the trials.
    pub mean_energy: f64,
    /// Lowest best energy over the trials.
    pub min_energy: f64,
    pub trials: usize,
}

/// Outcome of a full sweep.
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub dimensions: usize,
    pub max_iterations: usize,
    pub trials: usize,
    /// One row per grid point, in grid order.
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    /// Row with the lowest mean energy.
    pub fn best_overall(&self) -> Option<&SweepRow> {
        self.rows
            .iter()
            .min_by(|a, b| a.mean_energy.total_cmp(&b.mean_energy))
    }

    /// Lowest-mean row for each scheme name, in first-appearance order.
    pub fn best_per_scheme(&self) -> Vec<&SweepRow> {
        let mut best: Vec<&SweepRow> = Vec::new();
        for row in &self.rows {
            let existing = best
                .iter()
                .position(|b| b.point.scheme_name == row.point.scheme_name);
            match existing {
                Some(pos) if row.mean_energy < best[pos].mean_energy => best[pos] = row,
                Some(_) => {}
                None => best.push(row),
            }
        }
        best
    }

    /// Distinct diagnostics raised anywhere in the sweep.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out: Vec<Diagnostic> = Vec::new();
        for d in self.rows.iter().flat_map(|r| r.point.diagnostics.iter()) {
            if !out.contains(d) {
                out.push(d.clone());
            }
        }
        out
    }

    /// Rows run with the given scheme.
    pub fn rows_for(&self, scheme: CoolingScheme) -> impl Iterator<Item = &SweepRow> {
        self.rows.iter().filter(move |r| r.point.scheme == scheme)
    }
}

/// Executes a sweep.
pub struct SweepRunner;

impl SweepRunner {
    /// Runs every grid point `config.trials` times.
    ///
    /// Run `k` of the sweep is seeded with `derive_seed(config.seed, k)`, so
    /// the report is the same whether or not points run in parallel.
    pub fn run(config: &SweepConfig) -> Result<SweepReport> {
        let points = expand(config)?;
        info!(
            points = points.len(),
            trials = config.trials,
            dimensions = config.dimensions,
            max_iterations = config.max_iterations,
            "sweep started"
        );

        let rows = evaluate_points(config, points)?;

        info!(rows = rows.len(), "sweep finished");
        Ok(SweepReport {
            dimensions: config.dimensions,
            max_iterations: config.max_iterations,
            trials: config.trials,
            rows,
        })
    }
}

fn evaluate_points(config: &SweepConfig, points: Vec<GridPoint>) -> Result<Vec<SweepRow>> {
    let indexed: Vec<(usize, GridPoint)> = points.into_iter().enumerate().collect();

    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            return indexed
                .into_par_iter()
                .map(|(index, point)| evaluate_point(config, index, point))
                .collect();
        }
    }

    indexed
        .into_iter()
        .map(|(index, point)| evaluate_point(config, index, point))
        .collect()
}

fn evaluate_point(config: &SweepConfig, index: usize, point: GridPoint) -> Result<SweepRow> {
    let mut total = 0.0;
    let mut min_energy = f64::INFINITY;

    for trial in 0..config.trials {
        let run_index = (index * config.trials + trial) as u64;
        let anneal_config = point.anneal_config(
            config.dimensions,
            config.max_iterations,
            derive_seed(config.seed, run_index),
        );
        let result = AnnealRunner::run(&anneal_config)?;
        total += result.best_energy;
        min_energy = min_energy.min(result.best_energy);
    }

    let mean_energy = total / config.trials as f64;
    debug!(
        scheme = %point.scheme_name,
        initial_temperature = point.initial_temperature,
        min_temperature = point.min_temperature,
        cooling_rate = point.cooling_rate,
        iterations_per_level = point.iterations_per_level,
        mean_energy,
        "grid point finished"
    );

    Ok(SweepRow {
        point,
        mean_energy,
        min_energy,
        trials: config.trials,
    })
}
