//! Mutable state of a single annealing run.

use std::fmt;

use rand::Rng;

use crate::objective::{rastrigin, DOMAIN_MAX, DOMAIN_MIN};
use crate::random::uniform;

/// Non-fatal condition observed while configuring or running a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The requested cooling scheme name was not recognized and geometric
    /// cooling was used instead.
    UnknownCoolingScheme { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownCoolingScheme { name } => write!(
                f,
                "unknown cooling scheme {name:?}, using geometric by default"
            ),
        }
    }
}

/// State carried through one run.
///
/// Solutions and energies are only changed through methods that keep
/// `current_energy == rastrigin(current_solution)` and never let
/// `best_energy` increase.
#[derive(Debug, Clone)]
pub struct AnnealingState {
    current_solution: Vec<f64>,
    current_energy: f64,
    best_solution: Vec<f64>,
    best_energy: f64,
    /// Current temperature.
    pub temperature: f64,
    /// Neighbor evaluations performed so far.
    pub iteration_count: usize,
}

impl AnnealingState {
    /// Draws every coordinate uniformly from the initialization domain.
    pub fn random<R: Rng + ?Sized>(dimensions: usize, temperature: f64, rng: &mut R) -> Self {
        let solution: Vec<f64> = (0..dimensions)
            .map(|_| uniform(rng) * (DOMAIN_MAX - DOMAIN_MIN) + DOMAIN_MIN)
            .collect();
        Self::from_solution(solution, temperature)
    }

    /// Starts a run from a given solution.
    pub fn from_solution(solution: Vec<f64>, temperature: f64) -> Self {
        let energy = rastrigin(&solution);
        Self {
            best_solution: solution.clone(),
            best_energy: energy,
            current_solution: solution,
            current_energy: energy,
            temperature,
            iteration_count: 0,
        }
    }

    pub fn current_solution(&self) -> &[f64] {
        &self.current_solution
    }

    pub fn current_energy(&self) -> f64 {
        self.current_energy
    }

    pub fn best_solution(&self) -> &[f64] {
        &self.best_solution
    }

    pub fn best_energy(&self) -> f64 {
        self.best_energy
    }

    /// Records `candidate` as the new best if it beats the current best.
    ///
    /// Returns `true` when the best changed.
    pub fn offer_best(&mut self, candidate: &[f64], energy: f64) -> bool {
        if energy < self.best_energy {
            self.best_solution.clear();
            self.best_solution.extend_from_slice(candidate);
            self.best_energy = energy;
            true
        } else {
            false
        }
    }

    /// Moves the walk to `candidate`, whose energy must be `energy`.
    pub fn accept(&mut self, candidate: Vec<f64>, energy: f64) {
        debug_assert_eq!(candidate.len(), self.current_solution.len());
        self.current_solution = candidate;
        self.current_energy = energy;
    }

    /// Consumes the state, returning the best solution and its energy.
    pub fn into_best(self) -> (Vec<f64>, f64) {
        (self.best_solution, self.best_energy)
    }
}
