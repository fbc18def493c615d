//! SA execution loop.

use rand::Rng;
use tracing::{debug, trace};

use crate::error::Result;
use crate::objective::rastrigin;
use crate::random::{create_rng, uniform};

use super::config::AnnealConfig;
use super::schedule::{CoolingScheme, CoolingSchedule, TEMPERATURE_FLOOR};
use super::types::{AnnealingState, Diagnostic};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best solution found.
    pub best_solution: Vec<f64>,

    /// Energy of the best solution.
    pub best_energy: f64,

    /// The random starting point.
    pub initial_solution: Vec<f64>,

    /// Energy of the starting point.
    pub initial_energy: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best energy at the start and after every temperature level.
    pub energy_history: Vec<f64>,

    /// Temperature after every cooling update.
    pub temperature_history: Vec<f64>,

    /// Non-fatal conditions raised while configuring the run.
    pub diagnostics: Vec<Diagnostic>,
}

/// Executes Simulated Annealing on the Rastrigin objective.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs with a generator seeded from `config.seed`.
    pub fn run(config: &AnnealConfig) -> Result<AnnealResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs with a caller-supplied generator. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(config: &AnnealConfig, rng: &mut R) -> Result<AnnealResult> {
        config.validate()?;

        let schedule = CoolingSchedule::new(config.scheme, &config.schedule_params());
        debug!(
            dimensions = config.dimensions,
            scheme = %config.scheme,
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            cooling_rate = config.cooling_rate,
            iterations_per_level = config.iterations_per_level,
            max_iterations = config.max_iterations,
            "annealing started"
        );

        // Initialize
        let mut state = AnnealingState::random(config.dimensions, config.initial_temperature, rng);
        let initial_solution = state.current_solution().to_vec();
        let initial_energy = state.current_energy();

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut energy_history = vec![initial_energy];
        let mut temperature_history = Vec::new();

        while state.temperature > config.min_temperature
            && state.iteration_count < config.max_iterations
        {
            for _ in 0..config.iterations_per_level {
                let neighbor: Vec<f64> = state
                    .current_solution()
                    .iter()
                    .map(|&x| x + (uniform(rng) * 2.0 - 1.0))
                    .collect();
                let neighbor_energy = rastrigin(&neighbor);

                // Rejected neighbors still count toward the best.
                state.offer_best(&neighbor, neighbor_energy);

                let accept = if neighbor_energy < state.current_energy() {
                    improving_moves += 1;
                    true
                } else {
                    metropolis_accept(
                        state.current_energy(),
                        neighbor_energy,
                        state.temperature,
                        rng,
                    )
                };

                if accept {
                    state.accept(neighbor, neighbor_energy);
                    accepted_moves += 1;
                }

                state.iteration_count += 1;
            }

            // Cool down
            state.temperature = schedule.next_temperature(state.temperature, state.iteration_count);
            temperature_history.push(state.temperature);
            energy_history.push(state.best_energy());

            trace!(
                iteration = state.iteration_count,
                temperature = state.temperature,
                current_energy = state.current_energy(),
                best_energy = state.best_energy(),
                "temperature level finished"
            );
        }

        let iterations = state.iteration_count;
        let final_temperature = state.temperature;
        let (best_solution, best_energy) = state.into_best();

        debug!(
            iterations,
            final_temperature,
            best_energy,
            accepted_moves,
            "annealing finished"
        );

        Ok(AnnealResult {
            best_solution,
            best_energy,
            initial_solution,
            initial_energy,
            iterations,
            final_temperature,
            accepted_moves,
            improving_moves,
            energy_history,
            temperature_history,
            diagnostics: config.diagnostics.clone(),
        })
    }
}

/// Metropolis test for a move that does not lower the energy.
///
/// Accepts with probability `exp((current − candidate) / T)`. At or below
/// [`TEMPERATURE_FLOOR`] the probability is taken as 0 and no random number
/// is drawn.
pub fn metropolis_accept<R: Rng + ?Sized>(
    current_energy: f64,
    candidate_energy: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    if temperature.is_nan() || temperature <= TEMPERATURE_FLOOR {
        return false;
    }
    let probability = ((current_energy - candidate_energy) / temperature).exp();
    uniform(rng) < probability
}

/// Minimizes the Rastrigin function by simulated annealing.
///
/// `scheme` is resolved leniently: an unrecognized name runs geometric
/// cooling and the returned result carries a
/// [`Diagnostic::UnknownCoolingScheme`].
///
/// # Errors
///
/// Returns an error before any work is done when `dimensions == 0`,
/// `iterations_per_level == 0`, or the temperatures do not satisfy
/// `initial_temp > min_temp > 0`.
///
/// # Examples
///
/// ```
/// use u_anneal::{anneal, random::create_rng};
///
/// let mut rng = create_rng(42);
/// let result = anneal(3, 1000, 1000.0, 0.1, 0.9, 100, "geometric", &mut rng).unwrap();
/// assert_eq!(result.best_solution.len(), 3);
/// assert!(result.best_energy <= result.initial_energy);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn anneal<R: Rng + ?Sized>(
    dimensions: usize,
    max_iterations: usize,
    initial_temp: f64,
    min_temp: f64,
    cooling_rate: f64,
    iterations_per_level: usize,
    scheme: &str,
    rng: &mut R,
) -> Result<AnnealResult> {
    let config = AnnealConfig::default()
        .with_dimensions(dimensions)
        .with_max_iterations(max_iterations)
        .with_initial_temperature(initial_temp)
        .with_min_temperature(min_temp)
        .with_cooling_rate(cooling_rate)
        .with_iterations_per_level(iterations_per_level)
        .with_scheme_name(scheme);
    AnnealRunner::run_with_rng(&config, rng)
}

/// Convenience wrapper over [`anneal`] taking an already-typed scheme.
#[allow(clippy::too_many_arguments)]
pub fn anneal_with_scheme<R: Rng + ?Sized>(
    dimensions: usize,
    max_iterations: usize,
    initial_temp: f64,
    min_temp: f64,
    cooling_rate: f64,
    iterations_per_level: usize,
    scheme: CoolingScheme,
    rng: &mut R,
) -> Result<AnnealResult> {
    anneal(
        dimensions,
        max_iterations,
        initial_temp,
        min_temp,
        cooling_rate,
        iterations_per_level,
        scheme.name(),
        rng,
    )
}
