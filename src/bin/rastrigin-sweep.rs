//! rastrigin-sweep CLI: simulated annealing experiments on the Rastrigin function.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use u_anneal::sa::{AnnealConfig, AnnealRunner};
use u_anneal::sweep::{BestOfGrid, RunDetails, SweepConfig, SweepRunner, SweepTable};

#[derive(Parser)]
#[command(name = "rastrigin-sweep")]
#[command(about = "Simulated annealing experiments on the Rastrigin function")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full grid and print one row per configuration
    Sweep(SweepArgs),

    /// Run the full grid and print the best configuration per scheme
    Best(SweepArgs),

    /// Run a single configuration and print a detailed report
    Single {
        /// Cooling scheme (geometric, linear, exponential, logarithmic, harmonic)
        #[arg(short, long, default_value = "geometric")]
        scheme: String,

        /// Number of dimensions
        #[arg(short, long, default_value = "3")]
        dimensions: usize,

        /// Total iteration budget
        #[arg(long, default_value = "1000")]
        max_iterations: usize,

        /// Initial temperature
        #[arg(long, default_value = "1000.0")]
        initial_temp: f64,

        /// Temperature floor
        #[arg(long, default_value = "0.1")]
        min_temp: f64,

        /// Cooling rate (geometric factor or linear decrement)
        #[arg(long, default_value = "0.9")]
        cooling_rate: f64,

        /// Iterations per temperature level
        #[arg(long, default_value = "100")]
        iterations_per_level: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Args)]
struct SweepArgs {
    /// TOML sweep configuration; defaults to the built-in grid
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Trials averaged per configuration (overrides the file)
    #[arg(short, long)]
    trials: Option<usize>,

    /// Base random seed (overrides the file)
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate configurations in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

impl SweepArgs {
    fn load(&self) -> u_anneal::Result<SweepConfig> {
        let mut config = match &self.config {
            Some(path) => SweepConfig::load(path)?,
            None => SweepConfig::default(),
        };
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.parallel |= self.parallel;
        Ok(config)
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let directive: Directive = "u_anneal=info".parse()?;
    let filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep(args) => {
            let report = SweepRunner::run(&args.load()?)?;
            print!("{}", SweepTable(&report));
        }
        Commands::Best(args) => {
            let report = SweepRunner::run(&args.load()?)?;
            print!("{}", BestOfGrid(&report));
        }
        Commands::Single {
            scheme,
            dimensions,
            max_iterations,
            initial_temp,
            min_temp,
            cooling_rate,
            iterations_per_level,
            seed,
        } => {
            let config = AnnealConfig::default()
                .with_dimensions(dimensions)
                .with_max_iterations(max_iterations)
                .with_initial_temperature(initial_temp)
                .with_min_temperature(min_temp)
                .with_cooling_rate(cooling_rate)
                .with_iterations_per_level(iterations_per_level)
                .with_scheme_name(&scheme)
                .with_seed(seed);
            let result = AnnealRunner::run(&config)?;
            print!(
                "{}",
                RunDetails {
                    config: &config,
                    result: &result,
                }
            );
        }
    }

    Ok(())
}
