//! Markdown renderers for sweep and single-run results.
//!
//! Each report is a small [`fmt::Display`] wrapper, so callers choose where
//! the text goes.

use std::fmt;

use crate::objective::rastrigin;
use crate::sa::{AnnealConfig, AnnealResult, Diagnostic};

use super::runner::{SweepReport, SweepRow};

const TABLE_HEADER: &str = "| Cooling scheme | Initial temperature | Min temperature | Cooling rate | Max iterations at temperature level | Result |";
const TABLE_RULE: &str = "|-|-|-|-|-|-|";

/// Every grid point as one table row.
pub struct SweepTable<'a>(pub &'a SweepReport);

/// The lowest-mean row per scheme plus the overall winner.
pub struct BestOfGrid<'a>(pub &'a SweepReport);

/// Everything known about a single run.
pub struct RunDetails<'a> {
    pub config: &'a AnnealConfig,
    pub result: &'a AnnealResult,
}

fn write_parameters(f: &mut fmt::Formatter<'_>, report: &SweepReport) -> fmt::Result {
    writeln!(f, "## Experiment Parameters")?;
    writeln!(f, "- Dimensions: {}", report.dimensions)?;
    writeln!(f, "- Max Iterations: {}", report.max_iterations)?;
    if report.trials > 1 {
        writeln!(f, "- Trials per configuration: {}", report.trials)?;
    }
    writeln!(f)
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &SweepRow) -> fmt::Result {
    let p = &row.point;
    let rate = if p.scheme.uses_cooling_rate() {
        format!("{:.2}", p.cooling_rate)
    } else {
        "n/a".to_string()
    };
    writeln!(
        f,
        "| {} | {:.2} | {:.2} | {} | {} | {:.4} |",
        p.scheme_name,
        p.initial_temperature,
        p.min_temperature,
        rate,
        p.iterations_per_level,
        row.mean_energy
    )
}

fn write_diagnostics(f: &mut fmt::Formatter<'_>, diagnostics: &[Diagnostic]) -> fmt::Result {
    if diagnostics.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    for d in diagnostics {
        writeln!(f, "> Warning: {d}")?;
    }
    Ok(())
}

impl fmt::Display for SweepTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parameters(f, self.0)?;
        writeln!(f, "{TABLE_HEADER}")?;
        writeln!(f, "{TABLE_RULE}")?;
        for row in &self.0.rows {
            write_row(f, row)?;
        }
        write_diagnostics(f, &self.0.diagnostics())
    }
}

impl fmt::Display for BestOfGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parameters(f, self.0)?;
        writeln!(f, "### Best configuration per cooling scheme")?;
        writeln!(f)?;
        writeln!(f, "{TABLE_HEADER}")?;
        writeln!(f, "{TABLE_RULE}")?;
        for row in self.0.best_per_scheme() {
            write_row(f, row)?;
        }
        if let Some(best) = self.0.best_overall() {
            writeln!(f)?;
            writeln!(
                f,
                "**Best overall:** {} with result {:.4}",
                best.point.scheme_name, best.mean_energy
            )?;
        }
        write_diagnostics(f, &self.0.diagnostics())
    }
}

impl fmt::Display for RunDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        let r = self.result;

        writeln!(f, "## Single Run")?;
        writeln!(f, "- Cooling scheme: {}", c.scheme)?;
        writeln!(f, "- Dimensions: {}", c.dimensions)?;
        writeln!(f, "- Max Iterations: {}", c.max_iterations)?;
        writeln!(f, "- Initial temperature: {:.2}", c.initial_temperature)?;
        writeln!(f, "- Min temperature: {:.2}", c.min_temperature)?;
        if c.scheme.uses_cooling_rate() {
            writeln!(f, "- Cooling rate: {:.2}", c.cooling_rate)?;
        }
        writeln!(f, "- Max iterations at temperature level: {}", c.iterations_per_level)?;
        writeln!(f, "- Seed: {}", c.seed)?;
        writeln!(f)?;

        writeln!(f, "### Result")?;
        let coords: Vec<String> = r.best_solution.iter().map(|x| format!("{x:.6}")).collect();
        writeln!(f, "- Best solution: [{}]", coords.join(", "))?;
        writeln!(f, "- Best energy: {:.6}", r.best_energy)?;
        writeln!(f, "- Objective at best solution: {:.6}", rastrigin(&r.best_solution))?;
        writeln!(f, "- Initial energy: {:.6}", r.initial_energy)?;
        writeln!(f, "- Iterations: {}", r.iterations)?;
        writeln!(f, "- Final temperature: {:.6}", r.final_temperature)?;
        writeln!(
            f,
            "- Accepted moves: {} ({} improving)",
            r.accepted_moves, r.improving_moves
        )?;
        write_diagnostics(f, &r.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::AnnealRunner;
    use crate::sweep::config::{CountRange, SweepConfig, ValueRange};
    use crate::sweep::runner::SweepRunner;

    fn tiny_report(schemes: &[&str]) -> SweepReport {
        let config = SweepConfig::default()
            .with_schemes(schemes.iter().copied())
            .with_max_iterations(100)
            .with_initial_temperature(ValueRange::single(500.0))
            .with_min_temperature(ValueRange::single(0.1))
            .with_cooling_rate(ValueRange::new(0.8, 0.85, 0.05))
            .with_iterations_per_level(CountRange::single(50));
        SweepRunner::run(&config).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let report = tiny_report(&["geometric", "harmonic"]);
        let text = SweepTable(&report).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "## Experiment Parameters");
        assert_eq!(lines[1], "- Dimensions: 3");
        assert_eq!(lines[2], "- Max Iterations: 100");
        assert_eq!(lines[4], TABLE_HEADER);
        assert_eq!(lines[5], TABLE_RULE);
        assert!(lines[6].starts_with("| geometric | 500.00 | 0.10 | 0.80 | 50 | "));
        assert!(lines[7].starts_with("| geometric | 500.00 | 0.10 | 0.85 | 50 | "));
        assert!(lines[8].starts_with("| harmonic | 500.00 | 0.10 | n/a | 50 | "));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_result_has_four_decimals() {
        let report = tiny_report(&["linear"]);
        let text = SweepTable(&report).to_string();
        let last = text.lines().last().unwrap();
        let cell = last.trim_end_matches(" |").rsplit("| ").next().unwrap();
        let decimals = cell.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 4, "cell {cell:?}");
    }

    #[test]
    fn test_best_of_grid_one_row_per_scheme() {
        let report = tiny_report(&["geometric", "linear", "exponential"]);
        let text = BestOfGrid(&report).to_string();
        let rows = text.lines().filter(|l| l.starts_with("| ") && !l.starts_with("| Cooling")).count();
        assert_eq!(rows, 3);
        assert!(text.contains("**Best overall:**"));
    }

    #[test]
    fn test_unknown_scheme_warning_rendered() {
        let report = tiny_report(&["mystery"]);
        let text = SweepTable(&report).to_string();
        assert!(text.contains("> Warning: unknown cooling scheme \"mystery\""));
    }

    #[test]
    fn test_run_details() {
        let config = AnnealConfig::default().with_seed(3);
        let result = AnnealRunner::run(&config).unwrap();
        let text = RunDetails {
            config: &config,
            result: &result,
        }
        .to_string();
        assert!(text.contains("- Cooling scheme: geometric"));
        assert!(text.contains("- Cooling rate: 0.90"));
        assert!(text.contains("- Seed: 3"));
        assert!(text.contains(&format!("- Best energy: {:.6}", result.best_energy)));
        assert!(text.contains(&format!("- Iterations: {}", result.iterations)));
        assert!(!text.contains("Warning"));
    }
}
