//! Output formatting for solver results

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::executor::{ScenarioReport, SolveReport};
use chrono::TimeDelta;
use itertools::Itertools;
use rod_cutting::CutResult;
use serde::Serialize;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    format: OutputFormat,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    length: i64,
    prices: &'a [f64],
    results: Vec<JsonResult<'a>>,
    cuts_diverge: bool,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    algorithm: rod_cutting::Algorithm,
    #[serde(flatten)]
    result: &'a CutResult<f64>,
    solve_micros: Option<i64>,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool, format: OutputFormat) -> Self {
        Self { quiet, format }
    }

    /// Render all reports as one string
    pub fn render(&self, reports: &[ScenarioReport]) -> Result<String, CliError> {
        match self.format {
            OutputFormat::Json => self.render_json(reports),
            OutputFormat::Text if self.quiet => Ok(self.render_quiet(reports)),
            OutputFormat::Text => Ok(self.render_full(reports)),
        }
    }

    /// Quiet mode: one `profit: cuts` line per algorithm
    fn render_quiet(&self, reports: &[ScenarioReport]) -> String {
        reports
            .iter()
            .flat_map(|report| &report.reports)
            .map(|solve| {
                format!(
                    "{}: {}",
                    solve.result.max_profit,
                    format_cuts(&solve.result.cuts)
                )
            })
            .join("\n")
    }

    fn render_full(&self, reports: &[ScenarioReport]) -> String {
        let mut out = String::new();
        for report in reports {
            let scenario = &report.scenario;
            out.push_str(&format!(
                "{} (length {}, prices [{}])\n",
                scenario.name,
                scenario.length,
                scenario.prices.iter().join(", ")
            ));
            for solve in &report.reports {
                out.push_str(&format_solve(solve));
                out.push('\n');
            }
            if report.cuts_diverge() {
                out.push_str("  note: equal profit, cut lists differ on ties\n");
            }
        }
        out.trim_end().to_string()
    }

    fn render_json(&self, reports: &[ScenarioReport]) -> Result<String, CliError> {
        let json: Vec<JsonReport<'_>> = reports
            .iter()
            .map(|report| JsonReport {
                name: &report.scenario.name,
                length: report.scenario.length,
                prices: &report.scenario.prices,
                results: report
                    .reports
                    .iter()
                    .map(|solve| JsonResult {
                        algorithm: solve.algorithm,
                        result: &solve.result,
                        solve_micros: (!self.quiet)
                            .then(|| solve.solve_duration.num_microseconds())
                            .flatten(),
                    })
                    .collect(),
                cuts_diverge: report.cuts_diverge(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

fn format_solve(solve: &SolveReport) -> String {
    let result = &solve.result;
    format!(
        "  {:<5} profit {}, cuts {}, {} cut(s) (solve: {})",
        solve.algorithm.name(),
        result.max_profit,
        format_cuts(&result.cuts),
        result.number_of_cuts,
        format_duration(solve.solve_duration)
    )
}

fn format_cuts(cuts: &[usize]) -> String {
    format!("[{}]", cuts.iter().join(", "))
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
