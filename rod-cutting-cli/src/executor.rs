//! Runs solvers for a resolved task

use crate::config::Task;
use crate::error::CliError;
use chrono::TimeDelta;
use rayon::prelude::*;
use rod_cutting::{Algorithm, CutResult, compute_optimal_cut};
use std::time::Instant;
use tracing::{debug, info};

/// One rod to solve
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub length: i64,
    pub prices: Vec<f64>,
}

/// Result of one algorithm on one scenario
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub result: CutResult<f64>,
    pub solve_duration: TimeDelta,
}

/// All results for one scenario, in algorithm order
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub reports: Vec<SolveReport>,
}

impl ScenarioReport {
    /// Whether the algorithms returned different cut lists
    pub fn cuts_diverge(&self) -> bool {
        self.reports
            .windows(2)
            .any(|pair| pair[0].result.cuts != pair[1].result.cuts)
    }
}

/// The example rods run by `rodcut demo`
pub fn demo_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Base case".to_string(),
            length: 5,
            prices: vec![2.0, 5.0, 7.0, 8.0, 10.0],
        },
        Scenario {
            name: "Optimal to not cut".to_string(),
            length: 3,
            prices: vec![1.0, 3.0, 8.0],
        },
        Scenario {
            name: "Even cuts".to_string(),
            length: 4,
            prices: vec![3.0, 5.0, 6.0, 7.0],
        },
    ]
}

/// Executes a task and collects reports in scenario order
pub struct Executor {
    thread_pool: Option<rayon::ThreadPool>,
}

impl Executor {
    /// Create an executor; demos get a thread pool of the configured size
    pub fn new(task: &Task) -> Result<Self, CliError> {
        let thread_pool = match task {
            Task::Demo { thread_count } => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(*thread_count)
                    .build()
                    .map_err(|e| CliError::ThreadPool(e.to_string()))?,
            ),
            Task::Solve { .. } => None,
        };
        Ok(Self { thread_pool })
    }

    /// Run every scenario the task names
    pub fn execute(&self, task: Task) -> Result<Vec<ScenarioReport>, CliError> {
        match task {
            Task::Solve {
                length,
                prices,
                algorithms,
            } => {
                let scenario = Scenario {
                    name: "input".to_string(),
                    length,
                    prices,
                };
                Ok(vec![run_scenario(scenario, &algorithms)?])
            }
            Task::Demo { .. } => {
                let scenarios = demo_scenarios();
                info!(count = scenarios.len(), "running demo scenarios");
                let run_all = || {
                    scenarios
                        .into_par_iter()
                        .map(|scenario| run_scenario(scenario, &Algorithm::ALL))
                        .collect::<Result<Vec<_>, CliError>>()
                };
                match &self.thread_pool {
                    Some(pool) => pool.install(run_all),
                    None => run_all(),
                }
            }
        }
    }
}

/// Solve one scenario with each algorithm in turn
fn run_scenario(scenario: Scenario, algorithms: &[Algorithm]) -> Result<ScenarioReport, CliError> {
    let reports = algorithms
        .iter()
        .map(|&algorithm| {
            let start = Instant::now();
            let result = compute_optimal_cut(scenario.length, &scenario.prices, algorithm)?;
            let solve_duration = TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX);
            debug!(
                scenario = %scenario.name,
                %algorithm,
                profit = result.max_profit,
                "solved"
            );
            Ok(SolveReport {
                algorithm,
                result,
                solve_duration,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    Ok(ScenarioReport { scenario, reports })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rod_cutting::InvalidInput;

    fn solve_task(length: i64, prices: &[f64], algorithms: Vec<Algorithm>) -> Task {
        Task::Solve {
            length,
            prices: prices.to_vec(),
            algorithms,
        }
    }

    #[test]
    fn test_solve_runs_requested_algorithms_in_order() {
        let task = solve_task(5, &[2.0, 5.0, 7.0, 8.0, 10.0], Algorithm::ALL.to_vec());
        let executor = Executor::new(&task).unwrap();
        let reports = executor.execute(task).unwrap();

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.reports[0].algorithm, Algorithm::Memoized);
        assert_eq!(report.reports[1].algorithm, Algorithm::Tabulated);
        assert_eq!(report.reports[0].result.cuts, vec![1, 2, 2]);
        assert_eq!(report.reports[1].result.cuts, vec![2, 2, 1]);
        assert!(report.cuts_diverge());
    }

    #[test]
    fn test_single_algorithm_never_diverges() {
        let task = solve_task(3, &[1.0, 3.0, 8.0], vec![Algorithm::Tabulated]);
        let reports = Executor::new(&task).unwrap().execute(task).unwrap();
        assert_eq!(reports[0].reports.len(), 1);
        assert_eq!(reports[0].reports[0].result.max_profit, 8.0);
        assert!(!reports[0].cuts_diverge());
    }

    #[test]
    fn test_invalid_input_surfaces() {
        let task = solve_task(4, &[1.0], Algorithm::ALL.to_vec());
        let result = Executor::new(&task).unwrap().execute(task);
        assert!(matches!(
            result,
            Err(CliError::InvalidInput(InvalidInput::InsufficientPrices {
                requested: 4,
                available: 1
            }))
        ));
    }

    #[test]
    fn test_demo_keeps_scenario_order() {
        let task = Task::Demo { thread_count: 2 };
        let reports = Executor::new(&task).unwrap().execute(task).unwrap();

        let names: Vec<_> = reports.iter().map(|r| r.scenario.name.as_str()).collect();
        assert_eq!(names, vec!["Base case", "Optimal to not cut", "Even cuts"]);

        let profits: Vec<_> = reports
            .iter()
            .map(|r| r.reports[0].result.max_profit)
            .collect();
        assert_eq!(profits, vec![12.0, 8.0, 12.0]);

        for report in &reports {
            assert_eq!(report.reports.len(), 2);
            assert_eq!(
                report.reports[0].result.max_profit,
                report.reports[1].result.max_profit
            );
        }
    }
}
