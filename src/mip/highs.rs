//! HiGHS backend.
//!
//! HiGHS reports a time-limited termination as its own model status
//! rather than as a solved state. When an incumbent survives the
//! cutoff we reclassify that termination as
//! [`SolveStatus::FeasibleTimeLimited`] so a usable-but-unproven
//! schedule is not discarded.

use highs::{HighsModelStatus, RowProblem, Sense};

use super::{BackendOptions, BackendOutcome, MipBackend, MipModel, SolveStatus};

/// Solves via the HiGHS branch-and-bound engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighsBackend;

impl MipBackend for HighsBackend {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, model: &MipModel, options: &BackendOptions) -> BackendOutcome {
        let mut problem = RowProblem::default();

        let mut columns = Vec::with_capacity(model.column_count());
        for column in model.columns() {
            let handle = if column.integer {
                problem.add_integer_column(column.objective, column.lower..=column.upper)
            } else {
                problem.add_column(column.objective, column.lower..=column.upper)
            };
            columns.push(handle);
        }

        for row in model.rows() {
            let factors: Vec<_> = row
                .coefficients
                .iter()
                .map(|&(index, factor)| (columns[index], factor))
                .collect();
            problem.add_row(row.lower..=row.upper, factors);
        }

        let mut solver = problem.optimise(Sense::Minimise);
        solver.set_option("output_flag", options.verbose);
        if let Some(limit) = options.time_limit {
            solver.set_option("time_limit", limit);
        }

        let solved = solver.solve();
        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution = solved.get_solution();
                BackendOutcome {
                    status: SolveStatus::Optimal,
                    values: Some(solution.columns().to_vec()),
                    objective: Some(solved.objective_value()),
                }
            }
            HighsModelStatus::ReachedTimeLimit => {
                let solution = solved.get_solution();
                let values = solution.columns();
                // No incumbent means the cutoff hit before any feasible
                // point was found; nothing usable to return.
                if values.len() == model.column_count() {
                    BackendOutcome {
                        status: SolveStatus::FeasibleTimeLimited,
                        values: Some(values.to_vec()),
                        objective: Some(solved.objective_value()),
                    }
                } else {
                    BackendOutcome::without_solution(SolveStatus::SolverError)
                }
            }
            HighsModelStatus::Infeasible => {
                BackendOutcome::without_solution(SolveStatus::Infeasible)
            }
            _ => BackendOutcome::without_solution(SolveStatus::SolverError),
        }
    }
}
