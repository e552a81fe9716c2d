//! microlp backend.
//!
//! Pure-Rust fallback with no native dependencies. It has no
//! time-limit control, so every solve runs to optimality; fine for the
//! problem sizes a volunteer roster reaches.

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use super::{BackendOptions, BackendOutcome, MipBackend, MipModel, SolveStatus};

/// Solves via the pure-Rust microlp branch-and-bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpBackend;

impl MipBackend for MicrolpBackend {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &MipModel, options: &BackendOptions) -> BackendOutcome {
        if options.time_limit.is_some() {
            log::warn!("microlp backend has no time-limit control; solving to optimality");
        }

        let mut problem = Problem::new(OptimizationDirection::Minimize);

        let mut variables = Vec::with_capacity(model.column_count());
        for column in model.columns() {
            let variable = if column.integer && column.lower == 0.0 && column.upper == 1.0 {
                problem.add_binary_var(column.objective)
            } else if column.integer {
                problem.add_integer_var(
                    column.objective,
                    (column.lower as i32, column.upper as i32),
                )
            } else {
                problem.add_var(column.objective, (column.lower, column.upper))
            };
            variables.push(variable);
        }

        for row in model.rows() {
            let expr: Vec<(Variable, f64)> = row
                .coefficients
                .iter()
                .map(|&(index, factor)| (variables[index], factor))
                .collect();

            if row.lower == row.upper {
                problem.add_constraint(expr, ComparisonOp::Eq, row.lower);
            } else {
                if row.lower.is_finite() {
                    problem.add_constraint(expr.clone(), ComparisonOp::Ge, row.lower);
                }
                if row.upper.is_finite() {
                    problem.add_constraint(expr, ComparisonOp::Le, row.upper);
                }
            }
        }

        match problem.solve() {
            Ok(solution) => {
                let objective = solution.objective();
                let values: Vec<f64> = solution.iter().map(|(_, value)| *value).collect();
                BackendOutcome {
                    status: SolveStatus::Optimal,
                    values: Some(values),
                    objective: Some(objective),
                }
            }
            Err(microlp::Error::Infeasible) => {
                BackendOutcome::without_solution(SolveStatus::Infeasible)
            }
            Err(_) => BackendOutcome::without_solution(SolveStatus::SolverError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_tiny_binary_model() {
        // min x + 2y  s.t.  x + y >= 1, binary; picks x.
        let mut model = MipModel::new();
        let x = model.add_binary(1.0);
        let y = model.add_binary(2.0);
        model.add_row_geq(vec![(x, 1.0), (y, 1.0)], 1.0);

        let outcome = MicrolpBackend.solve(&model, &BackendOptions::default());
        assert_eq!(outcome.status, SolveStatus::Optimal);
        let values = outcome.values.unwrap();
        assert!(values[0] > 0.5);
        assert!(values[1] < 0.5);
        assert!((outcome.objective.unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_continuous_and_binary() {
        // min -s  s.t.  s <= x, s <= y, x + y = 2, binary x and y.
        let mut model = MipModel::new();
        let x = model.add_binary(0.0);
        let y = model.add_binary(0.0);
        let s = model.add_continuous(-1.0, 0.0, 1.0);
        model.add_row_leq(vec![(s, 1.0), (x, -1.0)], 0.0);
        model.add_row_leq(vec![(s, 1.0), (y, -1.0)], 0.0);
        model.add_row_eq(vec![(x, 1.0), (y, 1.0)], 2.0);

        let outcome = MicrolpBackend.solve(&model, &BackendOptions::default());
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!((outcome.objective.unwrap() + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_infeasible_model() {
        let mut model = MipModel::new();
        let x = model.add_binary(1.0);
        model.pin_to_zero(x);
        model.add_row_geq(vec![(x, 1.0)], 1.0);

        let outcome = MicrolpBackend.solve(&model, &BackendOptions::default());
        assert_eq!(outcome.status, SolveStatus::Infeasible);
        assert!(outcome.values.is_none());
    }
}
