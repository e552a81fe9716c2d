//! Backend-agnostic MIP layer.
//!
//! The rest of the crate describes an optimization as a [`MipModel`]
//! (plain column and row definitions with a minimization sense) and
//! hands it to a [`MipBackend`]. Backends translate to their native
//! representation, run the search, and map their native termination
//! codes onto the portable [`SolveStatus`], so core logic never
//! inspects backend-specific constants.
//!
//! # Reference
//! Wolsey (2020), "Integer Programming", Ch. 1 (problem statement only;
//! the branch-and-bound machinery lives entirely inside the backends).

mod highs;
mod microlp;

pub use self::highs::HighsBackend;
pub use self::microlp::MicrolpBackend;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portable termination status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Solution found and proven optimal.
    Optimal,
    /// Time limit hit first; a feasible incumbent is available.
    FeasibleTimeLimited,
    /// No assignment satisfies the hard constraints.
    Infeasible,
    /// The backend failed or produced nothing usable.
    SolverError,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::FeasibleTimeLimited => "feasible (time limit reached)",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::SolverError => "solver error",
        };
        f.write_str(text)
    }
}

/// Backend-specific controls.
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    /// Wall-clock budget in seconds. Backends without time-limit
    /// support ignore it (with a warning) and solve to optimality.
    pub time_limit: Option<f64>,
    /// Let the backend write its own progress output.
    pub verbose: bool,
}

/// A column: one decision variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Coefficient in the (minimized) objective.
    pub objective: f64,
    /// Whether the variable is integral.
    pub integer: bool,
}

/// A row: one linear constraint `lower <= a·x <= upper`.
///
/// One-sided rows use `f64::INFINITY` / `f64::NEG_INFINITY` for the
/// open side; equalities set both bounds to the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDef {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Sparse coefficients as (column index, factor) pairs.
    pub coefficients: Vec<(usize, f64)>,
}

/// A minimization problem over binary and continuous variables.
#[derive(Debug, Clone, Default)]
pub struct MipModel {
    columns: Vec<ColumnDef>,
    rows: Vec<RowDef>,
}

impl MipModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binary variable, returning its column index.
    pub fn add_binary(&mut self, objective: f64) -> usize {
        self.push_column(ColumnDef {
            lower: 0.0,
            upper: 1.0,
            objective,
            integer: true,
        })
    }

    /// Adds a bounded continuous variable, returning its column index.
    pub fn add_continuous(&mut self, objective: f64, lower: f64, upper: f64) -> usize {
        self.push_column(ColumnDef {
            lower,
            upper,
            objective,
            integer: false,
        })
    }

    /// Forces an existing variable to zero by collapsing its bounds.
    pub fn pin_to_zero(&mut self, column: usize) {
        self.columns[column].lower = 0.0;
        self.columns[column].upper = 0.0;
    }

    /// Adds an equality row `a·x = value`.
    pub fn add_row_eq(&mut self, coefficients: Vec<(usize, f64)>, value: f64) {
        self.rows.push(RowDef {
            lower: value,
            upper: value,
            coefficients,
        });
    }

    /// Adds a lower-bounded row `a·x >= lower`.
    pub fn add_row_geq(&mut self, coefficients: Vec<(usize, f64)>, lower: f64) {
        self.rows.push(RowDef {
            lower,
            upper: f64::INFINITY,
            coefficients,
        });
    }

    /// Adds an upper-bounded row `a·x <= upper`.
    pub fn add_row_leq(&mut self, coefficients: Vec<(usize, f64)>, upper: f64) {
        self.rows.push(RowDef {
            lower: f64::NEG_INFINITY,
            upper,
            coefficients,
        });
    }

    /// The column definitions, in index order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// The row definitions.
    pub fn rows(&self) -> &[RowDef] {
        &self.rows
    }

    /// Number of variables.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of constraints.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn push_column(&mut self, column: ColumnDef) -> usize {
        self.columns.push(column);
        self.columns.len() - 1
    }
}

/// What a backend hands back.
#[derive(Debug, Clone)]
pub struct BackendOutcome {
    /// Portable termination status.
    pub status: SolveStatus,
    /// Column values in index order, when a solution exists.
    pub values: Option<Vec<f64>>,
    /// Objective value of that solution.
    pub objective: Option<f64>,
}

impl BackendOutcome {
    /// An outcome without a solution.
    pub fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            values: None,
            objective: None,
        }
    }
}

/// A narrow interface to an external MIP solver: a model goes in, a
/// status and variable values come out.
pub trait MipBackend {
    /// Short backend identifier for diagnostics.
    fn name(&self) -> &'static str;

    /// Solves `model` (minimization) under `options`.
    fn solve(&self, model: &MipModel, options: &BackendOptions) -> BackendOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_counts() {
        let mut model = MipModel::new();
        let x = model.add_binary(1.0);
        let y = model.add_continuous(0.5, 0.0, 10.0);
        model.add_row_geq(vec![(x, 1.0), (y, 1.0)], 1.0);
        model.add_row_leq(vec![(y, 1.0)], 5.0);

        assert_eq!(model.column_count(), 2);
        assert_eq!(model.row_count(), 2);
        assert!(model.columns()[x].integer);
        assert!(!model.columns()[y].integer);
    }

    #[test]
    fn test_pin_to_zero() {
        let mut model = MipModel::new();
        let x = model.add_binary(0.0);
        model.pin_to_zero(x);

        assert!((model.columns()[x].upper - 0.0).abs() < 1e-10);
        assert!(model.columns()[x].integer);
    }

    #[test]
    fn test_equality_row_bounds() {
        let mut model = MipModel::new();
        let x = model.add_binary(0.0);
        model.add_row_eq(vec![(x, 1.0)], 1.0);

        let row = &model.rows()[0];
        assert!((row.lower - 1.0).abs() < 1e-10);
        assert!((row.upper - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Optimal.to_string(), "optimal");
        assert_eq!(
            SolveStatus::FeasibleTimeLimited.to_string(),
            "feasible (time limit reached)"
        );
        assert_eq!(SolveStatus::Infeasible.to_string(), "infeasible");
    }
}
