//! MIP formulation of the rostering problem.
//!
//! Bridges the domain models to the `mip` layer. Builds columns and
//! rows from the availability matrices and the configured policies,
//! submits the model to a backend, and decodes the solution vector
//! back into a [`RosterAssignment`].
//!
//! # Formulation
//!
//! Binary z[i,j] decides whether volunteer `i` works shift `j`. The
//! nonlinear pieces of the objective are linearized with auxiliary
//! continuous variables:
//!
//! - `m >= Σ_j z[i,j]` for every `i` turns the max load into the
//!   single column `m` (objective weight 1);
//! - `dev⁺[i] >= load_i − mean` and `dev⁻[i] >= mean − load_i` split
//!   the deviation penalty into its above/below parts (mean is linear
//!   in z, so both rows are linear);
//! - `s[i,d] <= z[i,2d]` and `s[i,d] <= z[i,2d+1]` bound the same-day
//!   indicator by the smaller of the two half-day assignments; its
//!   negative objective weight pulls it up to that minimum.

use std::time::Instant;

use crate::mip::{BackendOptions, MipBackend, MipModel, SolveStatus};
use crate::models::{
    AvailabilityPolicy, RosterAssignment, RosterInput, SolveConfig, SolveOutcome, StaffingRule,
};

/// Where each variable group starts in the column order.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    n: usize,
    t: usize,
    pairs: usize,
    max_load: usize,
    dev_above: usize,
    dev_below: usize,
    same_day: usize,
}

impl ColumnLayout {
    /// Column of the assignment variable z[i,j].
    pub fn z(&self, i: usize, j: usize) -> usize {
        i * self.t + j
    }

    /// Column of the max-load variable.
    pub fn max_load(&self) -> usize {
        self.max_load
    }

    /// Column of the above-mean deviation for volunteer `i`.
    pub fn dev_above(&self, i: usize) -> usize {
        self.dev_above + i
    }

    /// Column of the below-mean deviation for volunteer `i`.
    pub fn dev_below(&self, i: usize) -> usize {
        self.dev_below + i
    }

    /// Column of the same-day indicator for volunteer `i`, day `d`.
    pub fn same_day(&self, i: usize, d: usize) -> usize {
        self.same_day + i * self.pairs + d
    }

    /// Total number of columns.
    pub fn column_count(&self) -> usize {
        self.same_day + self.n * self.pairs
    }
}

/// Builds a MIP model from a rostering input and solves it.
pub struct RosterModelBuilder<'a> {
    input: &'a RosterInput,
    config: SolveConfig,
}

impl<'a> RosterModelBuilder<'a> {
    /// Creates a builder with the default configuration.
    pub fn new(input: &'a RosterInput) -> Self {
        Self {
            input,
            config: SolveConfig::default(),
        }
    }

    /// Sets the solve configuration.
    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Translates the input into a MIP model.
    pub fn build(&self) -> (MipModel, ColumnLayout) {
        let n = self.input.volunteers();
        let t = self.input.shifts();
        let pairs = self.input.day_pairs();
        let config = &self.config;
        let (above_factor, below_factor) = config.deviation_penalty.factors();

        let mut model = MipModel::new();

        // z[i,j], row-major. Unavailable cells are either pinned to
        // zero (strict) or charged alpha per use (penalized).
        for i in 0..n {
            for j in 0..t {
                let unavailable = !self.input.is_available(i, j);
                let objective = match config.availability_policy {
                    AvailabilityPolicy::Penalized if unavailable => config.alpha,
                    _ => 0.0,
                };
                let column = model.add_binary(objective);
                if unavailable && config.availability_policy == AvailabilityPolicy::Strict {
                    model.pin_to_zero(column);
                }
            }
        }

        let max_load = model.add_continuous(1.0, 0.0, t as f64);
        let dev_above = n * t + 1;
        for _ in 0..n {
            model.add_continuous(config.beta * above_factor, 0.0, t as f64);
        }
        let dev_below = dev_above + n;
        for _ in 0..n {
            model.add_continuous(config.beta * below_factor, 0.0, t as f64);
        }
        let same_day = dev_below + n;
        for _ in 0..n * pairs {
            model.add_continuous(-config.gamma, 0.0, 1.0);
        }

        let layout = ColumnLayout {
            n,
            t,
            pairs,
            max_load,
            dev_above,
            dev_below,
            same_day,
        };

        // Staffing: column sums hit the threshold.
        for j in 0..t {
            let coefficients: Vec<_> = (0..n).map(|i| (layout.z(i, j), 1.0)).collect();
            match config.staffing_rule {
                StaffingRule::Exact => {
                    model.add_row_eq(coefficients, f64::from(config.min_staff));
                }
                StaffingRule::AtLeast => {
                    model.add_row_geq(coefficients, f64::from(config.min_staff));
                }
            }
        }

        // At least one manager per shift.
        if config.require_manager && !self.input.managers.is_empty() {
            for j in 0..t {
                let coefficients: Vec<_> = self
                    .input
                    .managers
                    .iter()
                    .map(|&i| (layout.z(i, j), 1.0))
                    .collect();
                model.add_row_geq(coefficients, 1.0);
            }
        }

        // m - Σ_j z[i,j] >= 0 for every volunteer.
        for i in 0..n {
            let mut coefficients = vec![(layout.max_load(), 1.0)];
            coefficients.extend((0..t).map(|j| (layout.z(i, j), -1.0)));
            model.add_row_geq(coefficients, 0.0);
        }

        // dev⁺[i] - load_i + mean >= 0 and dev⁻[i] + load_i - mean >= 0,
        // with mean = (Σ_kj z) / N expanded into per-cell coefficients.
        if n > 0 {
            let mean_share = 1.0 / n as f64;
            for i in 0..n {
                let mut above = vec![(layout.dev_above(i), 1.0)];
                let mut below = vec![(layout.dev_below(i), 1.0)];
                for k in 0..n {
                    for j in 0..t {
                        let own = if k == i { 1.0 } else { 0.0 };
                        above.push((layout.z(k, j), mean_share - own));
                        below.push((layout.z(k, j), own - mean_share));
                    }
                }
                model.add_row_geq(above, 0.0);
                model.add_row_geq(below, 0.0);
            }
        }

        // s[i,d] <= both halves of day d.
        for i in 0..n {
            for d in 0..pairs {
                model.add_row_leq(
                    vec![(layout.same_day(i, d), 1.0), (layout.z(i, 2 * d), -1.0)],
                    0.0,
                );
                model.add_row_leq(
                    vec![(layout.same_day(i, d), 1.0), (layout.z(i, 2 * d + 1), -1.0)],
                    0.0,
                );
            }
        }

        (model, layout)
    }

    /// Builds the model, runs one blocking solve, and decodes the result.
    pub fn solve<B: MipBackend>(&self, backend: &B) -> SolveOutcome {
        let (model, layout) = self.build();
        log::info!(
            "built MIP model: {} columns, {} rows ({} volunteers x {} shifts, min_staff {})",
            model.column_count(),
            model.row_count(),
            layout.n,
            layout.t,
            self.config.min_staff
        );

        let options = BackendOptions {
            time_limit: self.config.time_limit,
            verbose: self.config.solver_output,
        };

        let start = Instant::now();
        let result = backend.solve(&model, &options);
        let wall_time_ms = start.elapsed().as_millis() as u64;

        let mut status = result.status;
        let assignment = match (status, result.values) {
            (SolveStatus::Optimal | SolveStatus::FeasibleTimeLimited, Some(values)) => {
                let assignment = self.decode(&layout, &values);
                if status == SolveStatus::FeasibleTimeLimited
                    && !assignment.satisfies_hard_constraints(self.input, &self.config)
                {
                    // The cutoff left the backend without a real
                    // incumbent; do not present the point as feasible.
                    status = SolveStatus::SolverError;
                    None
                } else {
                    Some(assignment)
                }
            }
            (SolveStatus::Optimal | SolveStatus::FeasibleTimeLimited, None) => {
                status = SolveStatus::SolverError;
                None
            }
            _ => None,
        };

        match status {
            SolveStatus::FeasibleTimeLimited => {
                log::warn!(
                    "time limit reached before optimality was proven; returning best incumbent"
                );
            }
            SolveStatus::Infeasible => {
                log::warn!(
                    "no feasible assignment: a staffing minimum of {} may be unreachable \
                     for the given availability",
                    self.config.min_staff
                );
            }
            _ => {}
        }

        SolveOutcome {
            status,
            backend: backend.name().to_string(),
            wall_time_ms,
            config: self.config.clone(),
            assignment,
        }
    }

    /// Rounds the z block of a solution vector into an assignment.
    fn decode(&self, layout: &ColumnLayout, values: &[f64]) -> RosterAssignment {
        let matrix: Vec<Vec<bool>> = (0..layout.n)
            .map(|i| (0..layout.t).map(|j| values[layout.z(i, j)] > 0.5).collect())
            .collect();
        RosterAssignment::evaluate(matrix, self.input, &self.config)
    }
}
