//! Solve result bundle.
//!
//! A solve produces a portable status plus, when a usable solution
//! exists, the 0/1 assignment matrix with its derived row/column sums
//! and the value of every objective term. Term values are recomputed
//! from the integral matrix rather than read back from auxiliary
//! solver variables, so they are exact.

use serde::{Deserialize, Serialize};

use super::{AvailabilityPolicy, SolveConfig, StaffingRule};
use crate::mip::SolveStatus;
use crate::models::RosterInput;

/// The outcome of one rostering solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutcome {
    /// Portable solver status.
    pub status: SolveStatus,
    /// Name of the backend that performed the solve.
    pub backend: String,
    /// Wall-clock solve time in milliseconds.
    pub wall_time_ms: u64,
    /// The configuration the solve ran with.
    pub config: SolveConfig,
    /// The assignment, present for optimal and time-limited-feasible solves.
    pub assignment: Option<RosterAssignment>,
}

impl SolveOutcome {
    /// Whether this outcome carries a schedule fit for use.
    pub fn is_usable(&self) -> bool {
        matches!(
            self.status,
            SolveStatus::Optimal | SolveStatus::FeasibleTimeLimited
        ) && self.assignment.is_some()
    }
}

/// A solved assignment: the decision matrix and everything derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterAssignment {
    /// `matrix[i][j]` is true when volunteer `i` works shift `j`.
    pub matrix: Vec<Vec<bool>>,
    /// Row sums: shifts per volunteer.
    pub loads: Vec<u32>,
    /// Column sums: volunteers per shift.
    pub staffing: Vec<u32>,
    /// Scalar value of each objective term.
    pub objective: ObjectiveBreakdown,
}

/// The objective, split into its terms.
///
/// Objective = load_cost + penalty_1 + penalty_2 − same_day_bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveBreakdown {
    /// Maximum shifts assigned to any single volunteer (L∞ of the loads).
    pub load_cost: f64,
    /// Availability violations, weighted by `alpha`.
    pub penalty_1: WeightedTerm,
    /// Deviation of loads from the mean load, weighted by `beta`.
    pub penalty_2: WeightedTerm,
    /// Same-day (both halves) pairings, weighted by `gamma`.
    pub same_day_bonus: WeightedTerm,
    /// Combined objective value.
    pub total: f64,
}

/// One weighted objective term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightedTerm {
    /// Configured weight.
    pub weight: f64,
    /// Unweighted term value.
    pub raw: f64,
    /// `weight * raw`.
    pub weighted: f64,
}

impl WeightedTerm {
    fn new(weight: f64, raw: f64) -> Self {
        Self {
            weight,
            raw,
            weighted: weight * raw,
        }
    }
}

impl RosterAssignment {
    /// Derives loads, staffing, and the objective breakdown from a matrix.
    pub fn evaluate(matrix: Vec<Vec<bool>>, input: &RosterInput, config: &SolveConfig) -> Self {
        let n = matrix.len();
        let t = matrix.first().map_or(0, |row| row.len());

        let loads: Vec<u32> = matrix
            .iter()
            .map(|row| row.iter().filter(|&&z| z).count() as u32)
            .collect();
        let staffing: Vec<u32> = (0..t)
            .map(|j| matrix.iter().filter(|row| row[j]).count() as u32)
            .collect();

        let load_cost = loads.iter().copied().max().unwrap_or(0) as f64;

        // penalty_1: assignments outside availability. Zero by
        // construction under the strict policy.
        let violations = matrix
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(j, &z)| z && !input.is_available(i, j))
            })
            .count() as f64;

        // penalty_2: per-volunteer deviation from the mean load.
        let total_assigned: u32 = loads.iter().sum();
        let mean = if n == 0 {
            0.0
        } else {
            f64::from(total_assigned) / n as f64
        };
        let (above_factor, below_factor) = config.deviation_penalty.factors();
        let deviation: f64 = loads
            .iter()
            .map(|&load| {
                let dev = f64::from(load) - mean;
                above_factor * dev.max(0.0) + below_factor * (-dev).max(0.0)
            })
            .sum();

        // same_day_bonus: complete day pairs worked by one volunteer.
        let pairs: f64 = matrix
            .iter()
            .map(|row| {
                (0..t / 2)
                    .filter(|&d| row[2 * d] && row[2 * d + 1])
                    .count() as f64
            })
            .sum();

        let penalty_1 = WeightedTerm::new(config.alpha, violations);
        let penalty_2 = WeightedTerm::new(config.beta, deviation);
        let same_day_bonus = WeightedTerm::new(config.gamma, pairs);
        let total =
            load_cost + penalty_1.weighted + penalty_2.weighted - same_day_bonus.weighted;

        Self {
            matrix,
            loads,
            staffing,
            objective: ObjectiveBreakdown {
                load_cost,
                penalty_1,
                penalty_2,
                same_day_bonus,
                total,
            },
        }
    }

    /// Whether the matrix satisfies the configured hard constraints.
    ///
    /// Used to vet incumbents returned by a time-limited solve before
    /// presenting them as feasible.
    pub fn satisfies_hard_constraints(&self, input: &RosterInput, config: &SolveConfig) -> bool {
        if config.availability_policy == AvailabilityPolicy::Strict {
            let respects_availability = self.matrix.iter().enumerate().all(|(i, row)| {
                row.iter()
                    .enumerate()
                    .all(|(j, &z)| !z || input.is_available(i, j))
            });
            if !respects_availability {
                return false;
            }
        }

        let staffed = self.staffing.iter().all(|&count| match config.staffing_rule {
            StaffingRule::Exact => count == config.min_staff,
            StaffingRule::AtLeast => count >= config.min_staff,
        });
        if !staffed {
            return false;
        }

        if config.require_manager && !input.managers.is_empty() {
            let covered = (0..input.shifts()).all(|j| {
                input
                    .managers
                    .iter()
                    .any(|&i| self.matrix.get(i).is_some_and(|row| row[j]))
            });
            if !covered {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeviationPenalty;

    fn uniform_input(n: usize, t: usize) -> RosterInput {
        RosterInput::new(
            vec![vec![true; t]; n],
            vec![vec![false; t]; n],
            vec![0; n],
            vec![0],
        )
    }

    #[test]
    fn test_row_and_column_sums() {
        let input = uniform_input(3, 2);
        let matrix = vec![
            vec![true, true],
            vec![true, false],
            vec![false, false],
        ];
        let assignment = RosterAssignment::evaluate(matrix, &input, &SolveConfig::new(1));

        assert_eq!(assignment.loads, vec![2, 1, 0]);
        assert_eq!(assignment.staffing, vec![2, 1]);
        assert!((assignment.objective.load_cost - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_asymmetric_deviation() {
        let input = uniform_input(3, 2);
        let config = SolveConfig::new(1).with_weights(1.0, 0.7, 0.0);
        // Loads 2, 1, 0 with mean 1: above = 1.8 * 1, below = 1.0 * 1.
        let matrix = vec![
            vec![true, true],
            vec![true, false],
            vec![false, false],
        ];
        let assignment = RosterAssignment::evaluate(matrix, &input, &config);

        assert!((assignment.objective.penalty_2.raw - 2.8).abs() < 1e-10);
        assert!((assignment.objective.penalty_2.weighted - 0.7 * 2.8).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric_deviation() {
        let input = uniform_input(3, 2);
        let config = SolveConfig::new(1)
            .with_deviation_penalty(DeviationPenalty::Symmetric)
            .with_weights(1.0, 1.0, 0.0);
        let matrix = vec![
            vec![true, true],
            vec![true, false],
            vec![false, false],
        ];
        let assignment = RosterAssignment::evaluate(matrix, &input, &config);

        // |2-1| + |1-1| + |0-1| = 2.
        assert!((assignment.objective.penalty_2.raw - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_same_day_bonus_counts_pairs() {
        let input = uniform_input(2, 4);
        let matrix = vec![
            vec![true, true, true, false],
            vec![false, false, true, true],
        ];
        let assignment = RosterAssignment::evaluate(matrix, &input, &SolveConfig::new(1));

        // Volunteer 0 pairs day 0; volunteer 1 pairs day 1.
        assert!((assignment.objective.same_day_bonus.raw - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_penalty_1_counts_violations() {
        let mut input = uniform_input(2, 2);
        input.available[1] = vec![false, false];
        let config = SolveConfig::new(1)
            .with_availability_policy(AvailabilityPolicy::Penalized)
            .with_weights(2.0, 0.0, 0.0);
        let matrix = vec![vec![true, false], vec![false, true]];
        let assignment = RosterAssignment::evaluate(matrix, &input, &config);

        assert!((assignment.objective.penalty_1.raw - 1.0).abs() < 1e-10);
        assert!((assignment.objective.penalty_1.weighted - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_hard_constraint_check() {
        let input = uniform_input(3, 2);
        let config = SolveConfig::new(1).with_manager_requirement(true);

        let good = RosterAssignment::evaluate(
            vec![vec![true, true], vec![false, false], vec![false, false]],
            &input,
            &config,
        );
        assert!(good.satisfies_hard_constraints(&input, &config));

        // Shift 1 misses the manager (volunteer 0) and over-staffs.
        let bad = RosterAssignment::evaluate(
            vec![vec![true, false], vec![false, true], vec![false, true]],
            &input,
            &config,
        );
        assert!(!bad.satisfies_hard_constraints(&input, &config));
    }
}
