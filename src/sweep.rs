//! Weight-tuning sweeps.
//!
//! The objective weights are tuned empirically, not derived: the usual
//! workflow is to fix `alpha` and `beta`, sweep `gamma` over a small
//! range, and eyeball the reports. Sweep iterations are independent,
//! sequential solves; results come back in input order.

use crate::builder::RosterModelBuilder;
use crate::mip::MipBackend;
use crate::models::{RosterInput, SolveConfig, SolveOutcome};

/// Solves once per gamma value, holding the rest of `base` fixed.
pub fn sweep_gamma<B: MipBackend>(
    input: &RosterInput,
    base: &SolveConfig,
    gammas: &[f64],
    backend: &B,
) -> Vec<SolveOutcome> {
    let mut outcomes = Vec::with_capacity(gammas.len());

    for &gamma in gammas {
        let config = base.clone().with_gamma(gamma);
        let outcome = RosterModelBuilder::new(input)
            .with_config(config)
            .solve(backend);

        match &outcome.assignment {
            Some(assignment) => log::info!(
                "gamma = {:.3}: {}, load_cost {}, same-day pairs {}",
                gamma,
                outcome.status,
                assignment.objective.load_cost,
                assignment.objective.same_day_bonus.raw
            ),
            None => log::info!("gamma = {:.3}: {}", gamma, outcome.status),
        }

        outcomes.push(outcome);
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mip::{MicrolpBackend, SolveStatus};

    #[test]
    fn test_sweep_preserves_order_and_configs() {
        let input = RosterInput::new(
            vec![vec![true; 2]; 4],
            vec![vec![false; 2]; 4],
            vec![0; 4],
            Vec::new(),
        );
        let base = SolveConfig::new(2).with_manager_requirement(false);
        let gammas = [0.2, 0.28, 0.36];

        let outcomes = sweep_gamma(&input, &base, &gammas, &MicrolpBackend);

        assert_eq!(outcomes.len(), 3);
        for (outcome, &gamma) in outcomes.iter().zip(&gammas) {
            assert_eq!(outcome.status, SolveStatus::Optimal);
            assert!((outcome.config.gamma - gamma).abs() < 1e-10);
            // Base weights are untouched.
            assert!((outcome.config.beta - 0.7).abs() < 1e-10);
        }
    }

    #[test]
    fn test_sweep_reports_infeasible_iterations() {
        let input = RosterInput::new(
            vec![vec![true, false]],
            vec![vec![false, false]],
            vec![0],
            Vec::new(),
        );
        let base = SolveConfig::new(1).with_manager_requirement(false);

        let outcomes = sweep_gamma(&input, &base, &[0.1, 0.3], &MicrolpBackend);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|o| o.status == SolveStatus::Infeasible));
    }
}
