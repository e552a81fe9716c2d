//! Solve configuration.
//!
//! Collects the staffing threshold, the policy variants (strict vs.
//! penalized availability, exact vs. at-least staffing, asymmetric vs.
//! symmetric load deviation), the scalar objective weights, and the
//! optional solver time limit. Weights are meant to be tuned
//! empirically; see the `sweep` module.

use serde::{Deserialize, Serialize};

/// How availability is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityPolicy {
    /// Hard constraint: an assignment outside availability is forbidden.
    Strict,
    /// Soft constraint: each assignment outside availability costs `alpha`.
    Penalized,
}

/// How the per-shift staffing threshold is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffingRule {
    /// Every shift gets exactly `min_staff` volunteers.
    Exact,
    /// Every shift gets at least `min_staff` volunteers.
    AtLeast,
}

/// Shape of the deviation-from-mean-load penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DeviationPenalty {
    /// Charges `above` per unit load over the mean and `below` per unit
    /// under it. Charging more above the mean discourages overloading.
    Asymmetric { above: f64, below: f64 },
    /// Plain absolute deviation from the mean.
    Symmetric,
}

impl DeviationPenalty {
    /// The (above-mean, below-mean) unit charges.
    pub fn factors(&self) -> (f64, f64) {
        match *self {
            DeviationPenalty::Asymmetric { above, below } => (above, below),
            DeviationPenalty::Symmetric => (1.0, 1.0),
        }
    }
}

/// Configuration for one rostering solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Staffing threshold per shift.
    pub min_staff: u32,
    /// Exact or at-least staffing.
    pub staffing_rule: StaffingRule,
    /// Hard or penalized availability.
    pub availability_policy: AvailabilityPolicy,
    /// Require at least one manager on every shift.
    pub require_manager: bool,
    /// Shape of the load-deviation penalty.
    pub deviation_penalty: DeviationPenalty,
    /// Weight of the availability-violation penalty (penalized policy only).
    pub alpha: f64,
    /// Weight of the load-deviation penalty.
    pub beta: f64,
    /// Weight of the same-day pairing bonus.
    pub gamma: f64,
    /// Wall-clock solver budget in seconds. `None` solves to optimality.
    pub time_limit: Option<f64>,
    /// Let the backend print its own progress log.
    pub solver_output: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            min_staff: 5,
            staffing_rule: StaffingRule::Exact,
            availability_policy: AvailabilityPolicy::Strict,
            require_manager: true,
            deviation_penalty: DeviationPenalty::Asymmetric {
                above: 1.8,
                below: 1.0,
            },
            alpha: 1.0,
            beta: 0.7,
            gamma: 0.28,
            time_limit: None,
            solver_output: false,
        }
    }
}

impl SolveConfig {
    /// Creates a configuration with the default weights.
    pub fn new(min_staff: u32) -> Self {
        Self {
            min_staff,
            ..Self::default()
        }
    }

    /// Sets the staffing rule.
    pub fn with_staffing_rule(mut self, rule: StaffingRule) -> Self {
        self.staffing_rule = rule;
        self
    }

    /// Sets the availability policy.
    pub fn with_availability_policy(mut self, policy: AvailabilityPolicy) -> Self {
        self.availability_policy = policy;
        self
    }

    /// Enables or disables the manager-per-shift requirement.
    pub fn with_manager_requirement(mut self, required: bool) -> Self {
        self.require_manager = required;
        self
    }

    /// Sets the deviation penalty shape.
    pub fn with_deviation_penalty(mut self, penalty: DeviationPenalty) -> Self {
        self.deviation_penalty = penalty;
        self
    }

    /// Sets all three objective weights at once.
    pub fn with_weights(mut self, alpha: f64, beta: f64, gamma: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self.gamma = gamma;
        self
    }

    /// Sets the same-day bonus weight.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the solver time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolveConfig::default();
        assert_eq!(config.min_staff, 5);
        assert_eq!(config.staffing_rule, StaffingRule::Exact);
        assert_eq!(config.availability_policy, AvailabilityPolicy::Strict);
        assert!(config.require_manager);
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 0.7).abs() < 1e-10);
        assert!((config.gamma - 0.28).abs() < 1e-10);
        assert!(config.time_limit.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = SolveConfig::new(7)
            .with_staffing_rule(StaffingRule::AtLeast)
            .with_availability_policy(AvailabilityPolicy::Penalized)
            .with_manager_requirement(false)
            .with_weights(2.0, 0.5, 0.3)
            .with_time_limit(15.0);

        assert_eq!(config.min_staff, 7);
        assert_eq!(config.staffing_rule, StaffingRule::AtLeast);
        assert_eq!(config.availability_policy, AvailabilityPolicy::Penalized);
        assert!(!config.require_manager);
        assert!((config.alpha - 2.0).abs() < 1e-10);
        assert_eq!(config.time_limit, Some(15.0));
    }

    #[test]
    fn test_deviation_factors() {
        let asym = DeviationPenalty::Asymmetric {
            above: 1.8,
            below: 1.0,
        };
        assert_eq!(asym.factors(), (1.8, 1.0));
        assert_eq!(DeviationPenalty::Symmetric.factors(), (1.0, 1.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SolveConfig::new(3).with_gamma(0.32);
        let json = serde_json::to_string(&config).unwrap();
        let back: SolveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.min_staff, 3);
        assert!((back.gamma - 0.32).abs() < 1e-10);
    }
}
