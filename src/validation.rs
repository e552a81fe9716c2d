//! Input validation for rostering problems.
//!
//! Checks structural integrity of the input matrices and the solve
//! configuration before any model is built. Detects:
//! - Empty or ragged matrices
//! - Manager indices outside the volunteer range
//! - Preference cells without the matching availability
//! - Negative objective weights
//! - Staffing minimums that no assignment can reach

use crate::models::{AvailabilityPolicy, RosterInput, SolveConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No volunteers or no shifts.
    EmptyRoster,
    /// Matrices, the load vector, or the name list disagree on shape.
    ShapeMismatch,
    /// A manager index points past the last volunteer.
    ManagerIndexOutOfRange,
    /// A preference bit is set where availability is not.
    PreferenceWithoutAvailability,
    /// A weight is negative.
    InvalidWeight,
    /// A shift has fewer available volunteers than the staffing minimum.
    UnreachableStaffing,
    /// Manager presence is required but nobody is flagged as manager.
    NoManagers,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a rostering input against a solve configuration.
///
/// Checks:
/// 1. At least one volunteer and one shift
/// 2. Availability, preference, prior-week, and name shapes agree
/// 3. Manager indices are in range
/// 4. Preference implies availability
/// 5. Weights are non-negative
/// 6. Under the strict policy, every shift has enough available
///    volunteers to reach `min_staff` (otherwise the solve is
///    infeasible before it starts)
/// 7. If a manager is required on every shift, at least one exists
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &RosterInput, config: &SolveConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let n = input.volunteers();
    let t = input.shifts();

    if n == 0 || t == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            format!("roster has {n} volunteers and {t} shifts"),
        ));
        return Err(errors);
    }

    for (label, ok) in [
        (
            "preference",
            input.preference.len() == n && input.preference.iter().all(|row| row.len() == t),
        ),
        (
            "availability",
            input.available.iter().all(|row| row.len() == t),
        ),
        ("prior-week loads", input.prior_week.len() == n),
        (
            "names",
            input.names.as_ref().map_or(true, |names| names.len() == n),
        ),
    ] {
        if !ok {
            errors.push(ValidationError::new(
                ValidationErrorKind::ShapeMismatch,
                format!("{label} shape disagrees with {n} volunteers x {t} shifts"),
            ));
        }
    }
    if !errors.is_empty() {
        // Cell checks below index into the matrices; stop here.
        return Err(errors);
    }

    for &manager in &input.managers {
        if manager >= n {
            errors.push(ValidationError::new(
                ValidationErrorKind::ManagerIndexOutOfRange,
                format!("manager index {manager} exceeds volunteer count {n}"),
            ));
        }
    }

    for i in 0..n {
        for j in 0..t {
            if input.prefers(i, j) && !input.is_available(i, j) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PreferenceWithoutAvailability,
                    format!("volunteer {i} prefers shift {j} but is not available for it"),
                ));
            }
        }
    }

    for (name, weight) in [
        ("alpha", config.alpha),
        ("beta", config.beta),
        ("gamma", config.gamma),
    ] {
        if weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("{name} is negative ({weight})"),
            ));
        }
    }

    match config.availability_policy {
        AvailabilityPolicy::Strict => {
            for j in 0..t {
                let reachable = input.available_count(j);
                if reachable < config.min_staff as usize {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnreachableStaffing,
                        format!(
                            "shift {} has {} available volunteers, below min_staff {}",
                            j + 1,
                            reachable,
                            config.min_staff
                        ),
                    ));
                }
            }
        }
        AvailabilityPolicy::Penalized => {
            // Availability no longer caps a column; only headcount does.
            if n < config.min_staff as usize {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnreachableStaffing,
                    format!(
                        "only {n} volunteers exist, below min_staff {}",
                        config.min_staff
                    ),
                ));
            }
        }
    }

    if config.require_manager && input.managers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoManagers,
            "manager presence required but no volunteer is flagged as manager",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
