//! Rostering domain models.
//!
//! Provides the core data types for representing a volunteer rostering
//! problem and its solution: the immutable input matrices, the solve
//! configuration with its policy variants and objective weights, and
//! the result bundle returned by a solve.

mod config;
mod outcome;
mod roster;

pub use config::{AvailabilityPolicy, DeviationPenalty, SolveConfig, StaffingRule};
pub use outcome::{ObjectiveBreakdown, RosterAssignment, SolveOutcome, WeightedTerm};
pub use roster::RosterInput;
