//! Rostering problem input.
//!
//! The input is a pair of N×T boolean matrices (availability and
//! preference), a prior-week load vector, and the set of volunteers
//! flagged as managers. All of it is read once and never mutated;
//! every matrix of a given instance shares the same shape.

use serde::{Deserialize, Serialize};

/// The input to a rostering solve: who can (and wants to) work which shift.
///
/// Shifts come in day pairs: shift `2d` and `2d + 1` are the two halves
/// (e.g., lunch and dinner) of day `d`. A trailing unpaired shift is
/// allowed; it simply contributes no same-day pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInput {
    /// `available[i][j]`: volunteer `i` can work shift `j`.
    pub available: Vec<Vec<bool>>,
    /// `preference[i][j]`: volunteer `i` prefers shift `j`.
    /// The table vocabulary guarantees preference implies availability.
    pub preference: Vec<Vec<bool>>,
    /// Shifts worked by each volunteer in the previous period.
    ///
    /// Parsed and carried along, but not consumed by any constraint or
    /// objective term yet; reserved for cross-week fairness.
    pub prior_week: Vec<u32>,
    /// Indices of volunteers who count as supervising managers.
    pub managers: Vec<usize>,
    /// Optional display names, one per volunteer, in row order.
    pub names: Option<Vec<String>>,
}

impl RosterInput {
    /// Creates an input from pre-built matrices.
    pub fn new(
        available: Vec<Vec<bool>>,
        preference: Vec<Vec<bool>>,
        prior_week: Vec<u32>,
        managers: Vec<usize>,
    ) -> Self {
        Self {
            available,
            preference,
            prior_week,
            managers,
            names: None,
        }
    }

    /// Attaches display names.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Number of volunteers (N).
    pub fn volunteers(&self) -> usize {
        self.available.len()
    }

    /// Number of shifts (T).
    pub fn shifts(&self) -> usize {
        self.available.first().map_or(0, |row| row.len())
    }

    /// Number of complete day pairs (⌊T/2⌋).
    pub fn day_pairs(&self) -> usize {
        self.shifts() / 2
    }

    /// Whether volunteer `i` can work shift `j`.
    pub fn is_available(&self, i: usize, j: usize) -> bool {
        self.available[i][j]
    }

    /// Whether volunteer `i` prefers shift `j`.
    pub fn prefers(&self, i: usize, j: usize) -> bool {
        self.preference[i][j]
    }

    /// Whether volunteer `i` is a manager.
    pub fn is_manager(&self, i: usize) -> bool {
        self.managers.contains(&i)
    }

    /// Display name for volunteer `i`, if names were provided.
    pub fn name(&self, i: usize) -> Option<&str> {
        self.names.as_ref().and_then(|n| n.get(i)).map(String::as_str)
    }

    /// How many volunteers are available for shift `j`.
    pub fn available_count(&self, j: usize) -> usize {
        self.available.iter().filter(|row| row[j]).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RosterInput {
        RosterInput::new(
            vec![vec![true, true], vec![true, false]],
            vec![vec![false, true], vec![false, false]],
            vec![2, 0],
            vec![1],
        )
        .with_names(vec!["#Ana".into(), "Bruno".into()])
    }

    #[test]
    fn test_shape_accessors() {
        let input = sample();
        assert_eq!(input.volunteers(), 2);
        assert_eq!(input.shifts(), 2);
        assert_eq!(input.day_pairs(), 1);
    }

    #[test]
    fn test_cell_accessors() {
        let input = sample();
        assert!(input.is_available(0, 1));
        assert!(!input.is_available(1, 1));
        assert!(input.prefers(0, 1));
        assert!(!input.prefers(1, 0));
    }

    #[test]
    fn test_manager_and_names() {
        let input = sample();
        assert!(input.is_manager(1));
        assert!(!input.is_manager(0));
        assert_eq!(input.name(0), Some("#Ana"));
        assert_eq!(input.name(5), None);
    }

    #[test]
    fn test_available_count() {
        let input = sample();
        assert_eq!(input.available_count(0), 2);
        assert_eq!(input.available_count(1), 1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let input = sample();
        let json = serde_json::to_string(&input).unwrap();
        let back: RosterInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.volunteers(), input.volunteers());
        assert_eq!(back.managers, input.managers);
        assert_eq!(back.prior_week, input.prior_week);
    }
}
