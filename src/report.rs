//! Human-readable solve reports.
//!
//! Renders a solve outcome as plain text for console inspection: the
//! solver diagnostics, each objective term raw and weight-normalized,
//! per-shift and per-volunteer totals, and the assignment grid. A
//! companion roster view pairs the two shifts of each day side by side
//! and annotates every row with the volunteer's display name.
//!
//! The output is for people, not programs; nothing here is a stable
//! machine-parseable schema.

use std::fmt::Write;

use crate::mip::SolveStatus;
use crate::models::{RosterInput, SolveOutcome, WeightedTerm};

/// Renders the full diagnostic report for a solve.
pub fn render_report(outcome: &SolveOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "backend: {}  status: {}  wall time: {} ms",
        outcome.backend, outcome.status, outcome.wall_time_ms
    );

    let Some(assignment) = &outcome.assignment else {
        match outcome.status {
            SolveStatus::Infeasible => {
                let _ = writeln!(out, "no assignment satisfies the hard constraints.");
                let _ = writeln!(
                    out,
                    "hint: a staffing minimum of {} per shift may be unreachable \
                     for the given availability; lower it or recruit more volunteers.",
                    outcome.config.min_staff
                );
            }
            _ => {
                let _ = writeln!(out, "the solver backend produced no usable solution.");
            }
        }
        return out;
    };

    if outcome.status == SolveStatus::FeasibleTimeLimited {
        let _ = writeln!(
            out,
            "warning: optimality not proven within the time limit; \
             this is the best schedule found so far."
        );
    }

    let objective = &assignment.objective;
    let _ = writeln!(out, "\n[load_cost]: {}", objective.load_cost);
    write_term(&mut out, "penalty_1", "alpha", &objective.penalty_1);
    write_term(&mut out, "penalty_2", "beta", &objective.penalty_2);
    write_term(&mut out, "same_day_bonus", "gamma", &objective.same_day_bonus);
    let _ = writeln!(out, "[objective]: {:.6}", objective.total);

    let _ = writeln!(out, "\n[staff per shift]: {}", join_counts(&assignment.staffing));
    let _ = writeln!(
        out,
        "[shifts per volunteer]: {}",
        join_counts(&assignment.loads)
    );

    let _ = writeln!(out, "\n[assignment]:");
    for (i, row) in assignment.matrix.iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(|&z| if z { "1" } else { "0" }).collect();
        let _ = writeln!(out, "{:02}: {}", i + 1, cells.join(" "));
    }

    out
}

/// Renders the end-user roster: one line per volunteer, shifts grouped
/// into day pairs, annotated with the display name.
///
/// A trailing unpaired shift is appended after the last separator.
pub fn render_roster(outcome: &SolveOutcome, input: &RosterInput) -> String {
    let mut out = String::new();

    let Some(assignment) = &outcome.assignment else {
        let _ = writeln!(out, "no schedule: {}", outcome.status);
        return out;
    };

    for (i, row) in assignment.matrix.iter().enumerate() {
        let mut days: Vec<String> = (0..row.len() / 2)
            .map(|d| format!("{} {}", mark(row[2 * d]), mark(row[2 * d + 1])))
            .collect();
        if row.len() % 2 == 1 {
            days.push(mark(row[row.len() - 1]).to_string());
        }
        let name = input
            .name(i)
            .map(str::to_string)
            .unwrap_or_else(|| format!("volunteer {:02}", i + 1));
        let _ = writeln!(out, "[ {} ]: {}", days.join(" | "), name);
    }

    out
}

/// Renders the input matrices, for inspection before a solve.
pub fn render_input(input: &RosterInput) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} volunteers x {} shifts, {} managers",
        input.volunteers(),
        input.shifts(),
        input.managers.len()
    );

    let _ = writeln!(out, "\n[available]:");
    write_bool_grid(&mut out, &input.available);
    let _ = writeln!(out, "\n[preference]:");
    write_bool_grid(&mut out, &input.preference);

    out
}

fn write_term(out: &mut String, label: &str, weight_name: &str, term: &WeightedTerm) {
    let _ = writeln!(
        out,
        "[{}]: ({} = {:.2}) * {:.6} = {:.6}",
        label, weight_name, term.weight, term.raw, term.weighted
    );
}

fn write_bool_grid(out: &mut String, grid: &[Vec<bool>]) {
    for (i, row) in grid.iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(|&b| if b { "1" } else { "0" }).collect();
        let _ = writeln!(out, "{:02}: {}", i + 1, cells.join(" "));
    }
}

fn join_counts(counts: &[u32]) -> String {
    counts
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn mark(assigned: bool) -> &'static str {
    if assigned {
        "x"
    } else {
        "."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RosterModelBuilder;
    use crate::mip::{MicrolpBackend, SolveStatus};
    use crate::models::{RosterInput, SolveConfig};

    fn solved_outcome() -> (SolveOutcome, RosterInput) {
        let input = RosterInput::new(
            vec![vec![true; 2]; 4],
            vec![vec![false; 2]; 4],
            vec![0; 4],
            vec![0],
        )
        .with_names(vec![
            "#Ana".into(),
            "Bruno".into(),
            "Carla".into(),
            "Davi".into(),
        ]);
        let config = SolveConfig::new(2);
        let outcome = RosterModelBuilder::new(&input)
            .with_config(config)
            .solve(&MicrolpBackend);
        (outcome, input)
    }

    #[test]
    fn test_report_lists_terms_and_totals() {
        let (outcome, _input) = solved_outcome();
        let report = render_report(&outcome);

        assert!(report.contains("status: optimal"));
        assert!(report.contains("[load_cost]"));
        assert!(report.contains("(alpha = 1.00)"));
        assert!(report.contains("(beta = 0.70)"));
        assert!(report.contains("(gamma = 0.28)"));
        assert!(report.contains("[staff per shift]: 2 2"));
        assert!(report.contains("01:"));
    }

    #[test]
    fn test_roster_view_shows_names_and_pairs() {
        let (outcome, input) = solved_outcome();
        let roster = render_roster(&outcome, &input);

        assert!(roster.contains("#Ana"));
        assert!(roster.contains("Davi"));
        // Two shifts form one day pair: "x x", "x .", ". x" or ". .".
        assert!(roster.lines().all(|line| line.starts_with("[ ")));
        assert_eq!(roster.lines().count(), 4);
    }

    #[test]
    fn test_roster_view_without_names_numbers_rows() {
        let (outcome, mut input) = solved_outcome();
        input.names = None;
        let roster = render_roster(&outcome, &input);
        assert!(roster.contains("volunteer 01"));
    }

    #[test]
    fn test_time_limited_report_carries_warning() {
        let (mut outcome, _input) = solved_outcome();
        outcome.status = SolveStatus::FeasibleTimeLimited;
        let report = render_report(&outcome);

        assert!(report.contains("status: feasible (time limit reached)"));
        assert!(report.contains("optimality not proven"));
        // The schedule itself is still printed.
        assert!(report.contains("[assignment]:"));
    }

    #[test]
    fn test_infeasible_report_carries_hint() {
        let input = RosterInput::new(
            vec![vec![true], vec![false]],
            vec![vec![false]; 2],
            vec![0; 2],
            Vec::new(),
        );
        let config = SolveConfig::new(2).with_manager_requirement(false);
        let outcome = RosterModelBuilder::new(&input)
            .with_config(config)
            .solve(&MicrolpBackend);
        let report = render_report(&outcome);

        assert!(report.contains("status: infeasible"));
        assert!(report.contains("staffing minimum of 2"));
        assert!(report.contains("unreachable"));
    }

    #[test]
    fn test_input_rendering() {
        let (_, input) = solved_outcome();
        let rendered = render_input(&input);
        assert!(rendered.contains("4 volunteers x 2 shifts, 1 managers"));
        assert!(rendered.contains("[available]"));
        assert!(rendered.contains("[preference]"));
    }
}
