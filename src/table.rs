//! Availability table parsing.
//!
//! Turns a delimited text table into a [`RosterInput`]. One row per
//! volunteer: the first column is the prior-week shift count, the
//! remaining columns are status tokens from a small fixed vocabulary.
//! An optional companion list provides one display name per row; a
//! leading marker character on a name flags that volunteer as manager.
//!
//! Parsing fails fast: an unrecognized token, a malformed integer, or
//! a row whose width disagrees with the first row is an error, never a
//! silent coercion.

use thiserror::Error;

use crate::models::RosterInput;

/// Table vocabulary and layout.
///
/// The defaults match the spreadsheet convention this crate grew out
/// of: tab-delimited cells, `X` unavailable, `O` available, `OO`
/// available with preference, and `.` / `-` as blank synonyms for
/// unavailable. Names starting with `#` denote managers.
#[derive(Debug, Clone)]
pub struct TableFormat {
    /// Cell delimiter.
    pub delimiter: char,
    /// Token for "cannot work this shift".
    pub impossible: String,
    /// Token for "can work this shift".
    pub available: String,
    /// Token for "can work and prefers this shift".
    pub preference: String,
    /// Blank tokens, treated as synonyms for the impossible token.
    pub blanks: Vec<String>,
    /// Leading character marking a manager name.
    pub manager_marker: char,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            impossible: "X".into(),
            available: "O".into(),
            preference: "OO".into(),
            blanks: vec![".".into(), "-".into()],
            manager_marker: '#',
        }
    }
}

impl TableFormat {
    /// Sets the cell delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the blank tokens.
    pub fn with_blanks(mut self, blanks: Vec<String>) -> Self {
        self.blanks = blanks;
        self
    }

    /// Maps a status token to its (availability, preference) bits.
    ///
    /// Returns `None` for tokens outside the vocabulary. Blank tokens
    /// map like the impossible token.
    pub fn token_bits(&self, token: &str) -> Option<(bool, bool)> {
        if token == self.impossible || self.blanks.iter().any(|blank| blank == token) {
            Some((false, false))
        } else if token == self.available {
            Some((true, false))
        } else if token == self.preference {
            Some((true, true))
        } else {
            None
        }
    }
}

/// Errors raised while parsing an availability table.
///
/// Line numbers are 1-based positions in the raw input, so they match
/// what an editor shows even when blank lines were skipped.
#[derive(Debug, Error)]
pub enum TableError {
    /// A cell held a token outside the vocabulary.
    #[error("line {line}, shift column {column}: unrecognized status token {token:?}")]
    UnknownToken {
        line: usize,
        column: usize,
        token: String,
    },
    /// The prior-week load column did not parse as a non-negative integer.
    #[error("line {line}: invalid prior-week load {value:?}")]
    InvalidLoad { line: usize, value: String },
    /// A row's shift-column count disagreed with the first row.
    #[error("line {line}: expected {expected} shift columns, found {found}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The name list length disagreed with the table row count.
    #[error("expected {rows} volunteer names, found {names}")]
    NameCountMismatch { rows: usize, names: usize },
}

/// Parses an availability table and an optional name list.
///
/// Empty lines are skipped in both inputs; volunteer indices follow
/// retained-row order. When `names` is given it must list exactly one
/// name per retained table row.
pub fn parse_roster(
    table: &str,
    names: Option<&str>,
    format: &TableFormat,
) -> Result<RosterInput, TableError> {
    let mut available = Vec::new();
    let mut preference = Vec::new();
    let mut prior_week = Vec::new();
    let mut shift_count: Option<usize> = None;

    for (line_idx, raw_line) in table.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let line_no = line_idx + 1;

        let mut cells = line.split(format.delimiter);
        // split() always yields at least one cell for a non-empty line.
        let load_cell = cells.next().unwrap_or("");
        let load: u32 = load_cell.parse().map_err(|_| TableError::InvalidLoad {
            line: line_no,
            value: load_cell.to_string(),
        })?;

        let mut available_row = Vec::new();
        let mut preference_row = Vec::new();
        for (column, token) in cells.enumerate() {
            let (avail, pref) =
                format
                    .token_bits(token)
                    .ok_or_else(|| TableError::UnknownToken {
                        line: line_no,
                        column: column + 1,
                        token: token.to_string(),
                    })?;
            available_row.push(avail);
            preference_row.push(pref);
        }

        match shift_count {
            None => shift_count = Some(available_row.len()),
            Some(expected) if expected != available_row.len() => {
                return Err(TableError::RowWidthMismatch {
                    line: line_no,
                    expected,
                    found: available_row.len(),
                });
            }
            Some(_) => {}
        }

        prior_week.push(load);
        available.push(available_row);
        preference.push(preference_row);
    }

    let mut input = RosterInput::new(available, preference, prior_week, Vec::new());

    if let Some(names) = names {
        let names: Vec<String> = names
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if names.len() != input.volunteers() {
            return Err(TableError::NameCountMismatch {
                rows: input.volunteers(),
                names: names.len(),
            });
        }
        input.managers = names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.starts_with(format.manager_marker))
            .map(|(i, _)| i)
            .collect();
        input = input.with_names(names);
    }

    Ok(input)
}
