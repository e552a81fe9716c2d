//! Volunteer shift rostering via mixed-integer programming.
//!
//! Assigns volunteers to work shifts subject to availability, staffing
//! minimums, and soft preference-based penalties. The combinatorial
//! search itself is delegated to an external MIP solver behind a narrow
//! backend interface; what lives here is the translation of a tabular
//! availability dataset into a constrained optimization model and the
//! formatting of the solution back into a readable schedule.
//!
//! # Modules
//!
//! - **`table`**: parses the delimited availability/preference table
//!   and the optional name list into a `RosterInput`
//! - **`models`**: domain types: `RosterInput`, `SolveConfig` with its
//!   policy variants, `SolveOutcome`, `RosterAssignment`
//! - **`validation`**: input integrity checks before a solve
//! - **`builder`**: builds the MIP formulation and decodes solutions
//! - **`mip`**: the backend-agnostic model plus the HiGHS and microlp
//!   backends
//! - **`report`**: console-oriented report and roster rendering
//! - **`sweep`**: sequential weight-tuning sweeps
//!
//! # Example
//!
//! ```
//! use roster_mip::{parse_roster, RosterModelBuilder, SolveConfig, TableFormat};
//! use roster_mip::mip::MicrolpBackend;
//! use roster_mip::validation::validate_input;
//!
//! let table = "0\tO\tOO\n1\tO\tO\n2\tO\tX\n";
//! let names = "#Ana\nBruno\nCarla\n";
//! let input = parse_roster(table, Some(names), &TableFormat::default())?;
//!
//! let config = SolveConfig::new(2);
//! assert!(validate_input(&input, &config).is_ok());
//! let outcome = RosterModelBuilder::new(&input)
//!     .with_config(config)
//!     .solve(&MicrolpBackend);
//! assert!(outcome.is_usable());
//!
//! println!("{}", roster_mip::report::render_report(&outcome));
//! println!("{}", roster_mip::report::render_roster(&outcome, &input));
//! # Ok::<_, roster_mip::TableError>(())
//! ```

pub mod builder;
pub mod mip;
pub mod models;
pub mod report;
pub mod sweep;
pub mod table;
pub mod validation;

pub use builder::RosterModelBuilder;
pub use mip::{BackendOptions, MipBackend, SolveStatus};
pub use models::{
    AvailabilityPolicy, DeviationPenalty, RosterAssignment, RosterInput, SolveConfig,
    SolveOutcome, StaffingRule,
};
pub use table::{parse_roster, TableError, TableFormat};
