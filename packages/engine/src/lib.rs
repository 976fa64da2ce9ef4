#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure aggregation engine for vehicle-theft trend analysis.
//!
//! Converts raw per-department theft records into the derived series the
//! presentation layer consumes: annual and monthly rollups with running
//! cumulative totals, year-over-year department deltas, threshold-based
//! increase/decrease classification, per-year rankings, and the
//! log-compressed color-scale transform.
//!
//! Every operation is a synchronous pure function over an immutable record
//! slice: no shared state, no I/O, bit-identical output for identical
//! input. Callers that want memoization wrap the engine externally, keyed
//! on `(operation, selected_year, dataset snapshot)`.

pub mod classify;
pub mod delta;
pub mod rank;
pub mod rollup;
pub mod scale;

pub use classify::{DEFAULT_NOISE_THRESHOLD, classify_threshold};
pub use delta::year_over_year;
pub use rank::rank_departments;
pub use rollup::{annual_rollup, monthly_rollup};
pub use scale::log_scale;

use thiserror::Error;

/// Errors that can occur during trend computations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The selected year is absent from the dataset, or is the earliest
    /// year present and therefore has no prior year to compare against.
    ///
    /// Raised instead of silently returning zero deltas, since a zero
    /// delta is indistinguishable from "no change" and would corrupt
    /// the ranking.
    #[error("invalid year {year}: not in the dataset or has no prior year to compare")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// A department code appears with conflicting names within one year.
    #[error("department {code} appears with conflicting names: '{first}' vs '{second}'")]
    InconsistentName {
        /// The department code in conflict.
        code: String,
        /// The name seen first.
        first: String,
        /// The conflicting name.
        second: String,
    },
}
