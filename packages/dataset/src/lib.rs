#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV loading, validation, and caching for the theft datasets.
//!
//! The engine is a pure function of whatever record snapshot it is
//! handed; this crate is the collaborator that produces those snapshots.
//! It parses the processed CSV exports (one annual and one monthly file
//! per vehicle type), enforces the record invariants at the load
//! boundary, and offers a time-boxed cache so repeated queries don't
//! re-read the files.

pub mod cache;
pub mod load;

pub use cache::DatasetCache;
pub use load::Dataset;

use thiserror::Error;

/// Errors that can occur while loading or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row failed to parse.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The same `(department, year[, month])` key appeared twice.
    #[error("duplicate record for department {code}, year {year}{}",
        .month.map_or_else(String::new, |m| format!(", month {m}")))]
    DuplicateKey {
        /// Department code of the repeated row.
        code: String,
        /// Year of the repeated row.
        year: i32,
        /// Month of the repeated row, for monthly files.
        month: Option<u8>,
    },

    /// One department code carries two different display names.
    #[error("department {code} appears with conflicting names: '{first}' vs '{second}'")]
    InconsistentName {
        /// The department code in conflict.
        code: String,
        /// The name seen first.
        first: String,
        /// The conflicting name.
        second: String,
    },

    /// A monthly row carried a month outside 1-12.
    #[error("department {code}, year {year}: month {month} is outside 1-12")]
    InvalidMonth {
        /// Department code of the bad row.
        code: String,
        /// Year of the bad row.
        year: i32,
        /// The out-of-range month value.
        month: u8,
    },
}
