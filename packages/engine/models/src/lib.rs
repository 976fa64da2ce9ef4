#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived analytical series types produced by the theft trend engine.
//!
//! Everything here is transient: a pure function of a record snapshot,
//! recomputed per query and never mutated in place. No derived entity
//! owns another.

use serde::{Deserialize, Serialize};

/// One year's total across all departments, with running cumulative sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyAggregate {
    /// Calendar year.
    pub year: i32,
    /// Sum of theft counts over all departments for this year.
    pub total_theft_count: u64,
    /// Running sum of totals, ordered by ascending year.
    pub cumulative_total: u64,
}

/// One month's total within a selected year, with running cumulative sum.
///
/// The cumulative sum resets at the year boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    /// Month number, 1-12.
    pub month: u8,
    /// Sum of theft counts over all departments for this month.
    pub total_theft_count: u64,
    /// Running sum of totals within the year, ordered by ascending month.
    pub cumulative_total: u64,
}

/// Year-over-year change for one department in a selected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDelta {
    /// Stable department code.
    pub department_code: String,
    /// Display name.
    pub department_name: String,
    /// Theft count in the selected year.
    pub theft_count: u64,
    /// `theft_count(selected_year) - theft_count(selected_year - 1)`,
    /// with an absent prior year treated as zero.
    pub delta: i64,
}

/// One row of the per-year department ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRank {
    /// Stable department code.
    pub department_code: String,
    /// Display name.
    pub department_name: String,
    /// Theft count in the ranked year.
    pub theft_count: u64,
}

/// Increase/decrease partition of a delta sequence, with integer
/// percentage shares of the selected year's department roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSummary {
    /// Departments whose delta exceeds the noise threshold.
    pub increased: Vec<DepartmentDelta>,
    /// Departments whose delta falls below the negated threshold.
    pub decreased: Vec<DepartmentDelta>,
    /// Share of the roster that increased, rounded half-up to 0-100.
    pub percent_increased: u8,
    /// Share of the roster that decreased, rounded half-up to 0-100.
    pub percent_decreased: u8,
}

/// Spanish three-letter month abbreviation, as the source dashboard
/// labels its monthly axis.
#[must_use]
pub const fn month_abbreviation(month: u8) -> &'static str {
    match month {
        1 => "ene",
        2 => "feb",
        3 => "mar",
        4 => "abr",
        5 => "may",
        6 => "jun",
        7 => "jul",
        8 => "ago",
        9 => "sep",
        10 => "oct",
        11 => "nov",
        12 => "dic",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_abbreviations_cover_the_year() {
        assert_eq!(month_abbreviation(1), "ene");
        assert_eq!(month_abbreviation(12), "dic");
        assert_eq!(month_abbreviation(13), "???");
    }
}
