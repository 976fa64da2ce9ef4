//! Annual and monthly rollups with running cumulative totals.
//!
//! Both rollups share the same shape: accumulate totals per key in a
//! `BTreeMap` (which yields the keys in ascending chronological order),
//! then fold that order into a running cumulative sum. Keys with no
//! records simply never appear; there is no zero-filling across the
//! axis.

use std::collections::BTreeMap;

use theft_trends_engine_models::{MonthlyAggregate, YearlyAggregate};
use theft_trends_records_models::TheftRecord;

/// Aggregates annual records into one [`YearlyAggregate`] per distinct
/// year, ordered ascending, with a running cumulative total.
///
/// An empty record slice produces an empty sequence, not an error.
#[must_use]
pub fn annual_rollup(records: &[TheftRecord]) -> Vec<YearlyAggregate> {
    let mut totals: BTreeMap<i32, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.year).or_insert(0) += record.theft_count;
    }

    let mut cumulative: u64 = 0;
    totals
        .into_iter()
        .map(|(year, total_theft_count)| {
            cumulative += total_theft_count;
            YearlyAggregate {
                year,
                total_theft_count,
                cumulative_total: cumulative,
            }
        })
        .collect()
}

/// Aggregates monthly records for `year` into one [`MonthlyAggregate`]
/// per distinct month, ordered ascending, with a running cumulative
/// total that starts fresh at the year boundary.
///
/// Records for other years and annual rows (no month) are ignored.
#[must_use]
pub fn monthly_rollup(records: &[TheftRecord], year: i32) -> Vec<MonthlyAggregate> {
    let mut totals: BTreeMap<u8, u64> = BTreeMap::new();
    for record in records {
        if record.year != year {
            continue;
        }
        if let Some(month) = record.month {
            *totals.entry(month).or_insert(0) += record.theft_count;
        }
    }

    let mut cumulative: u64 = 0;
    totals
        .into_iter()
        .map(|(month, total_theft_count)| {
            cumulative += total_theft_count;
            MonthlyAggregate {
                month,
                total_theft_count,
                cumulative_total: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annual(code: &str, year: i32, count: u64) -> TheftRecord {
        TheftRecord {
            department_code: code.to_string(),
            department_name: format!("Departamento {code}"),
            year,
            month: None,
            theft_count: count,
        }
    }

    fn monthly(code: &str, year: i32, month: u8, count: u64) -> TheftRecord {
        TheftRecord {
            month: Some(month),
            ..annual(code, year, count)
        }
    }

    #[test]
    fn annual_rollup_sums_and_accumulates_in_year_order() {
        let records = vec![
            annual("05", 2004, 30),
            annual("05", 2003, 10),
            annual("08", 2003, 5),
            annual("08", 2004, 15),
        ];

        let rollup = annual_rollup(&records);

        assert_eq!(
            rollup,
            vec![
                YearlyAggregate {
                    year: 2003,
                    total_theft_count: 15,
                    cumulative_total: 15,
                },
                YearlyAggregate {
                    year: 2004,
                    total_theft_count: 45,
                    cumulative_total: 60,
                },
            ]
        );
    }

    #[test]
    fn annual_rollup_of_empty_slice_is_empty() {
        assert!(annual_rollup(&[]).is_empty());
    }

    #[test]
    fn annual_rollup_skips_absent_years() {
        let records = vec![annual("05", 2003, 10), annual("05", 2010, 20)];
        let years: Vec<i32> = annual_rollup(&records).iter().map(|a| a.year).collect();
        assert_eq!(years, vec![2003, 2010]);
    }

    #[test]
    fn monthly_rollup_accumulates_within_the_year() {
        let records = vec![
            monthly("05", 2020, 1, 10),
            monthly("05", 2020, 2, 20),
            monthly("05", 2020, 3, 30),
            // A different year must not leak into the cumulative sum.
            monthly("05", 2019, 12, 999),
        ];

        let rollup = monthly_rollup(&records, 2020);

        let cumulative: Vec<u64> = rollup.iter().map(|m| m.cumulative_total).collect();
        assert_eq!(cumulative, vec![10, 30, 60]);
    }

    #[test]
    fn monthly_rollup_sums_departments_per_month() {
        let records = vec![
            monthly("05", 2020, 1, 10),
            monthly("08", 2020, 1, 7),
            monthly("05", 2020, 2, 3),
        ];

        let rollup = monthly_rollup(&records, 2020);

        assert_eq!(rollup[0].total_theft_count, 17);
        assert_eq!(rollup[1].total_theft_count, 3);
    }

    #[test]
    fn monthly_rollup_ignores_annual_rows() {
        let records = vec![annual("05", 2020, 100), monthly("05", 2020, 1, 10)];
        let rollup = monthly_rollup(&records, 2020);
        assert_eq!(rollup.len(), 1);
        assert_eq!(rollup[0].total_theft_count, 10);
    }

    #[test]
    fn cumulative_totals_are_non_decreasing() {
        let records = vec![
            annual("05", 2003, 0),
            annual("05", 2004, 12),
            annual("05", 2005, 0),
            annual("05", 2006, 3),
        ];
        let rollup = annual_rollup(&records);
        for pair in rollup.windows(2) {
            assert!(pair[1].cumulative_total >= pair[0].cumulative_total);
        }
    }

    #[test]
    fn rollups_are_idempotent() {
        let records = vec![annual("05", 2003, 10), annual("08", 2004, 20)];
        assert_eq!(annual_rollup(&records), annual_rollup(&records));
    }
}
