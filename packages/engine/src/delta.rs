//! Year-over-year delta computation.
//!
//! The join between the selected year and its predecessor is an explicit
//! pair of `BTreeMap` lookups keyed by department code, with a defined
//! zero default for departments missing from the prior year. A generic
//! outer join would make both the fill policy and the roster anchoring
//! easy to get wrong, so neither is left to library defaults.

use std::collections::BTreeMap;

use theft_trends_engine_models::DepartmentDelta;
use theft_trends_records_models::TheftRecord;

use crate::EngineError;

/// Indexes one year's records by department code as `(name, count)`.
///
/// Detects a code carrying two different names within the year, which
/// would make the join ambiguous.
fn index_year<'a>(
    records: &'a [TheftRecord],
    year: i32,
) -> Result<BTreeMap<&'a str, (&'a str, u64)>, EngineError> {
    let mut by_code: BTreeMap<&str, (&str, u64)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.year == year) {
        if let Some((name, _)) = by_code.get(record.department_code.as_str()) {
            if *name != record.department_name {
                return Err(EngineError::InconsistentName {
                    code: record.department_code.clone(),
                    first: (*name).to_string(),
                    second: record.department_name.clone(),
                });
            }
        }
        by_code.insert(
            record.department_code.as_str(),
            (record.department_name.as_str(), record.theft_count),
        );
    }
    Ok(by_code)
}

/// Computes the per-department delta between `selected_year` and the
/// year before it.
///
/// The output is anchored to the selected year's roster: every
/// department present in `selected_year` yields exactly one row, and
/// departments that only exist in the prior year are excluded. A
/// department absent from the prior year is treated as having had zero
/// thefts, so a newly reporting department's delta equals its full
/// count. Rows are sorted by delta descending, ties by department code
/// ascending.
///
/// # Errors
///
/// Returns [`EngineError::InvalidYear`] if `selected_year` is absent
/// from the dataset or is the earliest year present, and
/// [`EngineError::InconsistentName`] if a department code maps to two
/// names within either year.
pub fn year_over_year(
    records: &[TheftRecord],
    selected_year: i32,
) -> Result<Vec<DepartmentDelta>, EngineError> {
    let min_year = records.iter().map(|r| r.year).min();
    let year_present = records.iter().any(|r| r.year == selected_year);

    if !year_present || min_year == Some(selected_year) {
        return Err(EngineError::InvalidYear {
            year: selected_year,
        });
    }

    let base = index_year(records, selected_year)?;
    let prior = index_year(records, selected_year - 1)?;

    let mut deltas: Vec<DepartmentDelta> = base
        .into_iter()
        .map(|(code, (name, count))| {
            let prior_count = prior.get(code).map_or(0, |(_, c)| *c);
            #[allow(clippy::cast_possible_wrap)]
            let delta = count as i64 - prior_count as i64;
            DepartmentDelta {
                department_code: code.to_string(),
                department_name: name.to_string(),
                theft_count: count,
                delta,
            }
        })
        .collect();

    deltas.sort_by(|a, b| {
        b.delta
            .cmp(&a.delta)
            .then_with(|| a.department_code.cmp(&b.department_code))
    });

    log::debug!(
        "year_over_year: {} departments for {selected_year}",
        deltas.len()
    );

    Ok(deltas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, name: &str, year: i32, count: u64) -> TheftRecord {
        TheftRecord {
            department_code: code.to_string(),
            department_name: name.to_string(),
            year,
            month: None,
            theft_count: count,
        }
    }

    #[test]
    fn deltas_sort_descending() {
        let records = vec![
            record("A", "Amazonas", 2003, 100),
            record("B", "Bolivar", 2003, 50),
            record("A", "Amazonas", 2004, 80),
            record("B", "Bolivar", 2004, 90),
        ];

        let deltas = year_over_year(&records, 2004).unwrap();

        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].department_code, "B");
        assert_eq!(deltas[0].delta, 40);
        assert_eq!(deltas[1].department_code, "A");
        assert_eq!(deltas[1].delta, -20);
    }

    #[test]
    fn missing_prior_year_fills_as_zero() {
        let records = vec![
            record("A", "Amazonas", 2003, 10),
            record("A", "Amazonas", 2004, 12),
            record("B", "Bolivar", 2004, 7),
        ];

        let deltas = year_over_year(&records, 2004).unwrap();

        let b = deltas
            .iter()
            .find(|d| d.department_code == "B")
            .expect("B must be present");
        assert_eq!(b.delta, 7);
    }

    #[test]
    fn roster_is_anchored_to_the_selected_year() {
        let records = vec![
            record("A", "Amazonas", 2003, 10),
            record("B", "Bolivar", 2003, 20),
            record("A", "Amazonas", 2004, 15),
        ];

        let deltas = year_over_year(&records, 2004).unwrap();

        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].department_code, "A");
    }

    #[test]
    fn ties_break_by_code_ascending() {
        let records = vec![
            record("B", "Bolivar", 2003, 10),
            record("A", "Amazonas", 2003, 10),
            record("B", "Bolivar", 2004, 15),
            record("A", "Amazonas", 2004, 15),
        ];

        let deltas = year_over_year(&records, 2004).unwrap();

        assert_eq!(deltas[0].department_code, "A");
        assert_eq!(deltas[1].department_code, "B");
    }

    #[test]
    fn minimum_year_is_rejected() {
        let records = vec![
            record("A", "Amazonas", 2003, 10),
            record("A", "Amazonas", 2004, 12),
        ];

        let err = year_over_year(&records, 2003).unwrap_err();
        assert!(matches!(err, EngineError::InvalidYear { year: 2003 }));
    }

    #[test]
    fn absent_year_is_rejected() {
        let records = vec![record("A", "Amazonas", 2003, 10)];
        let err = year_over_year(&records, 2010).unwrap_err();
        assert!(matches!(err, EngineError::InvalidYear { year: 2010 }));
    }

    #[test]
    fn conflicting_names_are_reported() {
        let records = vec![
            record("A", "Amazonas", 2003, 10),
            record("A", "Amazonas", 2004, 5),
            record("A", "Antioquia", 2004, 8),
        ];

        let err = year_over_year(&records, 2004).unwrap_err();
        assert!(matches!(err, EngineError::InconsistentName { .. }));
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let records = vec![
            record("A", "Amazonas", 2003, 10),
            record("A", "Amazonas", 2004, 12),
        ];
        assert_eq!(
            year_over_year(&records, 2004).unwrap(),
            year_over_year(&records, 2004).unwrap()
        );
    }
}
