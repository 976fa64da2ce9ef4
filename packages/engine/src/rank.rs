//! Per-year department ranking.

use theft_trends_engine_models::DepartmentRank;
use theft_trends_records_models::TheftRecord;

/// Returns the selected year's full department roster sorted by theft
/// count descending, ties broken by department code ascending.
///
/// No truncation happens here: callers slice the head for a "top 10"
/// view or the tail for a "bottom" view. A year with no records yields
/// an empty sequence.
#[must_use]
pub fn rank_departments(records: &[TheftRecord], year: i32) -> Vec<DepartmentRank> {
    let mut ranking: Vec<DepartmentRank> = records
        .iter()
        .filter(|r| r.year == year)
        .map(|r| DepartmentRank {
            department_code: r.department_code.clone(),
            department_name: r.department_name.clone(),
            theft_count: r.theft_count,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.theft_count
            .cmp(&a.theft_count)
            .then_with(|| a.department_code.cmp(&b.department_code))
    });

    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use theft_trends_records_models::TheftRecord;

    fn record(code: &str, year: i32, count: u64) -> TheftRecord {
        TheftRecord {
            department_code: code.to_string(),
            department_name: format!("Departamento {code}"),
            year,
            month: None,
            theft_count: count,
        }
    }

    #[test]
    fn ranks_descending_by_count() {
        let records = vec![
            record("05", 2020, 10),
            record("08", 2020, 30),
            record("11", 2020, 20),
        ];

        let ranking = rank_departments(&records, 2020);

        let codes: Vec<&str> = ranking.iter().map(|r| r.department_code.as_str()).collect();
        assert_eq!(codes, vec!["08", "11", "05"]);
    }

    #[test]
    fn ties_break_by_code_ascending() {
        let records = vec![record("11", 2020, 10), record("05", 2020, 10)];
        let ranking = rank_departments(&records, 2020);
        assert_eq!(ranking[0].department_code, "05");
        assert_eq!(ranking[1].department_code, "11");
    }

    #[test]
    fn other_years_are_excluded() {
        let records = vec![record("05", 2020, 10), record("05", 2021, 99)];
        let ranking = rank_departments(&records, 2020);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].theft_count, 10);
    }

    #[test]
    fn empty_year_is_an_empty_ranking() {
        assert!(rank_departments(&[], 2020).is_empty());
    }
}
