//! Threshold-based increase/decrease classification.

use theft_trends_engine_models::{DepartmentDelta, ThresholdSummary};

/// Default noise threshold: deltas with magnitude at or below this are
/// treated as unchanged and excluded from both buckets.
pub const DEFAULT_NOISE_THRESHOLD: i64 = 1;

/// Rounds `100 * numerator / denominator` half-up to the nearest
/// integer, in pure integer arithmetic. Zero denominator yields zero.
fn percent_of(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let n = numerator as u64;
    let d = denominator as u64;
    debug_assert!(n <= d);
    let rounded = (200 * n + d) / (2 * d);
    // numerator <= denominator, so the share is at most 100.
    u8::try_from(rounded).unwrap_or(100)
}

/// Partitions a delta sequence into increased/decreased buckets using
/// the noise threshold, and computes each bucket's share of the
/// department roster.
///
/// `deltas` is expected to be the full output of
/// [`year_over_year`](crate::year_over_year) for one year, so its length
/// is the roster size of the selected year. Deltas with
/// `|delta| <= threshold` count toward the roster but land in neither
/// bucket. An empty roster yields zero percentages rather than a
/// division error.
#[must_use]
pub fn classify_threshold(deltas: &[DepartmentDelta], threshold: i64) -> ThresholdSummary {
    let increased: Vec<DepartmentDelta> = deltas
        .iter()
        .filter(|d| d.delta > threshold)
        .cloned()
        .collect();
    let decreased: Vec<DepartmentDelta> = deltas
        .iter()
        .filter(|d| d.delta < -threshold)
        .cloned()
        .collect();

    let total = deltas.len();
    let percent_increased = percent_of(increased.len(), total);
    let percent_decreased = percent_of(decreased.len(), total);

    ThresholdSummary {
        increased,
        decreased,
        percent_increased,
        percent_decreased,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(code: &str, value: i64) -> DepartmentDelta {
        DepartmentDelta {
            department_code: code.to_string(),
            department_name: format!("Departamento {code}"),
            theft_count: 10,
            delta: value,
        }
    }

    #[test]
    fn noise_band_lands_in_neither_bucket() {
        let deltas = vec![
            delta("A", 5),
            delta("B", -5),
            delta("C", 0),
            delta("D", 2),
            delta("E", -2),
        ];

        let summary = classify_threshold(&deltas, DEFAULT_NOISE_THRESHOLD);

        let up: Vec<i64> = summary.increased.iter().map(|d| d.delta).collect();
        let down: Vec<i64> = summary.decreased.iter().map(|d| d.delta).collect();
        assert_eq!(up, vec![5, 2]);
        assert_eq!(down, vec![-5, -2]);
    }

    #[test]
    fn percentages_use_the_full_roster() {
        let deltas = vec![
            delta("A", 5),
            delta("B", -5),
            delta("C", 0),
            delta("D", 2),
            delta("E", -2),
        ];

        let summary = classify_threshold(&deltas, 1);

        // 2 of 5 in each bucket.
        assert_eq!(summary.percent_increased, 40);
        assert_eq!(summary.percent_decreased, 40);
    }

    #[test]
    fn empty_roster_yields_zero_percentages() {
        let summary = classify_threshold(&[], 1);
        assert!(summary.increased.is_empty());
        assert!(summary.decreased.is_empty());
        assert_eq!(summary.percent_increased, 0);
        assert_eq!(summary.percent_decreased, 0);
    }

    #[test]
    fn rounding_is_half_up() {
        // 1 of 3 = 33.33 -> 33; 1 of 8 = 12.5 -> 13.
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(2, 3), 67);
    }

    #[test]
    fn percentage_sum_stays_within_bounds() {
        let deltas = vec![delta("A", 100), delta("B", -100), delta("C", 3)];
        for threshold in 0..5 {
            let summary = classify_threshold(&deltas, threshold);
            let sum = u16::from(summary.percent_increased) + u16::from(summary.percent_decreased);
            assert!(sum <= 100, "sum {sum} exceeds 100 at threshold {threshold}");
        }
    }

    #[test]
    fn threshold_zero_excludes_only_exact_zero() {
        let deltas = vec![delta("A", 1), delta("B", 0), delta("C", -1)];
        let summary = classify_threshold(&deltas, 0);
        assert_eq!(summary.increased.len(), 1);
        assert_eq!(summary.decreased.len(), 1);
    }
}
