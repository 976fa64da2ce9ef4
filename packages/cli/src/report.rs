//! Report assembly and text rendering.
//!
//! `build` runs every engine query once and collects the results into a
//! serializable [`Report`]; `print` renders the same structure as the
//! text equivalent of the original dashboard panels.

use serde::Serialize;
use theft_trends_dataset::Dataset;
use theft_trends_engine::{
    DEFAULT_NOISE_THRESHOLD, EngineError, annual_rollup, classify_threshold, log_scale,
    monthly_rollup, rank_departments, year_over_year,
};
use theft_trends_engine_models::{
    DepartmentDelta, MonthlyAggregate, ThresholdSummary, YearlyAggregate, month_abbreviation,
};
use theft_trends_records_models::VehicleType;

/// How many departments the ranking table shows.
const TOP_N: usize = 10;

/// Everything the front end shows for one vehicle type and year.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Dataset the report was built from.
    pub vehicle_type: VehicleType,
    /// Year the per-year panels describe.
    pub selected_year: i32,
    /// Per-year totals with running cumulative sum, all years.
    pub annual_trend: Vec<YearlyAggregate>,
    /// Per-month totals with running cumulative sum, selected year.
    pub monthly_trend: Vec<MonthlyAggregate>,
    /// Year-over-year panel; `None` at the earliest year, where no
    /// prior-year comparison exists.
    pub comparison: Option<Comparison>,
    /// Per-department counts with the log-scale color input, selected
    /// year, ordered by count descending.
    pub distribution: Vec<DistributionRow>,
}

/// Year-over-year deltas plus their threshold classification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Deltas sorted descending; first is the largest increase, last
    /// the largest decrease.
    pub deltas: Vec<DepartmentDelta>,
    /// Increase/decrease buckets and roster percentages.
    pub summary: ThresholdSummary,
}

/// One department's row in the distribution panel.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRow {
    /// Stable department code.
    pub department_code: String,
    /// Display name.
    pub department_name: String,
    /// Raw theft count.
    pub theft_count: u64,
    /// `ln(count + 1)`, the color-scale input.
    pub log_theft_count: f64,
}

/// Runs all engine queries for `year` against `dataset`.
///
/// The earliest year has no prior-year comparison; that case becomes
/// `comparison: None` rather than an error, matching the original
/// dashboard's `N.D` placeholders.
///
/// # Errors
///
/// Returns [`EngineError`] for failures other than the missing prior
/// year, such as conflicting department names.
pub fn build(dataset: &Dataset, year: i32) -> Result<Report, EngineError> {
    let comparison = match year_over_year(&dataset.annual, year) {
        Ok(deltas) => {
            let summary = classify_threshold(&deltas, DEFAULT_NOISE_THRESHOLD);
            Some(Comparison { deltas, summary })
        }
        Err(EngineError::InvalidYear { .. }) => None,
        Err(err) => return Err(err),
    };

    let distribution = rank_departments(&dataset.annual, year)
        .into_iter()
        .map(|rank| DistributionRow {
            log_theft_count: log_scale(rank.theft_count),
            department_code: rank.department_code,
            department_name: rank.department_name,
            theft_count: rank.theft_count,
        })
        .collect();

    Ok(Report {
        vehicle_type: dataset.vehicle_type,
        selected_year: year,
        annual_trend: annual_rollup(&dataset.annual),
        monthly_trend: monthly_rollup(&dataset.monthly, year),
        comparison,
        distribution,
    })
}

/// Renders the report to stdout.
pub fn print(report: &Report) {
    let span = match (report.annual_trend.first(), report.annual_trend.last()) {
        (Some(first), Some(last)) => format!(" entre {} y {}", first.year, last.year),
        _ => String::new(),
    };
    println!("Hurto {} en Colombia{span}", report.vehicle_type.label());
    println!();

    print_annual_trend(&report.annual_trend);
    print_comparison(report.comparison.as_ref());
    print_distribution(&report.distribution);
    print_monthly_trend(&report.monthly_trend, report.selected_year);
    print_top(&report.distribution, report.selected_year);
}

fn print_annual_trend(trend: &[YearlyAggregate]) {
    println!("Hurto anual / acumulado");
    for aggregate in trend {
        println!(
            "  {}  {:>8}  {:>9}",
            aggregate.year, aggregate.total_theft_count, aggregate.cumulative_total
        );
    }
    println!();
}

fn print_comparison(comparison: Option<&Comparison>) {
    println!("Dptos con mayor aumento/disminución de hurto en el año");
    if let Some(comparison) = comparison {
        if let Some(first) = comparison.deltas.first() {
            println!(
                "  {}: {} ({:+})",
                first.department_name,
                format_count(first.theft_count),
                first.delta
            );
        }
        if let Some(last) = comparison.deltas.last() {
            println!(
                "  {}: {} ({:+})",
                last.department_name,
                format_count(last.theft_count),
                last.delta
            );
        }
        println!();
        println!("Porcentaje total dptos aumento/disminución de hurto en el año");
        println!("  Aumentó: {} %", comparison.summary.percent_increased);
        println!("  Disminuyó: {} %", comparison.summary.percent_decreased);
    } else {
        println!("  N.D");
        println!();
        println!("Porcentaje total dptos aumento/disminución de hurto en el año");
        println!("  Aumentó: 0 %");
        println!("  Disminuyó: 0 %");
    }
    println!();
}

fn print_distribution(distribution: &[DistributionRow]) {
    println!("Distribución hurto por departamento (escala logarítmica)");
    for row in distribution {
        println!(
            "  {:<5} {:<30} {:>8}  {:>6.3}",
            row.department_code, row.department_name, row.theft_count, row.log_theft_count
        );
    }
    println!();
}

fn print_monthly_trend(trend: &[MonthlyAggregate], year: i32) {
    println!("Comportamiento mensual del hurto en {year}");
    for aggregate in trend {
        println!(
            "  {}  {:>8}  {:>9}",
            month_abbreviation(aggregate.month),
            aggregate.total_theft_count,
            aggregate.cumulative_total
        );
    }
    println!();
}

fn print_top(distribution: &[DistributionRow], year: i32) {
    println!("Top {TOP_N} del año {year}");
    for row in distribution.iter().take(TOP_N) {
        println!("  {:<30} {}", row.department_name, format_count(row.theft_count));
    }
}

/// Shortens counts above a thousand to a `k` suffix, the way the
/// original dashboard's metric cards do (`12 k`, `1.5 k`). Values at or
/// below a thousand (and all negatives) print as-is.
fn format_count(count: u64) -> String {
    format_number(i64::try_from(count).unwrap_or(i64::MAX))
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(num: i64) -> String {
    if num > 1000 {
        if num % 1000 == 0 {
            return format!("{} k", num / 1000);
        }
        return format!("{} k", (num as f64 / 10.0).round() / 100.0);
    }
    num.to_string()
}
