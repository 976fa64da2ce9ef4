//! Log-compressed color-scale transform.

/// Returns `ln(count + 1)` for use as a continuous color-scale input.
///
/// The `+ 1` keeps the transform defined at zero (`log_scale(0) == 0`),
/// which is a real dataset case for small departments in early years;
/// a naive `ln(count)` would return `-inf` there. The transform is
/// strictly increasing, so it preserves the ordering of raw counts
/// while compressing their range.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn log_scale(count: u64) -> f64 {
    ((count + 1) as f64).ln()
}
