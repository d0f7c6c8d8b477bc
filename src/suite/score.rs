//! Score aggregation helpers
//!
//! Geometric means over result sets, and the fixed-width score formatting
//! used when reporting them.

use super::benchmark::BenchmarkResult;

/// Geometric mean of a slice of values
///
/// Returns NaN for an empty slice, matching `ln(0)/0` semantics of the
/// accumulating form.
pub fn geometric_mean(values: &[f64]) -> f64 {
    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    (log_sum / values.len() as f64).exp()
}

/// Geometric mean over the time values of a result set
pub fn geometric_mean_time(results: &[BenchmarkResult]) -> f64 {
    let log_sum: f64 = results.iter().map(|r| r.time_ms.ln()).sum();
    (log_sum / results.len() as f64).exp()
}

/// Format a score: no decimals above 100, three significant digits below
pub fn format_score(value: f64) -> String {
    if value > 100.0 {
        format!("{value:.0}")
    } else {
        to_precision_3(value)
    }
}

/// Render with three significant digits
fn to_precision_3(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value:.2}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}
