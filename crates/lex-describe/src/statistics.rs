//! Per-column descriptive statistics.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation, so the error does not grow with
//!   the column length.
//! - **Standard deviation**: sample deviation (divisor `n - 1`) from a second
//!   compensated pass over squared deviations from the mean.
//! - **Quantile**: linear interpolation between adjacent order statistics
//!   (Hyndman & Fan type 7). Valid values are sorted once per column and the
//!   sorted slice serves min, max and every requested level.
//!
//! Both passes run on values divided by a power of two close to the largest
//! magnitude, so sums and squared deviations stay finite for any finite
//! column. Power-of-two scaling is exact, so ordinary data gets the same bits
//! as an unscaled computation.

use crate::error::{Result, ResultExt};
use crate::quantiles::QuantileLevels;
use crate::types::{ColumnSummary, NumericColumn, NumericKind};
use tracing::debug;

/// Summarize one selected column.
pub fn summarize_column(
    column: &NumericColumn<'_>,
    levels: &QuantileLevels,
) -> Result<ColumnSummary> {
    let cells = column
        .cells()
        .context(format!("Reading column '{}'", column.name))?;
    Ok(summarize_values(column.name, column.kind, &cells, levels))
}

/// Summarize a sequence of cells, `None` marking a missing cell.
///
/// NaN cells count as missing. A column without valid values gets `None`
/// for every statistic. Mean and std are also `None` when infinite values
/// leave them undefined (e.g. both signs of infinity in one column).
pub fn summarize_values(
    name: &str,
    kind: NumericKind,
    cells: &[Option<f64>],
    levels: &QuantileLevels,
) -> ColumnSummary {
    let mut values: Vec<f64> = cells
        .iter()
        .filter_map(|cell| cell.filter(|v| !v.is_nan()))
        .collect();
    let missing = cells.len() - values.len();

    if values.is_empty() {
        debug!("Column '{}' has no valid values ({} missing)", name, missing);
        return ColumnSummary {
            name: name.to_string(),
            kind,
            count: 0,
            missing,
            mean: None,
            std: None,
            min: None,
            max: None,
            quantiles: vec![None; levels.len()],
        };
    }

    values.sort_unstable_by(f64::total_cmp);
    let sorted = values.as_slice();
    let n = sorted.len();
    let min = sorted[0];
    let max = sorted[n - 1];

    let scale = magnitude_scale(min, max);
    let scaled_sum = neumaier_sum(sorted.iter().map(|v| v / scale));
    // rounding in the final division can land one ulp outside the data range
    let mean = (scaled_sum / n as f64 * scale).clamp(min, max);
    let mean = (!mean.is_nan()).then_some(mean);
    let std = mean
        .and_then(|m| sample_std(sorted, m, scale))
        .filter(|s| !s.is_nan());
    let quantiles = levels
        .iter()
        .map(|p| Some(quantile_sorted(sorted, p)).filter(|q| !q.is_nan()))
        .collect();

    debug!("Summarized column '{}': {} valid, {} missing", name, n, missing);

    ColumnSummary {
        name: name.to_string(),
        kind,
        count: n,
        missing,
        mean,
        std,
        min: Some(min),
        max: Some(max),
        quantiles,
    }
}

/// Sample standard deviation around a precomputed mean; `None` below two values.
///
/// Deviations are taken in the space scaled by `scale`.
fn sample_std(values: &[f64], mean: f64, scale: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean / scale;
    let squared = neumaier_sum(values.iter().map(|v| {
        let deviation = v / scale - mean;
        deviation * deviation
    }));
    Some((squared / (values.len() - 1) as f64).sqrt() * scale)
}

/// Power of two at or just below the largest magnitude in `[min, max]`.
///
/// Falls back to 1 for all-zero or infinite data.
fn magnitude_scale(min: f64, max: f64) -> f64 {
    let magnitude = min.abs().max(max.abs());
    if magnitude == 0.0 || !magnitude.is_finite() {
        return 1.0;
    }
    // keep the exponent in the normal range so the bit pattern below is valid
    let exponent = (magnitude.log2().floor() as i64).clamp(-1022, 1023);
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

/// Linear interpolation between the order statistics around rank `p * (n - 1)`.
///
/// `sorted` must be non-empty and ascending, `p` within `[0, 1]`.
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (rank.ceil() as usize).min(sorted.len() - 1);
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    let (below, above) = (sorted[lo], sorted[hi]);
    let spread = above - below;
    let value = if spread.is_finite() {
        below + frac * spread
    } else {
        // spread overflows for large values of opposite sign
        below * (1.0 - frac) + above * frac
    };
    value.clamp(below, above)
}

/// Neumaier's variant of Kahan summation.
///
/// Keeps a running compensation for the low-order bits lost by each addition,
/// including additions where the addend outweighs the running sum.
fn neumaier_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0f64;
    let mut compensation = 0.0f64;
    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }
    if sum.is_finite() {
        sum + compensation
    } else {
        sum
    }
}
