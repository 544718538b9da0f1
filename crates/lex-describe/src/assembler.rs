//! Assembly of per-column summaries into the describe table.

use crate::error::{DescribeError, Result};
use crate::quantiles::QuantileLevels;
use crate::types::ColumnSummary;
use polars::prelude::*;

/// Statistic rows that precede the quantile rows, in output order.
pub const STAT_LABELS: [&str; 5] = ["count", "mean", "std", "min", "max"];

/// Default name of the label column.
pub const DEFAULT_LABEL_COLUMN: &str = "descriptor";

/// Row labels of a describe table for the given quantile levels.
pub fn row_labels(levels: &QuantileLevels) -> Vec<String> {
    STAT_LABELS
        .iter()
        .map(|label| label.to_string())
        .chain(levels.labels())
        .collect()
}

/// Build the describe table.
///
/// The label column comes first, followed by one `Float64` column per summary
/// in the given order. Undefined statistics are nulls.
pub fn assemble(
    summaries: &[ColumnSummary],
    levels: &QuantileLevels,
    label_column: &str,
) -> Result<DataFrame> {
    if let Some(conflict) = summaries.iter().find(|s| s.name == label_column) {
        return Err(DescribeError::LabelColumnConflict(conflict.name.clone()));
    }

    let mut columns = Vec::with_capacity(summaries.len() + 1);
    columns.push(Column::new(label_column.into(), row_labels(levels)));

    for summary in summaries {
        columns.push(Column::new(summary.name.as_str().into(), stat_values(summary)));
    }

    Ok(DataFrame::new(columns)?)
}

fn stat_values(summary: &ColumnSummary) -> Vec<Option<f64>> {
    let mut values = Vec::with_capacity(STAT_LABELS.len() + summary.quantiles.len());
    values.extend([
        summary.count_stat(),
        summary.mean,
        summary.std,
        summary.min,
        summary.max,
    ]);
    values.extend(summary.quantiles.iter().copied());
    values
}
