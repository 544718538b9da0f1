//! Numeric column selection.

use crate::types::{ColumnKind, NumericColumn};
use polars::prelude::*;

/// Select the integer and floating point columns of `df`, in table order.
///
/// Columns of any other kind are left out entirely. A table without numeric
/// columns yields an empty vector.
pub fn select_numeric_columns(df: &DataFrame) -> Vec<NumericColumn<'_>> {
    df.get_columns()
        .iter()
        .filter_map(|column| match ColumnKind::of(column.dtype()) {
            ColumnKind::Numeric(kind) => Some(NumericColumn {
                name: column.name().as_str(),
                kind,
                series: column.as_materialized_series(),
            }),
            ColumnKind::Unsupported => None,
        })
        .collect()
}
