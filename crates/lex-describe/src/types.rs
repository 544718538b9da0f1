use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Numeric element kinds the statistics engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// Signed or unsigned integers
    Integer,
    /// Floating point numbers
    Float,
}

/// Kind of a column as far as describing it is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric(NumericKind),
    /// Text, boolean, temporal, nested and any other non-numeric type
    Unsupported,
}

impl ColumnKind {
    /// Classify a polars data type.
    pub fn of(dtype: &DataType) -> Self {
        if dtype.is_integer() {
            ColumnKind::Numeric(NumericKind::Integer)
        } else if dtype.is_float() {
            ColumnKind::Numeric(NumericKind::Float)
        } else {
            ColumnKind::Unsupported
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric(_))
    }
}

/// A borrowed view of one numeric column of the input table.
#[derive(Debug, Clone, Copy)]
pub struct NumericColumn<'a> {
    pub name: &'a str,
    pub kind: NumericKind,
    pub series: &'a Series,
}

impl NumericColumn<'_> {
    /// Cells widened to `f64`; `None` marks a missing cell.
    pub fn cells(&self) -> PolarsResult<Vec<Option<f64>>> {
        let widened = self.series.cast(&DataType::Float64)?;
        Ok(widened.f64()?.into_iter().collect())
    }
}

/// Statistics computed for one numeric column.
///
/// Every statistic is `None` when it is undefined for the column's data:
/// all of them for a column without valid values, and `std` for a column
/// with a single valid value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: NumericKind,
    /// Number of valid (present, non-NaN) cells.
    pub count: usize,
    /// Number of missing cells, NaN included.
    pub missing: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// One value per requested quantile level, in request order.
    pub quantiles: Vec<Option<f64>>,
}

impl ColumnSummary {
    /// `count` as a statistic: missing when the column has no valid values.
    pub fn count_stat(&self) -> Option<f64> {
        (self.count > 0).then_some(self.count as f64)
    }
}

/// Structured form of a describe result, for JSON consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeReport {
    /// Input shape as (rows, columns).
    pub shape: (usize, usize),
    pub quantiles: Vec<f64>,
    pub quantile_labels: Vec<String>,
    pub columns: Vec<ColumnSummary>,
}

impl DescribeReport {
    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind() {
        assert_eq!(
            ColumnKind::of(&DataType::Int64),
            ColumnKind::Numeric(NumericKind::Integer)
        );
        assert_eq!(
            ColumnKind::of(&DataType::UInt8),
            ColumnKind::Numeric(NumericKind::Integer)
        );
        assert_eq!(
            ColumnKind::of(&DataType::Float32),
            ColumnKind::Numeric(NumericKind::Float)
        );
        assert_eq!(ColumnKind::of(&DataType::String), ColumnKind::Unsupported);
        assert_eq!(ColumnKind::of(&DataType::Boolean), ColumnKind::Unsupported);
        assert_eq!(ColumnKind::of(&DataType::Date), ColumnKind::Unsupported);
    }

    #[test]
    fn test_cells_keep_missing() {
        let series = Series::new("a".into(), &[Some(1i32), None, Some(3)]);
        let column = NumericColumn {
            name: "a",
            kind: NumericKind::Integer,
            series: &series,
        };
        assert_eq!(column.cells().unwrap(), vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn test_count_stat_missing_when_empty() {
        let summary = ColumnSummary {
            name: "a".to_string(),
            kind: NumericKind::Float,
            count: 0,
            missing: 3,
            mean: None,
            std: None,
            min: None,
            max: None,
            quantiles: vec![None],
        };
        assert_eq!(summary.count_stat(), None);
    }

    #[test]
    fn test_report_to_json() {
        let report = DescribeReport {
            shape: (3, 2),
            quantiles: vec![0.5],
            quantile_labels: vec!["50%".to_string()],
            columns: vec![],
        };
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["shape"], serde_json::json!([3, 2]));
        assert_eq!(json["quantile_labels"][0], "50%");
    }
}
