//! Quantile level resolution.
//!
//! Turns the caller's optional quantile request into a validated, ordered
//! [`QuantileLevels`] value. Levels keep the order they were given in so the
//! caller controls the order of the quantile rows in the result; duplicates are
//! kept as-is.

use crate::error::{DescribeError, Result};
use crate::types::ColumnKind;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Levels used when the caller does not ask for specific quantiles.
pub const DEFAULT_QUANTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A non-empty, ordered list of quantile fractions, each within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct QuantileLevels(Vec<f64>);

impl Default for QuantileLevels {
    fn default() -> Self {
        Self(DEFAULT_QUANTILES.to_vec())
    }
}

impl QuantileLevels {
    /// Resolve the levels to compute.
    ///
    /// `None` yields [`DEFAULT_QUANTILES`]. A supplied list is validated and
    /// kept in the given order.
    ///
    /// # Errors
    ///
    /// - [`DescribeError::EmptyQuantileList`] if `levels` is `Some(&[])`
    /// - [`DescribeError::InvalidQuantile`] if any level is outside `[0, 1]`
    ///   or is NaN
    pub fn resolve(levels: Option<&[f64]>) -> Result<Self> {
        match levels {
            None => Ok(Self::default()),
            Some(levels) => Self::new(levels.to_vec()),
        }
    }

    /// Validate an explicit list of levels.
    pub fn new(levels: Vec<f64>) -> Result<Self> {
        if levels.is_empty() {
            return Err(DescribeError::EmptyQuantileList);
        }

        if let Some(bad) = levels.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(DescribeError::InvalidQuantile(bad.to_string()));
        }

        Ok(Self(levels))
    }

    /// Read levels from a list-like column, one level per cell.
    ///
    /// Null and non-numeric cells are rejected as invalid quantiles.
    pub fn from_series(series: &Series) -> Result<Self> {
        let mut levels = Vec::with_capacity(series.len());
        for idx in 0..series.len() {
            levels.push(cell_to_level(&series.get(idx)?)?);
        }
        Self::new(levels)
    }

    /// Read levels from a one-row table of fractions, left to right.
    ///
    /// Taller tables are read row-major, so a single-column table of fractions
    /// is accepted as well.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let mut levels = Vec::with_capacity(df.height() * df.width());
        for row in 0..df.height() {
            for column in df.get_columns() {
                levels.push(cell_to_level(&column.get(row)?)?);
            }
        }
        Self::new(levels)
    }

    /// The levels, in the order requested.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Row labels for every level, in order.
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(quantile_label).collect()
    }
}

impl TryFrom<Vec<f64>> for QuantileLevels {
    type Error = DescribeError;

    fn try_from(levels: Vec<f64>) -> Result<Self> {
        Self::new(levels)
    }
}

impl From<QuantileLevels> for Vec<f64> {
    fn from(levels: QuantileLevels) -> Self {
        levels.0
    }
}

fn cell_to_level(value: &AnyValue<'_>) -> Result<f64> {
    if value.is_null() || !ColumnKind::of(&value.dtype()).is_numeric() {
        return Err(DescribeError::InvalidQuantile(value.to_string()));
    }
    value
        .extract::<f64>()
        .ok_or_else(|| DescribeError::InvalidQuantile(value.to_string()))
}

/// Render a quantile level as a percentage label, e.g. `0.25` -> `"25%"`.
///
/// At most six fractional digits of the percentage are kept so that levels
/// such as `0.333` render as `"33.3%"` rather than exposing binary rounding.
pub fn quantile_label(level: f64) -> String {
    // `+ 0.0` folds -0.0 into 0.0
    let percent = (level * 100.0 * 1e6).round() / 1e6 + 0.0;
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== resolve tests ====================

    #[test]
    fn test_resolve_default() {
        let levels = QuantileLevels::resolve(None).unwrap();
        assert_eq!(levels.as_slice(), &DEFAULT_QUANTILES);
    }

    #[test]
    fn test_resolve_preserves_order_and_duplicates() {
        let levels = QuantileLevels::resolve(Some(&[0.9, 0.1, 0.5, 0.1])).unwrap();
        assert_eq!(levels.as_slice(), &[0.9, 0.1, 0.5, 0.1]);
    }

    #[test]
    fn test_resolve_inclusive_bounds() {
        let levels = QuantileLevels::resolve(Some(&[0.0, 1.0])).unwrap();
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let err = QuantileLevels::resolve(Some(&[0.5, 1.5])).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidQuantile(ref v) if v == "1.5"));

        let err = QuantileLevels::resolve(Some(&[-0.25])).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidQuantile(_)));
    }

    #[test]
    fn test_resolve_nan_rejected() {
        let err = QuantileLevels::resolve(Some(&[f64::NAN])).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidQuantile(_)));
    }

    #[test]
    fn test_resolve_empty() {
        let err = QuantileLevels::resolve(Some(&[])).unwrap_err();
        assert!(matches!(err, DescribeError::EmptyQuantileList));
    }

    // ==================== table input tests ====================

    #[test]
    fn test_from_series() {
        let series = Series::new("q".into(), &[0.1f64, 0.9]);
        let levels = QuantileLevels::from_series(&series).unwrap();
        assert_eq!(levels.as_slice(), &[0.1, 0.9]);
    }

    #[test]
    fn test_from_series_integer_cells() {
        let series = Series::new("q".into(), &[0i32, 1]);
        let levels = QuantileLevels::from_series(&series).unwrap();
        assert_eq!(levels.as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn test_from_series_null_cell() {
        let series = Series::new("q".into(), &[Some(0.5f64), None]);
        let err = QuantileLevels::from_series(&series).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidQuantile(_)));
    }

    #[test]
    fn test_from_series_text_cell() {
        let series = Series::new("q".into(), &["half"]);
        let err = QuantileLevels::from_series(&series).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidQuantile(_)));
    }

    #[test]
    fn test_from_frame_one_row() {
        let df = df![
            "a" => &[0.75f64],
            "b" => &[0.25f64],
        ]
        .unwrap();
        let levels = QuantileLevels::from_frame(&df).unwrap();
        assert_eq!(levels.as_slice(), &[0.75, 0.25]);
    }

    #[test]
    fn test_from_frame_empty() {
        let df = DataFrame::empty();
        let err = QuantileLevels::from_frame(&df).unwrap_err();
        assert!(matches!(err, DescribeError::EmptyQuantileList));
    }

    #[test]
    fn test_from_frame_out_of_range() {
        let df = df!["a" => &[1.5f64]].unwrap();
        let err = QuantileLevels::from_frame(&df).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidQuantile(_)));
    }

    // ==================== label tests ====================

    #[test]
    fn test_quantile_label() {
        assert_eq!(quantile_label(0.0), "0%");
        assert_eq!(quantile_label(0.25), "25%");
        assert_eq!(quantile_label(0.5), "50%");
        assert_eq!(quantile_label(1.0), "100%");
        assert_eq!(quantile_label(0.125), "12.5%");
        assert_eq!(quantile_label(0.333), "33.3%");
        assert_eq!(quantile_label(-0.0), "0%");
    }

    #[test]
    fn test_default_labels() {
        let labels = QuantileLevels::default().labels();
        assert_eq!(labels, vec!["0%", "25%", "50%", "75%", "100%"]);
    }

    // ==================== serde tests ====================

    #[test]
    fn test_serde_roundtrip_validates() {
        let levels: QuantileLevels = serde_json::from_str("[0.1, 0.5]").unwrap();
        assert_eq!(levels.as_slice(), &[0.1, 0.5]);
        assert_eq!(serde_json::to_string(&levels).unwrap(), "[0.1,0.5]");

        assert!(serde_json::from_str::<QuantileLevels>("[2.0]").is_err());
        assert!(serde_json::from_str::<QuantileLevels>("[]").is_err());
    }
}
