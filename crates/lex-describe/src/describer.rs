//! Describe orchestration: selection, per-column statistics, assembly.

use crate::assembler::{DEFAULT_LABEL_COLUMN, assemble};
use crate::config::DescribeConfig;
use crate::error::{Result, ResultExt};
use crate::quantiles::QuantileLevels;
use crate::selector::select_numeric_columns;
use crate::statistics::summarize_column;
use crate::types::{ColumnSummary, DescribeReport};
use polars::prelude::*;
use rayon::prelude::*;
use tracing::{info, warn};

/// Computes descriptive statistics for the numeric columns of a DataFrame.
///
/// The input frame is only borrowed; every call builds a fresh result.
#[derive(Debug, Clone, Default)]
pub struct Describer {
    config: DescribeConfig,
}

impl Describer {
    pub fn new(config: DescribeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DescribeConfig {
        &self.config
    }

    /// Describe `df` as a table with one row per statistic and one column per
    /// numeric input column, preceded by the label column.
    ///
    /// The default label column takes a numeric suffix when an input column
    /// already uses its name. A custom label that collides is an error.
    pub fn describe(&self, df: &DataFrame) -> Result<DataFrame> {
        let summaries = self.summarize(df)?;
        let label = self.label_column_for(&summaries);
        assemble(&summaries, &self.config.quantiles, &label)
            .context("Assembling describe table")
    }

    fn label_column_for(&self, summaries: &[ColumnSummary]) -> String {
        let configured = &self.config.label_column;
        let taken = |name: &str| summaries.iter().any(|s| s.name == name);
        if configured != DEFAULT_LABEL_COLUMN || !taken(configured.as_str()) {
            return configured.clone();
        }

        let label = (1..)
            .map(|i| format!("{configured}_{i}"))
            .find(|candidate| !taken(candidate.as_str()))
            .unwrap_or_else(|| configured.clone());
        warn!(
            "Column '{}' exists in the input; labelling statistics as '{}'",
            configured, label
        );
        label
    }

    /// Per-column summaries, in input column order.
    pub fn summarize(&self, df: &DataFrame) -> Result<Vec<ColumnSummary>> {
        let columns = select_numeric_columns(df);
        let levels = &self.config.quantiles;

        info!(
            "Describing {} numeric column(s) of {} ({} quantile level(s))",
            columns.len(),
            df.width(),
            levels.len()
        );
        if columns.is_empty() && df.width() > 0 {
            warn!("No numeric columns to describe");
        }

        // par_iter().collect() keeps input order
        if self.config.parallel && columns.len() > 1 {
            columns
                .par_iter()
                .map(|column| summarize_column(column, levels))
                .collect()
        } else {
            columns
                .iter()
                .map(|column| summarize_column(column, levels))
                .collect()
        }
    }

    /// Summaries together with the resolved levels and input shape.
    pub fn report(&self, df: &DataFrame) -> Result<DescribeReport> {
        let levels = &self.config.quantiles;
        Ok(DescribeReport {
            shape: df.shape(),
            quantiles: levels.as_slice().to_vec(),
            quantile_labels: levels.labels(),
            columns: self.summarize(df)?,
        })
    }
}

/// Describe `df` with default settings and optional quantile levels.
///
/// Levels are validated before any column is read; on error no table is
/// produced.
pub fn describe(df: &DataFrame, quantiles: Option<&[f64]>) -> Result<DataFrame> {
    let config = DescribeConfig {
        quantiles: QuantileLevels::resolve(quantiles)?,
        ..DescribeConfig::default()
    };
    Describer::new(config).describe(df)
}
