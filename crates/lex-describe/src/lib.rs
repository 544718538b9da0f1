//! Descriptive Statistics for Polars DataFrames
//!
//! Summarizes the numeric columns of a [`polars`] `DataFrame` the way a
//! `describe` command does: count, mean, standard deviation, minimum, maximum
//! and a configurable list of quantiles, returned as a new `DataFrame`.
//!
//! # Overview
//!
//! - **Column Selection**: integer and floating point columns are described,
//!   every other column is skipped
//! - **Missing Values**: nulls and NaN are left out per column; a column
//!   without valid values describes as all-null rather than as zeros
//! - **Stable Statistics**: compensated summation for mean and deviation,
//!   one sort per column shared by all quantile levels
//! - **Parallel Columns**: columns are summarized on the rayon pool with
//!   results identical to a sequential run
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_describe::{describe, Describer, DescribeConfig};
//! use polars::prelude::*;
//!
//! let df = df![
//!     "name" => &["a", "b", "c"],
//!     "score" => &[1.0, 3.0, 2.0],
//! ]?;
//!
//! // Default quantiles: 0%, 25%, 50%, 75%, 100%
//! let table = describe(&df, None)?;
//!
//! // Custom quantiles and label column
//! let config = DescribeConfig::builder()
//!     .quantiles([0.1, 0.5, 0.9])
//!     .label_column("statistic")
//!     .build()?;
//! let table = Describer::new(config).describe(&df)?;
//! println!("{table}");
//! ```
//!
//! # Output Layout
//!
//! | descriptor | score |
//! |------------|-------|
//! | count      | 3.0   |
//! | mean       | 2.0   |
//! | std        | 1.0   |
//! | min        | 1.0   |
//! | max        | 3.0   |
//! | 0%         | 1.0   |
//! | ...        | ...   |
//!
//! Rows always appear in this order, with the quantile rows following the
//! requested level order. Undefined statistics are nulls.

pub mod assembler;
pub mod config;
pub mod describer;
pub mod error;
pub mod quantiles;
pub mod selector;
pub mod statistics;
pub mod types;

// Re-exports for convenient access
pub use assembler::{DEFAULT_LABEL_COLUMN, STAT_LABELS, assemble, row_labels};
pub use config::{DescribeConfig, DescribeConfigBuilder};
pub use describer::{Describer, describe};
pub use error::{DescribeError, Result as DescribeResult, ResultExt};
pub use quantiles::{DEFAULT_QUANTILES, QuantileLevels, quantile_label};
pub use selector::select_numeric_columns;
pub use statistics::{summarize_column, summarize_values};
pub use types::{ColumnKind, ColumnSummary, DescribeReport, NumericColumn, NumericKind};

// Summaries are produced on rayon workers and configs are shared across them
static_assertions::assert_impl_all!(ColumnSummary: Send, Sync);
static_assertions::assert_impl_all!(QuantileLevels: Send, Sync);
static_assertions::assert_impl_all!(DescribeConfig: Send, Sync);
static_assertions::assert_impl_all!(DescribeError: Send);
