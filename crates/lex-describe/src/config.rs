//! Configuration for describe operations.
//!
//! This module provides [`DescribeConfig`] and a builder for setting it up
//! fluently. Configurations are plain data and can be (de)serialized, e.g.
//! when they arrive from a frontend as JSON.

use crate::assembler::DEFAULT_LABEL_COLUMN;
use crate::error::{DescribeError, Result};
use crate::quantiles::QuantileLevels;
use serde::{Deserialize, Serialize};

/// Configuration for a describe run.
///
/// Use [`DescribeConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use lex_describe::config::DescribeConfig;
///
/// let config = DescribeConfig::builder()
///     .quantiles([0.1, 0.5, 0.9])
///     .label_column("statistic")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeConfig {
    /// Quantile levels to report, in row order.
    /// Default: 0%, 25%, 50%, 75%, 100%
    pub quantiles: QuantileLevels,

    /// Name of the first column, which holds the statistic names.
    /// Default: "descriptor"
    pub label_column: String,

    /// Whether to summarize columns on the rayon thread pool.
    /// Results are identical either way.
    /// Default: true
    pub parallel: bool,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            quantiles: QuantileLevels::default(),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
            parallel: true,
        }
    }
}

impl DescribeConfig {
    /// Create a new configuration builder.
    pub fn builder() -> DescribeConfigBuilder {
        DescribeConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// Quantile levels are validated on construction, so only the label
    /// column needs checking here.
    pub fn validate(&self) -> Result<()> {
        if self.label_column.trim().is_empty() {
            return Err(DescribeError::InvalidConfig(
                "label column name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`DescribeConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct DescribeConfigBuilder {
    quantiles: Option<Vec<f64>>,
    quantile_levels: Option<QuantileLevels>,
    label_column: Option<String>,
    parallel: Option<bool>,
}

impl DescribeConfigBuilder {
    /// Request specific quantile levels, in the order their rows should appear.
    ///
    /// The levels are validated by [`build()`](Self::build).
    pub fn quantiles(mut self, levels: impl IntoIterator<Item = f64>) -> Self {
        self.quantiles = Some(levels.into_iter().collect());
        self.quantile_levels = None;
        self
    }

    /// Use levels that were already resolved, e.g. from
    /// [`QuantileLevels::from_frame`].
    pub fn quantile_levels(mut self, levels: QuantileLevels) -> Self {
        self.quantile_levels = Some(levels);
        self.quantiles = None;
        self
    }

    /// Set the name of the statistic label column.
    pub fn label_column(mut self, name: impl Into<String>) -> Self {
        self.label_column = Some(name.into());
        self
    }

    /// Enable or disable parallel column processing.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`DescribeError::InvalidQuantile`] or
    /// [`DescribeError::EmptyQuantileList`] for bad quantile requests and with
    /// [`DescribeError::InvalidConfig`] for an empty label column name.
    pub fn build(self) -> Result<DescribeConfig> {
        let quantiles = match (self.quantile_levels, self.quantiles) {
            (Some(levels), _) => levels,
            (None, requested) => QuantileLevels::resolve(requested.as_deref())?,
        };

        let config = DescribeConfig {
            quantiles,
            label_column: self
                .label_column
                .unwrap_or_else(|| DEFAULT_LABEL_COLUMN.to_string()),
            parallel: self.parallel.unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }
}
