//! Error types for the describe engine.
//!
//! Quantile validation failures are the only errors the engine raises on its
//! own; per-column data conditions (empty columns, NaN cells, single values)
//! are summarized as missing statistics instead of being reported here.
//!
//! Errors are serializable so they can be forwarded to structured consumers
//! (JSON output, IPC) as a `{ code, message }` pair.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for describe operations.
#[derive(Error, Debug)]
pub enum DescribeError {
    /// A requested quantile level lies outside `[0, 1]` or is not a number.
    #[error("Invalid quantile '{0}': quantiles must be between 0.0 and 1.0")]
    InvalidQuantile(String),

    /// A quantile list was supplied but contained no entries.
    #[error("Quantile list is empty; omit it to use the default quantiles")]
    EmptyQuantileList,

    /// A numeric input column has the same name as the label column.
    #[error("Column '{0}' collides with the statistic label column")]
    LabelColumnConflict(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DescribeError>,
    },
}

impl DescribeError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DescribeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidQuantile(_) => "INVALID_QUANTILE",
            Self::EmptyQuantileList => "EMPTY_QUANTILE_LIST",
            Self::LabelColumnConflict(_) => "LABEL_COLUMN_CONFLICT",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error comes from validating caller input rather than
    /// from the dataframe engine.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Self::InvalidQuantile(_)
            | Self::EmptyQuantileList
            | Self::LabelColumnConflict(_)
            | Self::InvalidConfig(_) => true,
            Self::WithContext { source, .. } => source.is_validation_error(),
            Self::Polars(_) | Self::Json(_) => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for DescribeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DescribeError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for describe operations.
pub type Result<T> = std::result::Result<T, DescribeError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DescribeError::Polars(e).with_context(context))
    }
}
