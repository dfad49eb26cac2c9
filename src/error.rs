//! Library error type.
//!
//! Configuration and bootstrap code uses `anyhow`; everything that touches a
//! company table returns `CoverageError` so callers can match on the cause.

use crate::aggregation::PortfolioAggregationMethod;

/// Errors raised while computing coverage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoverageError {
    /// A column the computation needs is not part of the table schema.
    ///
    /// Resolution: supply a table carrying the named column (or point the
    /// config at the column name your data provider uses).
    #[error("Column '{column}' not found in company data")]
    MissingColumn { column: String },

    /// The weighting denominator of an aggregation method summed to zero.
    #[error("The portfolio weight is not allowed to be zero (method {method})")]
    ZeroPortfolioWeight { method: PortfolioAggregationMethod },
}

impl CoverageError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// True for errors caused by the shape of the input table.
    #[inline]
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoverageError>;
