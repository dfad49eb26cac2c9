// src/lib.rs
// Public library surface for integration tests (and reuse by data pipelines).

pub mod aggregation;
pub mod category;
pub mod classify;
pub mod config;
pub mod coverage;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod table;

// ---- Re-exports for stable public API ----
pub use crate::aggregation::{DefaultAggregator, PortfolioAggregation, PortfolioAggregationMethod};
pub use crate::category::{Category, TAXONOMY_VERSION};
pub use crate::classify::{classify, Classifier};
pub use crate::config::{ColumnConfig, CoverageConfig};
pub use crate::coverage::{
    CategoryTally, CombinedReport, CoverageBreakdown, CoverageEngine, CoverageReport,
    CoverageSummary, Indicator, TotalTally,
};
pub use crate::error::CoverageError;
pub use crate::table::{CompanyTable, Row};
