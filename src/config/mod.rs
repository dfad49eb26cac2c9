//! Engine configuration (column names, alias table, classification patterns).

pub mod coverage;

pub use coverage::{ColumnConfig, CoverageConfig, ENV_COVERAGE_CONFIG_PATH};
