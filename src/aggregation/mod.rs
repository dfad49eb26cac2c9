//! Portfolio aggregation: turns a per-company score column into per-company
//! weighted contributions. Summing the contributions gives the portfolio score.
//!
//! The coverage engine only needs [`PortfolioAggregation::aggregate`]; the
//! method value is forwarded unchanged. [`DefaultAggregator`] implements the
//! usual temperature-score weighting schemes.

pub mod methods;

use crate::error::Result;
use crate::table::CompanyTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use methods::DefaultAggregator;

/// Weighting scheme used to blend a per-company score into a portfolio score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PortfolioAggregationMethod {
    /// Weighted average by investment value.
    Wats,
    /// Weighted by total (scope 1+2 and 3) emissions.
    Tets,
    /// Owned emissions, company value = market cap.
    Mots,
    /// Owned emissions, company value = enterprise value.
    Eots,
    /// Owned emissions, company value = EV plus cash.
    Ecots,
    /// Owned emissions, company value = total assets.
    Aots,
    /// Owned emissions, company value = revenue.
    Rots,
}

impl PortfolioAggregationMethod {
    pub const ALL: [PortfolioAggregationMethod; 7] = [
        Self::Wats,
        Self::Tets,
        Self::Mots,
        Self::Eots,
        Self::Ecots,
        Self::Aots,
        Self::Rots,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wats => "WATS",
            Self::Tets => "TETS",
            Self::Mots => "MOTS",
            Self::Eots => "EOTS",
            Self::Ecots => "ECOTS",
            Self::Aots => "AOTS",
            Self::Rots => "ROTS",
        }
    }

    /// True for the methods that weight by owned emissions.
    pub fn is_ownership_based(self) -> bool {
        !matches!(self, Self::Wats | Self::Tets)
    }
}

impl fmt::Display for PortfolioAggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioAggregationMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let up = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == up)
            .ok_or_else(|| anyhow::anyhow!("unknown portfolio aggregation method: {s}"))
    }
}

/// External aggregation primitive consumed by the coverage engine.
pub trait PortfolioAggregation {
    /// Per-row weighted contribution of `score_column` under `method`.
    fn aggregate(
        &self,
        table: &CompanyTable,
        score_column: &str,
        method: PortfolioAggregationMethod,
    ) -> Result<Vec<f64>>;
}

impl<T: PortfolioAggregation + ?Sized> PortfolioAggregation for &T {
    fn aggregate(
        &self,
        table: &CompanyTable,
        score_column: &str,
        method: PortfolioAggregationMethod,
    ) -> Result<Vec<f64>> {
        (**self).aggregate(table, score_column, method)
    }
}
