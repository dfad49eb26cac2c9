//! Weighting schemes of [`DefaultAggregator`].
//!
//! contribution_i = weight_i / Σ weight × score_i
//!
//! - WATS: weight = investment value
//! - TETS: weight = scope 1+2 + scope 3 emissions
//! - MOTS/EOTS/ECOTS/AOTS/ROTS: weight = owned emissions
//!   = investment value / company value × emissions
//!
//! Missing numeric cells read as 0. An empty table yields no contributions;
//! a zero denominator on a non-empty table is an error.

use super::{PortfolioAggregation, PortfolioAggregationMethod};
use crate::config::ColumnConfig;
use crate::error::{CoverageError, Result};
use crate::table::{money, CompanyTable};

/// Built-in implementation of the aggregation primitive.
#[derive(Debug, Clone, Default)]
pub struct DefaultAggregator {
    columns: ColumnConfig,
}

impl DefaultAggregator {
    pub fn new(columns: ColumnConfig) -> Self {
        Self { columns }
    }

    /// Scope 1+2 plus scope 3 per row; both columns must exist, empty cells count as 0.
    fn emissions(&self, table: &CompanyTable) -> Result<Vec<f64>> {
        require(table, &self.columns.ghg_s1s2)?;
        require(table, &self.columns.ghg_s3)?;
        Ok(table
            .rows()
            .iter()
            .map(|r| money(r.get(&self.columns.ghg_s1s2)) + money(r.get(&self.columns.ghg_s3)))
            .collect())
    }

    /// investment / company value × emissions; a non-positive company value owns nothing.
    fn owned_emissions(&self, table: &CompanyTable, value_column: &str) -> Result<Vec<f64>> {
        require(table, &self.columns.investment_value)?;
        require(table, value_column)?;

        let investment = table.money_column(&self.columns.investment_value);
        let company_value = table.money_column(value_column);
        let emissions = self.emissions(table)?;

        Ok(investment
            .iter()
            .zip(company_value)
            .zip(emissions)
            .map(|((inv, cv), em)| if cv > 0.0 { inv / cv * em } else { 0.0 })
            .collect())
    }

    fn weights(&self, table: &CompanyTable, method: PortfolioAggregationMethod) -> Result<Vec<f64>> {
        let c = &self.columns;
        match method {
            PortfolioAggregationMethod::Wats => {
                require(table, &c.investment_value)?;
                Ok(table.money_column(&c.investment_value))
            }
            PortfolioAggregationMethod::Tets => self.emissions(table),
            PortfolioAggregationMethod::Mots => self.owned_emissions(table, &c.market_cap),
            PortfolioAggregationMethod::Eots => self.owned_emissions(table, &c.enterprise_value),
            PortfolioAggregationMethod::Ecots => self.owned_emissions(table, &c.ev_plus_cash),
            PortfolioAggregationMethod::Aots => self.owned_emissions(table, &c.total_assets),
            PortfolioAggregationMethod::Rots => self.owned_emissions(table, &c.revenue),
        }
    }
}

impl PortfolioAggregation for DefaultAggregator {
    fn aggregate(
        &self,
        table: &CompanyTable,
        score_column: &str,
        method: PortfolioAggregationMethod,
    ) -> Result<Vec<f64>> {
        require(table, score_column)?;
        if table.is_empty() {
            return Ok(Vec::new());
        }

        let weights = self.weights(table, method)?;
        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            return Err(CoverageError::ZeroPortfolioWeight { method });
        }

        let scores = table.money_column(score_column);
        Ok(weights
            .iter()
            .zip(scores)
            .map(|(w, s)| w / total * s)
            .collect())
    }
}

fn require(table: &CompanyTable, column: &str) -> Result<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(CoverageError::missing_column(column))
    }
}
