//! # Coverage Engine
//!
//! Pure computation over a caller-owned [`CompanyTable`]: every entry point
//! takes `&CompanyTable` and works on its own copy.
//!
//! - [`CoverageEngine::aggregate_coverage`]: unweighted category breakdown.
//! - [`CoverageEngine::blended_score`]: one indicator blended by an aggregation method.
//! - [`CoverageEngine::portfolio_coverage`]: blended "has a validated target" score.
//! - [`CoverageEngine::combined_report`]: both conventions from a single classification pass.

pub mod report;

use crate::aggregation::{DefaultAggregator, PortfolioAggregation, PortfolioAggregationMethod};
use crate::category::{Category, TAXONOMY_VERSION};
use crate::classify::Classifier;
use crate::config::CoverageConfig;
use crate::error::{CoverageError, Result};
use crate::metrics::{self as m, ReportKind};
use crate::table::{flag, CompanyTable};
use serde_json::Value;
use tracing::{debug, info, warn};

pub use report::{
    CategoryTally, CombinedReport, CoverageBreakdown, CoverageReport, CoverageSummary, TotalTally,
};

/// Per-company condition turned into a 100/0 score column before blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Any SBTi-validated target.
    HasValidatedTarget,
    /// Category is [`Category::InTransition`].
    InTransition,
}

impl Indicator {
    pub fn as_str(self) -> &'static str {
        match self {
            Indicator::HasValidatedTarget => "has_validated_target",
            Indicator::InTransition => "in_transition",
        }
    }

    fn holds(self, validated: bool, category: Category) -> bool {
        match self {
            Indicator::HasValidatedTarget => validated,
            Indicator::InTransition => category == Category::InTransition,
        }
    }
}

/// Table copy with its categories, shared by every step of one call.
struct Working {
    table: CompanyTable,
    categories: Vec<Category>,
}

/// Coverage computations bound to a config and an aggregation collaborator.
#[derive(Debug, Clone)]
pub struct CoverageEngine<A = DefaultAggregator> {
    cfg: CoverageConfig,
    aggregator: A,
}

impl Default for CoverageEngine<DefaultAggregator> {
    fn default() -> Self {
        Self::new(CoverageConfig::default())
    }
}

impl CoverageEngine<DefaultAggregator> {
    /// Engine using the built-in aggregation methods, wired to the same columns.
    pub fn new(cfg: CoverageConfig) -> Self {
        let aggregator = DefaultAggregator::new(cfg.columns.clone());
        Self { cfg, aggregator }
    }

    /// Engine from `CoverageConfig::load_default()` (env var, config/ files, defaults).
    pub fn from_default_config() -> anyhow::Result<Self> {
        Ok(Self::new(CoverageConfig::load_default()?))
    }
}

impl<A: PortfolioAggregation> CoverageEngine<A> {
    pub fn with_aggregator(cfg: CoverageConfig, aggregator: A) -> Self {
        Self { cfg, aggregator }
    }

    pub fn config(&self) -> &CoverageConfig {
        &self.cfg
    }

    /// Copy of `table` with the category column appended.
    pub fn categorize(&self, table: &CompanyTable) -> Result<CompanyTable> {
        self.require(table, &self.cfg.columns.validated)?;
        Ok(self.prepare(table).table)
    }

    /// Unweighted category breakdown: counts, value sums and their percentages.
    pub fn aggregate_coverage(&self, table: &CompanyTable) -> Result<CoverageReport> {
        self.require(table, &self.cfg.columns.validated)?;
        self.require(table, &self.cfg.columns.investment_value)?;

        let working = self.prepare(table);
        let coverage = self.breakdown(&working);
        let report = CoverageReport::new(working.table, working.categories, coverage);

        m::record_report(ReportKind::Coverage);
        info!(
            target: "coverage",
            companies = report.summary.total_companies,
            total_value = report.summary.total_portfolio_value,
            in_transition_value_pct = report.summary.finz_in_transition_value_pct,
            in_transition_count_pct = report.summary.finz_in_transition_count_pct,
            "coverage computed"
        );
        Ok(report)
    }

    /// Blend one indicator with `method`: sum of the collaborator's per-row contributions.
    pub fn blended_score(
        &self,
        table: &CompanyTable,
        indicator: Indicator,
        method: PortfolioAggregationMethod,
    ) -> Result<f64> {
        self.require(table, &self.cfg.columns.validated)?;
        let working = self.prepare(table);
        self.blend(&working, indicator, method)
    }

    /// Part of the portfolio with any SBTi-validated target, blended with `method`.
    pub fn portfolio_coverage(
        &self,
        table: &CompanyTable,
        method: PortfolioAggregationMethod,
    ) -> Result<f64> {
        let score = self.blended_score(table, Indicator::HasValidatedTarget, method)?;
        m::record_report(ReportKind::Portfolio);
        Ok(score)
    }

    /// FINT blended score, FINZ blended score and the unweighted breakdown in one call.
    pub fn combined_report(
        &self,
        table: &CompanyTable,
        method: PortfolioAggregationMethod,
    ) -> Result<CombinedReport> {
        self.require(table, &self.cfg.columns.validated)?;
        self.require(table, &self.cfg.columns.investment_value)?;

        let working = self.prepare(table);
        let basic_coverage_pct = self.blend(&working, Indicator::HasValidatedTarget, method)?;
        let in_transition_pct = self.blend(&working, Indicator::InTransition, method)?;

        let coverage = self.breakdown(&working);
        let summary = CoverageSummary::from(&coverage);

        m::record_report(ReportKind::Combined);
        info!(
            target: "coverage",
            %method,
            companies = summary.total_companies,
            basic_coverage_pct,
            in_transition_pct,
            "combined coverage computed"
        );

        Ok(CombinedReport {
            taxonomy_version: TAXONOMY_VERSION,
            basic_coverage_pct,
            in_transition_pct,
            company_data: working.table,
            coverage,
            summary,
            categories: working.categories,
        })
    }

    // --- internals ---

    fn require(&self, table: &CompanyTable, column: &str) -> Result<()> {
        if table.has_column(column) {
            return Ok(());
        }
        m::record_schema_error();
        Err(CoverageError::missing_column(column))
    }

    /// Copy + classify once + append the category column.
    fn prepare(&self, table: &CompanyTable) -> Working {
        let classifier = Classifier::resolve(table, &self.cfg);
        let categories = classifier.classify_all(table);

        for c in Category::ALL {
            m::record_classified(c, categories.iter().filter(|x| **x == c).count());
        }

        let mut copy = table.clone();
        copy.with_column(
            &self.cfg.columns.category,
            categories.iter().map(|c| Value::from(c.label())),
        );
        Working {
            table: copy,
            categories,
        }
    }

    fn breakdown(&self, working: &Working) -> CoverageBreakdown {
        let values = working.table.money_column(&self.cfg.columns.investment_value);
        CoverageBreakdown::compute(&working.categories, &values)
    }

    fn scratch_column(&self, indicator: Indicator) -> &str {
        match indicator {
            Indicator::HasValidatedTarget => &self.cfg.columns.target_status,
            Indicator::InTransition => &self.cfg.columns.in_transition_score,
        }
    }

    /// Blend the 100/0 indicator over a scratch copy of the working table.
    ///
    /// The working table never sees the scratch column, so a caller column with
    /// the same name passes through as-is. A zero weighting denominator
    /// degrades to a score of 0.
    fn blend(
        &self,
        working: &Working,
        indicator: Indicator,
        method: PortfolioAggregationMethod,
    ) -> Result<f64> {
        let column = self.scratch_column(indicator);
        let validated = &self.cfg.columns.validated;

        let scores: Vec<Value> = working
            .table
            .rows()
            .iter()
            .zip(&working.categories)
            .map(|(row, c)| {
                let on = indicator.holds(flag(row.get(validated)), *c);
                Value::from(if on { 100 } else { 0 })
            })
            .collect();
        let mut scratch = working.table.clone();
        scratch.with_column(column, scores);

        let score: f64 = match self.aggregator.aggregate(&scratch, column, method) {
            Ok(contributions) => contributions.iter().sum(),
            Err(CoverageError::ZeroPortfolioWeight { .. }) => {
                warn!(
                    target: "coverage",
                    indicator = indicator.as_str(),
                    %method,
                    companies = scratch.len(),
                    "portfolio weight is zero, blended score set to 0"
                );
                0.0
            }
            Err(e) => return Err(e),
        };

        m::record_blended_score(indicator.as_str(), score);
        debug!(target: "coverage", indicator = indicator.as_str(), %method, score, "blended score");
        Ok(score)
    }
}
