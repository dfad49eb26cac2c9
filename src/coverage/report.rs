//! Report shapes returned by the coverage engine.
//!
//! Two conventions live side by side:
//! - the unweighted category breakdown (simple counts and value sums), and
//! - blended scores produced by a portfolio aggregation method.
//!
//! Field names on the wire follow the FINT/FINZ naming used by downstream
//! consumers: FINT is "any validated SBT target", FINZ "In Transition"
//! means 1.5°C-aligned.

use crate::category::{Category, TAXONOMY_VERSION};
use crate::table::CompanyTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub value: f64,
    pub value_pct: f64,
    pub count: usize,
    pub count_pct: f64,
}

/// Whole-portfolio totals (no percentages).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalTally {
    pub value: f64,
    pub count: usize,
}

/// Category breakdown; serializes as `{ "in_transition": {..}, "assessed": {..}, "total": {..} }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageBreakdown {
    #[serde(flatten)]
    pub categories: BTreeMap<Category, CategoryTally>,
    pub total: TotalTally,
}

impl CoverageBreakdown {
    /// Tally `categories[i]` with `values[i]`.
    ///
    /// Totals come from all rows, not from the partitions. Sums are plain
    /// sequential f64 additions in row order.
    pub fn compute(categories: &[Category], values: &[f64]) -> Self {
        let total = TotalTally {
            value: values.iter().sum(),
            count: categories.len(),
        };

        let mut out = BTreeMap::new();
        for category in Category::ALL {
            let mut count = 0usize;
            let mut value = 0.0f64;
            for (c, v) in categories.iter().zip(values) {
                if *c == category {
                    count += 1;
                    value += v;
                }
            }
            out.insert(
                category,
                CategoryTally {
                    value,
                    value_pct: pct(value, total.value),
                    count,
                    count_pct: pct(count as f64, total.count as f64),
                },
            );
        }

        Self {
            categories: out,
            total,
        }
    }

    /// Tally for one category (zeroes if the category is not present).
    pub fn tally(&self, category: Category) -> CategoryTally {
        self.categories.get(&category).copied().unwrap_or_default()
    }
}

/// `part / whole * 100`, or 0 when `whole` is not positive.
fn pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Flattened headline numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub finz_in_transition_value_pct: f64,
    pub finz_in_transition_count_pct: f64,
    pub total_portfolio_value: f64,
    pub total_companies: usize,
}

impl From<&CoverageBreakdown> for CoverageSummary {
    fn from(b: &CoverageBreakdown) -> Self {
        let it = b.tally(Category::InTransition);
        Self {
            finz_in_transition_value_pct: it.value_pct,
            finz_in_transition_count_pct: it.count_pct,
            total_portfolio_value: b.total.value,
            total_companies: b.total.count,
        }
    }
}

/// Unweighted FINZ coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub taxonomy_version: u32,
    /// Copy of the input with the category column appended.
    pub company_data: CompanyTable,
    pub coverage: CoverageBreakdown,
    pub summary: CoverageSummary,
    /// Category per row, same order as `company_data`.
    #[serde(skip)]
    pub categories: Vec<Category>,
}

impl CoverageReport {
    pub(crate) fn new(company_data: CompanyTable, categories: Vec<Category>, coverage: CoverageBreakdown) -> Self {
        let summary = CoverageSummary::from(&coverage);
        Self {
            taxonomy_version: TAXONOMY_VERSION,
            company_data,
            coverage,
            summary,
            categories,
        }
    }
}

/// Blended FINT/FINZ scores plus the unweighted breakdown, from one classification pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedReport {
    pub taxonomy_version: u32,
    /// Blended score over "has any validated target".
    #[serde(rename = "fint_coverage_pct")]
    pub basic_coverage_pct: f64,
    /// Blended score over "is In Transition".
    #[serde(rename = "finz_in_transition_pct")]
    pub in_transition_pct: f64,
    /// Copy of the input with the category column appended; no scratch columns.
    pub company_data: CompanyTable,
    pub coverage: CoverageBreakdown,
    pub summary: CoverageSummary,
    #[serde(skip)]
    pub categories: Vec<Category>,
}
