//! Metric names and recording helpers.
//!
//! Only the `metrics` facade is used here; the host application decides
//! which recorder/exporter (if any) is installed.

use crate::category::Category;
use metrics::{counter, histogram};

pub const REPORTS_TOTAL: &str = "coverage_reports_total";
pub const COMPANIES_CLASSIFIED_TOTAL: &str = "coverage_companies_classified_total";
pub const SCHEMA_ERRORS_TOTAL: &str = "coverage_schema_errors_total";
pub const BLENDED_SCORE: &str = "coverage_blended_score";

/// Kind label for [`REPORTS_TOTAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Coverage,
    Combined,
    Portfolio,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Coverage => "coverage",
            ReportKind::Combined => "combined",
            ReportKind::Portfolio => "portfolio",
        }
    }
}

pub(crate) fn record_report(kind: ReportKind) {
    counter!(REPORTS_TOTAL, "kind" => kind.as_str()).increment(1);
}

pub(crate) fn record_classified(category: Category, n: usize) {
    if n > 0 {
        counter!(COMPANIES_CLASSIFIED_TOTAL, "category" => category.label()).increment(n as u64);
    }
}

pub(crate) fn record_schema_error() {
    counter!(SCHEMA_ERRORS_TOTAL).increment(1);
}

pub(crate) fn record_blended_score(indicator: &'static str, score: f64) {
    histogram!(BLENDED_SCORE, "indicator" => indicator).record(score);
}
