//! Company classifier.
//!
//! Resolution happens once per table: the classification column is the first
//! entry of the configured alias list that is present in the schema. After
//! that, classifying a row is a pure function of its validation flag and its
//! classification text.
//!
//! Matching is a plain substring test against every configured pattern, so
//! `"1.5"` also matches text like `"21.5°C"`.

use crate::category::Category;
use crate::config::CoverageConfig;
use crate::table::{flag, text, CompanyTable, Row};
use tracing::debug;

/// Classifier bound to one table's schema.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    validated_column: &'a str,
    classification_column: Option<&'a str>,
    patterns: &'a [String],
}

impl<'a> Classifier<'a> {
    /// Resolve the classification column for `table` using the alias list in `cfg`.
    pub fn resolve(table: &CompanyTable, cfg: &'a CoverageConfig) -> Self {
        let classification_column = cfg
            .columns
            .classification_aliases
            .iter()
            .find(|alias| table.has_column(alias))
            .map(String::as_str);

        debug!(
            target: "coverage",
            column = classification_column.unwrap_or("<none>"),
            "resolved classification column"
        );

        Self {
            validated_column: &cfg.columns.validated,
            classification_column,
            patterns: &cfg.in_transition_patterns,
        }
    }

    /// Name of the classification column in use, if any.
    pub fn classification_column(&self) -> Option<&'a str> {
        self.classification_column
    }

    /// Category for one row.
    pub fn classify(&self, row: &Row) -> Category {
        let validated = flag(row.get(self.validated_column));
        let classification = self
            .classification_column
            .and_then(|c| text(row.get(c)));
        classify(validated, classification.as_deref(), self.patterns)
    }

    /// Categories for every row, in row order.
    pub fn classify_all(&self, table: &CompanyTable) -> Vec<Category> {
        table.rows().iter().map(|r| self.classify(r)).collect()
    }
}

/// Core rule:
/// 1. not validated → `Assessed`
/// 2. validated with text containing any pattern → `InTransition`
/// 3. validated without text, or without a matching pattern → `Assessed`
pub fn classify(validated: bool, classification: Option<&str>, patterns: &[String]) -> Category {
    if !validated {
        return Category::Assessed;
    }
    match classification {
        Some(t) if patterns.iter().any(|p| t.contains(p.as_str())) => Category::InTransition,
        _ => Category::Assessed,
    }
}
