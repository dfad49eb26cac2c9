//! FINZ alignment categories.
//!
//! The taxonomy is closed and versioned. Version 1 had a third "Other SBT"
//! bucket for WB2°C/2°C targets; version 2 folds those into `Assessed`.
//! Adding a member means bumping [`TAXONOMY_VERSION`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the category taxonomy the reports are computed with.
pub const TAXONOMY_VERSION: u32 = 2;

/// Alignment category of one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Validated target aligned with a 1.5°C pathway.
    InTransition,
    /// Everything else: no target, or a validated but less stringent one.
    Assessed,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::InTransition, Category::Assessed];

    /// Label written into the category column of the augmented table.
    pub fn label(self) -> &'static str {
        match self {
            Category::InTransition => "In Transition",
            Category::Assessed => "Assessed",
        }
    }

    /// Inverse of [`Category::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
