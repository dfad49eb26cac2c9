// src/config/coverage.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const ENV_COVERAGE_CONFIG_PATH: &str = "COVERAGE_CONFIG_PATH";
pub const DEFAULT_COVERAGE_CONFIG_TOML: &str = "config/coverage.toml";
pub const DEFAULT_COVERAGE_CONFIG_JSON: &str = "config/coverage.json";

fn default_classification_aliases() -> Vec<String> {
    vec![
        "target_classification".into(),
        "Target Classification".into(),
        "Near Term Classification".into(),
    ]
}

fn default_in_transition_patterns() -> Vec<String> {
    vec!["1.5°C".into(), "1.5°C/1.5°C".into(), "1.5".into()]
}

fn col(s: &str) -> String {
    s.to_string()
}

/// Column names the engine reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub validated: String,
    pub investment_value: String,
    /// Output: category label per company.
    pub category: String,
    /// Scratch: 100/0 indicator for "has a validated target".
    pub target_status: String,
    /// Scratch: 100/0 indicator for "is In Transition".
    pub in_transition_score: String,
    /// Accepted names of the classification text column, first present wins.
    pub classification_aliases: Vec<String>,
    pub ghg_s1s2: String,
    pub ghg_s3: String,
    pub market_cap: String,
    pub enterprise_value: String,
    pub ev_plus_cash: String,
    pub total_assets: String,
    pub revenue: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            validated: col("sbti_validated"),
            investment_value: col("investment_value"),
            category: col("finz_category"),
            target_status: col("sbti_target_status"),
            in_transition_score: col("finz_in_transition_score"),
            classification_aliases: default_classification_aliases(),
            ghg_s1s2: col("ghg_s1s2"),
            ghg_s3: col("ghg_s3"),
            market_cap: col("company_market_cap"),
            enterprise_value: col("company_enterprise_value"),
            ev_plus_cash: col("company_ev_plus_cash"),
            total_assets: col("company_total_assets"),
            revenue: col("company_revenue"),
        }
    }
}

/// Engine configuration. Every field has a default, so partial files are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub columns: ColumnConfig,
    /// Substrings that mark a classification as 1.5°C-aligned (any match wins).
    pub in_transition_patterns: Vec<String>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            columns: ColumnConfig::default(),
            in_transition_patterns: default_in_transition_patterns(),
        }
    }
}

impl CoverageConfig {
    /// Load from an explicit path. Supports TOML or JSON (by extension, TOML otherwise).
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading coverage config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg = match ext.as_str() {
            "json" => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        };
        cfg.with_context(|| format!("parsing coverage config {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $COVERAGE_CONFIG_PATH (must exist)
    /// 2) config/coverage.toml
    /// 3) config/coverage.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_COVERAGE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!(
                "{ENV_COVERAGE_CONFIG_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        let toml_p = PathBuf::from(DEFAULT_COVERAGE_CONFIG_TOML);
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let json_p = PathBuf::from(DEFAULT_COVERAGE_CONFIG_JSON);
        if json_p.exists() {
            return Self::load_from(&json_p);
        }
        Ok(Self::default())
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s)?;
        Ok(cfg.sanitized())
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        Ok(cfg.sanitized())
    }

    /// Drop blank entries; empty lists fall back to the defaults.
    fn sanitized(mut self) -> Self {
        self.columns.classification_aliases = clean_list(self.columns.classification_aliases);
        if self.columns.classification_aliases.is_empty() {
            warn!(target: "coverage", "empty classification_aliases in config, using defaults");
            self.columns.classification_aliases = default_classification_aliases();
        }

        self.in_transition_patterns = clean_list(self.in_transition_patterns);
        if self.in_transition_patterns.is_empty() {
            warn!(target: "coverage", "empty in_transition_patterns in config, using defaults");
            self.in_transition_patterns = default_in_transition_patterns();
        }
        self
    }
}

/// Keep order (the alias list is a priority list), drop blanks and repeats.
fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for it in items {
        if !it.trim().is_empty() && !out.contains(&it) {
            out.push(it);
        }
    }
    out
}
