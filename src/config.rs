//! Pipeline configuration
//!
//! The production defaults live in the `Default` impl so tests can inject
//! small fixture pattern sets instead of the full keyword lists. An optional
//! TOML file can override any subset of fields.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ScoutError;
use crate::models::JobField;

/// Immutable configuration for one pipeline run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Locations queried one at a time, in order.
    pub locations: Vec<String>,
    /// Job boards the scrape service should query.
    pub sites: Vec<String>,
    pub search_term: String,
    /// Result cap per location query.
    pub results_wanted: u32,
    /// Recency window; the scrape service takes hours, see [`Self::hours_old`].
    pub days_old: u32,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    /// Minimum acceptable salary bound. `None` disables the salary filter.
    pub min_salary: Option<f64>,
    /// Key tuple defining record identity for duplicate removal.
    pub dedup_keys: Vec<JobField>,
    /// Base URL of the scrape service.
    pub scrape_url: String,
    /// Output path; defaults to a timestamped CSV filename at run start.
    pub output: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            locations: vec![
                "United States".to_string(),
                "London, UK".to_string(),
                "Paris, France".to_string(),
            ],
            sites: vec![
                "indeed".to_string(),
                "linkedin".to_string(),
                "glassdoor".to_string(),
                "google".to_string(),
            ],
            search_term: "finance".to_string(),
            results_wanted: 100,
            days_old: 14,
            include_patterns: vec![
                r"\bfinance\b",
                r"\bfinancial\b",
                r"\bfp&a\b",
                r"\btreasury\b",
                r"\bcontroller\b",
                r"\baccounting\b",
                r"\bfinancial analyst\b",
                r"\bfinance manager\b",
                r"\bfinance director\b",
                r"\binvestment\b",
                r"\basset management\b",
                r"\bwealth management\b",
                r"\brisk\b",
                r"\bcredit\b",
                r"\bprivate equity\b",
                r"\bventure capital\b",
                r"\bhedge fund\b",
                r"\binvestment banking\b",
                r"\bequity research\b",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            exclude_patterns: vec![
                r"\bmarketing\b",
                r"\bassistant\b",
                r"\bvolunteer\b",
                r"\bteacher\b",
                r"\bnurse\b",
                r"\bdriver\b",
                r"\bsoftware\b",
                r"\bdeveloper\b",
                r"\bengineer\b",
                r"\bdata scientist\b",
                r"\bml\b",
                r"\bai\b",
                r"\bit support\b",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            min_salary: None,
            dedup_keys: vec![JobField::JobUrl, JobField::Title, JobField::Company],
            scrape_url: "http://127.0.0.1:8765".to_string(),
            output: None,
        }
    }
}

impl PipelineConfig {
    /// Recency window in hours, as the scrape service expects it.
    pub fn hours_old(&self) -> u32 {
        self.days_old * 24
    }

    /// Resolved output path. When unset, a CSV filename stamped with the
    /// current local time: `finance_jobs_<YYYYMMDD_HHMM>.csv`.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(default_output_path)
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "finance_jobs_{}.csv",
        Local::now().format("%Y%m%d_%H%M")
    ))
}

/// Load a TOML override file. Fields absent from the file keep their
/// production defaults.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: PipelineConfig = toml::from_str(&text)
        .map_err(|e| ScoutError::Config(format!("{}: {}", path.display(), e)))?;
    Ok(config)
}
