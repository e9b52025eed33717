//! Record types shared across the pipeline stages

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped row shape returned by the scraping service, one JSON object
/// per listing. Column presence varies per site.
pub type RawRecord = Map<String, Value>;

/// A single normalized job listing.
///
/// Every field is optional; the normalizer guarantees the full column set
/// exists on each record, defaulting absent columns to `None`. Field order
/// here is the output column order (the csv writer derives its header row
/// from it).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobRecord {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub is_remote: Option<bool>,
    pub description: Option<String>,
    pub site: Option<String>,
    pub job_url: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub job_type: Option<String>,
    pub search_location: Option<String>,
}

/// Named columns of a [`JobRecord`], used for dedup key tuples and for
/// the spreadsheet writer's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    Title,
    Company,
    Location,
    DatePosted,
    IsRemote,
    Description,
    Site,
    JobUrl,
    SalaryMin,
    SalaryMax,
    JobType,
    SearchLocation,
}

impl JobField {
    /// Canonical column order, matching [`JobRecord`] field order.
    pub const ALL: [JobField; 12] = [
        JobField::Title,
        JobField::Company,
        JobField::Location,
        JobField::DatePosted,
        JobField::IsRemote,
        JobField::Description,
        JobField::Site,
        JobField::JobUrl,
        JobField::SalaryMin,
        JobField::SalaryMax,
        JobField::JobType,
        JobField::SearchLocation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Company => "company",
            JobField::Location => "location",
            JobField::DatePosted => "date_posted",
            JobField::IsRemote => "is_remote",
            JobField::Description => "description",
            JobField::Site => "site",
            JobField::JobUrl => "job_url",
            JobField::SalaryMin => "salary_min",
            JobField::SalaryMax => "salary_max",
            JobField::JobType => "job_type",
            JobField::SearchLocation => "search_location",
        }
    }

    /// Value of this column on `record`, rendered as text. `None` means
    /// the column is null; null compares equal to null in dedup keys.
    pub fn value(&self, record: &JobRecord) -> Option<String> {
        match self {
            JobField::Title => record.title.clone(),
            JobField::Company => record.company.clone(),
            JobField::Location => record.location.clone(),
            JobField::DatePosted => record.date_posted.clone(),
            JobField::IsRemote => record.is_remote.map(|b| b.to_string()),
            JobField::Description => record.description.clone(),
            JobField::Site => record.site.clone(),
            JobField::JobUrl => record.job_url.clone(),
            JobField::SalaryMin => record.salary_min.map(|v| v.to_string()),
            JobField::SalaryMax => record.salary_max.map(|v| v.to_string()),
            JobField::JobType => record.job_type.clone(),
            JobField::SearchLocation => record.search_location.clone(),
        }
    }
}
