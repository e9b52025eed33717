//! Query fan-out boundary to the job scraping service
//!
//! The pipeline treats scraping as an external collaborator: one query per
//! location, returning zero or more raw tabular rows. [`JobSource`] is the
//! seam tests use to inject fixture result sets.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::error::ScoutError;
use crate::models::RawRecord;

/// Parameters of one per-location scrape query.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    pub sites: Vec<String>,
    pub search_term: String,
    pub location: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub is_remote: bool,
    pub fetch_description: bool,
}

/// Source of raw job listings for a location query.
///
/// An `Ok` empty result means the source had no data for the location; the
/// pipeline skips it. An `Err` aborts the whole run.
#[allow(async_fn_in_trait)]
pub trait JobSource {
    async fn scrape(&self, query: &LocationQuery) -> Result<Vec<RawRecord>>;
}

/// HTTP client against the scrape aggregator service.
pub struct HttpJobSource {
    client: Client,
    base_url: String,
}

impl HttpJobSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; FinscoutBot/1.0)")
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl JobSource for HttpJobSource {
    async fn scrape(&self, query: &LocationQuery) -> Result<Vec<RawRecord>> {
        let url = format!("{}/jobs", self.base_url.trim_end_matches('/'));
        info!("Querying scrape service for {}", query.location);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("site_name", query.sites.join(",")),
                ("search_term", query.search_term.clone()),
                ("location", query.location.clone()),
                ("results_wanted", query.results_wanted.to_string()),
                ("hours_old", query.hours_old.to_string()),
                ("is_remote", query.is_remote.to_string()),
                ("fetch_description", query.fetch_description.to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to scrape service")?;

        if !response.status().is_success() {
            return Err(ScoutError::Scrape(format!(
                "scrape service returned error status {} for {}",
                response.status(),
                query.location
            ))
            .into());
        }

        let rows: Vec<RawRecord> = response
            .json()
            .await
            .context("Failed to parse scrape service response")?;

        info!("{}: {} raw listings", query.location, rows.len());
        Ok(rows)
    }
}
