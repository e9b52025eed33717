//! Single-pass batch pipeline: fan out per location, normalize, classify,
//! filter on salary, aggregate, dedup, sort, write.
//!
//! Strictly sequential; a scrape error for any location aborts the run with
//! no partial output, while an empty result set just skips that location.

pub mod classify;
pub mod dedup;
pub mod normalize;
pub mod salary;
pub mod sort;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::models::JobRecord;
use crate::scrape::{JobSource, LocationQuery};
use crate::writer;
use classify::PatternSet;

/// Run the full pipeline. Returns the number of records written, or zero
/// when nothing survives filtering (in which case no file is written).
pub async fn run<S: JobSource>(config: &PipelineConfig, source: &S) -> Result<usize> {
    let includes = PatternSet::compile(&config.include_patterns)
        .context("Failed to compile include patterns")?;
    let excludes = PatternSet::compile(&config.exclude_patterns)
        .context("Failed to compile exclude patterns")?;

    let mut aggregate: Vec<JobRecord> = Vec::new();

    for location in &config.locations {
        println!("Scraping {} ...", location);

        let query = LocationQuery {
            sites: config.sites.clone(),
            search_term: config.search_term.clone(),
            location: location.clone(),
            results_wanted: config.results_wanted,
            hours_old: config.hours_old(),
            is_remote: false,
            fetch_description: true,
        };

        let rows = source.scrape(&query).await?;
        if rows.is_empty() {
            info!("No listings returned for {}, skipping", location);
            continue;
        }

        let total = rows.len();
        let mut kept = 0usize;
        for raw in &rows {
            let mut record = normalize::normalize(raw);

            if !classify::is_finance_job(
                record.title.as_deref(),
                record.description.as_deref(),
                &includes,
                &excludes,
            ) {
                continue;
            }

            if let Some(min_salary) = config.min_salary {
                if !salary::meets_minimum(&record, min_salary) {
                    continue;
                }
            }

            record.search_location = Some(location.clone());
            aggregate.push(record);
            kept += 1;
        }
        info!("{}: kept {} of {} listings", location, kept, total);
    }

    if aggregate.is_empty() {
        println!("No results found after filtering.");
        return Ok(0);
    }

    let before = aggregate.len();
    aggregate = dedup::deduplicate(aggregate, &config.dedup_keys);
    if aggregate.len() < before {
        debug!("dedup removed {} records", before - aggregate.len());
    }

    sort::sort_by_date_desc(&mut aggregate);

    let path = config.output_path();
    writer::save_records(&aggregate, &path)?;
    println!(
        "{} Saved {} to {}",
        "✓".green().bold(),
        aggregate.len(),
        path.display()
    );

    Ok(aggregate.len())
}
