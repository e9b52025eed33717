//! Finscout - finance job aggregation and daily headline fetching
//!
//! This library provides a single-pass batch pipeline that collects job
//! listings per location from a scraping service, filters them against
//! finance keyword patterns, deduplicates and sorts the survivors, and
//! writes a spreadsheet. A separate module fetches the day's financial
//! headlines from NewsAPI and dumps the raw JSON response.

pub mod config;
pub mod error;
pub mod models;
pub mod news;
pub mod pipeline;
pub mod scrape;
pub mod writer;

pub use error::Result;
pub use models::{JobField, JobRecord, RawRecord};
