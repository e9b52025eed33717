//! Error handling for Finscout
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Core error types for the job pipeline and the news fetcher
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("scrape error: {0}")]
    Scrape(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("NewsAPI request failed: {status} {body}")]
    NewsApi { status: u16, body: String },

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = anyhow::Result<T>;
