//! Daily financial headlines fetch
//!
//! One GET against NewsAPI's top-headlines endpoint with static query
//! parameters, dumping the raw JSON response verbatim to a file. The API
//! key comes from the `API_KEY` environment variable, optionally loaded
//! from a local `.env` file.

use anyhow::{Context, Result};
use chrono::Local;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ScoutError;

pub const DEFAULT_OUTPUT: &str = "financial_news.json";

#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub endpoint: String,
    /// Comma-separated NewsAPI source identifiers.
    pub sources: String,
    pub language: String,
    pub page_size: u32,
    pub output: PathBuf,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://newsapi.org/v2/top-headlines".to_string(),
            sources: "bloomberg,the-wall-street-journal,financial-post,fortune,reuters,"
                .to_string(),
            language: "en".to_string(),
            page_size: 50,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Fetch today's top headlines. A non-200 response becomes an error
/// carrying the HTTP status and the response body.
pub async fn fetch_financial_news(config: &NewsConfig, api_key: &str) -> Result<Value> {
    let today = Local::now().date_naive().to_string();
    let page_size = config.page_size.to_string();
    info!("Fetching top headlines for {}", today);

    let client = Client::new();
    let response = client
        .get(&config.endpoint)
        .query(&[
            ("sources", config.sources.as_str()),
            ("from", today.as_str()),
            ("to", today.as_str()),
            ("language", config.language.as_str()),
            ("sortBy", "publishedAt"),
            ("apiKey", api_key),
            ("pageSize", page_size.as_str()),
        ])
        .send()
        .await
        .context("Failed to send request to NewsAPI")?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(ScoutError::NewsApi {
            status: status.as_u16(),
            body,
        }
        .into());
    }

    response
        .json()
        .await
        .context("Failed to parse NewsAPI response")
}

/// Write the response pretty-printed, UTF-8, non-ASCII preserved.
pub fn save_news(data: &Value, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(data).context("Failed to serialize news response")?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Entry point for the news subcommand.
pub async fn run(config: &NewsConfig) -> Result<()> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("API_KEY")
        .context("API_KEY is not set (export it or add it to a .env file)")?;

    let data = fetch_financial_news(config, &api_key).await?;
    save_news(&data, &config.output)?;
    println!("Saved headlines to {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_matches_endpoint_contract() {
        let config = NewsConfig::default();
        assert_eq!(config.endpoint, "https://newsapi.org/v2/top-headlines");
        assert!(config.sources.contains("bloomberg"));
        assert!(config.sources.contains("reuters"));
        assert_eq!(config.language, "en");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.output, PathBuf::from("financial_news.json"));
    }

    #[test]
    fn test_save_news_preserves_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        let data = json!({
            "status": "ok",
            "articles": [{ "title": "Marchés: l'euro en hausse — 株価上昇" }]
        });
        save_news(&data, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("l'euro en hausse"));
        assert!(text.contains("株価上昇"));
        // Pretty-printed, not a single line
        assert!(text.lines().count() > 1);
    }

    #[test]
    fn test_non_200_error_surface() {
        let err: anyhow::Error = ScoutError::NewsApi {
            status: 429,
            body: "rate limited".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("rate limited"));
    }
}
