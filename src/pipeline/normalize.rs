//! Field normalizer
//!
//! The scrape service returns rows whose column set varies per site. This
//! step guarantees every record exposes the full expected column set,
//! defaulting absent or null columns to `None` and never overwriting a
//! present value.

use serde_json::Value;

use crate::models::{JobRecord, RawRecord};

/// Build a uniform [`JobRecord`] from one raw row.
pub fn normalize(raw: &RawRecord) -> JobRecord {
    JobRecord {
        title: text_field(raw, "title"),
        company: text_field(raw, "company"),
        location: text_field(raw, "location"),
        date_posted: text_field(raw, "date_posted"),
        is_remote: bool_field(raw, "is_remote"),
        description: text_field(raw, "description"),
        site: text_field(raw, "site"),
        job_url: text_field(raw, "job_url"),
        salary_min: number_field(raw, "salary_min"),
        salary_max: number_field(raw, "salary_max"),
        job_type: text_field(raw, "job_type"),
        // Tagged by the aggregator, never present on raw rows
        search_location: None,
    }
}

fn text_field(raw: &RawRecord, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

fn number_field(raw: &RawRecord, key: &str) -> Option<f64> {
    match raw.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn bool_field(raw: &RawRecord, key: &str) -> Option<bool> {
    match raw.get(key) {
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
