//! Date-descending sort
//!
//! `date_posted` values arrive as free-form strings; unparseable or absent
//! dates become null timestamps and sort after every dated record instead
//! of failing the run.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::JobRecord;

/// Parse a posted-date string into a timezone-aware timestamp.
///
/// Accepts RFC 3339, bare dates, and space-separated datetimes; bare values
/// are taken as UTC midnight. Anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

/// Stable descending sort by posted date, null timestamps last.
pub fn sort_by_date_desc(records: &mut Vec<JobRecord>) {
    let mut keyed: Vec<(Option<DateTime<Utc>>, JobRecord)> = records
        .drain(..)
        .map(|record| {
            let key = record.date_posted.as_deref().and_then(parse_timestamp);
            (key, record)
        })
        .collect();
    // None < Some under Option's ordering, so comparing b against a yields
    // newest-first with nulls at the end; Vec::sort_by is stable.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    records.extend(keyed.into_iter().map(|(_, record)| record));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, date_posted: Option<&str>) -> JobRecord {
        JobRecord {
            title: Some(title.to_string()),
            date_posted: date_posted.map(String::from),
            ..Default::default()
        }
    }

    fn titles(records: &[JobRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_deref().unwrap()).collect()
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2025-08-01").is_some());
        assert!(parse_timestamp("2025-08-01 09:30:00").is_some());
        assert!(parse_timestamp("2025-08-01T09:30:00+02:00").is_some());
        assert!(parse_timestamp("two weeks ago").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_descending_with_nulls_last() {
        let mut records = vec![
            record("old", Some("2025-07-01")),
            record("undated", None),
            record("new", Some("2025-08-10")),
            record("garbled", Some("yesterday")),
            record("mid", Some("2025-08-01")),
        ];
        sort_by_date_desc(&mut records);
        assert_eq!(titles(&records), vec!["new", "mid", "old", "undated", "garbled"]);
    }

    #[test]
    fn test_no_dated_record_follows_a_null_date() {
        let mut records = vec![
            record("a", None),
            record("b", Some("2025-01-01")),
            record("c", None),
            record("d", Some("2025-06-01")),
        ];
        sort_by_date_desc(&mut records);
        let keys: Vec<bool> = records
            .iter()
            .map(|r| r.date_posted.as_deref().and_then(parse_timestamp).is_some())
            .collect();
        let first_null = keys.iter().position(|k| !k).unwrap();
        assert!(keys[first_null..].iter().all(|k| !k));
    }

    #[test]
    fn test_null_group_preserves_input_order() {
        let mut records = vec![
            record("first", None),
            record("dated", Some("2025-08-01")),
            record("second", None),
            record("third", Some("not a date")),
        ];
        sort_by_date_desc(&mut records);
        assert_eq!(titles(&records), vec!["dated", "first", "second", "third"]);
    }

    #[test]
    fn test_equal_dates_keep_relative_order() {
        let mut records = vec![
            record("a", Some("2025-08-01")),
            record("b", Some("2025-08-01")),
            record("c", Some("2025-08-02")),
        ];
        sort_by_date_desc(&mut records);
        assert_eq!(titles(&records), vec!["c", "a", "b"]);
    }
}
