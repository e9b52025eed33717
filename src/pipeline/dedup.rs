//! Duplicate removal over the aggregate table
//!
//! Identity is the configured key tuple; the first-encountered record in
//! aggregate order wins. Null key fields compare equal to null.

use std::collections::HashSet;

use crate::models::{JobField, JobRecord};

/// Retain the first occurrence per distinct key-tuple value.
///
/// An empty key list disables deduplication, mirroring the disabled salary
/// filter behavior.
pub fn deduplicate(records: Vec<JobRecord>, keys: &[JobField]) -> Vec<JobRecord> {
    if keys.is_empty() {
        return records;
    }
    let mut seen: HashSet<Vec<Option<String>>> = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let key: Vec<Option<String>> = keys.iter().map(|k| k.value(record)).collect();
            seen.insert(key)
        })
        .collect()
}
