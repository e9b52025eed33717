//! Salary filter
//!
//! Disabled by default (`min_salary: None` in the production config); the
//! pipeline only applies it when a minimum is configured.

use crate::models::JobRecord;

/// True when the best available salary bound meets the minimum.
///
/// Collects the non-null values among {salary_min, salary_max}; with no
/// bounds at all the record is rejected.
pub fn meets_minimum(record: &JobRecord, min_salary: f64) -> bool {
    let mut best: Option<f64> = None;
    for value in [record.salary_min, record.salary_max].into_iter().flatten() {
        best = Some(best.map_or(value, |b| b.max(value)));
    }
    match best {
        Some(value) => value >= min_salary,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(salary_min: Option<f64>, salary_max: Option<f64>) -> JobRecord {
        JobRecord {
            salary_min,
            salary_max,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_bounds_rejects() {
        assert!(!meets_minimum(&record(None, None), 50000.0));
    }

    #[test]
    fn test_best_bound_decides() {
        assert!(meets_minimum(&record(Some(40000.0), Some(60000.0)), 50000.0));
        assert!(!meets_minimum(&record(Some(40000.0), Some(45000.0)), 50000.0));
    }

    #[test]
    fn test_single_bound_is_enough() {
        assert!(meets_minimum(&record(None, Some(50000.0)), 50000.0));
        assert!(meets_minimum(&record(Some(50000.0), None), 50000.0));
        assert!(!meets_minimum(&record(Some(49999.0), None), 50000.0));
    }
}
