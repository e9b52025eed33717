//! Finance classifier
//!
//! A record passes when the concatenated title+description text matches at
//! least one include pattern and no exclude pattern. Patterns are compiled
//! once per run into an immutable [`PatternSet`].

use anyhow::Result;
use regex::{Regex, RegexBuilder};

use crate::error::ScoutError;

/// Ordered set of compiled case-insensitive matchers.
///
/// Pattern strings carry their own `\b` word-boundary anchors, so a term
/// never matches inside a larger word.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p.as_ref())
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        ScoutError::Parse(format!("invalid pattern '{}': {}", p.as_ref(), e))
                            .into()
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Pure per-record predicate: include match AND no exclude match over the
/// concatenated title+description blob. Absent inputs are empty strings.
pub fn is_finance_job(
    title: Option<&str>,
    description: Option<&str>,
    includes: &PatternSet,
    excludes: &PatternSet,
) -> bool {
    let blob = format!("{}\n{}", title.unwrap_or(""), description.unwrap_or(""));
    if !includes.matches(&blob) {
        return false;
    }
    !excludes.matches(&blob)
}
