//! Suggestion vocabulary for the query input.
//!
//! Rebuilt once per dataset load from every company, title, region and tag
//! in the catalog, plus a fixed set of domain terms. Entries are
//! deduplicated by exact string equality; `"Remote"` the tag and `"remote"`
//! the domain term stay distinct on purpose.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::types::Program;

/// Domain terms that are always suggested regardless of the dataset.
const COMMON_TERMS: [&str; 8] = [
    "paid",
    "unpaid",
    "mentorship",
    "training",
    "hybrid",
    "remote",
    "cohort",
    "full-time",
];

/// Build the deduplicated, sorted suggestion vocabulary for `records`.
#[must_use]
pub fn build_suggestions(records: &[Program]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for program in records {
        if let Some(company) = program.company.as_deref().filter(|c| !c.is_empty()) {
            set.insert(company.to_string());
        }
        if let Some(title) = program.title.as_deref().filter(|t| !t.is_empty()) {
            set.insert(title.to_string());
        }
        for region in &program.region {
            set.insert(region.clone());
        }
        for tag in &program.tags {
            set.insert(tag.clone());
        }
    }
    for term in COMMON_TERMS {
        set.insert(term.to_string());
    }

    let mut suggestions: Vec<String> = set.into_iter().collect();
    suggestions.sort_by(|a, b| locale_ish(a, b));
    suggestions
}

/// Case-insensitive comparison with an exact-string tiebreak, approximating
/// the locale-aware ordering the web frontend used.
fn locale_ish(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
