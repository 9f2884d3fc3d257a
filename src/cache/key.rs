use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::FilterCriteria;

/// Canonical encoding of a multi-record request.
///
/// A pure function of `(count, resolved filter, unique)`: requests that differ
/// only in ineffective constraints (a `Unisex` gender, an empty category set,
/// letter case of case-insensitive text) map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

const ANY: &str = "any";

impl CacheKey {
    pub fn new(count: usize, criteria: &FilterCriteria, unique: bool) -> Self {
        let gender = criteria
            .effective_gender()
            .map_or(ANY.to_string(), |g| g.as_str().to_string());
        let popular = if criteria.popular_only { "true" } else { ANY };
        let min_score = criteria
            .min_popularity
            .map_or("none".to_string(), |s| s.to_string());
        // BTreeSet iteration is already sorted
        let categories = criteria
            .effective_categories()
            .map_or("all".to_string(), |set| {
                set.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(",")
            });

        let parts = [
            format!("count={count}"),
            format!("gender={gender}"),
            format!("origin={}", text(criteria.origin.as_deref())),
            format!("category={}", text(criteria.category.as_deref())),
            format!("popular={popular}"),
            format!("meaning_contains={}", folded(criteria.meaning_contains.as_deref())),
            format!("meaning_exact={}", folded(criteria.meaning_exact.as_deref())),
            format!("prefix={}", folded(criteria.romanized_prefix.as_deref())),
            format!("min_score={min_score}"),
            format!("categories={categories}"),
            format!("unique={unique}"),
        ];

        CacheKey(parts.join("|"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Debug-quoting escapes separators, so user text cannot forge another key.
fn quoted(value: &str) -> String {
    format!("{value:?}")
}

fn text(value: Option<&str>) -> String {
    value.map_or(ANY.to_string(), quoted)
}

fn folded(value: Option<&str>) -> String {
    value.map_or(ANY.to_string(), |v| quoted(&v.to_lowercase()))
}
