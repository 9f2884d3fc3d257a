use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::Gender;

/// Independent, optional constraints over a name record.
///
/// Every constraint that is present must pass; absent constraints impose no
/// restriction. A `Unisex` gender constraint and an empty category set are
/// equivalent to no constraint at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub gender: Option<Gender>,
    pub origin: Option<String>,
    pub category: Option<String>,
    pub popular_only: bool,
    /// Case-insensitive substring of the meaning.
    pub meaning_contains: Option<String>,
    /// Case-insensitive exact meaning.
    pub meaning_exact: Option<String>,
    /// Case-insensitive prefix of the romanized given name.
    pub romanized_prefix: Option<String>,
    pub min_popularity: Option<u32>,
    pub categories: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn popular_only(mut self) -> Self {
        self.popular_only = true;
        self
    }

    pub fn meaning_contains(mut self, fragment: impl Into<String>) -> Self {
        self.meaning_contains = Some(fragment.into());
        self
    }

    pub fn meaning_exact(mut self, meaning: impl Into<String>) -> Self {
        self.meaning_exact = Some(meaning.into());
        self
    }

    pub fn romanized_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.romanized_prefix = Some(prefix.into());
        self
    }

    pub fn min_popularity(mut self, score: u32) -> Self {
        self.min_popularity = Some(score);
        self
    }

    pub fn categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// The gender constraint that actually restricts results.
    pub fn effective_gender(&self) -> Option<Gender> {
        self.gender.filter(|g| *g != Gender::Unisex)
    }

    /// The allowed-category set that actually restricts results.
    pub fn effective_categories(&self) -> Option<&BTreeSet<String>> {
        self.categories.as_ref().filter(|set| !set.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("No record matches the supplied filter")]
    EmptyResult,

    #[error("Requested {requested} distinct records but only {available} match")]
    InsufficientCandidates { requested: usize, available: usize },
}
