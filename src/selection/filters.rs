use std::collections::BTreeSet;

use crate::record::{Gender, NameRecord};
use crate::selection::scoring::PopularityScorer;
use crate::types::FilterCriteria;

/// A filter whose constraints have been resolved once, ready to test records.
///
/// Only the constraints present in the criteria are checked; they combine
/// by logical AND.
pub struct CompiledFilter<'a, S: ?Sized> {
    gender: Option<Gender>,
    origin: Option<&'a str>,
    category: Option<&'a str>,
    popular_only: bool,
    meaning_contains: Option<String>,
    meaning_exact: Option<String>,
    romanized_prefix: Option<String>,
    min_popularity: Option<u32>,
    categories: Option<&'a BTreeSet<String>>,
    scorer: &'a S,
}

pub fn compile<'a, S>(criteria: &'a FilterCriteria, scorer: &'a S) -> CompiledFilter<'a, S>
where
    S: PopularityScorer + ?Sized,
{
    CompiledFilter {
        gender: criteria.effective_gender(),
        origin: criteria.origin.as_deref(),
        category: criteria.category.as_deref(),
        popular_only: criteria.popular_only,
        meaning_contains: criteria.meaning_contains.as_deref().map(str::to_lowercase),
        meaning_exact: criteria.meaning_exact.as_deref().map(str::to_lowercase),
        romanized_prefix: criteria.romanized_prefix.as_deref().map(str::to_lowercase),
        min_popularity: criteria.min_popularity,
        categories: criteria.effective_categories(),
        scorer,
    }
}

impl<'a, S> CompiledFilter<'a, S>
where
    S: PopularityScorer + ?Sized,
{
    pub fn matches(&self, record: &NameRecord) -> bool {
        // Unisex names answer both male and female queries.
        if let Some(gender) = self.gender {
            if record.gender() != gender && record.gender() != Gender::Unisex {
                return false;
            }
        }

        if let Some(origin) = self.origin {
            if record.origin() != Some(origin) {
                return false;
            }
        }

        if let Some(category) = self.category {
            if record.category() != Some(category) {
                return false;
            }
        }

        if self.popular_only && !record.is_popular() {
            return false;
        }

        if self.meaning_contains.is_some() || self.meaning_exact.is_some() {
            let Some(meaning) = record.meaning().map(str::to_lowercase) else {
                return false;
            };
            if let Some(fragment) = &self.meaning_contains {
                if !meaning.contains(fragment.as_str()) {
                    return false;
                }
            }
            if let Some(exact) = &self.meaning_exact {
                if meaning != *exact {
                    return false;
                }
            }
        }

        if let Some(prefix) = &self.romanized_prefix {
            if !record
                .given_name_romanized()
                .to_lowercase()
                .starts_with(prefix.as_str())
            {
                return false;
            }
        }

        if let Some(min) = self.min_popularity {
            if !record.is_popular() || self.scorer.score(record) < min {
                return false;
            }
        }

        if let Some(allowed) = self.categories {
            match record.category() {
                Some(category) if allowed.contains(category) => {}
                _ => return false,
            }
        }

        true
    }

    /// `true` when no constraint is present and every record matches.
    pub fn is_unrestricted(&self) -> bool {
        self.gender.is_none()
            && self.origin.is_none()
            && self.category.is_none()
            && !self.popular_only
            && self.meaning_contains.is_none()
            && self.meaning_exact.is_none()
            && self.romanized_prefix.is_none()
            && self.min_popularity.is_none()
            && self.categories.is_none()
    }
}
