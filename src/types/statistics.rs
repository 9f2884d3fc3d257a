use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
    pub unisex: usize,
}

/// Aggregate counts over a whole dataset.
/// Records without a category are not counted in `by_category`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub by_gender: GenderCounts,
    pub popular_count: usize,
    pub by_category: BTreeMap<String, usize>,
}
