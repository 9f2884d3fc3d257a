use serde::{Deserialize, Serialize};

pub const DEFAULT_CACHE_CAPACITY: usize = 100;
pub const DEFAULT_SIMILARITY_THRESHOLD: usize = 2;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum number of cached multi-record results. 0 disables caching.
    pub cache_capacity: usize,
    /// Edit-distance bound used by similarity search.
    pub similarity_threshold: usize,
    /// Fixed seed for reproducible sampling. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: usize) -> Self {
        self.similarity_threshold = threshold;
        self
    }
}
