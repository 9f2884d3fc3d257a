//! Culturally-tagged name generation over a preloaded dataset.
//!
//! `names-core` filters, samples and caches name records held in an
//! immutable [`store::RecordStore`], and provides diacritic-insensitive
//! edit-distance matching for romanized variants. Sampling is uniform and
//! reproducible when a seed is configured; multi-record results are kept in
//! a bounded FIFO cache keyed by the canonical request.

pub mod cache;
pub mod config;
pub mod record;
pub mod selection;
pub mod similarity;
pub mod store;
pub mod types;

pub use config::GeneratorConfig;
pub use record::{Gender, NameRecord};
pub use selection::Generator;
pub use store::RecordStore;
pub use types::{FilterCriteria, GenerationError, Statistics};
