// Read-only after construction:
// no mutation
// no interior mutability
// safe to share across threads behind an Arc

pub mod fallback;
pub mod loader;

use crate::record::{Gender, NameRecord};
use crate::types::{DatasetVersion, Statistics};

pub use loader::LoadError;

/// The immutable, already-loaded sequence of name records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<NameRecord>,
    version: DatasetVersion,
}

impl RecordStore {
    pub fn new(records: Vec<NameRecord>) -> Self {
        let version = DatasetVersion::from_records(&records);
        Self { records, version }
    }

    /// Store holding the built-in fallback list.
    pub fn fallback() -> Self {
        Self::new(fallback::records())
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.version
    }

    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total: self.records.len(),
            ..Statistics::default()
        };

        for record in &self.records {
            match record.gender() {
                Gender::Male => stats.by_gender.male += 1,
                Gender::Female => stats.by_gender.female += 1,
                Gender::Unisex => stats.by_gender.unisex += 1,
            }
            if record.is_popular() {
                stats.popular_count += 1;
            }
            if let Some(category) = record.category() {
                *stats.by_category.entry(category.to_string()).or_insert(0) += 1;
            }
        }

        stats
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a NameRecord;
    type IntoIter = std::slice::Iter<'a, NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
