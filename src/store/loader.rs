use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::RecordStore;
use crate::record::NameRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    // Invalid records (empty required fields, unknown gender) surface here too,
    // since validation runs during deserialization.
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Dataset contains no records")]
    Empty,
}

impl RecordStore {
    /// Load a dataset encoded as a JSON array of records.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let records: Vec<NameRecord> = serde_json::from_reader(reader)?;
        if records.is_empty() {
            return Err(LoadError::Empty);
        }
        let store = RecordStore::new(records);
        log::info!(
            "loaded {} name records ({})",
            store.len(),
            store.version().as_str()
        );
        Ok(store)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(f))
    }

    /// Load from `path`, substituting the built-in fallback list on any failure.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
        match Self::from_path(path.as_ref()) {
            Ok(store) => store,
            Err(err) => {
                log::warn!(
                    "failed to load {}: {err}; using built-in fallback names",
                    path.as_ref().display()
                );
                RecordStore::fallback()
            }
        }
    }
}
