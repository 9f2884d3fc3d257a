use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::record::NameRecord;

/// Content fingerprint of an ordered dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetVersion(String);

impl DatasetVersion {
    pub fn from_records(records: &[NameRecord]) -> Self {
        let mut hasher = Sha256::new();

        // One line per record, fields separated by an ASCII unit separator
        // so that ("ab", "c") and ("a", "bc") hash differently.
        for record in records {
            let line = [
                record.given_name(),
                record.surname(),
                record.given_name_romanized(),
                record.surname_romanized(),
                record.gender().as_str(),
                record.meaning().unwrap_or(""),
                record.origin().unwrap_or(""),
                record.category().unwrap_or(""),
                if record.is_popular() { "1" } else { "0" },
            ]
            .join("\u{1f}");
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DatasetVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
