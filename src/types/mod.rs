pub mod identifiers;
pub mod request;
pub mod statistics;

pub use identifiers::DatasetVersion;
pub use request::{FilterCriteria, GenerationError};
pub use statistics::{GenderCounts, Statistics};
