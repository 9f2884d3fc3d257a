pub mod gender;
pub mod record;

pub use gender::Gender;
pub use record::{NameRecord, RecordError, RecordFields};
