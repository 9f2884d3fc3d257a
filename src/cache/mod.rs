pub mod cache;
pub mod key;

pub use cache::{CacheStats, ResultCache};
pub use key::CacheKey;
