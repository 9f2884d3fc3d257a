pub mod filters;
pub mod sampling;
pub mod scoring;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;

use crate::cache::{CacheKey, CacheStats, ResultCache};
use crate::config::GeneratorConfig;
use crate::record::NameRecord;
use crate::similarity;
use crate::store::RecordStore;
use crate::types::{FilterCriteria, GenerationError, Statistics};
pub use filters::{compile, CompiledFilter};
pub use sampling::Sampler;
pub use scoring::{FlagScorer, PopularityScorer};

/// Answers single, multiple and search requests over a shared record store.
///
/// Multi-record results are cached per request; all mutation goes through
/// `&mut self`, so a check-then-store on the cache is never interleaved.
/// Wrap the generator in a `Mutex` to share it between threads.
pub struct Generator<S = FlagScorer, R = StdRng> {
	store: Arc<RecordStore>,
	scorer: S,
	sampler: Sampler<R>,
	cache: ResultCache,
	config: GeneratorConfig,
	hits: u64,
	misses: u64,
}

impl Generator<FlagScorer, StdRng> {
	pub fn new(store: Arc<RecordStore>, config: GeneratorConfig) -> Self {
		Self::with_scorer(store, config, FlagScorer)
	}
}

impl<S> Generator<S, StdRng>
where
	S: PopularityScorer,
{
	pub fn with_scorer(store: Arc<RecordStore>, config: GeneratorConfig, scorer: S) -> Self {
		let sampler = Sampler::from_seed(config.seed);
		Self::with_sampler(store, config, scorer, sampler)
	}
}

impl<S, R> Generator<S, R>
where
	S: PopularityScorer,
	R: Rng,
{
	/// `config.seed` is ignored here; the sampler brings its own randomness.
	pub fn with_sampler(
		store: Arc<RecordStore>,
		config: GeneratorConfig,
		scorer: S,
		sampler: Sampler<R>,
	) -> Self {
		Self {
			store,
			scorer,
			sampler,
			cache: ResultCache::new(config.cache_capacity),
			config,
			hits: 0,
			misses: 0,
		}
	}

	pub fn store(&self) -> &RecordStore {
		&self.store
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Draw one record uniformly from those matching `criteria`.
	/// Never touches the result cache.
	pub fn generate_one(&mut self, criteria: &FilterCriteria) -> Result<NameRecord, GenerationError> {
		let candidates = collect_candidates(&self.store, criteria, &self.scorer);
		let picked = self.sampler.draw_one(&candidates)?;
		Ok((*picked).clone())
	}

	/// Draw `count` records matching `criteria`, pairwise distinct when `unique`.
	///
	/// Identical requests are answered from the cache. A failing request
	/// leaves the cache unchanged.
	pub fn generate_many(
		&mut self,
		count: usize,
		criteria: &FilterCriteria,
		unique: bool,
	) -> Result<Vec<NameRecord>, GenerationError> {
		let key = CacheKey::new(count, criteria, unique);

		if let Some(cached) = self.cache.get(&key) {
			self.hits += 1;
			log::debug!("result cache hit: {key}");
			return Ok(cached.clone());
		}
		self.misses += 1;
		log::debug!("result cache miss: {key}");

		let candidates = collect_candidates(&self.store, criteria, &self.scorer);
		let drawn: Vec<NameRecord> = self
			.sampler
			.draw_many(&candidates, count, unique)?
			.into_iter()
			.cloned()
			.collect();

		log::debug!(
			"sampled {} of {} candidates (unique: {unique})",
			drawn.len(),
			candidates.len()
		);

		self.cache.put(key, drawn.clone());
		Ok(drawn)
	}

	/// Records matching `criteria` in store order. `limit == 0` means unlimited.
	pub fn search(&self, criteria: &FilterCriteria, limit: usize) -> Vec<NameRecord> {
		let filter = compile(criteria, &self.scorer);
		let limit = if limit == 0 { usize::MAX } else { limit };

		self.store
			.iter()
			.filter(|record| filter.matches(record))
			.take(limit)
			.cloned()
			.collect()
	}

	/// Records whose romanized given name or surname is within `threshold`
	/// edits of `text` after diacritic folding. Defaults to the configured
	/// similarity threshold.
	pub fn search_similar(&self, text: &str, threshold: Option<usize>) -> Vec<NameRecord> {
		let threshold = threshold.unwrap_or(self.config.similarity_threshold);

		self.store
			.iter()
			.filter(|record| {
				similarity::are_similar_within(text, record.given_name_romanized(), threshold)
					|| similarity::are_similar_within(text, record.surname_romanized(), threshold)
			})
			.cloned()
			.collect()
	}

	pub fn statistics(&self) -> Statistics {
		self.store.statistics()
	}

	pub fn clear_cache(&mut self) {
		log::debug!("clearing result cache ({} entries)", self.cache.len());
		self.cache.clear();
	}

	pub fn cache_stats(&self) -> CacheStats {
		CacheStats {
			hits: self.hits,
			misses: self.misses,
			evictions: self.cache.evictions(),
			entries: self.cache.len(),
			capacity: self.cache.capacity(),
		}
	}
}

/// Single scan of the store, keeping records that pass the compiled filter.
fn collect_candidates<'s, S>(
	store: &'s RecordStore,
	criteria: &FilterCriteria,
	scorer: &S,
) -> Vec<&'s NameRecord>
where
	S: PopularityScorer,
{
	let filter = compile(criteria, scorer);
	if filter.is_unrestricted() {
		return store.iter().collect();
	}
	store.iter().filter(|record| filter.matches(record)).collect()
}
