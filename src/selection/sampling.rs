use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::GenerationError;

/// Uniform random selection from a candidate slice.
///
/// The caller's slice is never reordered; unique draws work on a private copy.
#[derive(Debug, Clone)]
pub struct Sampler<R = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Each candidate is returned with probability 1/len.
    pub fn draw_one<'c, T>(&mut self, candidates: &'c [T]) -> Result<&'c T, GenerationError> {
        if candidates.is_empty() {
            return Err(GenerationError::EmptyResult);
        }
        let index = self.rng.random_range(0..candidates.len());
        Ok(&candidates[index])
    }

    /// Draw `count` elements, without replacement when `unique` is set.
    ///
    /// Unique draws pick a random index in the shrinking working set and
    /// `swap_remove` it, so no full shuffle is needed and the result is
    /// pairwise distinct (by position in `candidates`).
    pub fn draw_many<T: Clone>(
        &mut self,
        candidates: &[T],
        count: usize,
        unique: bool,
    ) -> Result<Vec<T>, GenerationError> {
        if candidates.is_empty() {
            return Err(GenerationError::EmptyResult);
        }

        if !unique {
            return Ok((0..count)
                .map(|_| candidates[self.rng.random_range(0..candidates.len())].clone())
                .collect());
        }

        if count > candidates.len() {
            return Err(GenerationError::InsufficientCandidates {
                requested: count,
                available: candidates.len(),
            });
        }

        let mut pool: Vec<&T> = candidates.iter().collect();
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.rng.random_range(0..pool.len());
            drawn.push(pool.swap_remove(index).clone());
        }

        Ok(drawn)
    }
}
