use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::seed::{child_scope, derive_seed, ROOT_SCOPE};

/// Deterministic generator state keyed by `(seed, scope)`.
///
/// Streams are owned values: pass `&mut RandomStream` into each generator
/// rather than sharing one globally. Two streams built from the same seed
/// and scope path yield identical sequences.
#[derive(Debug, Clone)]
pub struct RandomStream {
    seed: String,
    scope: String,
    rng: ChaChaRng,
}

impl RandomStream {
    /// Creates the root stream for a seed string.
    pub fn new(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        Self::with_scope(seed, ROOT_SCOPE.to_string())
    }

    fn with_scope(seed: String, scope: String) -> Self {
        let rng = ChaChaRng::seed_from_u64(derive_seed(&seed, &scope));
        Self { seed, scope, rng }
    }

    /// Derives an independent child stream.
    ///
    /// The child depends only on the seed and the full scope path, never on
    /// how far the parent has advanced, so `scoped("trial-7")` returns the
    /// same sequence no matter which trials ran before it.
    ///
    /// # Examples
    /// ```
    /// use seeded_random::RandomStream;
    ///
    /// let mut root = RandomStream::new("seed");
    /// let fresh = root.scoped("population");
    /// root.uniform();
    /// let later = root.scoped("population");
    /// assert_eq!(fresh.scope(), later.scope());
    /// ```
    pub fn scoped(&self, label: &str) -> Self {
        Self::with_scope(self.seed.clone(), child_scope(&self.scope, label))
    }

    /// The seed string this stream was built from.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The full scope path, e.g. `root/population/trial-3`.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Uniform sample in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform sample in `(0, 1]`, safe to pass to `ln`.
    pub(crate) fn uniform_open_zero(&mut self) -> f64 {
        1.0 - self.uniform()
    }

    /// Uniform sample in `[min, max)`; returns `min` for an empty interval.
    pub fn uniform_range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.uniform()
    }

    /// Uniform integer index in `0..len`; `len` must be positive.
    pub(crate) fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
