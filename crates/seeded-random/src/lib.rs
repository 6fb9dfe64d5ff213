//! Deterministic random streams keyed by `(seed, scope)`.
//!
//! A [`RandomStream`] is built from a seed string and derives independent
//! child streams by label, so the stellar, planetary and population stages
//! never share a generator position. All samplers draw only from the stream's
//! own ChaCha state.
//!
//! ```
//! use seeded_random::RandomStream;
//!
//! let mut a = RandomStream::new("test-seed-1").scoped("stellar");
//! let mut b = RandomStream::new("test-seed-1").scoped("stellar");
//! assert_eq!(a.uniform(), b.uniform());
//! ```

pub mod distributions;
pub mod seed;
pub mod stream;

#[cfg(test)]
mod distributions_test;

pub use seed::derive_seed;
pub use stream::RandomStream;
