//! System metadata for generation provenance and identification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which planet formation strategy produced the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationMethod {
    /// Per-planet statistical sampling of orbit and mass
    DirectSampling,

    /// Stochastic merging of a protoplanet swarm
    MonteCarloAccretion,

    /// Sampled orbits settled by gravitational integration
    NBody,
}

/// Provenance of a generated system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    /// Name-based identifier derived from the seed string
    pub id: Uuid,

    pub generation_method: GenerationMethod,
}

impl SystemMetadata {
    /// Metadata whose UUID is a v5 name hash of the seed string
    ///
    /// # Example
    /// ```
    /// use star_system::{GenerationMethod, SystemMetadata};
    ///
    /// let a = SystemMetadata::from_seed("test-seed-1", GenerationMethod::NBody);
    /// let b = SystemMetadata::from_seed("test-seed-1", GenerationMethod::NBody);
    /// assert_eq!(a.id, b.id);
    /// ```
    pub fn from_seed(seed: &str, generation_method: GenerationMethod) -> Self {
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()),
            generation_method,
        }
    }

    /// Short catalog designation derived from the UUID
    ///
    /// Format: two uppercase letters and four digits (e.g. "KV-4729").
    /// The same seed always yields the same designation.
    pub fn catalog_name(&self) -> String {
        let [a, b, c, d, ..] = *self.id.as_bytes();
        let letter = |byte: u8| char::from(b'A' + byte % 26);
        let number = u16::from_le_bytes([c, d]) % 10_000;
        format!("{}{}-{:04}", letter(a), letter(b), number)
    }
}
