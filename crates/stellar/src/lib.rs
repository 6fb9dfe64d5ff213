//! Stellar types and generation functions.
//!
//! Stars are sampled from a Kroupa (2001) broken power-law IMF and
//! characterized with main-sequence scaling relations.

pub mod generation;
pub mod main_sequence;
pub mod sampling;
pub mod spectral;
pub mod star;
pub mod zones;

#[cfg(test)]
mod generation_test;

// Re-export types
pub use spectral::{LuminosityClass, SpectralType};
pub use star::Star;
pub use zones::{frost_line, HabitableZone};

// Re-export generation functions
pub use generation::generate_star;
pub use sampling::{kroupa_segment_weights, sample_age_fraction, sample_mass_kroupa};
