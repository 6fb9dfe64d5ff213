//! Generated star system output types
//!
//! A [`Universe`] owns its star and planets; the habitable planet is held as
//! an index into `planets`, never as a second owner.

pub mod metadata;
pub mod universe;

// Re-export main types at crate root
pub use metadata::{GenerationMethod, SystemMetadata};
pub use universe::{Universe, HABITABLE_SCORE_THRESHOLD};

// Re-export member types for convenience
pub use planetary::{Habitability, Planet};
pub use stellar::Star;

#[cfg(test)]
mod universe_test;
