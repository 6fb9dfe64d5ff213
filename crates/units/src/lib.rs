//! Physical constants, unit newtypes and the shared numeric fallback policy.
//!
//! Every physical formula in the workspace routes its divisions, powers and
//! roots through [`numeric`], so a degenerate input (zero mass, zero
//! luminosity) resolves to one documented fallback instead of `NaN`.

pub mod constants;
pub mod length;
pub mod mass;
pub mod numeric;

#[cfg(test)]
mod mass_test;

pub use length::Length;
pub use mass::Mass;
pub use numeric::{checked_divide, checked_pow, checked_sqrt, finite_or, with_fallback};
