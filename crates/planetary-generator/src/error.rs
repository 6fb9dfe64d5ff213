//! Error types for system generation.

use thiserror::Error;

/// Errors reported before any random draw is made
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// A configuration value is out of its valid range
    #[error("Invalid configuration: `{field}` {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

impl GenerationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenerationError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Fails with [`GenerationError::InvalidConfiguration`] unless `value` is
/// finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> GenerationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GenerationError::invalid(field, format!("must be positive, got {value}")))
    }
}

/// Fails unless `min` and `max` are finite with `0 < min ≤ max`.
pub(crate) fn require_range(field: &'static str, min: f64, max: f64) -> GenerationResult<()> {
    require_positive(field, min)?;
    if max.is_finite() && max >= min {
        Ok(())
    } else {
        Err(GenerationError::invalid(field, format!("needs min ≤ max, got {min}..{max}")))
    }
}
