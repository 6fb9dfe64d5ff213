//! Error types for population simulation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopulationError {
    /// A parameter is out of its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A multi-species step was given no species
    #[error("Species list is empty")]
    EmptySpeciesList,

    /// Parameter vectors disagree with the number of species
    #[error("Dimension mismatch for `{field}`: expected {expected}, found {found}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Result type for population operations.
pub type PopulationResult<T> = Result<T, PopulationError>;

pub(crate) fn require_non_negative(field: &str, value: f64) -> PopulationResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PopulationError::InvalidConfiguration(format!(
            "{field} must be finite and non-negative, got {value}"
        )))
    }
}

pub(crate) fn require_positive(field: &str, value: f64) -> PopulationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PopulationError::InvalidConfiguration(format!(
            "{field} must be positive, got {value}"
        )))
    }
}
