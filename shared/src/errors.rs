//! Error types for the Garden Advisor

use thiserror::Error;

/// Errors raised for malformed advisor input
///
/// Out-of-range numbers never produce an error; they are clamped. These
/// variants cover values of the wrong shape entirely.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    #[error("Unknown plant type: {0}")]
    UnknownPlantType(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Validation error: {0}")]
    Validation(String),
}
