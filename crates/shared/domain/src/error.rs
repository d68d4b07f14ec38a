//! Domain-level errors.
//!
//! These errors represent business rule violations on listings and their
//! notices. They are independent of infrastructure concerns (database, CLI).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Price text or unit could not be normalised
    #[error("Invalid price: {0}")]
    Price(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a price error
    pub fn price(msg: impl Into<String>) -> Self {
        DomainError::Price(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
