//! Unified error handling.
//!
//! Provides a single application error type that maps onto the numeric
//! result codes of the `{code, message, data}` envelope.

use domain::DomainError;
use thiserror::Error;

use crate::response::ResultCode;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Numeric code reported to callers.
    ///
    /// Only a missing record gets its own code; every other failure is
    /// reported as invalid input.
    pub fn result_code(&self) -> ResultCode {
        match self {
            AppError::NotFound => ResultCode::NotFound,
            _ => ResultCode::Invalid,
        }
    }

    /// Get user-facing detail (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Price(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_its_own_code() {
        assert_eq!(AppError::NotFound.result_code(), ResultCode::NotFound);
        assert_eq!(
            AppError::from(DomainError::validation("x")).result_code(),
            ResultCode::Invalid
        );
    }

    #[test]
    fn other_failures_are_invalid() {
        assert_eq!(AppError::validation("x").result_code(), ResultCode::Invalid);
        assert_eq!(AppError::internal("boom").result_code(), ResultCode::Invalid);
    }

    #[test]
    fn price_errors_become_validation() {
        let err: AppError = DomainError::price("price must not be negative").into();
        assert!(matches!(err, AppError::Validation(ref m) if m == "price must not be negative"));
    }

    #[test]
    fn internal_details_are_hidden() {
        assert_eq!(
            AppError::internal("pool exhausted").user_message(),
            "An internal error occurred"
        );
        assert_eq!(AppError::validation("Title is required").user_message(), "Title is required");
    }
}
