//! Error handling for the AquaCrop Planner engine

use shared::LookupError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// An id passed to the planner did not resolve in its reference table
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a field validation failure
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_convert_transparently() {
        let err: AppError = LookupError::UnknownCrop("quinoa".to_string()).into();
        assert_eq!(err.to_string(), "unknown crop id: quinoa");
    }

    #[test]
    fn validation_errors_name_the_field() {
        let err = AppError::validation("area_sqm", "Area must be positive");
        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "area_sqm");
                assert_eq!(message, "Area must be positive");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
