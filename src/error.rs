// src/error.rs

//! Unified error handling for the course finder.

use std::fmt;

use thiserror::Error;

use crate::services::validation::FieldError;

/// Result type alias for course finder operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog data is malformed
    #[error("Catalog error for {destination}: {message}")]
    Catalog {
        destination: String,
        message: String,
    },

    /// Course id not present in the catalog
    #[error("Course {0} not found")]
    CourseNotFound(u32),

    /// Form input failed one or more field rules
    #[error("Validation error: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// The submission endpoint rejected the payload
    #[error("Submission failed ({status}): {message}")]
    Submission { status: u16, message: String },

    /// A submission is already pending for this form
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a catalog error with the destination it belongs to.
    pub fn catalog(destination: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self::Catalog {
            destination: destination.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a submission error from a response status.
    pub fn submission(status: u16, message: impl Into<String>) -> Self {
        Self::Submission {
            status,
            message: message.into(),
        }
    }

    /// Field errors carried by a validation failure, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::{Field, ValidationError};

    #[test]
    fn test_validation_display_joins_fields() {
        let err = AppError::Validation(vec![
            FieldError::new(Field::Name, ValidationError::Required),
            FieldError::new(Field::Email, ValidationError::InvalidFormat),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: Name is required; Invalid email"
        );
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_non_validation_has_no_field_errors() {
        let err = AppError::submission(502, "Bad Gateway");
        assert!(err.field_errors().is_empty());
        assert_eq!(err.to_string(), "Submission failed (502): Bad Gateway");
    }
}
