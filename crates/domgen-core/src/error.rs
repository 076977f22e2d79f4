//! Unified error handling for Domgen Core.
//!
//! [`DomgenError`] wraps domain and application errors so callers match on a
//! single type and still get the layer's suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Domgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum DomgenError {
    /// A domain rule was violated (bad name, marker, or location).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration failed (template read, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl DomgenError {
    /// Suggestions from the wrapped layer.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Location => ErrorCategory::Location,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Location,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type DomgenResult<T> = Result<T, DomgenError>;
