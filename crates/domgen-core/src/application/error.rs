//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ComponentKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template could not be read; the run is aborted before any write.
    #[error("Failed to read template ({kind}): {reason}")]
    TemplateRead { kind: ComponentKind, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state could not be locked.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRead { kind, .. } => vec![
                format!(
                    "The {} template '{}' is missing or unreadable",
                    kind,
                    kind.template_file_name()
                ),
                "Point --templates at a directory holding all five templates".into(),
                "Run `domgen kinds` to see which templates were found".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::LockPoisoned => vec!["An earlier operation panicked; try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRead { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
