// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ComponentKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep copies)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Domain name is required")]
    EmptyDomainName,

    #[error("Invalid domain name '{name}': {reason}")]
    InvalidDomainName { name: String, reason: String },

    #[error("Invalid source root marker '{0}'")]
    InvalidMarker(String),

    // ========================================================================
    // Location Errors
    // ========================================================================
    #[error("No output location: select a directory or run inside a project")]
    MissingOutputLocation,

    #[error("'{path}' is not inside a '{marker}' source tree")]
    MarkerNotFound { path: String, marker: String },

    #[error("Path segment '{segment}' in '{path}' cannot be used as a package name")]
    InvalidPackageSegment { path: String, segment: String },

    // ========================================================================
    // Plan Invariants
    // ========================================================================
    #[error("Generation plan is missing the {0} component")]
    MissingComponent(ComponentKind),

    #[error("Generation plan lists the {0} component twice")]
    DuplicateComponent(ComponentKind),

    #[error("Planned file {path} escapes the output directory")]
    PathOutsideOutputDir { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyDomainName => vec![
                "Pass the component name as an argument, e.g. `domgen generate Product`".into(),
            ],
            Self::InvalidDomainName { .. } => vec![
                "Use a plain identifier such as Product or orderItem".into(),
                "The name becomes a directory, so it cannot contain path separators".into(),
            ],
            Self::InvalidMarker(_) => vec![
                "The marker is a '/'-separated directory sequence, e.g. src/main/java".into(),
            ],
            Self::MissingOutputLocation => vec![
                "Pass --path <DIR> pointing at a package directory".into(),
                "Or run domgen from inside the package directory".into(),
            ],
            Self::MarkerNotFound { marker, .. } => vec![
                format!("Select a folder below '{marker}', e.g. {marker}/com/example/demo"),
                "Use --marker to change the source root marker".into(),
            ],
            Self::InvalidPackageSegment { .. } => {
                vec!["Select a directory whose path below the marker has no '..' parts".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyDomainName
            | Self::InvalidDomainName { .. }
            | Self::InvalidMarker(_) => ErrorCategory::Validation,
            Self::MissingOutputLocation
            | Self::MarkerNotFound { .. }
            | Self::InvalidPackageSegment { .. } => ErrorCategory::Location,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Location,
    Internal,
}
