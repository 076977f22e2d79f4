// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Domgen.
//!
//! This module contains pure business logic. Filesystem access and template
//! loading are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Path handling is purely lexical; nothing touches the disk
//! - **Immutable entities**: Value objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    generation::{
        FailedFile, GenerationPlan, GenerationReport, GenerationRequest, PlannedFile, SkippedFile,
        WrittenFile,
    },
    package_location::PackageLocation,
    template_variables::{
        BASE_PACKAGE, CAPITALIZED_DOMAIN_NAME, LOWER_CASE_DOMAIN_NAME, TemplateVariables,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    ComponentKind, DomainName, SOURCE_EXTENSION, SourceRootMarker, TEMPLATE_EXTENSION,
};

pub use validation::DomainValidator;
