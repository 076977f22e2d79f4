//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `domgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ComponentKind, TemplateVariables};
use crate::error::DomgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `domgen_adapters::filesystem::LocalFilesystem` (production)
/// - `domgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DomgenResult<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> DomgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `domgen_adapters::template_store::DirectoryTemplateStore` (template directory)
/// - `domgen_adapters::template_store::InMemoryTemplateStore` (bundled / testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw template text for `kind`.
    ///
    /// Fails with `ApplicationError::TemplateRead` naming the kind.
    fn load(&self, kind: ComponentKind) -> DomgenResult<String>;

    /// Whether a template for `kind` is available.
    fn contains(&self, kind: ComponentKind) -> bool;

    /// Human-readable origin, for logs and listings.
    fn describe(&self) -> String;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `domgen_adapters::renderer::PlaceholderRenderer` (literal placeholders)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` for `kind` with `variables`.
    fn render(
        &self,
        kind: ComponentKind,
        template: &str,
        variables: &TemplateVariables,
    ) -> DomgenResult<String>;
}
