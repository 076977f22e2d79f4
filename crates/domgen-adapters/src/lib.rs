//! Infrastructure adapters for domgen.
//!
//! This crate implements the ports defined in `domgen-core::application::ports`.
//! It contains all I/O: the local filesystem, template directories and the
//! templates bundled into the binary.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use builtin_templates::TemplateOrigin;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::PlaceholderRenderer;
pub use template_store::{DirectoryTemplateStore, InMemoryTemplateStore};
