//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate components" or "list templates".

pub mod generate_service;
pub mod template_service;

pub use generate_service::GenerateService;
pub use template_service::{TemplateInfo, TemplateService};
