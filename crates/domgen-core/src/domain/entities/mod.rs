pub mod generation;
pub mod package_location;
pub mod template_variables;

pub use crate::domain::DomainError;
pub use generation::{GenerationPlan, GenerationReport, GenerationRequest};
pub use package_location::PackageLocation;
pub use template_variables::TemplateVariables;
