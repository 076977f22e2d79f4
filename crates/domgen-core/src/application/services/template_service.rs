//! Template Service - template availability queries.
//!
//! Separated from GenerateService for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{ComponentKind, DomainName},
    error::DomgenResult,
};

/// Information about one component kind for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub kind: ComponentKind,
    pub template_file: String,
    /// Output file name for the sample domain `Example`.
    pub output_file: String,
    pub available: bool,
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Where templates are read from.
    pub fn source(&self) -> String {
        self.store.describe()
    }

    /// One entry per kind, in generation order.
    pub fn list(&self) -> DomgenResult<Vec<TemplateInfo>> {
        let sample = DomainName::parse("Example")?;

        Ok(ComponentKind::ALL
            .into_iter()
            .map(|kind| TemplateInfo {
                kind,
                template_file: kind.template_file_name(),
                output_file: kind.output_file_name(&sample),
                available: self.store.contains(kind),
            })
            .collect())
    }

    /// Kinds whose template is missing.
    pub fn missing(&self) -> Vec<ComponentKind> {
        ComponentKind::ALL
            .into_iter()
            .filter(|kind| !self.store.contains(*kind))
            .collect()
    }
}
