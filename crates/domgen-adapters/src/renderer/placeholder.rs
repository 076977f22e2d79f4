//! Literal placeholder substitution renderer.

use tracing::{instrument, trace};

use domgen_core::{
    application::ports::TemplateRenderer,
    domain::{ComponentKind, TemplateVariables},
    error::DomgenResult,
};

/// Replaces `{{basePackage}}`, `{{capitalizedDomainName}}` and
/// `{{lowerCaseDomainName}}` in one pass. Anything else is copied verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(kind = %kind))]
    fn render(
        &self,
        kind: ComponentKind,
        template: &str,
        variables: &TemplateVariables,
    ) -> DomgenResult<String> {
        let output = variables.render(template);
        trace!(input = template.len(), output = output.len(), "rendered");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domgen_core::domain::DomainName;

    use crate::builtin_templates;

    fn variables() -> TemplateVariables {
        TemplateVariables::new("com.example.demo", &DomainName::parse("product").unwrap())
    }

    #[test]
    fn renders_bundled_controller() {
        let out = PlaceholderRenderer::new()
            .render(
                ComponentKind::Controller,
                builtin_templates::template(ComponentKind::Controller),
                &variables(),
            )
            .unwrap();

        assert!(out.starts_with("package com.example.demo.Product;"));
        assert!(out.contains("ProductController"));
        assert!(out.contains("/api/products"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let out = PlaceholderRenderer::new()
            .render(ComponentKind::Dto, "class Plain {}", &variables())
            .unwrap();
        assert_eq!(out, "class Plain {}");
    }
}
