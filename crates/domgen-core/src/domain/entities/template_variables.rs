//! Placeholder substitution for component templates.

use crate::domain::{entities::package_location::PackageLocation, value_objects::DomainName};

/// Replaced with the dotted namespace, e.g. `com.example.demo`.
pub const BASE_PACKAGE: &str = "basePackage";
/// Replaced with the capitalized domain name, e.g. `Product`.
pub const CAPITALIZED_DOMAIN_NAME: &str = "capitalizedDomainName";
/// Replaced with the lower-first domain name, e.g. `product`.
pub const LOWER_CASE_DOMAIN_NAME: &str = "lowerCaseDomainName";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// The three values substituted into every template.
///
/// ## Variables
///
/// | Placeholder                 | Example            |
/// |-----------------------------|--------------------|
/// | `{{basePackage}}`           | `com.example.demo` |
/// | `{{capitalizedDomainName}}` | `Product`          |
/// | `{{lowerCaseDomainName}}`   | `product`          |
///
/// Rendering is a single left-to-right pass, so substituted values are never
/// scanned again. Unknown `{{...}}` sequences are copied through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariables {
    base_package: String,
    capitalized: String,
    lower_first: String,
}

impl TemplateVariables {
    pub fn new(base_package: impl Into<String>, domain: &DomainName) -> Self {
        Self {
            base_package: base_package.into(),
            capitalized: domain.capitalized(),
            lower_first: domain.lower_first(),
        }
    }

    pub fn for_location(location: &PackageLocation, domain: &DomainName) -> Self {
        Self::new(location.namespace(), domain)
    }

    /// Look up a variable by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            BASE_PACKAGE => Some(&self.base_package),
            CAPITALIZED_DOMAIN_NAME => Some(&self.capitalized),
            LOWER_CASE_DOMAIN_NAME => Some(&self.lower_first),
            _ => None,
        }
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    pub fn lower_first(&self) -> &str {
        &self.lower_first
    }

    /// Replace every known placeholder in `template`.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find(OPEN) {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + OPEN.len()..];

            let replaced = after_open.find(CLOSE).and_then(|close| {
                self.get(&after_open[..close])
                    .map(|value| (value, close + CLOSE.len()))
            });

            match replaced {
                Some((value, consumed)) => {
                    out.push_str(value);
                    rest = &after_open[consumed..];
                }
                // Step one brace so `{{{name}}` still matches at the next offset.
                None => {
                    out.push('{');
                    rest = &rest[open + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pkg: &str, name: &str) -> TemplateVariables {
        TemplateVariables::new(pkg, &DomainName::parse(name).unwrap())
    }

    #[test]
    fn renders_all_three_placeholders() {
        let v = vars("com.example.demo", "product");
        let out = v.render(
            "package {{basePackage}}.{{lowerCaseDomainName}};\npublic class {{capitalizedDomainName}} {}",
        );
        assert_eq!(
            out,
            "package com.example.demo.product;\npublic class Product {}"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let v = vars("a.b", "Order");
        let out = v.render("{{capitalizedDomainName}}-{{capitalizedDomainName}}");
        assert_eq!(out, "Order-Order");
    }

    #[test]
    fn lower_first_keeps_tail_casing() {
        let v = vars("x", "OrderItem");
        assert_eq!(v.lower_first(), "orderItem");
        assert_eq!(v.capitalized(), "OrderItem");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let v = vars("x", "Product");
        assert_eq!(v.render("plain text"), "plain text");
    }

    #[test]
    fn unknown_placeholder_passes_through() {
        let v = vars("x", "Product");
        assert_eq!(v.render("{{other}} {{ basePackage }}"), "{{other}} {{ basePackage }}");
    }

    #[test]
    fn unclosed_braces_pass_through() {
        let v = vars("x", "Product");
        assert_eq!(v.render("a {{basePackage"), "a {{basePackage");
    }

    #[test]
    fn extra_leading_brace_is_kept() {
        let v = vars("x", "Product");
        assert_eq!(v.render("{{{capitalizedDomainName}}"), "{Product");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let v = vars("{{capitalizedDomainName}}", "Product");
        assert_eq!(v.render("{{basePackage}}"), "{{capitalizedDomainName}}");
    }

    #[test]
    fn empty_namespace_renders_empty() {
        let v = vars("", "Product");
        assert_eq!(v.render("package {{basePackage}};"), "package ;");
    }
}
