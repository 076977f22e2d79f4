//! Domain value objects: ComponentKind, DomainName, SourceRootMarker.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Parsing
//! and the derived string forms live here; path handling lives in
//! `entities::package_location`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension of the bundled template files.
pub const TEMPLATE_EXTENSION: &str = "java.hbs";

/// Extension of the generated source files.
pub const SOURCE_EXTENSION: &str = "java";

// ── ComponentKind ─────────────────────────────────────────────────────────────

/// One of the five generated components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "DTO")]
    Dto,
    Entity,
    Controller,
    Service,
    Repository,
}

impl ComponentKind {
    /// All kinds in generation order.
    pub const ALL: [ComponentKind; 5] = [
        Self::Dto,
        Self::Entity,
        Self::Controller,
        Self::Service,
        Self::Repository,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dto => "DTO",
            Self::Entity => "Entity",
            Self::Controller => "Controller",
            Self::Service => "Service",
            Self::Repository => "Repository",
        }
    }

    /// Template file name, e.g. `Controller.java.hbs`.
    pub fn template_file_name(&self) -> String {
        format!("{}.{TEMPLATE_EXTENSION}", self.as_str())
    }

    /// Generated file name for `domain`.
    ///
    /// The entity takes the bare capitalized name; every other kind appends
    /// its own name as a suffix (`ProductDTO.java`, `ProductService.java`).
    pub fn output_file_name(&self, domain: &DomainName) -> String {
        let base = domain.capitalized();
        match self {
            Self::Entity => format!("{base}.{SOURCE_EXTENSION}"),
            other => format!("{base}{}.{SOURCE_EXTENSION}", other.as_str()),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DomainName ────────────────────────────────────────────────────────────────

/// The user-supplied concept name, e.g. `Product`.
///
/// Surrounding whitespace is trimmed. The name ends up as a directory, so path
/// separators and relative-directory names are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(DomainError::EmptyDomainName);
        }
        if name.contains(['/', '\\']) {
            return Err(DomainError::InvalidDomainName {
                name: name.into(),
                reason: "name cannot contain path separators".into(),
            });
        }
        if name == "." || name == ".." {
            return Err(DomainError::InvalidDomainName {
                name: name.into(),
                reason: "name cannot be a relative directory".into(),
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character upper-cased: `product` -> `Product`.
    pub fn capitalized(&self) -> String {
        map_first_char(&self.0, |c| c.to_uppercase().collect())
    }

    /// First character lower-cased: `Product` -> `product`.
    pub fn lower_first(&self) -> String {
        map_first_char(&self.0, |c| c.to_lowercase().collect())
    }
}

fn map_first_char(s: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = f(first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.0
    }
}

// ── SourceRootMarker ──────────────────────────────────────────────────────────

/// The directory sequence that anchors a package tree, `src/main/java` by
/// default. Matched against whole path components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRootMarker {
    segments: Vec<String>,
}

impl SourceRootMarker {
    pub const DEFAULT: &'static str = "src/main/java";

    /// Parse a `/` or `\` separated marker. Empty segments are ignored.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let segments: Vec<String> = raw
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() || segments.iter().any(|s| s == "." || s == "..") {
            return Err(DomainError::InvalidMarker(raw.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for SourceRootMarker {
    fn default() -> Self {
        Self {
            segments: vec!["src".into(), "main".into(), "java".into()],
        }
    }
}

impl fmt::Display for SourceRootMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl FromStr for SourceRootMarker {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
