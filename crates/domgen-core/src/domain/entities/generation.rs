use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    entities::package_location::PackageLocation,
    error::DomainError,
    value_objects::{ComponentKind, DomainName, SourceRootMarker},
};

/// Everything needed to run one generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub selected_path: PathBuf,
    pub domain: DomainName,
    pub marker: SourceRootMarker,
}

impl GenerationRequest {
    pub fn new(
        selected_path: impl Into<PathBuf>,
        domain: DomainName,
        marker: SourceRootMarker,
    ) -> Self {
        Self {
            selected_path: selected_path.into(),
            domain,
            marker,
        }
    }

    /// Derive the package location for this request.
    pub fn location(&self) -> Result<PackageLocation, DomainError> {
        PackageLocation::derive(&self.selected_path, &self.marker)
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub kind: ComponentKind,
    pub path: PathBuf,
    pub content: String,
}

/// The complete rendered output of a run, before any write.
///
/// This is the output of the rendering step. It holds data only; writing is
/// the application layer's job.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub(crate) location: PackageLocation,
    pub(crate) domain: DomainName,
    pub(crate) output_dir: PathBuf,
    pub(crate) files: Vec<PlannedFile>,
}

impl GenerationPlan {
    pub fn new(location: PackageLocation, domain: DomainName) -> Self {
        let output_dir = location.component_dir(&domain);
        Self {
            location,
            domain,
            output_dir,
            files: Vec::with_capacity(ComponentKind::ALL.len()),
        }
    }

    /// Add `content` for `kind` at its conventional file name.
    pub fn add(&mut self, kind: ComponentKind, content: String) {
        let path = self.output_dir.join(kind.output_file_name(&self.domain));
        self.files.push(PlannedFile {
            kind,
            path,
            content,
        });
    }

    pub fn with(mut self, kind: ComponentKind, content: String) -> Self {
        self.add(kind, content);
        self
    }

    /// Every kind exactly once, every path inside the output directory.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.kind) {
                return Err(DomainError::DuplicateComponent(file.kind));
            }
            if file.path.parent() != Some(self.output_dir.as_path()) {
                return Err(DomainError::PathOutsideOutputDir {
                    path: file.path.display().to_string(),
                });
            }
        }

        if let Some(missing) = ComponentKind::ALL.iter().find(|k| !seen.contains(k)) {
            return Err(DomainError::MissingComponent(*missing));
        }

        Ok(())
    }

    pub fn location(&self) -> &PackageLocation {
        &self.location
    }

    pub fn domain(&self) -> &DomainName {
        &self.domain
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// A file that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub kind: ComponentKind,
    pub path: PathBuf,
}

/// A file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub kind: ComponentKind,
    pub path: PathBuf,
    pub reason: String,
}

/// A kind whose template rendered to nothing, so no file was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub kind: ComponentKind,
    pub path: PathBuf,
}

/// Outcome of one generation run.
///
/// Writes are independent, so a report can hold written, skipped and failed
/// entries side by side. Nothing is rolled back.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub domain: DomainName,
    pub namespace: String,
    pub output_dir: PathBuf,
    pub written: Vec<WrittenFile>,
    pub skipped: Vec<SkippedFile>,
    pub failed: Vec<FailedFile>,
}

impl GenerationReport {
    pub fn start(plan: &GenerationPlan) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            domain: plan.domain.clone(),
            namespace: plan.location.namespace(),
            output_dir: plan.output_dir.clone(),
            written: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn record_written(&mut self, kind: ComponentKind, path: impl Into<PathBuf>) {
        self.written.push(WrittenFile {
            kind,
            path: path.into(),
        });
    }

    pub fn record_skipped(&mut self, kind: ComponentKind, path: impl Into<PathBuf>) {
        self.skipped.push(SkippedFile {
            kind,
            path: path.into(),
        });
    }

    pub fn record_failed(
        &mut self,
        kind: ComponentKind,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) {
        self.failed.push(FailedFile {
            kind,
            path: path.into(),
            reason: reason.into(),
        });
    }

    pub fn written_count(&self) -> usize {
        self.written.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// `true` when every planned file was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty() && !self.written.is_empty()
    }
}
