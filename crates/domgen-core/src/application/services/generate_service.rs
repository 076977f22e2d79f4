//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Derive the package location from the selected path
//! 2. Load and render all five templates (any failure aborts the run)
//! 3. Write each file independently and report the outcome
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{
        ComponentKind, DomainValidator as validator, GenerationPlan, GenerationReport,
        GenerationRequest, PlannedFile, TemplateVariables,
    },
    error::DomgenResult,
};

/// Main generation service.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use domgen_core::application::{GenerateService, ports::*};
    ///
    /// let service = GenerateService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Render every component without touching the filesystem.
    ///
    /// Fails before any I/O when the marker is missing, and fails naming the
    /// kind when a template cannot be read.
    #[instrument(
        skip_all,
        fields(
            path = %request.selected_path.display(),
            domain = %request.domain,
        )
    )]
    pub fn plan(&self, request: &GenerationRequest) -> DomgenResult<GenerationPlan> {
        let location = validator::validate_request(request)?;
        debug!(
            root = %location.root().display(),
            namespace = %location.namespace(),
            "Package location derived"
        );

        let variables = TemplateVariables::for_location(&location, &request.domain);
        let mut plan = GenerationPlan::new(location, request.domain.clone());

        for kind in ComponentKind::ALL {
            let template = self.store.load(kind)?;
            let content = self.renderer.render(kind, &template, &variables)?;
            debug!(%kind, bytes = content.len(), "Template rendered");
            plan.add(kind, content);
        }

        validator::validate_plan(&plan)?;
        Ok(plan)
    }

    /// Plan and write all five components.
    ///
    /// Returns `Err` only for failures that happen before the first write.
    /// Write failures are collected in the report.
    #[instrument(skip_all, fields(domain = %request.domain))]
    pub fn generate(&self, request: &GenerationRequest) -> DomgenResult<GenerationReport> {
        info!(
            "Generating {} components from {}",
            request.domain,
            self.store.describe()
        );

        let plan = self.plan(request)?;
        let report = self.write_plan(&plan);

        info!(
            written = report.written_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            "Generation finished"
        );
        Ok(report)
    }

    /// Write each planned file, recording successes and failures.
    ///
    /// Existing files are overwritten. A kind that rendered to empty text is
    /// skipped, not written. A failed write does not stop the remaining kinds
    /// and nothing already written is rolled back.
    pub fn write_plan(&self, plan: &GenerationPlan) -> GenerationReport {
        let mut report = GenerationReport::start(plan);

        for file in plan.files() {
            if file.content.is_empty() {
                warn!(kind = %file.kind, "Template is empty, skipping");
                report.record_skipped(file.kind, &file.path);
                continue;
            }

            match self.write_file(file) {
                Ok(()) => {
                    debug!(kind = %file.kind, path = %file.path.display(), "File written");
                    report.record_written(file.kind, &file.path);
                }
                Err(e) => {
                    warn!(kind = %file.kind, error = %e, "File write failed");
                    report.record_failed(file.kind, &file.path, e.to_string());
                }
            }
        }

        report
    }

    fn write_file(&self, file: &PlannedFile) -> DomgenResult<()> {
        if let Some(parent) = file.path.parent() {
            if !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(&file.path, &file.content)
    }
}
