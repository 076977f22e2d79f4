//! Implementation of the `domgen generate` command.
//!
//! Responsibility: resolve the selection, domain name, marker and template
//! origin from flags and config, call the core generate service, and display
//! results. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use domgen_adapters::{LocalFilesystem, PlaceholderRenderer, builtin_templates};
use domgen_core::{
    application::GenerateService,
    domain::{
        ComponentKind, DomainError, DomainName, GenerationPlan, GenerationReport,
        GenerationRequest, SourceRootMarker,
    },
};

use crate::{
    cli::{GenerateArgs, OutputFormat, SummaryFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `domgen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the selected directory (`--path`, `--file`, CWD)
/// 2. Resolve the domain name (argument or prompt)
/// 3. Resolve marker and template origin
/// 4. Plan; on `--dry-run` print the plan and stop
/// 5. Write and summarise
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Selection (before any I/O)
    let selected = resolve_selection(args.path.as_deref(), args.file.as_deref())?;
    debug!(path = %selected.display(), "Selection resolved");

    // 2. Domain name
    let domain = resolve_domain_name(args.name.as_deref())?;

    // 3. Marker and templates
    let marker = resolve_marker(args.marker.as_deref(), &config)?;
    let origin = builtin_templates::resolve(
        args.templates
            .as_deref()
            .or(config.templates.dir.as_deref()),
    );
    debug!(?origin, %marker, "Inputs resolved");

    let service = GenerateService::new(
        origin.into_store(),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let request = GenerationRequest::new(selected, domain, marker);
    let json = args.format == SummaryFormat::Json || output.format() == OutputFormat::Json;

    // 4. Plan
    let plan = service.plan(&request)?;

    if args.dry_run {
        return show_plan(&plan, json, &output);
    }

    // 5. Write
    let spinner = output.spinner(&format!("Generating {}...", plan.domain().capitalized()));
    let report = service.write_plan(&plan);
    spinner.finish_and_clear();

    info!(
        run_id = %report.run_id,
        written = report.written_count(),
        skipped = report.skipped_count(),
        failed = report.failed_count(),
        "Generation finished"
    );

    if json {
        output.json(&report)?;
    } else {
        show_report(&report, &output)?;
    }

    if report.failed_count() > 0 {
        return Err(CliError::GenerationIncomplete {
            written: report.written_count(),
            failed: report.failed_count(),
            total: ComponentKind::ALL.len(),
            output_dir: report.output_dir.clone(),
        });
    }

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// `--path` wins, then the directory of `--file`, then the working directory.
/// Relative paths are made absolute against the working directory.
pub fn resolve_selection(path: Option<&Path>, file: Option<&Path>) -> CliResult<PathBuf> {
    let selected = match (path, file) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(file)) => match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
        (None, None) => working_dir(std::env::current_dir())?,
    };

    std::path::absolute(&selected)
        .with_cli_context(|| format!("Failed to resolve '{}'", selected.display()))
}

/// Without the working directory there is nowhere left to write.
fn working_dir(cwd: std::io::Result<PathBuf>) -> CliResult<PathBuf> {
    cwd.map_err(|e| {
        debug!(error = %e, "Working directory unavailable");
        DomainError::MissingOutputLocation.into()
    })
}

/// Use the argument when given, otherwise prompt on a terminal.
pub fn resolve_domain_name(name: Option<&str>) -> CliResult<DomainName> {
    match name {
        Some(raw) => Ok(DomainName::parse(raw)?),
        None if std::io::stdin().is_terminal() => prompt_domain_name(),
        None => Err(DomainError::EmptyDomainName.into()),
    }
}

fn resolve_marker(flag: Option<&str>, config: &AppConfig) -> CliResult<SourceRootMarker> {
    match flag {
        Some(raw) => Ok(SourceRootMarker::parse(raw)?),
        None => config.marker().with_cli_context(|| "Invalid configuration"),
    }
}

#[cfg(feature = "interactive")]
fn prompt_domain_name() -> CliResult<DomainName> {
    let raw: String = dialoguer::Input::new()
        .with_prompt("Domain name")
        .validate_with(|input: &String| -> Result<(), String> {
            DomainName::parse(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: "Failed to read domain name".into(),
            source: Some(Box::new(e)),
        })?;

    Ok(DomainName::parse(&raw)?)
}

#[cfg(not(feature = "interactive"))]
fn prompt_domain_name() -> CliResult<DomainName> {
    Err(DomainError::EmptyDomainName.into())
}

// ── Display ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PlanSummary<'a> {
    domain: &'a DomainName,
    namespace: String,
    output_dir: &'a Path,
    files: Vec<PlanEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct PlanEntry<'a> {
    kind: ComponentKind,
    path: &'a Path,
}

fn show_plan(plan: &GenerationPlan, json: bool, output: &OutputManager) -> CliResult<()> {
    if json {
        let summary = PlanSummary {
            domain: plan.domain(),
            namespace: plan.location().namespace(),
            output_dir: plan.output_dir(),
            files: plan
                .files()
                .map(|f| PlanEntry {
                    kind: f.kind,
                    path: &f.path,
                })
                .collect(),
        };
        return output.json(&summary);
    }

    output.info(&format!(
        "Dry run: would write {} file(s) to {}",
        plan.file_count(),
        plan.output_dir().display()
    ))?;
    output.info(&format!("  Package: {}", display_namespace(&plan.location().namespace())))?;
    for file in plan.files() {
        let note = if file.content.is_empty() { "  (empty template, skipped)" } else { "" };
        output.print(&format!("  {:<10} {}{note}", file.kind, file.path.display()))?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for skipped in &report.skipped {
        output.warning(&format!("{}: template is empty, skipped", skipped.kind))?;
    }
    for failed in &report.failed {
        output.error(&format!("{}: {}", failed.kind, failed.reason))?;
    }

    if report.written_count() == 0 {
        output.warning("No files were generated")?;
    } else {
        output.success(&format!(
            "{} component(s) generated in {}",
            report.written_count(),
            report.output_dir.display()
        ))?;
    }
    Ok(())
}

fn display_namespace(namespace: &str) -> &str {
    if namespace.is_empty() {
        "(default package)"
    } else {
        namespace
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_flag_wins() {
        let selected =
            resolve_selection(Some(Path::new("/a/src/main/java/x")), Some(Path::new("/b/F.java")))
                .unwrap();
        assert_eq!(selected, PathBuf::from("/a/src/main/java/x"));
    }

    #[test]
    fn file_flag_uses_parent_directory() {
        let selected =
            resolve_selection(None, Some(Path::new("/p/src/main/java/com/App.java"))).unwrap();
        assert_eq!(selected, PathBuf::from("/p/src/main/java/com"));
    }

    #[test]
    fn bare_file_name_resolves_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let selected = resolve_selection(None, Some(Path::new("App.java"))).unwrap();
        assert!(selected.starts_with(&cwd));
    }

    #[test]
    fn no_flags_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_selection(None, None).unwrap(), cwd);
    }

    #[test]
    fn lost_working_dir_is_missing_location() {
        let cwd = Err(std::io::Error::from(std::io::ErrorKind::NotFound));
        let err = working_dir(cwd).unwrap_err();

        assert!(matches!(
            err,
            CliError::Core(domgen_core::error::DomgenError::Domain(
                DomainError::MissingOutputLocation
            ))
        ));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("No output location"));
        assert!(err.suggestions().iter().any(|s| s.contains("--path")));
    }

    #[test]
    fn relative_path_is_made_absolute() {
        let selected = resolve_selection(Some(Path::new("src/main/java/com")), None).unwrap();
        assert!(selected.is_absolute());
        assert!(selected.ends_with("src/main/java/com"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = resolve_domain_name(Some("   ")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Domain name is required");
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(resolve_domain_name(Some(" product ")).unwrap().as_str(), "product");
    }

    #[test]
    fn marker_flag_overrides_config() {
        let marker = resolve_marker(Some("src/main/kotlin"), &AppConfig::default()).unwrap();
        assert_eq!(marker.to_string(), "src/main/kotlin");
        assert_eq!(
            resolve_marker(None, &AppConfig::default()).unwrap(),
            SourceRootMarker::default()
        );
    }

    #[test]
    fn empty_namespace_display() {
        assert_eq!(display_namespace(""), "(default package)");
        assert_eq!(display_namespace("com.acme"), "com.acme");
    }
}
