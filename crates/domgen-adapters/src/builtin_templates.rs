//! Bundled templates and template directory discovery.
//!
//! # Resolution order
//!
//! [`resolve`] picks the template origin, stopping at the first match:
//!
//! 1. An explicit directory (`--templates` or `templates.dir` in config).
//!    It is used even when it does not exist, so a typo surfaces as a read
//!    failure instead of silently falling back.
//! 2. **`$DOMGEN_TEMPLATES_DIR`**, if it points at an existing directory.
//! 3. **`./templates`**, relative to the current working directory.
//! 4. **`<executable-dir>/templates`**, for installs that ship a
//!    `templates/` directory next to the binary.
//!
//! If none of these exists, the templates compiled into the binary are used.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use domgen_core::{application::ports::TemplateStore, domain::ComponentKind};

use crate::template_store::{DirectoryTemplateStore, InMemoryTemplateStore};

/// Environment variable naming a template directory.
pub const TEMPLATES_DIR_ENV: &str = "DOMGEN_TEMPLATES_DIR";

const DTO: &str = include_str!("../templates/DTO.java.hbs");
const ENTITY: &str = include_str!("../templates/Entity.java.hbs");
const CONTROLLER: &str = include_str!("../templates/Controller.java.hbs");
const SERVICE: &str = include_str!("../templates/Service.java.hbs");
const REPOSITORY: &str = include_str!("../templates/Repository.java.hbs");

/// The bundled template text for `kind`.
pub fn template(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Dto => DTO,
        ComponentKind::Entity => ENTITY,
        ComponentKind::Controller => CONTROLLER,
        ComponentKind::Service => SERVICE,
        ComponentKind::Repository => REPOSITORY,
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Where templates are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// A directory the user named; never falls back.
    Explicit(PathBuf),
    /// A directory found among the standard candidates.
    Discovered(PathBuf),
    /// Templates compiled into the binary.
    Bundled,
}

impl TemplateOrigin {
    pub fn dir(&self) -> Option<&Path> {
        match self {
            Self::Explicit(dir) | Self::Discovered(dir) => Some(dir),
            Self::Bundled => None,
        }
    }

    /// Build the store for this origin.
    pub fn into_store(self) -> Box<dyn TemplateStore> {
        match self {
            Self::Explicit(dir) | Self::Discovered(dir) => {
                Box::new(DirectoryTemplateStore::new(dir))
            }
            Self::Bundled => Box::new(InMemoryTemplateStore::bundled()),
        }
    }
}

/// Pick the template origin using the order described in the module docs.
#[instrument]
pub fn resolve(explicit: Option<&Path>) -> TemplateOrigin {
    if let Some(dir) = explicit {
        debug!(path = %dir.display(), "using explicit templates directory");
        return TemplateOrigin::Explicit(dir.to_path_buf());
    }

    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate templates path");
        if candidate.is_dir() {
            info!(path = %candidate.display(), "templates directory found");
            return TemplateOrigin::Discovered(candidate);
        }
    }

    debug!("no templates directory found, using bundled templates");
    TemplateOrigin::Bundled
}

/// Ordered candidate directories probed when no explicit one is given.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Ok(env_dir) = std::env::var(TEMPLATES_DIR_ENV) {
        if !env_dir.trim().is_empty() {
            paths.push(PathBuf::from(env_dir));
        }
    }

    paths.push(PathBuf::from("templates"));

    if let Some(exe_sibling) = exe_sibling_templates() {
        paths.push(exe_sibling);
    }

    paths
}

fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}

// ── Export ────────────────────────────────────────────────────────────────────

/// Write the bundled templates into `dir` so they can be customized.
///
/// Existing files are kept unless `overwrite` is set. Returns the paths
/// that were written.
pub fn export(dir: &Path, overwrite: bool) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for kind in ComponentKind::ALL {
        let path = dir.join(kind.template_file_name());
        if path.exists() && !overwrite {
            debug!(path = %path.display(), "template exists, keeping it");
            continue;
        }
        std::fs::write(&path, template(kind))?;
        written.push(path);
    }

    Ok(written)
}
