//! Template store backed by a directory of `*.java.hbs` files.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use domgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{ComponentKind, TEMPLATE_EXTENSION},
    error::DomgenResult,
};

/// Reads `<dir>/<Kind>.java.hbs` on every load.
///
/// There is no per-kind fallback: a file missing from the directory is a
/// read failure for that kind.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    dir: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the template file for `kind`.
    pub fn template_path(&self, kind: ComponentKind) -> PathBuf {
        self.dir.join(kind.template_file_name())
    }

    /// Template files in the directory that do not belong to any kind.
    ///
    /// Only the top level is scanned. An unreadable directory yields an
    /// empty list.
    pub fn unrecognized(&self) -> Vec<PathBuf> {
        let suffix = format!(".{TEMPLATE_EXTENSION}");

        WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable template entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?;
                let stem = name.strip_suffix(&suffix)?;
                let known = ComponentKind::ALL.iter().any(|k| k.as_str() == stem);
                (!known).then(|| entry.path().to_path_buf())
            })
            .collect()
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, kind: ComponentKind) -> DomgenResult<String> {
        let path = self.template_path(kind);
        debug!(path = %path.display(), "Reading template");

        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::TemplateRead {
                kind,
                reason: format!("{}: {}", path.display(), e),
            }
            .into()
        })
    }

    fn contains(&self, kind: ComponentKind) -> bool {
        self.template_path(kind).is_file()
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
