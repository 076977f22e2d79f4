//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DOMGEN__<SECTION>__<KEY>`, e.g.
//!    `DOMGEN__GENERATION__MARKER=src/main/kotlin`
//! 3. Config file: `--config FILE`, otherwise `.domgen.toml` in the current
//!    directory layered over the platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use domgen_core::domain::SourceRootMarker;

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".domgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespace derivation settings.
    pub generation: GenerationConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// `/`-separated source root marker.
    pub marker: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            marker: SourceRootMarker::DEFAULT.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template directory; unset means discovery, then bundled templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("generation.marker", defaults.generation.marker)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder
                .add_source(File::from(Self::config_path()).required(false))
                .add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("DOMGEN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.domgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "domgen", "domgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file that configuration was actually read from, if any.
    pub fn active_path(config_file: Option<&PathBuf>) -> Option<PathBuf> {
        if let Some(path) = config_file {
            return Some(path.clone());
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let global = Self::config_path();
        global.is_file().then_some(global)
    }

    /// Parsed marker from `generation.marker`.
    pub fn marker(&self) -> anyhow::Result<SourceRootMarker> {
        SourceRootMarker::parse(&self.generation.marker)
            .with_context(|| format!("generation.marker = '{}'", self.generation.marker))
    }

    /// Look up a value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "generation.marker" => Some(self.generation.marker.clone()),
            "templates.dir" => Some(
                self.templates
                    .dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_default(),
            ),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Every key accepted by [`Self::get`].
    pub const KEYS: [&'static str; 4] = [
        "generation.marker",
        "templates.dir",
        "output.no_color",
        "output.format",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_marker_is_java_source_root() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generation.marker, "src/main/java");
        assert_eq!(cfg.marker().unwrap(), SourceRootMarker::default());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("domgen.toml");
        std::fs::write(
            &path,
            "[generation]\nmarker = \"src/main/kotlin\"\n\n[templates]\ndir = \"/opt/templates\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.generation.marker, "src/main/kotlin");
        assert_eq!(cfg.templates.dir, Some(PathBuf::from("/opt/templates")));
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn invalid_marker_is_reported() {
        let mut cfg = AppConfig::default();
        cfg.generation.marker = "..".into();
        assert!(cfg.marker().is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("generation.marker").as_deref(), Some("src/main/java"));
        assert_eq!(cfg.get("templates.dir").as_deref(), Some(""));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert!(cfg.get("does.not.exist").is_none());
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn default_serialises_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[generation]"));
        assert!(text.contains("marker = \"src/main/java\""));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
